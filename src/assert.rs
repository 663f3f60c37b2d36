//! Guard conditions that fail with a caller-supplied error.
//!
//! Each guard returns `Result<(), E>` so it composes with `?`; the error
//! closure is only evaluated when the condition fails.

use std::collections::HashMap;

/// Fails with `err` when the value is absent.
pub fn non_null<T, E>(value: Option<&T>, err: impl FnOnce() -> E) -> Result<(), E> {
    match value {
        Some(_) => Ok(()),
        None => Err(err()),
    }
}

/// Fails with `err` when the value is present.
pub fn is_null<T, E>(value: Option<&T>, err: impl FnOnce() -> E) -> Result<(), E> {
    match value {
        Some(_) => Err(err()),
        None => Ok(()),
    }
}

/// Fails with `err` when the expression is `false`.
pub fn is_true<E>(expression: bool, err: impl FnOnce() -> E) -> Result<(), E> {
    if expression { Ok(()) } else { Err(err()) }
}

/// Fails with `err` when the expression is `true`.
pub fn is_false<E>(expression: bool, err: impl FnOnce() -> E) -> Result<(), E> {
    if expression { Err(err()) } else { Ok(()) }
}

/// Fails with `err` when the slice is absent or empty.
pub fn non_empty<T, E>(values: Option<&[T]>, err: impl FnOnce() -> E) -> Result<(), E> {
    is_true(crate::check::slice_some_non_empty(values), err)
}

/// Fails with `err` when the slice is present and holds elements.
pub fn null_or_empty<T, E>(values: Option<&[T]>, err: impl FnOnce() -> E) -> Result<(), E> {
    is_true(crate::check::slice_none_or_empty(values), err)
}

/// Fails with `err` when the map is absent or empty.
pub fn non_empty_map<K, V, E>(
    map: Option<&HashMap<K, V>>,
    err: impl FnOnce() -> E,
) -> Result<(), E> {
    is_true(crate::check::map_some_non_empty(map), err)
}

/// Fails with `err` when the map is present and holds entries.
pub fn null_or_empty_map<K, V, E>(
    map: Option<&HashMap<K, V>>,
    err: impl FnOnce() -> E,
) -> Result<(), E> {
    is_true(crate::check::map_none_or_empty(map), err)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Missing;

    #[test]
    fn non_null_accepts_present_values() {
        assert_eq!(non_null(Some(&1), || Missing), Ok(()));
        assert_eq!(non_null::<i32, _>(None, || Missing), Err(Missing));
    }

    #[test]
    fn is_null_rejects_present_values() {
        assert_eq!(is_null::<i32, _>(None, || Missing), Ok(()));
        assert_eq!(is_null(Some(&1), || Missing), Err(Missing));
    }

    #[test]
    fn boolean_guards() {
        assert!(is_true(1 + 1 == 2, || Missing).is_ok());
        assert!(is_true(false, || Missing).is_err());
        assert!(is_false(false, || Missing).is_ok());
        assert!(is_false(true, || Missing).is_err());
    }

    #[test]
    fn collection_guards() {
        let values = vec![1, 2];
        let empty: Vec<i32> = Vec::new();

        assert!(non_empty(Some(values.as_slice()), || Missing).is_ok());
        assert!(non_empty(Some(empty.as_slice()), || Missing).is_err());
        assert!(null_or_empty(Some(empty.as_slice()), || Missing).is_ok());
        assert!(null_or_empty(Some(values.as_slice()), || Missing).is_err());
    }

    #[test]
    fn map_guards() {
        let mut map = HashMap::new();
        assert!(non_empty_map(Some(&map), || Missing).is_err());
        map.insert("k", "v");
        assert!(non_empty_map(Some(&map), || Missing).is_ok());
        assert!(null_or_empty_map(Some(&map), || Missing).is_err());
        assert!(null_or_empty_map::<&str, &str, _>(None, || Missing).is_ok());
    }

    #[test]
    fn error_closure_is_lazy() {
        let result: Result<(), String> = is_true(true, || panic!("must not be evaluated"));
        assert!(result.is_ok());
    }
}
