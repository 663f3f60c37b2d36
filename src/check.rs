//! Emptiness and equality predicates over optional values.
//!
//! Absent values are modeled with [`Option`]; a string made of whitespace
//! only counts as empty. Every predicate comes in three shapes: a plain
//! boolean check, a `_then` variant that runs a closure when the check
//! holds, and (for strings) an `_or` variant that substitutes a default.

use std::collections::HashMap;

/// Returns `true` when the value is absent or trims down to nothing.
pub fn none_or_empty(value: Option<&str>) -> bool {
    match value {
        Some(text) => text.trim().is_empty(),
        None => true,
    }
}

/// Runs `f` when the value is absent or trims down to nothing.
pub fn none_or_empty_then<F: FnOnce()>(value: Option<&str>, f: F) {
    if none_or_empty(value) {
        f();
    }
}

/// Returns the value when present and non-empty, the default otherwise.
pub fn none_or_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => default,
    }
}

/// Returns `true` when the value is present and not just whitespace.
pub fn some_non_empty(value: Option<&str>) -> bool {
    !none_or_empty(value)
}

/// Runs `f` when the value is present and not just whitespace.
pub fn some_non_empty_then<F: FnOnce()>(value: Option<&str>, f: F) {
    if some_non_empty(value) {
        f();
    }
}

/// Returns the value when present and non-empty, the default otherwise.
pub fn some_non_empty_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    none_or_empty_or(value, default)
}

/// Returns `true` when the slice is absent or holds no elements.
pub fn slice_none_or_empty<T>(value: Option<&[T]>) -> bool {
    value.is_none_or(|items| items.is_empty())
}

/// Runs `f` when the slice is absent or holds no elements.
pub fn slice_none_or_empty_then<T, F: FnOnce()>(value: Option<&[T]>, f: F) {
    if slice_none_or_empty(value) {
        f();
    }
}

/// Returns `true` when the slice is present and holds at least one element.
pub fn slice_some_non_empty<T>(value: Option<&[T]>) -> bool {
    !slice_none_or_empty(value)
}

/// Runs `f` when the slice is present and holds at least one element.
pub fn slice_some_non_empty_then<T, F: FnOnce()>(value: Option<&[T]>, f: F) {
    if slice_some_non_empty(value) {
        f();
    }
}

/// Returns `true` when the map is absent or holds no entries.
pub fn map_none_or_empty<K, V>(value: Option<&HashMap<K, V>>) -> bool {
    value.is_none_or(|map| map.is_empty())
}

/// Runs `f` when the map is absent or holds no entries.
pub fn map_none_or_empty_then<K, V, F: FnOnce()>(value: Option<&HashMap<K, V>>, f: F) {
    if map_none_or_empty(value) {
        f();
    }
}

/// Returns `true` when the map is present and holds at least one entry.
pub fn map_some_non_empty<K, V>(value: Option<&HashMap<K, V>>) -> bool {
    !map_none_or_empty(value)
}

/// Runs `f` when the map is present and holds at least one entry.
pub fn map_some_non_empty_then<K, V, F: FnOnce()>(value: Option<&HashMap<K, V>>, f: F) {
    if map_some_non_empty(value) {
        f();
    }
}

/// Runs `f` when both values are equal.
pub fn eq_then<T: PartialEq, F: FnOnce()>(a: &T, b: &T, f: F) {
    if a == b {
        f();
    }
}

/// Runs `f` when the values differ.
pub fn ne_then<T: PartialEq, F: FnOnce()>(a: &T, b: &T, f: F) {
    if a != b {
        f();
    }
}

/// Case-insensitive equality. Two absent values are considered equal.
pub fn eq_ignore_case(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

/// Runs `f` when both values are equal ignoring case.
pub fn eq_ignore_case_then<F: FnOnce()>(a: Option<&str>, b: Option<&str>, f: F) {
    if eq_ignore_case(a, b) {
        f();
    }
}

/// Runs `f` when the values differ ignoring case.
pub fn ne_ignore_case_then<F: FnOnce()>(a: Option<&str>, b: Option<&str>, f: F) {
    if !eq_ignore_case(a, b) {
        f();
    }
}
