//! Path-based access into a parsed JSON document.
//!
//! [`JsonObject`] resolves dotted paths like
//! `items.item[0].batters.batter[0].type`: segments are separated by `.`,
//! and any segment may carry a trailing `[n]` suffix to index into an array
//! before descending further. The object containing the leaf key (the path
//! prefix, everything before the last `.`) is cached per prefix, so repeated
//! lookups under the same prefix skip the tree walk.
//!
//! Every accessor resolves to a caller-supplied default (or a documented
//! fallback) when the path is missing, an index is out of range, or the leaf
//! has the wrong type. Numeric leaves stored as strings still coerce for the
//! numeric accessors.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};

use crate::error::UtilError;
use crate::time::{self, DateTimeFormat};

/// A parsed JSON document with dotted-path accessors.
pub struct JsonObject {
    root: Value,
    cache: RefCell<HashMap<String, Option<Value>>>,
}

/// Splits a dotted path into the leaf key and the prefix addressing the
/// object that contains it. The prefix doubles as the cache key.
struct KeyPath<'a> {
    key: &'a str,
    prefix: Option<&'a str>,
}

impl<'a> KeyPath<'a> {
    fn new(path: &'a str) -> Self {
        match path.rfind('.') {
            Some(dot) if dot > 0 => Self {
                key: &path[dot + 1..],
                prefix: Some(&path[..dot]),
            },
            _ => Self {
                key: path,
                prefix: None,
            },
        }
    }
}

/// Splits `name[3]` into `("name", 3)`. Returns `None` when the segment
/// carries no index suffix or the index does not parse.
fn split_indexed(segment: &str) -> Option<(&str, usize)> {
    let open = segment.find('[')?;
    if !segment.ends_with(']') {
        return None;
    }
    let index = segment[open + 1..segment.len() - 1].parse().ok()?;
    Some((&segment[..open], index))
}

/// Resolves one path segment against a value, honoring an `[n]` suffix.
fn resolve_segment<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match split_indexed(segment) {
        Some((name, index)) => value.get(name)?.as_array()?.get(index),
        None => value.get(segment),
    }
}

/// Walks a dotted prefix down from `root`.
fn resolve_prefix<'v>(root: &'v Value, prefix: &str) -> Option<&'v Value> {
    let mut current = root;
    for segment in prefix.split('.') {
        current = resolve_segment(current, segment)?;
    }
    Some(current)
}

impl JsonObject {
    /// Wraps an already parsed value.
    pub fn new(root: Value) -> Self {
        Self {
            root,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Parses a JSON document.
    pub fn from_str(json: &str) -> Result<Self, UtilError> {
        let root = serde_json::from_str(json).map_err(|e| UtilError::JsonParse(e.to_string()))?;
        Ok(Self::new(root))
    }

    /// The boolean at `path`, or `false`.
    pub fn opt_bool(&self, path: &str) -> bool {
        self.opt_bool_or(path, false)
    }

    /// The boolean at `path`, or `default`. A string leaf spelling `true`
    /// or `false` (ignoring case) counts.
    pub fn opt_bool_or(&self, path: &str, default: bool) -> bool {
        self.with_leaf(path, |leaf| match leaf? {
            Value::Bool(b) => Some(*b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        })
        .unwrap_or(default)
    }

    /// The integer at `path`, or `0`.
    pub fn opt_i64(&self, path: &str) -> i64 {
        self.opt_i64_or(path, 0)
    }

    /// The integer at `path`, or `default`. Float leaves truncate and
    /// numeric strings parse.
    pub fn opt_i64_or(&self, path: &str, default: i64) -> i64 {
        self.with_leaf(path, |leaf| match leaf? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => parse_number(s).and_then(|n| {
                n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
            }),
            _ => None,
        })
        .unwrap_or(default)
    }

    /// The unsigned integer at `path`, or `0`.
    pub fn opt_u64(&self, path: &str) -> u64 {
        self.opt_u64_or(path, 0)
    }

    /// The unsigned integer at `path`, or `default`.
    pub fn opt_u64_or(&self, path: &str, default: u64) -> u64 {
        self.with_leaf(path, |leaf| match leaf? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => parse_number(s).and_then(|n| n.as_u64()),
            _ => None,
        })
        .unwrap_or(default)
    }

    /// The float at `path`, or NaN.
    pub fn opt_f64(&self, path: &str) -> f64 {
        self.opt_f64_or(path, f64::NAN)
    }

    /// The float at `path`, or `default`.
    pub fn opt_f64_or(&self, path: &str, default: f64) -> f64 {
        self.with_leaf(path, |leaf| match leaf? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_number(s).and_then(|n| n.as_f64()),
            _ => None,
        })
        .unwrap_or(default)
    }

    /// The number at `path` without coercion to a primitive width, or `None`.
    pub fn opt_number(&self, path: &str) -> Option<Number> {
        self.with_leaf(path, |leaf| match leaf? {
            Value::Number(n) => Some(n.clone()),
            Value::String(s) => parse_number(s),
            _ => None,
        })
    }

    /// The number at `path`, or `default`.
    pub fn opt_number_or(&self, path: &str, default: Number) -> Number {
        self.opt_number(path).unwrap_or(default)
    }

    /// The string at `path`, or the empty string. A non-string, non-null
    /// leaf is rendered to text.
    pub fn opt_string(&self, path: &str) -> String {
        self.opt_string_or(path, "")
    }

    /// The string at `path`, or `default`.
    pub fn opt_string_or(&self, path: &str, default: &str) -> String {
        self.with_leaf(path, |leaf| match leaf? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .unwrap_or_else(|| default.to_string())
    }

    /// The leaf at `path` deserialized into `E`, or `None`. Handy for
    /// enums stored as string tags.
    pub fn opt_enum<E: DeserializeOwned>(&self, path: &str) -> Option<E> {
        self.with_leaf(path, |leaf| {
            leaf.and_then(|v| serde_json::from_value(v.clone()).ok())
        })
    }

    /// The leaf at `path` deserialized into `E`, or `default`.
    pub fn opt_enum_or<E: DeserializeOwned>(&self, path: &str, default: E) -> E {
        self.opt_enum(path).unwrap_or(default)
    }

    /// The string leaf at `path` parsed with `pattern`, or `None`.
    pub fn opt_date(
        &self,
        path: &str,
        pattern: &impl DateTimeFormat,
    ) -> Option<chrono::NaiveDateTime> {
        self.with_leaf(path, |leaf| match leaf? {
            Value::String(s) => time::parse(s, pattern).ok(),
            _ => None,
        })
    }

    /// The string leaf at `path` parsed with `pattern`, or `default`.
    pub fn opt_date_or(
        &self,
        path: &str,
        pattern: &impl DateTimeFormat,
        default: chrono::NaiveDateTime,
    ) -> chrono::NaiveDateTime {
        self.opt_date(path, pattern).unwrap_or(default)
    }

    /// The object at `path`, or `None`. The leaf segment itself may carry
    /// an `[n]` index, so `items.item[0]` resolves to the first element of
    /// the `item` array.
    pub fn opt_object(&self, path: &str) -> Option<Value> {
        self.with_container(path, |container, key| {
            let leaf = resolve_segment(container?, key)?;
            leaf.is_object().then(|| leaf.clone())
        })
    }

    /// The array at `path`, or `None`.
    pub fn opt_array(&self, path: &str) -> Option<Vec<Value>> {
        self.with_leaf(path, |leaf| leaf?.as_array().cloned())
    }

    /// Drops the cached prefix resolutions.
    pub fn flush(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Resolves the containing object and hands `(container, leaf key)` to
    /// the closure. The prefix resolution is cached, including misses.
    fn with_container<R>(
        &self,
        path: &str,
        f: impl FnOnce(Option<&Value>, &str) -> R,
    ) -> R {
        let key_path = KeyPath::new(path);
        match key_path.prefix {
            None => f(Some(&self.root), key_path.key),
            Some(prefix) => {
                if !self.cache.borrow().contains_key(prefix) {
                    let resolved = resolve_prefix(&self.root, prefix).cloned();
                    self.cache.borrow_mut().insert(prefix.to_string(), resolved);
                }
                let cache = self.cache.borrow();
                let container = cache.get(prefix).and_then(|v| v.as_ref());
                f(container, key_path.key)
            }
        }
    }

    /// Resolves the leaf value at `path` and hands it to the closure.
    fn with_leaf<R>(&self, path: &str, f: impl FnOnce(Option<&Value>) -> R) -> R {
        self.with_container(path, |container, key| {
            f(container.and_then(|c| c.get(key)))
        })
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let trimmed = text.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Number::from(i));
    }
    trimmed.parse::<f64>().ok().and_then(Number::from_f64)
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
