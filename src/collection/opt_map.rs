//! Numeric reads over maps of loosely typed values.
//!
//! Configuration and payload maps often hold numbers that arrive either as
//! JSON numbers or as numeric strings. [`OptValueMap`] reads them uniformly:
//! numbers coerce directly, numeric strings are parsed, and anything else
//! falls back to the default.

use std::collections::HashMap;
use std::hash::Hash;

use serde_json::Value;

use crate::number;

/// Coercing numeric reads keyed like [`HashMap::get`].
pub trait OptValueMap<K> {
    /// The value under `key` as `i64`, or `0`.
    fn opt_i64(&self, key: &K) -> i64 {
        self.opt_i64_or(key, 0)
    }

    /// The value under `key` as `i64`, or `default`.
    fn opt_i64_or(&self, key: &K, default: i64) -> i64;

    /// The value under `key` as `u64`, or `0`.
    fn opt_u64(&self, key: &K) -> u64 {
        self.opt_u64_or(key, 0)
    }

    /// The value under `key` as `u64`, or `default`.
    fn opt_u64_or(&self, key: &K, default: u64) -> u64;

    /// The value under `key` as `f64`, or `0.0`.
    fn opt_f64(&self, key: &K) -> f64 {
        self.opt_f64_or(key, 0.0)
    }

    /// The value under `key` as `f64`, or `default`.
    fn opt_f64_or(&self, key: &K, default: f64) -> f64;
}

impl<K: Eq + Hash> OptValueMap<K> for HashMap<K, Value> {
    fn opt_i64_or(&self, key: &K, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(default),
            Some(Value::String(s)) if number::is_number(s.trim()) => s
                .trim()
                .parse::<f64>()
                .map(|f| f as i64)
                .unwrap_or(default),
            _ => default,
        }
    }

    fn opt_u64_or(&self, key: &K, default: u64) -> u64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
                .unwrap_or(default),
            Some(Value::String(s)) if number::is_number(s.trim()) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| *f >= 0.0)
                .map(|f| f as u64)
                .unwrap_or(default),
            _ => default,
        }
    }

    fn opt_f64_or(&self, key: &K, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) if number::is_number(s.trim()) => {
                s.trim().parse().unwrap_or(default)
            }
            _ => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;

    use super::OptValueMap;

    fn sample() -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("count".to_string(), json!(12));
        map.insert("ratio".to_string(), json!(0.75));
        map.insert("textual".to_string(), json!("34"));
        map.insert("decimal_text".to_string(), json!(" 3.5 "));
        map.insert("negative".to_string(), json!(-7));
        map.insert("words".to_string(), json!("not a number"));
        map.insert("flag".to_string(), json!(true));
        map
    }

    #[test]
    fn numbers_coerce_directly() {
        let map = sample();
        assert_eq!(map.opt_i64(&"count".to_string()), 12);
        assert_eq!(map.opt_u64(&"count".to_string()), 12);
        assert_eq!(map.opt_f64(&"ratio".to_string()), 0.75);
        assert_eq!(map.opt_i64(&"ratio".to_string()), 0);
        assert_eq!(map.opt_i64(&"negative".to_string()), -7);
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let map = sample();
        assert_eq!(map.opt_i64(&"textual".to_string()), 34);
        assert_eq!(map.opt_f64(&"decimal_text".to_string()), 3.5);
        assert_eq!(map.opt_i64(&"decimal_text".to_string()), 3);
    }

    #[test]
    fn everything_else_yields_the_default() {
        let map = sample();
        assert_eq!(map.opt_i64(&"words".to_string()), 0);
        assert_eq!(map.opt_i64_or(&"words".to_string(), -1), -1);
        assert_eq!(map.opt_f64_or(&"flag".to_string(), 1.5), 1.5);
        assert_eq!(map.opt_u64_or(&"negative".to_string(), 9), 9);
        assert_eq!(map.opt_u64_or(&"missing".to_string(), 8), 8);
    }
}
