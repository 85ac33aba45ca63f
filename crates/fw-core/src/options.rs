//! Free-form per-unit configuration.
//!
//! Unit kinds take typed config structs; `Options` is the narrow escape
//! hatch for settings those structs do not model (calibration constants,
//! site-specific tags). Bound at construction, read-only afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only configuration mapping with default-returning accessors.
///
/// Lookups never fail: a missing key, or a value of the wrong type,
/// yields the caller-supplied default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, Value>);

impl Options {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an entry, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// True when no entries were bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.0.get(key).and_then(Value::as_u64).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_returns_default() {
        let o = Options::new();
        assert!(o.is_empty());
        assert!(o.get("gain").is_none());
        assert_eq!(o.get_f64("gain", 1.5), 1.5);
        assert_eq!(o.get_u64("window", 10), 10);
        assert!(o.get_bool("invert", true));
        assert_eq!(o.get_str("tag", "none"), "none");
    }

    #[test]
    fn bound_key_wins_over_default() {
        let o = Options::new()
            .with("gain", 2.0)
            .with("window", 4)
            .with("invert", true)
            .with("tag", "kitchen");
        assert_eq!(o.get_f64("gain", 1.5), 2.0);
        assert_eq!(o.get_u64("window", 10), 4);
        assert!(o.get_bool("invert", false));
        assert_eq!(o.get_str("tag", "none"), "kitchen");
    }

    #[test]
    fn wrong_type_falls_back_to_default() {
        let o = Options::new().with("gain", "loud");
        assert_eq!(o.get_f64("gain", 1.5), 1.5);
    }

    #[test]
    fn integer_entries_read_as_f64() {
        let o = Options::new().with("threshold", 3);
        assert_eq!(o.get_f64("threshold", 0.0), 3.0);
    }
}
