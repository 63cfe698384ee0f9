//! Per-field configuration consumed by the presets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Map;

use crate::foundation::Value;
use crate::normalizers::temporal::parse_date;

/// Open key/value configuration for one field.
///
/// Keys are camelCase and type-dependent (`maxLength`, `min`, `choices`,
/// ...). Accessors are lenient: a key that is absent or holds the wrong
/// JSON type reads as `None`, which disables the check it would configure.
/// Unknown keys are kept but ignored.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::registry::FieldConfig;
/// use serde_json::json;
///
/// let config = FieldConfig::new().with("maxLength", 40).with("pattern", "^[A-Z]");
/// assert_eq!(config.max_length(), Some(40));
///
/// let parsed: FieldConfig = serde_json::from_value(json!({"min": 0, "max": "ten"})).unwrap();
/// assert_eq!(parsed.min(), Some(0.0));
/// assert_eq!(parsed.max(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldConfig(Map<String, Value>);

impl FieldConfig {
    /// An empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw access to any key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether no keys are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    fn count(&self, key: &str) -> Option<usize> {
        self.get(key)?.as_u64().and_then(|n| usize::try_from(n).ok())
    }

    fn digits(&self, key: &str) -> Option<u32> {
        self.get(key)?.as_u64().and_then(|n| u32::try_from(n).ok())
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    // ── text ────────────────────────────────────────────────────────────

    /// Fewest characters allowed.
    pub fn min_length(&self) -> Option<usize> {
        self.count("minLength")
    }

    /// Most characters allowed.
    pub fn max_length(&self) -> Option<usize> {
        self.count("maxLength")
    }

    /// Regex the value must match. Compiled by the preset.
    pub fn pattern(&self) -> Option<&str> {
        self.text("pattern")
    }

    /// Name reported with pattern mismatches.
    pub fn format(&self) -> Option<&str> {
        self.text("format")
    }

    // ── numbers ─────────────────────────────────────────────────────────

    /// Inclusive lower bound.
    pub fn min(&self) -> Option<f64> {
        self.get("min")?.as_f64()
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> Option<f64> {
        self.get("max")?.as_f64()
    }

    /// Maximum number of significant digits.
    pub fn precision(&self) -> Option<u32> {
        self.digits("precision")
    }

    /// Maximum number of digits after the decimal point.
    pub fn scale(&self) -> Option<u32> {
        self.digits("scale")
    }

    // ── choices ─────────────────────────────────────────────────────────

    /// Allowed values. Must be an array.
    pub fn choices(&self) -> Option<&[Value]> {
        self.get("choices")?.as_array().map(Vec::as_slice)
    }

    /// Fewest entries a multi-select may hold.
    pub fn min_selections(&self) -> Option<usize> {
        self.count("minSelections")
    }

    /// Most entries a multi-select may hold.
    pub fn max_selections(&self) -> Option<usize> {
        self.count("maxSelections")
    }

    /// Whether multi-selects must not repeat entries.
    pub fn unique(&self) -> bool {
        self.flag("unique")
    }

    // ── dates and references ────────────────────────────────────────────

    /// Earliest allowed date, `YYYY-MM-DD`. Unparseable values read as `None`.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.text("minDate").and_then(parse_date)
    }

    /// Latest allowed date, `YYYY-MM-DD`. Unparseable values read as `None`.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.text("maxDate").and_then(parse_date)
    }

    /// Whether a relation holds several ids.
    pub fn multiple(&self) -> bool {
        self.flag("multiple")
    }
}

impl From<Map<String, Value>> for FieldConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: Value) -> FieldConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_config_disables_everything() {
        let config = FieldConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.min_length(), None);
        assert_eq!(config.choices(), None);
        assert!(!config.unique());
        assert!(!config.multiple());
    }

    #[test]
    fn wrong_types_read_as_absent() {
        let config = parse(json!({
            "maxLength": "20",
            "min": true,
            "choices": "a,b",
            "precision": -1,
            "unique": "yes",
            "minDate": "yesterday",
        }));
        assert_eq!(config.max_length(), None);
        assert_eq!(config.min(), None);
        assert_eq!(config.choices(), None);
        assert_eq!(config.precision(), None);
        assert!(!config.unique());
        assert_eq!(config.min_date(), None);
    }

    #[test]
    fn typed_accessors() {
        let config = parse(json!({
            "minLength": 2,
            "max": 9.5,
            "scale": 2,
            "choices": ["a", "b"],
            "maxSelections": 3,
            "unique": true,
            "maxDate": "2030-01-01",
            "somethingElse": {"ignored": true},
        }));
        assert_eq!(config.min_length(), Some(2));
        assert_eq!(config.max(), Some(9.5));
        assert_eq!(config.scale(), Some(2));
        assert_eq!(config.choices(), Some(&[json!("a"), json!("b")][..]));
        assert_eq!(config.max_selections(), Some(3));
        assert!(config.unique());
        assert_eq!(config.max_date(), NaiveDate::from_ymd_opt(2030, 1, 1));
    }

    #[test]
    fn serializes_as_a_plain_object() {
        let config = FieldConfig::new().with("min", 0).with("max", 10);
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({"min": 0, "max": 10}));
    }
}
