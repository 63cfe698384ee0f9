//! Typed views over loosely typed JSON values.
//!
//! [`FromValue`] uses a generic associated type so a rule can ask for
//! `str`, `f64`, `bool`, `[Value]` or an object map and receive either a
//! borrow or a copy, whichever is natural for the type.

use serde_json::{Map, Value};

use super::context::ValidationContext;
use super::issue::{IssueCode, error};
use super::result::{ValidationResult, fail};

/// A primitive shape that can be read out of a [`Value`].
pub trait FromValue {
    /// Name used in `type_mismatch` issues, e.g. `"string"`.
    const EXPECTED: &'static str;

    /// The typed view, borrowed from the value where possible.
    type Output<'a>;

    /// Returns the typed view, or `None` if the value has another shape.
    fn from_value(value: &Value) -> Option<Self::Output<'_>>;
}

impl FromValue for str {
    const EXPECTED: &'static str = "string";
    type Output<'a> = &'a str;

    #[inline]
    fn from_value(value: &Value) -> Option<&str> {
        value.as_str()
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "number";
    type Output<'a> = f64;

    #[inline]
    fn from_value(value: &Value) -> Option<f64> {
        value.as_f64()
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";
    type Output<'a> = bool;

    #[inline]
    fn from_value(value: &Value) -> Option<bool> {
        value.as_bool()
    }
}

impl FromValue for [Value] {
    const EXPECTED: &'static str = "array";
    type Output<'a> = &'a [Value];

    #[inline]
    fn from_value(value: &Value) -> Option<&[Value]> {
        value.as_array().map(Vec::as_slice)
    }
}

impl FromValue for Map<String, Value> {
    const EXPECTED: &'static str = "object";
    type Output<'a> = &'a Map<String, Value>;

    #[inline]
    fn from_value(value: &Value) -> Option<&Map<String, Value>> {
        value.as_object()
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "any";
    type Output<'a> = &'a Value;

    #[inline]
    fn from_value(value: &Value) -> Option<&Value> {
        Some(value)
    }
}

/// Name of the JSON kind of `value`, used as `actual` in type mismatches.
#[must_use]
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fails with a `type_mismatch` issue carrying `{expected, actual}`.
pub fn type_mismatch<T>(
    expected: &'static str,
    value: &Value,
    ctx: &ValidationContext,
) -> ValidationResult<T> {
    fail(vec![error(
        IssueCode::TypeMismatch,
        ctx,
        [
            ("expected", Value::from(expected)),
            ("actual", Value::from(kind_name(value))),
        ],
    )])
}

/// Converts a bound or measured number into a JSON number, preferring an
/// integer representation when the value has no fractional part.
#[must_use]
pub fn number_value(n: f64) -> Value {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_matching_shapes() {
        assert_eq!(<str as FromValue>::from_value(&json!("a")), Some("a"));
        assert_eq!(<f64 as FromValue>::from_value(&json!(2)), Some(2.0));
        assert_eq!(<bool as FromValue>::from_value(&json!(true)), Some(true));
        assert_eq!(
            <[Value] as FromValue>::from_value(&json!([1])).map(<[Value]>::len),
            Some(1)
        );
        assert!(<Map<String, Value> as FromValue>::from_value(&json!({})).is_some());
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(<str as FromValue>::from_value(&json!(1)), None);
        assert_eq!(<f64 as FromValue>::from_value(&json!("1")), None);
        assert!(<[Value] as FromValue>::from_value(&json!({})).is_none());
    }

    #[test]
    fn type_mismatch_carries_expected_and_actual() {
        let result: ValidationResult<()> =
            type_mismatch("string", &json!(42), &ValidationContext::new());
        let issue = &result.issues()[0];
        assert_eq!(issue.code, IssueCode::TypeMismatch);
        assert_eq!(issue.param("expected"), Some(&json!("string")));
        assert_eq!(issue.param("actual"), Some(&json!("number")));
    }

    #[test]
    fn number_value_prefers_integers() {
        assert_eq!(number_value(10.0), json!(10));
        assert_eq!(number_value(-3.0), json!(-3));
        assert_eq!(number_value(1.5), json!(1.5));
    }
}
