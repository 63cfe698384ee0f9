//! Numeric and boolean coercion of form-style strings.

use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, number_value, ok};
use crate::normalizers::Normalize;

const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_WORDS: [&str; 4] = ["false", "0", "no", "off"];

crate::normalizer! {
    /// Parses numeric strings. Numbers pass through; strings that are empty,
    /// unparsable or not finite are returned unchanged.
    pub ToNumber for str;
    normalize(input) { parse_number(input).unwrap_or_else(|| Value::from(input)) }
    fn to_number();
}

fn parse_number(input: &str) -> Option<Value> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let n: f64 = trimmed.parse().ok()?;
    n.is_finite().then(|| number_value(n))
}

/// Coerces boolean-like values.
///
/// Strings in `{true, 1, yes, on}` become `true` and strings in
/// `{false, 0, no, off}` become `false`, trimmed and case-insensitively.
/// Numbers become `n != 0`. Anything else passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ToBoolean;

impl Normalize for ToBoolean {
    fn normalize(&self, value: &Value) -> Value {
        match value {
            Value::String(s) => {
                let word = s.trim().to_ascii_lowercase();
                if TRUE_WORDS.contains(&word.as_str()) {
                    Value::Bool(true)
                } else if FALSE_WORDS.contains(&word.as_str()) {
                    Value::Bool(false)
                } else {
                    value.clone()
                }
            }
            Value::Number(n) => Value::Bool(n.as_f64().is_some_and(|n| n != 0.0)),
            _ => value.clone(),
        }
    }
}

impl Validate for ToBoolean {
    type Output = Value;

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> ValidationResult<Value> {
        ok(self.normalize(value))
    }
}

/// Creates a [`ToBoolean`] normalizer.
#[must_use]
pub const fn to_boolean() -> ToBoolean {
    ToBoolean
}
