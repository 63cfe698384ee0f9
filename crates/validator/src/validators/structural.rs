//! JSON structure rules.
//!
//! A [`Value`] is serializable by construction, so [`JsonSerializable`]
//! mostly guards nesting depth. [`probe_serializable`] covers arbitrary
//! `Serialize` types, whose serializers can fail, and turns any failure into
//! an issue instead of an error.

use serde::Serialize;

use crate::foundation::{
    IssueCode, Validate, ValidationContext, ValidationResult, Value, error, fail, kind_name, ok,
};

/// Deepest nesting accepted by default, matching `serde_json`'s parser limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Accepts any JSON value nested no deeper than `max_depth` arrays/objects.
///
/// `null`, booleans, numbers and strings always pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonSerializable {
    /// Maximum container nesting.
    pub max_depth: usize,
}

impl Default for JsonSerializable {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Validate for JsonSerializable {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if !matches!(value, Value::Array(_) | Value::Object(_)) {
            return ok(value.clone());
        }
        if exceeds_depth(value, self.max_depth) {
            return fail(vec![error(
                IssueCode::JsonInvalidStructure,
                ctx,
                [("maxDepth", Value::from(self.max_depth))],
            )]);
        }
        probe_serializable(value, ctx)
    }
}

/// Creates a [`JsonSerializable`] rule with the default depth limit.
#[must_use]
pub fn json_serializable() -> JsonSerializable {
    JsonSerializable::default()
}

/// Walks containers without recursion so hostile depth cannot overflow
/// the stack.
fn exceeds_depth(root: &Value, max_depth: usize) -> bool {
    let mut stack = vec![(root, 1_usize)];
    while let Some((value, depth)) = stack.pop() {
        match value {
            Value::Array(items) => {
                if depth > max_depth {
                    return true;
                }
                stack.extend(items.iter().map(|child| (child, depth + 1)));
            }
            Value::Object(map) => {
                if depth > max_depth {
                    return true;
                }
                stack.extend(map.values().map(|child| (child, depth + 1)));
            }
            _ => {}
        }
    }
    false
}

/// Serializes `value` into JSON and returns the result, or classifies the
/// serializer's failure:
///
/// - numbers JSON cannot carry (such as `u128` beyond `u64`) give
///   `json_not_serializable`
/// - errors mentioning a cycle or recursion give `json_circular_reference`
/// - anything else (for example non-string map keys) gives
///   `json_invalid_structure`
pub fn probe_serializable<T>(value: &T, ctx: &ValidationContext) -> ValidationResult<Value>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value) {
        Ok(json) => ok(json),
        Err(err) => {
            let message = err.to_string();
            let code = classify(&message);
            fail(vec![error(code, ctx, [("reason", Value::from(message))])])
        }
    }
}

fn classify(message: &str) -> IssueCode {
    let lower = message.to_ascii_lowercase();
    if lower.contains("out of range") {
        IssueCode::JsonNotSerializable
    } else if ["circular", "cycle", "recursion"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        IssueCode::JsonCircularReference
    } else {
        IssueCode::JsonInvalidStructure
    }
}

/// Accepts a plain JSON object. Arrays and primitives fail with
/// `json_invalid_structure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlainObject;

impl Validate for PlainObject {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if value.is_object() {
            ok(value.clone())
        } else {
            fail(vec![error(
                IssueCode::JsonInvalidStructure,
                ctx,
                [
                    ("expected", Value::from("object")),
                    ("actual", Value::from(kind_name(value))),
                ],
            )])
        }
    }
}

/// Creates a [`PlainObject`] rule.
#[must_use]
pub const fn plain_object() -> PlainObject {
    PlainObject
}
