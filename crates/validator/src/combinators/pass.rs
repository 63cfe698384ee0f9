//! Validator that accepts everything.

use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, ok};

/// Succeeds with the input unchanged. Used for data types that carry no
/// rules of their own, and for presets whose checks are all unconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PassThrough;

impl Validate for PassThrough {
    type Output = Value;

    fn validate(&self, value: &Value, _ctx: &ValidationContext) -> ValidationResult<Value> {
        ok(value.clone())
    }
}

/// Creates a [`PassThrough`] validator.
#[must_use]
pub const fn pass_through() -> PassThrough {
    PassThrough
}
