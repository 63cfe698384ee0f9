//! Type checks and presence.
//!
//! These are usually the first step of a [`pipe`](crate::combinators::pipe):
//! once `is_string()` has passed, later string rules can assume a string.

use std::fmt;
use std::marker::PhantomData;

use serde_json::Map;

use crate::foundation::{
    FromValue, IssueCode, Validate, ValidationContext, ValidationResult, Value, error, ok,
    type_mismatch,
};

/// Passes values of shape `T` through unchanged and rejects everything else
/// with `type_mismatch`.
pub struct IsType<T: ?Sized> {
    _kind: PhantomData<fn(&T)>,
}

impl<T: ?Sized> IsType<T> {
    /// Creates the type check.
    #[must_use]
    pub const fn new() -> Self {
        Self { _kind: PhantomData }
    }
}

impl<T: ?Sized> Default for IsType<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for IsType<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for IsType<T> {}

impl<T: ?Sized + FromValue> fmt::Debug for IsType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IsType<{}>", T::EXPECTED)
    }
}

impl<T: ?Sized + FromValue> Validate for IsType<T> {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if T::from_value(value).is_some() {
            ok(value.clone())
        } else {
            type_mismatch(T::EXPECTED, value, ctx)
        }
    }
}

/// Requires a string.
#[must_use]
pub const fn is_string() -> IsType<str> {
    IsType::new()
}

/// Requires a number.
#[must_use]
pub const fn is_number() -> IsType<f64> {
    IsType::new()
}

/// Requires a boolean.
#[must_use]
pub const fn is_boolean() -> IsType<bool> {
    IsType::new()
}

/// Requires an array.
#[must_use]
pub const fn is_array() -> IsType<[Value]> {
    IsType::new()
}

/// Requires an object.
#[must_use]
pub const fn is_object() -> IsType<Map<String, Value>> {
    IsType::new()
}

crate::rule! {
    /// Rejects `null` (and therefore missing fields) with
    /// `required_field_missing`.
    pub Required for Value;
    rule(input) { !input.is_null() }
    issue(input, ctx) { error(IssueCode::RequiredFieldMissing, ctx, ()) }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("s"), true, false, false, false, false)]
    #[case(json!(1.5), false, true, false, false, false)]
    #[case(json!(false), false, false, true, false, false)]
    #[case(json!([1]), false, false, false, true, false)]
    #[case(json!({"a": 1}), false, false, false, false, true)]
    #[case(json!(null), false, false, false, false, false)]
    fn each_check_accepts_only_its_kind(
        #[case] value: Value,
        #[case] string: bool,
        #[case] number: bool,
        #[case] boolean: bool,
        #[case] array: bool,
        #[case] object: bool,
    ) {
        let ctx = ValidationContext::new();
        assert_eq!(is_string().validate(&value, &ctx).is_valid(), string);
        assert_eq!(is_number().validate(&value, &ctx).is_valid(), number);
        assert_eq!(is_boolean().validate(&value, &ctx).is_valid(), boolean);
        assert_eq!(is_array().validate(&value, &ctx).is_valid(), array);
        assert_eq!(is_object().validate(&value, &ctx).is_valid(), object);
    }

    #[test]
    fn mismatch_reports_expected_and_actual() {
        let result = is_number().validate(&json!("12"), &ValidationContext::new());
        let issue = &result.issues()[0];
        assert_eq!(issue.code, IssueCode::TypeMismatch);
        assert_eq!(issue.param("expected"), Some(&json!("number")));
        assert_eq!(issue.param("actual"), Some(&json!("string")));
    }

    #[test]
    fn required_rejects_null_and_missing() {
        let ctx = ValidationContext::new();
        assert_eq!(
            required().validate(&Value::Null, &ctx).issues()[0].code,
            IssueCode::RequiredFieldMissing
        );
        assert!(required().validate_field(None, &ctx).is_invalid());
        assert!(required().validate(&json!(""), &ctx).is_valid());
    }
}
