//! TRANSFORM combinator - map a successful value
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let length = is_string().transform(|v: Value| v.as_str().map_or(0, str::len));
//! let ctx = ValidationContext::new();
//! assert_eq!(length.validate(&json!("four"), &ctx).value(), Some(&4));
//! ```

use std::fmt;

use crate::foundation::{Validate, ValidationContext, ValidationResult, Value};

/// Maps the inner validator's success value with a pure function, keeping
/// warnings. Failures pass through and the function is not called.
#[derive(Clone, Copy)]
pub struct Transform<V, F> {
    pub(crate) inner: V,
    pub(crate) f: F,
}

impl<V, F> Transform<V, F> {
    /// Creates a new `Transform` combinator.
    pub fn new(inner: V, f: F) -> Self {
        Self { inner, f }
    }
}

impl<V: fmt::Debug, F> fmt::Debug for Transform<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("inner", &self.inner)
            .field("f", &"<fn>")
            .finish()
    }
}

impl<V, F, U> Validate for Transform<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> U,
{
    type Output = U;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<U> {
        self.inner.validate(value, ctx).map(&self.f)
    }
}

/// Creates a `Transform` combinator.
pub fn transform<V, F, U>(inner: V, f: F) -> Transform<V, F>
where
    V: Validate,
    F: Fn(V::Output) -> U,
{
    Transform::new(inner, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{IssueCode, error, fail, from_fn, ok_with_warnings, warn};
    use serde_json::json;

    #[test]
    fn maps_value_and_keeps_warnings() {
        let inner = from_fn(|value: &Value, ctx: &ValidationContext| {
            ok_with_warnings(value.clone(), vec![warn(IssueCode::StringNotAscii, ctx, ())])
        });
        let v = transform(inner, |v: Value| v.as_i64().unwrap_or_default() * 2);
        let result = v.validate(&json!(21), &ValidationContext::new());
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn failures_are_not_mapped() {
        let inner = from_fn(|_: &Value, ctx: &ValidationContext| {
            fail::<Value>(vec![error(IssueCode::TypeMismatch, ctx, ())])
        });
        let v = transform(inner, |_: Value| -> i64 { unreachable!("failures are not mapped") });
        let result = v.validate(&json!(1), &ValidationContext::new());
        assert_eq!(result.issues()[0].code, IssueCode::TypeMismatch);
    }
}
