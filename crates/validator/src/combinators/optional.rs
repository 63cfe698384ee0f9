//! OPTIONAL combinator - accept `null` without validating
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let v = min_length(3).optional();
//! let ctx = ValidationContext::new();
//!
//! assert!(v.validate(&Value::Null, &ctx).is_valid());
//! assert!(v.validate_field(None, &ctx).is_valid());
//! assert!(v.validate(&json!("hi"), &ctx).is_invalid());
//! ```

use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, ok};

/// Succeeds with `null` for a `null` or missing value without invoking the
/// inner validator. Any other value is delegated unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Optional<V> {
    pub(crate) inner: V,
}

impl<V> Optional<V> {
    /// Creates a new `Optional` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }
}

impl<V> Validate for Optional<V>
where
    V: Validate<Output = Value>,
{
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if value.is_null() {
            return ok(Value::Null);
        }
        self.inner.validate(value, ctx)
    }
}

/// Creates an `Optional` combinator.
pub fn optional<V>(inner: V) -> Optional<V>
where
    V: Validate<Output = Value>,
{
    Optional::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{IssueCode, error, fail, from_fn};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn null_and_missing_bypass_the_inner_validator() {
        let calls = AtomicUsize::new(0);
        let always_fails = from_fn(|_: &Value, ctx: &ValidationContext| {
            calls.fetch_add(1, Ordering::SeqCst);
            fail::<Value>(vec![error(IssueCode::RequiredFieldMissing, ctx, ())])
        });
        let v = optional(always_fails);
        let ctx = ValidationContext::new();

        assert_eq!(v.validate(&Value::Null, &ctx), ok(Value::Null));
        assert_eq!(v.validate_field(None, &ctx), ok(Value::Null));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(v.validate(&json!(0), &ctx).is_invalid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
