//! WHEN combinator - conditional validation
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! // Only strings that look like URLs are checked as URLs.
//! let v = url_format().when(|v: &Value| v.as_str().is_some_and(|s| s.contains("://")));
//! let ctx = ValidationContext::new();
//!
//! assert!(v.validate(&json!("plain text"), &ctx).is_valid());
//! assert!(v.validate(&json!("ftp://example.com"), &ctx).is_invalid());
//! ```

use std::fmt;

use crate::foundation::{Validate, ValidationContext, ValidationResult, Value, ok};

/// Runs the inner validator only when the predicate holds for the raw
/// value. Otherwise succeeds with the input unchanged.
#[derive(Clone, Copy)]
pub struct When<V, P> {
    pub(crate) inner: V,
    pub(crate) predicate: P,
}

impl<V, P> When<V, P> {
    /// Creates a new `When` combinator.
    pub fn new(inner: V, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<V: fmt::Debug, P> fmt::Debug for When<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("inner", &self.inner)
            .field("predicate", &"<fn>")
            .finish()
    }
}

impl<V, P> Validate for When<V, P>
where
    V: Validate<Output = Value>,
    P: Fn(&Value) -> bool,
{
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if (self.predicate)(value) {
            self.inner.validate(value, ctx)
        } else {
            ok(value.clone())
        }
    }
}

/// Creates a `When` combinator.
pub fn when<P, V>(predicate: P, inner: V) -> When<V, P>
where
    V: Validate<Output = Value>,
    P: Fn(&Value) -> bool,
{
    When::new(inner, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{IssueCode, error, fail, from_fn};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn false_predicate_skips_the_inner_validator() {
        let calls = AtomicUsize::new(0);
        let inner = from_fn(|_: &Value, ctx: &ValidationContext| {
            calls.fetch_add(1, Ordering::SeqCst);
            fail::<Value>(vec![error(IssueCode::NumberNegative, ctx, ())])
        });
        let v = when(|value: &Value| value.as_f64().is_some_and(|n| n < 0.0), inner);
        let ctx = ValidationContext::new();

        assert_eq!(v.validate(&json!(5), &ctx), ok(json!(5)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(v.validate(&json!(-5), &ctx).is_invalid());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
