//! PIPE combinator - sequential pipeline of validators
//!
//! [`Pipe`] feeds the first validator's *output* into the second, so
//! normalizers placed early in a pipe reshape the value every later rule
//! sees.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let username = is_string().pipe(to_lowercase()).pipe(slug_shape());
//! let ctx = ValidationContext::new();
//! assert_eq!(username.validate(&json!("Ada-L"), &ctx).value(), Some(&json!("ada-l")));
//! ```

use crate::foundation::{
    BoxValidator, Validate, ValidationContext, ValidationIssue, ValidationResult, Value, fail,
    ok_with_warnings,
};

/// Runs `first`, then runs `second` on `first`'s output.
///
/// Stops at the first failure. The failure carries the warnings collected
/// before it, followed by the failing step's issues. On success the warnings
/// of both steps are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipe<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Pipe<A, B> {
    /// Creates a new `Pipe` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Extracts both validators.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for Pipe<A, B>
where
    A: Validate<Output = Value>,
    B: Validate,
{
    type Output = B::Output;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<B::Output> {
        match self.first.validate(value, ctx) {
            ValidationResult::Valid { value, warnings } => {
                then(warnings, self.second.validate(&value, ctx))
            }
            ValidationResult::Invalid { issues } => fail(issues),
        }
    }
}

/// Prefixes `warnings` onto `next`'s issues, whichever way `next` went.
fn then<T>(mut warnings: Vec<ValidationIssue>, next: ValidationResult<T>) -> ValidationResult<T> {
    match next {
        ValidationResult::Valid {
            value,
            warnings: more,
        } => {
            warnings.extend(more);
            ok_with_warnings(value, warnings)
        }
        ValidationResult::Invalid { issues } => {
            warnings.extend(issues);
            fail(warnings)
        }
    }
}

/// Creates a `Pipe` combinator from two validators.
pub fn pipe<A, B>(first: A, second: B) -> Pipe<A, B>
where
    A: Validate<Output = Value>,
    B: Validate,
{
    Pipe::new(first, second)
}

/// Pipeline over a runtime list of validators. See [`pipe_all`].
#[derive(Clone)]
pub struct PipeAll {
    validators: Vec<BoxValidator>,
}

impl std::fmt::Debug for PipeAll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipeAll")
            .field("len", &self.validators.len())
            .finish()
    }
}

impl Validate for PipeAll {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let mut current = value.clone();
        let mut warnings = Vec::new();
        for validator in &self.validators {
            match validator.validate(&current, ctx) {
                ValidationResult::Valid { value, warnings: more } => {
                    current = value;
                    warnings.extend(more);
                }
                ValidationResult::Invalid { issues } => {
                    warnings.extend(issues);
                    return fail(warnings);
                }
            }
        }
        ok_with_warnings(current, warnings)
    }
}

/// Creates a pipeline from a list of boxed validators. An empty list
/// returns the input unchanged.
#[must_use]
pub fn pipe_all(validators: Vec<BoxValidator>) -> PipeAll {
    PipeAll { validators }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{IssueCode, ValidateExt, error, from_fn, ok, warn};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn append(suffix: &'static str) -> impl Validate<Output = Value> + Send + Sync + 'static {
        from_fn(move |value: &Value, _: &ValidationContext| {
            ok(Value::from(format!("{}{suffix}", value.as_str().unwrap_or_default())))
        })
    }

    fn warns() -> impl Validate<Output = Value> + Send + Sync + 'static {
        from_fn(|value: &Value, ctx: &ValidationContext| {
            ok_with_warnings(value.clone(), vec![warn(IssueCode::StringNotAscii, ctx, ())])
        })
    }

    fn rejects() -> impl Validate<Output = Value> + Send + Sync + 'static {
        from_fn(|_: &Value, ctx: &ValidationContext| {
            fail::<Value>(vec![error(IssueCode::StringTooShort, ctx, ())])
        })
    }

    #[test]
    fn threads_output_into_next_step() {
        let v = append("b").pipe(append("c"));
        let result = v.validate(&json!("a"), &ValidationContext::new());
        assert_eq!(result.value(), Some(&json!("abc")));
    }

    #[test]
    fn short_circuits_and_keeps_prior_warnings() {
        let calls = AtomicUsize::new(0);
        let counted = from_fn(|value: &Value, _: &ValidationContext| {
            calls.fetch_add(1, Ordering::SeqCst);
            ok(value.clone())
        });

        let v = warns().pipe(rejects()).pipe(counted);
        let result = v.validate(&json!("x"), &ValidationContext::new());

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let codes: Vec<_> = result.issues().iter().map(|i| i.code).collect();
        assert_eq!(codes, vec![IssueCode::StringNotAscii, IssueCode::StringTooShort]);
        assert!(result.is_invalid());
    }

    #[test]
    fn success_concatenates_warnings() {
        let v = warns().pipe(warns());
        let result = v.validate(&json!("x"), &ValidationContext::new());
        assert!(result.is_valid());
        assert_eq!(result.warnings().count(), 2);
    }

    #[test]
    fn pipe_all_matches_binary_pipe() {
        let dynamic = pipe_all(vec![append("b").boxed(), warns().boxed(), append("c").boxed()]);
        let result = dynamic.validate(&json!("a"), &ValidationContext::new());
        assert_eq!(result.value(), Some(&json!("abc")));
        assert_eq!(result.warnings().count(), 1);

        let failing = pipe_all(vec![warns().boxed(), rejects().boxed(), append("z").boxed()]);
        assert_eq!(failing.validate(&json!("a"), &ValidationContext::new()).issues().len(), 2);
    }

    #[test]
    fn empty_pipe_all_is_identity() {
        let result = pipe_all(Vec::new()).validate(&json!(5), &ValidationContext::new());
        assert_eq!(result, ok(json!(5)));
    }
}
