//! ALL combinator - conjunction that reports every failure
//!
//! Unlike [`Pipe`](super::Pipe), [`All`] never short-circuits: every
//! validator sees the original input and every issue is collected, so a
//! caller gets the complete error surface in one pass.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let v = min_length(5).all(max_length(1));
//! let result = v.validate(&json!("ab"), &ValidationContext::new());
//!
//! let codes: Vec<_> = result.issues().iter().map(|i| i.code).collect();
//! assert_eq!(codes, [IssueCode::StringTooShort, IssueCode::StringTooLong]);
//! ```

use crate::foundation::{
    BoxValidator, Validate, ValidationContext, ValidationResult, Value, fail, ok, ok_with_warnings,
};

/// Runs both validators on the same input and merges their results.
///
/// Fails with every collected issue if either side fails. Otherwise succeeds
/// with `second`'s value and both sides' warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct All<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> All<A, B> {
    /// Creates a new `All` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Extracts both validators.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for All<A, B>
where
    A: Validate,
    B: Validate,
{
    type Output = B::Output;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<B::Output> {
        let first = self.first.validate(value, ctx);
        let second = self.second.validate(value, ctx);

        let failed = first.is_invalid() || second.is_invalid();
        let mut issues = first.into_issues();
        match second {
            ValidationResult::Valid { value, warnings } if !failed => {
                issues.extend(warnings);
                ok_with_warnings(value, issues)
            }
            other => {
                issues.extend(other.into_issues());
                fail(issues)
            }
        }
    }
}

/// Creates an `All` combinator from two validators.
pub fn all<A, B>(first: A, second: B) -> All<A, B>
where
    A: Validate,
    B: Validate,
{
    All::new(first, second)
}

/// Conjunction over a runtime list of validators. See [`all_of`].
#[derive(Clone)]
pub struct AllOf {
    validators: Vec<BoxValidator>,
}

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("len", &self.validators.len())
            .finish()
    }
}

impl Validate for AllOf {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let mut issues = Vec::new();
        let mut failed = false;
        let mut last = None;

        for validator in &self.validators {
            match validator.validate(value, ctx) {
                ValidationResult::Valid { value, warnings } => {
                    issues.extend(warnings);
                    last = Some(value);
                }
                ValidationResult::Invalid { issues: more } => {
                    failed = true;
                    issues.extend(more);
                }
            }
        }

        if failed {
            fail(issues)
        } else {
            match last {
                Some(value) => ok_with_warnings(value, issues),
                None => ok(value.clone()),
            }
        }
    }
}

/// Creates a conjunction from a list of boxed validators. An empty list
/// returns the input unchanged.
#[must_use]
pub fn all_of(validators: Vec<BoxValidator>) -> AllOf {
    AllOf { validators }
}
