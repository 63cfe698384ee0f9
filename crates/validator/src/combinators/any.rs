//! ANY combinator - disjunction of validators
//!
//! [`Any`] tries each alternative against the original input and returns
//! the first success verbatim. Only when every alternative fails are their
//! issues concatenated.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let reference = uuid().any(entity_ref());
//! let ctx = ValidationContext::new();
//! assert!(reference.validate(&json!("123e4567-e89b-12d3-a456-426614174000"), &ctx).is_valid());
//! assert_eq!(reference.validate(&json!("nope"), &ctx).issues().len(), 2);
//! ```

use crate::foundation::{BoxValidator, Validate, ValidationContext, ValidationResult, Value, fail, ok};

/// Returns `first`'s result if it succeeds, otherwise `second`'s. When both
/// fail, the issues of both are returned in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Any<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Any<A, B> {
    /// Creates a new `Any` combinator.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Extracts both validators.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> Validate for Any<A, B>
where
    A: Validate,
    B: Validate<Output = A::Output>,
{
    type Output = A::Output;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<A::Output> {
        let first = self.first.validate(value, ctx);
        if first.is_valid() {
            return first;
        }
        let second = self.second.validate(value, ctx);
        if second.is_valid() {
            return second;
        }
        let mut issues = first.into_issues();
        issues.extend(second.into_issues());
        fail(issues)
    }
}

/// Creates an `Any` combinator from two validators.
pub fn any<A, B>(first: A, second: B) -> Any<A, B>
where
    A: Validate,
    B: Validate<Output = A::Output>,
{
    Any::new(first, second)
}

/// Disjunction over a runtime list of validators. See [`any_of`].
#[derive(Clone)]
pub struct AnyOf {
    validators: Vec<BoxValidator>,
}

impl std::fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyOf")
            .field("len", &self.validators.len())
            .finish()
    }
}

impl Validate for AnyOf {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        if self.validators.is_empty() {
            return ok(value.clone());
        }
        let mut issues = Vec::new();
        for validator in &self.validators {
            match validator.validate(value, ctx) {
                valid @ ValidationResult::Valid { .. } => return valid,
                ValidationResult::Invalid { issues: more } => issues.extend(more),
            }
        }
        fail(issues)
    }
}

/// Creates a disjunction from a list of boxed validators. An empty list has
/// no alternative to reject with, so it returns the input unchanged.
#[must_use]
pub fn any_of(validators: Vec<BoxValidator>) -> AnyOf {
    AnyOf { validators }
}
