//! Core validator traits.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;

use super::context::{IntoPathSegments, ValidationContext};
use super::result::ValidationResult;
use crate::combinators::{All, Any, Optional, Pipe, Transform, When, WithPath};

static NULL: Value = Value::Null;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure function from a loosely typed value and a context to a result.
///
/// Implementations hold only construction-time configuration, so one
/// instance may be shared freely across threads and calls.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{
///     IssueCode, Validate, ValidationContext, ValidationResult, Value, error, fail, ok,
/// };
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Output = Value;
///
///     fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
///         if value.as_f64() == Some(0.0) {
///             fail(vec![error(IssueCode::NumberNotPositive, ctx, ())])
///         } else {
///             ok(value.clone())
///         }
///     }
/// }
///
/// let ctx = ValidationContext::new();
/// assert!(NonZero.validate(&Value::from(3), &ctx).is_valid());
/// assert!(NonZero.validate(&Value::from(0), &ctx).is_invalid());
/// ```
pub trait Validate {
    /// The value produced on success.
    type Output;

    /// Validates `value` in `ctx`.
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Self::Output>;

    /// Validates a field that may be absent. A missing field is treated
    /// exactly like `null`.
    fn validate_field(
        &self,
        value: Option<&Value>,
        ctx: &ValidationContext,
    ) -> ValidationResult<Self::Output> {
        self.validate(value.unwrap_or(&NULL), ctx)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Output = V::Output;

    #[inline]
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Self::Output> {
        (**self).validate(value, ctx)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Output = V::Output;

    #[inline]
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Self::Output> {
        (**self).validate(value, ctx)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Output = V::Output;

    #[inline]
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Self::Output> {
        (**self).validate(value, ctx)
    }
}

/// A type-erased, shareable validator.
pub type BoxValidator<T = Value> = Arc<dyn Validate<Output = T> + Send + Sync>;

// ============================================================================
// CLOSURE VALIDATOR
// ============================================================================

/// Validator backed by a closure. See [`from_fn`].
pub struct FnValidator<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FnValidator<F, T> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

impl<F, T> fmt::Debug for FnValidator<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F, T> Validate for FnValidator<F, T>
where
    F: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
{
    type Output = T;

    #[inline]
    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<T> {
        (self.f)(value, ctx)
    }
}

/// Wraps a closure as a validator.
///
/// The closure must be pure: same input, same result.
pub fn from_fn<F, T>(f: F) -> FnValidator<F, T>
where
    F: Fn(&Value, &ValidationContext) -> ValidationResult<T>,
{
    FnValidator {
        f,
        _output: PhantomData,
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Fluent combinator methods, implemented for every [`Validate`].
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let name = is_string().pipe(trim_whitespace()).pipe(min_length(3));
/// let ctx = ValidationContext::new();
///
/// assert_eq!(name.validate(&json!("  ada  "), &ctx).value(), Some(&json!("ada")));
/// assert!(name.validate(&json!(" a "), &ctx).is_invalid());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Feeds this validator's output into `next`, stopping at the first
    /// failure.
    fn pipe<B>(self, next: B) -> Pipe<Self, B>
    where
        Self: Validate<Output = Value>,
        B: Validate,
    {
        Pipe::new(self, next)
    }

    /// Runs both validators on the same input and collects every issue.
    fn all<B>(self, other: B) -> All<Self, B>
    where
        B: Validate,
    {
        All::new(self, other)
    }

    /// Returns the first success, or every issue if both fail.
    fn any<B>(self, other: B) -> Any<Self, B>
    where
        B: Validate<Output = Self::Output>,
    {
        Any::new(self, other)
    }

    /// Accepts `null` without running this validator.
    fn optional(self) -> Optional<Self>
    where
        Self: Validate<Output = Value>,
    {
        Optional::new(self)
    }

    /// Runs this validator only when `predicate` holds for the raw value.
    fn when<P>(self, predicate: P) -> When<Self, P>
    where
        Self: Validate<Output = Value>,
        P: Fn(&Value) -> bool,
    {
        When::new(self, predicate)
    }

    /// Maps the success value with `f`.
    fn transform<F, U>(self, f: F) -> Transform<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Transform::new(self, f)
    }

    /// Runs this validator with `segments` appended to the field path.
    fn at(self, segments: impl IntoPathSegments) -> WithPath<Self> {
        WithPath::new(segments, self)
    }

    /// Erases the concrete type.
    fn boxed(self) -> BoxValidator<Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
