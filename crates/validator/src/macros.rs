//! Macros for creating validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: Create a rule validator (struct + `Validate` impl + factory fn)
//! - [`normalizer!`]: Create a normalizer (struct + `Normalize` + `Validate` + factory fn)
//! - [`pipe!`]: Thread a value through several validators
//! - [`all!`]: Run several validators on one value and collect every issue
//! - [`any!`]: Try several validators and keep the first success
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::rule;
//! use fieldcheck_validator::foundation::{IssueCode, Validate, ValidationContext, Value, error};
//!
//! rule! {
//!     /// Requires an even number.
//!     pub Even for f64;
//!     rule(input) { input % 2.0 == 0.0 }
//!     issue(input, ctx) { error(IssueCode::NumberNotInteger, ctx, ()) }
//!     fn even();
//! }
//!
//! let ctx = ValidationContext::new();
//! assert!(even().validate(&Value::from(4), &ctx).is_valid());
//! assert!(even().validate(&Value::from(3), &ctx).is_invalid());
//! assert!(even().validate(&Value::from("4"), &ctx).is_invalid());
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a rule validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// The generated validator reads its input through
/// [`FromValue`](crate::foundation::FromValue) as `$input`. A value of any
/// other shape fails with `type_mismatch`. When the rule holds the input is
/// returned unchanged, otherwise the issue block's issue is returned.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub AsciiOnly for str;
///     rule(input) { input.is_ascii() }
///     issue(input, ctx) { error(IssueCode::StringNotAscii, ctx, ()) }
///     fn ascii_only();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     issue(self, input, ctx) { error(IssueCode::StringTooShort, ctx, ()) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Custom constructor**, optionally fallible with `-> ErrorType`:
/// ```rust,ignore
/// rule! {
///     pub MatchesPattern { pattern: Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     issue(self, input, ctx) { error(IssueCode::StringPatternMismatch, ctx, ()) }
///     new(pattern: &str) -> Error { Ok(Self { pattern: Regex::new(pattern)? }) }
///     fn matches_pattern(pattern: &str) -> Error;
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        issue($einp:ident, $ctx:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        $crate::rule!(@validate $name, $input, self, $inp, $rule, $einp, $ctx, $err);

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Variant 2: Struct with fields + fallible new + fallible factory ──
    //
    // The type after `->` is the error type; the macro wraps it in Result.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        issue($self2:ident, $einp:ident, $ctx:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Builds the validator, failing if its configuration is invalid.
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        $crate::rule!(@validate $name, $input, $self_, $inp, $rule, $einp, $ctx, $err);

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        issue($self2:ident, $einp:ident, $ctx:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@validate $name, $input, $self_, $inp, $rule, $einp, $ctx, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 4: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        issue($self2:ident, $einp:ident, $ctx:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@validate $name, $input, $self_, $inp, $rule, $einp, $ctx, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Internal: the shared `Validate` impl ────────────────────────────
    (@validate $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $ctx:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Output = $crate::foundation::Value;

            #[allow(unused_variables)]
            fn validate(
                &$self_,
                value: &$crate::foundation::Value,
                $ctx: &$crate::foundation::ValidationContext,
            ) -> $crate::foundation::ValidationResult<$crate::foundation::Value> {
                let ::std::option::Option::Some($inp) =
                    <$input as $crate::foundation::FromValue>::from_value(value)
                else {
                    return $crate::foundation::type_mismatch(
                        <$input as $crate::foundation::FromValue>::EXPECTED,
                        value,
                        $ctx,
                    );
                };
                if $rule {
                    $crate::foundation::ok(value.clone())
                } else {
                    let $einp = $inp;
                    $crate::foundation::fail(::std::vec![$err])
                }
            }
        }
    };
}

// ============================================================================
// NORMALIZER MACRO
// ============================================================================

/// Creates a normalizer: unit struct, [`Normalize`](crate::normalizers::Normalize)
/// and `Validate` implementations, and a factory function.
///
/// The body runs only when the value has the `$input` shape; any other
/// value passes through unchanged. The generated validator always succeeds.
///
/// ```rust,ignore
/// normalizer! {
///     pub TrimWhitespace for str;
///     normalize(input) { Value::from(input.trim()) }
///     fn trim_whitespace();
/// }
/// ```
#[macro_export]
macro_rules! normalizer {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        normalize($inp:ident) $body:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::normalizers::Normalize for $name {
            fn normalize(&self, value: &$crate::foundation::Value) -> $crate::foundation::Value {
                match <$input as $crate::foundation::FromValue>::from_value(value) {
                    ::std::option::Option::Some($inp) => $body,
                    ::std::option::Option::None => value.clone(),
                }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Output = $crate::foundation::Value;

            fn validate(
                &self,
                value: &$crate::foundation::Value,
                _ctx: &$crate::foundation::ValidationContext,
            ) -> $crate::foundation::ValidationResult<$crate::foundation::Value> {
                $crate::foundation::ok($crate::normalizers::Normalize::normalize(self, value))
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };
}

// ============================================================================
// COMPOSITION MACROS
// ============================================================================

/// Threads a value through validators left to right, stopping at the first
/// failure.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let v = pipe![is_string(), trim_whitespace(), min_length(3)];
/// let result = v.validate(&json!(" hi "), &ValidationContext::new());
/// assert_eq!(result.issues()[0].code, IssueCode::StringTooShort);
/// ```
#[macro_export]
macro_rules! pipe {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::Pipe::new($first, $crate::pipe!($($rest),+))
    };
}

/// Runs every validator on the same input and collects every issue.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let v = all![min_length(5), max_length(1)];
/// let result = v.validate(&json!("ab"), &ValidationContext::new());
/// assert_eq!(result.issues().len(), 2);
/// ```
#[macro_export]
macro_rules! all {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::All::new($first, $crate::all!($($rest),+))
    };
}

/// Tries validators in order and returns the first success.
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let v = any![uuid(), entity_ref()];
/// let ctx = ValidationContext::new();
/// assert!(v.validate(&json!("user:123e4567-e89b-12d3-a456-426614174000"), &ctx).is_valid());
/// ```
#[macro_export]
macro_rules! any {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinators::Any::new($first, $crate::any!($($rest),+))
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{IssueCode, Validate, ValidationContext, Value, error};
    use serde_json::json;

    crate::rule! {
        Positive for f64;
        rule(input) { input > 0.0 }
        issue(input, ctx) { error(IssueCode::NumberNotPositive, ctx, [("actual", Value::from(input))]) }
        fn positive();
    }

    crate::rule! {
        AtMost { max: usize } for str;
        rule(self, input) { input.len() <= self.max }
        issue(self, input, ctx) {
            error(IssueCode::StringTooLong, ctx, [("max", Value::from(self.max))])
        }
        fn at_most(max: usize);
    }

    crate::normalizer! {
        Shout for str;
        normalize(input) { Value::from(input.to_uppercase()) }
        fn shout();
    }

    #[test]
    fn unit_rule_checks_type_then_predicate() {
        let ctx = ValidationContext::new();
        assert_eq!(positive().validate(&json!(2), &ctx).value(), Some(&json!(2)));
        assert_eq!(
            positive().validate(&json!(-1), &ctx).issues()[0].code,
            IssueCode::NumberNotPositive
        );
        assert_eq!(
            positive().validate(&json!("2"), &ctx).issues()[0].code,
            IssueCode::TypeMismatch
        );
    }

    #[test]
    fn field_rule_reads_its_config() {
        let ctx = ValidationContext::new();
        assert!(at_most(3).validate(&json!("abc"), &ctx).is_valid());
        let result = at_most(3).validate(&json!("abcd"), &ctx);
        assert_eq!(result.issues()[0].param("max"), Some(&json!(3)));
    }

    #[test]
    fn normalizer_passes_other_types_through() {
        let ctx = ValidationContext::new();
        assert_eq!(shout().validate(&json!("hey"), &ctx).value(), Some(&json!("HEY")));
        assert_eq!(shout().validate(&json!(7), &ctx).value(), Some(&json!(7)));
    }

    #[test]
    fn composition_macros_nest() {
        let ctx = ValidationContext::new();
        let piped = crate::pipe![shout(), at_most(3)];
        assert_eq!(piped.validate(&json!("abc"), &ctx).value(), Some(&json!("ABC")));

        let both = crate::all![at_most(1), at_most(2), at_most(3)];
        assert_eq!(both.validate(&json!("abcd"), &ctx).issues().len(), 3);

        let either = crate::any![positive(), at_most(2)];
        assert!(either.validate(&json!("ab"), &ctx).is_valid());
    }
}
