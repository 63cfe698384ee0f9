//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the traits, result types, validators, normalizers, combinators
//! and registry entry points.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let slug = pipe![is_string(), to_slug(), min_length(1)];
//! let ctx = ValidationContext::new();
//! assert_eq!(slug.validate(&json!("Hello World!"), &ctx).value(), Some(&json!("hello-world")));
//! ```

// ============================================================================
// FOUNDATION: Core traits, context, issues, results
// ============================================================================

pub use crate::foundation::{
    BoxValidator, FieldPath, FnValidator, FromValue, IntoPathSegments, IssueCode, IssueParams,
    PathSegment, Severity, Validate, ValidateExt, ValidationContext, ValidationIssue,
    ValidationMode, ValidationResult, Value, error, fail, from_fn, issue, ok, ok_with_warnings,
    type_mismatch, warn,
};

pub use serde_json::json;

pub use crate::error::Error;

// ============================================================================
// VALIDATORS: All built-in rules
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// NORMALIZERS
// ============================================================================

pub use crate::normalizers::{
    CollapseWhitespace, Normalize, NormalizeDate, NormalizeDatetime, NormalizeEmail,
    NormalizePhone, NormalizeUrl, ToBoolean, ToLowercase, ToNumber, ToSlug, ToUppercase,
    TrimWhitespace, collapse_whitespace, normalize_date, normalize_datetime, normalize_email,
    normalize_phone, normalize_url, to_boolean, to_lowercase, to_number, to_slug, to_uppercase,
    trim_whitespace,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    All, AllOf, Any, AnyOf, Each, Optional, PassThrough, Pipe, PipeAll, Transform, When,
    WithPath, all, all_of, any, any_of, each, optional, pass_through, pipe, pipe_all, transform,
    when, with_path,
};

// ============================================================================
// REGISTRY
// ============================================================================

pub use crate::registry::{
    DataType, FieldConfig, FieldSpec, ValidatorRegistry, field_validator, get_field_validator,
    registry, validate_custom_field_value, validate_record,
};

// ============================================================================
// MACROS
// ============================================================================

pub use crate::{all, any, normalizer, pipe, rule};
