//! Core validation types and traits.
//!
//! Everything else in the crate speaks this vocabulary:
//!
//! - **Context**: [`ValidationContext`], [`PathSegment`], [`ValidationMode`]
//! - **Issues**: [`ValidationIssue`], [`IssueCode`], [`Severity`] and the
//!   [`issue`], [`error`], [`warn`] builders
//! - **Results**: [`ValidationResult`] and the [`ok`], [`fail`] builders
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Extraction**: [`FromValue`] for typed views over [`Value`]
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::*;
//!
//! let ctx = ValidationContext::for_entity("contact").with_field_path(["name"]);
//! let result: ValidationResult<Value> = fail(vec![error(
//!     IssueCode::StringTooShort,
//!     &ctx,
//!     [("min", Value::from(3)), ("actual", Value::from(2))],
//! )]);
//!
//! assert!(result.is_invalid());
//! assert_eq!(result.issues()[0].path_string(), "name");
//! ```

pub mod context;
pub mod extract;
pub mod issue;
pub mod result;
pub mod traits;

pub use context::{
    FieldPath, IntoPathSegments, PathSegment, UNKNOWN_ENTITY, ValidationContext, ValidationMode,
    format_path,
};
pub use extract::{FromValue, kind_name, number_value, type_mismatch};
pub use issue::{IssueCode, IssueParams, Severity, ValidationIssue, error, issue, warn};
pub use result::{ValidationResult, fail, ok, ok_with_warnings};
pub use traits::{BoxValidator, FnValidator, Validate, ValidateExt, from_fn};

pub use serde_json::Value;
