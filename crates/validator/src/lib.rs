//! # fieldcheck-validator
//!
//! Composable validators and normalizers for loosely typed field values.
//!
//! Inputs are [`serde_json::Value`]s as they arrive from request bodies or
//! form posts. Every validator is a pure function of `(value, context)` and
//! returns a [`ValidationResult`](foundation::ValidationResult): either a
//! (possibly normalized) value with optional warnings, or a list of
//! machine-readable issues. Nothing here panics or returns `Err` for bad
//! input.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let ctx = ValidationContext::for_entity("contact");
//!
//! // Compose by hand
//! let username = pipe![is_string(), trim_whitespace(), min_length(3), max_length(20)];
//! assert_eq!(
//!     username.validate(&json!("  alice "), &ctx).value(),
//!     Some(&json!("alice"))
//! );
//!
//! // Or resolve a preset from the registry
//! let config = FieldConfig::new().with("min", 0).with("max", 10);
//! let result = validate_custom_field_value("integer", &config, Some(&json!(15)), &ctx);
//! assert_eq!(result.issues()[0].code, IssueCode::NumberTooLarge);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: context, issues, results and the [`Validate`](foundation::Validate) trait
//! - [`combinators`]: `pipe`, `all`, `any`, `optional`, `when`, `transform`, `with_path`, `each`
//! - [`normalizers`]: total, idempotent value reshapers
//! - [`validators`]: rule validators grouped by domain
//! - [`registry`]: data-type presets keyed by [`DataType`](registry::DataType)

// Deep combinator nesting (Pipe<All<...>, ...>) produces complex types
// that are inherent to the combinator architecture.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod error;
pub mod foundation;
mod macros;
pub mod normalizers;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use error::{Error, Result};
