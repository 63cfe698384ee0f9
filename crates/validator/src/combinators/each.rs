//! EACH combinator - validate every element of an array
//!
//! Every element is validated under its index path and every element's
//! issues are collected, so one pass reports all bad entries.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let tags = each(is_string().pipe(trim_whitespace()));
//! let ctx = ValidationContext::new().with_field_path(["tags"]);
//!
//! assert_eq!(tags.validate(&json!([" a ", "b"]), &ctx).value(), Some(&json!(["a", "b"])));
//!
//! let result = tags.validate(&json!(["a", 1, "c", false]), &ctx);
//! let paths: Vec<_> = result.issues().iter().map(|i| i.path_string()).collect();
//! assert_eq!(paths, ["tags[1]", "tags[3]"]);
//! ```

use crate::foundation::{
    PathSegment, Validate, ValidationContext, ValidationResult, Value, fail, ok_with_warnings,
    type_mismatch,
};

/// Validates each array element with the inner validator and returns the
/// array of element outputs. Non-arrays fail with `type_mismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Each<V> {
    pub(crate) inner: V,
}

impl<V> Each<V> {
    /// Creates a new `Each` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

impl<V> Validate for Each<V>
where
    V: Validate<Output = Value>,
{
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let Some(items) = value.as_array() else {
            return type_mismatch("array", value, ctx);
        };

        let mut outputs = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        let mut failed = false;

        for (index, item) in items.iter().enumerate() {
            let child = ctx.child(&[PathSegment::Index(index)]);
            match self.inner.validate(item, &child) {
                ValidationResult::Valid { value, warnings } => {
                    outputs.push(value);
                    issues.extend(warnings);
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
            ok_with_warnings(Value::Array(outputs), issues)
        }
    }
}

/// Creates an `Each` combinator.
pub fn each<V>(inner: V) -> Each<V>
where
    V: Validate<Output = Value>,
{
    Each::new(inner)
}
