//! WITH_PATH combinator - attribute issues to a nested field
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let v = with_path(["address", "zip"], min_length(5));
//! let ctx = ValidationContext::new().with_field_path(["customer"]);
//! let result = v.validate(&json!("123"), &ctx);
//!
//! assert_eq!(result.issues()[0].path_string(), "customer.address.zip");
//! ```

use crate::foundation::{
    FieldPath, IntoPathSegments, Validate, ValidationContext, ValidationResult, Value,
};

/// Runs the inner validator in a child context whose field path has extra
/// segments appended. The caller's context is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithPath<V> {
    pub(crate) segments: FieldPath,
    pub(crate) inner: V,
}

impl<V> WithPath<V> {
    /// Creates a new `WithPath` combinator.
    pub fn new(segments: impl IntoPathSegments, inner: V) -> Self {
        Self {
            segments: segments.into_segments(),
            inner,
        }
    }

    /// The segments this combinator appends.
    pub fn segments(&self) -> &FieldPath {
        &self.segments
    }
}

impl<V: Validate> Validate for WithPath<V> {
    type Output = V::Output;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<V::Output> {
        self.inner.validate(value, &ctx.child(&self.segments))
    }
}

/// Creates a `WithPath` combinator from one segment or a list of segments.
pub fn with_path<V: Validate>(segments: impl IntoPathSegments, inner: V) -> WithPath<V> {
    WithPath::new(segments, inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{PathSegment, from_fn, ok};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn observed_path() -> impl Validate<Output = Vec<PathSegment>> {
        from_fn(|_: &Value, ctx: &ValidationContext| ok(ctx.field_path().to_vec()))
    }

    #[test]
    fn appends_segments_to_the_current_path() {
        let ctx = ValidationContext::new().with_field_path(["root"]);
        let result = with_path(["a", "b"], observed_path()).validate(&json!(null), &ctx);
        assert_eq!(
            result.into_value(),
            Some(vec!["root".into(), "a".into(), "b".into()])
        );
        assert_eq!(ctx.path_string(), "root");
    }

    #[test]
    fn accepts_a_single_index() {
        let ctx = ValidationContext::new().with_field_path(["items"]);
        let result = with_path(3_usize, observed_path()).validate(&json!(null), &ctx);
        assert_eq!(
            result.into_value(),
            Some(vec![PathSegment::from("items"), PathSegment::Index(3)])
        );
    }

    #[test]
    fn nested_paths_compose() {
        let v = with_path("outer", with_path("inner", observed_path()));
        let result = v.validate(&json!(null), &ValidationContext::new());
        let path = result.into_value().unwrap_or_default();
        assert_eq!(crate::foundation::format_path(&path), "outer.inner");
    }
}
