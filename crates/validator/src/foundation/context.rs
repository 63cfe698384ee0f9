//! Per-call validation context.
//!
//! A [`ValidationContext`] is created once per top-level validation call and
//! passed by reference through every combinator. It is never mutated in
//! place: descending into a nested value produces a new context via
//! [`ValidationContext::child`], so sibling branches of `all`/`any` cannot
//! observe each other's paths.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

/// Entity type used when the caller does not name one.
pub const UNKNOWN_ENTITY: &str = "unknown";

// ============================================================================
// FIELD PATH
// ============================================================================

/// One step into a nested document: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position inside an array.
    Index(usize),
    /// Key inside an object.
    Key(String),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}

/// Ordered path from the document root to the current value.
pub type FieldPath = SmallVec<[PathSegment; 4]>;

/// Renders a path as `items[0].name`.
#[must_use]
pub fn format_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        match segment {
            PathSegment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
            PathSegment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
        }
    }
    out
}

/// Anything that can be appended to a field path: a single key or index,
/// or a list of them.
pub trait IntoPathSegments {
    /// Converts into the segments to append.
    fn into_segments(self) -> FieldPath;
}

impl IntoPathSegments for PathSegment {
    fn into_segments(self) -> FieldPath {
        smallvec::smallvec![self]
    }
}

impl IntoPathSegments for &str {
    fn into_segments(self) -> FieldPath {
        smallvec::smallvec![PathSegment::from(self)]
    }
}

impl IntoPathSegments for String {
    fn into_segments(self) -> FieldPath {
        smallvec::smallvec![PathSegment::from(self)]
    }
}

impl IntoPathSegments for usize {
    fn into_segments(self) -> FieldPath {
        smallvec::smallvec![PathSegment::from(self)]
    }
}

impl<const N: usize> IntoPathSegments for [&str; N] {
    fn into_segments(self) -> FieldPath {
        self.into_iter().map(PathSegment::from).collect()
    }
}

impl<const N: usize> IntoPathSegments for [PathSegment; N] {
    fn into_segments(self) -> FieldPath {
        self.into_iter().collect()
    }
}

impl IntoPathSegments for Vec<PathSegment> {
    fn into_segments(self) -> FieldPath {
        self.into_iter().collect()
    }
}

impl IntoPathSegments for FieldPath {
    fn into_segments(self) -> FieldPath {
        self
    }
}

// ============================================================================
// MODE
// ============================================================================

/// Why a value is being validated.
///
/// No built-in rule branches on the mode yet; it is carried end to end so
/// rule validators that need it can read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// A new record is being written.
    #[default]
    Create,
    /// An existing record is being changed.
    Update,
    /// Bulk import from an external source.
    Import,
    /// Internal writes not driven by a user.
    System,
}

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Context threaded through every validator call.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::foundation::{ValidationContext, ValidationMode};
///
/// let ctx = ValidationContext::for_entity("invoice")
///     .with_mode(ValidationMode::Update)
///     .with_field_path(["lines", "amount"]);
///
/// assert_eq!(ctx.entity_type(), "invoice");
/// assert_eq!(ctx.path_string(), "lines.amount");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationContext {
    entity_type: Cow<'static, str>,
    field_path: FieldPath,
    mode: ValidationMode,
    metadata: Arc<Map<String, Value>>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            entity_type: Cow::Borrowed(UNKNOWN_ENTITY),
            field_path: FieldPath::new(),
            mode: ValidationMode::default(),
            metadata: Arc::default(),
        }
    }
}

impl ValidationContext {
    /// Creates a root context for an unknown entity in `create` mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a root context for the named entity type.
    #[must_use]
    pub fn for_entity(entity_type: impl Into<Cow<'static, str>>) -> Self {
        Self {
            entity_type: entity_type.into(),
            ..Self::default()
        }
    }

    /// Sets the validation mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the field path. Intended for building root contexts.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_path(mut self, path: impl IntoPathSegments) -> Self {
        self.field_path = path.into_segments();
        self
    }

    /// Adds one metadata entry.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        Arc::make_mut(&mut self.metadata).insert(key.into(), value.into());
        self
    }

    /// Returns a new context whose path is this one's with `segments`
    /// appended. `self` is left untouched.
    #[must_use]
    pub fn child(&self, segments: &[PathSegment]) -> Self {
        let mut field_path = self.field_path.clone();
        field_path.extend(segments.iter().cloned());
        Self {
            entity_type: self.entity_type.clone(),
            field_path,
            mode: self.mode,
            metadata: Arc::clone(&self.metadata),
        }
    }

    /// The entity being validated, or `"unknown"`.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The current location inside the document.
    #[must_use]
    pub fn field_path(&self) -> &[PathSegment] {
        &self.field_path
    }

    /// The current location rendered as `items[0].name`.
    #[must_use]
    pub fn path_string(&self) -> String {
        format_path(&self.field_path)
    }

    /// The validation mode.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Looks up a metadata entry.
    #[must_use]
    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// All metadata entries.
    #[must_use]
    pub fn metadata_map(&self) -> &Map<String, Value> {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_context_is_unknown_create_root() {
        let ctx = ValidationContext::new();
        assert_eq!(ctx.entity_type(), UNKNOWN_ENTITY);
        assert_eq!(ctx.mode(), ValidationMode::Create);
        assert!(ctx.field_path().is_empty());
    }

    #[test]
    fn child_appends_without_touching_parent() {
        let parent = ValidationContext::for_entity("order").with_field_path(["root"]);
        let child = parent.child(&["a".into(), PathSegment::Index(2)]);

        assert_eq!(parent.path_string(), "root");
        assert_eq!(child.path_string(), "root.a[2]");
        assert_eq!(child.entity_type(), "order");
    }

    #[test]
    fn mode_survives_every_descent() {
        let root = ValidationContext::for_entity("order").with_mode(ValidationMode::Import);
        let deep = root
            .child(&["lines".into()])
            .child(&[PathSegment::Index(3)])
            .child(&["sku".into()]);

        assert_eq!(deep.mode(), ValidationMode::Import);
        assert_eq!(deep.path_string(), "lines[3].sku");
    }

    #[test]
    fn metadata_is_shared_with_children() {
        let ctx = ValidationContext::new().with_metadata("tenant", "acme");
        let child = ctx.child(&["x".into()]);
        assert_eq!(child.metadata("tenant"), Some(&Value::from("acme")));
        assert_eq!(child.metadata("missing"), None);
    }

    #[test]
    fn path_serializes_as_mixed_array() {
        let ctx = ValidationContext::new().with_field_path(vec![
            PathSegment::from("items"),
            PathSegment::Index(0),
            PathSegment::from("name"),
        ]);
        let json = serde_json::to_value(ctx.field_path()).unwrap();
        assert_eq!(json, serde_json::json!(["items", 0, "name"]));
        assert_eq!(ctx.path_string(), "items[0].name");
    }
}
