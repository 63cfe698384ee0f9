//! Validation issues and their canonical constructors.
//!
//! Issues carry a machine-readable [`IssueCode`], a snapshot of the field
//! path, a [`Severity`] and structured params. They never carry rendered
//! messages; callers localize from `code` + `params`.
//!
//! Build issues only through [`issue`], [`error`] and [`warn`] so every
//! issue in the system has the same shape.

use std::borrow::Cow;
use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::context::{FieldPath, ValidationContext, format_path};

// ============================================================================
// ISSUE CODE
// ============================================================================

/// Closed vocabulary of issue codes, one family per rule domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    // general
    TypeMismatch,
    RequiredFieldMissing,
    UnknownDataType,

    // string
    StringTooShort,
    StringTooLong,
    StringPatternMismatch,
    StringNotAscii,
    StringNotSlug,
    StringEmpty,
    StringInvalidEmail,
    StringInvalidUrl,
    StringInvalidPhone,

    // number
    NumberTooSmall,
    NumberTooLarge,
    NumberNotInteger,
    NumberPrecisionExceeded,
    NumberScaleExceeded,
    NumberNotPositive,
    NumberNegative,
    NumberNotFinite,

    // temporal
    DateInvalidFormat,
    DatetimeInvalidFormat,
    DateOutOfRange,
    DateNotPast,
    DateNotFuture,

    // enum / choice
    EnumInvalidChoice,
    EnumTooManySelections,
    EnumTooFewSelections,
    EnumDuplicateSelection,

    // identifier / reference
    ReferenceInvalidUuid,
    ReferenceInvalidEntityRef,

    // structural
    JsonNotSerializable,
    JsonCircularReference,
    JsonInvalidStructure,
}

impl IssueCode {
    /// The wire form of the code, e.g. `"string_too_short"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::RequiredFieldMissing => "required_field_missing",
            Self::UnknownDataType => "unknown_data_type",
            Self::StringTooShort => "string_too_short",
            Self::StringTooLong => "string_too_long",
            Self::StringPatternMismatch => "string_pattern_mismatch",
            Self::StringNotAscii => "string_not_ascii",
            Self::StringNotSlug => "string_not_slug",
            Self::StringEmpty => "string_empty",
            Self::StringInvalidEmail => "string_invalid_email",
            Self::StringInvalidUrl => "string_invalid_url",
            Self::StringInvalidPhone => "string_invalid_phone",
            Self::NumberTooSmall => "number_too_small",
            Self::NumberTooLarge => "number_too_large",
            Self::NumberNotInteger => "number_not_integer",
            Self::NumberPrecisionExceeded => "number_precision_exceeded",
            Self::NumberScaleExceeded => "number_scale_exceeded",
            Self::NumberNotPositive => "number_not_positive",
            Self::NumberNegative => "number_negative",
            Self::NumberNotFinite => "number_not_finite",
            Self::DateInvalidFormat => "date_invalid_format",
            Self::DatetimeInvalidFormat => "datetime_invalid_format",
            Self::DateOutOfRange => "date_out_of_range",
            Self::DateNotPast => "date_not_past",
            Self::DateNotFuture => "date_not_future",
            Self::EnumInvalidChoice => "enum_invalid_choice",
            Self::EnumTooManySelections => "enum_too_many_selections",
            Self::EnumTooFewSelections => "enum_too_few_selections",
            Self::EnumDuplicateSelection => "enum_duplicate_selection",
            Self::ReferenceInvalidUuid => "reference_invalid_uuid",
            Self::ReferenceInvalidEntityRef => "reference_invalid_entity_ref",
            Self::JsonNotSerializable => "json_not_serializable",
            Self::JsonCircularReference => "json_circular_reference",
            Self::JsonInvalidStructure => "json_invalid_structure",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Severity of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Causes the overall result to fail.
    #[default]
    Error,
    /// Attached to an otherwise successful result.
    Warn,
}

// ============================================================================
// PARAMS
// ============================================================================

/// Structured parameters for message rendering, in insertion order.
///
/// Stored inline for the common case of up to four params.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueParams(SmallVec<[(Cow<'static, str>, Value); 4]>);

impl IssueParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if there are no params.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of params.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates params in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl From<()> for IssueParams {
    fn from((): ()) -> Self {
        Self::new()
    }
}

impl<const N: usize> From<[(&'static str, Value); N]> for IssueParams {
    fn from(pairs: [(&'static str, Value); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (Cow::Borrowed(k), v))
                .collect(),
        )
    }
}

impl Serialize for IssueParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k.as_ref(), v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for IssueParams {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self(
            map.into_iter().map(|(k, v)| (Cow::Owned(k), v)).collect(),
        ))
    }
}

// ============================================================================
// VALIDATION ISSUE
// ============================================================================

/// One validation problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Machine-readable code.
    pub code: IssueCode,
    /// Snapshot of the field path at the moment the issue was produced.
    pub path: FieldPath,
    /// Whether the issue fails the result.
    pub severity: Severity,
    /// Structured context such as `{min, actual}`.
    #[serde(default, skip_serializing_if = "IssueParams::is_empty")]
    pub params: IssueParams,
}

impl ValidationIssue {
    /// Returns `true` for `error` severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` for `warn` severity.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warn
    }

    /// Looks up a parameter by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// The path rendered as `items[0].name`.
    #[must_use]
    pub fn path_string(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "[{}] {}", self.path_string(), self.code)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        if self.is_warning() {
            write!(f, " [warn]")?;
        }

        Ok(())
    }
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

/// Builds an issue whose path is a copy of `ctx`'s field path at call time.
pub fn issue(
    code: IssueCode,
    ctx: &ValidationContext,
    params: impl Into<IssueParams>,
    severity: Severity,
) -> ValidationIssue {
    ValidationIssue {
        code,
        path: ctx.field_path().iter().cloned().collect(),
        severity,
        params: params.into(),
    }
}

/// Builds an `error`-severity issue.
pub fn error(
    code: IssueCode,
    ctx: &ValidationContext,
    params: impl Into<IssueParams>,
) -> ValidationIssue {
    issue(code, ctx, params, Severity::Error)
}

/// Builds a `warn`-severity issue.
pub fn warn(
    code: IssueCode,
    ctx: &ValidationContext,
    params: impl Into<IssueParams>,
) -> ValidationIssue {
    issue(code, ctx, params, Severity::Warn)
}
