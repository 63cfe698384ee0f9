//! Validating several fields of one record in a single pass.

use serde::{Deserialize, Serialize};
use serde_json::Map;

use super::{DataType, FieldConfig, field_validator};
use crate::combinators::optional;
use crate::foundation::{
    BoxValidator, PathSegment, Validate, ValidationContext, ValidationResult, Value, fail,
    ok_with_warnings,
};

/// One field of an entity: its name, data type and configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Key of the field in the record.
    pub name: String,
    /// Selects the preset validator.
    pub data_type: DataType,
    /// Preset options. Missing in JSON means empty.
    #[serde(default)]
    pub config: FieldConfig,
}

impl FieldSpec {
    /// A field with an empty configuration.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            config: FieldConfig::new(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }
}

/// Validates every declared field of `record` and collects all issues.
///
/// Each field is validated under its name in the field path, and absent or
/// `null` fields are accepted, as in
/// [`validate_custom_field_value`](super::validate_custom_field_value).
/// On success the record is returned with each present field replaced by
/// its normalized value; keys without a [`FieldSpec`] are kept as they are.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::prelude::*;
///
/// let fields = [
///     FieldSpec::new("email", DataType::Email),
///     FieldSpec::new("age", DataType::Integer).with_config(FieldConfig::new().with("min", 0)),
/// ];
/// let record = json!({"email": "x", "age": -3});
/// let result = validate_record(&fields, record.as_object().unwrap(), &ValidationContext::new());
///
/// let paths: Vec<_> = result.issues().iter().map(|i| i.path_string()).collect();
/// assert_eq!(paths, ["email", "age"]);
/// ```
pub fn validate_record(
    fields: &[FieldSpec],
    record: &Map<String, Value>,
    ctx: &ValidationContext,
) -> ValidationResult<Value> {
    validate_fields(fields, record, ctx, |field| {
        field_validator(field.data_type, &field.config)
    })
}

fn validate_fields(
    fields: &[FieldSpec],
    record: &Map<String, Value>,
    ctx: &ValidationContext,
    resolve: impl Fn(&FieldSpec) -> BoxValidator,
) -> ValidationResult<Value> {
    let mut output = record.clone();
    let mut issues = Vec::new();
    let mut failed = false;

    for field in fields {
        let child = ctx.child(&[PathSegment::Key(field.name.clone())]);
        let validator = optional(resolve(field));
        let present = record.get(&field.name);

        match validator.validate_field(present, &child) {
            ValidationResult::Valid { value, warnings } => {
                issues.extend(warnings);
                if present.is_some() {
                    output.insert(field.name.clone(), value);
                }
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
        ok_with_warnings(Value::Object(output), issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::foundation::{IssueCode, ValidationMode, from_fn, ok};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn contact_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("name", DataType::ShortText)
                .with_config(FieldConfig::new().with("minLength", 1)),
            FieldSpec::new("email", DataType::Email),
            FieldSpec::new("score", DataType::Integer)
                .with_config(FieldConfig::new().with("min", 0).with("max", 10)),
        ]
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn normalizes_present_fields_and_keeps_extras() {
        let record = object(json!({
            "name": "  Ada ",
            "email": "ADA@EXAMPLE.COM",
            "source": "import",
        }));
        let result = validate_record(&contact_fields(), &record, &ValidationContext::new());
        assert_eq!(
            result.value(),
            Some(&json!({"name": "Ada", "email": "ada@example.com", "source": "import"}))
        );
    }

    #[test]
    fn reports_every_field_under_its_own_path() {
        let record = object(json!({"name": "   ", "email": "nope", "score": 15}));
        let ctx = ValidationContext::for_entity("contact").with_field_path(["data"]);
        let result = validate_record(&contact_fields(), &record, &ctx);

        let found: Vec<_> = result
            .issues()
            .iter()
            .map(|i| (i.path_string(), i.code))
            .collect();
        assert_eq!(
            found,
            vec![
                ("data.name".to_owned(), IssueCode::StringTooShort),
                ("data.email".to_owned(), IssueCode::StringInvalidEmail),
                ("data.score".to_owned(), IssueCode::NumberTooLarge),
            ]
        );
    }

    #[test]
    fn null_fields_are_accepted() {
        let record = object(json!({"name": null}));
        let result = validate_record(&contact_fields(), &record, &ValidationContext::new());
        assert_eq!(result.value(), Some(&json!({"name": null})));
    }

    #[test]
    fn fields_see_the_callers_mode() {
        let ctx = ValidationContext::for_entity("contact").with_mode(ValidationMode::Import);
        let record = object(json!({"name": "Ada", "score": 3}));
        let result = validate_fields(&contact_fields(), &record, &ctx, |_| {
            Arc::new(from_fn(|_: &Value, ctx: &ValidationContext| {
                ok(json!([ctx.mode(), ctx.path_string()]))
            }))
        });

        assert_eq!(
            result.value(),
            Some(&json!({"name": ["import", "name"], "score": ["import", "score"]}))
        );
    }

    #[test]
    fn field_specs_deserialize_from_camel_case() {
        let field: FieldSpec = serde_json::from_value(json!({
            "name": "tags",
            "dataType": "multi_select",
            "config": {"maxSelections": 3},
        }))
        .unwrap();
        assert_eq!(field.data_type, DataType::MultiSelect);
        assert_eq!(field.config.max_selections(), Some(3));

        let bare: FieldSpec =
            serde_json::from_value(json!({"name": "n", "dataType": "integer"})).unwrap();
        assert!(bare.config.is_empty());
    }
}
