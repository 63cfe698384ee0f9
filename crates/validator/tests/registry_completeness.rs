//! Every data type resolves to a validator that never panics.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        json!(true),
        json!(0),
        json!(-12.75),
        json!(""),
        json!("  some text  "),
        json!("2024-02-29"),
        json!("123e4567-e89b-12d3-a456-426614174000"),
        json!(["a", "b"]),
        json!({"k": [1, {"n": null}]}),
    ]
}

fn busy_config() -> FieldConfig {
    FieldConfig::new()
        .with("minLength", 1)
        .with("maxLength", 8)
        .with("pattern", "^[a-z]+$")
        .with("min", -5)
        .with("max", 5)
        .with("precision", 4)
        .with("scale", 1)
        .with("choices", json!(["a", "b"]))
        .with("minSelections", 1)
        .with("maxSelections", 2)
        .with("unique", true)
        .with("minDate", "2000-01-01")
        .with("maxDate", "2030-12-31")
        .with("multiple", true)
}

#[test]
fn registry_covers_every_data_type() {
    let registry = registry();
    assert!(registry.is_complete());
    for data_type in DataType::ALL {
        assert!(registry.contains(data_type), "{data_type} has no preset");
    }
    assert_eq!(registry.data_types().count(), DataType::ALL.len());
}

#[test]
fn every_preset_handles_every_shape() {
    let ctx = ValidationContext::new();
    for config in [FieldConfig::new(), busy_config()] {
        for data_type in DataType::ALL {
            let validator = get_field_validator(data_type.as_str(), &config);
            for value in samples() {
                let result = validator.validate(&value, &ctx);
                if let ValidationResult::Invalid { issues } = &result {
                    assert!(!issues.is_empty(), "{data_type}: empty failure for {value}");
                    assert!(issues.iter().any(ValidationIssue::is_error));
                }
            }
        }
    }
}

#[test]
fn null_passes_every_type_through_the_entry_point() {
    let ctx = ValidationContext::new();
    for data_type in DataType::ALL {
        for value in [None, Some(&Value::Null)] {
            let result = validate_custom_field_value(data_type.as_str(), &busy_config(), value, &ctx);
            assert_eq!(result, ok(Value::Null), "{data_type}");
        }
    }
}

#[rstest]
#[case(DataType::ShortText, json!("  hello "), json!("hello"))]
#[case(DataType::Email, json!(" A@B.IO "), json!("a@b.io"))]
#[case(DataType::Currency, json!("usd"), json!("USD"))]
#[case(DataType::Datetime, json!("2024-01-01T00:00:00-05:00"), json!("2024-01-01T05:00:00.000Z"))]
#[case(DataType::Url, json!("HTTP://EXAMPLE.com"), json!("http://example.com/"))]
fn presets_normalize_accepted_values(
    #[case] data_type: DataType,
    #[case] input: Value,
    #[case] expected: Value,
) {
    let validator = field_validator(data_type, &FieldConfig::new());
    let result = validator.validate(&input, &ValidationContext::new());
    assert_eq!(result.into_value(), Some(expected));
}

#[test]
fn unknown_tags_fail_without_panicking() {
    let ctx = ValidationContext::for_entity("deal").with_field_path(["custom", "geo"]);
    for tag in ["geo_point", "INTEGER", "", "short-text"] {
        let result = get_field_validator(tag, &FieldConfig::new()).validate(&json!(1), &ctx);
        let issue = &result.issues()[0];
        assert_eq!(issue.code, IssueCode::UnknownDataType);
        assert_eq!(issue.param("dataType"), Some(&json!(tag)));
        assert_eq!(issue.path_string(), "custom.geo");
    }
}
