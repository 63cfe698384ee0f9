//! Data-type registry
//!
//! Maps every [`DataType`] to a preset factory that turns a
//! [`FieldConfig`] into a composed validator. The table is built once and
//! never modified afterwards.
//!
//! [`validate_custom_field_value`] is the entry point for field-level
//! validation: it resolves the preset by tag and accepts absent or `null`
//! values regardless of the preset's own rules.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let ctx = ValidationContext::for_entity("invoice").with_field_path(["total"]);
//! let config = FieldConfig::new().with("min", 0);
//!
//! let result = validate_custom_field_value("money", &config, Some(&json!(12.5)), &ctx);
//! assert!(result.is_valid());
//!
//! let result = validate_custom_field_value("money", &config, Some(&json!(-1)), &ctx);
//! assert_eq!(result.issues()[0].path_string(), "total");
//!
//! assert!(registry().is_complete());
//! ```

pub mod config;
pub mod data_type;
pub mod presets;
pub mod record;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use tracing::{debug, trace, warn};

pub use config::FieldConfig;
pub use data_type::DataType;
pub use presets::Factory;
pub use record::{FieldSpec, validate_record};

use crate::combinators::optional;
use crate::foundation::{
    BoxValidator, IssueCode, Validate, ValidationContext, ValidationResult, Value, error, fail,
    from_fn,
};

/// Immutable table from data type to preset factory.
#[derive(Clone)]
pub struct ValidatorRegistry {
    factories: BTreeMap<DataType, Factory>,
}

impl ValidatorRegistry {
    /// A registry holding the built-in preset for every data type.
    pub fn with_presets() -> Self {
        DataType::ALL
            .into_iter()
            .map(|data_type| (data_type, presets::factory(data_type)))
            .collect()
    }

    /// The factory registered for `data_type`.
    pub fn get(&self, data_type: DataType) -> Option<Factory> {
        self.factories.get(&data_type).copied()
    }

    /// Builds the validator for `data_type` from `config`.
    pub fn build(&self, data_type: DataType, config: &FieldConfig) -> Option<BoxValidator> {
        self.get(data_type).map(|factory| factory(config))
    }

    /// Registered data types in declaration order.
    pub fn data_types(&self) -> impl Iterator<Item = DataType> + '_ {
        self.factories.keys().copied()
    }

    pub fn contains(&self, data_type: DataType) -> bool {
        self.factories.contains_key(&data_type)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Data types without a factory.
    pub fn missing(&self) -> Vec<DataType> {
        DataType::ALL
            .into_iter()
            .filter(|data_type| !self.contains(*data_type))
            .collect()
    }

    /// Whether every data type has a factory.
    pub fn is_complete(&self) -> bool {
        DataType::ALL.iter().all(|data_type| self.contains(*data_type))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::with_presets()
    }
}

/// Builds a registry from explicit entries, e.g. a restricted subset.
impl FromIterator<(DataType, Factory)> for ValidatorRegistry {
    fn from_iter<I: IntoIterator<Item = (DataType, Factory)>>(iter: I) -> Self {
        Self {
            factories: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("data_types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The built-in registry.
pub static CUSTOM_FIELD_VALIDATORS: LazyLock<ValidatorRegistry> =
    LazyLock::new(ValidatorRegistry::with_presets);

/// Shorthand for [`CUSTOM_FIELD_VALIDATORS`].
pub fn registry() -> &'static ValidatorRegistry {
    &CUSTOM_FIELD_VALIDATORS
}

/// Builds the preset validator for a known data type.
pub fn field_validator(data_type: DataType, config: &FieldConfig) -> BoxValidator {
    let validator = presets::factory(data_type)(config);
    debug!(data_type = %data_type, config_keys = config.as_map().len(), "resolved field validator");
    validator
}

/// Builds the preset validator for a data-type tag.
///
/// An unknown tag never panics: it yields a validator that rejects every
/// value with `unknown_data_type`.
pub fn get_field_validator(tag: &str, config: &FieldConfig) -> BoxValidator {
    match tag.parse::<DataType>() {
        Ok(data_type) => field_validator(data_type, config),
        Err(_) => {
            warn!(data_type = tag, "unknown data type, every value will be rejected");
            unknown_data_type(tag)
        }
    }
}

fn unknown_data_type(tag: &str) -> BoxValidator {
    let tag = tag.to_owned();
    Arc::new(from_fn(move |_: &Value, ctx: &ValidationContext| {
        fail::<Value>(vec![error(
            IssueCode::UnknownDataType,
            ctx,
            [("dataType", Value::from(tag.as_str()))],
        )])
    }))
}

/// Validates one custom-field value against the preset for `tag`.
///
/// `None` (missing) and `null` are accepted as `null` without consulting
/// the preset, even for an unknown tag.
pub fn validate_custom_field_value(
    tag: &str,
    config: &FieldConfig,
    value: Option<&Value>,
    ctx: &ValidationContext,
) -> ValidationResult<Value> {
    let validator = optional(get_field_validator(tag, config));
    let result = validator.validate_field(value, ctx);
    trace!(
        data_type = tag,
        entity = ctx.entity_type(),
        path = %ctx.path_string(),
        valid = result.is_valid(),
        issues = result.issues().len(),
        "validated custom field"
    );
    result
}
