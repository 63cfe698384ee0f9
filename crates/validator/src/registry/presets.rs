//! Preset validators, one per [`DataType`].
//!
//! Each preset is a plain function from [`FieldConfig`] to a composed
//! validator. Checks whose configuration key is missing are left out
//! entirely, so an empty config yields the bare type and shape checks.

use std::sync::LazyLock;

use regex::Regex;

use super::{DataType, FieldConfig};
use crate::combinators::{all_of, any, pass_through, pipe, pipe_all};
use crate::foundation::{BoxValidator, ValidateExt};
use crate::normalizers::{
    normalize_datetime, normalize_email, normalize_url, to_uppercase, trim_whitespace,
};
use crate::validators::{self as rules, MatchesPattern};

/// Builds a field validator from its configuration.
pub type Factory = fn(&FieldConfig) -> BoxValidator;

/// Scale applied to money fields that do not configure one.
pub const DEFAULT_MONEY_SCALE: u32 = 2;

static CURRENCY_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

static BASE64: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").unwrap()
});

/// The preset for `data_type`.
///
/// The match is exhaustive: adding a [`DataType`] variant without a preset
/// does not compile.
pub fn factory(data_type: DataType) -> Factory {
    match data_type {
        DataType::ShortText => short_text,
        DataType::LongText | DataType::RichText => long_text,
        DataType::Integer => integer,
        DataType::Decimal => decimal,
        DataType::Money => money,
        DataType::Email => email,
        DataType::Url => url,
        DataType::EntityRef => entity_ref,
        DataType::Date => date,
        DataType::Datetime => datetime,
        DataType::Json => json,
        DataType::Boolean => boolean,
        DataType::Phone => phone,
        DataType::Enum | DataType::SingleSelect => single_choice,
        DataType::MultiEnum | DataType::MultiSelect => multi_choice,
        DataType::Currency => currency,
        DataType::Formula => formula,
        DataType::Relation => relation,
        DataType::Binary => binary,
        DataType::File => file,
    }
}

// ============================================================================
// TEXT
// ============================================================================

fn push_text_checks(config: &FieldConfig, steps: &mut Vec<BoxValidator>) {
    if let Some(min) = config.min_length() {
        steps.push(rules::min_length(min).boxed());
    }
    if let Some(max) = config.max_length() {
        steps.push(rules::max_length(max).boxed());
    }
    if let Some(pattern) = config.pattern() {
        match rules::matches_pattern(pattern) {
            Ok(rule) => {
                let rule = match config.format() {
                    Some(format) => rule.with_format(format),
                    None => rule,
                };
                steps.push(rule.boxed());
            }
            Err(err) => tracing::warn!(pattern, error = %err, "skipping uncompilable field pattern"),
        }
    }
}

/// Trimmed single-line text.
fn short_text(config: &FieldConfig) -> BoxValidator {
    let mut steps = vec![rules::is_string().boxed(), trim_whitespace().boxed()];
    push_text_checks(config, &mut steps);
    pipe_all(steps).boxed()
}

/// Multi-line and rich text keep their surrounding whitespace.
fn long_text(config: &FieldConfig) -> BoxValidator {
    let mut steps = vec![rules::is_string().boxed()];
    push_text_checks(config, &mut steps);
    pipe_all(steps).boxed()
}

fn email(config: &FieldConfig) -> BoxValidator {
    let mut steps = vec![
        rules::is_string().boxed(),
        normalize_email().boxed(),
        rules::email_format().boxed(),
    ];
    if let Some(max) = config.max_length() {
        steps.push(rules::max_length(max).boxed());
    }
    pipe_all(steps).boxed()
}

fn url(_config: &FieldConfig) -> BoxValidator {
    pipe_all(vec![
        rules::is_string().boxed(),
        trim_whitespace().boxed(),
        rules::url_format().boxed(),
        normalize_url().boxed(),
    ])
    .boxed()
}

fn phone(_config: &FieldConfig) -> BoxValidator {
    pipe_all(vec![
        rules::is_string().boxed(),
        trim_whitespace().boxed(),
        rules::phone_format().boxed(),
    ])
    .boxed()
}

/// ISO 4217-shaped code, upper-cased, optionally restricted to `choices`.
fn currency(config: &FieldConfig) -> BoxValidator {
    let code_shape = MatchesPattern {
        pattern: CURRENCY_CODE.clone(),
        format: Some("currency_code".to_owned()),
    };
    let mut steps = vec![
        rules::is_string().boxed(),
        trim_whitespace().boxed(),
        to_uppercase().boxed(),
        code_shape.boxed(),
    ];
    if let Some(choices) = config.choices() {
        steps.push(rules::one_of(choices.to_vec()).boxed());
    }
    pipe_all(steps).boxed()
}

fn binary(_config: &FieldConfig) -> BoxValidator {
    let base64 = MatchesPattern {
        pattern: BASE64.clone(),
        format: Some("base64".to_owned()),
    };
    pipe(rules::is_string(), base64).boxed()
}

// ============================================================================
// NUMBERS
// ============================================================================

fn push_bounds(config: &FieldConfig, steps: &mut Vec<BoxValidator>) {
    if let Some(min) = config.min() {
        steps.push(rules::min(min).boxed());
    }
    if let Some(max) = config.max() {
        steps.push(rules::max(max).boxed());
    }
}

fn integer(config: &FieldConfig) -> BoxValidator {
    let mut steps = vec![rules::is_number().boxed(), rules::integer().boxed()];
    push_bounds(config, &mut steps);
    pipe_all(steps).boxed()
}

fn decimal_with_scale(config: &FieldConfig, scale: Option<u32>) -> BoxValidator {
    let mut steps = vec![rules::is_number().boxed(), rules::finite().boxed()];
    push_bounds(config, &mut steps);
    if let Some(precision) = config.precision() {
        steps.push(rules::precision(precision).boxed());
    }
    if let Some(scale) = scale {
        steps.push(rules::scale(scale).boxed());
    }
    pipe_all(steps).boxed()
}

fn decimal(config: &FieldConfig) -> BoxValidator {
    decimal_with_scale(config, config.scale())
}

fn money(config: &FieldConfig) -> BoxValidator {
    decimal_with_scale(config, Some(config.scale().unwrap_or(DEFAULT_MONEY_SCALE)))
}

// ============================================================================
// TEMPORAL
// ============================================================================

fn date(config: &FieldConfig) -> BoxValidator {
    let (min, max) = (config.min_date(), config.max_date());
    if min.is_none() && max.is_none() {
        return rules::iso_date().boxed();
    }
    pipe(rules::iso_date(), rules::date_range(min, max)).boxed()
}

fn datetime(_config: &FieldConfig) -> BoxValidator {
    pipe(rules::iso_datetime(), normalize_datetime()).boxed()
}

// ============================================================================
// CHOICES
// ============================================================================

fn single_choice(config: &FieldConfig) -> BoxValidator {
    match config.choices() {
        Some(choices) => rules::one_of(choices.to_vec()).boxed(),
        None => pass_through().boxed(),
    }
}

/// Every configured check runs, so one pass reports bad entries and bad
/// counts together.
fn multi_choice(config: &FieldConfig) -> BoxValidator {
    let mut checks = Vec::new();
    if let Some(choices) = config.choices() {
        checks.push(rules::all_in(choices.to_vec()).boxed());
    }
    if let Some(max) = config.max_selections() {
        checks.push(rules::max_selections(max).boxed());
    }
    if let Some(min) = config.min_selections() {
        checks.push(rules::min_selections(min).boxed());
    }
    if config.unique() {
        checks.push(rules::unique_items().boxed());
    }

    if checks.is_empty() {
        pass_through().boxed()
    } else {
        pipe(rules::is_array(), all_of(checks)).boxed()
    }
}

// ============================================================================
// REFERENCES AND STRUCTURE
// ============================================================================

fn entity_ref(_config: &FieldConfig) -> BoxValidator {
    rules::entity_ref().boxed()
}

/// A bare UUID or `type:uuid` reference, or an array of UUIDs when
/// `multiple` is set.
fn relation(config: &FieldConfig) -> BoxValidator {
    if config.multiple() {
        rules::uuid_array().boxed()
    } else {
        any(rules::uuid(), rules::entity_ref()).boxed()
    }
}

/// An uploaded file's id or its metadata object.
fn file(_config: &FieldConfig) -> BoxValidator {
    any(rules::uuid(), rules::plain_object()).boxed()
}

fn json(_config: &FieldConfig) -> BoxValidator {
    rules::json_serializable().boxed()
}

fn boolean(_config: &FieldConfig) -> BoxValidator {
    rules::is_boolean().boxed()
}

/// Computed server-side, so any stored value is accepted.
fn formula(_config: &FieldConfig) -> BoxValidator {
    pass_through().boxed()
}
