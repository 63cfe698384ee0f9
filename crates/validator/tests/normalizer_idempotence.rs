//! Normalizing twice gives the same value as normalizing once.

use fieldcheck_validator::foundation::{Validate, ValidationContext, Value};
use fieldcheck_validator::normalizers::{
    Normalize, collapse_whitespace, normalize_date, normalize_datetime, normalize_email,
    normalize_phone, normalize_url, to_boolean, to_lowercase, to_number, to_slug, to_uppercase,
    trim_whitespace,
};
use fieldcheck_validator::validators::slug_shape;
use proptest::prelude::*;
use serde_json::json;

fn assert_idempotent<N: Normalize>(normalizer: &N, value: &Value) -> Result<(), TestCaseError> {
    let once = normalizer.normalize(value);
    let twice = normalizer.normalize(&once);
    prop_assert_eq!(once, twice);
    Ok(())
}

/// Printable ASCII, line breaks and a few non-ASCII letters and spaces.
fn text() -> impl Strategy<Value = String> {
    "[ -~\t\n\u{a0}éÉßüÜ]{0,40}"
}

/// Non-string values every normalizer must pass through untouched.
fn other_kinds() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i32>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(|n| json!(n)),
        prop::collection::vec("[a-z]{0,5}", 0..4).prop_map(|items| json!(items)),
    ]
}

proptest! {
    #[test]
    fn text_normalizers(s in text()) {
        let value = json!(s);
        assert_idempotent(&trim_whitespace(), &value)?;
        assert_idempotent(&collapse_whitespace(), &value)?;
        assert_idempotent(&to_lowercase(), &value)?;
        assert_idempotent(&to_uppercase(), &value)?;
        assert_idempotent(&to_slug(), &value)?;
        assert_idempotent(&normalize_email(), &value)?;
        assert_idempotent(&normalize_phone(), &value)?;
    }

    #[test]
    fn slugs_pass_the_slug_rule(s in text()) {
        let slug = to_slug().normalize(&json!(s));
        if slug != json!("") {
            prop_assert!(slug_shape().validate(&slug, &ValidationContext::new()).is_valid());
        }
    }

    #[test]
    fn coercions(s in prop_oneof![
        text(),
        "-?[0-9]{1,6}(\\.[0-9]{1,4})?",
        "(?i)(true|false|yes|no|on|off|1|0)",
    ]) {
        let value = json!(s);
        assert_idempotent(&to_number(), &value)?;
        assert_idempotent(&to_boolean(), &value)?;
    }

    #[test]
    fn urls(
        scheme in "(?i)https?",
        host in "[a-zA-Z]{1,10}\\.(com|ORG|Net)",
        path in "(/[a-zA-Z0-9]{0,6}){0,3}",
        query in "(\\?[a-z]{1,4}=[A-Za-z0-9]{0,4})?",
    ) {
        let value = json!(format!(" {scheme}://{host}{path}{query} "));
        assert_idempotent(&normalize_url(), &value)?;
    }

    #[test]
    fn unparseable_urls_come_back_trimmed(s in "[ a-zA-Z0-9./]{0,30}") {
        let once = normalize_url().normalize(&json!(s));
        prop_assert_eq!(&once, &json!(s.trim()));
        assert_idempotent(&normalize_url(), &once)?;
    }

    #[test]
    fn dates(
        year in 1970i32..2100,
        month in 1u32..=12,
        day in 1u32..=31,
        hour in 0u32..24,
        offset in -12i32..=12,
    ) {
        let date = json!(format!("{year:04}-{month:02}-{day:02}"));
        let stamp = json!(format!("{year:04}-{month:02}-{day:02}T{hour:02}:15:00{offset:+03}:00"));
        for value in [&date, &stamp] {
            assert_idempotent(&normalize_date(), value)?;
            assert_idempotent(&normalize_datetime(), value)?;
        }
    }

    #[test]
    fn other_kinds_pass_through(value in other_kinds()) {
        let ctx = ValidationContext::new();
        for result in [
            trim_whitespace().validate(&value, &ctx),
            to_slug().validate(&value, &ctx),
            normalize_email().validate(&value, &ctx),
            normalize_url().validate(&value, &ctx),
            normalize_date().validate(&value, &ctx),
        ] {
            prop_assert_eq!(result.value(), Some(&value));
        }
    }
}
