//! Whitespace, case and slug normalizers.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::Value;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

crate::normalizer! {
    /// Removes leading and trailing Unicode whitespace.
    pub TrimWhitespace for str;
    normalize(input) { Value::from(input.trim()) }
    fn trim_whitespace();
}

crate::normalizer! {
    /// Replaces every run of whitespace with a single space. Edges are kept.
    pub CollapseWhitespace for str;
    normalize(input) { Value::from(WHITESPACE_RUN.replace_all(input, " ").into_owned()) }
    fn collapse_whitespace();
}

crate::normalizer! {
    /// Locale-insensitive lowercase.
    pub ToLowercase for str;
    normalize(input) { Value::from(input.to_lowercase()) }
    fn to_lowercase();
}

crate::normalizer! {
    /// Locale-insensitive uppercase.
    pub ToUppercase for str;
    normalize(input) { Value::from(input.to_uppercase()) }
    fn to_uppercase();
}

crate::normalizer! {
    /// Turns free text into a URL slug: `"Hello World!"` becomes `"hello-world"`.
    /// Anything outside ASCII letters, digits and separators is dropped.
    pub ToSlug for str;
    normalize(input) { Value::from(slugify(input)) }
    fn to_slug();
}

fn slugify(input: &str) -> String {
    let lower = input.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lower.trim(), "");
    let hyphenated = SEPARATOR_RUN.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidationContext};
    use crate::normalizers::Normalize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn trim_is_a_successful_validation() {
        let result = trim_whitespace().validate(&json!("  hello  "), &ValidationContext::new());
        assert_eq!(result.value(), Some(&json!("hello")));
        assert!(result.issues().is_empty());
    }

    #[rstest]
    #[case("a  b\t\nc", "a b c")]
    #[case("  edge  ", " edge ")]
    #[case("none", "none")]
    fn collapse_keeps_edges(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(collapse_whitespace().normalize(&json!(input)), json!(expected));
    }

    #[rstest]
    #[case("Hello World!", "hello-world")]
    #[case("hello-world", "hello-world")]
    #[case("  --Rust_is   FUN--  ", "rust-is-fun")]
    #[case("a - b", "a-b")]
    #[case("Crème Brûlée", "crme-brle")]
    #[case("Ünïcödé 42", "ncd-42")]
    #[case("!!!", "")]
    fn slug_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_slug().normalize(&json!(input)), json!(expected));
    }

    #[rstest]
    #[case("Crème Brûlée")]
    #[case("  Ünïcödé -- Title_42 ")]
    #[case("İstanbul KELVIN \u{212a}")]
    fn slugs_satisfy_the_slug_rule(#[case] input: &str) {
        let slugged = crate::pipe![to_slug(), crate::validators::slug_shape()];
        assert!(slugged.validate(&json!(input), &ValidationContext::new()).is_valid());
    }

    #[test]
    fn case_folding() {
        assert_eq!(to_lowercase().normalize(&json!("MiXeD")), json!("mixed"));
        assert_eq!(to_uppercase().normalize(&json!("straße")), json!("STRASSE"));
    }

    #[test]
    fn non_strings_pass_through() {
        for value in [json!(null), json!(1), json!(true), json!(["A"])] {
            assert_eq!(to_uppercase().normalize(&value), value);
            assert_eq!(to_slug().normalize(&value), value);
            assert_eq!(trim_whitespace().normalize(&value), value);
        }
    }

    #[test]
    fn applying_twice_changes_nothing() {
        let inputs = ["  Hello   World  ", "Already-a-slug", "\u{a0}nbsp\u{a0}", "x__y"];
        let normalizers: [&dyn Normalize; 5] = [
            &trim_whitespace(),
            &collapse_whitespace(),
            &to_lowercase(),
            &to_uppercase(),
            &to_slug(),
        ];
        for input in inputs {
            for normalizer in normalizers {
                let once = normalizer.normalize(&json!(input));
                assert_eq!(normalizer.normalize(&once), once, "input {input:?}");
            }
        }
    }
}
