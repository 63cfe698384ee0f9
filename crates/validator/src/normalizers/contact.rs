//! Email, phone and URL canonicalization.

use crate::foundation::Value;

crate::normalizer! {
    /// Trims and lowercases the whole address, local part included.
    pub NormalizeEmail for str;
    normalize(input) { Value::from(input.trim().to_lowercase()) }
    fn normalize_email();
}

crate::normalizer! {
    /// Keeps only the ASCII digits: `"+1 (555) 010-9999"` becomes `"15550109999"`.
    pub NormalizePhone for str;
    normalize(input) {
        Value::from(input.chars().filter(char::is_ascii_digit).collect::<String>())
    }
    fn normalize_phone();
}

crate::normalizer! {
    /// Lowercases scheme and host and keeps path, query and fragment as
    /// written. Strings that do not parse as an absolute URL with a host come
    /// back trimmed.
    pub NormalizeUrl for str;
    normalize(input) { Value::from(canonical_url(input.trim())) }
    fn normalize_url();
}

fn canonical_url(trimmed: &str) -> String {
    let Ok(parsed) = url::Url::parse(trimmed) else {
        return trimmed.to_owned();
    };
    let Some(host) = parsed.host_str() else {
        return trimmed.to_owned();
    };

    let mut out = format!("{}://{}", parsed.scheme(), host.to_ascii_lowercase());
    if let Some(port) = parsed.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out.push_str(parsed.path());
    if let Some(query) = parsed.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = parsed.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizers::Normalize;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn email_is_trimmed_and_lowercased() {
        assert_eq!(
            normalize_email().normalize(&json!("  User@Example.COM  ")),
            json!("user@example.com")
        );
    }

    #[rstest]
    #[case("+1 (555) 010-9999", "15550109999")]
    #[case("555.010.9999", "5550109999")]
    #[case("no digits", "")]
    fn phone_keeps_digits(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_phone().normalize(&json!(input)), json!(expected));
    }

    #[rstest]
    #[case("HTTPS://Example.COM/Path/To?Q=Yes#Frag", "https://example.com/Path/To?Q=Yes#Frag")]
    #[case("  http://EXAMPLE.com  ", "http://example.com/")]
    #[case("http://example.com:8080/a", "http://example.com:8080/a")]
    #[case("https://example.com:443/a", "https://example.com/a")]
    #[case("not a url", "not a url")]
    #[case("  mailto:someone@example.com ", "mailto:someone@example.com")]
    fn url_canonical_forms(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_url().normalize(&json!(input)), json!(expected));
    }

    #[test]
    fn url_drops_credentials() {
        assert_eq!(
            normalize_url().normalize(&json!("https://user:pw@Host.io/x")),
            json!("https://host.io/x")
        );
    }

    #[test]
    fn applying_twice_changes_nothing() {
        let inputs = [
            "  Mixed@Case.Org ",
            "+44 20 7946 0958",
            "HTTP://Example.com/A b?c=D",
            "garbage ",
        ];
        let normalizers: [&dyn Normalize; 3] =
            [&normalize_email(), &normalize_phone(), &normalize_url()];
        for input in inputs {
            for normalizer in normalizers {
                let once = normalizer.normalize(&json!(input));
                assert_eq!(normalizer.normalize(&once), once, "input {input:?}");
            }
        }
    }

    #[test]
    fn non_strings_pass_through() {
        assert_eq!(normalize_phone().normalize(&json!(5550100)), json!(5550100));
        assert_eq!(normalize_url().normalize(&json!(null)), json!(null));
    }
}
