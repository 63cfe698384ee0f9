//! String rules: length, pattern, character set and format shape.
//!
//! Lengths are counted in Unicode scalar values, not bytes. Format rules
//! check shape only: an address that passes `email_format` may still be
//! undeliverable.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;
use crate::foundation::{IssueCode, IssueParams, Value, error};

static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s\-().]+$").unwrap());

const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

// ============================================================================
// LENGTH
// ============================================================================

crate::rule! {
    /// At least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for str;
    rule(self, input) { input.chars().count() >= self.min }
    issue(self, input, ctx) {
        error(
            IssueCode::StringTooShort,
            ctx,
            [("min", Value::from(self.min)), ("actual", Value::from(input.chars().count()))],
        )
    }
    fn min_length(min: usize);
}

crate::rule! {
    /// At most `max` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    issue(self, input, ctx) {
        error(
            IssueCode::StringTooLong,
            ctx,
            [("max", Value::from(self.max)), ("actual", Value::from(input.chars().count()))],
        )
    }
    fn max_length(max: usize);
}

crate::rule! {
    /// Not empty once surrounding whitespace is ignored.
    pub NotBlank for str;
    rule(input) { !input.trim().is_empty() }
    issue(input, ctx) { error(IssueCode::StringEmpty, ctx, ()) }
    fn not_blank();
}

// ============================================================================
// PATTERN
// ============================================================================

crate::rule! {
    /// Matches a regular expression. An optional `format` name (for example
    /// `"postal_code"`) is reported alongside the pattern.
    pub MatchesPattern { pattern: Regex, format: Option<String> } for str;
    rule(self, input) { self.pattern.is_match(input) }
    issue(self, input, ctx) {
        let mut params = IssueParams::new().with("pattern", self.pattern.as_str());
        if let Some(format) = &self.format {
            params = params.with("format", format.as_str());
        }
        error(IssueCode::StringPatternMismatch, ctx, params)
    }
    new(pattern: &str) -> Error {
        let compiled = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self { pattern: compiled, format: None })
    }
    fn matches_pattern(pattern: &str) -> Error;
}

impl MatchesPattern {
    /// Names the format the pattern describes.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

// ============================================================================
// CHARACTER SET
// ============================================================================

crate::rule! {
    /// Only ASCII characters.
    pub AsciiOnly for str;
    rule(input) { input.is_ascii() }
    issue(input, ctx) { error(IssueCode::StringNotAscii, ctx, ()) }
    fn ascii_only();
}

crate::rule! {
    /// Lowercase alphanumeric words joined by single hyphens, e.g. `my-post-2`.
    pub SlugShape for str;
    rule(input) { SLUG_REGEX.is_match(input) }
    issue(input, ctx) { error(IssueCode::StringNotSlug, ctx, ()) }
    fn slug_shape();
}

// ============================================================================
// FORMATS
// ============================================================================

crate::rule! {
    /// Email address shape.
    pub EmailFormat for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    issue(input, ctx) { error(IssueCode::StringInvalidEmail, ctx, ()) }
    fn email_format();
}

crate::rule! {
    /// Absolute `http` or `https` URL with a host.
    pub UrlFormat for str;
    rule(input) { is_web_url(input) }
    issue(input, ctx) { error(IssueCode::StringInvalidUrl, ctx, ()) }
    fn url_format();
}

fn is_web_url(input: &str) -> bool {
    url::Url::parse(input).is_ok_and(|u| {
        matches!(u.scheme(), "http" | "https") && u.host_str().is_some_and(|h| !h.is_empty())
    })
}

crate::rule! {
    /// Phone number shape: an optional leading `+`, digits and the usual
    /// separators (spaces, `-`, `.`, parentheses), with 7 to 15 digits.
    pub PhoneFormat for str;
    rule(input) { is_phone(input) }
    issue(input, ctx) { error(IssueCode::StringInvalidPhone, ctx, ()) }
    fn phone_format();
}

fn is_phone(input: &str) -> bool {
    if !PHONE_CHARS.is_match(input) {
        return false;
    }
    let digits = input.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
