//! Date and datetime canonicalization, plus the parsing helpers the temporal
//! rule validators share.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::foundation::Value;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a calendar date written as `YYYY-MM-DD`.
pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

/// Parses an RFC 3339 timestamp with any offset, converted to UTC.
pub(crate) fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses a timestamp without an offset, read as UTC.
fn parse_naive(input: &str) -> Option<DateTime<Utc>> {
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Any supported date or datetime spelling as a UTC instant. Bare dates
/// are midnight UTC.
fn parse_any(input: &str) -> Option<DateTime<Utc>> {
    parse_instant(input)
        .or_else(|| parse_date(input).and_then(|d| d.and_hms_opt(0, 0, 0)).map(|n| n.and_utc()))
        .or_else(|| parse_naive(input))
}

crate::normalizer! {
    /// Re-renders any parsable date or datetime as `YYYY-MM-DD` (the UTC
    /// calendar day). Unparsable strings come back trimmed.
    pub NormalizeDate for str;
    normalize(input) {
        let trimmed = input.trim();
        let rendered = parse_date(trimmed)
            .or_else(|| parse_any(trimmed).map(|dt| dt.date_naive()))
            .map_or_else(|| trimmed.to_owned(), |d| d.format(DATE_FORMAT).to_string());
        Value::from(rendered)
    }
    fn normalize_date();
}

crate::normalizer! {
    /// Re-renders any parsable date or datetime as RFC 3339 in UTC with
    /// millisecond precision, e.g. `2024-03-01T09:30:00.000Z`. Unparsable
    /// strings come back trimmed.
    pub NormalizeDatetime for str;
    normalize(input) {
        let trimmed = input.trim();
        let rendered = parse_any(trimmed).map_or_else(
            || trimmed.to_owned(),
            |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        Value::from(rendered)
    }
    fn normalize_datetime();
}
