//! Date and datetime rules.
//!
//! `past_date` and `future_date` compare against "now", which makes them
//! the only time-dependent rules in the crate. The clock read goes through
//! the [`Clock`] trait so callers and tests can pin it.

use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::foundation::{
    IssueCode, IssueParams, Validate, ValidationContext, ValidationResult, Value, error, fail, ok,
    type_mismatch,
};
use crate::normalizers::temporal::{DATE_FORMAT, parse_date, parse_instant};

static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

// ============================================================================
// CLOCK
// ============================================================================

/// Source of the current instant.
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// ============================================================================
// FORMAT
// ============================================================================

crate::rule! {
    /// A real calendar date written as `YYYY-MM-DD`.
    pub IsoDate for str;
    rule(input) { DATE_SHAPE.is_match(input) && parse_date(input).is_some() }
    issue(input, ctx) { error(IssueCode::DateInvalidFormat, ctx, [("expected", Value::from("YYYY-MM-DD"))]) }
    fn iso_date();
}

crate::rule! {
    /// An RFC 3339 datetime with any offset, e.g. `2024-03-01T09:30:00+01:00`.
    pub IsoDateTime for str;
    rule(input) { parse_instant(input).is_some() }
    issue(input, ctx) { error(IssueCode::DatetimeInvalidFormat, ctx, ()) }
    fn iso_datetime();
}

// ============================================================================
// RANGE
// ============================================================================

/// Inclusive calendar-date range. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    /// Earliest allowed date.
    pub min: Option<NaiveDate>,
    /// Latest allowed date.
    pub max: Option<NaiveDate>,
}

impl DateRange {
    /// Creates the range.
    #[must_use]
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }
}

impl Validate for DateRange {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let Some(text) = value.as_str() else {
            return type_mismatch("string", value, ctx);
        };
        let Some(date) = parse_date(text) else {
            return fail(vec![error(IssueCode::DateInvalidFormat, ctx, ())]);
        };

        let too_early = self.min.is_some_and(|min| date < min);
        let too_late = self.max.is_some_and(|max| date > max);
        if !too_early && !too_late {
            return ok(value.clone());
        }

        let mut params = IssueParams::new();
        if let Some(min) = self.min {
            params = params.with("min", min.format(DATE_FORMAT).to_string());
        }
        if let Some(max) = self.max {
            params = params.with("max", max.format(DATE_FORMAT).to_string());
        }
        params = params.with("actual", text);
        fail(vec![error(IssueCode::DateOutOfRange, ctx, params)])
    }
}

/// Creates a [`DateRange`].
#[must_use]
pub fn date_range(min: Option<NaiveDate>, max: Option<NaiveDate>) -> DateRange {
    DateRange::new(min, max)
}

// ============================================================================
// RELATIVE TO NOW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Past,
    Future,
}

/// A date or datetime strictly before or after the clock's "now".
///
/// Bare dates are compared by calendar day against today's UTC date, so
/// today is neither past nor future. Datetimes are compared by instant.
#[derive(Debug, Clone)]
pub struct RelativeDate {
    clock: Arc<dyn Clock>,
    direction: Direction,
}

impl RelativeDate {
    fn holds<T: Ord>(&self, candidate: T, now: T) -> bool {
        match self.direction {
            Direction::Past => candidate < now,
            Direction::Future => candidate > now,
        }
    }
}

impl Validate for RelativeDate {
    type Output = Value;

    fn validate(&self, value: &Value, ctx: &ValidationContext) -> ValidationResult<Value> {
        let Some(text) = value.as_str() else {
            return type_mismatch("string", value, ctx);
        };

        let now = self.clock.now();
        let holds = if let Some(date) = parse_date(text) {
            self.holds(date, now.date_naive())
        } else if let Some(instant) = parse_instant(text) {
            self.holds(instant, now)
        } else {
            return fail(vec![error(IssueCode::DateInvalidFormat, ctx, ())]);
        };

        if holds {
            ok(value.clone())
        } else {
            let code = match self.direction {
                Direction::Past => IssueCode::DateNotPast,
                Direction::Future => IssueCode::DateNotFuture,
            };
            fail(vec![error(code, ctx, [("actual", Value::from(text))])])
        }
    }
}

/// Strictly in the past, judged by the system clock.
#[must_use]
pub fn past_date() -> RelativeDate {
    past_date_with(Arc::new(SystemClock))
}

/// Strictly in the future, judged by the system clock.
#[must_use]
pub fn future_date() -> RelativeDate {
    future_date_with(Arc::new(SystemClock))
}

/// Strictly in the past, judged by `clock`.
#[must_use]
pub fn past_date_with(clock: Arc<dyn Clock>) -> RelativeDate {
    RelativeDate {
        clock,
        direction: Direction::Past,
    }
}

/// Strictly in the future, judged by `clock`.
#[must_use]
pub fn future_date_with(clock: Arc<dyn Clock>) -> RelativeDate {
    RelativeDate {
        clock,
        direction: Direction::Future,
    }
}
