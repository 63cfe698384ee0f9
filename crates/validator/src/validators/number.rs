//! Number rules: bounds, integrality, precision and scale.
//!
//! Bounds and measured values are reported as JSON numbers, integral ones
//! without a fractional part (`{max: 10, actual: 15}`).

use crate::foundation::{IssueCode, Value, error, number_value};

crate::rule! {
    /// Greater than or equal to `min`.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for f64;
    rule(self, input) { input >= self.min }
    issue(self, input, ctx) {
        error(
            IssueCode::NumberTooSmall,
            ctx,
            [("min", number_value(self.min)), ("actual", number_value(input))],
        )
    }
    fn min(min: f64);
}

crate::rule! {
    /// Less than or equal to `max`.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for f64;
    rule(self, input) { input <= self.max }
    issue(self, input, ctx) {
        error(
            IssueCode::NumberTooLarge,
            ctx,
            [("max", number_value(self.max)), ("actual", number_value(input))],
        )
    }
    fn max(max: f64);
}

crate::rule! {
    /// No fractional part.
    pub Integer for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 }
    issue(input, ctx) { error(IssueCode::NumberNotInteger, ctx, [("actual", number_value(input))]) }
    fn integer();
}

crate::rule! {
    /// At most `max` digits in total, integer and fractional.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Precision { max: u32 } for f64;
    rule(self, input) { digits(input).precision <= self.max }
    issue(self, input, ctx) {
        error(
            IssueCode::NumberPrecisionExceeded,
            ctx,
            [("max", Value::from(self.max)), ("actual", Value::from(digits(input).precision))],
        )
    }
    fn precision(max: u32);
}

crate::rule! {
    /// At most `max` digits after the decimal point.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Scale { max: u32 } for f64;
    rule(self, input) { digits(input).scale <= self.max }
    issue(self, input, ctx) {
        error(
            IssueCode::NumberScaleExceeded,
            ctx,
            [("max", Value::from(self.max)), ("actual", Value::from(digits(input).scale))],
        )
    }
    fn scale(max: u32);
}

crate::rule! {
    /// Strictly greater than zero.
    pub Positive for f64;
    rule(input) { input > 0.0 }
    issue(input, ctx) { error(IssueCode::NumberNotPositive, ctx, [("actual", number_value(input))]) }
    fn positive();
}

crate::rule! {
    /// Zero or greater.
    pub NonNegative for f64;
    rule(input) { input >= 0.0 }
    issue(input, ctx) { error(IssueCode::NumberNegative, ctx, [("actual", number_value(input))]) }
    fn non_negative();
}

crate::rule! {
    /// Not NaN and not infinite.
    ///
    /// `serde_json` numbers are always finite, so on `Value` input this only
    /// rejects non-numbers; it matters for values built through other paths.
    pub Finite for f64;
    rule(input) { input.is_finite() }
    issue(input, ctx) { error(IssueCode::NumberNotFinite, ctx, ()) }
    fn finite();
}

/// Digit counts of a number's shortest decimal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Digits {
    precision: u32,
    scale: u32,
}

fn digits(n: f64) -> Digits {
    // f64 Display never uses exponent notation.
    let rendered = n.abs().to_string();
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let int_digits = int_part.trim_start_matches('0').len();
    let scale = frac_part.len();
    Digits {
        precision: u32::try_from(int_digits + scale).unwrap_or(u32::MAX),
        scale: u32::try_from(scale).unwrap_or(u32::MAX),
    }
}
