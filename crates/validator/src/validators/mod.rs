//! Built-in rule validators
//!
//! Every rule here checks one property of a JSON value and passes the value
//! through unchanged when it holds. Rules read their input through
//! [`FromValue`](crate::foundation::FromValue), so a string rule given a
//! number fails with `type_mismatch` instead of panicking.
//!
//! # Categories
//!
//! - **Types**: `is_string`, `is_number`, `required`, ...
//! - **String**: length, pattern, character set, email/URL/phone shape
//! - **Number**: bounds, integrality, precision and scale, sign
//! - **Temporal**: ISO dates and datetimes, ranges, past/future
//! - **Choice**: enum membership, selection counts, uniqueness
//! - **Reference**: UUIDs and `type:uuid` entity references
//! - **Structural**: JSON depth and serializability, plain objects
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let username = pipe![is_string(), min_length(3), max_length(20), slug_shape()];
//! let ctx = ValidationContext::new();
//! assert!(username.validate(&json!("ada-lovelace"), &ctx).is_valid());
//! assert!(username.validate(&json!("Ada Lovelace"), &ctx).is_invalid());
//! ```

// Shape
pub mod types;

// Scalars
pub mod number;
pub mod string;
pub mod temporal;

// Collections and references
pub mod choice;
pub mod reference;
pub mod structural;

// ============================================================================
// RE-EXPORTS: Types
// ============================================================================

pub use types::{
    IsType, Required, is_array, is_boolean, is_number, is_object, is_string, required,
};

// ============================================================================
// RE-EXPORTS: String validators
// ============================================================================

pub use string::{
    AsciiOnly, EmailFormat, MatchesPattern, MaxLength, MinLength, NotBlank, PhoneFormat,
    SlugShape, UrlFormat, ascii_only, email_format, matches_pattern, max_length, min_length,
    not_blank, phone_format, slug_shape, url_format,
};

// ============================================================================
// RE-EXPORTS: Numeric validators
// ============================================================================

pub use number::{
    Finite, Integer, Max, Min, NonNegative, Positive, Precision, Scale, finite, integer, max,
    min, non_negative, positive, precision, scale,
};

// ============================================================================
// RE-EXPORTS: Temporal validators
// ============================================================================

pub use temporal::{
    Clock, DateRange, FixedClock, IsoDate, IsoDateTime, RelativeDate, SystemClock, date_range,
    future_date, future_date_with, iso_date, iso_datetime, past_date, past_date_with,
};

// ============================================================================
// RE-EXPORTS: Choice, reference and structural validators
// ============================================================================

pub use choice::{
    AllIn, MaxSelections, MinSelections, OneOf, UniqueItems, all_in, max_selections,
    min_selections, one_of, unique_items,
};

pub use reference::{EntityRef, Uuid, entity_ref, uuid, uuid_array};

pub use structural::{
    DEFAULT_MAX_DEPTH, JsonSerializable, PlainObject, json_serializable, plain_object,
    probe_serializable,
};
