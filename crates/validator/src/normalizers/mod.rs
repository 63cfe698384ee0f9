//! Normalizers: total, idempotent value reshapers.
//!
//! A normalizer never fails. Values of a shape it does not handle pass
//! through unchanged, and applying it twice gives the same value as
//! applying it once. Every normalizer also implements
//! [`Validate`](crate::foundation::Validate), always returning success, so
//! it can sit anywhere in a [`pipe`](crate::combinators::pipe).
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::prelude::*;
//!
//! let slug = to_slug();
//! assert_eq!(slug.normalize(&json!("Hello World!")), json!("hello-world"));
//! assert_eq!(slug.normalize(&json!("hello-world")), json!("hello-world"));
//! assert_eq!(slug.normalize(&json!(42)), json!(42));
//! ```

pub mod coerce;
pub mod contact;
pub mod temporal;
pub mod text;

pub use coerce::{ToBoolean, ToNumber, to_boolean, to_number};
pub use contact::{NormalizeEmail, NormalizePhone, NormalizeUrl, normalize_email, normalize_phone, normalize_url};
pub use temporal::{NormalizeDate, NormalizeDatetime, normalize_date, normalize_datetime};
pub use text::{
    CollapseWhitespace, ToLowercase, ToSlug, ToUppercase, TrimWhitespace, collapse_whitespace,
    to_lowercase, to_slug, to_uppercase, trim_whitespace,
};

use crate::foundation::Value;

/// A pure, total value transformation.
pub trait Normalize {
    /// Returns the normalized form of `value`, or a clone of it when the
    /// shape is not one this normalizer handles.
    fn normalize(&self, value: &Value) -> Value;
}

impl<N: Normalize + ?Sized> Normalize for &N {
    fn normalize(&self, value: &Value) -> Value {
        (**self).normalize(value)
    }
}
