//! Construction-time errors.
//!
//! Validation failures are never errors: they are returned as
//! [`ValidationResult::Invalid`](crate::foundation::ValidationResult).
//! This type covers the few places where *building* a validator can fail.

/// Errors raised while constructing validators or parsing tags.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A data-type tag that is not part of the closed vocabulary.
    #[error("unknown data type: {tag}")]
    UnknownDataType {
        /// The tag as supplied.
        tag: String,
    },

    /// A regex pattern that failed to compile.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler error.
        #[source]
        source: regex::Error,
    },
}

/// Convenience alias for construction-time results.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_tag() {
        let err = Error::UnknownDataType {
            tag: "geo_point".to_owned(),
        };
        assert_eq!(err.to_string(), "unknown data type: geo_point");
    }

    #[test]
    fn invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "(".to_owned(),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
