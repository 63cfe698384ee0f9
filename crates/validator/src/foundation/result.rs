//! The success/failure result every validator returns.

use serde::{Deserialize, Serialize};

use super::issue::ValidationIssue;

/// Outcome of a validator call.
///
/// `Valid` never carries an `error`-severity issue; `Invalid` always carries
/// at least one. Combinators rely on both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult<T> {
    /// The value passed, possibly with warnings.
    Valid {
        /// The (possibly normalized) value.
        value: T,
        /// `warn`-severity issues; empty in the common case.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        warnings: Vec<ValidationIssue>,
    },
    /// The value failed.
    Invalid {
        /// Every issue collected, errors and warnings together.
        issues: Vec<ValidationIssue>,
    },
}

/// Builds a success result without warnings.
pub fn ok<T>(value: T) -> ValidationResult<T> {
    ValidationResult::Valid {
        value,
        warnings: Vec::new(),
    }
}

/// Builds a success result carrying `warnings`.
pub fn ok_with_warnings<T>(value: T, warnings: Vec<ValidationIssue>) -> ValidationResult<T> {
    debug_assert!(
        warnings.iter().all(ValidationIssue::is_warning),
        "success results cannot carry error issues"
    );
    ValidationResult::Valid { value, warnings }
}

/// Builds a failure result.
pub fn fail<T>(issues: Vec<ValidationIssue>) -> ValidationResult<T> {
    debug_assert!(
        issues.iter().any(ValidationIssue::is_error),
        "failure results need at least one error issue"
    );
    ValidationResult::Invalid { issues }
}

impl<T> ValidationResult<T> {
    /// Returns `true` on success.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Returns `true` on failure.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The success value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Valid { value, .. } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// Consumes the result and returns the success value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Valid { value, .. } => Some(value),
            Self::Invalid { .. } => None,
        }
    }

    /// Warnings on success, every issue on failure.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Valid { warnings, .. } => warnings,
            Self::Invalid { issues } => issues,
        }
    }

    /// Consumes the result and returns its issues, dropping any value.
    pub fn into_issues(self) -> Vec<ValidationIssue> {
        match self {
            Self::Valid { warnings, .. } => warnings,
            Self::Invalid { issues } => issues,
        }
    }

    /// `error`-severity issues only.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().iter().filter(|issue| issue.is_error())
    }

    /// `warn`-severity issues only.
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().iter().filter(|issue| issue.is_warning())
    }

    /// Maps the success value, keeping warnings. Failures pass through and
    /// `f` is not called.
    pub fn map<U, F>(self, f: F) -> ValidationResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid { value, warnings } => ValidationResult::Valid {
                value: f(value),
                warnings,
            },
            Self::Invalid { issues } => ValidationResult::Invalid { issues },
        }
    }

    /// Converts into a standard `Result`, dropping warnings on success.
    pub fn into_result(self) -> Result<T, Vec<ValidationIssue>> {
        match self {
            Self::Valid { value, .. } => Ok(value),
            Self::Invalid { issues } => Err(issues),
        }
    }
}
