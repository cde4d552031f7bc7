//! Error types for the Tesouro library.
//!
//! This module defines the error types used throughout the workspace,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Tesouro operations.
pub type TesouroResult<T> = Result<T, TesouroError>;

/// The main error type for Tesouro operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TesouroError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid numeric input to a pricing or projection formula.
    ///
    /// Raised for inputs that make a formula undefined (for example a rate
    /// driving the discount base non-positive). Never silently clamped.
    #[error("Domain error: {reason}")]
    Domain {
        /// Description of what made the input invalid.
        reason: String,
    },

    /// An external collaborator could not supply required data.
    #[error("Data unavailable from {provider}: {reason}")]
    DataUnavailable {
        /// The collaborator that failed (index series, catalog, ...).
        provider: String,
        /// Description of the failure.
        reason: String,
    },

    /// Requested bond family/maturity year has no catalog match.
    #[error("No {family} bond maturing in {maturity_year} found in catalog")]
    NotFound {
        /// The requested bond family.
        family: String,
        /// The requested maturity year.
        maturity_year: i32,
    },

    /// A value failed structural validation (non-positive face value, ...).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of what's invalid.
        reason: String,
    },
}

impl TesouroError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }

    /// Creates a data unavailable error.
    #[must_use]
    pub fn data_unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            provider: source.into(),
            reason: reason.into(),
        }
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(family: impl Into<String>, maturity_year: i32) -> Self {
        Self::NotFound {
            family: family.into(),
            maturity_year,
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TesouroError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_not_found_display() {
        let err = TesouroError::not_found("Tesouro Prefixado", 2032);
        assert!(err.to_string().contains("2032"));
        assert!(err.to_string().contains("Tesouro Prefixado"));
    }

    #[test]
    fn test_domain_display() {
        let err = TesouroError::domain("discount base is non-positive");
        assert_eq!(
            err.to_string(),
            "Domain error: discount base is non-positive"
        );
    }
}
