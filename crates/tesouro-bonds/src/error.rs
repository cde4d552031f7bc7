//! Error types for pricing and projection operations.

use thiserror::Error;

/// A specialized Result type for bond pricing operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during pricing and projection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BondError {
    /// Invalid bond specification for the requested operation.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Pricing calculation failed.
    #[error("Pricing failed: {reason}")]
    PricingFailed {
        /// Description of the failure.
        reason: String,
    },

    /// An external data source could not supply required data.
    ///
    /// Only the IPCA accumulation path recovers from this (via the
    /// documented fallback constant); every other caller propagates it.
    #[error("Source '{provider}' unavailable: {reason}")]
    SourceUnavailable {
        /// Name of the failing source.
        provider: String,
        /// Description of the failure.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] tesouro_core::TesouroError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a pricing failed error.
    #[must_use]
    pub fn pricing_failed(reason: impl Into<String>) -> Self {
        Self::PricingFailed {
            reason: reason.into(),
        }
    }

    /// Creates a source unavailable error.
    #[must_use]
    pub fn source_unavailable(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            provider: source.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesouro_core::TesouroError;

    #[test]
    fn test_source_unavailable_display() {
        let err = BondError::source_unavailable("ipca-series", "connection refused");
        assert!(err.to_string().contains("ipca-series"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_core_error_conversion() {
        let core = TesouroError::domain("discount base is non-positive");
        let err: BondError = core.into();
        assert!(err.to_string().contains("Core error"));
    }
}
