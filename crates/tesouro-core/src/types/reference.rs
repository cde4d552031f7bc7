//! Accumulated reference value (VNA).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// Provenance of a reference value.
///
/// A reference value is either computed live from the published index
/// series, or supplied as a fixed estimate when the series is unavailable
/// (the documented degraded mode). Callers must always be able to tell the
/// two apart, so the distinction is carried in the type rather than in a
/// log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceBasis {
    /// Computed from the published index series through the given date.
    Observed {
        /// Upper bound of the accumulation window.
        through: Date,
    },
    /// Fallback constant; the label names the vintage of the estimate.
    Estimated {
        /// Human-readable vintage label (e.g., "October 2024").
        label: String,
    },
}

/// The accumulated value of the notional base amount (VNA).
///
/// Represents R$ 1000.00 compounded by every index publication from the
/// 2000-07-01 epoch through the basis date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceValue {
    /// Accumulated value in currency units.
    pub value: Decimal,
    /// How the value was obtained.
    pub basis: ReferenceBasis,
}

impl ReferenceValue {
    /// Creates a reference value observed from the index series.
    #[must_use]
    pub fn observed(value: Decimal, through: Date) -> Self {
        Self {
            value,
            basis: ReferenceBasis::Observed { through },
        }
    }

    /// Creates an estimated (fallback) reference value.
    #[must_use]
    pub fn estimated(value: Decimal, label: impl Into<String>) -> Self {
        Self {
            value,
            basis: ReferenceBasis::Estimated {
                label: label.into(),
            },
        }
    }

    /// Returns true when the value is a fallback estimate rather than a
    /// live computation.
    #[must_use]
    pub fn is_estimate(&self) -> bool {
        matches!(self.basis, ReferenceBasis::Estimated { .. })
    }
}

impl fmt::Display for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.basis {
            ReferenceBasis::Observed { through } => {
                write!(f, "{} (observed through {})", self.value, through)
            }
            ReferenceBasis::Estimated { label } => {
                write!(f, "{} (estimate, {})", self.value, label)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_observed_is_not_estimate() {
        let through = Date::from_ymd(2025, 6, 15).unwrap();
        let vna = ReferenceValue::observed(dec!(4501.23), through);
        assert!(!vna.is_estimate());
        assert!(vna.to_string().contains("observed through 2025-06-15"));
    }

    #[test]
    fn test_estimated_carries_label() {
        let vna = ReferenceValue::estimated(dec!(4561.46), "October 2024");
        assert!(vna.is_estimate());
        assert!(vna.to_string().contains("estimate, October 2024"));
    }
}
