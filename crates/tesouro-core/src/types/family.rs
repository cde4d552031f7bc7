//! Bond family classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three Tesouro Direto bond families priced by this engine.
///
/// Each family has its own pricing formula:
///
/// - `Fixed`: present value of the face amount at the quoted annual rate
///   (Tesouro Prefixado / LTN)
/// - `InflationLinked`: IPCA-accumulated reference value times a quote
///   discounted at the real rate (Tesouro IPCA+ / NTN-B Principal)
/// - `FloatingRate`: Selic-accumulated reference value times a quote
///   discounted at the contracted spread (Tesouro Selic / LFT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BondFamily {
    /// Fixed-rate zero coupon (Tesouro Prefixado).
    Fixed,
    /// Inflation-indexed principal (Tesouro IPCA+).
    InflationLinked,
    /// Selic-indexed floater (Tesouro Selic).
    FloatingRate,
}

impl BondFamily {
    /// Returns the market name of the family.
    #[must_use]
    pub fn market_name(&self) -> &'static str {
        match self {
            Self::Fixed => "Tesouro Prefixado",
            Self::InflationLinked => "Tesouro IPCA+",
            Self::FloatingRate => "Tesouro Selic",
        }
    }

    /// Returns true for the families priced off an accumulating
    /// reference value (VNA).
    #[must_use]
    pub fn uses_reference_value(&self) -> bool {
        matches!(self, Self::InflationLinked | Self::FloatingRate)
    }
}

impl fmt::Display for BondFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.market_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_names() {
        assert_eq!(BondFamily::Fixed.to_string(), "Tesouro Prefixado");
        assert_eq!(BondFamily::InflationLinked.to_string(), "Tesouro IPCA+");
        assert_eq!(BondFamily::FloatingRate.to_string(), "Tesouro Selic");
    }

    #[test]
    fn test_reference_value_usage() {
        assert!(!BondFamily::Fixed.uses_reference_value());
        assert!(BondFamily::InflationLinked.uses_reference_value());
        assert!(BondFamily::FloatingRate.uses_reference_value());
    }
}
