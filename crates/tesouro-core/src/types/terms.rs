//! Bond terms and pricing results.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{BondFamily, Date};

/// Notional face value convention for Tesouro Direto bonds (R$ 1000.00).
pub const STANDARD_FACE_VALUE: Decimal = dec!(1000);

/// The contractual terms of a single bond, as needed for pricing.
///
/// The meaning and unit of `rate` depends on the family:
///
/// - `Fixed`: quoted annual rate as a whole percentage (e.g., `13.92`)
/// - `InflationLinked`: real annual rate as a fraction (e.g., `0.0605`)
/// - `FloatingRate`: contracted spread as a signed fraction
///   (negative = ágio, positive = deságio)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Bond family, selecting the pricing formula.
    pub family: BondFamily,
    /// Maturity date.
    pub maturity: Date,
    /// Face value in currency units (convention: 1000).
    pub face_value: Decimal,
    /// Quoted rate or contracted spread, in the family's unit.
    pub rate: Decimal,
}

impl BondTerms {
    /// Creates fixed-rate bond terms. `annual_rate_percent` is a whole
    /// percentage (e.g., `13.92` for 13.92% a.a.).
    #[must_use]
    pub fn fixed(maturity: Date, annual_rate_percent: Decimal) -> Self {
        Self {
            family: BondFamily::Fixed,
            maturity,
            face_value: STANDARD_FACE_VALUE,
            rate: annual_rate_percent,
        }
    }

    /// Creates inflation-linked bond terms. `real_annual_rate` is a
    /// fraction (e.g., `0.0605` for IPCA + 6.05%).
    #[must_use]
    pub fn inflation_linked(maturity: Date, real_annual_rate: Decimal) -> Self {
        Self {
            family: BondFamily::InflationLinked,
            maturity,
            face_value: STANDARD_FACE_VALUE,
            rate: real_annual_rate,
        }
    }

    /// Creates floating-rate bond terms. `contracted_spread` is a signed
    /// fraction (e.g., `-0.0001` for a 0.01% ágio).
    #[must_use]
    pub fn floating(maturity: Date, contracted_spread: Decimal) -> Self {
        Self {
            family: BondFamily::FloatingRate,
            maturity,
            face_value: STANDARD_FACE_VALUE,
            rate: contracted_spread,
        }
    }

    /// Overrides the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: Decimal) -> Self {
        self.face_value = face_value;
        self
    }
}

/// The day-count span between purchase and maturity.
///
/// Both counts are signed: a negative span signals an already-matured (or
/// mis-entered) bond and is passed through to the caller rather than
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSpan {
    /// Approximate business days (252/365 scaling of calendar days).
    pub business_days: i64,
    /// Exact calendar days.
    pub calendar_days: i64,
}

impl TermSpan {
    /// Creates a term span.
    #[must_use]
    pub fn new(business_days: i64, calendar_days: i64) -> Self {
        Self {
            business_days,
            calendar_days,
        }
    }

    /// Returns true when the span is negative, i.e. the maturity date has
    /// already passed.
    #[must_use]
    pub fn is_matured(&self) -> bool {
        self.calendar_days < 0
    }
}

/// The result of pricing one bond.
///
/// Created fresh per calculation and never mutated. The projected
/// reference value and quote percentage are populated for the indexed
/// families only; the fixed-rate family discounts the face value directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Day counts from purchase to maturity.
    pub term: TermSpan,
    /// Projected reference value (VNA) used in the price, when applicable.
    pub projected_reference_value: Option<Decimal>,
    /// Quote as a percentage of the reference value, when applicable.
    pub quote_percentage: Option<Decimal>,
    /// Theoretical unit price in currency units.
    pub unit_price: Decimal,
    /// True when the price rests on a fallback reference-value estimate.
    pub estimated: bool,
}
