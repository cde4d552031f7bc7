//! Computed-vs-quoted price comparison and spread classification.
//!
//! Reporting helpers only: nothing in the engine branches on a deviation
//! band or a rate stance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BondError, BondResult};

/// Deviation below which a computed price is considered to match the
/// quoted one (currency units).
pub const NEGLIGIBLE_DEVIATION: Decimal = dec!(0.01);

/// Deviation below which a computed price is considered close enough to
/// the quoted one (currency units).
pub const ACCEPTABLE_DEVIATION: Decimal = dec!(1.5);

/// Qualitative band for the absolute computed-vs-quoted deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviationBand {
    /// Below 0.01 currency units: formula reproduces the quote.
    Negligible,
    /// Below 1.5 currency units: rounding and one-day timing noise.
    Acceptable,
    /// 1.5 currency units or more: inputs or quote need review.
    Divergent,
}

impl DeviationBand {
    /// Classifies an absolute deviation in currency units.
    #[must_use]
    pub fn classify(absolute_deviation: Decimal) -> Self {
        let abs = absolute_deviation.abs();
        if abs < NEGLIGIBLE_DEVIATION {
            Self::Negligible
        } else if abs < ACCEPTABLE_DEVIATION {
            Self::Acceptable
        } else {
            Self::Divergent
        }
    }
}

impl fmt::Display for DeviationBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Negligible => "negligible",
            Self::Acceptable => "acceptable",
            Self::Divergent => "divergent",
        };
        f.write_str(label)
    }
}

/// Comparison of a computed price against a quoted one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceComparison {
    /// The theoretically computed unit price.
    pub computed: Decimal,
    /// The quoted unit price it is compared against.
    pub quoted: Decimal,
    /// `|computed - quoted|` in currency units.
    pub absolute_diff: Decimal,
    /// Absolute difference as a percentage of the quoted price.
    pub relative_diff_percent: Decimal,
    /// Qualitative band for the absolute difference.
    pub band: DeviationBand,
}

/// Compares a computed price against a quoted one.
///
/// # Errors
///
/// Returns an error when `quoted` is not positive (the relative
/// difference would be meaningless).
pub fn compare_with_quote(computed: Decimal, quoted: Decimal) -> BondResult<PriceComparison> {
    if quoted <= Decimal::ZERO {
        return Err(BondError::invalid_spec(format!(
            "quoted price must be positive, got {quoted}"
        )));
    }
    let absolute_diff = (computed - quoted).abs();
    let relative_diff_percent = absolute_diff / quoted * Decimal::ONE_HUNDRED;
    Ok(PriceComparison {
        computed,
        quoted,
        absolute_diff,
        relative_diff_percent,
        band: DeviationBand::classify(absolute_diff),
    })
}

/// Pricing stance implied by a contracted spread (floating family).
///
/// A negative spread is an ágio (premium: price above the reference
/// value), a positive spread a deságio (discount: price below it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateStance {
    /// Negative spread; price above the reference value.
    Premium,
    /// Positive spread; price below the reference value.
    Discount,
    /// Zero spread; price equals the reference value.
    AtPar,
}

impl RateStance {
    /// Classifies a contracted spread.
    #[must_use]
    pub fn classify(contracted_spread: Decimal) -> Self {
        if contracted_spread > Decimal::ZERO {
            Self::Discount
        } else if contracted_spread < Decimal::ZERO {
            Self::Premium
        } else {
            Self::AtPar
        }
    }
}

impl fmt::Display for RateStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Premium => "ágio",
            Self::Discount => "deságio",
            Self::AtPar => "at par",
        };
        f.write_str(label)
    }
}
