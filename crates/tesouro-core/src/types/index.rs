//! Index observation value type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Date;

/// A single monthly price-index observation.
///
/// `monthly_change` is a fraction (e.g., `0.0059` for 0.59%), never a whole
/// percentage. Feeds that publish whole percentages (the BCB SGS series
/// does) must divide by 100 before constructing an `IndexPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPoint {
    /// Publication period reference date.
    pub date: Date,
    /// Monthly change as a fraction.
    pub monthly_change: Decimal,
}

impl IndexPoint {
    /// Creates a new index point.
    #[must_use]
    pub fn new(date: Date, monthly_change: Decimal) -> Self {
        Self {
            date,
            monthly_change,
        }
    }

    /// Creates an index point from a whole-percentage change
    /// (e.g., `0.59` for 0.59%).
    #[must_use]
    pub fn from_percent(date: Date, percent: Decimal) -> Self {
        Self {
            date,
            monthly_change: percent / Decimal::ONE_HUNDRED,
        }
    }

    /// Returns the change as a whole percentage (e.g., `0.59` for 0.59%).
    #[must_use]
    pub fn change_percent(&self) -> Decimal {
        self.monthly_change * Decimal::ONE_HUNDRED
    }

    /// Returns the growth factor `1 + monthly_change`.
    #[must_use]
    pub fn growth_factor(&self) -> Decimal {
        Decimal::ONE + self.monthly_change
    }
}
