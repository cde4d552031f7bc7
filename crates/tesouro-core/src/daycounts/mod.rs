//! Day count conventions for the discounting exponent.
//!
//! Tesouro Direto formulas discount over business days on a 252-day year.
//! The engine uses the statistical BUS/252 approximation inherited from the
//! published worked examples: business days are estimated by scaling
//! calendar days by 252/365, not by walking a holiday calendar.

mod bus252;

pub use bus252::{business_term, Bus252Approx};

use crate::types::{Date, TermSpan};

/// Trait for business-day count conventions.
///
/// Implementations convert a (purchase, maturity) date pair into the
/// day counts used for discounting. They must be thread-safe
/// (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the convention.
    fn name(&self) -> &'static str;

    /// Calculates the term span between two dates.
    ///
    /// The span is signed: `maturity` before `purchase` yields negative
    /// counts, which callers interpret as an already-matured bond.
    fn term(&self, purchase: Date, maturity: Date) -> TermSpan;

    /// Returns the discounting exponent `business_days / 252` for the span.
    fn year_fraction(&self, purchase: Date, maturity: Date) -> f64 {
        self.term(purchase, maturity).business_days as f64 / 252.0
    }
}
