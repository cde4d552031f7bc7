//! BUS/252 statistical approximation.

use crate::types::{Date, TermSpan};

use super::DayCount;

/// BUS/252 business-day approximation.
///
/// `business_days = floor(calendar_days * 252 / 365)`. This is a
/// statistical estimate, not a calendar-aware count: it does not skip
/// individual weekends or holidays, and systematically differs from a true
/// ANBIMA business-day count. It is preserved exactly for compatibility
/// with the published worked-example prices; do not "fix" it without
/// revisiting every reference price alongside a domain expert.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bus252Approx;

impl DayCount for Bus252Approx {
    fn name(&self) -> &'static str {
        "BUS/252 (approx)"
    }

    fn term(&self, purchase: Date, maturity: Date) -> TermSpan {
        business_term(purchase, maturity)
    }
}

/// Calculates the approximate business-day term between two dates.
///
/// Returns `(business_days, calendar_days)` as a [`TermSpan`]. The span is
/// signed; a maturity in the past produces negative counts and is left to
/// the caller to interpret.
///
/// # Example
///
/// ```rust
/// use tesouro_core::daycounts::business_term;
/// use tesouro_core::types::Date;
///
/// let purchase = Date::from_ymd(2025, 1, 2).unwrap();
/// let maturity = Date::from_ymd(2032, 1, 1).unwrap();
/// let span = business_term(purchase, maturity);
/// assert_eq!(span.calendar_days, 2555);
/// assert_eq!(span.business_days, 1764);
/// ```
#[must_use]
pub fn business_term(purchase: Date, maturity: Date) -> TermSpan {
    let calendar_days = purchase.days_between(&maturity);
    // Integer floor division keeps the count exact for negative spans too.
    let business_days = (calendar_days * 252).div_euclid(365);
    TermSpan::new(business_days, calendar_days)
}
