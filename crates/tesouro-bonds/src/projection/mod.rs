//! Reference-value (VNA) accumulation and projection.
//!
//! Two independent algorithms per the published formulas:
//!
//! 1. **Accumulation**: the reference value is the R$ 1000.00 base
//!    compounded by every monthly index change from the 2000-07-01 epoch
//!    through the anchor date (a pure `Decimal` product fold).
//! 2. **Short-horizon projection**: a reference value is rolled forward by
//!    `(1 + rate)^exponent`, where the exponent is a whole number of
//!    months, the dia-15 proration fraction `pr1`, or a single business
//!    day for the floating family.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tesouro_core::types::{Date, ReferenceValue};
use tesouro_core::TesouroError;

use crate::error::{BondError, BondResult};
use crate::sources::IndexSeriesSource;

/// Base notional amount accumulated by the index (R$ 1000.00 at the epoch).
pub const BASE_NOTIONAL: Decimal = dec!(1000);

/// Reference value used when the index series is unavailable.
///
/// A point-in-time estimate, not a live number; results derived from it
/// are labeled accordingly.
pub const FALLBACK_VNA: Decimal = dec!(4561.46);

/// Vintage label attached to [`FALLBACK_VNA`].
pub const FALLBACK_VNA_LABEL: &str = "October 2024";

/// The fixed epoch from which the reference value accumulates.
#[must_use]
pub fn accumulation_epoch() -> Date {
    Date::from_ymd(2000, 7, 1).expect("epoch is a valid date")
}

/// Accumulates the reference value from the epoch through `as_of`.
///
/// Multiplies the base notional by every monthly growth factor with a date
/// in `[epoch, as_of]`, both bounds inclusive. Returns `None` when the
/// source fails or has no points in the window; the caller decides whether
/// to fall back (see [`reference_value_or_fallback`]).
pub fn accumulated_reference_value(
    source: &dyn IndexSeriesSource,
    as_of: Date,
) -> BondResult<Option<ReferenceValue>> {
    let points = source.monthly_changes(accumulation_epoch(), as_of)?;
    if points.is_empty() {
        return Ok(None);
    }

    log::debug!(
        "accumulating VNA from {} over {} monthly observations",
        source.name(),
        points.len()
    );

    let factor = points
        .iter()
        .fold(Decimal::ONE, |acc, point| acc * point.growth_factor());
    Ok(Some(ReferenceValue::observed(
        BASE_NOTIONAL * factor,
        as_of,
    )))
}

/// Accumulates the reference value, degrading to the fallback constant.
///
/// This is the documented degraded mode of the projector: a failing or
/// empty source does not abort the calculation, it yields
/// [`FALLBACK_VNA`] labeled as an estimate. The result type tells the two
/// apart; a warning is logged when the fallback engages.
#[must_use]
pub fn reference_value_or_fallback(source: &dyn IndexSeriesSource, as_of: Date) -> ReferenceValue {
    match accumulated_reference_value(source, as_of) {
        Ok(Some(value)) => value,
        Ok(None) => {
            log::warn!(
                "index source '{}' has no observations through {}; using fallback VNA estimate ({})",
                source.name(),
                as_of,
                FALLBACK_VNA_LABEL
            );
            ReferenceValue::estimated(FALLBACK_VNA, FALLBACK_VNA_LABEL)
        }
        Err(err) => {
            log::warn!(
                "index source '{}' unavailable ({err}); using fallback VNA estimate ({})",
                source.name(),
                FALLBACK_VNA_LABEL
            );
            ReferenceValue::estimated(FALLBACK_VNA, FALLBACK_VNA_LABEL)
        }
    }
}

/// Month-by-month accumulated reference value history.
///
/// Returns one `(date, vna)` row per observation from the epoch through
/// `as_of`, each rounded to 2 decimal places for display; the running
/// product itself is never rounded.
pub fn reference_value_history(
    source: &dyn IndexSeriesSource,
    as_of: Date,
) -> BondResult<Vec<(Date, Decimal)>> {
    let points = source.monthly_changes(accumulation_epoch(), as_of)?;
    let mut factor = Decimal::ONE;
    let mut rows = Vec::with_capacity(points.len());
    for point in points {
        factor *= point.growth_factor();
        rows.push((point.date, (BASE_NOTIONAL * factor).round_dp(2)));
    }
    Ok(rows)
}

/// Computes the dia-15 proration fraction `pr1` for a purchase date.
///
/// `pr1 = days since the prior publication date / days in the publication
/// window`, where the window brackets the purchase date per
/// [`Date::publication_window`]. A degenerate window (the two publication
/// dates coincide) yields `0` rather than dividing by zero; a purchase
/// exactly on the 15th also yields `0` (the reference value is fresh that
/// day).
pub fn prorated_exponent(purchase: Date) -> BondResult<f64> {
    let (prior, next) = purchase.publication_window().map_err(BondError::from)?;
    let elapsed = prior.days_between(&purchase);
    let window = prior.days_between(&next);
    if window <= 0 {
        return Ok(0.0);
    }
    Ok(elapsed as f64 / window as f64)
}

/// Rolls a reference value forward by `(1 + periodic_rate)^exponent`.
///
/// `exponent` is a whole number of compounding periods or a proration
/// fraction such as `pr1`. An exponent of `0` returns the input unchanged
/// (exactly, with no float round-trip).
///
/// # Errors
///
/// Returns a domain error when `1 + periodic_rate` is non-positive: a
/// fractional power of a non-positive base is undefined and must not
/// silently become NaN.
pub fn roll_by_rate(value: Decimal, periodic_rate: Decimal, exponent: f64) -> BondResult<Decimal> {
    if exponent == 0.0 {
        return Ok(value);
    }

    let base = growth_base(periodic_rate)?;
    let factor = base.powf(exponent);
    let value_f = value
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed(format!("value {value} is not representable")))?;
    Decimal::from_f64(value_f * factor)
        .ok_or_else(|| BondError::pricing_failed("projected value is not representable"))
}

/// Converts an annual rate to the equivalent daily rate on a 252-day year.
///
/// `daily = (1 + annual)^(1/252) - 1`.
pub fn daily_rate(annual_rate: Decimal) -> BondResult<f64> {
    let base = growth_base(annual_rate)?;
    Ok(base.powf(1.0 / 252.0) - 1.0)
}

/// Rolls a reference value forward by one business day (D+1 settlement).
///
/// `projected = value * (1 + daily_rate)` with the daily rate derived from
/// the projected annual rate via [`daily_rate`].
pub fn roll_one_business_day(value: Decimal, annual_rate: Decimal) -> BondResult<Decimal> {
    let daily = daily_rate(annual_rate)?;
    let value_f = value
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed(format!("value {value} is not representable")))?;
    Decimal::from_f64(value_f * (1.0 + daily))
        .ok_or_else(|| BondError::pricing_failed("projected value is not representable"))
}

/// Validates and converts `1 + rate` for use as a power base.
fn growth_base(rate: Decimal) -> BondResult<f64> {
    let base = (Decimal::ONE + rate)
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed(format!("rate {rate} is not representable")))?;
    if base <= 0.0 {
        return Err(BondError::from(TesouroError::domain(format!(
            "rate {rate} makes the growth base non-positive"
        ))));
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::IndexSeries;
    use crate::sources::{InMemorySeriesSource, UnavailableSource};
    use approx::assert_relative_eq;
    use tesouro_core::types::IndexPoint;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn source_with(points: Vec<IndexPoint>) -> InMemorySeriesSource {
        InMemorySeriesSource::new("fixture", IndexSeries::from_points(points))
    }

    #[test]
    fn test_accumulation_from_epoch() {
        let source = source_with(vec![
            IndexPoint::new(date(2000, 7, 1), dec!(0.01)),
            IndexPoint::new(date(2000, 8, 1), dec!(0.02)),
        ]);
        let vna = accumulated_reference_value(&source, date(2000, 12, 31))
            .unwrap()
            .unwrap();
        assert_eq!(vna.value, dec!(1000) * dec!(1.01) * dec!(1.02));
        assert!(!vna.is_estimate());
    }

    #[test]
    fn test_accumulation_excludes_points_before_epoch_and_after_anchor() {
        let source = source_with(vec![
            IndexPoint::new(date(2000, 6, 1), dec!(0.50)), // before epoch
            IndexPoint::new(date(2000, 7, 1), dec!(0.01)), // on epoch, included
            IndexPoint::new(date(2000, 9, 15), dec!(0.01)), // on anchor, included
            IndexPoint::new(date(2000, 10, 1), dec!(0.50)), // after anchor
        ]);
        let vna = accumulated_reference_value(&source, date(2000, 9, 15))
            .unwrap()
            .unwrap();
        assert_eq!(vna.value, dec!(1000) * dec!(1.01) * dec!(1.01));
    }

    #[test]
    fn test_empty_series_yields_none_not_zero() {
        let source = source_with(vec![]);
        let result = accumulated_reference_value(&source, date(2025, 1, 1)).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_fallback_on_empty_series() {
        let source = source_with(vec![]);
        let vna = reference_value_or_fallback(&source, date(2025, 1, 1));
        assert_eq!(vna.value, FALLBACK_VNA);
        assert!(vna.is_estimate());
        assert!(vna.to_string().contains(FALLBACK_VNA_LABEL));
    }

    #[test]
    fn test_fallback_on_unavailable_source() {
        let source = UnavailableSource::new("bcb-sgs");
        let vna = reference_value_or_fallback(&source, date(2025, 1, 1));
        assert_eq!(vna.value, FALLBACK_VNA);
        assert!(vna.is_estimate());
    }

    #[test]
    fn test_history_rounds_each_row() {
        let source = source_with(vec![
            IndexPoint::new(date(2000, 7, 1), dec!(0.0123)),
            IndexPoint::new(date(2000, 8, 1), dec!(0.0077)),
        ]);
        let rows = reference_value_history(&source, date(2000, 12, 31)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (date(2000, 7, 1), dec!(1012.30)));
        assert_eq!(
            rows[1],
            (date(2000, 8, 1), (dec!(1012.3) * dec!(1.0077)).round_dp(2))
        );
    }

    #[test]
    fn test_pr1_on_publication_day_is_zero() {
        assert_relative_eq!(prorated_exponent(date(2025, 6, 15)).unwrap(), 0.0);
    }

    #[test]
    fn test_pr1_mid_window() {
        // June 25th: 10 days into the 30-day June 15 - July 15 window
        let pr1 = prorated_exponent(date(2025, 6, 25)).unwrap();
        assert_relative_eq!(pr1, 10.0 / 30.0, max_relative = 1e-12);
    }

    #[test]
    fn test_pr1_before_publication_day() {
        // June 10th: 26 days into the 31-day May 15 - June 15 window
        let pr1 = prorated_exponent(date(2025, 6, 10)).unwrap();
        assert_relative_eq!(pr1, 26.0 / 31.0, max_relative = 1e-12);
    }

    #[test]
    fn test_roll_identity_at_zero_exponent() {
        let value = dec!(4501.234567);
        assert_eq!(roll_by_rate(value, dec!(0.0044), 0.0).unwrap(), value);
    }

    #[test]
    fn test_roll_full_month() {
        let rolled = roll_by_rate(dec!(1000), dec!(0.0044), 1.0).unwrap();
        let rolled_f = rolled.to_f64().unwrap();
        assert_relative_eq!(rolled_f, 1004.4, max_relative = 1e-9);
    }

    #[test]
    fn test_roll_rejects_non_positive_base() {
        let err = roll_by_rate(dec!(1000), dec!(-1), 0.5).unwrap_err();
        assert!(matches!(
            err,
            BondError::CoreError(TesouroError::Domain { .. })
        ));
        assert!(daily_rate(dec!(-1.5)).is_err());
    }

    #[test]
    fn test_daily_rate_matches_analytic_value() {
        // (1.1175)^(1/252) - 1
        let daily = daily_rate(dec!(0.1175)).unwrap();
        assert_relative_eq!(daily, 1.1175_f64.powf(1.0 / 252.0) - 1.0);
    }

    #[test]
    fn test_one_business_day_roll() {
        let projected = roll_one_business_day(dec!(15000.00), dec!(0.1175)).unwrap();
        let expected = 15000.0 * 1.1175_f64.powf(1.0 / 252.0);
        assert_relative_eq!(
            projected.to_f64().unwrap(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_roll_is_identity_in_value() {
        let projected = roll_one_business_day(dec!(15000.00), Decimal::ZERO).unwrap();
        assert_eq!(projected, dec!(15000.00));
    }
}
