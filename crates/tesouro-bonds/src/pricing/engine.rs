//! Per-family pricing orchestration.
//!
//! Combines the term calculator, the index projector, and the pricing
//! functions into one end-to-end calculation per family, producing a
//! [`PricingResult`]. Reference values arrive as explicit parameters or
//! capability sources; nothing is memoized at module scope.

use rust_decimal::Decimal;

use tesouro_core::daycounts::business_term;
use tesouro_core::types::{BondFamily, BondTerms, Date, PricingResult, ReferenceValue};

use crate::error::{BondError, BondResult};
use crate::projection::{
    prorated_exponent, reference_value_or_fallback, roll_by_rate, roll_one_business_day,
};
use crate::sources::IndexSeriesSource;

use super::{fixed_rate_price, floating_rate_price, inflation_linked_price};

/// Prices a fixed-rate bond for a purchase date.
///
/// # Errors
///
/// Returns an invalid-spec error when the terms are not for the fixed
/// family, and a domain error for a rate at or below -100%.
pub fn price_fixed(terms: &BondTerms, purchase: Date) -> BondResult<PricingResult> {
    expect_family(terms, BondFamily::Fixed)?;
    let term = business_term(purchase, terms.maturity);
    let unit_price = fixed_rate_price(terms.face_value, terms.rate, term.business_days)?;
    Ok(PricingResult {
        term,
        projected_reference_value: None,
        quote_percentage: None,
        unit_price,
        estimated: false,
    })
}

/// Prices an inflation-linked bond for a purchase date.
///
/// Accumulates the reference value through the last dia-15 publication
/// date (degrading to the fallback constant when the series is
/// unavailable), rolls it by `(1 + projected_monthly_change)^pr1`, and
/// applies the real-rate quote. The result carries `estimated = true`
/// when the fallback engaged.
pub fn price_inflation_linked(
    terms: &BondTerms,
    purchase: Date,
    series: &dyn IndexSeriesSource,
    projected_monthly_change: Decimal,
) -> BondResult<PricingResult> {
    expect_family(terms, BondFamily::InflationLinked)?;

    let anchor = purchase.last_publication_date().map_err(BondError::from)?;
    let vna = reference_value_or_fallback(series, anchor);
    price_inflation_linked_from_reference(terms, purchase, &vna, projected_monthly_change)
}

/// Prices an inflation-linked bond off an already-known reference value.
///
/// Same roll-and-quote pipeline as [`price_inflation_linked`], skipping
/// the accumulation step: useful when the anchor VNA comes from an
/// official publication instead of the raw index series. The reference
/// value's estimate flag propagates into the result.
pub fn price_inflation_linked_from_reference(
    terms: &BondTerms,
    purchase: Date,
    reference: &ReferenceValue,
    projected_monthly_change: Decimal,
) -> BondResult<PricingResult> {
    expect_family(terms, BondFamily::InflationLinked)?;

    let pr1 = prorated_exponent(purchase)?;
    let projected = roll_by_rate(reference.value, projected_monthly_change, pr1)?;

    let term = business_term(purchase, terms.maturity);
    let quoted = inflation_linked_price(projected, terms.rate, term.business_days)?;

    Ok(PricingResult {
        term,
        projected_reference_value: Some(projected),
        quote_percentage: Some(quoted.quote_percentage),
        unit_price: quoted.unit_price,
        estimated: reference.is_estimate(),
    })
}

/// Prices a floating-rate bond for a purchase date.
///
/// Rolls the supplied reference value one business day at the projected
/// annual rate (D+1 settlement) and applies the contracted-spread quote.
/// Unlike the inflation-linked path there is no fallback here: obtaining
/// the reference value is the caller's responsibility, and an estimate is
/// propagated into the result's `estimated` flag.
pub fn price_floating(
    terms: &BondTerms,
    purchase: Date,
    reference: &ReferenceValue,
    projected_annual_rate: Decimal,
) -> BondResult<PricingResult> {
    expect_family(terms, BondFamily::FloatingRate)?;

    let projected = roll_one_business_day(reference.value, projected_annual_rate)?;

    let term = business_term(purchase, terms.maturity);
    let quoted = floating_rate_price(projected, terms.rate, term.business_days)?;

    Ok(PricingResult {
        term,
        projected_reference_value: Some(projected),
        quote_percentage: Some(quoted.quote_percentage),
        unit_price: quoted.unit_price,
        estimated: reference.is_estimate(),
    })
}

fn expect_family(terms: &BondTerms, family: BondFamily) -> BondResult<()> {
    if terms.family != family {
        return Err(BondError::invalid_spec(format!(
            "expected {family} terms, got {}",
            terms.family
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indices::IndexSeries;
    use crate::projection::FALLBACK_VNA;
    use crate::sources::InMemorySeriesSource;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rust_decimal::prelude::ToPrimitive;
    use rust_decimal_macros::dec;
    use tesouro_core::types::IndexPoint;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_price_fixed_end_to_end() {
        let terms = BondTerms::fixed(date(2032, 1, 1), dec!(13.92));
        let result = price_fixed(&terms, date(2026, 1, 2)).unwrap();

        assert_eq!(result.term.business_days, 1512);
        assert_eq!(result.term.calendar_days, 2190);
        assert!(result.projected_reference_value.is_none());
        assert!(result.quote_percentage.is_none());
        assert!(!result.estimated);

        let expected = 1000.0 / 1.1392_f64.powf(1512.0 / 252.0);
        assert_abs_diff_eq!(
            result.unit_price.to_f64().unwrap(),
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_price_fixed_rejects_wrong_family() {
        let terms = BondTerms::floating(date(2029, 3, 1), dec!(0.0));
        let err = price_fixed(&terms, date(2026, 1, 2)).unwrap_err();
        assert!(matches!(err, BondError::InvalidSpec { .. }));
    }

    #[test]
    fn test_price_inflation_linked_on_publication_day() {
        // On the 15th pr1 is 0, so the projected VNA equals the
        // accumulated VNA and the price is a pure quote application.
        let series = InMemorySeriesSource::new(
            "fixture",
            IndexSeries::from_points(vec![
                IndexPoint::new(date(2000, 7, 1), dec!(0.10)),
                IndexPoint::new(date(2000, 8, 1), dec!(0.10)),
            ]),
        );
        let terms = BondTerms::inflation_linked(date(2003, 9, 15), dec!(0.0605));
        let purchase = date(2000, 9, 15);
        let result = price_inflation_linked(&terms, purchase, &series, dec!(0.0044)).unwrap();

        // VNA = 1000 * 1.1 * 1.1 = 1210, unrolled because pr1 = 0
        assert_eq!(result.projected_reference_value, Some(dec!(1210)));
        assert!(!result.estimated);

        let quote = result.quote_percentage.unwrap().to_f64().unwrap();
        let du = result.term.business_days as f64;
        assert_relative_eq!(quote, 100.0 / 1.0605_f64.powf(du / 252.0), epsilon = 1e-9);
    }

    #[test]
    fn test_price_inflation_linked_falls_back_and_flags_estimate() {
        let series = InMemorySeriesSource::new("empty", IndexSeries::new());
        let terms = BondTerms::inflation_linked(date(2035, 5, 15), dec!(0.0605));
        let result =
            price_inflation_linked(&terms, date(2025, 6, 15), &series, dec!(0.0044)).unwrap();

        assert!(result.estimated);
        assert_eq!(result.projected_reference_value, Some(FALLBACK_VNA));
    }

    #[test]
    fn test_price_floating_at_par() {
        let terms = BondTerms::floating(date(2026, 3, 1), dec!(0.0));
        let reference = ReferenceValue::estimated(dec!(15000.00), "test");
        let result = price_floating(&terms, date(2025, 11, 28), &reference, dec!(0.0)).unwrap();

        // Zero projected rate and zero spread: price stays at the
        // reference value.
        assert_eq!(result.unit_price, dec!(15000.00));
        assert_eq!(result.quote_percentage, Some(dec!(100)));
        assert!(result.estimated);
    }

    #[test]
    fn test_matured_bond_passes_negative_term_through() {
        let terms = BondTerms::fixed(date(2020, 1, 1), dec!(10.0));
        let result = price_fixed(&terms, date(2025, 1, 1)).unwrap();
        assert!(result.term.is_matured());
        // Negative exponent compounds instead of discounting
        assert!(result.unit_price > terms.face_value);
    }
}
