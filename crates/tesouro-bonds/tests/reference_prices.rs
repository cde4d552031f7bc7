//! Validation against the published worked-example prices and the
//! formula-level properties the engine guarantees.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tesouro_bonds::prelude::*;
use tesouro_bonds::projection::{FALLBACK_VNA, FALLBACK_VNA_LABEL};
use tesouro_core::daycounts::business_term;
use tesouro_core::types::{BondTerms, Date, IndexPoint, ReferenceBasis, ReferenceValue};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// =============================================================================
// Worked-example round trips
// =============================================================================

#[test]
fn fixed_rate_reproduces_published_example_to_six_decimals() {
    // Prefixado worked example: face 1000, 13.92% a.a., 1512 business days.
    // The bound is absolute: six decimal places of currency, not a
    // relative tolerance.
    let price = fixed_rate_price(dec!(1000), dec!(13.92), 1512).unwrap();
    let analytic = 1000.0 / 1.1392_f64.powf(1512.0 / 252.0);
    assert_abs_diff_eq!(price.to_f64().unwrap(), analytic, epsilon = 1e-6);
}

#[test]
fn floating_at_par_is_exact() {
    // Selic worked example: zero contracted spread prices exactly at par.
    let result = floating_rate_price(dec!(15000.00), Decimal::ZERO, 63).unwrap();
    assert_eq!(result.quote_percentage, dec!(100.0));
    assert_eq!(result.unit_price, dec!(15000.00));
}

#[test]
fn full_floating_workflow_at_par() {
    let terms = BondTerms::floating(date(2026, 3, 1), dec!(0.0));
    let reference = ReferenceValue::observed(dec!(15000.00), date(2025, 11, 27));
    let result = price_floating(&terms, date(2025, 11, 28), &reference, dec!(0.0)).unwrap();
    assert_eq!(result.unit_price, dec!(15000.00));
    assert!(!result.estimated);
}

#[test]
fn inflation_linked_two_stage_formula() {
    let vna = dec!(4400.25);
    let result = inflation_linked_price(vna, dec!(0.0605), 1260).unwrap();

    let quote = 100.0 / 1.0605_f64.powf(5.0);
    assert_relative_eq!(
        result.quote_percentage.to_f64().unwrap(),
        quote,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        result.unit_price.to_f64().unwrap(),
        4400.25 * quote / 100.0,
        epsilon = 1e-6
    );
}

// =============================================================================
// Term calculator contract
// =============================================================================

#[test]
fn same_day_term_is_zero() {
    let d = date(2025, 7, 9);
    let span = business_term(d, d);
    assert_eq!((span.business_days, span.calendar_days), (0, 0));
}

#[test]
fn matured_bond_yields_negative_term() {
    let span = business_term(date(2025, 7, 9), date(2024, 7, 9));
    assert!(span.calendar_days < 0);
    assert!(span.business_days < 0);
    assert!(span.is_matured());
}

// =============================================================================
// Projection contract
// =============================================================================

#[test]
fn empty_series_triggers_fallback_not_error() {
    let source = InMemorySeriesSource::new("empty", IndexSeries::new());
    let vna = reference_value_or_fallback(&source, date(2025, 6, 15));
    assert_eq!(vna.value, FALLBACK_VNA);
    match vna.basis {
        ReferenceBasis::Estimated { ref label } => assert_eq!(label, FALLBACK_VNA_LABEL),
        ReferenceBasis::Observed { .. } => panic!("fallback must be labeled an estimate"),
    }
}

#[test]
fn unavailable_source_triggers_fallback_for_accumulation() {
    let source = UnavailableSource::new("bcb-sgs");
    let vna = reference_value_or_fallback(&source, date(2025, 6, 15));
    assert!(vna.is_estimate());
    assert!(vna.value > Decimal::ZERO);
}

#[test]
fn projection_identity_cases() {
    let value = dec!(4501.234567);
    // pr1 = 0 (purchase on the publication day)
    let pr1 = prorated_exponent(date(2025, 6, 15)).unwrap();
    assert_eq!(pr1, 0.0);
    assert_eq!(roll_by_rate(value, dec!(0.0044), pr1).unwrap(), value);
    // zero whole periods
    assert_eq!(roll_by_rate(value, dec!(0.0044), 0.0).unwrap(), value);
}

#[test]
fn accumulation_window_is_inclusive() {
    let source = InMemorySeriesSource::new(
        "fixture",
        IndexSeries::from_points(vec![
            IndexPoint::new(date(2000, 7, 1), dec!(0.01)),
            IndexPoint::new(date(2024, 10, 15), dec!(0.02)),
        ]),
    );
    let vna = accumulated_reference_value(&source, date(2024, 10, 15))
        .unwrap()
        .unwrap();
    // Both the epoch point and the anchor-date point are included
    assert_eq!(vna.value, dec!(1000) * dec!(1.01) * dec!(1.02));
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Higher rate, lower price (face and term held fixed).
    #[test]
    fn fixed_price_decreases_in_rate(
        rate_bps in 1u32..40_000u32,
        du in 1i64..5_000i64,
    ) {
        let rate_lo = Decimal::from(rate_bps) / dec!(100);
        let rate_hi = rate_lo + dec!(0.25);
        let price_lo = fixed_rate_price(dec!(1000), rate_lo, du).unwrap();
        let price_hi = fixed_rate_price(dec!(1000), rate_hi, du).unwrap();
        prop_assert!(price_hi < price_lo);
    }

    /// Longer term, lower price (positive rate held fixed).
    #[test]
    fn fixed_price_decreases_in_term(
        rate_bps in 100u32..40_000u32,
        du in 0i64..5_000i64,
    ) {
        let rate = Decimal::from(rate_bps) / dec!(100);
        let near = fixed_rate_price(dec!(1000), rate, du).unwrap();
        let far = fixed_rate_price(dec!(1000), rate, du + 21).unwrap();
        prop_assert!(far < near);
    }

    /// The quote formula is family-independent: both indexed families
    /// produce the same quote for the same rate and term.
    #[test]
    fn indexed_families_share_the_quote_formula(
        rate_bps in 0i32..2_000i32,
        du in 0i64..5_000i64,
    ) {
        let rate = Decimal::from(rate_bps) / dec!(10000);
        let ipca = inflation_linked_price(dec!(4400.25), rate, du).unwrap();
        let selic = floating_rate_price(dec!(4400.25), rate, du).unwrap();
        prop_assert_eq!(ipca.quote_percentage, selic.quote_percentage);
        prop_assert_eq!(ipca.unit_price, selic.unit_price);
    }

    /// pr1 always lies in [0, 1) and never panics across ordinary dates.
    #[test]
    fn proration_fraction_is_bounded(
        year in 2001i32..2099i32,
        month in 1u32..=12u32,
        day in 1u32..=28u32,
    ) {
        let pr1 = prorated_exponent(date(year, month, day)).unwrap();
        prop_assert!((0.0..1.0).contains(&pr1));
    }

    /// Rolling by one full month then pricing at a zero rate returns the
    /// projected value itself.
    #[test]
    fn zero_rate_price_equals_projected_value(
        vna_cents in 100_000i64..1_000_000_000i64,
    ) {
        let vna = Decimal::from_i64(vna_cents).unwrap() / dec!(100);
        let result = floating_rate_price(vna, Decimal::ZERO, 1260).unwrap();
        prop_assert_eq!(result.unit_price, vna);
    }
}
