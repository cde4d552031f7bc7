//! Present-value pricing functions, one per bond family.
//!
//! All three families discount over `business_days / 252`. The fixed
//! family discounts the face value directly; the indexed families first
//! compute a quote (a percentage of the projected reference value) and
//! then scale the reference value by it.
//!
//! Exponentiation happens in `f64` (the published formulas are plain
//! float math); values cross the `Decimal` boundary only at the edges.

mod engine;

pub use engine::{
    price_fixed, price_floating, price_inflation_linked, price_inflation_linked_from_reference,
};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tesouro_core::TesouroError;

use crate::error::{BondError, BondResult};

/// A quote-and-price pair for the indexed families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotedPrice {
    /// Quote as a percentage of the reference value (100 = at par).
    pub quote_percentage: Decimal,
    /// Unit price in currency units.
    pub unit_price: Decimal,
}

/// Prices a fixed-rate bond (Tesouro Prefixado).
///
/// `price = face_value / (1 + annual_rate_percent/100)^(business_days/252)`.
///
/// `annual_rate_percent` is a whole percentage (e.g., `13.92`); the
/// division by 100 happens here.
///
/// # Errors
///
/// Returns a domain error when the rate makes the discount base
/// non-positive (`annual_rate_percent <= -100`).
pub fn fixed_rate_price(
    face_value: Decimal,
    annual_rate_percent: Decimal,
    business_days: i64,
) -> BondResult<Decimal> {
    let rate_fraction = annual_rate_percent / Decimal::ONE_HUNDRED;
    let discount = discount_factor(rate_fraction, business_days)?;
    let face = face_value
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed("face value is not representable"))?;
    Decimal::from_f64(face * discount)
        .ok_or_else(|| BondError::pricing_failed("computed price is not representable"))
}

/// Prices an inflation-linked bond (Tesouro IPCA+) off its projected
/// reference value.
///
/// `quote = 100 / (1 + real_annual_rate)^(business_days/252)`;
/// `price = projected_reference_value * quote / 100`.
///
/// `real_annual_rate` is a fraction (e.g., `0.0605`).
pub fn inflation_linked_price(
    projected_reference_value: Decimal,
    real_annual_rate: Decimal,
    business_days: i64,
) -> BondResult<QuotedPrice> {
    quoted_price(projected_reference_value, real_annual_rate, business_days)
}

/// Prices a floating-rate bond (Tesouro Selic) off its projected
/// reference value.
///
/// Same shape as the inflation-linked formula with the contracted spread
/// in place of the real rate: a positive spread (deságio) prices below
/// the reference value, a negative spread (ágio) above it.
pub fn floating_rate_price(
    projected_reference_value: Decimal,
    contracted_spread: Decimal,
    business_days: i64,
) -> BondResult<QuotedPrice> {
    quoted_price(projected_reference_value, contracted_spread, business_days)
}

/// Shared two-stage quote/price computation for the indexed families.
fn quoted_price(
    reference_value: Decimal,
    rate_fraction: Decimal,
    business_days: i64,
) -> BondResult<QuotedPrice> {
    let discount = discount_factor(rate_fraction, business_days)?;
    let quote_percentage = Decimal::from_f64(100.0 * discount)
        .ok_or_else(|| BondError::pricing_failed("computed quote is not representable"))?;
    let unit_price = reference_value * quote_percentage / Decimal::ONE_HUNDRED;
    Ok(QuotedPrice {
        quote_percentage,
        unit_price,
    })
}

/// Computes `1 / (1 + rate)^(business_days/252)`.
///
/// Rejects a non-positive base: raising it to a fractional exponent is
/// undefined (complex-valued) and would otherwise surface as NaN.
fn discount_factor(rate_fraction: Decimal, business_days: i64) -> BondResult<f64> {
    let base = (Decimal::ONE + rate_fraction)
        .to_f64()
        .ok_or_else(|| BondError::pricing_failed("rate is not representable"))?;
    if base <= 0.0 {
        return Err(BondError::from(TesouroError::domain(format!(
            "rate {rate_fraction} makes the discount base non-positive"
        ))));
    }
    let exponent = business_days as f64 / 252.0;
    Ok(1.0 / base.powf(exponent))
}
