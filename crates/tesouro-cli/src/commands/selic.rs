//! Floating-rate (Tesouro Selic) pricing command.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use tesouro_bonds::comparison::{compare_with_quote, RateStance};
use tesouro_bonds::pricing::price_floating;
use tesouro_core::types::{BondTerms, ReferenceValue};

use crate::cli::OutputFormat;
use crate::commands::{
    parse_date, percent_to_fraction, purchase_or_today, validate_amount, validate_rate_percent,
};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the selic command.
#[derive(Args, Debug)]
pub struct SelicArgs {
    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Contracted spread over Selic as a whole percentage
    /// (negative for an ágio, e.g., -0.01)
    #[arg(short, long, allow_hyphen_values = true, default_value = "0")]
    pub spread: Decimal,

    /// Official VNA as of the purchase date
    #[arg(long)]
    pub vna: Decimal,

    /// Projected annual Selic rate as a whole percentage (e.g., 15.0),
    /// used to roll the VNA one business day
    #[arg(long, default_value = "0")]
    pub selic: Decimal,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub purchase: Option<String>,

    /// Quoted unit price to compare the computed price against
    #[arg(long)]
    pub quoted_price: Option<Decimal>,
}

/// Execute the selic command.
pub fn execute(args: SelicArgs, format: OutputFormat) -> Result<()> {
    let maturity = parse_date(&args.maturity)?;
    let purchase = purchase_or_today(args.purchase.as_deref())?;
    let spread = percent_to_fraction(validate_rate_percent(args.spread)?);
    let selic = percent_to_fraction(validate_rate_percent(args.selic)?);
    let vna = validate_amount(args.vna)?;

    let terms = BondTerms::floating(maturity, spread);
    let reference = ReferenceValue::observed(vna, purchase);
    let result = price_floating(&terms, purchase, &reference, selic)?;
    let stance = RateStance::classify(spread);

    let mut rows = Vec::new();
    rows.push(KeyValue::new("Bond", format!("{} {}", terms.family, maturity.year())));
    rows.push(KeyValue::new("Maturity", maturity.to_string()));
    rows.push(KeyValue::new("Purchase", purchase.to_string()));
    rows.push(KeyValue::from_percent("Spread", args.spread));
    rows.push(KeyValue::new("Stance", stance.to_string()));
    rows.push(KeyValue::from_percent("Projected Selic", args.selic));
    rows.push(KeyValue::new(
        "Business Days (approx)",
        result.term.business_days.to_string(),
    ));
    if let Some(vna) = result.projected_reference_value {
        rows.push(KeyValue::from_decimal("Projected VNA (D+1)", vna, 6));
    }
    if let Some(quote) = result.quote_percentage {
        rows.push(KeyValue::new("Quote", format!("{:.4}%", quote)));
    }
    rows.push(KeyValue::from_decimal("Unit Price", result.unit_price, 6));

    if let Some(quoted) = args.quoted_price {
        let comparison = compare_with_quote(result.unit_price, validate_amount(quoted)?)?;
        rows.push(KeyValue::from_decimal("Quoted Price", comparison.quoted, 6));
        rows.push(KeyValue::from_decimal(
            "Difference",
            comparison.absolute_diff,
            6,
        ));
        rows.push(KeyValue::new("Band", comparison.band.to_string()));
    }

    match format {
        OutputFormat::Table => {
            print_header("Floating-Rate Bond Pricing");
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", result.unit_price);
        }
        _ => print_output(&rows, format)?,
    }

    Ok(())
}
