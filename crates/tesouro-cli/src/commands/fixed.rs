//! Fixed-rate (Tesouro Prefixado) pricing command.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use tesouro_bonds::comparison::compare_with_quote;
use tesouro_bonds::pricing::price_fixed;
use tesouro_core::types::BondTerms;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, purchase_or_today, validate_amount, validate_rate_percent};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the fixed command.
#[derive(Args, Debug)]
pub struct FixedArgs {
    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Quoted annual rate as a whole percentage (e.g., 13.92)
    #[arg(short, long)]
    pub rate: Decimal,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub purchase: Option<String>,

    /// Face value (default: 1000)
    #[arg(long, default_value = "1000")]
    pub face: Decimal,

    /// Quoted unit price to compare the computed price against
    #[arg(long)]
    pub quoted_price: Option<Decimal>,
}

/// Execute the fixed command.
pub fn execute(args: FixedArgs, format: OutputFormat) -> Result<()> {
    let maturity = parse_date(&args.maturity)?;
    let purchase = purchase_or_today(args.purchase.as_deref())?;
    let rate = validate_rate_percent(args.rate)?;
    let face = validate_amount(args.face)?;

    let terms = BondTerms::fixed(maturity, rate).with_face_value(face);
    let result = price_fixed(&terms, purchase)?;

    let mut rows = Vec::new();
    rows.push(KeyValue::new("Bond", format!("{} {}", terms.family, maturity.year())));
    rows.push(KeyValue::new("Maturity", maturity.to_string()));
    rows.push(KeyValue::new("Purchase", purchase.to_string()));
    rows.push(KeyValue::from_percent("Rate", rate));
    rows.push(KeyValue::new(
        "Calendar Days",
        result.term.calendar_days.to_string(),
    ));
    rows.push(KeyValue::new(
        "Business Days (approx)",
        result.term.business_days.to_string(),
    ));
    rows.push(KeyValue::from_decimal("Unit Price", result.unit_price, 6));

    if result.term.is_matured() {
        rows.push(KeyValue::new("Status", "matured (negative term)"));
    }

    if let Some(quoted) = args.quoted_price {
        let comparison = compare_with_quote(result.unit_price, validate_amount(quoted)?)?;
        rows.push(KeyValue::from_decimal("Quoted Price", comparison.quoted, 6));
        rows.push(KeyValue::from_decimal(
            "Difference",
            comparison.absolute_diff,
            6,
        ));
        rows.push(KeyValue::new(
            "Difference %",
            format!("{:.4}%", comparison.relative_diff_percent),
        ));
        rows.push(KeyValue::new("Band", comparison.band.to_string()));
    }

    match format {
        OutputFormat::Table => {
            print_header("Fixed-Rate Bond Pricing");
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", result.unit_price);
        }
        _ => print_output(&rows, format)?,
    }

    Ok(())
}
