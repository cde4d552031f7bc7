//! Inflation-linked (Tesouro IPCA+) pricing command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use tesouro_bonds::comparison::compare_with_quote;
use tesouro_bonds::pricing::{price_inflation_linked, price_inflation_linked_from_reference};
use tesouro_bonds::sources::{InMemorySeriesSource, UnavailableSource};
use tesouro_core::types::{BondTerms, ReferenceValue};

use crate::cli::OutputFormat;
use crate::commands::{
    load_index_csv, parse_date, percent_to_fraction, purchase_or_today, validate_amount,
    validate_rate_percent,
};
use crate::output::{print_header, print_output, print_warning, KeyValue};

/// Arguments for the ipca command.
#[derive(Args, Debug)]
pub struct IpcaArgs {
    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Contracted real rate as a whole percentage (e.g., 6.05)
    #[arg(short, long)]
    pub real_rate: Decimal,

    /// Projected monthly IPCA change as a whole percentage (e.g., 0.44)
    #[arg(long, default_value = "0")]
    pub projected_ipca: Decimal,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub purchase: Option<String>,

    /// Anchor VNA from an official publication, skipping accumulation
    #[arg(long, conflicts_with = "ipca_csv")]
    pub vna: Option<Decimal>,

    /// CSV file with monthly IPCA changes (date,change_percent)
    #[arg(long)]
    pub ipca_csv: Option<PathBuf>,

    /// Quoted unit price to compare the computed price against
    #[arg(long)]
    pub quoted_price: Option<Decimal>,
}

/// Execute the ipca command.
pub fn execute(args: IpcaArgs, format: OutputFormat) -> Result<()> {
    let maturity = parse_date(&args.maturity)?;
    let purchase = purchase_or_today(args.purchase.as_deref())?;
    let real_rate = percent_to_fraction(validate_rate_percent(args.real_rate)?);
    let projected = percent_to_fraction(validate_rate_percent(args.projected_ipca)?);

    let terms = BondTerms::inflation_linked(maturity, real_rate);

    let result = if let Some(vna) = args.vna {
        let anchor = purchase.last_publication_date()?;
        let reference = ReferenceValue::observed(validate_amount(vna)?, anchor);
        price_inflation_linked_from_reference(&terms, purchase, &reference, projected)?
    } else if let Some(path) = &args.ipca_csv {
        let series = load_index_csv(path)?;
        let source = InMemorySeriesSource::new(path.display().to_string(), series);
        price_inflation_linked(&terms, purchase, &source, projected)?
    } else {
        let source = UnavailableSource::new("no index source configured");
        price_inflation_linked(&terms, purchase, &source, projected)?
    };

    if result.estimated {
        print_warning("reference value is an estimate; price is indicative");
    }

    let mut rows = Vec::new();
    rows.push(KeyValue::new("Bond", format!("{} {}", terms.family, maturity.year())));
    rows.push(KeyValue::new("Maturity", maturity.to_string()));
    rows.push(KeyValue::new("Purchase", purchase.to_string()));
    rows.push(KeyValue::from_percent("Real Rate", args.real_rate));
    rows.push(KeyValue::from_percent("Projected IPCA (monthly)", args.projected_ipca));
    rows.push(KeyValue::new(
        "Business Days (approx)",
        result.term.business_days.to_string(),
    ));
    if let Some(vna) = result.projected_reference_value {
        rows.push(KeyValue::from_decimal("Projected VNA", vna, 6));
    }
    if let Some(quote) = result.quote_percentage {
        rows.push(KeyValue::new("Quote", format!("{:.4}%", quote)));
    }
    rows.push(KeyValue::from_decimal("Unit Price", result.unit_price, 6));
    rows.push(KeyValue::new(
        "Basis",
        if result.estimated { "estimate" } else { "observed" },
    ));

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
            print_header("Inflation-Linked Bond Pricing");
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", result.unit_price);
        }
        _ => print_output(&rows, format)?,
    }

    Ok(())
}
