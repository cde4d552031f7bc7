//! Term calculation command.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;

use tesouro_core::daycounts::business_term;

use crate::cli::OutputFormat;
use crate::commands::{parse_date, purchase_or_today};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the term command.
#[derive(Args, Debug)]
pub struct TermArgs {
    /// Maturity date (YYYY-MM-DD)
    #[arg(short, long)]
    pub maturity: String,

    /// Purchase date (YYYY-MM-DD). Defaults to today.
    #[arg(short, long)]
    pub purchase: Option<String>,
}

/// Execute the term command.
pub fn execute(args: TermArgs, format: OutputFormat) -> Result<()> {
    let maturity = parse_date(&args.maturity)?;
    let purchase = purchase_or_today(args.purchase.as_deref())?;

    let term = business_term(purchase, maturity);
    let year_fraction = Decimal::from(term.business_days) / Decimal::from(252);

    let mut rows = vec![
        KeyValue::new("Purchase", purchase.to_string()),
        KeyValue::new("Maturity", maturity.to_string()),
        KeyValue::new("Calendar Days", term.calendar_days.to_string()),
        KeyValue::new("Business Days (approx)", term.business_days.to_string()),
        KeyValue::from_decimal("Year Fraction (du/252)", year_fraction, 6),
    ];
    if term.is_matured() {
        rows.push(KeyValue::new("Status", "matured (negative term)"));
    }

    match format {
        OutputFormat::Table => {
            print_header("Term Calculation");
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", term.business_days);
        }
        _ => print_output(&rows, format)?,
    }

    Ok(())
}
