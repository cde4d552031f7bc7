//! Reference value (VNA) accumulation command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use tesouro_bonds::projection::{
    accumulated_reference_value, accumulation_epoch, reference_value_history,
};
use tesouro_bonds::sources::InMemorySeriesSource;
use tesouro_core::types::{Date, ReferenceBasis};

use crate::cli::OutputFormat;
use crate::commands::{load_index_csv, parse_date};
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the vna command.
#[derive(Args, Debug)]
pub struct VnaArgs {
    /// CSV file with monthly IPCA changes (date,change_percent)
    #[arg(long)]
    pub ipca_csv: PathBuf,

    /// Accumulate through this date (YYYY-MM-DD). Defaults to the last
    /// dia-15 publication date on or before today.
    #[arg(long)]
    pub as_of: Option<String>,

    /// Print the month-by-month accumulation history instead of the
    /// final value
    #[arg(long)]
    pub history: bool,
}

/// One row of the accumulation history.
#[derive(Debug, Clone, Serialize, Tabled)]
struct VnaRow {
    #[tabled(rename = "Date")]
    date: Date,
    #[tabled(rename = "VNA")]
    vna: Decimal,
}

/// Execute the vna command.
pub fn execute(args: VnaArgs, format: OutputFormat) -> Result<()> {
    let as_of = match args.as_of.as_deref() {
        Some(s) => parse_date(s)?,
        None => Date::today().last_publication_date()?,
    };
    if as_of < accumulation_epoch() {
        anyhow::bail!(
            "{as_of} precedes the accumulation epoch {}",
            accumulation_epoch()
        );
    }

    let series = load_index_csv(&args.ipca_csv)?;
    let source = InMemorySeriesSource::new(args.ipca_csv.display().to_string(), series);

    if args.history {
        let rows: Vec<VnaRow> = reference_value_history(&source, as_of)?
            .into_iter()
            .map(|(date, vna)| VnaRow { date, vna })
            .collect();
        if rows.is_empty() {
            anyhow::bail!("no index observations through {as_of}");
        }
        match format {
            OutputFormat::Table => {
                print_header("Reference Value History");
                print_output(&rows, format)?;
            }
            // The accumulated value as of the last observation, bare,
            // like the non-history form.
            OutputFormat::Minimal => {
                if let Some(last) = rows.last() {
                    println!("{}", last.vna);
                }
            }
            _ => print_output(&rows, format)?,
        }
        return Ok(());
    }

    let reference = accumulated_reference_value(&source, as_of)?
        .ok_or_else(|| anyhow::anyhow!("no index observations through {as_of}"))?;

    let basis = match &reference.basis {
        ReferenceBasis::Observed { through } => format!("observed through {through}"),
        ReferenceBasis::Estimated { label } => format!("estimate ({label})"),
    };
    let rows = vec![
        KeyValue::new("As Of", as_of.to_string()),
        KeyValue::from_decimal("VNA", reference.value, 6),
        KeyValue::new("Basis", basis),
    ];

    match format {
        OutputFormat::Table => {
            print_header("Reference Value (VNA)");
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{:.6}", reference.value);
        }
        _ => print_output(&rows, format)?,
    }

    Ok(())
}
