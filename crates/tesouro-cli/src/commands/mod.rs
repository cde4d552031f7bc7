//! CLI command implementations.

pub mod fixed;
pub mod ipca;
pub mod selic;
pub mod term;
pub mod vna;

// Re-export argument structs for convenience
pub use fixed::FixedArgs;
pub use ipca::IpcaArgs;
pub use selic::SelicArgs;
pub use term::TermArgs;
pub use vna::VnaArgs;

use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use tesouro_bonds::indices::IndexSeries;
use tesouro_core::types::{Date, IndexPoint};

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Resolves an optional purchase date, defaulting to today.
pub fn purchase_or_today(purchase: Option<&str>) -> CliResult<Date> {
    match purchase {
        Some(s) => parse_date(s),
        None => Ok(Date::today()),
    }
}

/// Validates an annual rate given as a whole percentage.
pub fn validate_rate_percent(rate: Decimal) -> CliResult<Decimal> {
    if rate <= Decimal::from(-100) {
        return Err(CliError::InvalidRate(rate.to_string()));
    }
    Ok(rate)
}

/// Validates a positive monetary amount.
pub fn validate_amount(amount: Decimal) -> CliResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(CliError::InvalidAmount(amount.to_string()));
    }
    Ok(amount)
}

/// Converts a whole-percent rate to a fraction.
pub fn percent_to_fraction(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

/// Loads an index series from a CSV file.
///
/// Expected layout: a header row, then `date,change_percent` rows with
/// ISO dates and whole-percentage monthly changes (the layout of a BCB
/// SGS series export).
pub fn load_index_csv(path: &Path) -> CliResult<IndexSeries> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut series = IndexSeries::new();

    for (idx, record) in reader.records().enumerate() {
        // Header is line 1; the first record is line 2
        let line = idx + 2;
        let record = record.map_err(|e| CliError::InvalidCsv {
            line,
            reason: e.to_string(),
        })?;

        let date_field = record.get(0).ok_or(CliError::InvalidCsv {
            line,
            reason: "missing date column".to_string(),
        })?;
        let change_field = record.get(1).ok_or(CliError::InvalidCsv {
            line,
            reason: "missing change_percent column".to_string(),
        })?;

        let date = parse_date(date_field.trim()).map_err(|_| CliError::InvalidCsv {
            line,
            reason: format!("bad date '{date_field}'"),
        })?;
        let percent = Decimal::from_str(change_field.trim()).map_err(|_| CliError::InvalidCsv {
            line,
            reason: format!("bad change '{change_field}'"),
        })?;

        series.insert(IndexPoint::from_percent(date, percent));
    }

    Ok(series)
}
