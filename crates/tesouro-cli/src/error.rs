//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid rate.
    #[error("Invalid rate: {0}. Must be above -100 (percent per year).")]
    InvalidRate(String),

    /// Invalid monetary value.
    #[error("Invalid amount: {0}. Must be a positive number.")]
    InvalidAmount(String),

    /// Malformed index series CSV.
    #[error("Invalid index CSV at line {line}: {reason}")]
    InvalidCsv {
        /// 1-based line number of the offending row.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Calculation error from the pricing engine.
    #[error("Calculation error: {0}")]
    Calculation(#[from] tesouro_bonds::BondError),

    /// CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
