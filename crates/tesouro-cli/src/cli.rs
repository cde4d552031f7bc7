//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{FixedArgs, IpcaArgs, SelicArgs, TermArgs, VnaArgs};

/// Tesouro - Brazilian government bond pricing CLI
#[derive(Parser)]
#[command(name = "tesouro")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a fixed-rate bond (Tesouro Prefixado)
    Fixed(FixedArgs),

    /// Price an inflation-linked bond (Tesouro IPCA+)
    Ipca(IpcaArgs),

    /// Price a floating-rate bond (Tesouro Selic)
    Selic(SelicArgs),

    /// Calculate the business-day term between two dates
    Term(TermArgs),

    /// Accumulate the reference value (VNA) from an index series CSV
    Vna(VnaArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
