//! Tesouro CLI - Command-line interface for the bond pricing engine.
//!
//! # Usage
//!
//! ```bash
//! # Price a Tesouro Prefixado
//! tesouro fixed --maturity 2032-01-01 --rate 13.92
//!
//! # Price a Tesouro IPCA+ from an official anchor VNA
//! tesouro ipca --maturity 2035-05-15 --real-rate 6.05 \
//!     --vna 4400.25 --projected-ipca 0.44
//!
//! # Price a Tesouro Selic
//! tesouro selic --maturity 2029-03-01 --spread 0.02 \
//!     --vna 15000.00 --selic 11.75
//!
//! # Day counts between two dates
//! tesouro term --purchase 2026-01-02 --maturity 2032-01-01
//!
//! # Accumulated reference value from an index CSV
//! tesouro vna --ipca-csv ipca.csv --as-of 2025-06-15
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    let format = cli.format;

    match cli.command {
        Commands::Fixed(args) => commands::fixed::execute(args, format)?,
        Commands::Ipca(args) => commands::ipca::execute(args, format)?,
        Commands::Selic(args) => commands::selic::execute(args, format)?,
        Commands::Term(args) => commands::term::execute(args, format)?,
        Commands::Vna(args) => commands::vna::execute(args, format)?,
    }

    Ok(())
}
