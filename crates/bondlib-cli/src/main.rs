//! Bondlib CLI - value bonds described in a TOML or JSON file.
//!
//! # Usage
//!
//! ```bash
//! # List the cash flow schedule
//! bondlib schedule bond.toml
//!
//! # Accrued interest on a settlement date
//! bondlib accrued bond.toml --date 29/9/2022
//!
//! # Clean and dirty price at a flat rate
//! bondlib price bond.toml --rate 0.05
//!
//! # Yield to maturity from a clean price
//! bondlib yield bond.toml --price 102.53 --format json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod definition;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info,bondlib=debug",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;

    match cli.command {
        Commands::Schedule(args) => commands::schedule::execute(args, format)?,
        Commands::Accrued(args) => commands::accrued::execute(args, format)?,
        Commands::Price(args) => commands::price::execute(args, format)?,
        Commands::Yield(args) => commands::ytm::execute(args, format)?,
        Commands::Duration(args) => commands::duration::execute(args, format)?,
    }

    Ok(())
}
