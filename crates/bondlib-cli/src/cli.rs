//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AccruedArgs, DurationArgs, PriceArgs, ScheduleArgs, YieldArgs};

/// Bondlib - bond valuation from the command line
#[derive(Parser)]
#[command(name = "bondlib")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List the bond's cash flow schedule
    Schedule(ScheduleArgs),

    /// Interest accrued on a settlement date
    Accrued(AccruedArgs),

    /// Clean and dirty price
    Price(PriceArgs),

    /// Yield to maturity from a clean price
    Yield(YieldArgs),

    /// Duration and modified duration
    Duration(DurationArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
}
