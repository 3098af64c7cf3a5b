//! Accrued command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::BondFileArgs;
use crate::output::{print_report, KeyValue};

/// Arguments for the accrued command.
#[derive(Args, Debug)]
pub struct AccruedArgs {
    #[command(flatten)]
    pub bond: BondFileArgs,
}

/// Accrued interest result.
#[derive(Debug, Serialize)]
pub struct AccruedReport {
    pub settlement: String,
    pub day_count: String,
    pub accrued: f64,
}

/// Execute the accrued command.
pub fn execute(args: AccruedArgs, format: OutputFormat) -> Result<()> {
    let (bond, settlement) = args.bond.load()?;
    let bond = bond.as_bond();

    let report = AccruedReport {
        settlement: settlement.to_string(),
        day_count: bond.core().day_count().to_string(),
        accrued: bond.accrued_amount(settlement)?,
    };

    let rows = vec![
        KeyValue::new("Settlement", &report.settlement),
        KeyValue::new("Day Count", &report.day_count),
        KeyValue::from_f64("Accrued Interest", report.accrued, 2),
    ];

    print_report("Accrued Interest", &rows, &report, format)
}
