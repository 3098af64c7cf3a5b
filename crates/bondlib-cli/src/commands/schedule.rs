//! Schedule command implementation.
//!
//! Lists the cash flows a bond is valued from, after sorting and the
//! final-pair merge.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::BondFileArgs;
use crate::output::print_output;

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub bond: BondFileArgs,
}

/// One row of the schedule.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "#")]
    pub period: usize,
    #[tabled(rename = "Due")]
    pub due: String,
    #[tabled(rename = "Amount")]
    pub amount: f64,
    #[tabled(rename = "Status")]
    pub status: &'static str,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat) -> Result<()> {
    let (bond, date) = args.bond.load()?;
    let core = bond.as_bond().core();

    let rows: Vec<ScheduleRow> = core
        .schedule()
        .iter()
        .enumerate()
        .map(|(i, cf)| ScheduleRow {
            period: i + 1,
            due: cf.due().to_string(),
            amount: cf.amount(),
            status: if cf.due() < date { "paid" } else { "due" },
        })
        .collect();

    print_output(&format!("Cash Flows as of {date}"), &rows, format)
}
