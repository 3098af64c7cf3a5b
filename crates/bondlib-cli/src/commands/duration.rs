//! Duration command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bondlib_bonds::Bond;

use crate::cli::OutputFormat;
use crate::commands::{require_rate, BondFileArgs};
use crate::definition::LoadedBond;
use crate::output::{print_report, KeyValue};

/// Arguments for the duration command.
#[derive(Args, Debug)]
pub struct DurationArgs {
    #[command(flatten)]
    pub bond: BondFileArgs,

    /// Flat discount rate per period. Required without a curve; for a curve
    /// bond it only scales the modified duration.
    #[arg(short, long)]
    pub rate: Option<f64>,
}

/// Duration result.
#[derive(Debug, Serialize)]
pub struct DurationReport {
    pub date: String,
    pub duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_duration: Option<f64>,
}

/// Execute the duration command.
pub fn execute(args: DurationArgs, format: OutputFormat) -> Result<()> {
    let (bond, date) = args.bond.load()?;

    let (duration, modified_duration) = match &bond {
        LoadedBond::Flat(flat) => {
            let rate = require_rate(args.rate)?;
            (flat.duration(rate, date), Some(flat.modified_duration(rate, date)))
        }
        LoadedBond::Curve(curve) => (
            curve.duration(date),
            args.rate.map(|rate| curve.modified_duration(rate, date)),
        ),
    };

    let report = DurationReport {
        date: date.to_string(),
        duration,
        modified_duration,
    };

    let mut rows = vec![
        KeyValue::new("Date", &report.date),
        KeyValue::from_f64("Duration", report.duration, 2),
    ];
    if let Some(modified) = report.modified_duration {
        rows.push(KeyValue::from_f64("Modified Duration", modified, 4));
    }

    print_report("Duration Results", &rows, &report, format)
}
