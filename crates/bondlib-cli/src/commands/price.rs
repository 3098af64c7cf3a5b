//! Price command implementation.
//!
//! Flat-term bonds are priced at the `--rate` given; curve bonds along the
//! curve in their definition.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{require_rate, BondFileArgs};
use crate::definition::LoadedBond;
use crate::output::{print_report, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondFileArgs,

    /// Flat discount rate per period (e.g. 0.05). Required without a curve.
    #[arg(short, long)]
    pub rate: Option<f64>,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub model: &'static str,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub clean_price: f64,
    pub dirty_price: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, format: OutputFormat) -> Result<()> {
    let (bond, date) = args.bond.load()?;

    let report = match &bond {
        LoadedBond::Flat(flat) => {
            let rate = require_rate(args.rate)?;
            PriceReport {
                model: bond.kind(),
                date: date.to_string(),
                rate: Some(rate),
                clean_price: flat.clean_price(rate, date),
                dirty_price: flat.dirty_price(rate, date)?,
            }
        }
        LoadedBond::Curve(curve) => {
            if args.rate.is_some() {
                tracing::warn!("--rate is ignored for a bond with a yield curve");
            }
            PriceReport {
                model: bond.kind(),
                date: date.to_string(),
                rate: None,
                clean_price: curve.clean_price(date),
                dirty_price: curve.dirty_price(date)?,
            }
        }
    };

    let mut rows = vec![
        KeyValue::new("Model", report.model),
        KeyValue::new("Date", &report.date),
    ];
    if let Some(rate) = report.rate {
        rows.push(KeyValue::from_percent("Rate", rate));
    }
    rows.push(KeyValue::from_f64("Clean Price", report.clean_price, 2));
    rows.push(KeyValue::from_f64("Dirty Price", report.dirty_price, 2));

    print_report("Bond Pricing Results", &rows, &report, format)
}
