//! Yield command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{validate_price, BondFileArgs};
use crate::output::{print_report, KeyValue};

/// Arguments for the yield command.
#[derive(Args, Debug)]
pub struct YieldArgs {
    #[command(flatten)]
    pub bond: BondFileArgs,

    /// Clean market price
    #[arg(short, long)]
    pub price: f64,
}

/// Yield calculation result.
#[derive(Debug, Serialize)]
pub struct YieldReport {
    pub date: String,
    pub price: f64,
    pub yield_to_maturity: f64,
    pub current_yield: f64,
    pub coupon_rate: f64,
}

/// Execute the yield command.
pub fn execute(args: YieldArgs, format: OutputFormat) -> Result<()> {
    let price = validate_price(args.price)?;
    let (bond, date) = args.bond.load()?;
    let bond = bond.as_bond();

    let report = YieldReport {
        date: date.to_string(),
        price,
        yield_to_maturity: bond.yield_to_maturity(price, date)?,
        current_yield: bond.current_yield(price),
        coupon_rate: bond.coupon_rate(),
    };

    let rows = vec![
        KeyValue::new("Date", &report.date),
        KeyValue::from_f64("Clean Price (Input)", report.price, 2),
        KeyValue::from_f64("Yield to Maturity", report.yield_to_maturity, 4),
        KeyValue::from_percent("Current Yield", report.current_yield),
        KeyValue::from_percent("Coupon Rate", report.coupon_rate),
    ];

    print_report("Yield Results", &rows, &report, format)
}
