//! CLI command implementations.

pub mod accrued;
pub mod duration;
pub mod price;
pub mod schedule;
pub mod ytm;

// Re-export submodules for convenience
pub use accrued::AccruedArgs;
pub use duration::DurationArgs;
pub use price::PriceArgs;
pub use schedule::ScheduleArgs;
pub use ytm::YieldArgs;

use std::path::PathBuf;

use clap::Args;

use bondlib_core::types::Date;

use crate::definition::{parse_date, BondDefinition, LoadedBond};
use crate::error::{CliError, CliResult};

/// Definition file and valuation date shared by the commands.
#[derive(Args, Debug)]
pub struct BondFileArgs {
    /// Bond definition file (.toml or .json)
    pub file: PathBuf,

    /// Valuation date (D/M/Y). Defaults to the bond's settlement date.
    #[arg(short, long)]
    pub date: Option<String>,
}

impl BondFileArgs {
    /// Loads the bond and resolves the valuation date.
    pub fn load(&self) -> anyhow::Result<(LoadedBond, Date)> {
        let bond = BondDefinition::from_file(&self.file)?.build()?;
        let date = match &self.date {
            Some(s) => parse_date(s)?,
            None => bond.as_bond().core().settlement(),
        };
        tracing::debug!("valuing {} bond as of {date}", bond.kind());
        Ok((bond, date))
    }
}

/// Requires a flat rate for bonds without a curve.
pub fn require_rate(rate: Option<f64>) -> CliResult<f64> {
    rate.ok_or(CliError::MissingRate)
}

/// Validates a price value.
pub fn validate_price(price: f64) -> CliResult<f64> {
    if !(price.is_finite() && price > 0.0) {
        return Err(CliError::InvalidPrice(price));
    }
    Ok(price)
}
