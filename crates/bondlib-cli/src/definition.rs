//! Bond definition files.
//!
//! A definition describes one bond and, optionally, the yield curve it is
//! discounted along. TOML and JSON are accepted, picked by file extension:
//!
//! ```toml
//! face_value = 100.0
//! coupon = 5.0
//! maturity = "1/1/2025"
//! issue = "1/1/2020"
//! settlement = "3/1/2021"
//! day_count = "YearActualMonthActual"
//!
//! [[cash_flows]]
//! amount = 5.0
//! due = "1/1/2022"
//!
//! [[curve]]
//! maturity = 1.0
//! yield = 0.035
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use bondlib_bonds::instruments::DEFAULT_FACE_VALUE;
use bondlib_bonds::{Bond, BondCore, BondResult, FlatTermBond, GeneralTermBond};
use bondlib_core::daycounts::DayCountConvention;
use bondlib_core::types::{CashFlow, Clock, Date, SystemClock};
use bondlib_curves::{SharedYieldCurve, YieldCurve};

use crate::error::{CliError, CliResult};

/// A bond as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondDefinition {
    /// Face value.
    #[serde(default = "default_face_value")]
    pub face_value: f64,
    /// Coupon per period, in currency.
    pub coupon: f64,
    /// Maturity date.
    pub maturity: Date,
    /// Issue date.
    pub issue: Date,
    /// Settlement date; today plus two days when absent.
    #[serde(default)]
    pub settlement: Option<Date>,
    /// Day count convention.
    #[serde(default)]
    pub day_count: DayCountConvention,
    /// Cash flows, in any order.
    pub cash_flows: Vec<CashFlow>,
    /// Yield curve; present only for curve-discounted bonds.
    #[serde(default)]
    pub curve: Option<YieldCurve>,
}

fn default_face_value() -> f64 {
    DEFAULT_FACE_VALUE
}

impl BondDefinition {
    /// Loads a definition from a `.toml` or `.json` file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let definition = match extension.as_deref() {
            Some("toml") => {
                toml::from_str(&content).map_err(|e| CliError::Definition(e.to_string()))?
            }
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| CliError::Definition(e.to_string()))?
            }
            _ => return Err(CliError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!("loaded bond definition from {}", path.display());
        Ok(definition)
    }

    /// Builds the bond, on the wall clock.
    pub fn build(self) -> BondResult<LoadedBond> {
        self.build_with_clock(Arc::new(SystemClock))
    }

    /// Builds the bond against `clock`.
    pub fn build_with_clock(self, clock: Arc<dyn Clock>) -> BondResult<LoadedBond> {
        let mut builder = BondCore::builder()
            .face_value(self.face_value)
            .coupon(self.coupon)
            .maturity(self.maturity)
            .issue(self.issue)
            .day_count(self.day_count)
            .cash_flows(self.cash_flows)
            .clock(clock);
        if let Some(settlement) = self.settlement {
            builder = builder.settlement(settlement);
        }
        let core = builder.build()?;

        Ok(match self.curve {
            Some(curve) => LoadedBond::Curve(GeneralTermBond::new(core, SharedYieldCurve::new(curve))),
            None => LoadedBond::Flat(FlatTermBond::new(core)),
        })
    }
}

/// A bond built from a definition.
#[derive(Debug)]
pub enum LoadedBond {
    /// Discounted at a flat rate given on the command line.
    Flat(FlatTermBond),
    /// Discounted along the definition's curve.
    Curve(GeneralTermBond),
}

impl LoadedBond {
    /// The bond behind its common interface.
    pub fn as_bond(&self) -> &dyn Bond {
        match self {
            LoadedBond::Flat(bond) => bond,
            LoadedBond::Curve(bond) => bond,
        }
    }

    /// Short description of the discounting model.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedBond::Flat(_) => "Flat term",
            LoadedBond::Curve(_) => "Yield curve",
        }
    }
}

/// Parses a `D/M/Y` date argument.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}
