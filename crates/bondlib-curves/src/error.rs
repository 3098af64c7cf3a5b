//! Error types for curve operations.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// A point with a non-finite maturity or yield.
    #[error("Invalid curve point: maturity {maturity}, yield {bond_yield}")]
    InvalidPoint {
        /// Maturity in years.
        maturity: f64,
        /// Yield at that maturity.
        bond_yield: f64,
    },
}
