//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date argument.
    #[error("Invalid date: {0}. Use D/M/Y.")]
    InvalidDate(String),

    /// Invalid price argument.
    #[error("Invalid price: {0}. Must be positive.")]
    InvalidPrice(f64),

    /// A flat-rate calculation was asked for without a rate.
    #[error("--rate is required for a bond without a yield curve")]
    MissingRate,

    /// Definition file extension not recognised.
    #[error("Unsupported definition file {}: expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Definition file could not be parsed.
    #[error("Invalid bond definition: {0}")]
    Definition(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
