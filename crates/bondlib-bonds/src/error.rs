//! Error types for bond operations.

use bondlib_core::Date;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond construction and valuation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// The first cash flow falls before the issue date.
    #[error("First cash flow on {first_payment} precedes issue date {issue}")]
    IssueAfterFirstPayment {
        /// Issue date.
        issue: Date,
        /// Due date of the earliest cash flow.
        first_payment: Date,
    },

    /// The maturity date falls before the issue date.
    #[error("Maturity date {maturity} precedes issue date {issue}")]
    MaturityBeforeIssue {
        /// Maturity date.
        maturity: Date,
        /// Issue date.
        issue: Date,
    },

    /// No cash flow remains after the settlement date.
    #[error("No cash flow due after settlement date {settlement}")]
    NoCurrentCashFlow {
        /// Settlement date.
        settlement: Date,
    },

    /// Settlement precedes the date interest starts accruing from.
    #[error("Settlement date {settlement} precedes accrual start {reference}")]
    SettlementBeforeReference {
        /// Settlement date.
        settlement: Date,
        /// Previous coupon or issue date.
        reference: Date,
    },

    /// Yield calculation failed to converge.
    #[error("Yield calculation failed to converge after {iterations} iterations")]
    YieldConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    CoreError(#[from] bondlib_core::CoreError),

    /// Numerical error.
    #[error("Math error: {0}")]
    MathError(#[from] bondlib_math::MathError),

    /// Curve error.
    #[error("Curve error: {0}")]
    CurveError(#[from] bondlib_curves::CurveError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::missing_field("maturity");
        assert_eq!(err.to_string(), "Missing required field: maturity");

        let err = BondError::MaturityBeforeIssue {
            maturity: Date::parse("10/10/2020").unwrap(),
            issue: Date::parse("10/10/2021").unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Maturity date 10/10/2020 precedes issue date 10/10/2021"
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: BondError = bondlib_core::CoreError::EmptySchedule.into();
        assert!(matches!(err, BondError::CoreError(_)));
    }
}
