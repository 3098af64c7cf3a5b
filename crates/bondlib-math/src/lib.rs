//! # Bondlib Math
//!
//! Numerical routines behind yield-to-maturity solving:
//!
//! - **Solvers**: a safeguarded Newton iteration that falls back to
//!   bisection, and upward bracket expansion for decreasing functions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{expand_upper_bound, safeguarded_newton, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
