//! Cash flow analytics built on the core schedule.

mod accrued;

pub use accrued::AccruedInterestCalculator;
