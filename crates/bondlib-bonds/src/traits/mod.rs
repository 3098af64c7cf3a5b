//! Core bond traits.
//!
//! - [`Bond`]: the valuation capability shared by every bond variant

mod bond;

pub use bond::Bond;
