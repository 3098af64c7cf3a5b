//! Bond instrument types.
//!
//! - [`BondCore`]: contractual data shared by the variants, with its builder
//! - [`FlatTermBond`]: discounted at a single flat rate
//! - [`GeneralTermBond`]: discounted along a shared yield curve

mod base;
mod flat;
mod general;

pub use base::{BondCore, BondCoreBuilder, DEFAULT_FACE_VALUE, DEFAULT_SETTLEMENT_DAYS};
pub use flat::FlatTermBond;
pub use general::GeneralTermBond;
