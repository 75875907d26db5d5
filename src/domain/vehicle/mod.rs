//! Vehicle aggregate
//!
//! Vehicle categories and the exemption flags attached to them.

pub mod model;

pub use model::{ExemptionSet, VehicleCategory};
