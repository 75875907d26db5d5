//! Tariff aggregate
//!
//! Contains the Tariff entity, the priority-ordered tariff set and the
//! recurrence definitions that decide when a tariff is active.

pub mod model;
pub mod recurrence;

pub use model::{Tariff, TariffSet};
pub use recurrence::{DateList, Excluding, Recurrence, WeeklyPattern};
