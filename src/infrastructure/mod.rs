//! Infrastructure layer - external concerns

pub mod recurrence;
pub mod tariff_file;

pub use recurrence::RuleSetRecurrence;
pub use tariff_file::{TariffDocument, TariffEntry};
