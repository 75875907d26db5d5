pub mod tariff;
pub mod vehicle;

// Re-export commonly used types
pub use tariff::{DateList, Excluding, Recurrence, Tariff, TariffSet, WeeklyPattern};
pub use vehicle::{ExemptionSet, VehicleCategory};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
