use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    #[error("Unknown vehicle category: {0}")]
    UnknownVehicleCategory(String),

    #[error("Passage {index} is earlier than the passage before it")]
    PassagesOutOfOrder { index: usize },

    #[error("Passages span more than one day: {first} .. {last}")]
    PassagesSpanMultipleDays {
        first: DateTime<Utc>,
        last: DateTime<Utc>,
    },
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Recurrence rule error: {0}")]
    Recurrence(#[from] rrule::RRuleError),

    #[error("Validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown time zone: {0}")]
    TimeZone(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Infra(err.into())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Infra(err.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Infra(err.into())
    }
}

impl From<rrule::RRuleError> for AppError {
    fn from(err: rrule::RRuleError) -> Self {
        Self::Infra(err.into())
    }
}

pub type AppResult<T> = Result<T, AppError>;
