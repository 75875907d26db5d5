//! Tariff document DTOs

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// On-disk tariff configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TariffDocument {
    /// Category id (as a JSON object key) to "fully exempt" flag.
    #[serde(default)]
    pub vehicle_type_free: HashMap<String, bool>,

    /// Tariffs in priority order.
    #[serde(rename = "Tariffs", alias = "tariffs", default)]
    #[validate(nested)]
    pub tariffs: Vec<TariffEntry>,

    /// Calendar dates on which no tariff applies.
    #[serde(default)]
    pub toll_free_dates: Vec<NaiveDate>,

    #[serde(default)]
    #[validate(range(min = 0, message = "daily_cap must be non-negative"))]
    pub daily_cap: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TariffEntry {
    /// RRULE set text, lines separated by `\n`.
    #[validate(length(min = 1, message = "rrule is required"))]
    pub rrule: String,

    /// Window length in minutes.
    #[validate(range(min = 1, message = "duration must be at least one minute"))]
    pub duration: i64,

    #[validate(range(min = 0, max = 4294967295i64, message = "fee must be between 0 and 4294967295"))]
    pub fee: i64,
}
