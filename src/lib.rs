//! # Toll Calculator
//!
//! Computes the daily toll fee for a vehicle from its passages through toll
//! points.
//!
//! ## Architecture
//!
//! - **domain**: vehicle categories, exemptions, tariffs and their recurrences
//! - **application**: the fee service (tariff matching and daily aggregation)
//! - **infrastructure**: RRULE evaluation and the JSON tariff document loader
//! - **config**: TOML application configuration
//!
//! ```rust,no_run
//! use chrono::{TimeZone, Utc};
//! use toll_calculator::{TollCalculator, VehicleCategory};
//!
//! let calculator = TollCalculator::from_file("tariffs.json", chrono_tz::UTC)?;
//! let passages = [Utc.with_ymd_and_hms(2019, 10, 1, 7, 15, 0).unwrap()];
//! let fee = calculator.compute_day_fee(VehicleCategory::Car, &passages)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;
pub mod telemetry;

pub use application::{match_fee, TollCalculator, DAILY_CAP};
pub use config::{default_config_path, AppConfig};
pub use domain::{
    DateList, DomainError, Excluding, ExemptionSet, Recurrence, Tariff, TariffSet,
    VehicleCategory, WeeklyPattern,
};
pub use infrastructure::{RuleSetRecurrence, TariffDocument};
pub use shared::errors::{AppError, AppResult, InfraError};
