//! Application services

mod toll;

pub use toll::{match_fee, TollCalculator, CHARGE_WINDOW_MINUTES, DAILY_CAP};
