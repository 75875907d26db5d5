pub mod services;

// Re-export key types for convenience
pub use services::{match_fee, TollCalculator, DAILY_CAP};
