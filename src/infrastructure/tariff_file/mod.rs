//! Tariff document (JSON) loading

pub mod dto;
mod loader;

pub use dto::{TariffDocument, TariffEntry};
