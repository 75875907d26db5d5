//! Builds a [`TollCalculator`] from a tariff document.

use std::path::Path;
use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{debug, info};
use validator::Validate;

use super::dto::{TariffDocument, TariffEntry};
use crate::application::services::TollCalculator;
use crate::domain::{
    DomainError, ExemptionSet, Excluding, Recurrence, Tariff, TariffSet, VehicleCategory,
};
use crate::infrastructure::recurrence::RuleSetRecurrence;
use crate::shared::errors::{AppResult, InfraError};

impl TariffDocument {
    /// Parse and validate a JSON tariff document.
    pub fn from_json(text: &str) -> Result<Self, InfraError> {
        let document: Self = serde_json::from_str(text)?;
        document.validate()?;
        Ok(document)
    }

    pub fn from_file(path: &Path) -> Result<Self, InfraError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn exemptions(&self) -> AppResult<ExemptionSet> {
        self.vehicle_type_free
            .iter()
            .map(|(key, &free)| -> AppResult<(VehicleCategory, bool)> {
                let category = key
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| DomainError::UnknownVehicleCategory(key.clone()))
                    .and_then(VehicleCategory::try_from)?;
                Ok((category, free))
            })
            .collect()
    }

    pub fn tariff_set(&self, zone: Tz) -> AppResult<TariffSet> {
        self.tariffs
            .iter()
            .enumerate()
            .map(|(index, entry)| self.build_tariff(index, entry, zone))
            .collect()
    }

    /// Turn the document into a ready-to-use calculator.
    pub fn into_calculator(self, zone: Tz) -> AppResult<TollCalculator> {
        let tariffs = self.tariff_set(zone)?;
        let exemptions = self.exemptions()?;

        let mut calculator = TollCalculator::new(tariffs, exemptions).in_zone(zone);
        if let Some(cap) = self.daily_cap {
            let cap = u32::try_from(cap).map_err(|_| {
                DomainError::InvalidTariff(format!("daily_cap {cap} is out of range"))
            })?;
            calculator = calculator.with_daily_cap(cap);
        }

        info!(
            tariffs = calculator.tariffs().len(),
            exemptions = calculator.exemptions().len(),
            toll_free_dates = self.toll_free_dates.len(),
            daily_cap = calculator.daily_cap(),
            zone = %zone,
            "Tariff configuration loaded"
        );

        Ok(calculator)
    }

    fn build_tariff(&self, index: usize, entry: &TariffEntry, zone: Tz) -> AppResult<Tariff> {
        let fee = u32::try_from(entry.fee).map_err(|_| {
            DomainError::InvalidTariff(format!("tariff {index}: fee {} is out of range", entry.fee))
        })?;

        let rules: Arc<dyn Recurrence> = Arc::new(RuleSetRecurrence::parse(&entry.rrule, zone)?);
        let occurrences: Arc<dyn Recurrence> = if self.toll_free_dates.is_empty() {
            rules
        } else {
            Arc::new(Excluding::new(rules, self.toll_free_dates.iter().copied()).in_zone(zone))
        };

        debug!(index, duration = entry.duration, fee, "Tariff parsed");

        Ok(Tariff::with_minutes(occurrences, entry.duration, fee)?)
    }
}

impl TollCalculator {
    /// Load tariffs and exemptions from a JSON document on disk.
    pub fn from_file(path: impl AsRef<Path>, zone: Tz) -> AppResult<Self> {
        let path = path.as_ref();
        let document = TariffDocument::from_file(path)?;
        debug!(path = %path.display(), "Tariff document read");
        document.into_calculator(zone)
    }
}

// ── Tests ──────────────────────────────────────────────────────
