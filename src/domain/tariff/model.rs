//! Tariff domain entity

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::recurrence::Recurrence;
use crate::shared::errors::DomainError;

/// A priced recurring time window.
///
/// Any passage inside `[start, start + duration)` of one of the recurrence's
/// occurrences is charged `fee`.
#[derive(Debug, Clone)]
pub struct Tariff {
    occurrences: Arc<dyn Recurrence>,
    duration: Duration,
    /// Flat fee in whole currency units
    fee: u32,
}

impl Tariff {
    pub fn new(
        occurrences: Arc<dyn Recurrence>,
        duration: Duration,
        fee: u32,
    ) -> Result<Self, DomainError> {
        if duration <= Duration::zero() {
            return Err(DomainError::InvalidTariff(format!(
                "duration must be positive, got {} minutes",
                duration.num_minutes()
            )));
        }
        Ok(Self {
            occurrences,
            duration,
            fee,
        })
    }

    /// Shorthand for a window measured in whole minutes.
    pub fn with_minutes(
        occurrences: Arc<dyn Recurrence>,
        minutes: i64,
        fee: u32,
    ) -> Result<Self, DomainError> {
        Self::new(occurrences, Duration::minutes(minutes), fee)
    }

    pub fn fee(&self) -> u32 {
        self.fee
    }

    /// Whether `instant` lies inside a window that starts within `[day_start, day_end)`.
    pub fn is_active_at(
        &self,
        instant: DateTime<Utc>,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> bool {
        self.occurrences
            .occurrences_between(day_start, day_end)
            .into_iter()
            .any(|start| start <= instant && instant < start + self.duration)
    }
}

/// Tariffs in priority order: the first active tariff decides the fee.
#[derive(Debug, Clone, Default)]
pub struct TariffSet {
    tariffs: Vec<Tariff>,
}

impl TariffSet {
    pub fn new(tariffs: Vec<Tariff>) -> Self {
        Self { tariffs }
    }

    /// First tariff, in priority order, active at `instant`.
    pub fn first_active(
        &self,
        instant: DateTime<Utc>,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Option<&Tariff> {
        self.tariffs
            .iter()
            .find(|t| t.is_active_at(instant, day_start, day_end))
    }

    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

impl FromIterator<Tariff> for TariffSet {
    fn from_iter<I: IntoIterator<Item = Tariff>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────
