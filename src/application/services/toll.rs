//! Toll fee service: tariff matching and per-day aggregation

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::domain::{DomainError, DomainResult, ExemptionSet, TariffSet, VehicleCategory};
use crate::shared::time::{day_bounds, local_date};

/// Maximum total fee charged to one vehicle on one day.
pub const DAILY_CAP: u32 = 60;

/// Length of the aggregation window, measured from its first charged passage.
pub const CHARGE_WINDOW_MINUTES: i64 = 60;

/// Fee of the first tariff, in priority order, whose window contains `instant`.
///
/// Only occurrences starting on the reference-zone calendar day of `instant`
/// are considered. Returns 0 when no tariff is active.
pub fn match_fee(tariffs: &TariffSet, zone: Tz, instant: DateTime<Utc>) -> u32 {
    let (day_start, day_end) = day_bounds(instant, zone);
    tariffs
        .first_active(instant, day_start, day_end)
        .map(|tariff| tariff.fee())
        .unwrap_or(0)
}

/// Service for computing toll fees.
///
/// Holds the loaded tariffs and exemptions; every computation borrows them
/// read-only, so one instance can be shared between threads.
#[derive(Debug, Clone)]
pub struct TollCalculator {
    tariffs: TariffSet,
    exemptions: ExemptionSet,
    daily_cap: u32,
    zone: Tz,
}

impl TollCalculator {
    pub fn new(tariffs: TariffSet, exemptions: ExemptionSet) -> Self {
        Self {
            tariffs,
            exemptions,
            daily_cap: DAILY_CAP,
            zone: Tz::UTC,
        }
    }

    pub fn with_daily_cap(mut self, daily_cap: u32) -> Self {
        self.daily_cap = daily_cap;
        self
    }

    /// Reference zone in which calendar days are measured.
    pub fn in_zone(mut self, zone: Tz) -> Self {
        self.zone = zone;
        self
    }

    pub fn tariffs(&self) -> &TariffSet {
        &self.tariffs
    }

    pub fn exemptions(&self) -> &ExemptionSet {
        &self.exemptions
    }

    pub fn daily_cap(&self) -> u32 {
        self.daily_cap
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn match_fee(&self, instant: DateTime<Utc>) -> u32 {
        match_fee(&self.tariffs, self.zone, instant)
    }

    /// Total fee for a vehicle's passages on one day.
    ///
    /// Rejects passages that are not in chronological order or that fall on
    /// more than one calendar day. Exempt vehicles are never charged.
    pub fn compute_day_fee(
        &self,
        vehicle: VehicleCategory,
        passages: &[DateTime<Utc>],
    ) -> DomainResult<u32> {
        if self.exemptions.is_exempt(vehicle) {
            debug!(%vehicle, "Vehicle category is exempt");
            return Ok(0);
        }

        self.check_passages(passages)?;

        let total = self.day_fee(vehicle, passages);

        metrics::counter!("toll_day_fee_computations_total", "vehicle" => vehicle.as_str())
            .increment(1);
        metrics::histogram!("toll_day_fee").record(total as f64);

        debug!(
            %vehicle,
            passages = passages.len(),
            total,
            "Day fee computed"
        );

        Ok(total)
    }

    /// Aggregates passages without checking their order.
    ///
    /// Passages must be chronological and on a single day; within any
    /// 60-minute window only the highest fee is charged, and the sum is
    /// capped at the daily maximum.
    pub fn day_fee(&self, vehicle: VehicleCategory, passages: &[DateTime<Utc>]) -> u32 {
        if self.exemptions.is_exempt(vehicle) {
            return 0;
        }

        let window = Duration::minutes(CHARGE_WINDOW_MINUTES);
        let mut total: u32 = 0;
        let mut window_start: Option<DateTime<Utc>> = None;
        let mut window_max: u32 = 0;

        for &passage in passages {
            if total >= self.daily_cap {
                break;
            }

            let fee = self.match_fee(passage);
            trace!(%passage, fee, "Passage matched");
            if fee < 1 {
                continue;
            }

            match window_start {
                Some(start) if passage - start <= window => {
                    if fee > window_max {
                        total = total.saturating_add(fee - window_max);
                        window_max = fee;
                    }
                }
                _ => {
                    window_start = Some(passage);
                    window_max = fee;
                    total = total.saturating_add(fee);
                }
            }
        }

        total.min(self.daily_cap)
    }

    fn check_passages(&self, passages: &[DateTime<Utc>]) -> DomainResult<()> {
        if let Some(i) = passages.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(DomainError::PassagesOutOfOrder { index: i + 1 });
        }

        // Sorted, so comparing the ends covers every passage.
        if let (Some(&first), Some(&last)) = (passages.first(), passages.last()) {
            if local_date(first, self.zone) != local_date(last, self.zone) {
                return Err(DomainError::PassagesSpanMultipleDays { first, last });
            }
        }

        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
