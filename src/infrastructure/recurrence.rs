//! RRULE-backed recurrence
//!
//! Adapts an iCalendar rule set (DTSTART, RRULE, RDATE, EXRULE and EXDATE
//! lines) parsed by the `rrule` crate to the domain [`Recurrence`] trait.
//!
//! Floating DTSTART, RDATE and EXDATE values (no `Z` suffix and no `TZID`)
//! are read as wall-clock time in the reference zone, never the host's zone.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use rrule::RRuleSet;
use tracing::warn;

use crate::domain::Recurrence;
use crate::shared::errors::InfraError;

/// Upper bound on occurrences returned for a single query.
const MAX_OCCURRENCES: u16 = 1_000;

/// Date-time properties that may carry a floating value.
const ZONED_PROPERTIES: [&str; 3] = ["DTSTART", "RDATE", "EXDATE"];

#[derive(Debug, Clone)]
pub struct RuleSetRecurrence {
    rules: RRuleSet,
}

impl RuleSetRecurrence {
    pub fn new(rules: RRuleSet) -> Self {
        Self { rules }
    }

    /// Parse rule set text, anchoring floating times in `zone`.
    pub fn parse(text: &str, zone: Tz) -> Result<Self, InfraError> {
        let rules = RRuleSet::from_str(&anchor_floating_times(text, zone))?;
        Ok(Self::new(rules))
    }
}

/// Rewrites `DTSTART:20190101T060000` as `DTSTART;TZID=<zone>:20190101T060000`.
///
/// Lines that already carry parameters or a UTC value are left alone.
fn anchor_floating_times(text: &str, zone: Tz) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .map(|line| match line.split_once(':') {
            Some((name, value))
                if ZONED_PROPERTIES.contains(&name)
                    && !value.split(',').any(|v| v.trim().ends_with('Z')) =>
            {
                format!("{name};TZID={}:{value}", zone.name())
            }
            _ => line.to_owned(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl FromStr for RuleSetRecurrence {
    type Err = InfraError;

    /// Floating times are read as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Tz::UTC)
    }
}

impl Recurrence for RuleSetRecurrence {
    fn occurrences_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        if start >= end {
            return Vec::new();
        }

        let result = self
            .rules
            .clone()
            .after((start - Duration::seconds(1)).with_timezone(&rrule::Tz::UTC))
            .before(end.with_timezone(&rrule::Tz::UTC))
            .all(MAX_OCCURRENCES);

        if result.limited {
            warn!(
                %start,
                %end,
                limit = MAX_OCCURRENCES,
                "Recurrence produced more occurrences than the query limit"
            );
        }

        // Widened query; trim back to the half-open range.
        result
            .dates
            .into_iter()
            .map(|dt| dt.with_timezone(&Utc))
            .filter(|s| *s >= start && *s < end)
            .collect()
    }
}

// ── Tests ──────────────────────────────────────────────────────
