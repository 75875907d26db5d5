//! Recurrence definitions for tariff windows.
//!
//! A [`Recurrence`] answers one question: which occurrence starts fall inside
//! a half-open range `[start, end)`. The matcher only ever asks for a single
//! calendar day at a time.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

use crate::shared::time::local_date;

/// Source of occurrence starts for a tariff.
pub trait Recurrence: fmt::Debug + Send + Sync {
    /// Occurrence starts `s` with `start <= s < end`, in ascending order.
    fn occurrences_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>>;
}

// ── Weekly pattern ─────────────────────────────────────────────

/// Fixed local start time on a set of weekdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyPattern {
    weekdays: BTreeSet<u32>,
    start_time: NaiveTime,
    zone: Tz,
}

impl WeeklyPattern {
    pub fn new(weekdays: impl IntoIterator<Item = Weekday>, start_time: NaiveTime) -> Self {
        Self {
            weekdays: weekdays
                .into_iter()
                .map(|d| d.num_days_from_monday())
                .collect(),
            start_time,
            zone: Tz::UTC,
        }
    }

    /// Monday through Friday.
    pub fn weekdays(start_time: NaiveTime) -> Self {
        Self::new(
            [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
            start_time,
        )
    }

    /// Interpret `start_time` as wall-clock time in `zone`.
    pub fn in_zone(mut self, zone: Tz) -> Self {
        self.zone = zone;
        self
    }

    fn occurrence_on(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        if !self.weekdays.contains(&date.weekday().num_days_from_monday()) {
            return None;
        }
        // Local times inside a DST gap do not exist and produce no occurrence.
        self.zone
            .from_local_datetime(&date.and_time(self.start_time))
            .earliest()
            .map(|local| local.with_timezone(&Utc))
    }
}

impl Recurrence for WeeklyPattern {
    fn occurrences_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        if start >= end {
            return Vec::new();
        }
        let first = local_date(start, self.zone);
        let last = local_date(end, self.zone);

        first
            .iter_days()
            .take_while(|date| *date <= last)
            .filter_map(|date| self.occurrence_on(date))
            .filter(|s| *s >= start && *s < end)
            .collect()
    }
}

// ── Explicit dates ─────────────────────────────────────────────

/// An explicit, finite list of occurrence starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateList {
    starts: Vec<DateTime<Utc>>,
}

impl DateList {
    pub fn new(starts: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        let mut starts: Vec<_> = starts.into_iter().collect();
        starts.sort();
        starts.dedup();
        Self { starts }
    }
}

impl Recurrence for DateList {
    fn occurrences_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let from = self.starts.partition_point(|s| *s < start);
        let to = self.starts.partition_point(|s| *s < end);
        self.starts[from..to.max(from)].to_vec()
    }
}

// ── Exclusions ─────────────────────────────────────────────────

/// Wraps another recurrence and drops every occurrence on an excluded date.
///
/// Dates are compared in the configured zone, so a holiday removes all of
/// that calendar day's occurrences.
#[derive(Debug, Clone)]
pub struct Excluding {
    inner: Arc<dyn Recurrence>,
    dates: BTreeSet<NaiveDate>,
    zone: Tz,
}

impl Excluding {
    pub fn new(inner: Arc<dyn Recurrence>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            inner,
            dates: dates.into_iter().collect(),
            zone: Tz::UTC,
        }
    }

    pub fn in_zone(mut self, zone: Tz) -> Self {
        self.zone = zone;
        self
    }
}

impl Recurrence for Excluding {
    fn occurrences_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let mut occurrences = self.inner.occurrences_between(start, end);
        if !self.dates.is_empty() {
            occurrences.retain(|s| !self.dates.contains(&local_date(*s, self.zone)));
        }
        occurrences
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = at(y, m, d, 0, 0);
        (start, start + Duration::days(1))
    }

    fn six_am() -> NaiveTime {
        NaiveTime::from_hms_opt(6, 0, 0).unwrap()
    }

    #[test]
    fn weekly_pattern_on_matching_weekday() {
        // 1 October 2019 is a Tuesday.
        let pattern = WeeklyPattern::weekdays(six_am());
        let (start, end) = day(2019, 10, 1);
        assert_eq!(pattern.occurrences_between(start, end), vec![at(2019, 10, 1, 6, 0)]);
    }

    #[test]
    fn weekly_pattern_skips_other_weekdays() {
        // 5 October 2019 is a Saturday.
        let pattern = WeeklyPattern::weekdays(six_am());
        let (start, end) = day(2019, 10, 5);
        assert!(pattern.occurrences_between(start, end).is_empty());
    }

    #[test]
    fn weekly_pattern_range_is_half_open() {
        let pattern = WeeklyPattern::new([Weekday::Tue, Weekday::Wed], NaiveTime::MIN);
        let (start, end) = day(2019, 10, 1);
        // Wednesday's midnight is the exclusive end of Tuesday.
        assert_eq!(pattern.occurrences_between(start, end), vec![start]);
    }

    #[test]
    fn weekly_pattern_in_zone() {
        let pattern = WeeklyPattern::weekdays(six_am()).in_zone(chrono_tz::Europe::Stockholm);
        let (start, end) = day(2019, 10, 1);
        // 06:00 CEST is 04:00 UTC.
        assert_eq!(pattern.occurrences_between(start, end), vec![at(2019, 10, 1, 4, 0)]);
    }

    #[test]
    fn weekly_pattern_spanning_several_days() {
        let pattern = WeeklyPattern::weekdays(six_am());
        // Friday 4 Oct through Monday 7 Oct inclusive.
        let got = pattern.occurrences_between(at(2019, 10, 4, 0, 0), at(2019, 10, 8, 0, 0));
        assert_eq!(got, vec![at(2019, 10, 4, 6, 0), at(2019, 10, 7, 6, 0)]);
    }

    #[test]
    fn date_list_filters_range() {
        let list = DateList::new([
            at(2019, 10, 2, 9, 0),
            at(2019, 10, 1, 8, 0),
            at(2019, 10, 1, 0, 0),
            at(2019, 10, 1, 8, 0),
        ]);
        let (start, end) = day(2019, 10, 1);
        assert_eq!(
            list.occurrences_between(start, end),
            vec![at(2019, 10, 1, 0, 0), at(2019, 10, 1, 8, 0)]
        );
    }

    #[test]
    fn date_list_empty_range() {
        let list = DateList::new([at(2019, 10, 1, 8, 0)]);
        let (start, end) = day(2019, 10, 3);
        assert!(list.occurrences_between(start, end).is_empty());
    }

    #[test]
    fn excluding_removes_whole_day() {
        let base: Arc<dyn Recurrence> = Arc::new(DateList::new([
            at(2019, 5, 1, 6, 0),
            at(2019, 5, 1, 15, 0),
            at(2019, 5, 2, 6, 0),
        ]));
        let excluding = Excluding::new(base, [NaiveDate::from_ymd_opt(2019, 5, 1).unwrap()]);

        let (start, end) = day(2019, 5, 1);
        assert!(excluding.occurrences_between(start, end).is_empty());

        let (start, end) = day(2019, 5, 2);
        assert_eq!(excluding.occurrences_between(start, end), vec![at(2019, 5, 2, 6, 0)]);
    }
}
