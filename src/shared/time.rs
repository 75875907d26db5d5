//! Calendar helpers for the reference time zone.
//!
//! Tolls are charged per calendar day, and a "day" is always measured in a
//! single fixed zone (UTC unless configured otherwise).

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Calendar date of `instant` in the reference zone.
pub fn local_date(instant: DateTime<Utc>, zone: Tz) -> NaiveDate {
    instant.with_timezone(&zone).date_naive()
}

/// First instant of `date` in the reference zone.
///
/// When midnight falls into a DST gap the wall clock is read as UTC instead,
/// which only shifts the boundary by the size of the gap.
pub fn start_of_day(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&midnight).earliest() {
        Some(local) => local.with_timezone(&Utc),
        None => Utc.from_utc_datetime(&midnight),
    }
}

/// Half-open `[start, end)` bounds of the calendar day containing `instant`.
pub fn day_bounds(instant: DateTime<Utc>, zone: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let date = local_date(instant, zone);
    let start = start_of_day(date, zone);
    let end = date
        .succ_opt()
        .map(|next| start_of_day(next, zone))
        .unwrap_or_else(|| start + Duration::days(1));
    (start, end)
}
