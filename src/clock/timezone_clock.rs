//! Wall-clock projections of an [`Instant`] into a named timezone.

use chrono::{Datelike, Duration, NaiveDateTime, Offset, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::types::{CalendarDate, Instant};

pub fn calendar_date_of(instant: Instant, tz: Tz) -> CalendarDate {
    instant.with_timezone(&tz).date_naive().into()
}

pub fn hour_of(instant: Instant, tz: Tz) -> u32 {
    instant.with_timezone(&tz).hour()
}

pub fn minute_of(instant: Instant, tz: Tz) -> u32 {
    instant.with_timezone(&tz).minute()
}

/// 0 = Sunday .. 6 = Saturday, taken from the date in `tz`.
pub fn weekday_of(instant: Instant, tz: Tz) -> u32 {
    instant
        .with_timezone(&tz)
        .weekday()
        .num_days_from_sunday()
}

/// Minutes since local midnight, for comparing against whole-hour cutoffs.
pub(crate) fn minute_of_day(instant: Instant, tz: Tz) -> u32 {
    let local = instant.with_timezone(&tz);
    local.hour() * 60 + local.minute()
}

/// Longest run of nonexistent local time we step over, in hours.
const MAX_GAP_HOURS: u32 = 48;

/// Resolves a business-zone wall-clock time to an instant. A repeated time
/// (fall-back) resolves to its earlier occurrence; a time inside a
/// spring-forward gap moves forward an hour at a time until it exists.
pub(crate) fn instant_from_local(local: NaiveDateTime, tz: Tz) -> Instant {
    let mut candidate = local;

    for _ in 0..MAX_GAP_HOURS {
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return resolved.with_timezone(&Utc);
        }
        candidate += Duration::hours(1);
    }

    let offset = tz.offset_from_utc_datetime(&local).fix();
    Utc.from_utc_datetime(&(local - offset))
}
