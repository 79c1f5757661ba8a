//! Placing a wall-clock hour on a business-zone calendar day.
//!
//! The UTC offset of a given local hour depends on the date (daylight saving),
//! so the target instant is found by a bounded fixed-point search: start from a
//! guess built with the zone's offset for that date, project it back into the
//! zone and shift by the hour difference until both hour and date match.
//!
//! When the target hour does not exist on that date (the skipped hour of a
//! spring-forward transition) the search cannot converge. It then returns a
//! [`ConvergenceFailure`] carrying the last guess, which callers use as an
//! imprecise but deterministic answer.

use chrono::{Duration, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::warn;

use crate::clock::{calendar_date_of, hour_of};
use crate::error::ConvergenceFailure;
use crate::types::Instant;

pub const MAX_ATTEMPTS: u32 = 48;

/// The instant on `instant`'s business-zone date whose wall-clock hour is
/// `target_hour`, at minute zero.
pub fn set_hour_in_zone(
    instant: Instant,
    target_hour: u32,
    tz: Tz,
) -> Result<Instant, ConvergenceFailure> {
    let target_date = calendar_date_of(instant, tz);
    let mut guess = seed_guess(instant, target_hour, tz);

    for _ in 0..MAX_ATTEMPTS {
        let current_hour = hour_of(guess, tz);

        if current_hour == target_hour && calendar_date_of(guess, tz) == target_date {
            return Ok(guess);
        }

        // zero delta means right hour on the wrong date; step to keep moving
        let delta = i64::from(target_hour) - i64::from(current_hour);
        guess += Duration::hours(if delta == 0 { 1 } else { delta });
    }

    Err(ConvergenceFailure {
        timezone: tz.name(),
        date: target_date.as_naive(),
        target_hour,
        attempts: MAX_ATTEMPTS,
        best_guess: guess,
    })
}

/// [`set_hour_in_zone`], falling back to the best guess with a warning.
pub fn set_hour_or_best_guess(instant: Instant, target_hour: u32, tz: Tz) -> Instant {
    set_hour_in_zone(instant, target_hour, tz).unwrap_or_else(|failure| {
        warn!(
            error = %failure,
            best_guess = %failure.best_guess,
            "wall-clock hour search did not converge; using best guess"
        );
        failure.best_guess
    })
}

fn seed_guess(instant: Instant, target_hour: u32, tz: Tz) -> Instant {
    let date = calendar_date_of(instant, tz).as_naive();
    let Some(local) = date.and_hms_opt(target_hour, 0, 0) else {
        return instant;
    };

    // offset in effect around that wall time on that date
    let offset = tz.offset_from_utc_datetime(&local).fix();

    Utc.from_utc_datetime(&(local - offset))
}
