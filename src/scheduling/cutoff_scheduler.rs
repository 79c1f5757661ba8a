use tracing::debug;

use crate::calendar::BusinessCalendar;
use crate::clock::timezone_clock::minute_of_day;
use crate::config::BusinessTimeConfig;
use crate::scheduling::hour_setter::set_hour_or_best_guess;
use crate::types::Instant;

/// Resolves order-acceptance cutoffs in the business timezone.
#[derive(Clone, Copy)]
pub struct CutoffScheduler<'a> {
    calendar: BusinessCalendar<'a>,
}

impl<'a> CutoffScheduler<'a> {
    pub fn for_config(config: &'a BusinessTimeConfig) -> Self {
        Self {
            calendar: BusinessCalendar::for_config(config),
        }
    }

    pub fn calendar(&self) -> BusinessCalendar<'a> {
        self.calendar
    }

    /// True when `instant` is on a business day and strictly before that day's cutoff.
    pub fn is_before_cutoff(&self, instant: Instant) -> bool {
        let config = self.calendar.config();

        self.calendar.is_business_day(instant)
            && minute_of_day(instant, config.timezone()) < config.cutoff_hour() * 60
    }

    /// `target_hour` on `instant`'s business-zone date.
    pub fn set_hour_in_zone(&self, instant: Instant, target_hour: u32) -> Instant {
        set_hour_or_best_guess(instant, target_hour, self.calendar.config().timezone())
    }

    pub fn next_cutoff(&self, now: Instant) -> Instant {
        let cutoff_hour = self.calendar.config().cutoff_hour();

        if self.is_before_cutoff(now) {
            return self.set_hour_in_zone(now, cutoff_hour);
        }

        let next_day = self.calendar.next_business_day(now);
        debug!(date = %self.calendar.date_of(next_day), "cutoff rolls to next business day");

        self.set_hour_in_zone(next_day, cutoff_hour)
    }
}
