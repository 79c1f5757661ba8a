use chrono::Duration;
use tracing::debug;

use crate::calendar::{
    day_context::DayContext,
    day_policy::DayPolicy,
    policies::{blackout_policy::BlackoutPolicy, weekend_policy::WeekendPolicy},
    types::ClosedReason,
};
use crate::clock::timezone_clock::{self, calendar_date_of, weekday_of};
use crate::config::BusinessTimeConfig;
use crate::types::{CalendarDate, Instant};

const DAY_POLICIES: &[&dyn DayPolicy] = &[&WeekendPolicy, &BlackoutPolicy];

/// Business-day rules for one config. All day arithmetic walks calendar days
/// in the config's timezone, never UTC days.
#[derive(Clone, Copy)]
pub struct BusinessCalendar<'a> {
    config: &'a BusinessTimeConfig,
}

impl<'a> BusinessCalendar<'a> {
    pub fn for_config(config: &'a BusinessTimeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a BusinessTimeConfig {
        self.config
    }

    pub fn date_of(&self, instant: Instant) -> CalendarDate {
        calendar_date_of(instant, self.config.timezone())
    }

    pub fn is_weekend(&self, instant: Instant) -> bool {
        WeekendPolicy::is_weekend(weekday_of(instant, self.config.timezone()))
    }

    pub fn is_blackout(&self, instant: Instant) -> bool {
        self.config.is_blackout_date(self.date_of(instant))
    }

    pub fn is_business_day(&self, instant: Instant) -> bool {
        self.closed_reason(instant).is_none()
    }

    pub fn is_business_date(&self, date: CalendarDate) -> bool {
        self.closed_reason_for_date(date).is_none()
    }

    /// Why `instant`'s business-zone day is closed, or `None` on a business day.
    pub fn closed_reason(&self, instant: Instant) -> Option<ClosedReason> {
        self.closed_reason_for_date(self.date_of(instant))
    }

    pub fn closed_reason_for_date(&self, date: CalendarDate) -> Option<ClosedReason> {
        let ctx = DayContext {
            date,
            config: self.config,
        };

        DAY_POLICIES.iter().find_map(|policy| policy.closes(&ctx))
    }

    /// Same wall-clock time `days` calendar days later in the business zone.
    pub fn add_calendar_days(&self, instant: Instant, days: i64) -> Instant {
        let tz = self.config.timezone();
        let local = instant.with_timezone(&tz).naive_local() + Duration::days(days);

        timezone_clock::instant_from_local(local, tz)
    }

    /// First business day strictly after `instant`'s day, keeping the wall-clock time.
    pub fn next_business_day(&self, instant: Instant) -> Instant {
        self.advance_until_open(self.add_calendar_days(instant, 1))
    }

    /// `instant` itself when its day is open, otherwise the next business day.
    pub fn ensure_business_day(&self, instant: Instant) -> Instant {
        self.advance_until_open(instant)
    }

    // Terminates: weekends span two days and the blackout set is finite.
    fn advance_until_open(&self, mut candidate: Instant) -> Instant {
        while let Some(reason) = self.closed_reason(candidate) {
            debug!(%reason, date = %self.date_of(candidate), "skipping closed day");
            candidate = self.add_calendar_days(candidate, 1);
        }

        candidate
    }
}
