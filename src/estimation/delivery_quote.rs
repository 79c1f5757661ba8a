use chrono::Duration;
use serde::{Serialize, Serializer};

use crate::calendar::BusinessCalendar;
use crate::config::BusinessTimeConfig;
use crate::estimation::DeliveryEstimator;
use crate::scheduling::CutoffScheduler;
use crate::types::Instant;

/// What a storefront shows at `now`: order before `cutoff` to get it by `delivery`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryQuote {
    pub now: Instant,
    pub cutoff: Instant,
    pub delivery: Instant,
    #[serde(rename = "until_cutoff_secs", serialize_with = "serialize_seconds")]
    pub until_cutoff: Duration,
    /// Delivery is further out than [`DeliveryQuote::LONG_WINDOW_DAYS`] calendar days.
    pub long_window: bool,
}

impl DeliveryQuote {
    pub const LONG_WINDOW_DAYS: i64 = 7;

    pub fn at(now: Instant, config: &BusinessTimeConfig) -> Self {
        let calendar = BusinessCalendar::for_config(config);
        let cutoff = CutoffScheduler::for_config(config).next_cutoff(now);
        let delivery = DeliveryEstimator::for_config(config).estimate_delivery(now);

        let until_cutoff = (cutoff - now).max(Duration::zero());
        let long_window = delivery > calendar.add_calendar_days(now, Self::LONG_WINDOW_DAYS);

        Self {
            now,
            cutoff,
            delivery,
            until_cutoff,
            long_window,
        }
    }
}

fn serialize_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(duration.num_seconds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn quote_counts_down_to_todays_cutoff() {
        let config = BusinessTimeConfig::default();
        let quote = DeliveryQuote::at(utc(2026, 1, 15, 15, 30), &config);

        assert_eq!(quote.cutoff, utc(2026, 1, 15, 19, 0));
        assert_eq!(quote.until_cutoff, Duration::minutes(3 * 60 + 30));
        assert_eq!(quote.delivery, utc(2026, 1, 19, 15, 30));
        assert!(!quote.long_window);
    }

    #[test]
    fn holiday_week_is_a_long_window() {
        let config = BusinessTimeConfig::new(
            "America/Kentucky/Louisville",
            14,
            9,
            &["2026-12-24", "2026-12-25", "2026-12-28", "2026-12-29", "2026-12-30", "2026-12-31"],
        )
        .unwrap();

        // Wednesday 2026-12-23, after cutoff
        let quote = DeliveryQuote::at(utc(2026, 12, 23, 21, 0), &config);

        assert!(quote.long_window);
        assert_eq!(
            BusinessCalendar::for_config(&config).date_of(quote.delivery).to_string(),
            "2027-01-05"
        );
    }

    #[test]
    fn serializes_countdown_as_seconds() {
        let config = BusinessTimeConfig::default();
        let quote = DeliveryQuote::at(utc(2026, 1, 15, 18, 0), &config);

        let json = serde_json::to_value(quote).unwrap();

        assert_eq!(json["until_cutoff_secs"], 3600);
        assert_eq!(json["cutoff"], "2026-01-15T19:00:00Z");
        assert_eq!(json["long_window"], false);
    }
}
