use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use dispatch_clock::clock::hour_of;
use dispatch_clock::{
    BusinessCalendar, BusinessTimeConfig, CutoffScheduler, DeliveryEstimator, Instant,
};

const RANGE_START_SECS: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z
const RANGE_DAYS: i64 = 3 * 365;

fn instant_strategy() -> impl Strategy<Value = Instant> {
    (0..RANGE_DAYS * 86_400).prop_map(|offset| {
        Utc.timestamp_opt(RANGE_START_SECS + offset, 0).unwrap()
    })
}

fn config_strategy() -> impl Strategy<Value = BusinessTimeConfig> {
    (
        0i64..=23,
        0i64..=23,
        prop::collection::vec(0..RANGE_DAYS + 30, 0..40),
    )
        .prop_map(|(cutoff_hour, start_hour, blackout_offsets)| {
            let first_day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
            let blackouts: Vec<String> = blackout_offsets
                .into_iter()
                .map(|offset| (first_day + Duration::days(offset)).to_string())
                .collect();
            let blackout_refs: Vec<&str> = blackouts.iter().map(String::as_str).collect();

            BusinessTimeConfig::new(
                "America/Kentucky/Louisville",
                cutoff_hour,
                start_hour,
                &blackout_refs,
            )
            .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn next_business_day_always_moves_forward(config in config_strategy(), instant in instant_strategy()) {
        let calendar = BusinessCalendar::for_config(&config);
        let next = calendar.next_business_day(instant);

        prop_assert!(calendar.date_of(next) > calendar.date_of(instant));
        prop_assert!(calendar.is_business_day(next));
    }

    #[test]
    fn ensure_business_day_never_moves_backwards(config in config_strategy(), instant in instant_strategy()) {
        let calendar = BusinessCalendar::for_config(&config);
        let open = calendar.ensure_business_day(instant);

        prop_assert!(calendar.date_of(open) >= calendar.date_of(instant));
        prop_assert!(calendar.is_business_day(open));
        if calendar.is_business_day(instant) {
            prop_assert_eq!(open, instant);
        }
    }

    #[test]
    fn weekends_are_never_business_days(config in config_strategy(), instant in instant_strategy()) {
        let calendar = BusinessCalendar::for_config(&config);
        let weekday = calendar.date_of(instant).weekday();

        if weekday == 0 || weekday == 6 {
            prop_assert!(!calendar.is_business_day(instant));
        }
    }

    #[test]
    fn cutoff_is_today_or_the_next_business_day(config in config_strategy(), now in instant_strategy()) {
        let scheduler = CutoffScheduler::for_config(&config);
        let calendar = scheduler.calendar();
        let cutoff = scheduler.next_cutoff(now);

        if scheduler.is_before_cutoff(now) {
            prop_assert_eq!(calendar.date_of(cutoff), calendar.date_of(now));
            prop_assert_eq!(hour_of(cutoff, config.timezone()), config.cutoff_hour());
        } else {
            let next = calendar.next_business_day(now);
            prop_assert_eq!(calendar.date_of(cutoff), calendar.date_of(next));
        }
        prop_assert!(calendar.is_business_day(cutoff));
    }

    #[test]
    fn delivery_lands_on_a_business_day(config in config_strategy(), order in instant_strategy()) {
        let calendar = BusinessCalendar::for_config(&config);
        let delivery = DeliveryEstimator::for_config(&config).estimate_delivery(order);

        prop_assert!(calendar.is_business_day(delivery));
        prop_assert!(delivery > order);
    }

    #[test]
    fn later_orders_never_deliver_earlier(
        config in config_strategy(),
        first in instant_strategy(),
        gap_minutes in 0i64..(10 * 24 * 60),
    ) {
        let calendar = BusinessCalendar::for_config(&config);
        let estimator = DeliveryEstimator::for_config(&config);
        let second = first + Duration::minutes(gap_minutes);

        let first_delivery = calendar.date_of(estimator.estimate_delivery(first));
        let second_delivery = calendar.date_of(estimator.estimate_delivery(second));

        prop_assert!(second_delivery >= first_delivery);
    }
}
