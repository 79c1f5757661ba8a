//! Cutoff and delivery-date estimation in a fixed business timezone.
//!
//! All scheduling runs on wall-clock time in the configured business zone:
//! weekends and blackout dates are skipped, orders before the daily cutoff
//! start production immediately, production takes 24 hours, and shipping
//! delivers on the next business day. Only [`display`] re-projects results
//! into a customer's zone.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use dispatch_clock::{BusinessTimeConfig, compute_estimated_delivery};
//!
//! let config = BusinessTimeConfig::new("America/Kentucky/Louisville", 14, 9, &[]).unwrap();
//! let order = Utc.with_ymd_and_hms(2026, 1, 15, 15, 0, 0).unwrap();
//!
//! let delivery = compute_estimated_delivery(order, &config);
//! assert_eq!(delivery.date_naive().to_string(), "2026-01-19");
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod estimation;
pub mod scheduling;
pub mod types;

pub use calendar::{BusinessCalendar, ClosedReason};
pub use config::{BusinessTimeConfig, ConfigStore, RawBusinessTimeConfig};
pub use display::{format_countdown, format_for_display};
pub use error::{ConfigurationError, ConvergenceFailure};
pub use estimation::{DeliveryEstimate, DeliveryEstimator, DeliveryQuote, ProductionPath};
pub use scheduling::CutoffScheduler;
pub use types::{CalendarDate, Instant};

pub fn compute_next_cutoff(now: Instant, config: &BusinessTimeConfig) -> Instant {
    CutoffScheduler::for_config(config).next_cutoff(now)
}

pub fn compute_estimated_delivery(order: Instant, config: &BusinessTimeConfig) -> Instant {
    DeliveryEstimator::for_config(config).estimate_delivery(order)
}
