use chrono::NaiveDate;
use thiserror::Error;

use crate::types::Instant;

/// Invalid business-time input. Raised once while building a config and never
/// recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("{field} must be an hour in 0..=23, got {value}")]
    InvalidHour { field: &'static str, value: i64 },

    #[error("unknown IANA timezone \"{0}\"")]
    UnknownTimezone(String),

    #[error("blackout date \"{value}\" is not a valid YYYY-MM-DD calendar date")]
    InvalidBlackoutDate { value: String },
}

/// The bounded wall-clock hour search gave up. `best_guess` is still usable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "no instant on {date} with wall-clock hour {target_hour} in {timezone} after {attempts} attempts"
)]
pub struct ConvergenceFailure {
    pub timezone: &'static str,
    pub date: NaiveDate,
    pub target_hour: u32,
    pub attempts: u32,
    pub best_guess: Instant,
}
