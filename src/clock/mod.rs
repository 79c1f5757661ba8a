pub mod timezone_clock;

pub use timezone_clock::{calendar_date_of, hour_of, minute_of, weekday_of};
