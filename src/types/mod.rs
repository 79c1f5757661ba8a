pub mod calendar_date;

use chrono::{DateTime, Utc};

pub use calendar_date::CalendarDate;

/// An absolute point in time. Timezones are applied only when projecting.
pub type Instant = DateTime<Utc>;
