pub mod business_calendar;
pub mod day_context;
pub mod day_policy;
pub mod policies;
pub mod types;

pub use business_calendar::BusinessCalendar;
pub use types::ClosedReason;
