//! Customer-facing rendering. Scheduling never happens here; finished
//! instants are only re-projected into the viewer's zone.

pub mod countdown;
pub mod formatting;

pub use countdown::format_countdown;
pub use formatting::{format_for_display, parse_display_timezone, system_timezone};
