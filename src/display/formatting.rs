use chrono_tz::Tz;
use tracing::warn;

use crate::config::business_time_config::parse_timezone;
use crate::error::ConfigurationError;
use crate::types::Instant;

/// `"Monday, Jan 19"` in the viewer's timezone.
pub fn format_for_display(instant: Instant, display_tz: Tz) -> String {
    instant.with_timezone(&display_tz).format("%A, %b %-d").to_string()
}

pub fn parse_display_timezone(name: &str) -> Result<Tz, ConfigurationError> {
    parse_timezone(name)
}

/// The host's IANA zone, or UTC when it can't be determined.
pub fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => parse_timezone(&name).unwrap_or_else(|error| {
            warn!(%error, "host timezone not in the IANA database; displaying in UTC");
            Tz::UTC
        }),
        Err(error) => {
            warn!(%error, "could not determine host timezone; displaying in UTC");
            Tz::UTC
        }
    }
}
