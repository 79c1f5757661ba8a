use serde::{Deserialize, Serialize};

/// Unvalidated config input as it appears in `delivery.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBusinessTimeConfig {
    /// IANA zone all cutoff and production rules are evaluated in.
    #[serde(default = "RawBusinessTimeConfig::default_timezone")]
    pub timezone: String,

    /// Wall-clock hour (business zone) after which same-day production stops, 0–23
    #[serde(default = "RawBusinessTimeConfig::default_cutoff_hour")]
    pub cutoff_hour: i64,

    /// Wall-clock hour (business zone) at which production starts, 0–23
    #[serde(default = "RawBusinessTimeConfig::default_business_start_hour")]
    pub business_start_hour: i64,

    /// Holidays in YYYY-MM-DD
    #[serde(default)]
    pub blackout_dates: Vec<String>,
}

impl RawBusinessTimeConfig {
    pub const DEFAULT_TIMEZONE: &'static str = "America/Kentucky/Louisville";
    pub const DEFAULT_CUTOFF_HOUR: i64 = 14;
    pub const DEFAULT_BUSINESS_START_HOUR: i64 = 9;

    fn default_timezone() -> String {
        Self::DEFAULT_TIMEZONE.to_string()
    }

    fn default_cutoff_hour() -> i64 {
        Self::DEFAULT_CUTOFF_HOUR
    }

    fn default_business_start_hour() -> i64 {
        Self::DEFAULT_BUSINESS_START_HOUR
    }
}

impl Default for RawBusinessTimeConfig {
    fn default() -> Self {
        Self {
            timezone: Self::default_timezone(),
            cutoff_hour: Self::DEFAULT_CUTOFF_HOUR,
            business_start_hour: Self::DEFAULT_BUSINESS_START_HOUR,
            blackout_dates: Vec::new(),
        }
    }
}
