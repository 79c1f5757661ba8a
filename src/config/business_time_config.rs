use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono_tz::Tz;

use crate::config::raw_config::RawBusinessTimeConfig;
use crate::error::ConfigurationError;
use crate::types::CalendarDate;

/// Validated, immutable business-time rules. Every engine call borrows one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessTimeConfig {
    timezone: Tz,
    cutoff_hour: u32,
    business_start_hour: u32,
    blackout_dates: BTreeSet<CalendarDate>,
}

impl BusinessTimeConfig {
    pub fn new(
        timezone: &str,
        cutoff_hour: i64,
        business_start_hour: i64,
        blackout_dates: &[&str],
    ) -> Result<Self, ConfigurationError> {
        Self::try_from(RawBusinessTimeConfig {
            timezone: timezone.to_string(),
            cutoff_hour,
            business_start_hour,
            blackout_dates: blackout_dates.iter().map(|date| date.to_string()).collect(),
        })
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let raw_config = serde_yaml::from_str::<RawBusinessTimeConfig>(raw)
            .context("failed to parse business time config")?;

        let config = Self::try_from(raw_config).context("business time config validation failed")?;

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read business time config {}", path.display()))?;

        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid business time config {}", path.display()))
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn cutoff_hour(&self) -> u32 {
        self.cutoff_hour
    }

    pub fn business_start_hour(&self) -> u32 {
        self.business_start_hour
    }

    pub fn blackout_dates(&self) -> &BTreeSet<CalendarDate> {
        &self.blackout_dates
    }

    pub fn is_blackout_date(&self, date: CalendarDate) -> bool {
        self.blackout_dates.contains(&date)
    }

    /// Copy of this config with a different blackout list, validated the same way.
    pub fn with_blackout_dates(&self, blackout_dates: &[&str]) -> Result<Self, ConfigurationError> {
        Ok(Self {
            blackout_dates: parse_blackout_dates(blackout_dates.iter().copied())?,
            ..self.clone()
        })
    }
}

impl Default for BusinessTimeConfig {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Kentucky::Louisville,
            cutoff_hour: RawBusinessTimeConfig::DEFAULT_CUTOFF_HOUR as u32,
            business_start_hour: RawBusinessTimeConfig::DEFAULT_BUSINESS_START_HOUR as u32,
            blackout_dates: BTreeSet::new(),
        }
    }
}

impl TryFrom<RawBusinessTimeConfig> for BusinessTimeConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawBusinessTimeConfig) -> Result<Self, Self::Error> {
        let timezone = parse_timezone(&raw.timezone)?;
        let cutoff_hour = validate_hour("cutoff_hour", raw.cutoff_hour)?;
        let business_start_hour = validate_hour("business_start_hour", raw.business_start_hour)?;
        let blackout_dates = parse_blackout_dates(raw.blackout_dates.iter().map(String::as_str))?;

        Ok(Self {
            timezone,
            cutoff_hour,
            business_start_hour,
            blackout_dates,
        })
    }
}

impl From<&BusinessTimeConfig> for RawBusinessTimeConfig {
    fn from(config: &BusinessTimeConfig) -> Self {
        Self {
            timezone: config.timezone.name().to_string(),
            cutoff_hour: config.cutoff_hour.into(),
            business_start_hour: config.business_start_hour.into(),
            blackout_dates: config.blackout_dates.iter().map(ToString::to_string).collect(),
        }
    }
}

pub(crate) fn parse_timezone(name: &str) -> Result<Tz, ConfigurationError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigurationError::UnknownTimezone(name.to_string()))
}

fn validate_hour(field: &'static str, value: i64) -> Result<u32, ConfigurationError> {
    match u32::try_from(value) {
        Ok(hour) if hour <= 23 => Ok(hour),
        _ => Err(ConfigurationError::InvalidHour { field, value }),
    }
}

fn parse_blackout_dates<'a>(
    raw: impl Iterator<Item = &'a str>,
) -> Result<BTreeSet<CalendarDate>, ConfigurationError> {
    raw.map(str::parse::<CalendarDate>).collect()
}
