//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::stats::MissingDayPolicy;

/// Weather lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    /// Look up the temperature at all
    #[serde(default = "default_weather_enabled")]
    pub enabled: bool,

    /// weatherapi.com key. Leave empty to skip the heat bonus.
    /// The SMARTSIP_WEATHER_API_KEY environment variable takes precedence.
    #[serde(default)]
    pub api_key: String,

    /// Location query, e.g. "Lisbon,PT"
    #[serde(default = "default_location")]
    pub location: String,

    /// Give up on the lookup after this many seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_weather_enabled() -> bool {
    true
}

fn default_location() -> String {
    "Lisbon,PT".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            enabled: default_weather_enabled(),
            api_key: String::new(),
            location: default_location(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Streak evaluation settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StreakSettings {
    /// "strict": a day without any logged drink breaks the streak.
    /// "lenient": such days are skipped.
    #[serde(default)]
    pub missing_day_policy: MissingDayPolicy,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageSettings {
    /// Directory holding profile, intake log and history.
    /// Defaults to ~/.smartsip when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
