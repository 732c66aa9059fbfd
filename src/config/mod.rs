//! Configuration loading and management

mod io;
mod settings;

pub use settings::{StorageSettings, StreakSettings, WeatherSettings};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::stats::StreakEvaluator;
use crate::weather::{NoTemperature, TemperatureProvider, WeatherApiProvider};

/// Environment variable that overrides `weather.api_key`
pub const API_KEY_ENV: &str = "SMARTSIP_WEATHER_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub weather: WeatherSettings,

    #[serde(default)]
    pub streaks: StreakSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl Config {
    /// Directory for profile and logs
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::global_config_dir)
    }

    /// Effective API key, preferring the environment
    pub fn weather_api_key(&self) -> String {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| self.weather.api_key.clone())
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather.timeout_secs.max(1))
    }

    /// Build the temperature provider described by the weather settings
    pub fn temperature_provider(&self) -> Arc<dyn TemperatureProvider> {
        let api_key = self.weather_api_key();
        if !self.weather.enabled || api_key.trim().is_empty() {
            tracing::debug!("Weather lookup disabled");
            return Arc::new(NoTemperature);
        }

        Arc::new(WeatherApiProvider::new(
            api_key,
            self.weather.location.clone(),
            self.weather_timeout(),
        ))
    }

    pub fn streak_evaluator(&self) -> StreakEvaluator {
        StreakEvaluator::new(self.streaks.missing_day_policy)
    }
}
