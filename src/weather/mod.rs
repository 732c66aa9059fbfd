//! Ambient temperature lookup
//!
//! The goal calculation only needs "is it hot today". Any failure to find out
//! becomes [`TemperatureReading::Unavailable`] so the goal falls back to no
//! heat bonus.

mod weatherapi;

pub use weatherapi::{parse_current_temp_c, WeatherApiProvider, WEATHER_API_URL};

use std::sync::Arc;
use std::time::Duration;

/// Why a temperature could not be obtained
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather lookup is disabled or has no API key")]
    Disabled,

    #[error("Weather request failed: {0}")]
    Request(String),

    #[error("Weather service returned status {0}")]
    Status(u16),

    #[error("Malformed weather response: {0}")]
    Parse(String),

    #[error("Weather lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Source of the current outdoor temperature in °C
pub trait TemperatureProvider: Send + Sync {
    fn current_temperature(&self) -> Result<f64, WeatherError>;
}

/// Provider that always returns the same value; used for `--temp` overrides
#[derive(Debug, Clone, Copy)]
pub struct FixedTemperature(pub f64);

impl TemperatureProvider for FixedTemperature {
    fn current_temperature(&self) -> Result<f64, WeatherError> {
        Ok(self.0)
    }
}

/// Provider used when lookups are switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTemperature;

impl TemperatureProvider for NoTemperature {
    fn current_temperature(&self) -> Result<f64, WeatherError> {
        Err(WeatherError::Disabled)
    }
}

/// Result of a lookup, with failures folded into `Unavailable`
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureReading {
    Known(f64),
    Unavailable { reason: String },
}

impl TemperatureReading {
    pub fn celsius(&self) -> Option<f64> {
        match self {
            Self::Known(t) => Some(*t),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    fn from_result(result: Result<f64, WeatherError>) -> Self {
        match result {
            Ok(t) if t.is_finite() => Self::Known(t),
            Ok(t) => {
                tracing::warn!("Ignoring non-finite temperature {}", t);
                Self::Unavailable {
                    reason: format!("non-finite temperature {}", t),
                }
            }
            Err(e) => {
                tracing::warn!("Temperature data unavailable: {}", e);
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Ask `provider` for the temperature, never failing
pub fn read_temperature(provider: &dyn TemperatureProvider) -> TemperatureReading {
    TemperatureReading::from_result(provider.current_temperature())
}

/// Like [`read_temperature`], but runs the blocking lookup off the runtime
/// and gives up after `timeout`
pub async fn fetch_temperature(
    provider: Arc<dyn TemperatureProvider>,
    timeout: Duration,
) -> TemperatureReading {
    let lookup = tokio::task::spawn_blocking(move || provider.current_temperature());

    let result = match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(WeatherError::Request(format!(
            "lookup task failed: {}",
            join_err
        ))),
        Err(_) => Err(WeatherError::Timeout(timeout)),
    };

    TemperatureReading::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowProvider;

    impl TemperatureProvider for SlowProvider {
        fn current_temperature(&self) -> Result<f64, WeatherError> {
            std::thread::sleep(Duration::from_millis(500));
            Ok(30.0)
        }
    }

    #[test]
    fn test_read_known_and_unavailable() {
        assert_eq!(
            read_temperature(&FixedTemperature(28.5)),
            TemperatureReading::Known(28.5)
        );

        let reading = read_temperature(&NoTemperature);
        assert!(!reading.is_known());
        assert_eq!(reading.celsius(), None);
    }

    #[test]
    fn test_non_finite_is_unavailable() {
        assert!(!read_temperature(&FixedTemperature(f64::NAN)).is_known());
    }

    #[tokio::test]
    async fn test_fetch_times_out() {
        let reading = fetch_temperature(Arc::new(SlowProvider), Duration::from_millis(20)).await;
        assert!(matches!(reading, TemperatureReading::Unavailable { .. }));
    }

    #[tokio::test]
    async fn test_fetch_returns_value() {
        let reading =
            fetch_temperature(Arc::new(FixedTemperature(19.0)), Duration::from_secs(2)).await;
        assert_eq!(reading.celsius(), Some(19.0));
    }
}
