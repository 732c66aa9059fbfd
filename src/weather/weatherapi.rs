//! weatherapi.com client

use std::time::Duration;

use super::{TemperatureProvider, WeatherError};

/// Current-conditions endpoint
pub const WEATHER_API_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// Looks up `current.temp_c` for a fixed location
#[derive(Clone)]
pub struct WeatherApiProvider {
    base_url: String,
    api_key: String,
    location: String,
    client: ureq::Agent,
}

impl WeatherApiProvider {
    pub fn new(api_key: impl Into<String>, location: impl Into<String>, timeout: Duration) -> Self {
        Self::with_url(WEATHER_API_URL, api_key, location, timeout)
    }

    /// Create a provider against a custom endpoint
    pub fn with_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        location: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();

        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            location: location.into(),
            client,
        }
    }
}

impl TemperatureProvider for WeatherApiProvider {
    fn current_temperature(&self) -> Result<f64, WeatherError> {
        if self.api_key.trim().is_empty() {
            return Err(WeatherError::Disabled);
        }

        tracing::debug!("Fetching current temperature for {}", self.location);

        let response = match self
            .client
            .get(&self.base_url)
            .query("key", &self.api_key)
            .query("q", &self.location)
            .query("aqi", "no")
            .call()
        {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => return Err(WeatherError::Status(code)),
            Err(e) => return Err(WeatherError::Request(e.to_string())),
        };

        let body = response
            .into_string()
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        parse_current_temp_c(&body)
    }
}

/// Extract `current.temp_c` from a weatherapi.com response body
pub fn parse_current_temp_c(body: &str) -> Result<f64, WeatherError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;

    json.get("current")
        .and_then(|c| c.get("temp_c"))
        .and_then(|t| t.as_f64())
        .ok_or_else(|| WeatherError::Parse("missing current.temp_c".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_temp() {
        let body = r#"{"location":{"name":"Lisbon"},"current":{"temp_c":27.3,"temp_f":81.1}}"#;
        assert_eq!(parse_current_temp_c(body).unwrap(), 27.3);
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(matches!(
            parse_current_temp_c(r#"{"current":{}}"#),
            Err(WeatherError::Parse(_))
        ));
        assert!(matches!(
            parse_current_temp_c("<html>"),
            Err(WeatherError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_key_is_disabled() {
        let provider = WeatherApiProvider::new("", "Lisbon,PT", Duration::from_secs(1));
        assert!(matches!(
            provider.current_temperature(),
            Err(WeatherError::Disabled)
        ));
    }

    #[test]
    fn test_unreachable_host_is_request_error() {
        let provider = WeatherApiProvider::with_url(
            "http://127.0.0.1:9/v1/current.json",
            "key",
            "Lisbon,PT",
            Duration::from_millis(200),
        );
        assert!(matches!(
            provider.current_temperature(),
            Err(WeatherError::Request(_))
        ));
    }
}
