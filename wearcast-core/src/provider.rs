use crate::{Config, model::HourlySample, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod openweather;

/// A forecast lookup for a single location.
#[derive(Debug, Clone)]
pub struct ForecastRequest {
    /// Address or location name, passed through to the provider.
    pub address: String,
}

/// Hourly forecast as consumed by the analyzer and the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub provider: String,
    pub location_name: String,
    /// Condition label of the most current forecast entry, e.g. "Rain".
    pub condition: String,
    /// Samples in the provider's chronological order. The analyzer's
    /// fallback path depends on that ordering.
    pub samples: Vec<HourlySample>,
}

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn hourly_forecast(&self, request: &ForecastRequest) -> anyhow::Result<HourlyForecast>;
}

/// Construct the forecast provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        let provider = provider_from_config(&cfg);
        assert!(provider.is_ok());
    }
}
