use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::HourlySample;
use crate::provider::{ForecastProvider, ForecastRequest, HourlyForecast};

/// OpenWeather 5-day/3-hour forecast (free tier).
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn fetch_forecast(&self, address: &str) -> Result<HourlyForecast> {
        let url = "https://api.openweathermap.org/data/2.5/forecast";

        let res = self
            .http
            .get(url)
            .query(&[
                ("q", address),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (5-day forecast)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather forecast response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        parse_forecast(&body)
    }
}

/// Map the raw forecast JSON to [`HourlyForecast`]. Split out of the HTTP
/// call so the mapping is testable offline.
fn parse_forecast(body: &str) -> Result<HourlyForecast> {
    let parsed: OwForecastResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather forecast JSON")?;

    if parsed.list.is_empty() {
        return Err(anyhow!("OpenWeather forecast response contained no data"));
    }

    // The first entry is the most current; its label (e.g. "Rain") drives
    // the engine's weather adjustments.
    let condition = parsed
        .list
        .first()
        .and_then(|e| e.weather.first())
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let samples = parsed
        .list
        .iter()
        .filter_map(|entry| {
            DateTime::<Utc>::from_timestamp(entry.dt, 0).map(|timestamp_utc| HourlySample {
                timestamp_utc,
                temperature_c: entry.main.temp,
            })
        })
        .collect();

    let location_name = format!("{}, {}", parsed.city.name, parsed.city.country);

    Ok(HourlyForecast {
        provider: "openweather".to_string(),
        location_name,
        condition,
        samples,
    })
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn hourly_forecast(&self, request: &ForecastRequest) -> Result<HourlyForecast> {
        self.fetch_forecast(&request.address).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
