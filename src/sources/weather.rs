//! National Weather Service forecast for the footer line.

use reqwest::blocking::Client;
use serde::Deserialize;

use super::WeatherSource;
use crate::config::WeatherConfig;
use crate::error::RemoteError;

/// Footer text when no forecast could be fetched.
pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable";

const POINTS: &str = "points";
const FORECAST: &str = "forecast";

#[derive(Debug, Deserialize)]
struct Points {
    properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: String,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
struct ForecastProperties {
    periods: Vec<Period>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Period {
    short_forecast: String,
    temperature: serde_json::Number,
    temperature_unit: String,
}

fn forecast_url(body: &str) -> Result<String, RemoteError> {
    let points: Points = serde_json::from_str(body).map_err(|e| RemoteError::Payload {
        endpoint: POINTS,
        reason: e.to_string(),
    })?;
    Ok(points.properties.forecast)
}

/// `"{shortForecast}, {temperature}°{temperatureUnit}"` of the first period.
fn summarize(body: &str) -> Result<String, RemoteError> {
    let forecast: Forecast = serde_json::from_str(body).map_err(|e| RemoteError::Payload {
        endpoint: FORECAST,
        reason: e.to_string(),
    })?;
    let period = forecast
        .properties
        .periods
        .into_iter()
        .next()
        .ok_or_else(|| RemoteError::Payload {
            endpoint: FORECAST,
            reason: "no forecast periods".to_owned(),
        })?;
    Ok(format!(
        "{}, {}°{}",
        period.short_forecast, period.temperature, period.temperature_unit
    ))
}

pub struct NwsWeather {
    client: Client,
    api_base: String,
    latitude: f64,
    longitude: f64,
}

impl NwsWeather {
    pub fn new(
        client: Client,
        config: &WeatherConfig,
    ) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_owned(),
            latitude: config.latitude,
            longitude: config.longitude,
        }
    }

    fn get(
        &self,
        endpoint: &'static str,
        url: &str,
    ) -> Result<String, RemoteError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/geo+json")
            .send()
            .map_err(|source| RemoteError::Http { endpoint, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status { endpoint, status });
        }
        response.text().map_err(|source| RemoteError::Http { endpoint, source })
    }

    fn fetch(&self) -> Result<String, RemoteError> {
        let points_url = format!("{}/points/{:.4},{:.4}", self.api_base, self.latitude, self.longitude);
        let forecast = forecast_url(&self.get(POINTS, &points_url)?)?;
        summarize(&self.get(FORECAST, &forecast)?)
    }
}

impl WeatherSource for NwsWeather {
    fn current_summary(&self) -> String {
        match self.fetch() {
            Ok(summary) => summary,
            Err(e) => {
                tracing::warn!(error = %e, "weather unavailable");
                WEATHER_UNAVAILABLE.to_owned()
            }
        }
    }
}
