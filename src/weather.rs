//! Live weather lookup via the Open-Meteo geocoding and forecast APIs
//!
//! Weather is enrichment, not a prerequisite: every failure mode here
//! (no geocoding match, network error, timeout, malformed body) resolves
//! to an unavailable snapshot and the pipeline continues without it.

use crate::config::WeatherConfig;
use crate::models::WeatherSnapshot;
use anyhow::{Context, Result, anyhow};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the geocoding and current-weather endpoints
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
    geocoding_base_url: String,
}

impl WeatherClient {
    /// Create a new weather client with a bounded request timeout
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("AeroAdvisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            geocoding_base_url: config.geocoding_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current conditions for a city name
    ///
    /// Returns `None` when the city cannot be resolved or either call
    /// fails; unavailability is a terminal state, not an error.
    pub async fn observe(&self, city: &str) -> Option<WeatherSnapshot> {
        match self.try_observe(city).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Weather lookup failed for {city}: {e:#}");
                None
            }
        }
    }

    async fn try_observe(&self, city: &str) -> Result<Option<WeatherSnapshot>> {
        let matches = self.geocode(city).await?;
        let Some(place) = matches.into_iter().next() else {
            debug!("No geocoding results for {city}");
            return Ok(None);
        };

        debug!(
            "Resolved {city} to {} at ({:.4}, {:.4})",
            place.name, place.latitude, place.longitude
        );

        let current = self.current_weather(place.latitude, place.longitude).await?;

        Ok(Some(WeatherSnapshot {
            temperature_c: current.temperature,
            wind_speed_kmh: current.windspeed,
            city_resolved: place.name,
        }))
    }

    /// Resolve a city name to coordinates; first match wins
    async fn geocode(&self, name: &str) -> Result<Vec<open_meteo::GeocodingResult>> {
        let url = format!(
            "{}/v1/search?name={}&count=1&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(name)
        );

        let response: open_meteo::GeocodingResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| "Failed to parse geocoding response")?;

        Ok(response.results.unwrap_or_default())
    }

    /// Fetch current weather for a coordinate
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<open_meteo::CurrentWeather> {
        let url = format!(
            "{}/v1/forecast?latitude={lat}&longitude={lon}&current_weather=true&windspeed_unit=kmh",
            self.base_url
        );

        let response: open_meteo::ForecastResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .with_context(|| "Failed to parse forecast response")?;

        response
            .current_weather
            .ok_or_else(|| anyhow!("Forecast response missing current_weather"))
    }
}

/// `OpenMeteo` API response structures
mod open_meteo {
    use serde::Deserialize;

    /// Geocoding response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
    }

    /// Forecast response carrying current conditions
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub current_weather: Option<CurrentWeather>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentWeather {
        pub temperature: f32,
        pub windspeed: f32,
    }
}
