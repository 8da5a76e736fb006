//! Live weather snapshot for the selected city

use serde::{Deserialize, Serialize};

/// Current conditions at a resolved coordinate
///
/// Fetched fresh for every request and never cached. An unavailable
/// snapshot is represented as `None` at the call sites; the pipeline
/// degrades gracefully rather than failing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature_c: f32,
    /// Wind speed in km/h
    pub wind_speed_kmh: f32,
    /// Name of the city the geocoder resolved
    pub city_resolved: String,
}

impl WeatherSnapshot {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature_c)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} km/h", self.wind_speed_kmh)
    }
}
