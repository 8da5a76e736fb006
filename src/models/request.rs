//! Emergency request parameters collected from the user

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported emergency categories
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmergencyType {
    EngineFailure,
    FireSmoke,
    FuelLeakage,
    MedicalEmergency,
    HydraulicFailure,
}

impl EmergencyType {
    /// Human-readable label used in prompts and rendered output
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyType::EngineFailure => "Engine Failure",
            EmergencyType::FireSmoke => "Fire/Smoke",
            EmergencyType::FuelLeakage => "Fuel Leakage",
            EmergencyType::MedicalEmergency => "Medical Emergency",
            EmergencyType::HydraulicFailure => "Hydraulic Failure",
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user-submitted emergency scenario
///
/// Request-scoped value object: created fresh per submission and dropped
/// after the briefing is rendered.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EmergencyRequest {
    /// Type of emergency
    pub emergency: EmergencyType,
    /// Selected airport id; must exist in the reference directory
    pub airport_id: String,
    /// Current altitude in feet
    pub altitude_ft: u32,
    /// Free-text description of current weather conditions
    pub weather_description: String,
}

impl EmergencyRequest {
    /// Create a request with the standard defaults (30000 ft, "Clear")
    #[must_use]
    pub fn new(emergency: EmergencyType, airport_id: impl Into<String>) -> Self {
        Self {
            emergency,
            airport_id: airport_id.into(),
            altitude_ft: 30000,
            weather_description: "Clear".to_string(),
        }
    }

    /// Set the current altitude
    #[must_use]
    pub fn with_altitude(mut self, altitude_ft: u32) -> Self {
        self.altitude_ft = altitude_ft;
        self
    }

    /// Set the free-text weather description
    #[must_use]
    pub fn with_weather(mut self, description: impl Into<String>) -> Self {
        self.weather_description = description.into();
        self
    }
}
