//! Configuration management for the `AeroAdvisor` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AeroAdvisorError;
use crate::prompt::PromptStyle;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `AeroAdvisor` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AeroAdvisorConfig {
    /// Advisory (generative) service configuration
    #[serde(default)]
    pub advisory: AdvisoryConfig,
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default request settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Advisory service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// API key for the generative service (required)
    pub api_key: Option<String>,
    /// Base URL for the generative service
    #[serde(default = "default_advisory_base_url")]
    pub base_url: String,
    /// Model identifier used for completions
    #[serde(default = "default_advisory_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_advisory_timeout")]
    pub timeout_seconds: u32,
    /// Prompt style: "styled" (persona framing) or "blunt" (no persona)
    #[serde(default = "default_prompt_style")]
    pub prompt_style: String,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the weather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Altitude in feet used when the request omits one
    #[serde(default = "default_altitude_ft")]
    pub altitude_ft: u32,
    /// Free-text weather description used when the request omits one
    #[serde(default = "default_weather_description")]
    pub weather_description: String,
}

// Default value functions
fn default_advisory_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_advisory_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_advisory_timeout() -> u32 {
    60
}

fn default_prompt_style() -> String {
    "styled".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

fn default_weather_timeout() -> u32 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_altitude_ft() -> u32 {
    30000
}

fn default_weather_description() -> String {
    "Clear".to_string()
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_advisory_base_url(),
            model: default_advisory_model(),
            timeout_seconds: default_advisory_timeout(),
            prompt_style: default_prompt_style(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            altitude_ft: default_altitude_ft(),
            weather_description: default_weather_description(),
        }
    }
}

impl Default for AeroAdvisorConfig {
    fn default() -> Self {
        Self {
            advisory: AdvisoryConfig::default(),
            weather: WeatherConfig::default(),
            logging: LoggingConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

impl AeroAdvisorConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with AEROADVISOR_ prefix
        builder = builder.add_source(
            Environment::with_prefix("AEROADVISOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: AeroAdvisorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("aeroadvisor").join("config.toml"))
    }

    /// Resolve the configured prompt style
    ///
    /// Falls back to the styled variant when the value is unparseable,
    /// which `validate()` rules out for loaded configurations.
    #[must_use]
    pub fn prompt_style(&self) -> PromptStyle {
        PromptStyle::parse(&self.advisory.prompt_style).unwrap_or(PromptStyle::Styled)
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the advisory service credential
    ///
    /// The key is required: the application halts at startup rather than
    /// accepting requests it cannot serve.
    pub fn validate_api_key(&self) -> Result<()> {
        match &self.advisory.api_key {
            None => Err(AeroAdvisorError::config(
                "Advisory API key is missing. Set AEROADVISOR_ADVISORY__API_KEY or add 'api_key' to the [advisory] section of config.toml."
            ).into()),
            Some(api_key) if api_key.is_empty() => Err(AeroAdvisorError::config(
                "Advisory API key cannot be empty. Please provide a valid key."
            ).into()),
            Some(api_key) if api_key.len() < 8 => Err(AeroAdvisorError::config(
                "Advisory API key appears to be invalid (too short). Please check your API key."
            ).into()),
            Some(api_key) if api_key.len() > 200 => Err(AeroAdvisorError::config(
                "Advisory API key appears to be invalid (too long). Please check your API key."
            ).into()),
            Some(_) => Ok(()),
        }
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.advisory.timeout_seconds == 0 || self.advisory.timeout_seconds > 300 {
            return Err(AeroAdvisorError::config(
                "Advisory timeout must be between 1 and 300 seconds"
            ).into());
        }

        if self.weather.timeout_seconds == 0 || self.weather.timeout_seconds > 60 {
            return Err(AeroAdvisorError::config(
                "Weather API timeout must be between 1 and 60 seconds"
            ).into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AeroAdvisorError::config(
                format!("Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    valid_log_levels.join(", ")
                )
            ).into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AeroAdvisorError::config(
                format!("Invalid log format '{}'. Must be one of: {}",
                    self.logging.format,
                    valid_log_formats.join(", ")
                )
            ).into());
        }

        if PromptStyle::parse(&self.advisory.prompt_style).is_none() {
            return Err(AeroAdvisorError::config(
                format!(
                    "Invalid prompt style '{}'. Must be 'styled' or 'blunt'",
                    self.advisory.prompt_style
                )
            ).into());
        }

        if self.advisory.model.is_empty() {
            return Err(AeroAdvisorError::config("Advisory model cannot be empty").into());
        }

        for (name, url) in [
            ("Advisory", &self.advisory.base_url),
            ("Weather", &self.weather.base_url),
            ("Geocoding", &self.weather.geocoding_base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AeroAdvisorError::config(
                    format!("{name} base URL must be a valid HTTP or HTTPS URL")
                ).into());
            }
        }

        Ok(())
    }
}
