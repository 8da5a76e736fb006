//! `AeroAdvisor` - flight emergency decision support
//!
//! This library provides the advisory request pipeline: static airport
//! reference data, live weather enrichment, prompt composition, the
//! generative-service call, and partitioning of the returned text into
//! a two-option advisory.

pub mod advisory;
pub mod airports;
pub mod briefing;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod weather;

// Re-export core types for public API
pub use advisory::AdvisoryClient;
pub use airports::AirportDirectory;
pub use briefing::BriefingService;
pub use config::AeroAdvisorConfig;
pub use error::AeroAdvisorError;
pub use models::{
    AdvisoryBriefing, AdvisoryResult, AirportRecord, EmergencyRequest, EmergencyType,
    HistoricalIncident, WeatherSnapshot,
};
pub use prompt::PromptStyle;
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AeroAdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
