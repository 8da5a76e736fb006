//! Data models for the AeroAdvisor application
//!
//! This module contains the core domain models organized by concern:
//! - Airport: Reference records and historical incident data
//! - Request: Emergency parameters collected from the user
//! - Weather: Live weather snapshot for the selected city
//! - Advisory: Partitioned advisory text and the rendered briefing

pub mod advisory;
pub mod airport;
pub mod request;
pub mod weather;

// Re-export all public types for convenient access
pub use advisory::{AdvisoryBriefing, AdvisoryResult};
pub use airport::{AirportRecord, HistoricalIncident};
pub use request::{EmergencyRequest, EmergencyType};
pub use weather::WeatherSnapshot;
