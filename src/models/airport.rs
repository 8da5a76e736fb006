//! Airport reference records and historical incident data

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static attributes of a diversion airport
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AirportRecord {
    /// Directory identifier, e.g. "Karachi (OPKC)"
    pub id: String,
    /// Longest usable runway, e.g. "3400m"
    pub runway_length: String,
    /// Available fuel type, e.g. "Jet A-1"
    pub fuel_type: String,
    /// Emergency-response service rating, e.g. "CAT 9"
    pub emergency_category: String,
}

impl AirportRecord {
    /// Create a new airport record
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        runway_length: impl Into<String>,
        fuel_type: impl Into<String>,
        emergency_category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            runway_length: runway_length.into(),
            fuel_type: fuel_type.into(),
            emergency_category: emergency_category.into(),
        }
    }

    /// City portion of the identifier, without the ICAO suffix
    ///
    /// Directory ids follow the "City (ICAO)" convention; the bare city
    /// name is what the geocoding service resolves.
    #[must_use]
    pub fn city(&self) -> &str {
        self.id
            .split_once(" (")
            .map_or(self.id.as_str(), |(city, _)| city)
    }

    /// Format airport attributes for prompt context
    #[must_use]
    pub fn format_specs(&self) -> String {
        format!(
            "Runway {}, Fuel {}, Emergency services {}",
            self.runway_length, self.fuel_type, self.emergency_category
        )
    }
}

/// A historical aviation incident used as prompt context
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoricalIncident {
    /// Date of the incident
    pub date: NaiveDate,
    /// City nearest to the incident
    pub city: String,
    /// Short description of what happened
    pub description: String,
}

impl HistoricalIncident {
    /// Create a new incident record
    #[must_use]
    pub fn new(date: NaiveDate, city: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date,
            city: city.into(),
            description: description.into(),
        }
    }

    /// Render the incident as a prompt context line
    #[must_use]
    pub fn context_line(&self) -> String {
        format!("- {} at {}", self.description, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_strips_icao_suffix() {
        let record = AirportRecord::new("Karachi (OPKC)", "3400m", "Jet A-1", "CAT 9");
        assert_eq!(record.city(), "Karachi");
    }

    #[test]
    fn test_city_without_suffix_is_unchanged() {
        let record = AirportRecord::new("Karachi", "3400m", "Jet A-1", "CAT 9");
        assert_eq!(record.city(), "Karachi");
    }

    #[test]
    fn test_format_specs() {
        let record = AirportRecord::new("Multan (OPMT)", "3200m", "Jet A-1", "CAT 8");
        assert_eq!(
            record.format_specs(),
            "Runway 3200m, Fuel Jet A-1, Emergency services CAT 8"
        );
    }

    #[test]
    fn test_incident_context_line() {
        let incident = HistoricalIncident::new(
            NaiveDate::from_ymd_opt(2020, 5, 22).unwrap(),
            "Karachi",
            "PIA 8303 Engine Failure / Gear Issue",
        );
        assert_eq!(
            incident.context_line(),
            "- PIA 8303 Engine Failure / Gear Issue at Karachi"
        );
    }
}
