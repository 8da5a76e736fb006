//! Static airport reference data and historical incident records
//!
//! The directory is read-only: built once at startup and injected into
//! the pipeline, never mutated afterwards.

use crate::Result;
use crate::error::AeroAdvisorError;
use crate::models::{AirportRecord, HistoricalIncident};
use chrono::NaiveDate;

/// Immutable directory of diversion airports and incident history
#[derive(Debug, Clone)]
pub struct AirportDirectory {
    airports: Vec<AirportRecord>,
    incidents: Vec<HistoricalIncident>,
}

impl AirportDirectory {
    /// Build the directory from the bundled reference tables
    ///
    /// Major Pakistani airports along the standard routes, plus the
    /// incident history the advisory prompt cites verbatim.
    #[must_use]
    pub fn bundled() -> Self {
        let airports = vec![
            AirportRecord::new("Karachi (OPKC)", "3400m", "Jet A-1", "CAT 9"),
            AirportRecord::new("Lahore (OPLA)", "3300m", "Jet A-1", "CAT 9"),
            AirportRecord::new("Islamabad (OPIS)", "3600m", "Jet A-1", "CAT 9"),
            AirportRecord::new("Quetta (OPQT)", "3600m", "Jet A-1", "High Altitude"),
            AirportRecord::new("Peshawar (OPPS)", "2700m", "Jet A-1", "CAT 8"),
            AirportRecord::new("Multan (OPMT)", "3200m", "Jet A-1", "CAT 8"),
        ];

        let incidents = vec![
            HistoricalIncident::new(
                NaiveDate::from_ymd_opt(2020, 5, 22).unwrap(),
                "Karachi",
                "PIA 8303 Engine Failure / Gear Issue",
            ),
            HistoricalIncident::new(
                NaiveDate::from_ymd_opt(2010, 7, 28).unwrap(),
                "Islamabad",
                "Airblue 202 CFIT due to Weather/Pilot Error",
            ),
            HistoricalIncident::new(
                NaiveDate::from_ymd_opt(2012, 4, 20).unwrap(),
                "Islamabad",
                "Bhoja Air 213 Windshear on Approach",
            ),
        ];

        Self {
            airports,
            incidents,
        }
    }

    /// Look up an airport by its directory id
    ///
    /// The UI constrains selection to known ids, so a miss indicates a
    /// programming error upstream; it fails loudly rather than
    /// substituting data.
    pub fn lookup(&self, airport_id: &str) -> Result<&AirportRecord> {
        self.airports
            .iter()
            .find(|record| record.id == airport_id)
            .ok_or_else(|| AeroAdvisorError::airport_not_found(airport_id))
    }

    /// All directory ids, in presentation order
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.airports.iter().map(|record| record.id.as_str()).collect()
    }

    /// All airport records, in presentation order
    #[must_use]
    pub fn records(&self) -> &[AirportRecord] {
        &self.airports
    }

    /// Historical incidents, insertion order preserved
    #[must_use]
    pub fn incident_history(&self) -> &[HistoricalIncident] {
        &self.incidents
    }
}
