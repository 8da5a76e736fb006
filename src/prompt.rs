//! Prompt composition for the advisory service
//!
//! Pure string construction: identical inputs always produce identical
//! prompts, byte for byte.

use crate::models::{AirportRecord, EmergencyRequest, HistoricalIncident, WeatherSnapshot};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Selectable framing for the composed prompt
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    /// Opens with a flight-safety-officer persona
    Styled,
    /// Forbids personas and conversational framing
    Blunt,
}

impl PromptStyle {
    /// Parse a configuration value into a style
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "styled" => Some(PromptStyle::Styled),
            "blunt" => Some(PromptStyle::Blunt),
            _ => None,
        }
    }
}

/// Render an emergency scenario into a single instruction block
///
/// The live weather line is included only when a snapshot is available;
/// the rest of the template is independent of the lookup outcome.
#[must_use]
pub fn compose(
    request: &EmergencyRequest,
    airport: &AirportRecord,
    history: &[HistoricalIncident],
    weather: Option<&WeatherSnapshot>,
    style: PromptStyle,
) -> String {
    let mut prompt = String::new();

    match style {
        PromptStyle::Styled => {
            prompt.push_str("ACT AS: A Senior Flight Safety Officer for Pakistan Civil Aviation.\n");
        }
        PromptStyle::Blunt => {
            prompt.push_str(
                "Produce a technical flight-emergency analysis for Pakistan Civil Aviation operations. Do not adopt any persona. Do not use conversational framing.\n",
            );
        }
    }

    let _ = writeln!(
        prompt,
        "EMERGENCY: {} near {}.",
        request.emergency, request.airport_id
    );
    let _ = writeln!(
        prompt,
        "AIRCRAFT STATUS: Altitude {}ft, Weather: {}.",
        request.altitude_ft, request.weather_description
    );

    if let Some(snapshot) = weather {
        let _ = writeln!(
            prompt,
            "LIVE WEATHER: {}, wind {} at {}.",
            snapshot.format_temperature(),
            snapshot.format_wind(),
            snapshot.city_resolved
        );
    }

    let _ = writeln!(prompt, "NEAREST AIRPORT SPECS: {}.", airport.format_specs());

    prompt.push_str("HISTORICAL INCIDENTS IN PK:\n");
    for incident in history {
        let _ = writeln!(prompt, "{}", incident.context_line());
    }

    prompt.push_str(
        "\nTASK: Provide exactly TWO viable options for the pilot.\n\
         Each option must include:\n\
         1. Action Name (e.g., Immediate Diversion to [Airport])\n\
         2. Reasoning (Why this is safer based on specs or history)\n\
         3. Risks (What to watch out for)\n\
         \n\
         Format as clear, professional bullet points. Use technical aviation terminology.\n",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::AirportDirectory;
    use crate::models::EmergencyType;

    fn karachi_scenario() -> (EmergencyRequest, AirportRecord, Vec<HistoricalIncident>) {
        let directory = AirportDirectory::bundled();
        let airport = directory.lookup("Karachi (OPKC)").unwrap().clone();
        let history = directory.incident_history().to_vec();
        let request = EmergencyRequest::new(EmergencyType::EngineFailure, "Karachi (OPKC)");
        (request, airport, history)
    }

    #[test]
    fn test_compose_is_deterministic() {
        let (request, airport, history) = karachi_scenario();
        let snapshot = WeatherSnapshot {
            temperature_c: 31.2,
            wind_speed_kmh: 14.0,
            city_resolved: "Karachi".to_string(),
        };

        let first = compose(
            &request,
            &airport,
            &history,
            Some(&snapshot),
            PromptStyle::Styled,
        );
        let second = compose(
            &request,
            &airport,
            &history,
            Some(&snapshot),
            PromptStyle::Styled,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_contains_scenario_context() {
        let (request, airport, history) = karachi_scenario();
        let prompt = compose(&request, &airport, &history, None, PromptStyle::Styled);

        assert!(prompt.contains("Engine Failure"));
        assert!(prompt.contains("Karachi"));
        assert!(prompt.contains("30000"));
        assert!(prompt.contains("Clear"));
        assert!(prompt.contains("3400m"));
        assert!(prompt.contains("CAT 9"));
        assert!(prompt.contains("exactly TWO"));
    }

    #[test]
    fn test_compose_renders_history_in_order() {
        let (request, airport, history) = karachi_scenario();
        let prompt = compose(&request, &airport, &history, None, PromptStyle::Styled);

        let first = prompt.find("PIA 8303 Engine Failure / Gear Issue").unwrap();
        let second = prompt
            .find("Airblue 202 CFIT due to Weather/Pilot Error")
            .unwrap();
        let third = prompt.find("Bhoja Air 213 Windshear on Approach").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_compose_weather_line_only_when_available() {
        let (request, airport, history) = karachi_scenario();
        let snapshot = WeatherSnapshot {
            temperature_c: 31.2,
            wind_speed_kmh: 14.0,
            city_resolved: "Karachi".to_string(),
        };

        let with_weather = compose(
            &request,
            &airport,
            &history,
            Some(&snapshot),
            PromptStyle::Styled,
        );
        assert!(with_weather.contains("LIVE WEATHER: 31.2°C, wind 14.0 km/h at Karachi."));

        let without_weather = compose(&request, &airport, &history, None, PromptStyle::Styled);
        assert!(!without_weather.contains("LIVE WEATHER"));
        assert!(!without_weather.is_empty());
    }

    #[test]
    fn test_styles_differ_only_in_framing() {
        let (request, airport, history) = karachi_scenario();

        let styled = compose(&request, &airport, &history, None, PromptStyle::Styled);
        let blunt = compose(&request, &airport, &history, None, PromptStyle::Blunt);

        assert!(styled.contains("ACT AS"));
        assert!(!blunt.contains("ACT AS"));
        assert!(blunt.contains("Do not adopt any persona"));

        // Everything after the framing line is shared
        let styled_body = styled.split_once('\n').unwrap().1;
        let blunt_body = blunt.split_once('\n').unwrap().1;
        assert_eq!(styled_body, blunt_body);
    }

    #[test]
    fn test_prompt_style_parse() {
        assert_eq!(PromptStyle::parse("styled"), Some(PromptStyle::Styled));
        assert_eq!(PromptStyle::parse("blunt"), Some(PromptStyle::Blunt));
        assert_eq!(PromptStyle::parse("chatty"), None);
    }
}
