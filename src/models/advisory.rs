//! Partitioned advisory text and the rendered briefing bundle

use crate::models::{AirportRecord, EmergencyRequest, WeatherSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal delimiter between the two options in the model output
const OPTION_TWO_MARKER: &str = "Option 2:";

/// Leading label stripped from the first segment
const OPTION_ONE_LABEL: &str = "Option 1:";

/// The two-option advisory derived from raw model output
///
/// `option_one` is always present; when the "Option 2:" marker never
/// occurs it holds the full raw text and `option_two` is `None`, and
/// callers render a single block instead of the two-column layout.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdvisoryResult {
    /// First option text, with a leading "Option 1:" label stripped
    pub option_one: String,
    /// Second option text, present iff the marker occurred
    pub option_two: Option<String>,
}

impl AdvisoryResult {
    /// Partition raw model output on the first "Option 2:" marker
    ///
    /// This is a deliberately textual contract with the upstream model:
    /// a substring search, not structured parsing. Later occurrences of
    /// the marker are left inside `option_two` untouched.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.split_once(OPTION_TWO_MARKER) {
            None => Self {
                option_one: raw.to_string(),
                option_two: None,
            },
            Some((head, tail)) => {
                let head = head.trim();
                let option_one = head
                    .strip_prefix(OPTION_ONE_LABEL)
                    .map_or(head, str::trim_start)
                    .to_string();
                Self {
                    option_one,
                    option_two: Some(tail.to_string()),
                }
            }
        }
    }

    /// Whether the marker was found and both options are available
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.option_two.is_some()
    }
}

/// The complete result bundle handed to the UI layer
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdvisoryBriefing {
    /// The request this briefing answers
    pub request: EmergencyRequest,
    /// Reference data for the selected airport
    pub airport: AirportRecord,
    /// Live weather snapshot, when the lookup succeeded
    pub weather: Option<WeatherSnapshot>,
    /// The partitioned advisory
    pub advisory: AdvisoryResult,
    /// When this briefing was generated
    pub generated_at: DateTime<Utc>,
}

impl AdvisoryBriefing {
    /// Banner line summarizing the analyzed scenario
    #[must_use]
    pub fn banner(&self) -> String {
        format!(
            "Analysis complete for {} near {}",
            self.request.emergency, self.request.airport_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_partition_with_both_options() {
        let raw = "Option 1: Divert to Karachi immediately. Option 2: Continue to Lahore.";
        let result = AdvisoryResult::from_raw(raw);
        assert!(result.is_split());
        assert_eq!(result.option_one, "Divert to Karachi immediately.");
        assert_eq!(result.option_two.as_deref(), Some(" Continue to Lahore."));
    }

    #[test]
    fn test_partition_without_marker() {
        let raw = "no marker present";
        let result = AdvisoryResult::from_raw(raw);
        assert!(!result.is_split());
        assert_eq!(result.option_one, "no marker present");
        assert_eq!(result.option_two, None);
    }

    #[test]
    fn test_partition_splits_on_first_marker_only() {
        let raw = "Option 1: A. Option 2: B, unlike Option 2: C.";
        let result = AdvisoryResult::from_raw(raw);
        assert_eq!(result.option_one, "A.");
        assert_eq!(result.option_two.as_deref(), Some(" B, unlike Option 2: C."));
    }

    #[test]
    fn test_partition_keeps_preamble_before_label() {
        // Only a leading label is stripped; text before it stays put
        let raw = "Here are your choices.\nOption 1: A\nOption 2: B";
        let result = AdvisoryResult::from_raw(raw);
        assert!(result.option_one.starts_with("Here are your choices."));
        assert!(result.option_one.contains("Option 1: A"));
    }

    #[rstest]
    #[case("Option 2: only the second half", "", Some(" only the second half"))]
    #[case("Option 1: first half Option 2:", "first half", Some(""))]
    fn test_partition_edge_positions(
        #[case] raw: &str,
        #[case] expected_one: &str,
        #[case] expected_two: Option<&str>,
    ) {
        let result = AdvisoryResult::from_raw(raw);
        assert_eq!(result.option_one, expected_one);
        assert_eq!(result.option_two.as_deref(), expected_two);
    }

    #[test]
    fn test_briefing_banner() {
        use crate::models::EmergencyType;

        let briefing = AdvisoryBriefing {
            request: EmergencyRequest::new(EmergencyType::EngineFailure, "Karachi (OPKC)"),
            airport: AirportRecord::new("Karachi (OPKC)", "3400m", "Jet A-1", "CAT 9"),
            weather: None,
            advisory: AdvisoryResult::from_raw("text"),
            generated_at: Utc::now(),
        };
        assert_eq!(
            briefing.banner(),
            "Analysis complete for Engine Failure near Karachi (OPKC)"
        );
    }
}
