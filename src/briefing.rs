//! Advisory briefing pipeline
//!
//! One logical flow per submission: directory lookup, weather
//! enrichment, prompt composition, a single completion call, and
//! partitioning into the two-option result.

use crate::Result;
use crate::advisory::AdvisoryClient;
use crate::airports::AirportDirectory;
use crate::models::{AdvisoryBriefing, AdvisoryResult, EmergencyRequest};
use crate::prompt::{self, PromptStyle};
use crate::weather::WeatherClient;
use chrono::Utc;
use tracing::{debug, info, warn};

/// Advisory briefing service
pub struct BriefingService;

impl BriefingService {
    /// Handle a single emergency submission
    ///
    /// An unresolvable airport id fails loudly; an unavailable weather
    /// snapshot degrades the prompt instead of aborting the request.
    pub async fn handle(
        directory: &AirportDirectory,
        weather: &WeatherClient,
        advisory: &AdvisoryClient,
        style: PromptStyle,
        request: EmergencyRequest,
    ) -> Result<AdvisoryBriefing> {
        info!(
            "Generating advisory for {} near {}",
            request.emergency, request.airport_id
        );

        let airport = directory.lookup(&request.airport_id)?.clone();
        debug!("Airport specs: {}", airport.format_specs());

        let snapshot = weather.observe(airport.city()).await;
        if snapshot.is_none() {
            warn!(
                "Live weather unavailable for {}; continuing without it",
                airport.city()
            );
        }

        let prompt = prompt::compose(
            &request,
            &airport,
            directory.incident_history(),
            snapshot.as_ref(),
            style,
        );
        debug!("Composed prompt ({} chars)", prompt.len());

        let raw = advisory.generate(&prompt).await?;
        let result = AdvisoryResult::from_raw(&raw);
        if !result.is_split() {
            warn!("Advisory response had no 'Option 2:' marker; rendering as a single block");
        }

        Ok(AdvisoryBriefing {
            request,
            airport,
            weather: snapshot,
            advisory: result,
            generated_at: Utc::now(),
        })
    }
}
