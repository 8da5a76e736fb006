//! Client for the hosted generative-language service
//!
//! Exactly one outbound call per submission: no retries, no streaming.
//! Every failure mode (network, auth, quota, malformed body) maps to
//! `AeroAdvisorError::Upstream` and is surfaced at the request boundary.

use crate::Result;
use crate::config::AdvisoryConfig;
use crate::error::AeroAdvisorError;
use std::time::Duration;
use tracing::debug;

/// Client for the generateContent completion endpoint
pub struct AdvisoryClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl AdvisoryClient {
    /// Create a new advisory client
    ///
    /// Requires the service credential; construction fails before any
    /// request is accepted when it is absent.
    pub fn new(config: &AdvisoryConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AeroAdvisorError::config("Advisory API key is required"))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("AeroAdvisor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AeroAdvisorError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    /// Send a composed prompt and return the completion text atomically
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!("Requesting completion from {} ({} prompt chars)", self.model, prompt.len());

        let body = gemini::GenerateContentRequest::from_prompt(prompt);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AeroAdvisorError::upstream(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AeroAdvisorError::upstream(format!(
                "Service returned HTTP {status}"
            )));
        }

        let completion: gemini::GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AeroAdvisorError::upstream(format!("Malformed response: {e}")))?;

        completion
            .text()
            .ok_or_else(|| AeroAdvisorError::upstream("Response contained no completion text"))
    }
}

/// Request and response structures for the generateContent API
mod gemini {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct GenerateContentRequest {
        pub contents: Vec<Content>,
    }

    impl GenerateContentRequest {
        pub fn from_prompt(prompt: &str) -> Self {
            Self {
                contents: vec![Content {
                    parts: vec![Part {
                        text: prompt.to_string(),
                    }],
                }],
            }
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Content {
        pub parts: Vec<Part>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Part {
        pub text: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct GenerateContentResponse {
        pub candidates: Option<Vec<Candidate>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Candidate {
        pub content: Option<Content>,
    }

    impl GenerateContentResponse {
        /// Concatenated text of the first candidate, if any
        pub fn text(&self) -> Option<String> {
            let candidate = self.candidates.as_ref()?.first()?;
            let parts = &candidate.content.as_ref()?.parts;

            let text = parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>();

            if text.is_empty() { None } else { Some(text) }
        }
    }
}
