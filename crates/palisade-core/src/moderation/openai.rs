//! OpenAI moderation endpoint client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ModerationClient, ModerationError, ModerationResult};

/// Moderation model requested from the service.
pub const DEFAULT_MODEL: &str = "omni-moderation-latest";

/// Moderations endpoint.
const MODERATIONS_URL: &str = "https://api.openai.com/v1/moderations";

/// Upper bound on a single moderation call. A slow call fails closed into
/// the unavailable outcome instead of holding the request open.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenAI moderation API client.
pub struct OpenAiModeration {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiModeration {
    /// Creates a client for the given API key, using the default model.
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[async_trait]
impl ModerationClient for OpenAiModeration {
    async fn classify(&self, text: &str) -> Result<ModerationResult, ModerationError> {
        let request = ModerationRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .client
            .post(MODERATIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ModerationError::Status(response.status()));
        }

        let body: ModerationResponse = response.json().await?;
        let entry = body
            .results
            .into_iter()
            .next()
            .ok_or(ModerationError::EmptyResponse)?;

        debug!(
            flagged = entry.flagged,
            categories = entry.category_scores.len(),
            "Moderation verdict received"
        );

        Ok(ModerationResult {
            flagged: entry.flagged,
            category_scores: entry.category_scores,
        })
    }
}

// --- Moderation API request/response types ---

#[derive(Serialize)]
struct ModerationRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationEntry>,
}

#[derive(Deserialize)]
struct ModerationEntry {
    flagged: bool,
    category_scores: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_extracts_scores() {
        let body = r#"{
            "id": "modr-1",
            "model": "omni-moderation-latest",
            "results": [{
                "flagged": true,
                "categories": {"violence": true},
                "category_scores": {"violence": 0.91, "hate": 0.02}
            }]
        }"#;

        let parsed: ModerationResponse = serde_json::from_str(body).unwrap();
        let entry = &parsed.results[0];
        assert!(entry.flagged);
        assert_eq!(entry.category_scores["violence"], 0.91);
        assert_eq!(entry.category_scores.len(), 2);
    }

    #[test]
    fn request_serializes_model_and_input() {
        let request = ModerationRequest {
            model: DEFAULT_MODEL,
            input: "some text",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "omni-moderation-latest");
        assert_eq!(json["input"], "some text");
    }
}
