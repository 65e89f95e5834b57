//! External moderation service integration.
//!
//! The pipeline depends on this solely through the [`ModerationClient`]
//! capability trait, so tests substitute a stub and the concrete provider can
//! be swapped without touching the decision policy.

mod openai;

pub use openai::OpenAiModeration;

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Moderation client errors.
///
/// None of these ever reach a request handler: the pipeline logs them and
/// treats the service as unavailable for that single request.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Network-level failure, timeout, or undecodable body.
    #[error("moderation request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("moderation service returned {0}")]
    Status(reqwest::StatusCode),

    /// Service answered successfully but with no classification results.
    #[error("moderation response contained no results")]
    EmptyResponse,
}

/// Normalized verdict from the external moderation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModerationResult {
    /// The service's own offensive/not-offensive verdict.
    pub flagged: bool,
    /// Score per category name, each 0.0 to 1.0.
    pub category_scores: HashMap<String, f64>,
}

impl ModerationResult {
    /// Returns the maximum score across all returned categories, or 0.0 when
    /// the service returned none.
    ///
    /// The maximum rather than an average: one strongly-flagged category
    /// should drive the overall confidence regardless of which one it is.
    pub fn max_category_score(&self) -> f64 {
        self.category_scores
            .values()
            .copied()
            .fold(0.0, f64::max)
            .clamp(0.0, 1.0)
    }
}

/// Capability interface for third-party text classification.
#[async_trait]
pub trait ModerationClient: Send + Sync {
    /// Classifies `text`, returning the service verdict and per-category
    /// scores. One outbound call per invocation; no retries, no backoff.
    async fn classify(&self, text: &str) -> Result<ModerationResult, ModerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_score_of_empty_map_is_zero() {
        let result = ModerationResult::default();
        assert_eq!(result.max_category_score(), 0.0);
    }

    #[test]
    fn max_score_picks_largest_category() {
        let result = ModerationResult {
            flagged: false,
            category_scores: HashMap::from([
                ("harassment".to_string(), 0.12),
                ("violence".to_string(), 0.82),
                ("hate".to_string(), 0.33),
            ]),
        };
        assert_eq!(result.max_category_score(), 0.82);
    }

    #[test]
    fn max_score_clamps_out_of_range_values() {
        let result = ModerationResult {
            flagged: true,
            category_scores: HashMap::from([("violence".to_string(), 1.7)]),
        };
        assert_eq!(result.max_category_score(), 1.0);
    }
}
