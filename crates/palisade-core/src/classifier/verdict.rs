//! Verdict types and the decision policy.
//!
//! The aggregator is a rule-precedence merge, not a score blend. Local
//! denylist hits are exact, human-curated matches and pin confidence to 1.0;
//! the external classifier's graded score only carries when no local signal
//! fired, while its boolean verdict still ORs into the outcome.

use serde::{Deserialize, Serialize};

use crate::moderation::ModerationResult;

/// Outcome of merging the three signals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the text is considered offensive.
    pub offensive: bool,
    /// Certainty of the verdict, 0.0 to 1.0.
    pub confidence: f64,
}

/// Complete per-request classification output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Whether any signal flagged the text.
    pub offensive: bool,
    /// Certainty of the verdict, 0.0 to 1.0.
    pub confidence: f64,
    /// Input with denylisted emoji stripped and whitespace normalized.
    pub sanitized_text: String,
}

/// Merges the local filter hits with the external moderation outcome.
///
/// `None` means the moderation service was unavailable - unconfigured, or
/// failed for this request - which is distinct from "classified as not
/// offensive".
pub fn decide(
    emoji_hit: bool,
    keyword_hit: bool,
    moderation: Option<&ModerationResult>,
) -> Decision {
    let local_hit = emoji_hit || keyword_hit;

    match moderation {
        Some(result) => Decision {
            offensive: local_hit || result.flagged,
            confidence: if local_hit {
                1.0
            } else {
                result.max_category_score()
            },
        },
        None => Decision {
            offensive: local_hit,
            confidence: if local_hit { 1.0 } else { 0.0 },
        },
    }
}
