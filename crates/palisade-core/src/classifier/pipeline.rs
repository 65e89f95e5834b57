//! Classification pipeline.
//!
//! Runs the two local filters, sanitizes the input, consults the external
//! moderation service when one is configured, and merges everything into the
//! final verdict. Works without a moderation client - degrades to
//! denylist-only mode.

use std::sync::Arc;

use tracing::{info, warn};

use super::{decide, EmojiFilter, KeywordFilter, Verdict};
use crate::moderation::{ModerationClient, ModerationResult};

/// Per-request classification pipeline.
///
/// The filters are immutable after construction and the moderation client
/// keeps no per-request state, so one pipeline is shared across any number
/// of concurrent requests.
pub struct ClassificationPipeline {
    emoji: EmojiFilter,
    keyword: KeywordFilter,
    moderation: Option<Arc<dyn ModerationClient>>,
}

impl ClassificationPipeline {
    /// Creates a pipeline; pass `None` to run on the local denylists alone.
    pub fn new(moderation: Option<Arc<dyn ModerationClient>>) -> Self {
        Self {
            emoji: EmojiFilter::new(),
            keyword: KeywordFilter::new(),
            moderation,
        }
    }

    /// Creates a pipeline with no external moderation (degraded mode).
    pub fn local_only() -> Self {
        Self::new(None)
    }

    /// Returns true if an external moderation client is configured.
    pub fn has_moderation(&self) -> bool {
        self.moderation.is_some()
    }

    /// Classifies `text` and returns the complete verdict.
    ///
    /// The local filters see the raw input; the moderation service receives
    /// the sanitized copy. A moderation failure is logged and treated as the
    /// service being unavailable for this request only.
    pub async fn check(&self, text: &str) -> Verdict {
        let emoji_hit = self.emoji.contains_offensive(text);
        let sanitized = self.emoji.sanitize(text);
        let keyword_hit = self.keyword.contains_offensive(text);

        let moderation = self.fetch_moderation(&sanitized).await;

        let decision = decide(emoji_hit, keyword_hit, moderation.as_ref());

        info!(
            emoji_hit,
            keyword_hit,
            moderation_available = moderation.is_some(),
            offensive = decision.offensive,
            confidence = decision.confidence,
            "Text classified"
        );

        Verdict {
            offensive: decision.offensive,
            confidence: decision.confidence,
            sanitized_text: sanitized,
        }
    }

    async fn fetch_moderation(&self, text: &str) -> Option<ModerationResult> {
        let client = self.moderation.as_ref()?;
        match client.classify(text).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(error = %e, "Moderation service unavailable for this request");
                None
            }
        }
    }
}
