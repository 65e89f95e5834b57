//! Palisade Core - offensive-text classification logic.
//!
//! This crate provides everything behind the Palisade check endpoint: the two
//! denylist filters, the decision policy that merges their hits with an
//! external moderation verdict, and the moderation service client.

pub mod classifier;
pub mod moderation;

pub use classifier::{
    decide, ClassificationPipeline, Decision, EmojiFilter, KeywordFilter, Verdict,
};
pub use moderation::{ModerationClient, ModerationError, ModerationResult, OpenAiModeration};
