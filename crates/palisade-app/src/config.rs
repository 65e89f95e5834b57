//! Environment configuration.
//!
//! The only secret is the moderation credential. Its absence is a supported
//! degraded mode (denylist-only detection), not a startup failure.

use std::env;

/// Placeholder value that ships in example env files; treated as unset.
const API_KEY_PLACEHOLDER: &str = "your-api-key-here";

/// Configuration loaded from environment variables.
///
/// The .env file is loaded by the caller via dotenvy before this runs.
pub struct Config {
    /// Credential for the external moderation service, when configured.
    pub openai_api_key: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn load() -> Self {
        Self {
            openai_api_key: moderation_key(env::var("OPENAI_API_KEY").ok()),
        }
    }
}

/// Filters out empty and placeholder credentials.
fn moderation_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.is_empty() && key != API_KEY_PLACEHOLDER)
}
