//! API request and response models.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for POST /check_offensive.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    /// The text to classify. A missing or non-string value is treated as an
    /// empty string rather than rejected.
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: String,
}

/// Accepts any JSON value for a string field: strings pass through,
/// everything else becomes the empty string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

/// Response body for POST /check_offensive.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    /// Whether any signal flagged the text.
    pub offensive: bool,
    /// Certainty of the verdict, 0.0 to 1.0.
    pub confidence: f64,
    /// Input with denylisted emoji stripped and whitespace normalized.
    pub sanitized_text: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether an external moderation client is configured.
    pub moderation: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_accepts_string() {
        let req: CheckRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
    }

    #[test]
    fn missing_text_becomes_empty() {
        let req: CheckRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn null_text_becomes_empty() {
        let req: CheckRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn numeric_text_becomes_empty() {
        let req: CheckRequest = serde_json::from_str(r#"{"text": 42}"#).unwrap();
        assert_eq!(req.text, "");
    }

    #[test]
    fn object_text_becomes_empty() {
        let req: CheckRequest = serde_json::from_str(r#"{"text": {"nested": true}}"#).unwrap();
        assert_eq!(req.text, "");
    }
}
