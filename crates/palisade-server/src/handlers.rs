//! API route handlers.

use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::models::{CheckRequest, CheckResponse, HealthResponse};
use crate::state::AppState;

/// POST /check_offensive - Classify text and return the verdict.
///
/// Always answers 200 with a best-effort verdict: a degraded or failing
/// moderation service never turns into a request-level failure.
pub async fn check_offensive(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Json<CheckResponse> {
    debug!(text_len = req.text.len(), "Checking text");

    let verdict = state.pipeline.check(&req.text).await;

    info!(
        offensive = verdict.offensive,
        confidence = verdict.confidence,
        "Check complete"
    );

    Json(CheckResponse {
        offensive: verdict.offensive,
        confidence: verdict.confidence,
        sanitized_text: verdict.sanitized_text,
    })
}

/// GET /health - Service liveness and moderation mode.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        moderation: state.pipeline.has_moderation(),
    })
}
