//! Application state for the API server.

use std::sync::Arc;

use palisade_core::ClassificationPipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Classification pipeline; immutable after startup, shared across all
    /// concurrent requests.
    pub pipeline: Arc<ClassificationPipeline>,
}

impl AppState {
    /// Creates application state around an existing pipeline.
    pub fn new(pipeline: ClassificationPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Creates state with no external moderation (denylists only).
    pub fn local_only() -> Self {
        Self::new(ClassificationPipeline::local_only())
    }
}
