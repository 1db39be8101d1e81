use std::sync::Arc;

use crate::generation::generator::ResumeWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume writer. Default: `LlmClient` (Gemini).
    pub writer: Arc<dyn ResumeWriter>,
}
