use std::sync::Arc;

use crate::llm_client::ChatCompletion;
use crate::pages::PageRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Inference backend. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn ChatCompletion>,
    pub pages: Arc<PageRenderer>,
}
