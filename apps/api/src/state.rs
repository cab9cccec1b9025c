use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::jobs::cache::JobCache;
use crate::llm_client::AiBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable AI backend — the mock or the real Gemini client, selected at startup.
    pub ai: Arc<dyn AiBackend>,
    /// Owned job cache. Writes happen on refresh only; the whole list is
    /// swapped under the lock, never partially mutated.
    pub job_cache: Arc<RwLock<JobCache>>,
    pub config: Config,
}
