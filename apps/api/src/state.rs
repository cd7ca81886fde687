use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::executor::StepExecutor;
use crate::analysis::tracker::RunTracker;
use crate::cache::ResultCache;
use crate::enrich::EnrichClient;
use crate::llm_client::LlmClient;
use crate::search::websearch::WebSearchClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable step execution. Production: `LlmStepExecutor`; tests swap
    /// in stubs.
    pub executor: Arc<dyn StepExecutor>,
    /// In-flight and finished analysis runs, process-lifetime.
    pub tracker: Arc<RunTracker>,
    /// Read-after-write cache for outputs and accumulated search pages.
    pub cache: Arc<ResultCache>,
    pub websearch: WebSearchClient,
    pub enrich: EnrichClient,
}
