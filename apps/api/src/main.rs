mod analysis;
mod cache;
mod config;
mod db;
mod enrich;
mod errors;
mod interview;
mod jobs;
mod llm_client;
mod models;
mod prompts;
mod routes;
mod search;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::executor::{LlmStepExecutor, StepExecutor};
use crate::analysis::tracker::RunTracker;
use crate::cache::ResultCache;
use crate::config::Config;
use crate::db::create_pool;
use crate::enrich::EnrichClient;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::search::websearch::WebSearchClient;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client and the pipeline step executor
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let executor: Arc<dyn StepExecutor> = Arc::new(LlmStepExecutor::new(llm.clone()));

    // Process-lifetime run tracker and result cache
    let tracker = Arc::new(RunTracker::new());
    let cache = Arc::new(ResultCache::new());

    // Outbound clients for sourcing and enrichment
    let websearch = WebSearchClient::new(
        config.search_api_key.clone(),
        config.search_api_url.clone(),
    );
    let enrich = EnrichClient::new(config.enrich_api_key.clone(), config.enrich_api_url.clone());
    info!("Search and enrichment clients initialized");

    // Build app state
    let state = AppState {
        db,
        llm,
        executor,
        tracker,
        cache,
        websearch,
        enrich,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
