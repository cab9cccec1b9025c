mod assistant;
mod config;
mod cv;
mod errors;
mod guidance;
mod jobs;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::cache::{spawn_daily_refresh, JobCache};
use crate::llm_client::{mock::MockAi, AiBackend, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPilot API v{}", env!("CARGO_PKG_VERSION"));

    // Select the AI backend
    let ai: Arc<dyn AiBackend> = if llm_client::USE_MOCK_AI {
        info!("AI backend: mock (deterministic canned responses)");
        Arc::new(MockAi)
    } else {
        info!("AI backend: Gemini (model ladder: {:?})", llm_client::MODEL_CANDIDATES);
        Arc::new(GeminiClient::new(config.google_api_key.clone()))
    };

    // Uploads directory for generated CV PDFs
    std::fs::create_dir_all(&config.uploads_dir)?;

    // Warm the job cache and schedule the daily forced refresh
    let job_cache = Arc::new(RwLock::new(JobCache::new()));
    job_cache.write().await.get(true);
    spawn_daily_refresh(job_cache.clone());
    info!("Job cache initialized, daily refresh scheduled");

    let state = AppState {
        ai,
        job_cache,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
