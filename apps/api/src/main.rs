mod config;
mod embedding_client;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding_client::EmbeddingClient;
use crate::matching::analyzer::MatchAnalyzer;
use crate::matching::evaluator::Evaluator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Evaluator v{}", env!("CARGO_PKG_VERSION"));

    if !config.embedding.has_credential() {
        warn!(
            "No Hugging Face API token found. Set HUGGINGFACE_API_TOKEN (see \
             https://huggingface.co/settings/tokens); evaluations will fail until it is configured."
        );
    }

    let embedder = EmbeddingClient::new(config.embedding.clone())
        .context("Failed to build embedding client")?;
    info!("Embedding client initialized (endpoint: {})", config.embedding.api_url);

    let analyzer = MatchAnalyzer::new(&config.analysis);
    info!(
        "Verdict thresholds: hire>={} hold>={}",
        config.analysis.thresholds.hire, config.analysis.thresholds.hold
    );

    let state = AppState {
        evaluator: Evaluator::new(embedder, analyzer),
        min_text_length: config.min_text_length,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
