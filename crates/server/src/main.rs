//! HTTP server binary for the community recommendation service.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use advisor_client::GeminiAdvisor;
use common::Config;
use directory_client::RedditDirectory;
use server::{AppState, RecommendationOrchestrator, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let directory = RedditDirectory::new(&config);
    let advisor = GeminiAdvisor::new(&config);
    let orchestrator = RecommendationOrchestrator::new(directory.clone(), advisor);

    let state = Arc::new(AppState {
        orchestrator,
        directory,
    });

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("community-recs server listening on {addr}");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
