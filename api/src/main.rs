//! News Feed API Server
//!
//! Serves a news feed published as a spreadsheet CSV export: the feed is
//! fetched on a timer, decoded, ordered for display and exposed over HTTP.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::HttpFeedSource;
use app::{spawn_refresh_loop, NewsService};
use config::Config;
use domain::ports::FeedSource;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService<dyn FeedSource>>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// The manual reload route, kept apart so `main` can rate limit it
pub fn reload_routes() -> Router<AppState> {
    Router::new().route("/news/reload", post(handlers::reload_news))
}

/// Build the full router around `reload`
pub fn build_router(state: AppState, reload: Router<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Feed reads
        .route("/news", get(handlers::get_news))
        .route("/news/search", get(handlers::search_news))
        .route("/news/:position", get(handlers::get_article))
        // Reload / retry
        .merge(reload)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,newsfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting news feed API...");

    // Load configuration
    let config = Config::from_env()?;

    // Create adapters
    let source: Arc<dyn FeedSource> = Arc::new(
        HttpFeedSource::new(config.fetch_timeout).context("Failed to build HTTP client")?,
    );

    // Create application services
    let news_service = Arc::new(NewsService::new(source, config.feed_url.clone()));

    // First tick loads immediately
    let refresher = spawn_refresh_loop(news_service.clone(), config.refresh_interval);
    tracing::info!(
        url = %config.feed_url,
        every_secs = config.refresh_interval.as_secs(),
        "Feed refresh scheduled"
    );

    let state = AppState { news_service };

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(config.reload_replenish_secs)
            .burst_size(config.reload_burst)
            .finish()
            .context("Invalid reload rate limit (RELOAD_REPLENISH_SECS / RELOAD_BURST)")?,
    );

    let reload = reload_routes().layer(GovernorLayer {
        config: governor_config,
    });

    let app = build_router(state, reload);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")?;

    refresher.abort();

    Ok(())
}
