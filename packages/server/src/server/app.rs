//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use event_crawler::{Crawler, EventFetcher, HttpFetcher};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::server::routes::{events_handler, events_report_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn EventFetcher>,
    pub crawler: Arc<Crawler>,
    pub source_url: String,
}

impl AppState {
    pub fn new(
        fetcher: Arc<dyn EventFetcher>,
        crawler: Crawler,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            crawler: Arc::new(crawler),
            source_url: source_url.into(),
        }
    }

    /// State backed by the HTTP fetcher, as used in production
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher =
            HttpFetcher::new(config.fetch_config()).context("Failed to create HTTP fetcher")?;

        Ok(Self::new(
            Arc::new(fetcher),
            Crawler::new(&config.crawl_config()),
            config.source_url.clone(),
        ))
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // CORS configuration - read-only public API
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/events", get(events_handler).post(events_handler))
        .route("/api/events/report", get(events_report_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
