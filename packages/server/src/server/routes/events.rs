//! Event listing endpoints.
//!
//! GET|POST /api/events         - extracted events as a JSON array
//! GET      /api/events/report  - events plus per-node failures

use axum::{extract::Extension, Json};
use event_crawler::{EventRecord, ExtractionReport};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Fetch the configured listing page and crawl it.
async fn crawl_source(state: &AppState) -> Result<ExtractionReport, ApiError> {
    tracing::info!(
        source = %state.source_url,
        fetcher = state.fetcher.name(),
        "Crawling event listing"
    );

    let nodes = state.fetcher.fetch(&state.source_url).await?;
    Ok(state.crawler.crawl(&nodes))
}

/// Events handler
///
/// Best effort: entries that fail extraction are logged and left out.
/// Only a failed page fetch fails the request (502).
pub async fn events_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<EventRecord>>, ApiError> {
    let report = crawl_source(&state).await?;
    Ok(Json(report.into_events()))
}

/// Full report handler, for diagnosing entries that were skipped.
pub async fn events_report_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<ExtractionReport>, ApiError> {
    crawl_source(&state).await.map(Json)
}
