//! Test harness: the real router backed by a mock fetcher.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use event_crawler::{testing::ListingFixture, CrawlConfig, Crawler, MockFetcher};
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

pub const SOURCE_URL: &str = "https://events.example.com/";

pub struct TestHarness {
    pub fetcher: MockFetcher,
    pub app: Router,
}

impl TestHarness {
    /// Harness whose source page renders `fixture`.
    pub fn with_listing(fixture: &ListingFixture) -> Self {
        let fetcher = MockFetcher::new().with_page(SOURCE_URL, fixture.html());
        Self::with_fetcher(fetcher, CrawlConfig::default())
    }

    /// Harness whose source page does not exist (fetch fails).
    pub fn without_page() -> Self {
        Self::with_fetcher(MockFetcher::new(), CrawlConfig::default())
    }

    pub fn with_fetcher(fetcher: MockFetcher, config: CrawlConfig) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let state = AppState::new(Arc::new(fetcher.clone()), Crawler::new(&config), SOURCE_URL);
        Self {
            fetcher,
            app: build_app(state),
        }
    }

    /// Send a request and decode the JSON body.
    pub async fn request(&self, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = serde_json::from_slice(&bytes).expect("Body is not JSON");
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.request(Method::GET, uri).await
    }
}
