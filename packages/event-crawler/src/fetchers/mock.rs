//! Mock fetcher for testing.
//!
//! Serves canned HTML per URL and records every fetch.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::fetchers::html::snapshot_nodes;
use crate::traits::fetcher::EventFetcher;
use crate::types::config::DEFAULT_NODE_SELECTOR;
use crate::types::node::RawEventNode;

/// Mock fetcher for testing.
///
/// Unknown URLs answer like a missing page (`FetchError::Status` 404).
///
/// # Example
///
/// ```rust
/// use event_crawler::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new().with_page("https://example.com/", "<h4 class=\"event-name\"></h4>");
/// assert_eq!(mock.fetch_call_count(), 0);
/// ```
#[derive(Clone)]
pub struct MockFetcher {
    /// Canned HTML indexed by URL
    pages: Arc<RwLock<HashMap<String, String>>>,
    node_selector: String,
    /// Track calls for verification
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: Arc::default(),
            node_selector: DEFAULT_NODE_SELECTOR.to_string(),
            fetch_calls: Arc::default(),
        }
    }

    /// Use a different heading selector.
    pub fn with_node_selector(mut self, selector: impl Into<String>) -> Self {
        self.node_selector = selector.into();
        self
    }

    /// Add a page that will be served for `url`.
    pub fn add_page(&self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), html.into());
    }

    /// Add a page (builder pattern).
    pub fn with_page(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.add_page(url, html);
        self
    }

    /// Get the number of times fetch was called.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// Get the URLs that were requested.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }

    /// Clear all pages and calls.
    pub fn reset(&self) {
        self.pages.write().unwrap().clear();
        self.fetch_calls.write().unwrap().clear();
    }
}

#[async_trait]
impl EventFetcher for MockFetcher {
    async fn fetch(&self, uri: &str) -> FetchResult<Vec<RawEventNode>> {
        self.fetch_calls.write().unwrap().push(uri.to_string());

        let html = self
            .pages
            .read()
            .unwrap()
            .get(uri)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: uri.to_string(),
                status: 404,
            })?;

        snapshot_nodes(&html, &self.node_selector)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
