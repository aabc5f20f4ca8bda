//! HTTP-based fetcher implementation.
//!
//! Downloads a single listing page with reqwest and snapshots its event
//! headings with scraper. No link following.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::fetchers::html::{parse_selector, snapshot_nodes};
use crate::traits::fetcher::EventFetcher;
use crate::types::config::FetchConfig;
use crate::types::node::RawEventNode;

/// HTTP fetcher for static listing pages.
///
/// # Example
///
/// ```rust,ignore
/// use event_crawler::{EventFetcher, FetchConfig, HttpFetcher};
///
/// let fetcher = HttpFetcher::new(FetchConfig::default())?;
/// let nodes = fetcher.fetch("https://example.com/").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    node_selector: String,
}

impl HttpFetcher {
    /// Create a fetcher, validating the node selector up front.
    pub fn new(config: FetchConfig) -> FetchResult<Self> {
        parse_selector(&config.node_selector)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            node_selector: config.node_selector,
        })
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn node_selector(&self) -> &str {
        &self.node_selector
    }

    async fn fetch_html(&self, url: &Url) -> FetchResult<String> {
        debug!(url = %url, "HTTP fetch starting");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            FetchError::Http(Box::new(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "HTTP error");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))
    }
}

#[async_trait]
impl EventFetcher for HttpFetcher {
    async fn fetch(&self, uri: &str) -> FetchResult<Vec<RawEventNode>> {
        let url = Url::parse(uri).map_err(|_| FetchError::InvalidUrl {
            url: uri.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: uri.to_string(),
            });
        }

        let html = self.fetch_html(&url).await?;
        let nodes = snapshot_nodes(&html, &self.node_selector)?;

        info!(
            url = %url,
            content_length = html.len(),
            nodes = nodes.len(),
            "Listing page fetched"
        );

        Ok(nodes)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_selector() {
        let config = FetchConfig::default().with_node_selector("h4[");
        assert!(matches!(
            HttpFetcher::new(config),
            Err(FetchError::InvalidSelector { .. })
        ));
    }

    #[tokio::test]
    async fn test_rejects_invalid_url() {
        let fetcher = HttpFetcher::new(FetchConfig::default()).unwrap();

        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));

        let err = fetcher.fetch("ftp://example.com/events").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_keeps_selector() {
        let fetcher =
            HttpFetcher::new(FetchConfig::default().with_node_selector("li.event > h3")).unwrap();
        assert_eq!(fetcher.node_selector(), "li.event > h3");
        assert_eq!(fetcher.name(), "http");
    }
}
