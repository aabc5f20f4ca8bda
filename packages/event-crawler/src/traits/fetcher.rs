//! Fetcher trait: the document-fetch collaborator.
//!
//! A fetcher loads a listing page and hands back owned heading snapshots in
//! document order. Fetch failures are fatal to a run; everything after the
//! fetch works on the snapshots and cannot fail as a whole.
//!
//! # Usage
//!
//! ```rust,ignore
//! use event_crawler::{Crawler, EventFetcher, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new(FetchConfig::default())?;
//! let nodes = fetcher.fetch("https://example.com/events").await?;
//! let report = Crawler::default().crawl(&nodes);
//! ```

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::node::RawEventNode;

/// Source of event heading snapshots.
#[async_trait]
pub trait EventFetcher: Send + Sync {
    /// Load `uri` and snapshot every event heading on it, in document order.
    async fn fetch(&self, uri: &str) -> FetchResult<Vec<RawEventNode>>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str;
}
