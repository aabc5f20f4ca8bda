//! Event listing extraction library.
//!
//! Turns a semi-structured event listing page into [`EventRecord`]s. Each
//! event heading is snapshotted once, then extracted independently: a broken
//! entry becomes a failure in the [`ExtractionReport`] and never takes the
//! rest of the page down with it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use event_crawler::{Crawler, CrawlConfig, EventFetcher, FetchConfig, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new(FetchConfig::default())?;
//! let nodes = fetcher.fetch("https://example.com/").await?;
//!
//! let report = Crawler::new(&CrawlConfig::default()).crawl(&nodes);
//! for event in report.events() {
//!     println!("{} ({})", event.name, event.month);
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - snapshots, records, reports and configuration
//! - [`pipeline`] - date-range parsing, node extraction and crawling
//! - [`traits`] - the fetcher abstraction
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`testing`] - listing-page fixtures

pub mod error;
pub mod fetchers;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{
    DateParseError, DateParseReason, ExtractionError, ExtractionFailure, FetchError, ShapeError,
};
pub use fetchers::{HttpFetcher, MockFetcher};
pub use pipeline::{Crawler, DateRangeParser, NodeExtractor};
pub use traits::fetcher::EventFetcher;
pub use types::{
    config::{CrawlConfig, EndDatePolicy, FetchConfig, DEFAULT_DATE_FORMATS, DEFAULT_NODE_SELECTOR},
    event::{DateRange, EventRecord},
    node::{ListItem, NodeLink, RawEventNode},
    report::{ExtractionReport, NodeFailure},
};

// chrono's locale type, needed to build a CrawlConfig
pub use chrono::Locale;
