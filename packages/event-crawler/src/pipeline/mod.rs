//! Extraction pipeline.
//!
//! - [`date_range`] - free-form date-range parsing
//! - [`extract`] - one heading snapshot to one event record
//! - [`crawl`] - many snapshots to an [`ExtractionReport`](crate::ExtractionReport)

pub mod crawl;
pub mod date_range;
pub mod extract;

pub use crawl::Crawler;
pub use date_range::DateRangeParser;
pub use extract::NodeExtractor;
