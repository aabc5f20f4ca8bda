//! Fetcher implementations.
//!
//! - `HttpFetcher` - downloads the listing page over HTTP
//! - `MockFetcher` - canned pages, for testing
//!
//! Both snapshot headings through [`html::snapshot_nodes`].

pub mod html;
mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

// Re-export from traits for convenience
pub use crate::traits::fetcher::EventFetcher;
