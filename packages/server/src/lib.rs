// Event Calendar API - Server Core
//
// Serves the events extracted from the configured listing page as JSON.
// Extraction itself lives in the event-crawler crate.

pub mod config;
pub mod server;

pub use config::*;
