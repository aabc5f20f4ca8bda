//! Data types for the event crawler.

pub mod config;
pub mod event;
pub mod node;
pub mod report;
