//! Trait abstractions implemented by collaborators.

pub mod fetcher;
