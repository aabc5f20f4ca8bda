//! Crawl output: records plus per-node failures.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ExtractionError;
use crate::types::event::EventRecord;

/// Result of crawling a collection of heading nodes.
///
/// Every input node contributes exactly one entry: a record in `events`
/// or a failure in `failures`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionReport {
    events: Vec<EventRecord>,
    failures: Vec<NodeFailure>,
}

/// A node that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFailure {
    /// Position of the node in the crawl input
    pub position: usize,
    pub error: ExtractionError,
}

impl ExtractionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: EventRecord) {
        self.events.push(event);
    }

    pub fn push_failure(&mut self, position: usize, error: ExtractionError) {
        self.failures.push(NodeFailure { position, error });
    }

    /// Extracted records, in input order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn failures(&self) -> &[NodeFailure] {
        &self.failures
    }

    /// Number of nodes this report accounts for.
    pub fn node_count(&self) -> usize {
        self.events.len() + self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }

    pub fn into_parts(self) -> (Vec<EventRecord>, Vec<NodeFailure>) {
        (self.events, self.failures)
    }
}

impl Serialize for NodeFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("NodeFailure", 3)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("snippet", &self.error.snippet)?;
        state.serialize_field("reason", &self.error.reason.to_string())?;
        state.end()
    }
}
