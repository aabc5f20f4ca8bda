//! Typed errors for the event crawler.
//!
//! Per-node errors ([`ExtractionError`], [`DateParseError`]) are recoverable and
//! end up in the [`ExtractionReport`](crate::ExtractionReport). [`FetchError`] is
//! the only error that fails a whole run.

use chrono::NaiveDate;
use thiserror::Error;

/// A date-range string could not be turned into a start date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse date '{token}': {reason}")]
pub struct DateParseError {
    /// The offending token (or the whole input when no token was found)
    pub token: String,
    pub reason: DateParseReason,
}

impl DateParseError {
    pub fn new(token: impl Into<String>, reason: DateParseReason) -> Self {
        Self {
            token: token.into(),
            reason,
        }
    }
}

/// Why a date token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseReason {
    /// Input held nothing but whitespace and separators
    #[error("no date found")]
    Empty,

    /// Token matched none of the configured formats
    #[error("does not match any of {formats} date formats")]
    UnrecognizedFormat { formats: usize },

    /// More than a start and an end date
    #[error("expected at most two dates, found {count}")]
    TooManyDates { count: usize },

    /// End date parsed but falls before the start date
    #[error("end date precedes start date {start}")]
    EndBeforeStart { start: NaiveDate },
}

/// Structural mismatch around a heading node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// No list element under the heading's parent
    #[error("no sibling list found")]
    MissingList,

    /// List exists but cannot hold both location and date items
    #[error("expected at least 2 list items, found {found}")]
    TooFewItems { found: usize },

    /// Heading has no link child
    #[error("heading has no link")]
    MissingLink,

    /// Link child has no usable href
    #[error("link has no href")]
    MissingHref,

    /// Location item has no flag indicator
    #[error("location item has no flag indicator")]
    MissingFlag,

    /// Flag indicator's second class token is not a two-letter code
    #[error("flag indicator class '{class}' carries no country code")]
    MalformedFlag { class: String },
}

/// What went wrong while extracting a single node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Date(#[from] DateParseError),
}

/// A node could not be turned into an event record.
///
/// Carries the node's raw markup so the failure can be diagnosed from logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} for node: {snippet}")]
pub struct ExtractionError {
    pub snippet: String,
    pub reason: ExtractionFailure,
}

impl ExtractionError {
    pub fn new(snippet: impl Into<String>, reason: impl Into<ExtractionFailure>) -> Self {
        Self {
            snippet: snippet.into(),
            reason: reason.into(),
        }
    }

    /// True when the node failed on its date text rather than its shape.
    pub fn is_date_error(&self) -> bool {
        matches!(self.reason, ExtractionFailure::Date(_))
    }
}

/// Errors that can occur while fetching the listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The heading-node CSS selector does not parse
    #[error("invalid node selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Result type alias for date parsing.
pub type DateParseResult<T> = std::result::Result<T, DateParseError>;

/// Result type alias for node extraction.
pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_message_includes_snippet() {
        let err = ExtractionError::new("<a href=\"/x\">X</a>", ShapeError::MissingFlag);
        assert_eq!(
            err.to_string(),
            "location item has no flag indicator for node: <a href=\"/x\">X</a>"
        );
        assert!(!err.is_date_error());
    }

    #[test]
    fn test_date_error_wraps_transparently() {
        let err = ExtractionError::new(
            "<h4/>",
            DateParseError::new("Smarch 12", DateParseReason::UnrecognizedFormat { formats: 6 }),
        );
        assert!(err.is_date_error());
        assert!(err.to_string().starts_with("cannot parse date 'Smarch 12'"));
    }
}
