//! Errors raised while acquiring and parsing a hearing transcript.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Start => f.write_str("start"),
            MarkerKind::End => f.write_str("end"),
        }
    }
}

/// Structural failures of the segment extractor. All of them are fatal to a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("Document is empty, no section markers to find")]
    EmptyDocument,

    #[error("The {kind} marker was not found in the document: {marker:?}")]
    MarkerNotFound { kind: MarkerKind, marker: String },

    #[error("The end marker {end_marker:?} does not follow the start marker {start_marker:?}")]
    MarkersOutOfOrder {
        start_marker: String,
        end_marker: String,
    },
}

impl TranscriptError {
    /// An empty document counts as a missing marker.
    pub fn is_marker_not_found(&self) -> bool {
        matches!(
            self,
            TranscriptError::EmptyDocument | TranscriptError::MarkerNotFound { .. }
        )
    }
}

/// Failures of the document download. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
