//! Error types for snapshot mapping and change classification.

use thiserror::Error;

use crate::codec::DecodeError;

/// Structured error types for snapshot mapping operations.
///
/// All batch operations are fail-fast: the first error aborts the remaining work
/// in that call and is returned to the caller, never merged with partial results.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// A raw payload did not match the requested type's shape
    #[error("Decoding document '{key}' failed: {source}")]
    Decode { key: String, source: DecodeError },

    /// A change event's payload did not match the requested type's shape
    #[error("Classifying change event for document '{key}' failed: {source}")]
    Classify { key: String, source: DecodeError },

    /// A document that should carry a payload does not
    #[error("Document '{key}' has no payload to decode")]
    MissingPayload { key: String },
}

impl SnapshotError {
    /// Check if this error was caused by a payload that failed to decode.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, SnapshotError::Decode { .. })
    }

    /// Check if this error was raised while classifying a change event.
    pub fn is_classification_error(&self) -> bool {
        matches!(self, SnapshotError::Classify { .. })
    }

    /// Check if this error was caused by a missing payload.
    pub fn is_missing_payload(&self) -> bool {
        matches!(self, SnapshotError::MissingPayload { .. })
    }

    /// Get the document key associated with this error.
    pub fn key(&self) -> &str {
        match self {
            SnapshotError::Decode { key, .. }
            | SnapshotError::Classify { key, .. }
            | SnapshotError::MissingPayload { key } => key,
        }
    }
}

impl From<SnapshotError> for crate::Error {
    fn from(err: SnapshotError) -> Self {
        crate::Error::Snapshot(err)
    }
}
