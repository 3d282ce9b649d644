//! Error types for path construction.
//!
//! Path errors are raised while building a path and are always recoverable by the
//! caller: reject the bad input and do not proceed. A path that constructed
//! successfully can never fail later, so resolution has no error type.

use std::fmt;

use thiserror::Error;

/// The specialization a path was being constructed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// The path should resolve to a collection (odd component count).
    Collection,
    /// The path should resolve to a single document (even component count).
    Document,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Collection => write!(f, "collection"),
            PathKind::Document => write!(f, "document"),
        }
    }
}

/// Structured error types for path construction.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path has no components at all
    #[error("Path is empty")]
    Empty,

    /// A segment of the path is the empty string
    #[error("Path component at index {index} is empty")]
    EmptyComponent { index: usize },

    /// The component count has the wrong parity for the requested path kind
    #[error("A path of {len} components does not resolve to a {kind}")]
    InvalidParity { kind: PathKind, len: usize },
}

impl PathError {
    /// Check if this error was caused by empty input or an empty segment.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, PathError::Empty | PathError::EmptyComponent { .. })
    }

    /// Check if this error was caused by a component-count parity mismatch.
    pub fn is_parity_error(&self) -> bool {
        matches!(self, PathError::InvalidParity { .. })
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
