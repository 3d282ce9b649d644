use std::fmt;

use super::errors::PathError;

/// Segment literal marking "let the store assign an identifier here".
pub const NEW_DOCUMENT_TOKEN: &str = "*";

/// A single segment of a path.
///
/// The hierarchy alternates: collections contain documents, documents contain
/// named sub-collections. Which variant a raw segment parses to is decided by its
/// position, not its spelling: even-indexed segments are always collection names,
/// odd-indexed segments are document ids, with the literal `*` standing for a
/// document whose id the store will assign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// A named collection.
    Collection(String),
    /// A specific document.
    Document(String),
    /// A document whose identifier the store assigns; serializes as `*`.
    NewDocument,
}

impl Component {
    /// Parses the segment at `index` of a path.
    ///
    /// # Errors
    /// Returns [`PathError::EmptyComponent`] if the segment is the empty string.
    /// Empty segments are an error, never silently dropped.
    pub(crate) fn parse(index: usize, segment: &str) -> Result<Self, PathError> {
        if segment.is_empty() {
            return Err(PathError::EmptyComponent { index });
        }

        if index % 2 == 0 {
            Ok(Component::Collection(segment.to_string()))
        } else if segment == NEW_DOCUMENT_TOKEN {
            Ok(Component::NewDocument)
        } else {
            Ok(Component::Document(segment.to_string()))
        }
    }

    /// Returns the segment as it appears in the string form of a path.
    pub fn as_str(&self) -> &str {
        match self {
            Component::Collection(name) | Component::Document(name) => name,
            Component::NewDocument => NEW_DOCUMENT_TOKEN,
        }
    }

    /// Check if this component names a collection.
    pub fn is_collection(&self) -> bool {
        matches!(self, Component::Collection(_))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
