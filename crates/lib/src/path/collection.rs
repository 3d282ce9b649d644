use std::{fmt, str::FromStr};

use super::{
    Component, DocumentPath,
    errors::{PathError, PathKind},
};
use crate::store::{CollectionRef, DocumentRef, StoreClient};

/// A validated path resolving to a collection.
///
/// A collection path has an odd number of components and always ends on a
/// collection name. It is an immutable value: composition returns a new path with
/// one extra component and never touches the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    components: Vec<Component>,
}

impl CollectionPath {
    /// Builds a collection path from raw string segments.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] for an empty segment list,
    /// [`PathError::EmptyComponent`] if any segment is the empty string, and
    /// [`PathError::InvalidParity`] if the segment count is even.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_components(super::parse_segments(segments)?)
    }

    pub(crate) fn from_components(components: Vec<Component>) -> Result<Self, PathError> {
        if components.is_empty() {
            return Err(PathError::Empty);
        }
        if components.len() % 2 == 0 {
            return Err(PathError::InvalidParity {
                kind: PathKind::Collection,
                len: components.len(),
            });
        }

        Ok(Self { components })
    }

    pub(crate) fn new_unchecked(components: Vec<Component>) -> Self {
        debug_assert!(components.len() % 2 == 1);
        Self { components }
    }

    /// Returns the components forming this path.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the number of components in this path. Always odd.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Paths are never empty; this exists for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the name of the collection this path resolves to.
    pub fn name(&self) -> &str {
        match self.components.last() {
            Some(Component::Collection(name)) => name,
            _ => unreachable!("a collection path ends on a collection component"),
        }
    }

    /// Returns the path of the document containing this collection, or `None` for
    /// a top-level collection.
    pub fn parent(&self) -> Option<DocumentPath> {
        if self.components.len() == 1 {
            return None;
        }
        let mut components = self.components.clone();
        components.pop();
        Some(DocumentPath::new_unchecked(components))
    }

    /// Appends a document id, yielding the path of that document.
    ///
    /// `id` must be non-empty and must not contain `/`.
    pub fn doc(&self, id: impl Into<String>) -> DocumentPath {
        let id = id.into();
        debug_assert!(!id.is_empty(), "document id must not be empty");

        let mut components = self.components.clone();
        components.push(Component::Document(id));
        DocumentPath::new_unchecked(components)
    }

    /// Appends the new-document placeholder, yielding the path of a document whose
    /// identifier the store will assign at resolution time.
    pub fn new_doc(&self) -> DocumentPath {
        let mut components = self.components.clone();
        components.push(Component::NewDocument);
        DocumentPath::new_unchecked(components)
    }

    /// Resolves this path to a collection reference by walking the client's
    /// reference-construction primitives, alternating collection and document
    /// lookups.
    ///
    /// The construction-time parity invariant guarantees the alternation; hitting a
    /// mismatched component here is a constructor bug, not a runtime condition, and
    /// panics.
    pub fn resolve<C: StoreClient>(&self, client: &C) -> C::Collection {
        let mut parts = self.components.iter();

        let mut collection = match parts.next() {
            Some(Component::Collection(name)) => client.collection(name),
            _ => unreachable!("a path starts with a collection component"),
        };

        while let Some(part) = parts.next() {
            let document = match part {
                Component::Document(id) => collection.doc(id),
                Component::NewDocument => collection.new_doc(),
                Component::Collection(_) => {
                    unreachable!("odd path positions hold document components")
                }
            };
            collection = match parts.next() {
                Some(Component::Collection(name)) => document.collection(name),
                _ => unreachable!("a collection path ends on a collection component"),
            };
        }

        collection
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_components(&self.components, f)
    }
}

impl FromStr for CollectionPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_components(super::split_path(s)?)
    }
}
