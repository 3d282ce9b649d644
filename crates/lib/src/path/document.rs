use std::{fmt, str::FromStr};

use super::{
    CollectionPath, Component,
    errors::{PathError, PathKind},
};
use crate::store::{CollectionRef, DocumentRef, StoreClient};

/// A validated path resolving to a single document.
///
/// A document path has an even number of components and always ends on a document
/// id or the `*` placeholder. It is an immutable value: composition returns a new
/// path with one extra component and never touches the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    components: Vec<Component>,
}

impl DocumentPath {
    /// Builds a document path from raw string segments.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] for an empty segment list,
    /// [`PathError::EmptyComponent`] if any segment is the empty string, and
    /// [`PathError::InvalidParity`] if the segment count is odd.
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
        if components.len() % 2 == 1 {
            return Err(PathError::InvalidParity {
                kind: PathKind::Document,
                len: components.len(),
            });
        }

        Ok(Self { components })
    }

    pub(crate) fn new_unchecked(components: Vec<Component>) -> Self {
        debug_assert!(!components.is_empty() && components.len() % 2 == 0);
        Self { components }
    }

    /// Returns the components forming this path.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Returns the number of components in this path. Always even.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Paths are never empty; this exists for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the id of the document this path resolves to, or `None` if the path
    /// ends on the new-document placeholder.
    pub fn document_id(&self) -> Option<&str> {
        match self.components.last() {
            Some(Component::Document(id)) => Some(id),
            Some(Component::NewDocument) => None,
            _ => unreachable!("a document path ends on a document component"),
        }
    }

    /// Check if this path ends on the new-document placeholder.
    pub fn is_new_document(&self) -> bool {
        matches!(self.components.last(), Some(Component::NewDocument))
    }

    /// Returns the path of the collection containing this document.
    pub fn parent(&self) -> CollectionPath {
        let mut components = self.components.clone();
        components.pop();
        CollectionPath::new_unchecked(components)
    }

    /// Appends a sub-collection name, yielding the path of that collection.
    ///
    /// `name` must be non-empty and must not contain `/`.
    pub fn collection(&self, name: impl Into<String>) -> CollectionPath {
        let name = name.into();
        debug_assert!(!name.is_empty(), "collection name must not be empty");

        let mut components = self.components.clone();
        components.push(Component::Collection(name));
        CollectionPath::new_unchecked(components)
    }

    /// Resolves this path to a document reference by walking the client's
    /// reference-construction primitives, alternating collection and document
    /// lookups.
    ///
    /// The construction-time parity invariant guarantees the alternation; hitting a
    /// mismatched component here is a constructor bug, not a runtime condition, and
    /// panics.
    pub fn resolve<C: StoreClient>(&self, client: &C) -> C::Document {
        let mut parts = self.components.iter();

        let mut collection = match parts.next() {
            Some(Component::Collection(name)) => client.collection(name),
            _ => unreachable!("a path starts with a collection component"),
        };

        loop {
            let document = match parts.next() {
                Some(Component::Document(id)) => collection.doc(id),
                Some(Component::NewDocument) => collection.new_doc(),
                _ => unreachable!("a document path ends on a document component"),
            };
            match parts.next() {
                Some(Component::Collection(name)) => collection = document.collection(name),
                None => return document,
                Some(_) => unreachable!("even path positions hold collection components"),
            }
        }
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_components(&self.components, f)
    }
}

impl FromStr for DocumentPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_components(super::split_path(s)?)
    }
}
