//! Typed paths into the document hierarchy.
//!
//! A path is an ordered, non-empty sequence of [`Component`]s with an alternation
//! invariant: the segment at even index (0-based) always names a collection, the
//! segment at odd index always names a document (or the `*` placeholder for a
//! store-assigned id). This models the store's real constraint that collections
//! contain documents and documents contain named sub-collections, alternating
//! forever.
//!
//! The invariant is checked once, at construction; afterwards a path is an
//! immutable value. Length parity then tells you what a path resolves to:
//!
//! - [`CollectionPath`] has odd length and resolves to a collection reference.
//! - [`DocumentPath`] has even length and resolves to a single document reference.
//!
//! Composition appends exactly one component and flips the specialization, so it
//! can never break the parity:
//!
//! ```rust
//! use canopy::path::CollectionPath;
//!
//! let cities: CollectionPath = "countries/france/cities".parse()?;
//! let paris = cities.doc("paris");
//! assert_eq!(paris.to_string(), "countries/france/cities/paris");
//!
//! let landmarks = paris.collection("landmarks");
//! assert_eq!(landmarks.to_string(), "countries/france/cities/paris/landmarks");
//! # Ok::<(), canopy::path::PathError>(())
//! ```
//!
//! The string form joins segments with `/` and is stable, so it doubles as a cache
//! key. Parsing rejects empty input and empty segments rather than dropping them.

mod collection;
mod component;
mod document;
mod errors;

pub use collection::CollectionPath;
pub use component::{Component, NEW_DOCUMENT_TOKEN};
pub use document::DocumentPath;
pub use errors::{PathError, PathKind};

/// Parses raw segments into components, assigning variants by position.
pub(crate) fn parse_segments<I, S>(segments: I) -> Result<Vec<Component>, PathError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut components = Vec::new();
    for (index, segment) in segments.into_iter().enumerate() {
        components.push(Component::parse(index, segment.as_ref())?);
    }

    if components.is_empty() {
        return Err(PathError::Empty);
    }

    Ok(components)
}

/// Splits a `/`-joined path string into components.
pub(crate) fn split_path(path: &str) -> Result<Vec<Component>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    parse_segments(path.split('/'))
}

pub(crate) fn fmt_components(
    components: &[Component],
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    for (index, component) in components.iter().enumerate() {
        if index > 0 {
            write!(f, "/")?;
        }
        write!(f, "{component}")?;
    }
    Ok(())
}
