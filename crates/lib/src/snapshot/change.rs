use super::{DocumentSnapshot, document::decode_identified, errors::SnapshotError};
use crate::{
    Result,
    codec::{Decoder, Identified},
};

/// The raw kind reported by the store's change feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// The document entered the observed batch.
    Added,
    /// The document left the observed batch.
    Removed,
    /// The document's content or position changed.
    Modified,
}

/// A single raw entry of the store's change feed.
///
/// `old_index` and `new_index` are the document's positions within the observed
/// batch before and after the change; which of the two is meaningful depends on
/// the kind, and [`Change::classify`] sorts that out.
#[derive(Debug, Clone, PartialEq)]
pub struct RawChange {
    pub kind: ChangeKind,
    pub document: DocumentSnapshot,
    pub old_index: usize,
    pub new_index: usize,
}

/// A classified change to one document within an observed batch.
///
/// Unlike the raw feed, the variants here carry the semantics a UI diff or
/// animation layer needs: a `Move` is a reorder, an `Update` is a change in
/// place, and each variant exposes only the positions that are meaningful for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change<T> {
    /// The document left the batch; it previously sat at `at`.
    Delete { value: T, at: usize },
    /// The document entered the batch at `at`.
    Insert { value: T, at: usize },
    /// The document changed and moved from `from` to `to`.
    Move { value: T, from: usize, to: usize },
    /// The document changed in place at `at`.
    Update { value: T, at: usize },
}

impl<T: Identified> Change<T> {
    /// Classifies a raw change event into its semantic variant.
    ///
    /// The event's document is decoded through `decoder` and stamped with its own
    /// key, then classified by kind. A `Modified` event alone is ambiguous between
    /// "content changed in place" and "content changed causing reordering";
    /// comparing the event's two indices resolves it deterministically, with
    /// position taking priority over content: unequal indices classify as a
    /// [`Change::Move`], equal indices as a [`Change::Update`].
    ///
    /// # Errors
    /// Returns [`SnapshotError::MissingPayload`] if the event's document carries no
    /// payload (the store guarantees change events reference existing documents),
    /// and [`SnapshotError::Classify`] if the payload fails to decode. A `Change`
    /// is never partially constructed.
    pub fn classify<D>(change: &RawChange, decoder: &D) -> Result<Self>
    where
        D: Decoder<T>,
    {
        let key = change.document.key();
        let Some(fields) = change.document.data() else {
            return Err(SnapshotError::MissingPayload {
                key: key.to_string(),
            }
            .into());
        };

        let value =
            decode_identified(key, fields, decoder).map_err(|source| SnapshotError::Classify {
                key: key.to_string(),
                source,
            })?;

        Ok(match change.kind {
            ChangeKind::Removed => Change::Delete {
                value,
                at: change.old_index,
            },
            ChangeKind::Added => Change::Insert {
                value,
                at: change.new_index,
            },
            ChangeKind::Modified if change.old_index != change.new_index => Change::Move {
                value,
                from: change.old_index,
                to: change.new_index,
            },
            ChangeKind::Modified => Change::Update {
                value,
                at: change.new_index,
            },
        })
    }
}

impl<T> Change<T> {
    /// The typed value this change carries.
    pub fn value(&self) -> &T {
        match self {
            Change::Delete { value, .. }
            | Change::Insert { value, .. }
            | Change::Move { value, .. }
            | Change::Update { value, .. } => value,
        }
    }

    /// Consumes the change, returning its value.
    pub fn into_value(self) -> T {
        match self {
            Change::Delete { value, .. }
            | Change::Insert { value, .. }
            | Change::Move { value, .. }
            | Change::Update { value, .. } => value,
        }
    }

    /// The document's position before the change. `None` for an insert.
    pub fn old_index(&self) -> Option<usize> {
        match self {
            Change::Delete { at, .. } | Change::Update { at, .. } => Some(*at),
            Change::Move { from, .. } => Some(*from),
            Change::Insert { .. } => None,
        }
    }

    /// The document's position after the change. `None` for a delete.
    pub fn new_index(&self) -> Option<usize> {
        match self {
            Change::Insert { at, .. } | Change::Update { at, .. } => Some(*at),
            Change::Move { to, .. } => Some(*to),
            Change::Delete { .. } => None,
        }
    }
}
