//! Snapshot-to-typed-value mapping.
//!
//! The store client hands back raw, untyped payloads: a single document's field
//! map ([`DocumentSnapshot`]), or an ordered batch of documents plus a low-level
//! change feed ([`QuerySnapshot`]). This module turns those into strongly-typed,
//! identity-stamped domain values and a structured change log.
//!
//! # Core Types
//!
//! - [`SnapshotMetadata`] - pending-write / from-cache delivery flags
//! - [`DocumentSnapshot`] - one document's raw payload, mapped via an injected
//!   [`Decoder`](crate::codec::Decoder)
//! - [`QuerySnapshot`] - an ordered batch, mapped to arrays, sets, keyed maps, or
//!   classified changes
//! - [`Change`] - the semantic insert/delete/move/update classification of one raw
//!   change event
//!
//! Every mapping operation is a synchronous, pure transformation: it consumes
//! already-materialized data and either returns a value or a structured
//! [`SnapshotError`]. Batch operations are fail-fast; there is no retry anywhere,
//! since a malformed payload will not improve on a second attempt.

mod change;
mod document;
mod errors;
mod query;

pub use change::{Change, ChangeKind, RawChange};
pub use document::DocumentSnapshot;
pub use errors::SnapshotError;
pub use query::{MappedBatch, QuerySnapshot};

/// Store-provided delivery metadata for a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SnapshotMetadata {
    /// The snapshot contains local writes the store has not yet acknowledged.
    pub has_pending_writes: bool,
    /// The snapshot was served from the local cache rather than the store.
    pub is_from_cache: bool,
}
