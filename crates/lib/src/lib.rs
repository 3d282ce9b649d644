//!
//! Canopy: a typed addressing and change-mapping layer for hierarchical,
//! schemaless document stores (collections containing documents containing
//! sub-collections, to arbitrary depth).
//!
//! ## Core Concepts
//!
//! Canopy is built around a few key pieces:
//!
//! * **Paths (`path::CollectionPath`, `path::DocumentPath`)**: Validated, immutable
//!   addresses into the hierarchy. Even-indexed segments name collections, odd-indexed
//!   segments name documents, so a path's length parity determines whether it resolves
//!   to a collection (odd) or a single document (even).
//! * **Store boundary (`store::StoreClient`)**: The trait seam to the concrete store
//!   client. Canopy never talks to the network; it only folds a path into a chain of
//!   reference lookups against whatever client the application plugs in.
//! * **Codecs (`codec::Decoder`, `codec::JsonDecoder`)**: Injected decoders from raw
//!   key/value payloads to application types. Decoded values carry their identity via
//!   `codec::Identified`, and the store-assigned document key always wins over
//!   whatever id the payload decoded to.
//! * **Snapshots (`snapshot::DocumentSnapshot`, `snapshot::QuerySnapshot`)**: Raw
//!   materialized payloads plus pending-write/from-cache metadata, mapped into typed
//!   values, sets, keyed maps, or a structured change log.
//! * **Changes (`snapshot::Change`)**: Semantic insert/delete/move/update
//!   classifications derived from the store's raw change feed, including the
//!   position-delta tie-break that distinguishes an in-place update from a reorder.
//!
//! All mapping operations are synchronous, pure transformations over already
//! materialized data: they either return a typed value or a structured error, and
//! they never retry, block, or share mutable state.

pub mod codec;
pub mod path;
pub mod snapshot;
pub mod store;

pub use codec::{Decoder, Fields, Identified, JsonDecoder};
pub use path::{CollectionPath, Component, DocumentPath};
pub use snapshot::{Change, ChangeKind, DocumentSnapshot, QuerySnapshot, SnapshotMetadata};

/// Result type used throughout the Canopy library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Canopy library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured path construction errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured mapping and classification errors from the snapshot module
    #[error(transparent)]
    Snapshot(snapshot::SnapshotError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Path(_) => "path",
            Error::Snapshot(_) => "snapshot",
        }
    }

    /// Check if this error was raised while constructing a path.
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this error was caused by a payload that failed to decode.
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::Snapshot(err) => err.is_decode_error(),
            _ => false,
        }
    }

    /// Check if this error was raised while classifying a change event.
    pub fn is_classification_error(&self) -> bool {
        match self {
            Error::Snapshot(err) => err.is_classification_error(),
            _ => false,
        }
    }
}
