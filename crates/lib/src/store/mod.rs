//! The boundary to the concrete document-store client.
//!
//! Canopy does not own a network client. Path resolution only needs the store's
//! reference-construction primitives: a root handle that hands out top-level
//! collection references, collection references that hand out document references,
//! and document references that hand out sub-collection references. A concrete
//! client implements these three traits; everything else the client can do
//! (reads, writes, listeners, transactions) stays on its side of the seam.
//!
//! All three lookups are cheap, local, non-blocking reference constructions in the
//! store client's contract, not network round-trips.

/// Root handle of a document store.
pub trait StoreClient {
    /// Reference to a collection in the store.
    type Collection: CollectionRef<Document = Self::Document>;
    /// Reference to a single document in the store.
    type Document: DocumentRef<Collection = Self::Collection>;

    /// Returns a reference to the top-level collection `name`.
    fn collection(&self, name: &str) -> Self::Collection;
}

/// A reference to a collection, able to address the documents it contains.
pub trait CollectionRef {
    /// Reference to a document within this collection.
    type Document;

    /// Returns a reference to the document `id` within this collection.
    fn doc(&self, id: &str) -> Self::Document;

    /// Returns a reference to a new document whose identifier the store assigns.
    fn new_doc(&self) -> Self::Document;
}

/// A reference to a document, able to address its named sub-collections.
pub trait DocumentRef {
    /// Reference to a sub-collection under this document.
    type Collection;

    /// Returns a reference to the sub-collection `name` under this document.
    fn collection(&self, name: &str) -> Self::Collection;
}
