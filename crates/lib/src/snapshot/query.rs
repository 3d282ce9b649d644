use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use super::{
    Change, DocumentSnapshot, RawChange, SnapshotMetadata, document::decode_identified,
    errors::SnapshotError,
};
use crate::{
    Result,
    codec::{Decoder, Fields, Identified},
};

/// Typed values mapped from a batch, with per-item and aggregate metadata.
///
/// `values` and `metadata` are parallel arrays in batch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedBatch<T> {
    pub values: Vec<T>,
    pub metadata: Vec<SnapshotMetadata>,
    pub query_metadata: Option<SnapshotMetadata>,
}

/// An ordered batch of document snapshots plus the raw change feed that produced
/// it.
///
/// The batch is already resolved: what belongs in it, and in which order, was
/// decided by the store. Canopy only converts it into typed shapes. Aggregate
/// metadata is `None` only for a batch with no source snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuerySnapshot {
    documents: Vec<DocumentSnapshot>,
    changes: Vec<RawChange>,
    metadata: Option<SnapshotMetadata>,
}

impl QuerySnapshot {
    /// Creates a batch from the store's ordered documents and change feed.
    pub fn new(
        documents: Vec<DocumentSnapshot>,
        changes: Vec<RawChange>,
        metadata: SnapshotMetadata,
    ) -> Self {
        Self {
            documents,
            changes,
            metadata: Some(metadata),
        }
    }

    /// Creates an absent batch: no documents, no changes, no source metadata.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The snapshots forming this batch, in store emission order.
    pub fn documents(&self) -> &[DocumentSnapshot] {
        &self.documents
    }

    /// The raw change feed, in store emission order.
    pub fn changes(&self) -> &[RawChange] {
        &self.changes
    }

    /// Aggregate delivery metadata, or `None` for an absent batch.
    pub fn metadata(&self) -> Option<SnapshotMetadata> {
        self.metadata
    }

    /// Returns the number of documents in the batch.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the batch holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Maps the batch to raw payloads keyed by document key.
    ///
    /// An identity transform: no decoding happens and this never fails. Documents
    /// without a payload are omitted.
    pub fn to_map(&self) -> HashMap<String, Fields> {
        self.documents
            .iter()
            .filter_map(|document| {
                document
                    .data()
                    .map(|fields| (document.key().to_string(), fields.clone()))
            })
            .collect()
    }

    /// Maps the batch to a typed array, preserving batch order.
    ///
    /// Fail-fast: the first document that fails to decode aborts the whole batch
    /// and its error is returned; values decoded before it are discarded, never
    /// merged into a partial result.
    pub fn to_vec<T, D>(&self, decoder: &D) -> Result<Vec<T>>
    where
        T: Identified,
        D: Decoder<T>,
    {
        let values = self
            .documents
            .iter()
            .map(|document| decode_document(document, decoder))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(count = values.len(), "mapped query snapshot batch");
        Ok(values)
    }

    /// Maps the batch to a set, deduplicating by value equality.
    ///
    /// Decodes to an array first, with the same fail-fast rule as
    /// [`to_vec`](Self::to_vec). Relative order is not preserved.
    pub fn to_set<T, D>(&self, decoder: &D) -> Result<HashSet<T>>
    where
        T: Identified + Eq + Hash,
        D: Decoder<T>,
    {
        Ok(self.to_vec(decoder)?.into_iter().collect())
    }

    /// Maps the batch to a typed array with per-item and aggregate metadata.
    ///
    /// The result's `values` and `metadata` are parallel same-length arrays in
    /// batch order; same fail-fast rule as [`to_vec`](Self::to_vec).
    pub fn to_vec_with_metadata<T, D>(&self, decoder: &D) -> Result<MappedBatch<T>>
    where
        T: Identified,
        D: Decoder<T>,
    {
        let mut values = Vec::with_capacity(self.documents.len());
        let mut metadata = Vec::with_capacity(self.documents.len());

        for document in &self.documents {
            values.push(decode_document(document, decoder)?);
            metadata.push(document.metadata());
        }

        Ok(MappedBatch {
            values,
            metadata,
            query_metadata: self.metadata,
        })
    }

    /// Classifies the batch's raw change feed, preserving event order.
    ///
    /// Each entry is classified via [`Change::classify`]; the first classification
    /// error aborts the whole feed.
    pub fn to_changes<T, D>(&self, decoder: &D) -> Result<Vec<Change<T>>>
    where
        T: Identified,
        D: Decoder<T>,
    {
        self.changes
            .iter()
            .map(|change| Change::classify(change, decoder))
            .collect()
    }
}

fn decode_document<T, D>(document: &DocumentSnapshot, decoder: &D) -> Result<T>
where
    T: Identified,
    D: Decoder<T>,
{
    let Some(fields) = document.data() else {
        return Err(SnapshotError::MissingPayload {
            key: document.key().to_string(),
        }
        .into());
    };

    decode_identified(document.key(), fields, decoder)
        .map_err(|source| {
            SnapshotError::Decode {
                key: document.key().to_string(),
                source,
            }
            .into()
        })
}
