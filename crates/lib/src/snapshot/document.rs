use super::{SnapshotMetadata, errors::SnapshotError};
use crate::{
    Result,
    codec::{DecodeError, Decoder, Fields, Identified},
};

/// A materialized view of a single document at a point in time.
///
/// Carries the store-assigned document key, the raw field map (or `None` if the
/// document does not exist), and the store's delivery metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    key: String,
    fields: Option<Fields>,
    metadata: SnapshotMetadata,
}

impl DocumentSnapshot {
    /// Creates a snapshot of an existing document.
    pub fn new(key: impl Into<String>, fields: Fields, metadata: SnapshotMetadata) -> Self {
        Self {
            key: key.into(),
            fields: Some(fields),
            metadata,
        }
    }

    /// Creates a snapshot of a document that does not exist.
    pub fn missing(key: impl Into<String>, metadata: SnapshotMetadata) -> Self {
        Self {
            key: key.into(),
            fields: None,
            metadata,
        }
    }

    /// The store-assigned key of this document.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Check if the document existed when the snapshot was taken.
    pub fn exists(&self) -> bool {
        self.fields.is_some()
    }

    /// The raw field map, or `None` if the document does not exist.
    pub fn data(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    /// The store's delivery metadata for this snapshot.
    pub fn metadata(&self) -> SnapshotMetadata {
        self.metadata
    }

    /// Maps this snapshot to a typed value.
    ///
    /// A non-existing document maps to `Ok(None)`. Otherwise the payload is decoded
    /// through `decoder` and the decoded value's identifier is overwritten with the
    /// document key; the key is authoritative, the payload's own id field never
    /// wins.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Decode`] if the payload does not match `T`'s shape.
    pub fn map<T, D>(&self, decoder: &D) -> Result<Option<T>>
    where
        T: Identified,
        D: Decoder<T>,
    {
        let Some(fields) = &self.fields else {
            return Ok(None);
        };

        let value = decode_identified(&self.key, fields, decoder).map_err(|source| {
            SnapshotError::Decode {
                key: self.key.clone(),
                source,
            }
        })?;

        Ok(Some(value))
    }

    /// Maps this snapshot to a typed value paired with its delivery metadata.
    ///
    /// Same decode path and failure modes as [`map`](Self::map).
    pub fn map_with_metadata<T, D>(&self, decoder: &D) -> Result<Option<(T, SnapshotMetadata)>>
    where
        T: Identified,
        D: Decoder<T>,
    {
        Ok(self.map(decoder)?.map(|value| (value, self.metadata)))
    }
}

/// Decodes `fields` and stamps `key` as the value's identifier.
pub(crate) fn decode_identified<T, D>(
    key: &str,
    fields: &Fields,
    decoder: &D,
) -> std::result::Result<T, DecodeError>
where
    T: Identified,
    D: Decoder<T>,
{
    let mut value = decoder.decode(fields)?;
    value.set_id(key.to_string());
    Ok(value)
}
