//! The decoding boundary between raw store payloads and application types.
//!
//! The store hands back schemaless key/value payloads ([`Fields`]). A [`Decoder`]
//! turns one of those payloads into a typed value; the mapping engine stays
//! decoupled from any particular serialization scheme by taking the decoder as an
//! injected collaborator. [`JsonDecoder`] is the default implementation, backed by
//! `serde_json`.
//!
//! Decoded values carry their identity through [`Identified`]. The store-assigned
//! document key is authoritative: the mapping layer always overwrites the decoded
//! value's own identifier with the key of the document it came from, so a stale or
//! spoofed `id` field in the payload never wins.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Raw key/value payload of a single document.
pub type Fields = serde_json::Map<String, Value>;

/// Error returned by a [`Decoder`] when a payload does not match the target shape.
///
/// Decode failures are pure data-shape errors: retrying the same input cannot fix
/// them, so they are always surfaced to the caller, never defaulted or swallowed.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct DecodeError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl DecodeError {
    /// Wraps an arbitrary codec error.
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        DecodeError(source.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError(Box::new(err))
    }
}

/// A codec decoding raw field maps into values of type `T`.
pub trait Decoder<T> {
    /// Decodes a raw payload into a `T`.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] if the payload does not match `T`'s shape, e.g. a
    /// required field is missing or a field has the wrong type.
    fn decode(&self, fields: &Fields) -> Result<T, DecodeError>;
}

/// The default codec, decoding through `serde_json`.
///
/// Date fields follow the store's milliseconds-since-epoch convention; record types
/// opt in with `#[serde(with = "chrono::serde::ts_milliseconds")]` on their date
/// fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl<T: DeserializeOwned> Decoder<T> for JsonDecoder {
    fn decode(&self, fields: &Fields) -> Result<T, DecodeError> {
        serde_json::from_value(Value::Object(fields.clone())).map_err(DecodeError::from)
    }
}

/// Types carrying the identity of the document they were decoded from.
pub trait Identified {
    /// The identifier of the document this value belongs to.
    fn id(&self) -> &str;

    /// Replaces this value's identifier.
    fn set_id(&mut self, id: String);
}
