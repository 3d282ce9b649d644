//! Shared test fixtures: a decodable record type and a recording stub client.

use std::{cell::RefCell, rc::Rc};

use canopy::{
    codec::{Fields, Identified},
    snapshot::{ChangeKind, DocumentSnapshot, QuerySnapshot, RawChange, SnapshotMetadata},
    store::{CollectionRef, DocumentRef, StoreClient},
};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

/// A chat message record using the store's millisecond-epoch date convention.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Hash)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    pub body: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub sent_at: DateTime<Utc>,
}

impl Identified for Message {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

pub fn sent_at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

pub fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(fields) => fields,
        _ => panic!("expected an object"),
    }
}

pub fn message_fields(body: &str, sent_at_ms: i64) -> Fields {
    fields(serde_json::json!({ "body": body, "sent_at": sent_at_ms }))
}

pub fn message_doc(key: &str, body: &str, sent_at_ms: i64) -> DocumentSnapshot {
    DocumentSnapshot::new(key, message_fields(body, sent_at_ms), SnapshotMetadata::default())
}

/// A payload that fails to decode into [`Message`]: the `body` field is missing.
pub fn malformed_doc(key: &str) -> DocumentSnapshot {
    DocumentSnapshot::new(
        key,
        fields(serde_json::json!({ "sent_at": 0 })),
        SnapshotMetadata::default(),
    )
}

pub fn query(documents: Vec<DocumentSnapshot>) -> QuerySnapshot {
    QuerySnapshot::new(documents, Vec::new(), SnapshotMetadata::default())
}

pub fn change(
    kind: ChangeKind,
    document: DocumentSnapshot,
    old_index: usize,
    new_index: usize,
) -> RawChange {
    RawChange {
        kind,
        document,
        old_index,
        new_index,
    }
}

/// A store client stub recording every reference lookup it performs.
#[derive(Clone, Default)]
pub struct RecordingClient {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingClient {
    pub fn calls(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

pub struct StubCollection {
    path: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl StubCollection {
    pub fn path(&self) -> &str {
        &self.path
    }
}

pub struct StubDocument {
    path: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl StubDocument {
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl StoreClient for RecordingClient {
    type Collection = StubCollection;
    type Document = StubDocument;

    fn collection(&self, name: &str) -> StubCollection {
        self.log.borrow_mut().push(format!("collection({name})"));
        StubCollection {
            path: name.to_string(),
            log: self.log.clone(),
        }
    }
}

impl CollectionRef for StubCollection {
    type Document = StubDocument;

    fn doc(&self, id: &str) -> StubDocument {
        self.log.borrow_mut().push(format!("doc({id})"));
        StubDocument {
            path: format!("{}/{id}", self.path),
            log: self.log.clone(),
        }
    }

    fn new_doc(&self) -> StubDocument {
        self.log.borrow_mut().push("new_doc()".to_string());
        StubDocument {
            path: format!("{}/<auto>", self.path),
            log: self.log.clone(),
        }
    }
}

impl DocumentRef for StubDocument {
    type Collection = StubCollection;

    fn collection(&self, name: &str) -> StubCollection {
        self.log.borrow_mut().push(format!("collection({name})"));
        StubCollection {
            path: format!("{}/{name}", self.path),
            log: self.log.clone(),
        }
    }
}
