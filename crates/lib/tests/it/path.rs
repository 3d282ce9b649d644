//! Path construction, composition, and resolution against the stub client.

use canopy::path::{CollectionPath, DocumentPath, PathError};

use crate::helpers::RecordingClient;

#[test]
fn test_new_document_resolution_records_two_calls() {
    // Build `messages`, derive a new-document path, resolve it: exactly two
    // lookups, first the collection, then the auto-id document.
    let messages: CollectionPath = "messages".parse().unwrap();
    let draft = messages.new_doc();

    let client = RecordingClient::default();
    let reference = draft.resolve(&client);

    assert_eq!(client.calls(), vec!["collection(messages)", "new_doc()"]);
    assert_eq!(reference.path(), "messages/<auto>");
}

#[test]
fn test_deep_path_resolution_alternates() {
    let landmarks: CollectionPath = "countries/france/cities/paris/landmarks"
        .parse()
        .unwrap();

    let client = RecordingClient::default();
    let reference = landmarks.resolve(&client);

    assert_eq!(
        client.calls(),
        vec![
            "collection(countries)",
            "doc(france)",
            "collection(cities)",
            "doc(paris)",
            "collection(landmarks)",
        ]
    );
    assert_eq!(reference.path(), "countries/france/cities/paris/landmarks");
}

#[test]
fn test_document_path_resolution() {
    let paris: DocumentPath = "countries/france/cities/paris".parse().unwrap();

    let client = RecordingClient::default();
    let reference = paris.resolve(&client);

    assert_eq!(
        client.calls(),
        vec![
            "collection(countries)",
            "doc(france)",
            "collection(cities)",
            "doc(paris)",
        ]
    );
    assert_eq!(reference.path(), "countries/france/cities/paris");
}

#[test]
fn test_placeholder_resolves_mid_path() {
    // A `*` in the middle of a path asks the store for an auto-id document there.
    let path: CollectionPath = "countries/*/cities".parse().unwrap();

    let client = RecordingClient::default();
    path.resolve(&client);

    assert_eq!(
        client.calls(),
        vec!["collection(countries)", "new_doc()", "collection(cities)"]
    );
}

#[test]
fn test_composed_paths_resolve_like_parsed_ones() {
    let composed = CollectionPath::from_segments(["countries"])
        .unwrap()
        .doc("france")
        .collection("cities");
    let parsed: CollectionPath = "countries/france/cities".parse().unwrap();
    assert_eq!(composed, parsed);

    let client = RecordingClient::default();
    composed.resolve(&client);
    let composed_calls = client.calls();

    let client = RecordingClient::default();
    parsed.resolve(&client);
    assert_eq!(composed_calls, client.calls());
}

#[test]
fn test_display_is_a_stable_cache_key() {
    use std::collections::HashMap;

    let a: DocumentPath = "messages/m1".parse().unwrap();
    let b = CollectionPath::from_segments(["messages"]).unwrap().doc("m1");

    let mut cache: HashMap<String, u32> = HashMap::new();
    cache.insert(a.to_string(), 1);
    assert_eq!(cache.get(&b.to_string()), Some(&1));
}

#[test]
fn test_parse_errors_are_recoverable_values() {
    let err = "messages//m1".parse::<DocumentPath>().unwrap_err();
    assert!(err.is_empty_input());

    let err = "messages/m1/replies".parse::<DocumentPath>().unwrap_err();
    assert!(err.is_parity_error());

    // Module errors convert into the crate-level error type.
    let err: canopy::Error = PathError::Empty.into();
    assert!(err.is_path_error());
    assert_eq!(err.module(), "path");
}
