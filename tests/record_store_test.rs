//! End-to-end tests for the agent record store

use agent_wallboard_backend::store::{AgentRecordStore, StoreError};
use serde_json::Value;
use tempfile::tempdir;

fn store_with(contents: &str) -> (tempfile::TempDir, AgentRecordStore) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("agent-data.json");
    std::fs::write(&path, contents).unwrap();
    (dir, AgentRecordStore::new(path))
}

#[test]
fn update_status_flow() {
    let (_dir, store) = store_with(r#"{"agents":[{"id":"A1","status":"Available"}]}"#);

    let updated = store.update_status("A1", "Busy").unwrap();
    assert_eq!(updated.id, "A1");
    assert_eq!(updated.status, "Busy");
    let stamped = updated.last_status_change.expect("timestamp must be set");

    // The persisted file reflects the same record, ISO-8601 timestamp included
    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let agent = &persisted["agents"][0];
    assert_eq!(agent["id"], "A1");
    assert_eq!(agent["status"], "Busy");
    let persisted_stamp: chrono::DateTime<chrono::Utc> = agent["lastStatusChange"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(persisted_stamp, stamped);
}

#[test]
fn update_status_unknown_id_leaves_file_byte_identical() {
    let (_dir, store) = store_with(r#"{"agents":[{"id":"A1","status":"Available"}]}"#);
    let before = std::fs::read(store.path()).unwrap();

    match store.update_status("ZZZ", "Busy") {
        Err(StoreError::NotFound(message)) => assert!(message.contains("ZZZ")),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }

    assert_eq!(before, std::fs::read(store.path()).unwrap());
}

#[test]
fn unknown_fields_survive_a_full_update_cycle() {
    let (_dir, store) = store_with(
        r#"{"agents":[
            {"id":"A1","status":"Available","name":"Alice Anderson","extension":"1001",
             "skills":["sales"],"shift":{"start":"08:00","end":"16:00"}},
            {"id":"A2","status":"Busy","name":"Bob Seeger"}
        ]}"#,
    );

    store.update_status("A1", "Offline").unwrap();

    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    let alice = &persisted["agents"][0];
    assert_eq!(alice["name"], "Alice Anderson");
    assert_eq!(alice["extension"], "1001");
    assert_eq!(alice["skills"][0], "sales");
    assert_eq!(alice["shift"]["start"], "08:00");
    // The untouched record is carried over unchanged
    assert_eq!(persisted["agents"][1]["name"], "Bob Seeger");
    assert_eq!(persisted["agents"][1]["status"], "Busy");
}

#[test]
fn load_then_persist_is_semantically_lossless() {
    let (_dir, store) = store_with(
        r#"{"agents":[
            {"id":"A2","status":"Busy","lastStatusChange":"2026-08-01T09:30:00Z","desk":7},
            {"id":"A1","status":"Available"}
        ]}"#,
    );
    let original: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();

    let collection = store.load_all().unwrap();
    store.persist(&collection).unwrap();

    let persisted: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(original, persisted);
}

#[test]
fn record_order_is_preserved_across_persist() {
    let (_dir, store) = store_with(
        r#"{"agents":[{"id":"C","status":"x"},{"id":"A","status":"x"},{"id":"B","status":"x"}]}"#,
    );

    store.update_status("A", "y").unwrap();

    let collection = store.load_all().unwrap();
    let ids: Vec<&str> = collection.agents.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "A", "B"]);
}
