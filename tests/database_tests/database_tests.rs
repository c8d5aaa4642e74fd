//! Tests for Database
//!
//! These tests verify:
//! - Root initialization is idempotent and best-effort
//! - Config validation and environment override
//! - Collection binding, listing, dropping
//! - Whole-database teardown

use std::sync::Arc;

use filedb::config::{DB_NAME_ENV, DEFAULT_DATABASE_NAME};
use filedb::fs::RecordingSink;
use filedb::{Config, Database, FileDbError};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn test_config(temp_dir: &TempDir) -> Config {
    Config::builder()
        .base_dir(temp_dir.path())
        .database_name("testdb")
        .build()
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_root() {
    let temp_dir = TempDir::new().unwrap();

    let db = Database::open(test_config(&temp_dir)).unwrap();

    assert_eq!(db.root(), temp_dir.path().join("testdb"));
    assert!(db.root().is_dir());
}

#[test]
fn test_open_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let sink = Arc::new(RecordingSink::new());

    let first = Database::with_sink(test_config(&temp_dir), sink.clone()).unwrap();
    first.collection("users").unwrap().create("a", &json!({ "x": 1 })).unwrap();

    let second = Database::with_sink(test_config(&temp_dir), sink.clone()).unwrap();

    assert!(sink.is_empty());
    assert_eq!(
        second.collection("users").unwrap().get("a"),
        Some(json!({ "x": 1, "_id": "a" }))
    );
}

#[test]
fn test_open_unwritable_root_does_not_fail() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("file");
    std::fs::write(&blocker, b"").unwrap();
    let config = Config::builder()
        .base_dir(&blocker)
        .database_name("testdb")
        .build();
    let sink = Arc::new(RecordingSink::new());

    let db = Database::with_sink(config, sink.clone()).unwrap();

    assert!(!db.root().exists());
    assert_eq!(sink.for_op("create_directory").len(), 1);
}

#[test]
fn test_open_rejects_empty_database_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .database_name("")
        .build();

    let err = Database::open(config).unwrap_err();

    assert!(matches!(err, FileDbError::Config(_)));
}

#[test]
fn test_open_rejects_zero_read_parallelism() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .read_parallelism(0)
        .build();

    assert!(matches!(Database::open(config), Err(FileDbError::Config(_))));
}

#[test]
fn test_config_from_env_overrides_database_name() {
    let config = Config::from_env_with(|key| (key == DB_NAME_ENV).then(|| "envdb".to_string()));

    assert_eq!(config.database_name, "envdb");
}

#[test]
fn test_config_from_env_without_override_uses_default() {
    let config = Config::from_env_with(|_| None);

    assert_eq!(config.database_name, DEFAULT_DATABASE_NAME);
}

#[test]
fn test_config_from_env_ignores_empty_name() {
    let config = Config::from_env_with(|_| Some(String::new()));

    assert_eq!(config.database_name, DEFAULT_DATABASE_NAME);
}

#[test]
fn test_custom_identity_field() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .base_dir(temp_dir.path())
        .database_name("testdb")
        .identity_field("id")
        .build();
    let db = Database::open(config).unwrap();
    let users = db.collection("users").unwrap();

    let user = users.create("42", &json!({ "name": "john doe" })).unwrap();

    assert_eq!(user, json!({ "name": "john doe", "id": "42" }));
    assert_eq!(users.identity_field(), "id");
}

// =============================================================================
// Collection Tests
// =============================================================================

#[test]
fn test_collection_binding_does_no_io() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();

    let users = db.collection("users").unwrap();

    assert_eq!(users.name(), "users");
    assert_eq!(users.path(), db.root().join("users"));
    assert!(!users.path().exists());
    assert_eq!(users.get("anything"), None);
    assert!(!users.path().exists());
}

#[test]
fn test_collection_rejects_invalid_name() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();

    for name in ["", "..", "a/b"] {
        assert!(matches!(
            db.collection(name),
            Err(FileDbError::InvalidName { .. })
        ));
    }
}

#[test]
fn test_list_collections() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();
    db.collection("users").unwrap().create("a", &1).unwrap();
    db.collection("orders").unwrap().create("b", &2).unwrap();
    std::fs::write(db.root().join("stray.txt"), b"").unwrap();

    assert_eq!(db.list_collections().unwrap(), vec!["orders", "users"]);
}

#[test]
fn test_drop_collection() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();
    let users = db.collection("users").unwrap();
    users.create("a", &json!({})).unwrap();
    users.create("b", &json!({})).unwrap();

    db.drop_collection("users").unwrap();

    assert!(!users.path().exists());
    assert_eq!(users.get("a"), None);
    assert!(db.root().is_dir());
}

#[test]
fn test_drop_missing_collection_is_ok() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();

    db.drop_collection("never").unwrap();
}

#[test]
fn test_destroy_removes_root() {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::open(test_config(&temp_dir)).unwrap();
    db.collection("users").unwrap().create("a", &json!({})).unwrap();
    let root = db.root().to_path_buf();

    db.destroy();

    assert!(!root.exists());
}

#[test]
fn test_reopen_after_destroy() {
    let temp_dir = TempDir::new().unwrap();
    Database::open(test_config(&temp_dir)).unwrap().destroy();

    let db = Database::open(test_config(&temp_dir)).unwrap();

    assert!(db.root().is_dir());
    assert!(db.list_collections().unwrap().is_empty());
}
