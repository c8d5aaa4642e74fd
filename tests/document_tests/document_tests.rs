//! Tests for the Document model
//!
//! These tests verify:
//! - Composite vs scalar classification
//! - Shallow merge rules
//! - Identity attachment
//! - On-disk encoding carries no identity

use filedb::Document;
use serde_json::{json, Value};

#[test]
fn test_objects_are_composite() {
    assert!(Document::from_value(json!({ "a": 1 })).is_composite());
    assert!(Document::from_value(json!({})).is_composite());
}

#[test]
fn test_non_objects_are_scalar() {
    for value in [json!(1), json!("text"), json!(true), json!(null), json!([1, 2])] {
        assert!(!Document::from_value(value).is_composite());
    }
}

// =============================================================================
// Merge Tests
// =============================================================================

#[test]
fn test_merge_overrides_and_preserves() {
    let stored = Document::from_value(json!({ "name": "john doe", "email": "john.doe@mail.com" }));
    let patch = Document::from_value(json!({ "name": "john doe senior", "age": 70 }));

    let merged = stored.merge(patch).into_value();

    assert_eq!(
        merged,
        json!({ "name": "john doe senior", "email": "john.doe@mail.com", "age": 70 })
    );
}

#[test]
fn test_merge_is_shallow() {
    let stored = Document::from_value(json!({ "address": { "city": "Lagos", "zip": "100001" } }));
    let patch = Document::from_value(json!({ "address": { "city": "Abuja" } }));

    let merged = stored.merge(patch).into_value();

    assert_eq!(merged, json!({ "address": { "city": "Abuja" } }));
}

#[test]
fn test_merge_keeps_existing_field_order() {
    let stored = Document::from_value(json!({ "a": 1, "b": 2, "c": 3 }));
    let patch = Document::from_value(json!({ "b": 20, "d": 4 }));

    let merged = stored.merge(patch).into_value();
    let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();

    assert_eq!(keys, ["a", "b", "c", "d"]);
}

#[test]
fn test_merge_scalar_patch_replaces_composite() {
    let stored = Document::from_value(json!({ "a": 1 }));

    let merged = stored.merge(Document::from_value(json!(42)));

    assert_eq!(merged, Document::Scalar(json!(42)));
}

#[test]
fn test_merge_composite_patch_replaces_scalar() {
    let stored = Document::from_value(json!("old"));

    let merged = stored.merge(Document::from_value(json!({ "a": 1 })));

    assert_eq!(merged.into_value(), json!({ "a": 1 }));
}

// =============================================================================
// Identity Tests
// =============================================================================

#[test]
fn test_with_identity_on_composite() {
    let doc = Document::from_value(json!({ "name": "john doe" }));

    let value = doc.with_identity("_id", "11111111");

    assert_eq!(value, json!({ "name": "john doe", "_id": "11111111" }));
}

#[test]
fn test_with_identity_overrides_stored_id() {
    let doc = Document::from_value(json!({ "_id": "stale" }));

    assert_eq!(doc.with_identity("_id", "fresh"), json!({ "_id": "fresh" }));
}

#[test]
fn test_with_identity_leaves_scalar_untouched() {
    let doc = Document::from_value(json!([1, 2, 3]));

    assert_eq!(doc.with_identity("_id", "x"), json!([1, 2, 3]));
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_to_vec_is_bare_payload() {
    let doc = Document::from_value(json!({ "name": "john doe" }));

    let bytes = doc.to_vec().unwrap();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed, json!({ "name": "john doe" }));
}

#[test]
fn test_from_slice_rejects_invalid_json() {
    assert!(Document::from_slice(b"{not json").is_err());
}
