//! Serialization hook behaviour: classified fields rewritten to the JSON
//! channel, everything else passed through from the host.

use carbonated_core::{CarbonatorBuilder, Environment, Overrides};
use serde_json::{json, Value};

mod common;

use common::{create_test_model, ExampleModel};

fn create_json_carbonator() -> carbonated_core::Carbonator {
    CarbonatorBuilder::new()
        .with_timestamps(["completed_at"])
        .with_dates(["required_by"])
        .with_times(["pickup_time"])
        .with_environment(Environment::new().with_user_timezone("America/Toronto"))
        .with_overrides(Overrides {
            json_timestamp_format: Some("%Y-%m-%dT%H:%M:%S%:z".to_string()),
            json_timezone: Some("America/Vancouver".to_string()),
            ..Default::default()
        })
        .build()
}

#[test]
fn test_json_object_rewrites_classified_fields() {
    let carbonator = create_json_carbonator();
    let model = create_test_model();

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    // Timestamp rewritten into the JSON format and timezone
    assert_eq!(
        map.get("completed_at"),
        Some(&json!("2016-12-31T16:00:00-08:00"))
    );
    // Date and time fall back to their storage formats in Vancouver
    assert_eq!(map.get("required_by"), Some(&json!("2017-06-14")));
    assert_eq!(map.get("pickup_time"), Some(&json!("11:00:00")));
    // Unclassified attributes come through untouched
    assert_eq!(map.get("title"), Some(&json!("Pothole repair")));
}

#[test]
fn test_json_object_serializes_missing_values_as_null() {
    let carbonator = create_json_carbonator();
    let model = create_test_model()
        .with_absent("completed_at")
        .with("required_by", "");

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    assert_eq!(map.get("completed_at"), Some(&Value::Null));
    assert_eq!(map.get("required_by"), Some(&Value::Null));
}

#[test]
fn test_json_object_skips_fields_absent_from_host_output() {
    let carbonator = create_json_carbonator();
    let model = create_test_model();

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    // The markers are classified but the host never serialized them
    assert!(!map.contains_key("created_at"));
    assert!(!map.contains_key("deleted_at"));
}

#[test]
fn test_json_object_respects_custom_accessors() {
    let carbonator = create_json_carbonator();
    let model = create_test_model().with_custom_accessor("completed_at");

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    // The host-provided value wins when an accessor is defined
    assert_eq!(map.get("completed_at"), Some(&json!("2017-01-01 00:00:00")));
}

#[test]
fn test_json_object_merges_relations_last() {
    let carbonator = create_json_carbonator();
    let model = create_test_model()
        .with_relation("comments", json!([{"body": "Fixed!"}]))
        .with_relation("title", json!({"en": "Pothole repair"}));

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    assert_eq!(map.get("comments"), Some(&json!([{"body": "Fixed!"}])));
    // A relation sharing an attribute name replaces the attribute
    assert_eq!(map.get("title"), Some(&json!({"en": "Pothole repair"})));
}

#[test]
fn test_json_object_without_overrides_uses_storage_channel() {
    let carbonator = CarbonatorBuilder::new()
        .with_timestamps(["completed_at"])
        .build();
    let model = ExampleModel::new()
        .with("completed_at", "2017-01-01 00:00:00")
        .with("title", "Pothole repair");

    let map = carbonator
        .json_object(&model)
        .expect("Failed to serialize model");

    // JSON format and timezone both fall back to storage, so the text
    // round-trips unchanged
    assert_eq!(map.get("completed_at"), Some(&json!("2017-01-01 00:00:00")));
}
