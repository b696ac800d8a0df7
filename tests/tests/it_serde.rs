//! Integration tests for `OrderedMap` serialization with serde.
//!
//! Snapshots pin the JSON produced for maps whose insertion order differs from the
//! sorted key order.

use ordmap::{DynamicMap, OrderedMap, ordmap};
use serde_json::json;

#[test]
fn serialize_to_json_keeps_insertion_order() {
    //* Given
    let mut map = DynamicMap::new();
    map.set("name".to_string(), json!("ordmap"))
        .set("version".to_string(), json!(1))
        .set("tags".to_string(), json!(["collections", "ordered"]))
        .set("deprecated".to_string(), json!(null));

    //* When
    let json_output = serde_json::to_string_pretty(&map).expect("should serialize map to JSON");

    //* Then
    insta::assert_snapshot!(json_output, @r#"
    {
      "name": "ordmap",
      "version": 1,
      "tags": [
        "collections",
        "ordered"
      ],
      "deprecated": null
    }
    "#);
}

#[test]
fn debug_output_lists_entries_in_insertion_order() {
    //* Given
    let map = ordmap! {
        "zebra" => 26,
        "apple" => 1,
        "mango" => 13,
    };

    //* Then
    insta::assert_debug_snapshot!(map, @r#"
    {
        "zebra": 26,
        "apple": 1,
        "mango": 13,
    }
    "#);
}

#[test]
fn json_round_trip_preserves_entries_and_order() {
    //* Given
    let mut map: OrderedMap<String, Vec<u8>> = OrderedMap::new();
    map.set("z".to_string(), vec![3])
        .set("m".to_string(), vec![])
        .set("a".to_string(), vec![1, 2]);

    //* When
    let json_output = serde_json::to_string(&map).expect("should serialize map to JSON");
    let parsed: OrderedMap<String, Vec<u8>> =
        serde_json::from_str(&json_output).expect("should parse generated JSON");

    //* Then
    assert_eq!(parsed, map, "round trip should keep entries and their order");
    assert_eq!(parsed.keys(), ["z", "m", "a"]);
}

#[test]
fn deserialize_dynamic_map_from_json_document() {
    //* Given
    let document = r#"{
        "title": "ordered",
        "count": 3,
        "nested": {"inner": true},
        "list": [1, 2, 3]
    }"#;

    //* When
    let map: DynamicMap = serde_json::from_str(document).expect("should parse JSON document");

    //* Then
    assert_eq!(map.keys(), ["title", "count", "nested", "list"]);
    assert_eq!(map["count"], json!(3));
    assert_eq!(map.get("nested"), Some(&json!({"inner": true})));
}

#[test]
fn deserialize_rejects_non_map_input() {
    //* When
    let result = serde_json::from_str::<DynamicMap>("[1, 2, 3]");

    //* Then
    let err = result.expect_err("an array is not a map");
    assert!(
        err.to_string().contains("a map"),
        "error should name the expected input, got: {err}"
    );
}

#[test]
fn entries_json_keeps_order_through_value_conversion() {
    //* Given
    let mut map = DynamicMap::new();
    map.set("b".to_string(), json!(2)).set("a".to_string(), json!(1));

    //* When
    let entries = map.to_entries_json().expect("should convert entries to JSON");

    //* Then
    assert_eq!(entries, json!([["b", 2], ["a", 1]]));
    insta::assert_snapshot!(entries.to_string(), @r#"[["b",2],["a",1]]"#);
}

#[test]
fn serialize_struct_field_holding_ordered_map() {
    //* Given
    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Manifest {
        name: String,
        scripts: OrderedMap<String, String>,
    }

    let manifest = Manifest {
        name: "demo".to_string(),
        scripts: ordmap! {
            "test".to_string() => "cargo test".to_string(),
            "build".to_string() => "cargo build".to_string(),
        },
    };

    //* When
    let json_output = serde_json::to_string(&manifest).expect("should serialize manifest");
    let parsed: Manifest = serde_json::from_str(&json_output).expect("should parse manifest");

    //* Then
    assert_eq!(
        json_output,
        r#"{"name":"demo","scripts":{"test":"cargo test","build":"cargo build"}}"#
    );
    assert_eq!(parsed, manifest);
}
