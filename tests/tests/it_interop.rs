//! Integration tests for building `OrderedMap` values from other collections and
//! converting them back.

use indexmap::IndexMap;
use ordmap::{OrderedMap, ordmap};
use testlib::map_of;

#[test]
fn collect_from_iterator_applies_set_semantics() {
    //* Given
    let pairs = vec![("b", 1), ("a", 2), ("b", 3), ("c", 4)];

    //* When
    let map: OrderedMap<&str, i32> = pairs.into_iter().collect();

    //* Then
    assert_eq!(map.keys(), ["b", "a", "c"], "duplicates should keep their first position");
    assert_eq!(map["b"], 3, "duplicates should keep their last value");
}

#[test]
fn extend_appends_fresh_keys_and_updates_existing_ones() {
    //* Given
    let mut map = ordmap! { "x" => 1, "y" => 2 };

    //* When
    map.extend([("z", 3), ("x", 10)]);

    //* Then
    assert_eq!(map.entries(), [(&"x", &10), (&"y", &2), (&"z", &3)]);
}

#[test]
fn from_array_builds_map_in_array_order() {
    //* When
    let map = OrderedMap::from([(3, "three"), (1, "one"), (2, "two")]);

    //* Then
    assert_eq!(map.keys(), [3, 1, 2]);
}

#[test]
fn borrowed_iteration_matches_entries() {
    //* Given
    let map = map_of(&["q", "w", "e"]);

    //* When
    let mut visited = Vec::new();
    for (key, value) in &map {
        visited.push((key.as_str(), *value));
    }

    //* Then
    assert_eq!(visited, [("q", 0), ("w", 1), ("e", 2)]);
    assert_eq!(map.iter().len(), map.size());
}

#[test]
fn owned_iteration_consumes_map_in_order() {
    //* Given
    let mut map = map_of(&["q", "w", "e"]);
    map.delete("w");

    //* When
    let keys: Vec<String> = map.into_iter().map(|(key, _)| key).collect();

    //* Then
    assert_eq!(keys, ["q", "e"]);
}

#[test]
fn convert_to_index_map_preserves_order() {
    //* Given
    let map = map_of(&["gamma", "alpha", "beta"]);

    //* When
    let index_map: IndexMap<String, usize> = map.into();

    //* Then
    let keys: Vec<&str> = index_map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["gamma", "alpha", "beta"]);
    assert_eq!(index_map["alpha"], 1);
}

#[test]
fn convert_from_index_map_preserves_order() {
    //* Given
    let mut index_map = IndexMap::new();
    index_map.insert("second", 2);
    index_map.insert("first", 1);

    //* When
    let map = OrderedMap::from(index_map);

    //* Then
    assert_eq!(map.keys(), ["second", "first"]);
    assert_eq!(map.values(), [&2, &1]);
}
