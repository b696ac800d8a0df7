//! serde support for [`OrderedMap`].
//!
//! A map serializes as a serde map whose entries are emitted in insertion order, and
//! deserializes from any serde map by applying the entries in document order with
//! [`OrderedMap::set`] semantics.

use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::OrderedMap;

/// Upper bound on the capacity pre-allocated from a deserializer's size hint.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// An ordered map holding arbitrary JSON values under string keys.
pub type DynamicMap = OrderedMap<String, serde_json::Value>;

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Serialize,
    V: Serialize,
{
    /// Converts the map into a JSON array of `[key, value]` pairs, in insertion order.
    ///
    /// Unlike serializing the map as a JSON object, the resulting value keeps the entry
    /// order however `serde_json` orders object keys.
    ///
    /// # Errors
    ///
    /// Fails if a key or value cannot be represented as JSON.
    pub fn to_entries_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.entries())
    }
}

impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Eq + Hash + Serialize,
    V: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V> {
    marker: PhantomData<fn() -> OrderedMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ENTRIES);
        let mut map = OrderedMap::with_capacity(capacity);
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + Eq + Hash + Clone,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}
