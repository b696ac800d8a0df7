//! Conversions between [`OrderedMap`] and [`indexmap::IndexMap`].

use std::hash::Hash;

use indexmap::IndexMap;

use crate::OrderedMap;

impl<K, V> From<IndexMap<K, V>> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(map: IndexMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<OrderedMap<K, V>> for IndexMap<K, V>
where
    K: Eq + Hash,
{
    fn from(map: OrderedMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}
