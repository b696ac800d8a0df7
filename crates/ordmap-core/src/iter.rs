//! Insertion-ordered iterators over an [`OrderedMap`](crate::OrderedMap).
//!
//! Both iterators walk the key order and resolve each value by key, so they yield
//! entries in exactly the order reported by [`OrderedMap::keys`](crate::OrderedMap::keys).

use std::{collections::HashMap, hash::Hash, iter::FusedIterator, slice, vec};

/// An iterator over the `(&K, &V)` entries of a map, in insertion order.
///
/// Created by [`OrderedMap::iter`](crate::OrderedMap::iter).
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    keys: slice::Iter<'a, K>,
    store: &'a HashMap<K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(keys: &'a [K], store: &'a HashMap<K, V>) -> Self {
        Self {
            keys: keys.iter(),
            store,
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            store: self.store,
        }
    }
}

impl<'a, K: Eq + Hash, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        let key = self.keys.next()?;
        store.get(key).map(|value| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let store = self.store;
        let key = self.keys.next_back()?;
        store.get(key).map(|value| (key, value))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Eq + Hash, V> FusedIterator for Iter<'_, K, V> {}

/// An owning iterator over the `(K, V)` entries of a map, in insertion order.
///
/// Created by the [`IntoIterator`] implementation of [`OrderedMap`](crate::OrderedMap).
#[derive(Debug)]
pub struct IntoIter<K, V> {
    keys: vec::IntoIter<K>,
    store: HashMap<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(keys: Vec<K>, store: HashMap<K, V>) -> Self {
        Self {
            keys: keys.into_iter(),
            store,
        }
    }
}

impl<K: Eq + Hash, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.keys.next()?;
        let value = self.store.remove(&key)?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K: Eq + Hash, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let key = self.keys.next_back()?;
        let value = self.store.remove(&key)?;
        Some((key, value))
    }
}

impl<K: Eq + Hash, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K: Eq + Hash, V> FusedIterator for IntoIter<K, V> {}
