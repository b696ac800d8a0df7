//! The insertion-ordered map container.

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt,
    hash::Hash,
    ops::Index,
};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    iter::{IntoIter, Iter},
};

/// An insertion-ordered key-value map.
///
/// Keys are kept in the order they were first inserted. Updating the value of an
/// existing key leaves its position untouched; deleting a key removes it from the
/// order, and inserting it again later appends it at the end.
///
/// Value lookups go through a hash map whose key space is exactly the inserted keys,
/// while deletion scans the key order linearly and splices the key out of it.
///
/// # Examples
///
/// ```
/// use ordmap_core::OrderedMap;
///
/// let mut map = OrderedMap::new();
/// map.set("a", 1).set("b", 2).set("a", 3);
///
/// assert_eq!(map.keys(), ["a", "b"]);
/// assert_eq!(map.get("a"), Some(&3));
/// assert_eq!(map.size(), 2);
/// ```
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    /// Keys in first-insertion order, each at most once.
    key_order: Vec<K>,

    /// Values by key. Shares its key set with `key_order`.
    store: HashMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            key_order: Vec::new(),
            store: HashMap::new(),
        }
    }

    /// Creates a new empty map with room for at least `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            key_order: Vec::with_capacity(capacity),
            store: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries in the map.
    pub fn size(&self) -> usize {
        debug_assert_eq!(self.key_order.len(), self.store.len());
        self.key_order.len()
    }

    /// Returns the number of entries in the map.
    ///
    /// Same as [`OrderedMap::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.key_order.is_empty()
    }

    /// Returns the keys in insertion order.
    ///
    /// The returned slice is a read-only view over the map's own key order, not a copy.
    /// The map cannot be mutated while the view is borrowed; call `.to_vec()` for an
    /// owned snapshot.
    pub fn keys(&self) -> &[K] {
        &self.key_order
    }

    /// Removes all entries from the map.
    pub fn clear(&mut self) {
        let dropped = self.key_order.len();
        self.key_order.clear();
        self.store.clear();
        trace!("ordered map cleared, {dropped} entries dropped");
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash,
{
    /// Returns a reference to the value stored for `key`, or `None` if the key was
    /// never inserted or has been deleted.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.get(key)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// Mutating a value never changes the position of its key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.get_mut(key)
    }

    /// Returns `true` if `key` is present in the map.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.store.contains_key(key)
    }

    /// Removes `key` from the map, returning `true` if it was present.
    ///
    /// After this call [`OrderedMap::has`] returns `false` for `key` whatever the
    /// previous state was.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove_entry(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` from the map, returning the stored key and value if it was present.
    ///
    /// Keys inserted after the removed one shift one position towards the front.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let (key, value) = self.store.remove_entry(key)?;
        if let Some(position) = self.key_order.iter().position(|k| *k == key) {
            self.key_order.remove(position);
            trace!("ordered map removed key at position {position}");
        }
        Some((key, value))
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.key_order, &self.store)
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Returns the `(key, value)` pairs in insertion order.
    ///
    /// Each pair is built by looking its key up, so `entries()[i]` is always
    /// `(keys()[i], get(keys()[i]))`.
    pub fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    /// Calls `callback(value, key, map)` once per entry, in insertion order.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&V, &K, &Self),
    {
        for (key, value) in self.iter() {
            callback(value, key, self);
        }
    }

    /// Calls `callback(this_arg, value, key, map)` once per entry, in insertion order.
    ///
    /// `this_arg` is the execution context handed to every invocation. The callback
    /// receives `None` when no context was supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap_core::OrderedMap;
    ///
    /// let map: OrderedMap<&str, i32> = [("a", 1), ("b", 2)].into();
    ///
    /// let mut total = 0;
    /// map.for_each_with(Some(&mut total), |total, value, _, _| {
    ///     if let Some(total) = total {
    ///         *total += value;
    ///     }
    /// });
    /// assert_eq!(total, 3);
    /// ```
    pub fn for_each_with<C, F>(&self, mut this_arg: Option<&mut C>, mut callback: F)
    where
        C: ?Sized,
        F: FnMut(Option<&mut C>, &V, &K, &Self),
    {
        for (key, value) in self.iter() {
            callback(this_arg.as_deref_mut(), value, key, self);
        }
    }

    /// Calls `callback(value, key, map)` once per entry, in insertion order, failing
    /// when no callback is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `callback` is `None`. No entry is visited
    /// in that case.
    pub fn try_for_each(&self, callback: Option<&mut dyn FnMut(&V, &K, &Self)>) -> Result<()> {
        let Some(callback) = callback else {
            debug!("ordered map traversal rejected: no callback supplied");
            return Err(Error::InvalidArgument("the callback is not a function"));
        };

        for (key, value) in self.iter() {
            callback(value, key, self);
        }
        Ok(())
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts or updates the value stored for `key`.
    ///
    /// A fresh key is appended to the key order; an existing key keeps its position and
    /// only its value is replaced. Returns the map itself so calls can be chained.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Inserts or updates the value stored for `key`, returning the previous value if
    /// the key was already present.
    ///
    /// Follows the same ordering rules as [`OrderedMap::set`].
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.store.entry(key) {
            Entry::Occupied(mut entry) => Some(entry.insert(value)),
            Entry::Vacant(entry) => {
                self.key_order.push(entry.key().clone());
                entry.insert(value);
                trace!(
                    "ordered map appended key at position {}",
                    self.key_order.len() - 1
                );
                None
            }
        }
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for OrderedMap<K, V>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same entries in the same order.
impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> Eq for OrderedMap<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V, Q> Index<&Q> for OrderedMap<K, V>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("key not found in OrderedMap")
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.key_order, self.store)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V>
where
    K: Eq + Hash,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
