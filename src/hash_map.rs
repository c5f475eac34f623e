use alloc::vec::Vec;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;
use core::iter::FusedIterator;

use num_traits::WrappingAdd;

use crate::cursor;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::error::capacity_panic;
use crate::hash_set::EMPTY_KEY_HASH;
use crate::hash_set::HashSet;
use crate::hash_table::HashTable;
use crate::key::Key;

/// Seed of the value hasher used by [`HashMap::hash_code`].
const VALUE_HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// A map from primitive keys to values, backed by a linear-probing
/// [`HashTable`].
///
/// Keys and values live in two parallel buffers sharing slot indices.
/// Vacant value slots hold `V::default()`, so `V` must implement
/// [`Default`]; removing an entry moves its value out and drops nothing
/// later.
///
/// The key type's [`Key::EMPTY`] value is a valid key. Iteration order is
/// unspecified and changes from one traversal to the next.
///
/// # Examples
///
/// ```rust
/// use probe_hash::IntIntHashMap;
///
/// let mut map = IntIntHashMap::new();
/// assert_eq!(map.put(7, 100), None);
/// assert_eq!(map.put(7, 200), Some(100));
/// assert_eq!(map.get(7), Some(&200));
///
/// assert_eq!(map.add_to(3, 5), 5);
/// assert_eq!(map.add_to(3, 5), 10);
/// ```
pub struct HashMap<K, V> {
    table: HashTable<K, V>,
}

impl<K, V> Clone for HashMap<K, V>
where
    K: Key,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K, V> PartialEq for HashMap<K, V>
where
    K: Key,
    V: Default + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K, V> Eq for HashMap<K, V>
where
    K: Key,
    V: Default + Eq,
{
}

impl<K, V> Hash for HashMap<K, V>
where
    K: Key,
    V: Default + Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<K, V> Debug for HashMap<K, V>
where
    K: Key,
    V: Default + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Display for HashMap<K, V>
where
    K: Key + Display,
    V: Default + Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=>{value}")?;
        }
        f.write_str("]")
    }
}

impl<K, V> HashMap<K, V>
where
    K: Key,
    V: Default,
{
    /// Creates an empty map with room for a few entries.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Creates an empty map that can hold `expected_elements` entries
    /// without growing.
    ///
    /// # Panics
    ///
    /// Panics if `expected_elements` exceeds the maximum buffer size.
    pub fn with_capacity(expected_elements: usize) -> Self {
        Self {
            table: HashTable::with_capacity(expected_elements),
        }
    }

    /// Creates an empty map that can hold `expected_elements` entries
    /// without growing, using the given load factor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::Error;
    /// use probe_hash::LongLongHashMap;
    ///
    /// let map = LongLongHashMap::with_capacity_and_load_factor(64, 0.5).unwrap();
    /// assert!(map.capacity() >= 64);
    ///
    /// let rejected = LongLongHashMap::with_capacity_and_load_factor(64, 0.0);
    /// assert!(matches!(rejected, Err(Error::InvalidLoadFactor { .. })));
    /// ```
    pub fn with_capacity_and_load_factor(
        expected_elements: usize,
        load_factor: f64,
    ) -> Result<Self, Error> {
        Ok(Self {
            table: HashTable::with_capacity_and_load_factor(expected_elements, load_factor)?,
        })
    }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of entries the map can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the configured load factor.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Maps `key` to `value`, returning the value it replaced.
    ///
    /// # Panics
    ///
    /// Panics if the map must grow and cannot.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.table.insert(key, value)
    }

    /// Fallible version of [`put`](Self::put).
    ///
    /// On error the map is left exactly as it was and `value` is dropped.
    pub fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        self.table.try_insert(key, value)
    }

    /// Puts every entry of `entries`, returning how many keys were not
    /// already present.
    pub fn put_all(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> usize {
        let before = self.len();
        for (key, value) in entries {
            self.put(key, value);
        }
        self.len() - before
    }

    /// Maps `key` to `value` unless `key` is already present, returning
    /// `true` if the entry was added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::CharIntHashMap;
    ///
    /// let mut map = CharIntHashMap::new();
    /// assert!(map.put_if_absent('a', 1));
    /// assert!(!map.put_if_absent('a', 2));
    /// assert_eq!(map.get('a'), Some(&1));
    /// ```
    pub fn put_if_absent(&mut self, key: K, value: V) -> bool {
        let index = self.table.index_of(key);
        if self.table.index_exists(index) {
            return false;
        }

        self.table.index_insert(index, key, value);
        true
    }

    /// Puts `put_value` if `key` is absent, otherwise adds `increment` to
    /// the current value with wrapping arithmetic. Returns the new value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::IntIntHashMap;
    ///
    /// let mut map = IntIntHashMap::new();
    /// assert_eq!(map.put_or_add(9, 1, 1), 1);
    /// assert_eq!(map.put_or_add(9, 1, 1), 2);
    /// assert_eq!(map.put_or_add(9, 1, 1), 3);
    /// ```
    pub fn put_or_add(&mut self, key: K, put_value: V, increment: V) -> V
    where
        V: Copy + WrappingAdd,
    {
        let index = self.table.index_of(key);
        if self.table.index_exists(index) {
            let value = self.table.index_get_mut(index);
            *value = value.wrapping_add(&increment);
            *value
        } else {
            self.table.index_insert(index, key, put_value);
            put_value
        }
    }

    /// Adds `increment` to the value of `key`, inserting `increment` if the
    /// key is absent. Returns the new value.
    pub fn add_to(&mut self, key: K, increment: V) -> V
    where
        V: Copy + WrappingAdd,
    {
        self.put_or_add(key, increment, increment)
    }

    /// Returns a reference to the value of `key`.
    pub fn get(&self, key: K) -> Option<&V> {
        self.table.get(key)
    }

    /// Returns a mutable reference to the value of `key`.
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        self.table.get_mut(key)
    }

    /// Returns a copy of the value of `key`, or `default` if absent.
    pub fn get_or_default(&self, key: K, default: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains_key(&self, key: K) -> bool {
        self.table.contains(key)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: K) -> Option<V> {
        self.table.remove(key)
    }

    /// Removes the entries whose key is contained in `keys`, returning the
    /// number of removed entries.
    pub fn remove_all(&mut self, keys: &HashSet<K>) -> usize {
        if keys.len() >= self.len() {
            return self.retain(|k, _| !keys.contains(k));
        }

        let before = self.len();
        for key in keys {
            self.remove(key);
        }
        before - self.len()
    }

    /// Keeps only the entries for which `keep` returns `true`, returning the
    /// number of removed entries.
    ///
    /// `keep` may be called more than once for the same entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::IntIntHashMap;
    ///
    /// let mut map: IntIntHashMap = (0..10).map(|k| (k, k * k)).collect();
    /// assert_eq!(map.retain(|_, v| *v < 20), 5);
    /// assert_eq!(map.len(), 5);
    /// ```
    pub fn retain(&mut self, keep: impl FnMut(K, &mut V) -> bool) -> usize {
        self.table.retain(keep)
    }

    /// Removes all entries, keeping the allocated buffers.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Removes all entries and shrinks the buffers back to their default
    /// size.
    pub fn release(&mut self) {
        self.table.release();
    }

    /// Grows the map, if needed, so that `expected_elements` entries fit
    /// without further growth.
    ///
    /// # Panics
    ///
    /// Panics if the new buffers cannot be sized or allocated.
    pub fn ensure_capacity(&mut self, expected_elements: usize) {
        self.table.ensure_capacity(expected_elements);
    }

    /// Fallible version of [`ensure_capacity`](Self::ensure_capacity).
    pub fn try_ensure_capacity(&mut self, expected_elements: usize) -> Result<(), Error> {
        self.table.try_ensure_capacity(expected_elements)
    }

    /// Returns the slot of `key` if present, or the bitwise complement of
    /// the slot where it would be inserted.
    ///
    /// See [`HashTable::index_of`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::LongIntHashMap;
    ///
    /// let mut map = LongIntHashMap::new();
    /// let index = map.index_of(5);
    /// if map.index_exists(index) {
    ///     *map.index_get_mut(index) += 1;
    /// } else {
    ///     map.index_insert(index, 5, 1);
    /// }
    /// assert_eq!(map.get(5), Some(&1));
    /// ```
    pub fn index_of(&self, key: K) -> isize {
        self.table.index_of(key)
    }

    /// Returns `true` if `index` points at an existing entry.
    pub fn index_exists(&self, index: isize) -> bool {
        self.table.index_exists(index)
    }

    /// Returns the value at an existing `index`.
    pub fn index_get(&self, index: isize) -> &V {
        self.table.index_get(index)
    }

    /// Returns a mutable reference to the value at an existing `index`.
    pub fn index_get_mut(&mut self, index: isize) -> &mut V {
        self.table.index_get_mut(index)
    }

    /// Replaces the value at an existing `index`, returning the previous
    /// value.
    pub fn index_replace(&mut self, index: isize, value: V) -> V {
        self.table.index_replace(index, value)
    }

    /// Inserts an entry at a vacant `index` returned by
    /// [`index_of`](Self::index_of) for that same key.
    ///
    /// # Panics
    ///
    /// Panics if the map must grow and cannot.
    pub fn index_insert(&mut self, index: isize, key: K, value: V) {
        self.table.index_insert(index, key, value);
    }

    /// Fallible version of [`index_insert`](Self::index_insert).
    pub fn try_index_insert(&mut self, index: isize, key: K, value: V) -> Result<(), Error> {
        self.table.try_index_insert(index, key, value)
    }

    /// Removes the entry at an existing `index`, returning its value.
    pub fn index_remove(&mut self, index: isize) -> V {
        self.table.index_remove(index)
    }

    /// Returns an iterator over the entries of the map.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the [`Cursor`]s of the map.
    pub fn cursors(&self) -> cursor::Iter<'_, K, V> {
        self.table.iter()
    }

    /// Returns a view over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { map: self }
    }

    /// Returns a view over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { map: self }
    }

    /// Returns the order-independent hash code of the map.
    pub fn hash_code(&self) -> i32
    where
        V: Hash,
    {
        let values = foldhash::fast::FixedState::with_seed(VALUE_HASH_SEED);
        let value_hash = |value: &V| values.hash_one(value) as i32;

        let mut h = 0i32;
        if self.table.has_empty_key() {
            let value = &self.table.values[self.table.buffer_size()];
            h = EMPTY_KEY_HASH.wrapping_add(value_hash(value));
        }

        let occupied = self.table.keys.iter().zip(self.table.values.iter());
        for (&key, value) in occupied.take(self.table.buffer_size()) {
            if !key.is_empty() {
                h = h.wrapping_add(key.mix().wrapping_add(value_hash(value)));
            }
        }
        h
    }

    pub(crate) fn as_table(&self) -> &HashTable<K, V> {
        &self.table
    }

    /// Computes a histogram of probe distances for the current map state.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> crate::hash_table::ProbeHistogram {
        self.table.probe_histogram()
    }

    /// Collects debug statistics for the current map state.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }
}

impl<K, V> Default for HashMap<K, V>
where
    K: Key,
    V: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the entries of a [`HashMap`].
pub struct Iter<'a, K, V> {
    inner: cursor::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Key,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor| (cursor.key, cursor.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Key, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a HashMap<K, V>
where
    K: Key,
    V: Default,
{
    type IntoIter = Iter<'a, K, V>;
    type Item = (K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A read-only view over the keys of a [`HashMap`].
pub struct Keys<'a, K, V> {
    map: &'a HashMap<K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Keys<'_, K, V> {}

impl<'a, K, V> Keys<'a, K, V>
where
    K: Key,
    V: Default,
{
    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no keys.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if the map contains `key`.
    pub fn contains(&self, key: K) -> bool {
        self.map.contains_key(key)
    }

    /// Returns an iterator over the keys.
    pub fn iter(&self) -> KeysIter<'a, K, V> {
        KeysIter {
            inner: self.map.table.iter(),
        }
    }

    /// Copies the keys into a vector, in the order of a fresh traversal.
    pub fn to_vec(&self) -> Vec<K> {
        self.iter().collect()
    }
}

impl<'a, K, V> IntoIterator for Keys<'a, K, V>
where
    K: Key,
    V: Default,
{
    type IntoIter = KeysIter<'a, K, V>;
    type Item = K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys of a [`HashMap`].
pub struct KeysIter<'a, K, V> {
    inner: cursor::Iter<'a, K, V>,
}

impl<K, V> Iterator for KeysIter<'_, K, V>
where
    K: Key,
{
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor| cursor.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key, V> ExactSizeIterator for KeysIter<'_, K, V> {}

impl<K: Key, V> FusedIterator for KeysIter<'_, K, V> {}

/// A read-only view over the values of a [`HashMap`].
pub struct Values<'a, K, V> {
    map: &'a HashMap<K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Values<'_, K, V> {}

impl<'a, K, V> Values<'a, K, V>
where
    K: Key,
    V: Default,
{
    /// Returns the number of values.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if any entry holds `value`. Runs in linear time.
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Returns an iterator over the values.
    pub fn iter(&self) -> ValuesIter<'a, K, V> {
        ValuesIter {
            inner: self.map.table.iter(),
        }
    }

    /// Copies the values into a vector, in the order of a fresh traversal.
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, K, V> IntoIterator for Values<'a, K, V>
where
    K: Key,
    V: Default,
{
    type IntoIter = ValuesIter<'a, K, V>;
    type Item = &'a V;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`HashMap`].
pub struct ValuesIter<'a, K, V> {
    inner: cursor::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesIter<'a, K, V>
where
    K: Key,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor: Cursor<'a, K, V>| cursor.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key, V> ExactSizeIterator for ValuesIter<'_, K, V> {}

impl<K: Key, V> FusedIterator for ValuesIter<'_, K, V> {}

impl<K, V> FromIterator<(K, V)> for HashMap<K, V>
where
    K: Key,
    V: Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        map.put_all(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for HashMap<K, V>
where
    K: Key,
    V: Default,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.put_all(iter);
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HashMap<K, V>
where
    K: Key,
    V: Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        let mut map = Self::with_capacity(N);
        map.put_all(entries);
        map
    }
}
