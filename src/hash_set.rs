use alloc::vec::Vec;
use core::fmt::Debug;
use core::fmt::Display;
use core::hash::Hash;
use core::hash::Hasher;
use core::iter::FusedIterator;

use crate::cursor;
use crate::cursor::KeyCursor;
use crate::error::Error;
use crate::error::capacity_panic;
use crate::hash_table::HashTable;
use crate::key::Key;

/// Added to a set's hash code when it contains the empty key.
pub(crate) const EMPTY_KEY_HASH: i32 = 0xDEAD_BEEF_u32 as i32;

/// A set of primitive keys backed by a linear-probing [`HashTable`].
///
/// `HashSet<K>` is a `HashTable<K, ()>`: it stores one `K` per slot and no
/// per-entry metadata. The key type's [`Key::EMPTY`] value is a valid
/// member.
///
/// Iteration order is unspecified and changes from one traversal to the
/// next, even on an unmodified set.
///
/// # Examples
///
/// ```rust
/// use probe_hash::IntHashSet;
///
/// let mut set = IntHashSet::new();
/// assert!(set.add(5));
/// assert!(set.add(0));
/// assert!(!set.add(5));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(0));
/// ```
pub struct HashSet<K> {
    table: HashTable<K, ()>,
}

impl<K> Clone for HashSet<K>
where
    K: Key,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }
}

impl<K> PartialEq for HashSet<K>
where
    K: Key,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|k| other.contains(k))
    }
}

impl<K> Eq for HashSet<K> where K: Key {}

impl<K> Hash for HashSet<K>
where
    K: Key,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<K> Debug for HashSet<K>
where
    K: Key,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Display for HashSet<K>
where
    K: Key + Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, key) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(&key, f)?;
        }
        f.write_str("]")
    }
}

impl<K> HashSet<K>
where
    K: Key,
{
    /// Creates an empty set with room for a few keys.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Creates an empty set that can hold `expected_elements` keys without
    /// growing.
    ///
    /// # Panics
    ///
    /// Panics if `expected_elements` exceeds the maximum buffer size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::LongHashSet;
    ///
    /// let set = LongHashSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// ```
    pub fn with_capacity(expected_elements: usize) -> Self {
        Self {
            table: HashTable::with_capacity(expected_elements),
        }
    }

    /// Creates an empty set that can hold `expected_elements` keys without
    /// growing, using the given load factor.
    pub fn with_capacity_and_load_factor(
        expected_elements: usize,
        load_factor: f64,
    ) -> Result<Self, Error> {
        Ok(Self {
            table: HashTable::with_capacity_and_load_factor(expected_elements, load_factor)?,
        })
    }

    /// Creates a set holding `keys`, sized for them up front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::CharHashSet;
    ///
    /// let set = CharHashSet::from_keys(&['a', 'b', 'a']);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn from_keys(keys: &[K]) -> Self {
        let mut set = Self::with_capacity(keys.len());
        set.add_all(keys.iter().copied());
        set
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of keys the set can hold before it grows.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns the configured load factor.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Adds `key`, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if the set must grow and cannot.
    pub fn add(&mut self, key: K) -> bool {
        self.try_add(key)
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Fallible version of [`add`](Self::add).
    ///
    /// On error the set is left exactly as it was.
    pub fn try_add(&mut self, key: K) -> Result<bool, Error> {
        let index = self.table.index_of(key);
        if self.table.index_exists(index) {
            return Ok(false);
        }

        self.table.try_index_insert(index, key, ())?;
        Ok(true)
    }

    /// Adds every key of `keys`, returning how many were not already
    /// present.
    pub fn add_all(&mut self, keys: impl IntoIterator<Item = K>) -> usize {
        let before = self.len();
        for key in keys {
            self.add(key);
        }
        self.len() - before
    }

    /// Returns `true` if the set contains `key`.
    pub fn contains(&self, key: K) -> bool {
        self.table.contains(key)
    }

    /// Removes `key`, returning `true` if it was present.
    pub fn remove(&mut self, key: K) -> bool {
        self.table.remove(key).is_some()
    }

    /// Removes every key contained in `other`, returning the number of
    /// removed keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::IntHashSet;
    ///
    /// let mut set = IntHashSet::from([1, 2, 3, 4]);
    /// let removed = set.remove_all(&IntHashSet::from([2, 4, 6]));
    /// assert_eq!(removed, 2);
    /// assert_eq!(set, IntHashSet::from([1, 3]));
    /// ```
    pub fn remove_all(&mut self, other: &HashSet<K>) -> usize {
        if other.len() >= self.len() {
            return self.retain(|k| !other.contains(k));
        }

        let before = self.len();
        for key in other {
            self.remove(key);
        }
        before - self.len()
    }

    /// Keeps only the keys also contained in `other`, returning the number
    /// of removed keys.
    pub fn retain_all(&mut self, other: &HashSet<K>) -> usize {
        self.retain(|k| other.contains(k))
    }

    /// Keeps only the keys for which `keep` returns `true`, returning the
    /// number of removed keys.
    ///
    /// `keep` may be called more than once for the same key.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) -> usize {
        self.table.retain(|k, _| keep(k))
    }

    /// Removes all keys, keeping the allocated buffer.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Removes all keys and shrinks the buffer back to its default size.
    pub fn release(&mut self) {
        self.table.release();
    }

    /// Grows the set, if needed, so that `expected_elements` keys fit
    /// without further growth.
    ///
    /// # Panics
    ///
    /// Panics if the new buffer cannot be sized or allocated.
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
    /// use probe_hash::IntHashSet;
    ///
    /// let mut set = IntHashSet::new();
    /// let index = set.index_of(12);
    /// if !set.index_exists(index) {
    ///     set.index_insert(index, 12);
    /// }
    /// assert!(set.contains(12));
    /// ```
    pub fn index_of(&self, key: K) -> isize {
        self.table.index_of(key)
    }

    /// Returns `true` if `index` points at an existing key.
    pub fn index_exists(&self, index: isize) -> bool {
        self.table.index_exists(index)
    }

    /// Returns the key at an existing `index`.
    pub fn index_get(&self, index: isize) -> K {
        self.table.index_key(index)
    }

    /// Replaces the key at an existing `index` with an equal key, returning
    /// the previous one.
    pub fn index_replace(&mut self, index: isize, equivalent_key: K) -> K {
        self.table.index_replace_key(index, equivalent_key)
    }

    /// Inserts `key` at a vacant `index` returned by
    /// [`index_of`](Self::index_of) for that same key.
    ///
    /// # Panics
    ///
    /// Panics if the set must grow and cannot.
    pub fn index_insert(&mut self, index: isize, key: K) {
        self.table.index_insert(index, key, ());
    }

    /// Fallible version of [`index_insert`](Self::index_insert).
    pub fn try_index_insert(&mut self, index: isize, key: K) -> Result<(), Error> {
        self.table.try_index_insert(index, key, ())
    }

    /// Removes the key at an existing `index`.
    pub fn index_remove(&mut self, index: isize) {
        self.table.index_remove(index);
    }

    /// Returns an iterator over the keys of the set.
    ///
    /// The empty key, if present, comes last.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys of the set along with their slots.
    pub fn cursors(&self) -> KeyCursors<'_, K> {
        KeyCursors {
            inner: self.table.iter(),
        }
    }

    /// Copies the keys into a vector.
    ///
    /// The empty key, if present, comes first, followed by the other keys in
    /// the order of a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::IntHashSet;
    ///
    /// let set = IntHashSet::from([3, 0, 7]);
    /// let keys = set.to_vec();
    /// assert_eq!(keys[0], 0);
    /// assert_eq!(keys.len(), 3);
    /// ```
    pub fn to_vec(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len());
        if self.table.has_empty_key() {
            keys.push(K::EMPTY);
        }

        let buffer_size = self.table.buffer_size();
        keys.extend(
            self.table
                .iter()
                .filter(|cursor| cursor.index < buffer_size)
                .map(|cursor| cursor.key),
        );
        keys
    }

    /// Returns the order-independent hash code of the set.
    ///
    /// Equal sets have equal hash codes regardless of insertion order.
    pub fn hash_code(&self) -> i32 {
        let mut h = if self.table.has_empty_key() {
            EMPTY_KEY_HASH
        } else {
            0
        };

        for &key in &self.table.keys[..self.table.buffer_size()] {
            if !key.is_empty() {
                h = h.wrapping_add(key.mix());
            }
        }
        h
    }

    pub(crate) fn as_table(&self) -> &HashTable<K, ()> {
        &self.table
    }

    /// Computes a histogram of probe distances for the current set state.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> crate::hash_table::ProbeHistogram {
        self.table.probe_histogram()
    }

    /// Collects debug statistics for the current set state.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }
}

impl<K> Default for HashSet<K>
where
    K: Key,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the keys of a [`HashSet`].
pub struct Iter<'a, K> {
    inner: cursor::Iter<'a, K, ()>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K> Iterator for Iter<'_, K>
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

impl<K: Key> ExactSizeIterator for Iter<'_, K> {}

impl<K: Key> FusedIterator for Iter<'_, K> {}

/// Iterator over the [`KeyCursor`]s of a [`HashSet`].
pub struct KeyCursors<'a, K> {
    inner: cursor::Iter<'a, K, ()>,
}

impl<K> Iterator for KeyCursors<'_, K>
where
    K: Key,
{
    type Item = KeyCursor<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|cursor| KeyCursor {
            index: cursor.index,
            key: cursor.key,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key> ExactSizeIterator for KeyCursors<'_, K> {}

impl<K: Key> FusedIterator for KeyCursors<'_, K> {}

impl<'a, K> IntoIterator for &'a HashSet<K>
where
    K: Key,
{
    type IntoIter = Iter<'a, K>;
    type Item = K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> FromIterator<K> for HashSet<K>
where
    K: Key,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.add_all(iter);
        set
    }
}

impl<K> Extend<K> for HashSet<K>
where
    K: Key,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, K> Extend<&'a K> for HashSet<K>
where
    K: Key,
{
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.add_all(iter.into_iter().copied());
    }
}

impl<K, const N: usize> From<[K; N]> for HashSet<K>
where
    K: Key,
{
    fn from(keys: [K; N]) -> Self {
        Self::from_keys(&keys)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::format;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::TryRngCore;
    use rand::rngs::OsRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::IntHashSet;

    fn test_rng() -> SmallRng {
        SmallRng::seed_from_u64(OsRng.try_next_u64().unwrap())
    }

    #[test]
    fn test_new_and_default() {
        let set: HashSet<i32> = HashSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        let set: HashSet<i64> = HashSet::default();
        assert!(set.is_empty());
        assert!(set.capacity() >= crate::sizing::DEFAULT_EXPECTED_ELEMENTS);
    }

    #[test]
    fn test_empty_key() {
        let mut set = IntHashSet::new();
        assert!(set.add(0));
        assert!(set.as_table().has_empty_key());
        assert_eq!(set.len(), 1);
        assert!(set.contains(0));

        assert!(set.remove(0));
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        assert!(!set.remove(0));
    }

    #[test]
    fn test_small_expected_elements() {
        let mut set = IntHashSet::with_capacity(2);
        for k in [5, 13, 21] {
            assert!(set.add(k));
        }
        assert_eq!(set.len(), 3);
        for k in [5, 13, 21] {
            assert!(set.contains(k));
        }

        let keys: BTreeSet<i32> = set.to_vec().into_iter().collect();
        assert_eq!(keys, BTreeSet::from([5, 13, 21]));

        let buffer_size = set.as_table().buffer_size();
        set.add(29);
        assert!(set.as_table().buffer_size() > buffer_size);
        for k in [5, 13, 21, 29] {
            assert!(set.contains(k));
        }
    }

    #[test]
    fn test_add_remove_cycle() {
        let mut set = IntHashSet::new();
        for cycle in 0..5 {
            for k in 0..200 {
                assert!(set.add(k), "cycle {cycle}, key {k}");
            }
            assert_eq!(set.len(), 200);
            for k in 0..200 {
                assert!(set.remove(k), "cycle {cycle}, key {k}");
            }
            assert!(set.is_empty());
        }
    }

    #[test]
    fn test_matches_btree_model() {
        let mut rng = test_rng();
        let mut set = IntHashSet::new();
        let mut model = BTreeSet::new();

        for _ in 0..5000 {
            let k = rng.random_range(-100..100);
            if rng.random_bool(0.6) {
                assert_eq!(set.add(k), model.insert(k));
            } else {
                assert_eq!(set.remove(k), model.remove(&k));
            }
            assert_eq!(set.len(), model.len());
        }

        for k in -100..100 {
            assert_eq!(set.contains(k), model.contains(&k));
        }
        let keys: BTreeSet<i32> = set.iter().collect();
        assert_eq!(keys, model);
    }

    #[test]
    fn test_to_vec_puts_empty_key_first() {
        let mut set = IntHashSet::new();
        set.add_all([4, 8, 15, 16, 23, 42]);
        assert!(!set.to_vec().contains(&0));

        set.add(0);
        for _ in 0..4 {
            let keys = set.to_vec();
            assert_eq!(keys.len(), 7);
            assert_eq!(keys[0], 0);
            let rest: BTreeSet<i32> = keys[1..].iter().copied().collect();
            assert_eq!(rest, BTreeSet::from([4, 8, 15, 16, 23, 42]));
        }
    }

    #[test]
    fn test_iter_yields_empty_key_last() {
        let set = IntHashSet::from([0, 1, 2, 3]);
        let keys: Vec<i32> = set.iter().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys[3], 0);
    }

    #[test]
    fn test_cursors() {
        let set = HashSet::from(['x', 'y', '\0']);
        let mut seen = 0;
        for cursor in set.cursors() {
            assert_eq!(set.index_of(cursor.key), cursor.index as isize);
            assert_eq!(set.index_get(cursor.index as isize), cursor.key);
            seen += 1;
        }
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_index_api() {
        let mut set: HashSet<i64> = HashSet::new();
        let index = set.index_of(77);
        assert!(!set.index_exists(index));
        set.index_insert(index, 77);

        let index = set.index_of(77);
        assert!(set.index_exists(index));
        assert_eq!(set.index_get(index), 77);
        assert_eq!(set.index_replace(index, 77), 77);

        set.index_remove(index);
        assert!(!set.contains(77));
        assert!(set.is_empty());
    }

    #[test]
    fn test_equality_and_hash_code() {
        let mut a = IntHashSet::new();
        let mut b = IntHashSet::with_capacity(1000);
        let keys: Vec<i32> = (-50..50).collect();
        a.add_all(keys.iter().copied());
        b.add_all(keys.iter().rev().copied());

        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        b.remove(0);
        assert_ne!(a, b);
        assert_eq!(
            a.hash_code().wrapping_sub(b.hash_code()),
            EMPTY_KEY_HASH
        );

        b.remove(1);
        b.add(1000);
        assert_eq!(a.len(), b.len() + 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_feeds_hash_code() {
        use core::hash::BuildHasher;

        let state = foldhash::fast::FixedState::with_seed(7);
        let a = IntHashSet::from([1, 2, 3]);
        let b = IntHashSet::from([3, 2, 1]);
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    #[test]
    fn test_remove_all_both_strategies() {
        let mut set: IntHashSet = (0..100).collect();
        let small = IntHashSet::from([1, 3, 5, 1000]);
        assert_eq!(set.remove_all(&small), 3);
        assert_eq!(set.len(), 97);
        assert!(!set.contains(3));

        let large: IntHashSet = (0..50).chain(500..1000).collect();
        assert_eq!(set.remove_all(&large), 47);
        assert_eq!(set.len(), 50);
        assert!(set.iter().all(|k| (50..100).contains(&k)));
    }

    #[test]
    fn test_retain_all() {
        let mut set: IntHashSet = (0..20).collect();
        let other: IntHashSet = (10..30).collect();
        assert_eq!(set.retain_all(&other), 10);
        let keys: BTreeSet<i32> = set.iter().collect();
        assert_eq!(keys, (10..20).collect());
    }

    #[test]
    fn test_retain_with_empty_key() {
        let mut set: IntHashSet = (0..10).collect();
        assert_eq!(set.retain(|k| k % 3 != 0), 4);
        assert!(!set.contains(0));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_clear_and_release() {
        let mut set: IntHashSet = (0..1000).collect();
        let buffer_size = set.as_table().buffer_size();

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.as_table().buffer_size(), buffer_size);

        set.add_all(0..1000);
        set.release();
        assert!(set.is_empty());
        assert!(set.as_table().buffer_size() < buffer_size);
        assert!(!set.contains(10));
    }

    #[test]
    fn test_ensure_capacity() {
        let mut set = IntHashSet::new();
        set.ensure_capacity(500);
        assert!(set.capacity() >= 500);
        let buffer_size = set.as_table().buffer_size();
        set.add_all(1..=500);
        assert_eq!(set.as_table().buffer_size(), buffer_size);

        assert!(matches!(
            set.try_ensure_capacity(usize::MAX),
            Err(Error::CapacityOverflow { .. })
        ));
        assert_eq!(set.len(), 500);
    }

    #[test]
    fn test_invalid_load_factor() {
        assert!(matches!(
            IntHashSet::with_capacity_and_load_factor(4, 0.0),
            Err(Error::InvalidLoadFactor { .. })
        ));
        assert!(matches!(
            IntHashSet::with_capacity_and_load_factor(4, 1.0),
            Err(Error::InvalidLoadFactor { .. })
        ));
        let set = IntHashSet::with_capacity_and_load_factor(4, 0.5).unwrap();
        assert_eq!(set.load_factor(), 0.5);
    }

    #[test]
    fn test_clone_independence() {
        let mut original: IntHashSet = (0..10).collect();
        let mut cloned = original.clone();

        cloned.add(100);
        cloned.remove(5);
        assert!(!original.contains(100));
        assert!(original.contains(5));

        original.remove(6);
        assert!(cloned.contains(6));
    }

    #[test]
    fn test_display_and_debug() {
        let set = IntHashSet::from([7]);
        assert_eq!(format!("{set}"), "[7]");
        assert_eq!(format!("{set:?}"), "{7}");

        let set = IntHashSet::from([1, 2]);
        let shown = format!("{set}");
        assert!(shown == "[1, 2]" || shown == "[2, 1]", "{shown}");

        assert_eq!(format!("{}", IntHashSet::new()), "[]");
    }

    #[test]
    fn test_extend_and_from_iter() {
        let mut set: HashSet<u16> = [1u16, 2, 3].into_iter().collect();
        set.extend([3u16, 4]);
        set.extend(&[5u16, 6]);
        assert_eq!(set.len(), 6);
        assert_eq!(set.add_all([6u16, 7, 8]), 2);
    }

    #[test]
    fn test_char_keys() {
        let mut set = HashSet::new();
        for c in "hello world".chars() {
            set.add(c);
        }
        assert_eq!(set.len(), 8);
        assert!(set.contains(' '));
        assert!(!set.contains('\0'));
        set.add('\0');
        assert_eq!(set.len(), 9);
    }

    #[test]
    fn test_size_matches_iteration() {
        let mut rng = test_rng();
        let mut set: HashSet<i64> = HashSet::with_capacity(0);
        for _ in 0..2000 {
            let k = rng.random_range(-300i64..300);
            if rng.random_bool(0.5) {
                set.add(k);
            } else {
                set.remove(k);
            }
            if rng.random_bool(0.05) {
                assert_eq!(set.iter().count(), set.len());
            }
        }
        assert_eq!(set.iter().count(), set.len());
    }

    #[test]
    fn test_probe_stats() {
        let set: IntHashSet = (1..=100).collect();
        assert_eq!(set.probe_histogram().total(), 100);
        assert_eq!(set.debug_stats().populated, 100);
    }
}
