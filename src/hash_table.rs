//! The open-addressing engine behind every set and map.
//!
//! Keys live in a power-of-two buffer probed linearly from their mixed hash,
//! values in a parallel buffer. The key type's empty value marks free slots,
//! so the empty key itself is stored out of band in one extra trailing slot.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cell::Cell;
use core::fmt::Debug;
use core::mem;

use crate::cursor::Iter;
use crate::error::Error;
use crate::error::capacity_panic;
use crate::key::Key;
use crate::mixer;
use crate::sizing;

/// Debug statistics for hash table analysis.
///
/// Available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table, the empty key included
    pub populated: usize,
    /// Maximum number of assigned slots before resize
    pub capacity: usize,
    /// Total number of slots allocated, the empty key slot excluded
    pub buffer_size: usize,
    /// Whether the empty key is present
    pub has_empty_key: bool,
    /// Configured load factor
    pub load_factor: f64,
    /// Slot utilization (assigned / buffer_size)
    pub slot_utilization: f64,
    /// Longest distance between a key and its home slot
    pub max_probe_distance: usize,
    /// Mean distance between a key and its home slot
    pub mean_probe_distance: f64,
    /// Total memory in bytes used by the key and value buffers
    pub total_bytes: usize,
    /// Memory in bytes held by unoccupied slots
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} (load factor {:.2})",
            self.populated, self.capacity, self.load_factor
        );
        println!(
            "Slot Usage: {}/{} ({:.2}% utilization)",
            self.populated - usize::from(self.has_empty_key),
            self.buffer_size,
            self.slot_utilization * 100.0
        );
        println!(
            "Probe Distance: max {}, mean {:.3}",
            self.max_probe_distance, self.mean_probe_distance
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes in empty slots ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

/// Distribution of probe distances over the live keys of a table.
///
/// Available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    /// `counts[d]` is the number of keys stored `d` slots past their home
    /// slot.
    pub counts: Vec<usize>,
}

#[cfg(any(test, feature = "stats"))]
impl ProbeHistogram {
    /// Total number of keys in the histogram.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Pretty-print the histogram.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let total = self.total();
        println!("=== Probe Distance Histogram ===");
        for (distance, &count) in self.counts.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let share = count as f64 / total as f64;
            let bar = "#".repeat((share * 50.0).ceil() as usize);
            println!(
                "{distance:>4}: {count:>8} ({:>6.2}%) {bar}",
                share * 100.0
            );
        }
    }
}

/// An open-addressing hash table over primitive keys.
///
/// `HashTable<K, V>` stores keys in a flat, power-of-two sized buffer and
/// resolves collisions with linear probing. Values live in a second buffer
/// at the same slot as their key; sets use `V = ()`, which costs no memory.
///
/// The key type's [`Key::EMPTY`] value marks free slots. It is still
/// accepted as a key: its presence is tracked by a flag and its value is
/// kept in an extra slot at index `mask + 1`, past the probe range.
///
/// Removal uses backward-shift deletion, so the table never accumulates
/// tombstones and probe sequences stay short under churn.
///
/// ## Indexed access
///
/// [`index_of`](Self::index_of) returns the slot of a key, or the bitwise
/// complement of the slot where it would be inserted. The `index_*`
/// operations consume that result without hashing again. Any structural
/// mutation (an insert that grows, a removal, [`clear`](Self::clear),
/// [`release`](Self::release)) invalidates previously returned indices;
/// reusing them is a logic error that is only caught by debug assertions.
///
/// ## Example
///
/// ```rust
/// use probe_hash::HashTable;
///
/// let mut table: HashTable<i32, u64> = HashTable::new();
/// let index = table.index_of(42);
/// assert!(!table.index_exists(index));
/// table.index_insert(index, 42, 7);
///
/// let index = table.index_of(42);
/// assert!(table.index_exists(index));
/// assert_eq!(*table.index_get(index), 7);
/// ```
pub struct HashTable<K, V> {
    pub(crate) keys: Box<[K]>,
    pub(crate) values: Box<[V]>,

    pub(crate) assigned: usize,
    pub(crate) mask: usize,
    resize_at: usize,
    pub(crate) has_empty_key: bool,
    load_factor: f64,

    iteration_seed: Cell<i32>,
}

impl<K, V> Debug for HashTable<K, V>
where
    K: Key,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let slots = self.keys[..=self.mask]
            .iter()
            .zip(self.values.iter())
            .map(|(key, value)| {
                if key.is_empty() {
                    "..".to_string()
                } else {
                    format!("{key:?}=>{value:?}")
                }
            })
            .collect::<Vec<String>>();

        let mut debug = f.debug_struct("HashTable");
        debug.field("slots", &slots);
        if self.has_empty_key {
            debug.field("empty_key", &self.values[self.mask + 1]);
        }
        debug
            .field("assigned", &self.assigned)
            .field("resize_at", &self.resize_at)
            .field("load_factor", &self.load_factor)
            .finish()
    }
}

impl<K, V> Clone for HashTable<K, V>
where
    K: Key,
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
            values: self.values.clone(),
            assigned: self.assigned,
            mask: self.mask,
            resize_at: self.resize_at,
            has_empty_key: self.has_empty_key,
            load_factor: self.load_factor,
            iteration_seed: Cell::new(sizing::initial_iteration_seed()),
        }
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Key,
    V: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

fn alloc_buffer<T>(len: usize, fill: impl FnMut() -> T) -> Result<Box<[T]>, Error> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { slots: len })?;
    buffer.resize_with(len, fill);
    Ok(buffer.into_boxed_slice())
}

impl<K, V> HashTable<K, V>
where
    K: Key,
    V: Default,
{
    /// Creates an empty table sized for
    /// [`DEFAULT_EXPECTED_ELEMENTS`](sizing::DEFAULT_EXPECTED_ELEMENTS) with
    /// the default load factor.
    pub fn new() -> Self {
        Self::with_capacity(sizing::DEFAULT_EXPECTED_ELEMENTS)
    }

    /// Creates an empty table that can hold `expected_elements` without
    /// growing, using the default load factor.
    ///
    /// # Panics
    ///
    /// Panics if the buffer for `expected_elements` cannot be sized or
    /// allocated.
    pub fn with_capacity(expected_elements: usize) -> Self {
        Self::with_capacity_and_load_factor(expected_elements, sizing::DEFAULT_LOAD_FACTOR)
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Creates an empty table that can hold `expected_elements` without
    /// growing, filled up to `load_factor` before each growth.
    ///
    /// Returns [`Error::InvalidLoadFactor`] unless `load_factor` is within
    /// `[MIN_LOAD_FACTOR, MAX_LOAD_FACTOR]`, and a sizing or allocation
    /// error if the buffer cannot be created.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_hash::Error;
    /// use probe_hash::HashTable;
    ///
    /// let table = HashTable::<i64, ()>::with_capacity_and_load_factor(100, 0.5).unwrap();
    /// assert!(table.capacity() >= 100);
    ///
    /// let rejected = HashTable::<i64, ()>::with_capacity_and_load_factor(100, 1.0);
    /// assert!(matches!(rejected, Err(Error::InvalidLoadFactor { .. })));
    /// ```
    pub fn with_capacity_and_load_factor(
        expected_elements: usize,
        load_factor: f64,
    ) -> Result<Self, Error> {
        let load_factor = sizing::check_load_factor(
            load_factor,
            sizing::MIN_LOAD_FACTOR,
            sizing::MAX_LOAD_FACTOR,
        )?;

        let mut table = Self {
            keys: Box::default(),
            values: Box::default(),
            assigned: 0,
            mask: 0,
            resize_at: 0,
            has_empty_key: false,
            load_factor,
            iteration_seed: Cell::new(sizing::initial_iteration_seed()),
        };
        table.allocate_buffers(sizing::min_buffer_size(expected_elements, load_factor)?)?;

        Ok(table)
    }

    /// Returns the number of keys in the table, the empty key included.
    #[inline]
    pub fn len(&self) -> usize {
        self.assigned + usize::from(self.has_empty_key)
    }

    /// Returns `true` if the table holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of non-empty keys the table can hold before it
    /// grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.resize_at
    }

    /// Returns the number of slots in the probe range.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.mask + 1
    }

    /// Returns the configured load factor.
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns `true` if the table contains the empty key.
    #[inline]
    pub fn has_empty_key(&self) -> bool {
        self.has_empty_key
    }

    #[inline(always)]
    fn hash_key(key: K) -> usize {
        key.mix() as u32 as usize
    }

    /// Probes for a non-empty `key`, returning its slot or the first free
    /// slot of its probe sequence.
    #[inline]
    fn find_slot(&self, key: K) -> Result<usize, usize> {
        debug_assert!(!key.is_empty());

        let mask = self.mask;
        let mut slot = Self::hash_key(key) & mask;
        loop {
            let existing = self.keys[slot];
            if existing.is_empty() {
                return Err(slot);
            }
            if existing == key {
                return Ok(slot);
            }
            slot = (slot + 1) & mask;
        }
    }

    /// Returns the slot of `key` if present, or the bitwise complement of
    /// the slot where it would be inserted.
    ///
    /// The result is only valid until the next structural mutation.
    #[inline]
    pub fn index_of(&self, key: K) -> isize {
        if key.is_empty() {
            let slot = (self.mask + 1) as isize;
            return if self.has_empty_key { slot } else { !slot };
        }

        match self.find_slot(key) {
            Ok(slot) => slot as isize,
            Err(slot) => !(slot as isize),
        }
    }

    /// Returns `true` if `index` (from [`index_of`](Self::index_of)) points
    /// at an existing key.
    #[inline]
    pub fn index_exists(&self, index: isize) -> bool {
        debug_assert!(
            index < 0
                || (index as usize) <= self.mask
                || (index as usize == self.mask + 1 && self.has_empty_key),
            "The index {index} is out of bounds."
        );

        index >= 0
    }

    #[inline(always)]
    fn check_existing(&self, index: isize) -> usize {
        debug_assert!(index >= 0, "The index must point at an existing key.");
        let slot = index as usize;
        debug_assert!(
            slot <= self.mask || (slot == self.mask + 1 && self.has_empty_key),
            "The index {index} is out of bounds."
        );
        slot
    }

    /// Returns the key stored at an existing `index`.
    #[inline]
    pub fn index_key(&self, index: isize) -> K {
        let slot = self.check_existing(index);
        self.keys[slot]
    }

    /// Returns the value stored at an existing `index`.
    #[inline]
    pub fn index_get(&self, index: isize) -> &V {
        let slot = self.check_existing(index);
        &self.values[slot]
    }

    /// Returns a mutable reference to the value at an existing `index`.
    #[inline]
    pub fn index_get_mut(&mut self, index: isize) -> &mut V {
        let slot = self.check_existing(index);
        &mut self.values[slot]
    }

    /// Replaces the key at an existing `index` with an equal key, returning
    /// the previous one.
    #[inline]
    pub fn index_replace_key(&mut self, index: isize, equivalent_key: K) -> K {
        let slot = self.check_existing(index);
        debug_assert!(
            self.keys[slot] == equivalent_key,
            "The replacement key must be equal to the stored key."
        );
        mem::replace(&mut self.keys[slot], equivalent_key)
    }

    /// Replaces the value at an existing `index`, returning the previous
    /// value.
    #[inline]
    pub fn index_replace(&mut self, index: isize, value: V) -> V {
        let slot = self.check_existing(index);
        mem::replace(&mut self.values[slot], value)
    }

    /// Inserts `key` and `value` at a vacant `index` returned by
    /// [`index_of`](Self::index_of) for that same key.
    ///
    /// # Panics
    ///
    /// Panics if the table must grow and cannot.
    pub fn index_insert(&mut self, index: isize, key: K, value: V) {
        self.try_index_insert(index, key, value)
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Fallible version of [`index_insert`](Self::index_insert).
    ///
    /// On error the table is left exactly as it was.
    pub fn try_index_insert(&mut self, index: isize, key: K, value: V) -> Result<(), Error> {
        debug_assert!(index < 0, "The index must not point at an existing key.");
        let slot = !index as usize;

        if key.is_empty() {
            debug_assert_eq!(slot, self.mask + 1);
            self.has_empty_key = true;
            self.values[slot] = value;
            return Ok(());
        }

        debug_assert!(self.keys[slot].is_empty());
        if self.assigned == self.resize_at {
            self.allocate_then_insert_then_rehash(slot, key, value)?;
        } else {
            self.keys[slot] = key;
            self.values[slot] = value;
        }
        self.assigned += 1;

        Ok(())
    }

    /// Removes the key at an existing `index`, returning its value.
    pub fn index_remove(&mut self, index: isize) -> V {
        let slot = self.check_existing(index);
        let value = mem::take(&mut self.values[slot]);
        if slot > self.mask {
            self.has_empty_key = false;
        } else {
            self.shift_conflicting_keys(slot);
        }
        value
    }

    /// Returns `true` if the table contains `key`.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        if key.is_empty() {
            return self.has_empty_key;
        }
        self.find_slot(key).is_ok()
    }

    /// Returns a reference to the value of `key`.
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        let index = self.index_of(key);
        self.index_exists(index).then(|| self.index_get(index))
    }

    /// Returns a mutable reference to the value of `key`.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let index = self.index_of(key);
        if self.index_exists(index) {
            Some(self.index_get_mut(index))
        } else {
            None
        }
    }

    /// Inserts `key` with `value`, returning the value it replaced.
    ///
    /// # Panics
    ///
    /// Panics if the table must grow and cannot.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value)
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Fallible version of [`insert`](Self::insert).
    ///
    /// On error the table is left exactly as it was.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        let index = self.index_of(key);
        if self.index_exists(index) {
            return Ok(Some(self.index_replace(index, value)));
        }

        self.try_index_insert(index, key, value)?;
        Ok(None)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&mut self, key: K) -> Option<V> {
        let index = self.index_of(key);
        self.index_exists(index).then(|| self.index_remove(index))
    }

    /// Removes every entry for which `keep` returns `false`, returning the
    /// number of removed entries.
    ///
    /// `keep` may be invoked more than once for entries that get shifted
    /// across the end of the buffer while earlier entries are removed.
    pub fn retain(&mut self, mut keep: impl FnMut(K, &mut V) -> bool) -> usize {
        let before = self.len();

        let empty_slot = self.mask + 1;
        if self.has_empty_key && !keep(K::EMPTY, &mut self.values[empty_slot]) {
            self.has_empty_key = false;
            self.values[empty_slot] = V::default();
        }

        let mut slot = 0;
        while slot <= self.mask {
            let existing = self.keys[slot];
            if !existing.is_empty() && !keep(existing, &mut self.values[slot]) {
                self.values[slot] = V::default();
                // The shift may pull a later key into this slot: do not advance.
                self.shift_conflicting_keys(slot);
            } else {
                slot += 1;
            }
        }

        before - self.len()
    }

    /// Removes all keys, keeping the allocated buffers.
    pub fn clear(&mut self) {
        self.assigned = 0;
        self.has_empty_key = false;
        self.keys.fill(K::EMPTY);
        self.values.fill_with(V::default);
    }

    /// Removes all keys and shrinks the buffers back to their default size.
    ///
    /// # Panics
    ///
    /// Panics if the default buffers cannot be allocated.
    pub fn release(&mut self) {
        self.try_release()
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Fallible version of [`release`](Self::release).
    pub fn try_release(&mut self) -> Result<(), Error> {
        let buffer_size =
            sizing::min_buffer_size(sizing::DEFAULT_EXPECTED_ELEMENTS, self.load_factor)?;
        self.allocate_buffers(buffer_size)?;
        self.assigned = 0;
        self.has_empty_key = false;
        Ok(())
    }

    /// Grows the table, if needed, so that `expected_elements` keys fit
    /// without further growth.
    ///
    /// # Panics
    ///
    /// Panics if the new buffers cannot be sized or allocated.
    pub fn ensure_capacity(&mut self, expected_elements: usize) {
        self.try_ensure_capacity(expected_elements)
            .unwrap_or_else(|error| capacity_panic(error))
    }

    /// Fallible version of [`ensure_capacity`](Self::ensure_capacity).
    ///
    /// On error the table is left exactly as it was.
    pub fn try_ensure_capacity(&mut self, expected_elements: usize) -> Result<(), Error> {
        if expected_elements > self.resize_at {
            let buffer_size = sizing::min_buffer_size(expected_elements, self.load_factor)?;
            let (prev_keys, prev_values) = self.allocate_buffers(buffer_size)?;
            if !self.is_empty() {
                self.rehash(prev_keys, prev_values);
            }
        }

        Ok(())
    }

    /// Returns an iterator over the entries of the table.
    ///
    /// Each call starts from a different slot with a different stride; the
    /// empty key, if present, is yielded last.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Advances and returns the iteration seed.
    pub(crate) fn next_iteration_seed(&self) -> i32 {
        // mix_phi32 fixes 0, the odd step keeps the sequence moving.
        let seed = mixer::mix_phi32(self.iteration_seed.get().wrapping_add(mixer::PHI_C32));
        self.iteration_seed.set(seed);
        seed
    }

    /// Replaces the buffers with empty ones of `buffer_size` slots (plus
    /// the empty key slot), returning the previous buffers.
    ///
    /// Nothing is modified unless both allocations succeed.
    fn allocate_buffers(&mut self, buffer_size: usize) -> Result<(Box<[K]>, Box<[V]>), Error> {
        debug_assert!(buffer_size.is_power_of_two());

        let keys = alloc_buffer(buffer_size + 1, || K::EMPTY)?;
        let values = alloc_buffer(buffer_size + 1, V::default)?;

        self.resize_at = sizing::expand_at_count(buffer_size, self.load_factor);
        self.mask = buffer_size - 1;

        Ok((
            mem::replace(&mut self.keys, keys),
            mem::replace(&mut self.values, values),
        ))
    }

    /// Grows the buffers, then inserts the pending entry and rehashes.
    ///
    /// The pending entry is written into the old buffers at the probed
    /// `slot` (filling their last free slot) only once the new buffers
    /// exist, and then rehashed with everything else.
    #[cold]
    fn allocate_then_insert_then_rehash(
        &mut self,
        slot: usize,
        pending_key: K,
        pending_value: V,
    ) -> Result<(), Error> {
        debug_assert!(self.assigned == self.resize_at);
        debug_assert!(self.keys[slot].is_empty());
        debug_assert!(!pending_key.is_empty());

        let buffer_size =
            sizing::next_buffer_size(self.mask + 1, self.assigned + 1, self.load_factor)?;
        let (mut prev_keys, mut prev_values) = self.allocate_buffers(buffer_size)?;
        debug_assert!(self.keys.len() > prev_keys.len());

        prev_keys[slot] = pending_key;
        prev_values[slot] = pending_value;
        self.rehash(prev_keys, prev_values);

        Ok(())
    }

    /// Moves every entry of the previous buffers into the current ones.
    fn rehash(&mut self, from_keys: Box<[K]>, mut from_values: Box<[V]>) {
        let mask = self.mask;

        // The empty key slot is copied as is, everything else is re-probed.
        let mut from = from_keys.len() - 1;
        self.keys[mask + 1] = from_keys[from];
        self.values[mask + 1] = mem::take(&mut from_values[from]);

        while from > 0 {
            from -= 1;
            let existing = from_keys[from];
            if existing.is_empty() {
                continue;
            }

            let mut slot = Self::hash_key(existing) & mask;
            while !self.keys[slot].is_empty() {
                slot = (slot + 1) & mask;
            }
            self.keys[slot] = existing;
            self.values[slot] = mem::take(&mut from_values[from]);
        }
    }

    /// Closes the gap at `gap_slot` by shifting back the keys that follow it
    /// and would otherwise become unreachable.
    fn shift_conflicting_keys(&mut self, mut gap_slot: usize) {
        let mask = self.mask;

        let mut distance = 0;
        loop {
            distance += 1;
            let slot = (gap_slot + distance) & mask;
            let existing = self.keys[slot];
            if existing.is_empty() {
                break;
            }

            let ideal_slot = Self::hash_key(existing);
            let shift = slot.wrapping_sub(ideal_slot) & mask;
            if shift >= distance {
                // The gap lies on the probe path of `existing`: move it back.
                self.keys[gap_slot] = existing;
                self.values.swap(gap_slot, slot);
                gap_slot = slot;
                distance = 0;
            }
        }

        self.keys[gap_slot] = K::EMPTY;
        self.values[gap_slot] = V::default();
        self.assigned -= 1;
    }

    /// Computes a histogram of probe distances for the current table state.
    ///
    /// The distance of a key is the number of slots between its home slot
    /// and the slot it occupies. The empty key is not counted.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> ProbeHistogram {
        let mut counts = alloc::vec![0usize; 1];
        for (slot, key) in self.keys[..=self.mask].iter().enumerate() {
            if key.is_empty() {
                continue;
            }
            let distance = slot.wrapping_sub(Self::hash_key(*key)) & self.mask;
            if counts.len() <= distance {
                counts.resize(distance + 1, 0);
            }
            counts[distance] += 1;
        }

        ProbeHistogram { counts }
    }

    /// Collects debug statistics for the current table state.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let histogram = self.probe_histogram();
        let total_distance: usize = histogram
            .counts
            .iter()
            .enumerate()
            .map(|(distance, count)| distance * count)
            .sum();

        let slot_bytes = mem::size_of::<K>() + mem::size_of::<V>();
        DebugStats {
            populated: self.len(),
            capacity: self.resize_at,
            buffer_size: self.mask + 1,
            has_empty_key: self.has_empty_key,
            load_factor: self.load_factor,
            slot_utilization: self.assigned as f64 / (self.mask + 1) as f64,
            max_probe_distance: histogram.counts.len() - 1,
            mean_probe_distance: if self.assigned == 0 {
                0.0
            } else {
                total_distance as f64 / self.assigned as f64
            },
            total_bytes: self.keys.len() * slot_bytes,
            wasted_bytes: (self.keys.len() - self.len()) * slot_bytes,
        }
    }
}
