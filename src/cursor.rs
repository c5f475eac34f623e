//! Cursors and the randomized traversal shared by every container.

use core::iter::FusedIterator;

use crate::hash_table::HashTable;
use crate::key::Key;
use crate::sizing;

/// A map entry seen during iteration.
///
/// `index` is the slot of the entry and can be passed to the `index_*`
/// operations of the container as long as it is not structurally modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'a, K, V> {
    /// Slot of the entry; `buffer_size()` for the empty key.
    pub index: usize,
    /// The key.
    pub key: K,
    /// The value.
    pub value: &'a V,
}

/// A set key seen during iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCursor<K> {
    /// Slot of the key; `buffer_size()` for the empty key.
    pub index: usize,
    /// The key.
    pub key: K,
}

/// Iterator over the entries of a [`HashTable`].
///
/// The walk starts at a seed-dependent slot and steps by an odd stride, so
/// it visits every slot once in an order that differs between iterators.
/// The empty key comes last.
pub struct Iter<'a, K, V> {
    table: &'a HashTable<K, V>,
    slot: usize,
    increment: usize,
    index: usize,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Key,
    V: Default,
{
    pub(crate) fn new(table: &'a HashTable<K, V>) -> Self {
        let seed = table.next_iteration_seed();
        Self {
            table,
            slot: seed as u32 as usize & table.mask,
            increment: sizing::iteration_increment(seed),
            index: 0,
            remaining: table.len(),
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table,
            slot: self.slot,
            increment: self.increment,
            index: self.index,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Key,
{
    type Item = Cursor<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let table = self.table;
        let mask = table.mask;

        while self.index <= mask {
            self.index += 1;
            self.slot = (self.slot + self.increment) & mask;
            let key = table.keys[self.slot];
            if !key.is_empty() {
                self.remaining -= 1;
                return Some(Cursor {
                    index: self.slot,
                    key,
                    value: &table.values[self.slot],
                });
            }
        }

        if self.index == mask + 1 && table.has_empty_key {
            self.index += 1;
            self.remaining -= 1;
            return Some(Cursor {
                index: mask + 1,
                key: K::EMPTY,
                value: &table.values[mask + 1],
            });
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Key, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Key, V> FusedIterator for Iter<'_, K, V> {}
