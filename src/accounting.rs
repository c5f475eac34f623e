//! Memory accounting for containers and the values they hold.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem;

use crate::hash_map::HashMap;
use crate::hash_set::HashSet;
use crate::hash_table::HashTable;
use crate::key::Key;

/// Reports an estimate of the memory owned by a value.
///
/// The estimate includes the value itself and the heap memory it owns, but
/// not allocator overhead.
///
/// # Examples
///
/// ```rust
/// use probe_hash::Accountable;
/// use probe_hash::IntIntHashMap;
///
/// let mut map = IntIntHashMap::new();
/// let empty = map.ram_bytes_used();
/// map.put_all((1..1000).map(|k| (k, k)));
/// assert!(map.ram_bytes_used() > empty);
/// ```
pub trait Accountable {
    /// Returns the number of bytes used by `self`, heap included.
    fn ram_bytes_used(&self) -> usize;
}

macro_rules! impl_accountable_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Accountable for $ty {
                #[inline]
                fn ram_bytes_used(&self) -> usize {
                    mem::size_of::<$ty>()
                }
            }
        )*
    };
}

impl_accountable_primitive!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
);

impl Accountable for String {
    fn ram_bytes_used(&self) -> usize {
        mem::size_of::<String>() + self.capacity()
    }
}

impl<T: Accountable> Accountable for Vec<T> {
    fn ram_bytes_used(&self) -> usize {
        let spare = (self.capacity() - self.len()) * mem::size_of::<T>();
        mem::size_of::<Vec<T>>() + spare + self.iter().map(T::ram_bytes_used).sum::<usize>()
    }
}

impl<T: Accountable> Accountable for Box<T> {
    fn ram_bytes_used(&self) -> usize {
        mem::size_of::<Box<T>>() + (**self).ram_bytes_used()
    }
}

impl<T: Accountable> Accountable for Option<T> {
    fn ram_bytes_used(&self) -> usize {
        match self {
            Some(value) => {
                mem::size_of::<Option<T>>() - mem::size_of::<T>() + value.ram_bytes_used()
            }
            None => mem::size_of::<Option<T>>(),
        }
    }
}

impl<K, V> HashTable<K, V>
where
    K: Key,
    V: Default + Accountable,
{
    /// Returns the bytes held by the key and value buffers, plus the heap
    /// memory owned by live values.
    fn buffer_bytes_used(&self) -> usize {
        let mut bytes =
            self.keys.len() * mem::size_of::<K>() + self.values.len() * mem::size_of::<V>();

        if mem::needs_drop::<V>() {
            bytes += self
                .iter()
                .map(|cursor| {
                    cursor
                        .value
                        .ram_bytes_used()
                        .saturating_sub(mem::size_of::<V>())
                })
                .sum::<usize>();
        }
        bytes
    }
}

impl<K, V> Accountable for HashTable<K, V>
where
    K: Key,
    V: Default + Accountable,
{
    fn ram_bytes_used(&self) -> usize {
        mem::size_of::<Self>() + self.buffer_bytes_used()
    }
}

impl<K> Accountable for HashSet<K>
where
    K: Key,
{
    fn ram_bytes_used(&self) -> usize {
        mem::size_of::<Self>() + self.as_table().buffer_bytes_used()
    }
}

impl<K, V> Accountable for HashMap<K, V>
where
    K: Key,
    V: Default + Accountable,
{
    fn ram_bytes_used(&self) -> usize {
        mem::size_of::<Self>() + self.as_table().buffer_bytes_used()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::sync::Arc;
    use alloc::vec;

    use super::*;
    use crate::IntHashSet;
    use crate::IntIntHashMap;
    use crate::LongObjectHashMap;

    #[derive(Default)]
    #[allow(dead_code)]
    struct Shared(Arc<Vec<u8>>);

    impl Accountable for Shared {
        fn ram_bytes_used(&self) -> usize {
            0
        }
    }

    #[test]
    fn values_reporting_less_than_their_size() {
        let buffer = Arc::new(vec![0u8; 64]);
        let mut map: crate::IntObjectHashMap<Shared> = crate::IntObjectHashMap::new();
        let empty = map.ram_bytes_used();
        for k in 0..3 {
            map.put(k, Shared(Arc::clone(&buffer)));
        }

        assert_eq!(map.ram_bytes_used(), empty);
    }

    #[test]
    fn primitives_report_their_size() {
        assert_eq!(().ram_bytes_used(), 0);
        assert_eq!(7i32.ram_bytes_used(), 4);
        assert_eq!(7i64.ram_bytes_used(), 8);
        assert_eq!('x'.ram_bytes_used(), 4);
    }

    #[test]
    fn owned_values_include_heap() {
        let s = String::with_capacity(100);
        assert_eq!(s.ram_bytes_used(), mem::size_of::<String>() + 100);

        let v: Vec<i32> = vec![1, 2, 3];
        assert_eq!(
            v.ram_bytes_used(),
            mem::size_of::<Vec<i32>>() + (v.capacity() - 3) * 4 + 12
        );

        assert_eq!(None::<String>.ram_bytes_used(), mem::size_of::<Option<String>>());
        assert_eq!(
            Box::new(5u64).ram_bytes_used(),
            mem::size_of::<Box<u64>>() + 8
        );
    }

    #[test]
    fn set_bytes_track_buffer_size() {
        let mut set = IntHashSet::new();
        let buffer_bytes = |set: &IntHashSet| (set.as_table().buffer_size() + 1) * 4;
        assert_eq!(
            set.ram_bytes_used(),
            mem::size_of::<IntHashSet>() + buffer_bytes(&set)
        );

        set.add_all(1..=1000);
        assert_eq!(
            set.ram_bytes_used(),
            mem::size_of::<IntHashSet>() + buffer_bytes(&set)
        );

        let grown = set.ram_bytes_used();
        set.clear();
        assert_eq!(set.ram_bytes_used(), grown);

        set.release();
        assert!(set.ram_bytes_used() < grown);
    }

    #[test]
    fn map_bytes_count_both_buffers() {
        let mut map = IntIntHashMap::new();
        map.put_all((0..100).map(|k| (k, k)));
        let slots = map.as_table().buffer_size() + 1;
        assert_eq!(
            map.ram_bytes_used(),
            mem::size_of::<IntIntHashMap>() + slots * 8
        );
    }

    #[test]
    fn object_values_add_heap_bytes() {
        let mut map: LongObjectHashMap<String> = LongObjectHashMap::new();
        let empty = map.ram_bytes_used();

        map.put(1, "a".repeat(64));
        map.put(0, "b".repeat(32));
        let slots = map.as_table().buffer_size() + 1;
        let base = mem::size_of::<LongObjectHashMap<String>>()
            + slots * (mem::size_of::<i64>() + mem::size_of::<String>());
        assert_eq!(map.ram_bytes_used(), base + 64 + 32);
        assert!(map.ram_bytes_used() > empty);

        map.remove(1);
        assert_eq!(map.ram_bytes_used(), base + 32);

        map.put(2, "c".to_string());
        assert!(map.ram_bytes_used() >= base + 32 + 1);
    }
}
