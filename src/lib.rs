#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Memory accounting for containers and their values.
pub mod accounting;

pub mod cursor;
pub mod error;

/// A map from primitive keys to values using linear probing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and adds
/// the map operations (`put`, `put_or_add`, `get`, the key and value views).
pub mod hash_map;

/// A set of primitive keys using linear probing.
///
/// This module provides a `HashSet` that wraps the `HashTable` with a unit
/// value type.
pub mod hash_set;

/// The linear-probing table shared by the sets and maps.
///
/// This module provides `HashTable`, which owns the key and value buffers
/// and implements probing, growth, backward-shift deletion and the index
/// API.
pub mod hash_table;
pub mod key;
pub mod mixer;
pub mod sizing;

pub use accounting::Accountable;
pub use cursor::Cursor;
pub use cursor::KeyCursor;
pub use error::Error;
pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hash_table::HashTable;
pub use key::Key;

/// A set of `char` keys.
pub type CharHashSet = HashSet<char>;
/// A set of `i32` keys.
pub type IntHashSet = HashSet<i32>;
/// A set of `i64` keys.
pub type LongHashSet = HashSet<i64>;

/// A map from `i32` keys to `i32` values.
pub type IntIntHashMap = HashMap<i32, i32>;
/// A map from `i32` keys to `i64` values.
pub type IntLongHashMap = HashMap<i32, i64>;
/// A map from `i32` keys to owned values.
pub type IntObjectHashMap<V> = HashMap<i32, V>;
/// A map from `i64` keys to `i32` values.
pub type LongIntHashMap = HashMap<i64, i32>;
/// A map from `i64` keys to `i64` values.
pub type LongLongHashMap = HashMap<i64, i64>;
/// A map from `i64` keys to owned values.
pub type LongObjectHashMap<V> = HashMap<i64, V>;
/// A map from `char` keys to `i32` values.
pub type CharIntHashMap = HashMap<char, i32>;
/// A map from `char` keys to owned values.
pub type CharObjectHashMap<V> = HashMap<char, V>;
