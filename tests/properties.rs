// Model-based properties of the sets and maps.
//
// Each property drives a container and a `std` model with the same
// operation sequence and compares them. Key ranges are kept small so that
// sequences hit duplicates, the empty key and long collision chains.
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use probe_hash::Error;
use probe_hash::HashSet;
use probe_hash::IntHashSet;
use probe_hash::IntIntHashMap;
use probe_hash::LongHashSet;
use probe_hash::LongLongHashMap;
use proptest::prelude::*;

fn set_ops() -> impl Strategy<Value = Vec<(bool, i32)>> {
    proptest::collection::vec((any::<bool>(), -64i32..64), 1..400)
}

proptest! {
    #[test]
    fn prop_set_round_trip(ops in set_ops()) {
        let mut set = IntHashSet::with_capacity(0);
        let mut model = BTreeSet::new();

        for (add, k) in ops {
            if add {
                prop_assert_eq!(set.add(k), model.insert(k));
            } else {
                prop_assert_eq!(set.remove(k), model.remove(&k));
            }
            prop_assert_eq!(set.contains(k), model.contains(&k));
            prop_assert_eq!(set.len(), model.len());
        }

        for k in -64..64 {
            prop_assert_eq!(set.contains(k), model.contains(&k));
        }
    }

    #[test]
    fn prop_size_matches_iteration(ops in set_ops()) {
        let mut set = IntHashSet::new();
        for (add, k) in ops {
            if add {
                set.add(k);
            } else {
                set.remove(k);
            }
            prop_assert_eq!(set.iter().count(), set.len());
            prop_assert_eq!(set.to_vec().len(), set.len());
        }

        let iterated: BTreeSet<i32> = set.iter().collect();
        let exported: BTreeSet<i32> = set.to_vec().into_iter().collect();
        prop_assert_eq!(iterated, exported);
    }

    #[test]
    fn prop_resize_preserves_contents(
        expected in 0usize..200,
        load_factor in 0.05f64..0.95,
        base in 1i64..(i64::MAX / 2),
    ) {
        let mut set = LongHashSet::with_capacity_and_load_factor(expected, load_factor).unwrap();
        let resize_at = set.capacity();
        let keys: Vec<i64> = (0..=resize_at as i64).map(|i| base + i).collect();

        for &k in &keys {
            prop_assert!(set.add(k));
        }
        prop_assert!(set.capacity() > resize_at);
        prop_assert_eq!(set.len(), keys.len());
        for &k in &keys {
            prop_assert!(set.contains(k));
        }
    }

    #[test]
    fn prop_reachable_after_deletion(
        keys in proptest::collection::btree_set(-2000i32..2000, 1..500),
        removed in proptest::collection::vec(any::<bool>(), 500),
    ) {
        let mut set: IntHashSet = keys.iter().copied().collect();
        let mut remaining = BTreeSet::new();
        for (k, &remove) in keys.iter().zip(removed.iter()) {
            if remove {
                prop_assert!(set.remove(*k));
            } else {
                remaining.insert(*k);
            }
        }

        prop_assert_eq!(set.len(), remaining.len());
        for k in &remaining {
            prop_assert!(set.contains(*k));
            prop_assert!(set.index_exists(set.index_of(*k)));
        }
    }

    #[test]
    fn prop_equality_ignores_insertion_order(
        (keys, shuffled) in proptest::collection::vec(-500i32..500, 0..300)
            .prop_flat_map(|keys| (Just(keys.clone()), Just(keys).prop_shuffle())),
    ) {
        let a: IntHashSet = keys.iter().copied().collect();
        let mut b = IntHashSet::with_capacity(1000);
        b.add_all(shuffled);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());

        let ma: IntIntHashMap = keys.iter().map(|&k| (k, k ^ 0x55)).collect();
        let mb: IntIntHashMap = a.iter().map(|k| (k, k ^ 0x55)).collect();
        prop_assert_eq!(&ma, &mb);
        prop_assert_eq!(ma.hash_code(), mb.hash_code());
    }

    #[test]
    fn prop_clone_independence(
        keys in proptest::collection::vec(-100i32..100, 0..100),
        extra in -100i32..100,
    ) {
        let original: IntHashSet = keys.iter().copied().collect();
        let snapshot: BTreeSet<i32> = original.iter().collect();

        let mut cloned = original.clone();
        prop_assert_eq!(&cloned, &original);
        if !cloned.remove(extra) {
            cloned.add(extra);
        }

        let after: BTreeSet<i32> = original.iter().collect();
        prop_assert_eq!(after, snapshot);
        prop_assert_ne!(&cloned, &original);
    }

    #[test]
    fn prop_map_matches_model(
        ops in proptest::collection::vec((0u8..4, -32i64..32, any::<i64>()), 1..400),
    ) {
        let mut map = LongLongHashMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for (op, k, v) in ops {
            match op {
                0 => prop_assert_eq!(map.put(k, v), model.insert(k, v)),
                1 => prop_assert_eq!(map.remove(k), model.remove(&k)),
                2 => {
                    let expected = match model.get(&k) {
                        Some(current) => current.wrapping_add(v),
                        None => 1,
                    };
                    model.insert(k, expected);
                    prop_assert_eq!(map.put_or_add(k, 1, v), expected);
                }
                _ => {
                    let added = !model.contains_key(&k);
                    if added {
                        model.insert(k, v);
                    }
                    prop_assert_eq!(map.put_if_absent(k, v), added);
                }
            }
            prop_assert_eq!(map.get(k), model.get(&k));
            prop_assert_eq!(map.len(), model.len());
        }

        let entries: BTreeMap<i64, i64> = map.iter().map(|(k, v)| (k, *v)).collect();
        prop_assert_eq!(entries, model);
    }

    #[test]
    fn prop_out_of_range_load_factor_is_rejected(
        load_factor in prop_oneof![-10.0f64..0.0099, 0.9901f64..10.0],
    ) {
        let result = HashSet::<i32>::with_capacity_and_load_factor(16, load_factor);
        let rejected = matches!(result, Err(Error::InvalidLoadFactor { .. }));
        prop_assert!(rejected);
    }
}

#[test]
fn zero_and_one_load_factors_are_rejected() {
    for load_factor in [0.0, 1.0] {
        assert!(matches!(
            IntHashSet::with_capacity_and_load_factor(10, load_factor),
            Err(Error::InvalidLoadFactor { .. })
        ));
        assert!(matches!(
            IntIntHashMap::with_capacity_and_load_factor(10, load_factor),
            Err(Error::InvalidLoadFactor { .. })
        ));
    }
}

#[test]
fn colliding_middle_key_removal() {
    let mut set = IntHashSet::with_capacity(16);
    let mask = 31;

    // Three keys sharing a home slot in the 32-slot buffer.
    let keys: Vec<i32> = (1..)
        .filter(|&k: &i32| (probe_hash::mixer::mix32(k) as u32 as usize) & mask == 7)
        .take(3)
        .collect();
    for &k in &keys {
        set.add(k);
    }

    assert!(set.remove(keys[1]));
    assert!(set.contains(keys[0]));
    assert!(set.contains(keys[2]));
    assert_eq!(set.index_of(keys[2]), 8);
}
