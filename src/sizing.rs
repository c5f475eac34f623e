//! Buffer sizing policy shared by every container.
//!
//! Buffers are always a power of two long (plus one reserved slot for the
//! empty key, which is not accounted for here), and always keep at least one
//! empty slot so that linear probing terminates.

use core::hash::BuildHasher;

use crate::error::Error;
use crate::mixer;

/// Number of elements a default-constructed container can hold without
/// growing.
pub const DEFAULT_EXPECTED_ELEMENTS: usize = 4;

/// Load factor used when none is given.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Smallest accepted load factor.
pub const MIN_LOAD_FACTOR: f64 = 1.0 / 100.0;

/// Largest accepted load factor.
pub const MAX_LOAD_FACTOR: f64 = 99.0 / 100.0;

/// Smallest buffer size, in slots.
pub const MIN_BUFFER_SIZE: usize = 4;

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "16")] {
        /// Largest buffer size, in slots.
        pub const MAX_BUFFER_SIZE: usize = 1 << 13;
    } else {
        /// Largest buffer size, in slots.
        ///
        /// Slot indices must fit in a non-negative `isize` once complemented
        /// by [`index_of`](crate::HashTable::index_of).
        pub const MAX_BUFFER_SIZE: usize = 1 << 30;
    }
}

/// Returns the buffer size needed to hold `elements` at `load_factor`.
///
/// The result is the smallest power of two that is at least
/// `ceil(elements / load_factor)` (one more if that equals `elements`, so an
/// empty slot always remains), and at least [`MIN_BUFFER_SIZE`].
pub fn min_buffer_size(elements: usize, load_factor: f64) -> Result<usize, Error> {
    let overflow = Error::CapacityOverflow {
        elements,
        load_factor,
    };

    let length = (elements as f64 / load_factor).ceil();
    if length > MAX_BUFFER_SIZE as f64 {
        return Err(overflow);
    }

    let mut length = length as usize;
    if length == elements {
        length += 1;
    }

    let length = length.max(MIN_BUFFER_SIZE).next_power_of_two();
    if length > MAX_BUFFER_SIZE {
        return Err(overflow);
    }

    Ok(length)
}

/// Returns the number of assigned slots at which a buffer of `buffer_size`
/// slots must grow.
#[inline]
pub fn expand_at_count(buffer_size: usize, load_factor: f64) -> usize {
    debug_assert!(buffer_size.is_power_of_two());
    (buffer_size - 1).min((buffer_size as f64 * load_factor).ceil() as usize)
}

/// Returns the buffer size following `buffer_size` on growth.
///
/// The buffer at least doubles, and keeps doubling until it can hold
/// `elements` without growing again. Small load factors may need several
/// doublings before the resize threshold moves.
pub fn next_buffer_size(
    buffer_size: usize,
    elements: usize,
    load_factor: f64,
) -> Result<usize, Error> {
    debug_assert!(buffer_size.is_power_of_two());
    let mut length = buffer_size;
    loop {
        if length >= MAX_BUFFER_SIZE {
            return Err(Error::CapacityOverflow {
                elements,
                load_factor,
            });
        }
        length <<= 1;
        if expand_at_count(length, load_factor) >= elements {
            return Ok(length);
        }
    }
}

/// Returns the traversal stride for `seed`.
///
/// The stride is a small odd number, hence coprime with every power-of-two
/// buffer size: stepping by it visits every slot exactly once per lap.
#[inline]
pub fn iteration_increment(seed: i32) -> usize {
    (29 + ((seed & 7) << 1)) as usize
}

/// Validates `load_factor` against the inclusive `[min, max]` range.
pub fn check_load_factor(load_factor: f64, min: f64, max: f64) -> Result<f64, Error> {
    if !(min..=max).contains(&load_factor) {
        return Err(Error::InvalidLoadFactor {
            load_factor,
            min,
            max,
        });
    }

    Ok(load_factor)
}

/// Returns the starting iteration seed of a new container.
///
/// Every call draws from a fresh `foldhash` random state, so unrelated
/// containers do not share traversal orders.
pub fn initial_iteration_seed() -> i32 {
    let state = foldhash::fast::RandomState::default();
    mixer::mix_phi64(state.hash_one(mixer::PHI_C64) as i64)
}
