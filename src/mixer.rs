//! Bit mixing functions used to spread primitive keys over the slot range.
//!
//! All functions are pure and total; zero is a valid input even though
//! containers never hash the empty sentinel.

/// 32-bit golden ratio constant, `2^32 / phi`.
pub const PHI_C32: i32 = 0x9e37_79b9_u32 as i32;

/// 64-bit golden ratio constant, `2^64 / phi`.
pub const PHI_C64: i64 = 0x9e37_79b9_7f4a_7c15_u64 as i64;

/// Murmur3 32-bit finalizer.
#[inline(always)]
pub fn mix32(k: i32) -> i32 {
    let mut h = k as u32;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h as i32
}

/// Murmur3 64-bit finalizer.
#[inline(always)]
pub fn mix64(k: i64) -> i64 {
    let mut h = k as u64;
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h as i64
}

/// [`mix64`] truncated to its low 32 bits.
#[inline(always)]
pub fn mix_i64(k: i64) -> i32 {
    mix64(k) as i32
}

/// Golden ratio multiplicative mix for 32-bit and narrower values.
///
/// Cheaper than [`mix32`]; used for narrow key types and to advance
/// iteration seeds.
#[inline(always)]
pub fn mix_phi32(k: i32) -> i32 {
    let h = k.wrapping_mul(PHI_C32) as u32;
    (h ^ (h >> 16)) as i32
}

/// Golden ratio multiplicative mix for 64-bit values.
#[inline(always)]
pub fn mix_phi64(k: i64) -> i32 {
    let h = k.wrapping_mul(PHI_C64) as u64;
    (h ^ (h >> 32)) as i32
}

/// Golden ratio multiplicative mix for characters.
#[inline(always)]
pub fn mix_phi_char(c: char) -> i32 {
    mix_phi32(c as i32)
}
