//! Primitive key types accepted by the containers.

use core::fmt::Debug;

use crate::mixer;

/// A fixed-width primitive usable as a container key.
///
/// Each key type reserves one value, [`Key::EMPTY`], to mark unoccupied
/// slots. The containers still accept that value as a key: it is tracked
/// with a flag and a dedicated slot past the end of the probe range.
pub trait Key: Copy + Eq + Debug {
    /// The value marking an unoccupied slot.
    const EMPTY: Self;

    /// Spreads the key's bits; the low bits select the home slot.
    fn mix(self) -> i32;

    /// Returns `true` if this is the reserved empty value.
    #[inline(always)]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

macro_rules! impl_key {
    ($($ty:ty => $empty:expr, |$k:ident| $mix:expr;)*) => {
        $(
            impl Key for $ty {
                const EMPTY: Self = $empty;

                #[inline(always)]
                fn mix(self) -> i32 {
                    let $k = self;
                    $mix
                }
            }
        )*
    };
}

impl_key! {
    i32 => 0, |k| mixer::mix32(k);
    u32 => 0, |k| mixer::mix32(k as i32);
    i64 => 0, |k| mixer::mix_i64(k);
    u64 => 0, |k| mixer::mix_i64(k as i64);
    i16 => 0, |k| mixer::mix_phi32(k as i32);
    u16 => 0, |k| mixer::mix_phi32(k as i32);
    char => '\0', |k| mixer::mix_phi_char(k);
}
