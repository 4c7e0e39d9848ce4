//! Structural hashing for the primitive runtime types.
//!
//! Primitives map straight onto host types: `Int` is `i64`, `Float` is
//! `f64`, `UtfCodepoint` is `char`, `String` is `String`/`str`, `Bool` is
//! `bool` and `Nil` is `()`. Hashes come from the bit pattern or the UTF-8
//! bytes; equality is native equality.

use crate::hash::{hash_tuple, Fnv32, NIL_HASH};
use crate::value::Structural;

/// The unit value. Shares its representation with the empty tuple.
pub type Nil = ();

/// Hash of `true`. Aligned with `hash_tuple(&[1])`, the same tag encoding
/// the constructor hashes use.
pub const TRUE_HASH: u32 = hash_tuple(&[1]);

/// Hash of `false`. Aligned with `hash_tuple(&[0])`.
pub const FALSE_HASH: u32 = hash_tuple(&[0]);

impl Structural for i64 {
    #[inline]
    fn hash32(&self) -> u32 {
        Fnv32::hash_bytes(&self.to_le_bytes())
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for f64 {
    /// `0.0 == -0.0` natively, so negative zero hashes as positive zero to
    /// keep hashes consistent with equality.
    #[inline]
    fn hash32(&self) -> u32 {
        let bits = if *self == 0.0 { 0 } else { self.to_bits() };
        Fnv32::hash_bytes(&bits.to_le_bytes())
    }

    #[inline]
    #[allow(
        clippy::float_cmp,
        reason = "runtime float equality is exact IEEE equality"
    )]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for char {
    #[inline]
    fn hash32(&self) -> u32 {
        Fnv32::hash_bytes(&u32::from(*self).to_le_bytes())
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for str {
    #[inline]
    fn hash32(&self) -> u32 {
        Fnv32::hash_bytes(self.as_bytes())
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for String {
    #[inline]
    fn hash32(&self) -> u32 {
        self.as_str().hash32()
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for bool {
    #[inline]
    fn hash32(&self) -> u32 {
        if *self {
            TRUE_HASH
        } else {
            FALSE_HASH
        }
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        self == other
    }
}

impl Structural for () {
    #[inline]
    fn hash32(&self) -> u32 {
        NIL_HASH
    }

    #[inline]
    fn equal(&self, _other: &Self) -> bool {
        true
    }
}
