//! Hash combinators shared by every runtime value.
//!
//! All structural hashes are 32-bit FNV-1 streams. Child hashes are fed as
//! their 4 little-endian bytes, so a composite hash depends only on its
//! children's hashes and their order, never on memory layout.
//!
//! - Products fold through [`hash_tuple`].
//! - Sum-type variants fold through [`hash_constructor`], which prefixes the
//!   variant tag so `Ok(x)` and `Error(x)` land in different places.
//! - Sequences use [`OrderedCollectionHasher`] (order matters).
//! - Bags use [`UnorderedCollectionHasher`] (XOR fold, order ignored).
//!
//! These hashes are for structural equality checks and map keys. They are
//! not collision resistant against adversarial input.

/// FNV-1 32-bit offset basis.
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
/// FNV-1 32-bit prime.
const FNV_PRIME: u32 = 16_777_619;

/// Canonical hash of the nil value and the empty tuple: `hash_tuple(&[])`.
pub const NIL_HASH: u32 = hash_tuple(&[]);

/// 32-bit FNV-1 stream hasher.
///
/// Multiply-then-XOR per byte. Every method is `const` so canonical hashes
/// (nil, booleans) are computed at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fnv32 {
    state: u32,
}

impl Fnv32 {
    /// Create a hasher at the offset basis.
    #[inline]
    pub const fn new() -> Self {
        Fnv32 {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Feed raw bytes.
    #[inline]
    #[must_use]
    pub const fn write(mut self, bytes: &[u8]) -> Self {
        let mut i = 0;
        while i < bytes.len() {
            self.state = self.state.wrapping_mul(FNV_PRIME) ^ bytes[i] as u32;
            i += 1;
        }
        self
    }

    /// Feed a 32-bit word as its 4 little-endian bytes.
    #[inline]
    #[must_use]
    pub const fn write_u32(self, word: u32) -> Self {
        self.write(&word.to_le_bytes())
    }

    /// Current hash value.
    #[inline]
    pub const fn finish(self) -> u32 {
        self.state
    }

    /// Hash a complete byte string in one call.
    #[inline]
    pub const fn hash_bytes(bytes: &[u8]) -> u32 {
        Fnv32::new().write(bytes).finish()
    }
}

impl Default for Fnv32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold child hashes of an ordered product.
///
/// With no children this is [`NIL_HASH`].
pub const fn hash_tuple(child_hashes: &[u32]) -> u32 {
    let mut h = Fnv32::new();
    let mut i = 0;
    while i < child_hashes.len() {
        h = h.write_u32(child_hashes[i]);
        i += 1;
    }
    h.finish()
}

/// Fold child hashes of a sum-type variant, prefixed by its tag.
///
/// Two variants with identical payload hashes still differ as long as their
/// tags differ.
pub const fn hash_constructor(tag: u32, child_hashes: &[u32]) -> u32 {
    let mut h = Fnv32::new().write_u32(tag);
    let mut i = 0;
    while i < child_hashes.len() {
        h = h.write_u32(child_hashes[i]);
        i += 1;
    }
    h.finish()
}

/// Order-sensitive accumulator for sequence hashes.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderedCollectionHasher {
    h: Fnv32,
}

impl OrderedCollectionHasher {
    pub const fn new() -> Self {
        OrderedCollectionHasher { h: Fnv32::new() }
    }

    /// Append one element hash.
    #[inline]
    pub fn write_hash(&mut self, elem_hash: u32) {
        self.h = self.h.write_u32(elem_hash);
    }

    pub const fn finish(&self) -> u32 {
        self.h.finish()
    }
}

/// Order-insensitive accumulator for bag/set/map hashes.
///
/// Element hashes are XORed (commutative and associative), then the XOR is
/// hashed once more on `finish` so an empty bag does not hash to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnorderedCollectionHasher {
    acc: u32,
}

impl UnorderedCollectionHasher {
    pub const fn new() -> Self {
        UnorderedCollectionHasher { acc: 0 }
    }

    /// Mix in one element hash.
    #[inline]
    pub fn write_hash(&mut self, elem_hash: u32) {
        self.acc ^= elem_hash;
    }

    pub const fn finish(&self) -> u32 {
        Fnv32::new().write_u32(self.acc).finish()
    }
}

/// Hash a sequence of element hashes in order.
pub fn hash_ordered(hashes: impl IntoIterator<Item = u32>) -> u32 {
    let mut hasher = OrderedCollectionHasher::new();
    for h in hashes {
        hasher.write_hash(h);
    }
    hasher.finish()
}

/// Hash a bag of element hashes, ignoring order.
pub fn hash_unordered(hashes: impl IntoIterator<Item = u32>) -> u32 {
    let mut hasher = UnorderedCollectionHasher::new();
    for h in hashes {
        hasher.write_hash(h);
    }
    hasher.finish()
}
