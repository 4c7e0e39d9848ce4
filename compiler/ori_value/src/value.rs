//! The structural hash/equality capability.
//!
//! Every runtime value implements [`Structural`]. Generated records and
//! enums implement it too, by composing the combinators from
//! [`crate::hash`] over their own fields exactly the way the built-in
//! composites do:
//!
//! ```
//! use ori_value::{hash_constructor, Structural};
//!
//! enum Shape {
//!     Circle(f64),
//!     Rect(f64, f64),
//! }
//!
//! impl Structural for Shape {
//!     fn hash32(&self) -> u32 {
//!         match self {
//!             Shape::Circle(r) => hash_constructor(0, &[r.hash32()]),
//!             Shape::Rect(w, h) => hash_constructor(1, &[w.hash32(), h.hash32()]),
//!         }
//!     }
//!
//!     fn equal(&self, other: &Self) -> bool {
//!         match (self, other) {
//!             (Shape::Circle(a), Shape::Circle(b)) => a.equal(b),
//!             (Shape::Rect(w1, h1), Shape::Rect(w2, h2)) => w1.equal(w2) && h1.equal(h2),
//!             _ => false,
//!         }
//!     }
//! }
//!
//! assert!(Shape::Circle(1.0).equal(&Shape::Circle(1.0)));
//! assert_ne!(Shape::Circle(2.0).hash32(), Shape::Rect(2.0, 0.0).hash32());
//! ```

use std::hash::{Hash, Hasher};

use crate::shared::Shared;

/// Structural hashing and same-type structural equality.
///
/// Law: `a.equal(b)` implies `a.hash32() == b.hash32()`. Collisions between
/// unequal values are allowed.
pub trait Structural {
    /// 32-bit structural hash, deterministic across runs and hosts.
    fn hash32(&self) -> u32;

    /// Structural equality with another value of the same type.
    fn equal(&self, other: &Self) -> bool;
}

impl<T: Structural + ?Sized> Structural for &T {
    #[inline]
    fn hash32(&self) -> u32 {
        (**self).hash32()
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(*other)
    }
}

impl<T: Structural + ?Sized> Structural for Box<T> {
    #[inline]
    fn hash32(&self) -> u32 {
        (**self).hash32()
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        (**self).equal(&**other)
    }
}

impl<T: Structural + ?Sized> Structural for Shared<T> {
    #[inline]
    fn hash32(&self) -> u32 {
        (**self).hash32()
    }

    #[inline]
    fn equal(&self, other: &Self) -> bool {
        Shared::ptr_eq(self, other) || (**self).equal(&**other)
    }
}

/// Adapter that lets any [`Structural`] value key a standard hash map.
///
/// `Hash` feeds the 32-bit structural hash; `Eq` is structural equality.
#[derive(Clone, Debug)]
pub struct Keyed<T>(pub T);

impl<T: Structural> PartialEq for Keyed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.equal(&other.0)
    }
}

impl<T: Structural> Eq for Keyed<T> {}

impl<T: Structural> Hash for Keyed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.0.hash32());
    }
}
