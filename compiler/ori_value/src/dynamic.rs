//! Type-erased runtime values.
//!
//! `Dynamic` is the view reflection-style consumers get of a composite
//! value: a shared box that still knows how to hash and compare itself.
//! Dispatch goes through a private object-safe mirror of [`Structural`],
//! so no concrete type needs to be known after erasure.

use std::any::Any;
use std::fmt;

use crate::shared::{Shared, ThreadSafe};
use crate::value::Structural;

/// Object-safe mirror of `Structural`, plus downcasting.
trait ErasedValue: Any + fmt::Debug + ThreadSafe {
    fn erased_hash(&self) -> u32;
    fn erased_equal(&self, other: &dyn ErasedValue) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T> ErasedValue for T
where
    T: Structural + fmt::Debug + ThreadSafe + 'static,
{
    fn erased_hash(&self) -> u32 {
        self.hash32()
    }

    fn erased_equal(&self, other: &dyn ErasedValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.equal(other))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A shared, dynamically typed runtime value.
///
/// Cloning is a refcount bump. Two `Dynamic`s are equal when they wrap the
/// same concrete type and the wrapped values are structurally equal; values
/// of different types are never equal, even if their hashes coincide.
#[derive(Clone)]
pub struct Dynamic(Shared<dyn ErasedValue>);

impl Dynamic {
    /// Erase a runtime value.
    pub fn new<T>(value: T) -> Self
    where
        T: Structural + fmt::Debug + ThreadSafe + 'static,
    {
        Dynamic(Shared::new(value))
    }

    /// Borrow the wrapped value if it is a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        (*self.0).as_any().downcast_ref::<T>()
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: 'static>(&self) -> bool {
        (*self.0).as_any().is::<T>()
    }

    /// Rust type name of the wrapped value, for diagnostics only.
    pub fn type_name(&self) -> &'static str {
        (*self.0).type_name()
    }

    /// Whether both handles share one allocation.
    pub fn ptr_eq(&self, other: &Dynamic) -> bool {
        Shared::ptr_eq(&self.0, &other.0)
    }
}

impl Structural for Dynamic {
    fn hash32(&self) -> u32 {
        self.0.erased_hash()
    }

    fn equal(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.erased_equal(&*other.0)
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dynamic({:?})", &*self.0)
    }
}

#[cfg(test)]
mod tests;
