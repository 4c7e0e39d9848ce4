//! First-class function values.
//!
//! Closures are opaque to structural comparison. A function value equals
//! only itself (the same shared allocation, including clones of it) and
//! every function hashes to [`NIL_HASH`], so functions can sit inside
//! hashed aggregates without breaking hash/equality consistency.

use std::fmt;
use std::ops::Deref;

use crate::hash::NIL_HASH;
use crate::shared::Shared;
use crate::value::Structural;

/// Shared handle to a callable.
///
/// `F` is usually a trait object such as
/// `dyn Fn(i64) -> i64 + Send + Sync`; [`FunctionValue::new`] covers
/// concrete closure types.
pub struct FunctionValue<F: ?Sized>(Shared<F>);

impl<F> FunctionValue<F> {
    pub fn new(function: F) -> Self {
        FunctionValue(Shared::new(function))
    }
}

impl<F: ?Sized> FunctionValue<F> {
    /// Wrap an already shared callable, typically unsized to a trait object.
    pub fn from_shared(function: Shared<F>) -> Self {
        FunctionValue(function)
    }

    pub fn get(&self) -> &F {
        &self.0
    }

    /// Whether both handles refer to the same closure allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Shared::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> Structural for FunctionValue<F> {
    fn hash32(&self) -> u32 {
        NIL_HASH
    }

    fn equal(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<F: ?Sized> Clone for FunctionValue<F> {
    fn clone(&self) -> Self {
        FunctionValue(Shared::clone(&self.0))
    }
}

impl<F: ?Sized> Deref for FunctionValue<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.0
    }
}

impl<F: ?Sized> fmt::Debug for FunctionValue<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function>")
    }
}

#[cfg(test)]
mod tests;
