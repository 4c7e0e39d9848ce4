//! Reference-counted sharing for list cells and erased values.
//!
//! The pointer type follows the `single-threaded` feature: `Arc` by default,
//! `Rc` when the compiled program promises never to cross threads. Code in
//! this crate names `Shared` and `ThreadSafe` and never picks either
//! directly.

/// Shared ownership pointer for immutable runtime data.
#[cfg(not(feature = "single-threaded"))]
pub type Shared<T> = std::sync::Arc<T>;

/// Shared ownership pointer for immutable runtime data.
#[cfg(feature = "single-threaded")]
pub type Shared<T> = std::rc::Rc<T>;

/// Bound required of anything stored behind a [`Shared`] trait object.
///
/// `Send + Sync` with default features, no bound at all under
/// `single-threaded`.
#[cfg(not(feature = "single-threaded"))]
pub trait ThreadSafe: Send + Sync {}

#[cfg(not(feature = "single-threaded"))]
impl<T: Send + Sync + ?Sized> ThreadSafe for T {}

/// Bound required of anything stored behind a [`Shared`] trait object.
///
/// `Send + Sync` with default features, no bound at all under
/// `single-threaded`.
#[cfg(feature = "single-threaded")]
pub trait ThreadSafe {}

#[cfg(feature = "single-threaded")]
impl<T: ?Sized> ThreadSafe for T {}
