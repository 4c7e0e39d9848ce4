//! Runtime fault taxonomy.
//!
//! Faults here are contract violations by the caller: generated code only
//! reaches them when the compiler failed to prove a precondition it relied
//! on. Fatal accessors raise them through [`fatal`]; the `try_` accessors
//! return them as ordinary errors.
//!
//! Division by zero is deliberately absent. It yields zero (see
//! [`crate::arith`]).

use std::panic;

use thiserror::Error;

/// A caller contract violation detected by the runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// `head` or `tail` on an empty list.
    #[error("{operation} called on an empty list")]
    EmptyListAccess { operation: &'static str },

    /// `as_ok` on an `Error` value, or `as_error` on an `Ok` value.
    #[error("expected {expected} value")]
    WrongVariantAccess { expected: &'static str },

    /// Integer or float codec asked for a width other than 32 or 64 bits.
    #[error("sized values must be 32-bit or 64-bit, got size of {bits} bits")]
    UnsupportedWidth { bits: u64 },
}

/// Unwinding payload raised by [`fatal`].
///
/// Entry points that want to survive a fault catch it with
/// `std::panic::catch_unwind` and downcast to this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimePanic {
    pub error: RuntimeError,
}

/// Abort the current call stack with a runtime fault.
///
/// Values are immutable, so unwinding never leaves shared state
/// half-updated.
#[cold]
#[inline(never)]
pub fn fatal(error: RuntimeError) -> ! {
    tracing::error!(%error, "runtime fault");
    panic::panic_any(RuntimePanic { error })
}
