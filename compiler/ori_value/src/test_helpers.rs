//! Shared helpers for unit tests.

use std::panic::{self, AssertUnwindSafe};

use crate::error::{RuntimeError, RuntimePanic};

/// Run `f`, which must raise a runtime fault, and return the fault.
///
/// Panics (failing the test) if `f` returns normally or unwinds with some
/// other payload.
pub(crate) fn catch_fault<R>(f: impl FnOnce() -> R) -> RuntimeError {
    let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) else {
        panic!("expected a runtime fault, but the call returned");
    };
    match payload.downcast::<RuntimePanic>() {
        Ok(fault) => fault.error,
        Err(_) => panic!("expected a RuntimePanic payload"),
    }
}
