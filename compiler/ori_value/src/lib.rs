//! Ori Value Runtime (`libori_value`)
//!
//! Value representation shared by every program the Ori backends emit.
//! Generated code constructs these values, compares and hashes them
//! structurally, and packs them into binary segments. It never reimplements
//! value semantics itself.
//!
//! # Build Modes
//!
//! - **rlib**: For Rust consumers (backends, tests)
//! - **staticlib**: For linking into compiled programs
//!
//! # Value Categories
//!
//! - **Capability**: [`Structural`] (32-bit structural hash + same-type equality)
//! - **Combinators**: [`hash_tuple`], [`hash_constructor`], collection hashers
//! - **Primitives**: `i64`, `f64`, `char`, `String`, `bool`, [`Nil`]
//! - **Products**: Rust tuples of 0 to 9 fields via [`Tuple`]
//! - **Sums**: [`List`], [`ResultValue`]
//! - **Binary**: [`BitArray`] plus the segment encoders in [`codec`]
//! - **Erasure**: [`Dynamic`] for reflection-style consumers
//!
//! # Failure Model
//!
//! Contract violations (head of an empty list, wrong result variant,
//! unsupported codec width) are fatal: they unwind with a [`RuntimePanic`]
//! payload. Every fatal accessor has a `try_` twin returning
//! [`RuntimeError`] for callers that cannot prove the precondition.
//! Division by zero is not a failure; see [`arith`].
//!
//! # Threading
//!
//! All values are immutable. With default features list cells, dynamic
//! values and function values are `Arc`-shared and every value is
//! `Send + Sync`. The `single-threaded` feature swaps in `Rc`.

pub mod arith;
mod bit_array;
pub mod codec;
mod dynamic;
mod error;
mod function;
mod hash;
mod list;
mod primitives;
mod result;
mod shared;
mod tuple;
mod value;

#[cfg(test)]
mod test_helpers;

pub use bit_array::{to_bit_array, BitArray};
pub use dynamic::Dynamic;
pub use error::{fatal, RuntimeError, RuntimePanic};
pub use function::FunctionValue;
pub use hash::{
    hash_constructor, hash_ordered, hash_tuple, hash_unordered, Fnv32, OrderedCollectionHasher,
    UnorderedCollectionHasher, NIL_HASH,
};
pub use list::{Iter, List, ListView};
pub use primitives::{Nil, FALSE_HASH, TRUE_HASH};
pub use result::ResultValue;
pub use shared::{Shared, ThreadSafe};
pub use tuple::{DynamicFields, Tuple};
pub use value::{Keyed, Structural};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ori_value=debug` or `RUST_LOG=ori_value=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
