//! The tuple family: products of 0 to 9 fields.
//!
//! Runtime tuples are plain Rust tuples, so construction and literal-index
//! access (`t.0`, `t.1`, ...) compile to field accesses with no dispatch.
//! This module adds structural hashing and the runtime-indexed, erased
//! views used by pattern-match checks and debugging.
//!
//! `()` is both the empty tuple and [`crate::Nil`]; its `Structural` impl
//! lives with the primitives.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::dynamic::Dynamic;
use crate::hash::hash_tuple;
use crate::shared::ThreadSafe;
use crate::value::Structural;

/// Erased fields of a tuple, in declared order.
pub type DynamicFields = SmallVec<[Dynamic; 4]>;

/// Runtime-indexed view of a fixed-arity product.
pub trait Tuple: Structural {
    /// Number of fields.
    const ARITY: usize;

    /// Every field, erased, in declared order.
    fn to_dynamic(&self) -> DynamicFields;

    /// Field at `index`, erased. `None` outside `0..ARITY`, including
    /// negative indices.
    fn get_at(&self, index: i64) -> Option<Dynamic>;
}

impl Tuple for () {
    const ARITY: usize = 0;

    fn to_dynamic(&self) -> DynamicFields {
        SmallVec::new()
    }

    fn get_at(&self, _index: i64) -> Option<Dynamic> {
        None
    }
}

/// One `Structural` + `Tuple` impl pair per arity.
///
/// Hash is `hash_tuple` over field hashes in declared order. Equality is a
/// short-circuiting conjunction of field equalities.
macro_rules! impl_tuple {
    ($arity:literal => $($idx:tt : $T:ident),+) => {
        impl<$($T: Structural),+> Structural for ($($T,)+) {
            #[inline]
            fn hash32(&self) -> u32 {
                hash_tuple(&[$(self.$idx.hash32()),+])
            }

            #[inline]
            fn equal(&self, other: &Self) -> bool {
                $(self.$idx.equal(&other.$idx))&&+
            }
        }

        impl<$($T),+> Tuple for ($($T,)+)
        where
            $($T: Structural + Clone + fmt::Debug + ThreadSafe + 'static),+
        {
            const ARITY: usize = $arity;

            fn to_dynamic(&self) -> DynamicFields {
                smallvec![$(Dynamic::new(self.$idx.clone())),+]
            }

            fn get_at(&self, index: i64) -> Option<Dynamic> {
                match index {
                    $($idx => Some(Dynamic::new(self.$idx.clone())),)+
                    _ => None,
                }
            }
        }
    };
}

impl_tuple!(1 => 0: T0);
impl_tuple!(2 => 0: T0, 1: T1);
impl_tuple!(3 => 0: T0, 1: T1, 2: T2);
impl_tuple!(4 => 0: T0, 1: T1, 2: T2, 3: T3);
impl_tuple!(5 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4);
impl_tuple!(6 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5);
impl_tuple!(7 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6);
impl_tuple!(8 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7);
impl_tuple!(9 => 0: T0, 1: T1, 2: T2, 3: T3, 4: T4, 5: T5, 6: T6, 7: T7, 8: T8);
