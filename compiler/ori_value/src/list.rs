//! Persistent singly-linked lists.
//!
//! A list is either `Empty` or `Nonempty(head, tail)`. Cells are immutable
//! and reference counted, so `clone` and [`List::prepend`] are O(1) and many
//! lists can share one tail without copying it. Because nothing mutates a
//! cell after construction, sharing tails across threads needs no locks.
//!
//! Hashing, equality and drop all walk the spine iteratively, so a list of
//! any length is safe to hash, compare or release.

use std::fmt;
use std::iter::FusedIterator;

use crate::dynamic::Dynamic;
use crate::error::{fatal, RuntimeError};
use crate::hash::hash_constructor;
use crate::shared::{Shared, ThreadSafe};
use crate::value::Structural;

/// Constructor tag of the empty list.
const EMPTY_TAG: u32 = 0;
/// Constructor tag of a cons cell.
const NONEMPTY_TAG: u32 = 1;

/// Hash of `Empty`: `hash_constructor(0, &[])`.
const EMPTY_HASH: u32 = hash_constructor(EMPTY_TAG, &[]);

/// Immutable persistent list.
pub struct List<T> {
    cell: Option<Shared<Cons<T>>>,
}

struct Cons<T> {
    head: T,
    tail: List<T>,
}

/// Borrowed view of a list's outermost constructor, for matching.
#[derive(Debug)]
pub enum ListView<'a, T> {
    Empty,
    Nonempty(&'a T, &'a List<T>),
}

impl<T> List<T> {
    /// The empty list.
    pub const fn empty() -> Self {
        List { cell: None }
    }

    /// Build `Nonempty(head, tail)`, taking ownership of `tail`.
    pub fn cons(head: T, tail: List<T>) -> Self {
        List {
            cell: Some(Shared::new(Cons { head, tail })),
        }
    }

    /// New list with `head` in front of this one. `self` becomes the tail of
    /// the result by reference; nothing is copied and `self` is unchanged.
    #[must_use]
    pub fn prepend(&self, head: T) -> Self {
        List::cons(head, self.clone())
    }

    /// Outermost constructor.
    pub fn view(&self) -> ListView<'_, T> {
        match &self.cell {
            None => ListView::Empty,
            Some(cons) => ListView::Nonempty(&cons.head, &cons.tail),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// Number of elements. O(length).
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether the list has exactly `n` elements. O(min(length, n)).
    pub fn has_length(&self, n: usize) -> bool {
        let mut rest = self.iter();
        for _ in 0..n {
            if rest.next().is_none() {
                return false;
            }
        }
        rest.next().is_none()
    }

    /// Whether the list has at least `n` elements. O(min(length, n)).
    pub fn at_least_length(&self, n: usize) -> bool {
        self.iter().take(n).count() == n
    }

    /// First element.
    ///
    /// Fatal ([`RuntimeError::EmptyListAccess`]) on an empty list.
    pub fn head(&self) -> &T {
        match self.try_head() {
            Ok(head) => head,
            Err(error) => fatal(error),
        }
    }

    /// Everything after the first element.
    ///
    /// Fatal ([`RuntimeError::EmptyListAccess`]) on an empty list.
    pub fn tail(&self) -> &List<T> {
        match self.try_tail() {
            Ok(tail) => tail,
            Err(error) => fatal(error),
        }
    }

    pub fn try_head(&self) -> Result<&T, RuntimeError> {
        match &self.cell {
            Some(cons) => Ok(&cons.head),
            None => Err(RuntimeError::EmptyListAccess { operation: "head" }),
        }
    }

    pub fn try_tail(&self) -> Result<&List<T>, RuntimeError> {
        match &self.cell {
            Some(cons) => Ok(&cons.tail),
            None => Err(RuntimeError::EmptyListAccess { operation: "tail" }),
        }
    }

    /// Element at `index`, walking tails. `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { rest: self }
    }

    /// Whether both lists are the same allocation (or both empty).
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.cell, &other.cell) {
            (None, None) => true,
            (Some(a), Some(b)) => Shared::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<T: Clone> List<T> {
    /// Build a list from explicit elements: a right fold, so the last
    /// element is attached to `Empty` first.
    pub fn from_slice(items: &[T]) -> Self {
        items
            .iter()
            .rev()
            .fold(List::empty(), |tail, item| List::cons(item.clone(), tail))
    }
}

impl<T> List<T>
where
    T: Structural + Clone + fmt::Debug + ThreadSafe + 'static,
{
    /// Element at a runtime index, erased. `None` for negative indices and
    /// past the end.
    pub fn get_at(&self, index: i64) -> Option<Dynamic> {
        let index = usize::try_from(index).ok()?;
        self.get(index).map(|item| Dynamic::new(item.clone()))
    }

    /// Erase every element, preserving order.
    pub fn to_dynamic(&self) -> List<Dynamic> {
        self.iter().map(|item| Dynamic::new(item.clone())).collect()
    }
}

impl<T: Structural> Structural for List<T> {
    /// `Empty` is `hash_constructor(0, &[])`; `Nonempty(h, t)` is
    /// `hash_constructor(1, &[hash(h), hash(t)])`. Folded from the end so
    /// long lists don't recurse.
    fn hash32(&self) -> u32 {
        let head_hashes: Vec<u32> = self.iter().map(Structural::hash32).collect();
        head_hashes.iter().rev().fold(EMPTY_HASH, |tail_hash, &head_hash| {
            hash_constructor(NONEMPTY_TAG, &[head_hash, tail_hash])
        })
    }

    fn equal(&self, other: &Self) -> bool {
        let (mut a, mut b) = (self, other);
        loop {
            match (&a.cell, &b.cell) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    // A shared tail is equal to itself.
                    if Shared::ptr_eq(x, y) {
                        return true;
                    }
                    if !x.head.equal(&y.head) {
                        return false;
                    }
                    a = &x.tail;
                    b = &y.tail;
                }
                _ => return false,
            }
        }
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            cell: self.cell.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one at a time instead of recursing
        // through `Cons::tail`. Stop at the first cell someone else holds.
        let mut next = self.cell.take();
        while let Some(cell) = next {
            match Shared::try_unwrap(cell) {
                Ok(mut cons) => next = cons.tail.cell.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |tail, item| List::cons(item, tail))
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a list's elements, head first.
pub struct Iter<'a, T> {
    rest: &'a List<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let rest: &'a List<T> = self.rest;
        let cons = rest.cell.as_deref()?;
        self.rest = &cons.tail;
        Some(&cons.head)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { rest: self.rest }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(self.rest).finish()
    }
}

/// Build a [`List`] from explicit elements, head first.
///
/// ```
/// use ori_value::{list, List};
///
/// let xs: List<i64> = list![1, 2, 3];
/// assert!(xs.has_length(3));
/// assert_eq!(*xs.head(), 1);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::empty()
    };
    ($($item:expr),+ $(,)?) => {
        <$crate::List<_> as ::core::iter::FromIterator<_>>::from_iter([$($item),+])
    };
}
