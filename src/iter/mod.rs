//! The iterator node capability and its combinators.
//!
//! Every node implements [`LazyIter`], whose single required method
//! [`advance`](LazyIter::advance) pulls one [`Step`] out of the node. Combinators
//! own their upstream node(s) and pull from them only when they are pulled
//! themselves.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iter::prelude::*;
//!
//! let v: Vec<_> = lazy_iter::from([1, 2, 3])
//!     .chain([4, 5])
//!     .enumerate()
//!     .collect();
//!
//! assert_eq!(v, &[(1, 0), (2, 1), (3, 2), (4, 3), (5, 4)]);
//! ```

mod chain;
mod enumerate;
mod filter;
mod from_lazy_iter;
mod into_lazy_iter;
mod map;
mod skip;
mod std_iter;
mod take;
mod zip;

use crate::Step;
#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

pub use chain::Chain;
pub use enumerate::Enumerate;
pub use filter::Filter;
pub use from_lazy_iter::FromLazyIter;
pub use into_lazy_iter::IntoLazyIter;
pub use map::Map;
pub use skip::Skip;
pub use std_iter::StdIter;
pub use take::Take;
pub use zip::Zip;

#[cfg(feature = "stream")]
use crate::stream::LazyStream;

/// A node that is assembled at runtime, dispatched through a trait object.
#[cfg(feature = "alloc")]
pub type BoxLazyIter<'a, T> = Box<dyn LazyIter<Item = T> + 'a>;

/// A lazy, pull-based sequence of values.
///
/// Implementors only provide [`advance`](LazyIter::advance). Once it returns
/// [`Step::Exhausted`] every following call must return it too; all the
/// combinators in this crate uphold that even when their upstream does not.
pub trait LazyIter {
    /// Which item will we be yielding?
    type Item;

    /// Pull the next step out of this node.
    fn advance(&mut self) -> Step<Self::Item>;

    /// How many items could we potentially end up returning?
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Discard `n` items, then return the result of one more advance.
    ///
    /// `nth(0)` is the same as a plain [`advance`](LazyIter::advance). Sources
    /// override this with a bulk skip.
    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        for _ in 0..n {
            if self.advance().is_exhausted() {
                return Step::Exhausted;
            }
        }
        self.advance()
    }

    /// Convert items from one type into another.
    ///
    /// `f` is called exactly once per upstream item, and never on exhaustion.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Only yield the items for which `predicate` returns `true`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Creates a node that yields the first `n` items, or fewer if the
    /// underlying node ends sooner.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Creates a node that discards the first `n` items.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// ‘Zips up’ two nodes into a single node of pairs.
    ///
    /// The left side is always advanced first; once either side is exhausted
    /// the zipped node is exhausted.
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoLazyIter>
    where
        Self: Sized,
        U: IntoLazyIter,
    {
        Zip::new(self, other.into_lazy_iter())
    }

    /// Yields every item of `self`, then every item of `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoLazyIter>
    where
        Self: Sized,
        U: IntoLazyIter<Item = Self::Item>,
    {
        Chain::new(self, other.into_lazy_iter())
    }

    /// Creates a node which gives the next value together with its index.
    ///
    /// Items are yielded as `(value, index)`, the index starting at 0.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Borrow this node, so a consuming method leaves it usable afterwards.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the type of this node.
    #[cfg(feature = "alloc")]
    fn boxed<'a>(self) -> BoxLazyIter<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Adapt this node into a [`core::iter::Iterator`].
    fn into_std_iter(self) -> StdIter<Self>
    where
        Self: Sized,
    {
        StdIter::new(self)
    }

    /// Adapt this node into an always-ready `Stream`.
    #[cfg(feature = "stream")]
    fn into_stream(self) -> LazyStream<Self>
    where
        Self: Sized,
    {
        LazyStream::new(self)
    }

    /// Transforms the remaining items into a collection.
    ///
    /// This never returns for an unbounded node.
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromLazyIter<Self::Item>,
    {
        B::from_lazy_iter(self)
    }

    /// Collect the remaining items into a `Vec`.
    #[cfg(feature = "alloc")]
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        self.collect()
    }

    /// Combine every remaining item into an accumulator, starting at `init`.
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Step::Produced(item) = self.advance() {
            acc = f(acc, item);
        }
        acc
    }

    /// Call `f` with every remaining item and its index.
    fn for_each<F>(mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize),
    {
        let mut index = 0;
        while let Step::Produced(item) = self.advance() {
            f(item, index);
            index += 1;
        }
    }

    /// Returns `true` if `predicate` holds for every remaining item.
    ///
    /// Stops pulling at the first item that falsifies it. An empty node
    /// yields `true`.
    fn every<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Step::Produced(item) = self.advance() {
            if !predicate(item, index) {
                return false;
            }
            index += 1;
        }
        true
    }

    /// Returns `true` if `predicate` holds for any remaining item.
    ///
    /// Stops pulling at the first item that satisfies it. An empty node
    /// yields `false`.
    fn some<P>(&mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item, usize) -> bool,
    {
        let mut index = 0;
        while let Step::Produced(item) = self.advance() {
            if predicate(item, index) {
                return true;
            }
            index += 1;
        }
        false
    }
}

impl<I: LazyIter + ?Sized> LazyIter for &mut I {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        (**self).nth(n)
    }
}

#[cfg(feature = "alloc")]
impl<I: LazyIter + ?Sized> LazyIter for Box<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        (**self).advance()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }

    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        (**self).nth(n)
    }
}
