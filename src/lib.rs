//! Lazy, pull-based iterator combinators.
//!
//! A source of values, finite or unbounded, is wrapped behind a single
//! stepping capability: [`LazyIter::advance`], which returns a [`Step`]. On top
//! of it sits a closed family of combinators that only do work when pulled,
//! plus a few terminal consumers that drive a chain to completion.
//!
//! # Operations
//!
//! Combinators, each returning a new node that owns the receiver:
//!
//! - [`LazyIter::map`]: Convert every value with a function.
//! - [`LazyIter::filter`]: Only keep values that satisfy a predicate.
//! - [`LazyIter::take`]: Stop after the first `n` values.
//! - [`LazyIter::skip`]: Discard the first `n` values.
//! - [`LazyIter::zip`]: ‘Zips up’ two nodes into a single node of pairs.
//! - [`LazyIter::chain`]: Yield all values of one node, then all values of another.
//! - [`LazyIter::enumerate`]: Pair every value with its index.
//!
//! Terminal consumers:
//!
//! - [`LazyIter::collect`] and [`LazyIter::to_vec`]: Materialize the remaining values.
//! - [`LazyIter::fold`]: Combine all values into an accumulator.
//! - [`LazyIter::for_each`]: Run an action for every value and its index.
//! - [`LazyIter::nth`]: Discard `n` values and return the next step.
//! - [`LazyIter::every`] and [`LazyIter::some`]: Short-circuiting predicate checks.
//!
//! # Examples
//!
//! ```rust
//! use lazy_iter::prelude::*;
//!
//! let total = lazy_iter::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
//!     .filter(|x| x % 2 == 0)
//!     .take(2)
//!     .map(|x| x * 3)
//!     .fold(0, |sum, x| sum + x);
//!
//! assert_eq!(total, 18);
//! ```
//!
//! Unbounded sources compose as long as something bounds them before a
//! terminal consumer drains the chain:
//!
//! ```rust
//! use lazy_iter::prelude::*;
//!
//! let mut n = 0;
//! let evens = lazy_iter::from_fn(move || {
//!     n += 1;
//!     Some(n * 2)
//! });
//!
//! let pairs = evens.zip(['a', 'b', 'c']).to_vec();
//! assert_eq!(pairs, [(2, 'a'), (4, 'b'), (6, 'c')]);
//! ```
//!
//! # Limitations
//!
//! Each node has exactly one consumer. Materializing a chain rooted in an
//! unbounded source that is never bounded does not terminate; this is not
//! detected. Panics raised inside user closures propagate out of the
//! `advance` call that invoked them.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod error;
mod source;
mod step;

pub mod iter;
#[cfg(feature = "stream")]
pub mod stream;

/// The lazy iterator prelude.
pub mod prelude {
    pub use super::iter::IntoLazyIter as _;
    pub use super::iter::LazyIter as _;
}

pub use error::InvalidSource;
#[cfg(feature = "alloc")]
pub use iter::BoxLazyIter;
pub use iter::{FromLazyIter, IntoLazyIter, LazyIter};
#[cfg(feature = "alloc")]
pub use source::{try_from_any, DynIter};
pub use source::{from, from_fn, Source};
pub use step::Step;
