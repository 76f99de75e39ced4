//! Bridging lazy iterators into asynchronous code.
//!
//! A [`LazyStream`] never returns `Poll::Pending`: every poll performs exactly
//! one [`advance`](crate::LazyIter::advance) on the wrapped node.
//!
//! # Examples
//!
//! ```
//! use lazy_iter::prelude::*;
//! use futures_lite::future::block_on;
//! use futures_lite::StreamExt;
//!
//! block_on(async {
//!     let mut s = lazy_iter::from([1, 2, 3]).map(|x| x * 2).into_stream();
//!
//!     let mut total = 0;
//!     while let Some(n) = s.next().await {
//!         total += n;
//!     }
//!     assert_eq!(total, 12);
//! })
//! ```

use crate::LazyIter;

use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::stream::{FusedStream, Stream};
use pin_project::pin_project;

/// A stream that was created from a lazy iterator.
///
/// This `struct` is created by the [`into_stream`] method on [`LazyIter`].
///
/// [`into_stream`]: LazyIter::into_stream
#[pin_project]
#[derive(Debug, Clone)]
pub struct LazyStream<I> {
    iter: I,
    done: bool,
}

impl<I> LazyStream<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, done: false }
    }
}

impl<I: LazyIter> Stream for LazyStream<I> {
    type Item = I::Item;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        let item = this.iter.advance().into_option();
        if item.is_none() {
            *this.done = true;
        }
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I: LazyIter> FusedStream for LazyStream<I> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
