use crate::{LazyIter, Step};

#[cfg(feature = "alloc")]
use crate::InvalidSource;
#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "alloc")]
use core::any::Any;
use core::fmt;
use core::iter::FromFn;

/// A lazy iterator backed by a native [`Iterator`].
///
/// This `struct` is created by the [`from`], [`from_fn`] and `try_from_any`
/// functions. See their documentation for more.
///
/// The adapter is fused: once the native iterator returns `None` it is never
/// called again, even if it would resume producing values.
#[derive(Clone)]
pub struct Source<I> {
    iter: I,
    done: bool,
}

/// A type-erased native iterator, as held by dynamically constructed sources.
#[cfg(feature = "alloc")]
pub type DynIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

impl<I: Iterator> Source<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, done: false }
    }
}

impl<I> fmt::Debug for Source<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("done", &self.done).finish()
    }
}

impl<I: Iterator> LazyIter for Source<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        match self.iter.next() {
            Some(value) => Step::Produced(value),
            None => {
                self.done = true;
                Step::Exhausted
            }
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        match self.iter.nth(n) {
            Some(value) => Step::Produced(value),
            None => {
                self.done = true;
                Step::Exhausted
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

/// Creates a lazy iterator from anything that can be iterated over.
///
/// Finite collections and unbounded iterators are both accepted; an unbounded
/// input yields an unbounded node.
///
/// # Examples
///
/// ```
/// use lazy_iter::prelude::*;
///
/// let total = lazy_iter::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
///     .filter(|x| x % 2 == 0)
///     .take(2)
///     .map(|x| x * 3)
///     .fold(0, |acc, x| acc + x);
/// assert_eq!(total, 18);
/// ```
pub fn from<I: IntoIterator>(iterable: I) -> Source<I::IntoIter> {
    Source::new(iterable.into_iter())
}

/// Creates a lazy iterator from a generator closure.
///
/// The closure is called once per step; returning `None` exhausts the node.
///
/// # Examples
///
/// ```
/// use lazy_iter::prelude::*;
///
/// let mut n = 0;
/// let evens = lazy_iter::from_fn(move || {
///     n += 2;
///     Some(n)
/// });
/// assert_eq!(evens.take(3).to_vec(), [2, 4, 6]);
/// ```
pub fn from_fn<T, F>(f: F) -> Source<FromFn<F>>
where
    F: FnMut() -> Option<T>,
{
    Source::new(core::iter::from_fn(f))
}

/// Creates a lazy iterator from a dynamically typed value.
///
/// Accepts a `Vec<T>`, a `Box<[T]>`, or a `Box<dyn Iterator<Item = T>>`.
/// Anything else is rejected with [`InvalidSource`].
///
/// # Examples
///
/// ```
/// use lazy_iter::prelude::*;
///
/// let iter = lazy_iter::try_from_any::<u8>(Box::new(vec![1u8, 2, 3])).unwrap();
/// assert_eq!(iter.to_vec(), [1, 2, 3]);
///
/// assert!(lazy_iter::try_from_any::<u8>(Box::new(42u8)).is_err());
/// ```
#[cfg(feature = "alloc")]
pub fn try_from_any<T: 'static>(
    value: Box<dyn Any>,
) -> Result<Source<DynIter<'static, T>>, InvalidSource> {
    let value = match value.downcast::<Vec<T>>() {
        Ok(vec) => return Ok(Source::new(Box::new(vec.into_iter()))),
        Err(value) => value,
    };
    let value = match value.downcast::<Box<[T]>>() {
        Ok(slice) => return Ok(Source::new(Box::new(Vec::from(*slice).into_iter()))),
        Err(value) => value,
    };
    match value.downcast::<DynIter<'static, T>>() {
        Ok(iter) => Ok(Source::new(*iter)),
        Err(_) => {
            let err = InvalidSource::new::<T>();
            log::debug!("rejected dynamic source: {err}");
            Err(err)
        }
    }
}
