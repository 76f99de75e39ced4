use super::{IntoLazyIter, LazyIter};
#[cfg(feature = "alloc")]
use crate::Step;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Conversion from a [`LazyIter`].
///
/// This is the target of [`LazyIter::collect`].
pub trait FromLazyIter<A>: Sized {
    /// Creates a value by draining a lazy iterator.
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIter<Item = A>;
}

#[cfg(feature = "alloc")]
impl<T> FromLazyIter<T> for Vec<T> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIter<Item = T>,
    {
        let mut iter = iter.into_lazy_iter();
        let mut output = Vec::with_capacity(iter.size_hint().0);
        while let Step::Produced(item) = iter.advance() {
            output.push(item);
        }
        output
    }
}

/// Collects until the first `Err`, which is returned; the rest of the node is
/// left unconsumed.
#[cfg(feature = "alloc")]
impl<T, E> FromLazyIter<Result<T, E>> for Result<Vec<T>, E> {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIter<Item = Result<T, E>>,
    {
        let mut iter = iter.into_lazy_iter();
        let mut output = Vec::with_capacity(iter.size_hint().0);
        while let Step::Produced(item) = iter.advance() {
            output.push(item?);
        }
        Ok(output)
    }
}

impl FromLazyIter<()> for () {
    fn from_lazy_iter<I>(iter: I) -> Self
    where
        I: IntoLazyIter<Item = ()>,
    {
        let mut iter = iter.into_lazy_iter();
        while iter.advance().is_produced() {}
    }
}
