use super::LazyIter;
use crate::Source;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Conversion into a [`LazyIter`].
///
/// By implementing `IntoLazyIter` for a type, you define how it will be
/// converted to a lazy iterator. This is what lets [`zip`] and [`chain`]
/// accept plain collections as their second argument.
///
/// [`zip`]: LazyIter::zip
/// [`chain`]: LazyIter::chain
pub trait IntoLazyIter {
    /// The type of the elements being iterated over.
    type Item;

    /// Which kind of lazy iterator are we turning this into?
    type IntoLazyIter: LazyIter<Item = Self::Item>;

    /// Creates a lazy iterator from a value.
    fn into_lazy_iter(self) -> Self::IntoLazyIter;
}

impl<I: LazyIter> IntoLazyIter for I {
    type Item = I::Item;
    type IntoLazyIter = I;

    #[inline]
    fn into_lazy_iter(self) -> I {
        self
    }
}

impl<T, const N: usize> IntoLazyIter for [T; N] {
    type Item = T;
    type IntoLazyIter = Source<core::array::IntoIter<T, N>>;

    fn into_lazy_iter(self) -> Self::IntoLazyIter {
        crate::from(self)
    }
}

impl<'a, T> IntoLazyIter for &'a [T] {
    type Item = &'a T;
    type IntoLazyIter = Source<core::slice::Iter<'a, T>>;

    fn into_lazy_iter(self) -> Self::IntoLazyIter {
        crate::from(self)
    }
}

#[cfg(feature = "alloc")]
impl<T> IntoLazyIter for Vec<T> {
    type Item = T;
    type IntoLazyIter = Source<alloc::vec::IntoIter<T>>;

    fn into_lazy_iter(self) -> Self::IntoLazyIter {
        crate::from(self)
    }
}
