use super::LazyIter;

/// An [`Iterator`] that was created from a lazy iterator.
///
/// This `struct` is created by the [`into_std_iter`] method on [`LazyIter`].
///
/// [`into_std_iter`]: LazyIter::into_std_iter
#[derive(Debug, Clone)]
pub struct StdIter<I> {
    iter: I,
    done: bool,
}

impl<I> StdIter<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, done: false }
    }

    /// Unwrap the lazy iterator this adapter was created from.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: LazyIter> Iterator for StdIter<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.advance().into_option();
        self.done = item.is_none();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.iter.nth(n).into_option();
        self.done = item.is_none();
        item
    }
}

impl<I: LazyIter> core::iter::FusedIterator for StdIter<I> {}
