use super::LazyIter;
use crate::Step;

/// A lazy iterator that yields each value together with its index.
///
/// This `struct` is created by the [`enumerate`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`enumerate`]: LazyIter::enumerate
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
    done: bool,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            count: 0,
            done: false,
        }
    }
}

impl<I: LazyIter> LazyIter for Enumerate<I> {
    type Item = (I::Item, usize);

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        match self.iter.advance() {
            Step::Produced(item) => {
                let index = self.count;
                self.count += 1;
                Step::Produced((item, index))
            }
            Step::Exhausted => {
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
