use super::LazyIter;
use crate::Step;
use core::fmt;

/// A lazy iterator that only yields the values of another node that satisfy a
/// predicate.
///
/// This `struct` is created by the [`filter`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`filter`]: LazyIter::filter
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
    done: bool,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            predicate,
            done: false,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> LazyIter for Filter<I, P>
where
    I: LazyIter,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        // A single step may reject any number of upstream items.
        loop {
            match self.iter.advance() {
                Step::Produced(item) if (self.predicate)(&item) => return Step::Produced(item),
                Step::Produced(_) => continue,
                Step::Exhausted => {
                    self.done = true;
                    return Step::Exhausted;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}
