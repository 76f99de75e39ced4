use super::LazyIter;
use crate::Step;
use core::fmt;

/// A lazy iterator that maps the values of another node with a function.
///
/// This `struct` is created by the [`map`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`map`]: LazyIter::map
#[derive(Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
    done: bool,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            iter,
            f,
            done: false,
        }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> LazyIter for Map<I, F>
where
    I: LazyIter,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        match self.iter.advance() {
            Step::Produced(item) => Step::Produced((self.f)(item)),
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
