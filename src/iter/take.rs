use super::LazyIter;
use crate::Step;

/// A lazy iterator that only yields the first `n` values of another node.
///
/// This `struct` is created by the [`take`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`take`]: LazyIter::take
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    limit: usize,
    count: usize,
    done: bool,
}

impl<I> Take<I> {
    pub(crate) fn new(iter: I, limit: usize) -> Self {
        Self {
            iter,
            limit,
            count: 0,
            done: false,
        }
    }
}

impl<I: LazyIter> LazyIter for Take<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        // Once the bound is reached the upstream is never touched again.
        if self.done || self.count >= self.limit {
            return Step::Exhausted;
        }
        self.count += 1;
        if self.count == self.limit {
            log::trace!("take: reached bound of {}", self.limit);
        }
        let step = self.iter.advance();
        if step.is_exhausted() {
            self.done = true;
        }
        step
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = self.limit - self.count;
        let (lower, upper) = self.iter.size_hint();
        let lower = lower.min(remaining);
        let upper = match upper {
            Some(upper) => upper.min(remaining),
            None => remaining,
        };
        (lower, Some(upper))
    }
}
