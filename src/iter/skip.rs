use super::LazyIter;
use crate::Step;

/// A lazy iterator that skips over the first `n` values of another node.
///
/// This `struct` is created by the [`skip`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`skip`]: LazyIter::skip
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    n: usize,
    done: bool,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self {
            iter,
            n,
            done: false,
        }
    }
}

impl<I: LazyIter> Skip<I> {
    /// Discard the pending prefix in one bulk `nth` call. Returns `false` if
    /// the upstream ran out while doing so.
    fn fast_forward(&mut self) -> bool {
        let n = core::mem::take(&mut self.n);
        if n == 0 {
            return true;
        }
        log::trace!("skip: fast-forwarding {n} items");
        if self.iter.nth(n - 1).is_exhausted() {
            self.done = true;
            return false;
        }
        true
    }
}

impl<I: LazyIter> LazyIter for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> Step<Self::Item> {
        if self.done || !self.fast_forward() {
            return Step::Exhausted;
        }
        let step = self.iter.advance();
        if step.is_exhausted() {
            self.done = true;
        }
        step
    }

    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        if self.done || !self.fast_forward() {
            return Step::Exhausted;
        }
        let step = self.iter.nth(n);
        if step.is_exhausted() {
            self.done = true;
        }
        step
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (lower, upper) = self.iter.size_hint();
        (
            lower.saturating_sub(self.n),
            upper.map(|upper| upper.saturating_sub(self.n)),
        )
    }
}
