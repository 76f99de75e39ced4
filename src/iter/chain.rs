use super::LazyIter;
use crate::Step;

/// A lazy iterator that yields the values of one node, then the values of
/// another.
///
/// This `struct` is created by the [`chain`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`chain`]: LazyIter::chain
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    on_first: bool,
    done: bool,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            on_first: true,
            done: false,
        }
    }
}

impl<T, A, B> LazyIter for Chain<A, B>
where
    A: LazyIter<Item = T>,
    B: LazyIter<Item = T>,
{
    type Item = T;

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        if self.on_first {
            match self.first.advance() {
                Step::Produced(item) => return Step::Produced(item),
                Step::Exhausted => {
                    log::trace!("chain: first node exhausted, switching to second");
                    self.on_first = false;
                }
            }
        }
        let step = self.second.advance();
        if step.is_exhausted() {
            self.done = true;
        }
        step
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (second_lower, second_upper) = self.second.size_hint();
        if !self.on_first {
            return (second_lower, second_upper);
        }
        let (first_lower, first_upper) = self.first.size_hint();
        let lower = first_lower.saturating_add(second_lower);
        let upper = match (first_upper, second_upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        (lower, upper)
    }
}
