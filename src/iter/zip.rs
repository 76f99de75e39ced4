use super::LazyIter;
use crate::Step;

/// A lazy iterator that iterates two other nodes simultaneously.
///
/// This `struct` is created by the [`zip`] method on [`LazyIter`]. See its
/// documentation for more.
///
/// [`zip`]: LazyIter::zip
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b, done: false }
    }
}

impl<A, B> LazyIter for Zip<A, B>
where
    A: LazyIter,
    B: LazyIter,
{
    type Item = (A::Item, B::Item);

    fn advance(&mut self) -> Step<Self::Item> {
        if self.done {
            return Step::Exhausted;
        }
        // The right side is only pulled once the left side produced.
        let left = match self.a.advance() {
            Step::Produced(left) => left,
            Step::Exhausted => {
                self.done = true;
                return Step::Exhausted;
            }
        };
        match self.b.advance() {
            Step::Produced(right) => Step::Produced((left, right)),
            Step::Exhausted => {
                self.done = true;
                Step::Exhausted
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let (a_lower, a_upper) = self.a.size_hint();
        let (b_lower, b_upper) = self.b.size_hint();
        let upper = match (a_upper, b_upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        (a_lower.min(b_lower), upper)
    }
}
