use crate::{LazyIter, Step};

use std::cell::Cell;
use std::rc::Rc;

/// Counts how often a [`Probe`] was pulled.
#[derive(Debug, Default)]
pub(crate) struct Counts {
    advances: Cell<usize>,
    nths: Cell<usize>,
}

impl Counts {
    pub(crate) fn advances(&self) -> usize {
        self.advances.get()
    }

    pub(crate) fn nths(&self) -> usize {
        self.nths.get()
    }
}

/// A lazy iterator over a native iterator that records every pull.
///
/// Unlike [`Source`][crate::Source] it does not fuse, so wrapping an iterator
/// that resumes after `None` yields a node that breaks idempotent exhaustion.
#[derive(Debug)]
pub(crate) struct Probe<I> {
    iter: I,
    counts: Rc<Counts>,
}

impl<I: Iterator> Probe<I> {
    pub(crate) fn new<T>(iter: T) -> (Self, Rc<Counts>)
    where
        T: IntoIterator<IntoIter = I>,
    {
        let counts = Rc::new(Counts::default());
        let probe = Self {
            iter: iter.into_iter(),
            counts: counts.clone(),
        };
        (probe, counts)
    }
}

impl<I: Iterator> LazyIter for Probe<I> {
    type Item = I::Item;

    fn advance(&mut self) -> Step<Self::Item> {
        self.counts.advances.set(self.counts.advances.get() + 1);
        self.iter.next().into()
    }

    fn nth(&mut self, n: usize) -> Step<Self::Item> {
        self.counts.nths.set(self.counts.nths.get() + 1);
        self.iter.nth(n).into()
    }
}

/// An iterator over `1..=n` that returns `None` once and then resumes with
/// `n + 2, n + 3, ...`.
pub(crate) fn resuming(n: u32) -> impl Iterator<Item = u32> {
    let mut count = 0;
    core::iter::from_fn(move || {
        count += 1;
        if count == n + 1 {
            None
        } else {
            Some(count)
        }
    })
}
