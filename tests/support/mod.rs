//! Shared conformance checks run against every kind of node.
//!
//! Each check receives a constructor returning a fresh node together with the
//! values that node is expected to produce, and compares the node's behavior
//! against the same operation performed eagerly on those values.

#![allow(dead_code)]

use std::fmt::Debug;

use lazy_iter::{LazyIter, Step};

/// Asserts that `iter` produces exactly `values`, then stays exhausted.
pub fn expect_values<I>(mut iter: I, values: &[I::Item])
where
    I: LazyIter,
    I::Item: PartialEq + Debug,
{
    for (index, value) in values.iter().enumerate() {
        match iter.advance() {
            Step::Produced(item) => assert_eq!(&item, value, "item {index}"),
            Step::Exhausted => panic!("exhausted early at item {index}"),
        }
    }
    assert!(iter.advance().is_exhausted(), "expected exhaustion");
    assert!(iter.advance().is_exhausted(), "exhaustion must be idempotent");
}

pub fn check_advance<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (iter, values) = make();
    expect_values(iter, &values);
}

pub fn check_nth<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug + Clone,
{
    let len = make().1.len();
    for n in 0..=len + 1 {
        let (mut iter, values) = make();
        let expected: Step<T> = values.get(n).cloned().into();
        assert_eq!(iter.nth(n), expected, "nth({n})");
        let rest = values.get(n + 1..).unwrap_or_default();
        expect_values(iter, rest);
    }
}

pub fn check_collect<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (mut iter, values) = make();
    assert_eq!(iter.by_ref().to_vec(), values);
    assert!(iter.advance().is_exhausted());

    // only the items that were not pulled yet are collected
    let (mut iter, values) = make();
    let _ = iter.advance();
    let rest = iter.by_ref().to_vec();
    assert_eq!(rest.as_slice(), values.get(1..).unwrap_or_default());
    assert!(iter.advance().is_exhausted());
}

pub fn check_for_each<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (iter, values) = make();
    let mut seen = vec![];
    iter.for_each(|item, index| seen.push((item, index)));
    let expected: Vec<_> = values.into_iter().enumerate().map(|(i, v)| (v, i)).collect();
    assert_eq!(seen, expected);
}

pub fn check_fold<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (iter, values) = make();
    let len = values.len();
    let folded = iter.fold(Vec::new(), |mut acc, item| {
        acc.push(item);
        acc
    });
    assert_eq!(folded, values);

    let (iter, _) = make();
    assert_eq!(iter.fold(0, |count, _| count + 1), len);
}

pub fn check_every<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (mut iter, values) = make();
    assert!(iter.every(|_, _| true));
    assert!(iter.advance().is_exhausted());

    let half = values.len() / 2;
    let (mut iter, _) = make();
    let mut calls = 0;
    let result = iter.every(|_, index| {
        calls += 1;
        index < half
    });
    assert_eq!(result, values.len() == half);
    // stops pulling at the first falsifying item
    assert_eq!(calls, values.len().min(half + 1));
}

pub fn check_some<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (mut iter, _) = make();
    assert!(!iter.some(|_, _| false));
    assert!(iter.advance().is_exhausted());

    let (mut iter, values) = make();
    let target = values.len() / 2;
    let mut calls = 0;
    let result = iter.some(|item, index| {
        calls += 1;
        index == target && item == values[target]
    });
    assert_eq!(result, !values.is_empty());
    assert_eq!(calls, values.len().min(target + 1));
}

pub fn check_skip<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let len = make().1.len();
    for k in [0, 1, len / 2, len, len + 1] {
        let (iter, values) = make();
        let expected = values.get(k..).unwrap_or_default();
        expect_values(iter.skip(k), expected);
    }
}

pub fn check_take<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let len = make().1.len();
    for n in [0, 1, len / 2, len, len + 1] {
        let (iter, values) = make();
        let expected = &values[..n.min(len)];
        expect_values(iter.take(n), expected);
    }
}

pub fn check_filter<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (iter, values) = make();
    // keep every other item, whatever the item type
    let mut flip = false;
    let filtered = iter.filter(|_| {
        flip = !flip;
        flip
    });
    let expected: Vec<_> = values.into_iter().step_by(2).collect();
    expect_values(filtered, &expected);
}

pub fn check_map<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug + Clone,
{
    let (iter, values) = make();
    let expected: Vec<_> = values.iter().map(|v| (v.clone(), v.clone())).collect();
    expect_values(iter.map(|v| (v.clone(), v)), &expected);
}

pub fn check_zip<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    // against an unbounded right side
    let (iter, values) = make();
    let expected: Vec<_> = values.into_iter().zip(0usize..).collect();
    expect_values(iter.zip(lazy_iter::from(0usize..)), &expected);

    // against a shorter right side
    let (iter, values) = make();
    let short = values.len() / 2;
    let expected: Vec<_> = values.into_iter().zip(0..short).collect();
    expect_values(iter.zip(lazy_iter::from(0..short)), &expected);

    // as the right side
    let (iter, values) = make();
    let expected: Vec<_> = (0usize..).zip(values).collect();
    expect_values(lazy_iter::from(0usize..).zip(iter), &expected);
}

pub fn check_chain<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (first, mut values) = make();
    let (second, tail) = make();
    values.extend(tail);
    let chained = first.chain(second);
    itertools::assert_equal(chained.into_std_iter(), values);
}

pub fn check_enumerate<F, I, T>(make: F)
where
    F: Fn() -> (I, Vec<T>),
    I: LazyIter<Item = T>,
    T: PartialEq + Debug,
{
    let (iter, values) = make();
    let expected = values.into_iter().enumerate().map(|(i, v)| (v, i));
    itertools::assert_equal(iter.enumerate().into_std_iter(), expected);
}

/// Generates the full battery of conformance tests for a node constructor.
macro_rules! conformance_suite {
    ($make:ident) => {
        #[test]
        fn advance() {
            $crate::support::check_advance($make);
        }

        #[test]
        fn nth() {
            $crate::support::check_nth($make);
        }

        #[test]
        fn collect() {
            $crate::support::check_collect($make);
        }

        #[test]
        fn for_each() {
            $crate::support::check_for_each($make);
        }

        #[test]
        fn fold() {
            $crate::support::check_fold($make);
        }

        #[test]
        fn every() {
            $crate::support::check_every($make);
        }

        #[test]
        fn some() {
            $crate::support::check_some($make);
        }

        #[test]
        fn skip() {
            $crate::support::check_skip($make);
        }

        #[test]
        fn take() {
            $crate::support::check_take($make);
        }

        #[test]
        fn filter() {
            $crate::support::check_filter($make);
        }

        #[test]
        fn map() {
            $crate::support::check_map($make);
        }

        #[test]
        fn zip() {
            $crate::support::check_zip($make);
        }

        #[test]
        fn chain() {
            $crate::support::check_chain($make);
        }

        #[test]
        fn enumerate() {
            $crate::support::check_enumerate($make);
        }
    };
}
