//! Filter, bound, transform and fold a finite sequence, then bound an
//! unbounded one.
//!
//! Run with: cargo run --example pipeline

use lazy_iter::prelude::*;

fn main() {
    let total = lazy_iter::from([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])
        .filter(|x| x % 2 == 0)
        .take(5)
        .map(|x| x * 3)
        .fold(0, |sum, x| sum + x);
    println!("{total}");

    let mut counter = 0;
    let evens = lazy_iter::from_fn(move || {
        counter += 1;
        Some(counter * 2)
    });
    let first_ten = evens.take(10).to_vec();
    println!("{first_ten:?}");
}
