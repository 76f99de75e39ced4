//! Zip two unbounded counters against a finite alphabet; the alphabet bounds
//! the whole chain.
//!
//! Run with: cargo run --example generator

use lazy_iter::LazyIter;

fn counting() -> impl LazyIter<Item = u32> {
    let mut counter = 0;
    lazy_iter::from_fn(move || {
        counter += 1;
        Some(counter)
    })
}

fn main() {
    let alphabet: Vec<char> = ('a'..='z').collect();
    let doubled = counting().map(|x| x * 2);

    counting()
        .zip(doubled)
        .zip(alphabet)
        .for_each(|((count, double), letter), _| {
            println!("count: {count}, double: {double}, letter: {letter}");
        });
}
