//! Workload profiles for seqvec benchmarks.
//!
//! - [`shuffled_insert_positions`]: seeded random insertion indices that
//!   stay valid for a sequence growing from empty
//! - [`prefilled`]: a vector of `n` ascending elements at tight capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seqvec::Vector;

/// `n` insertion indices, one per step of growing a sequence from empty.
///
/// Step `i` gets an index in `0..=i`. The spread is shuffled with a fixed
/// seed so runs are comparable.
pub fn shuffled_insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut spread: Vec<usize> = (0..n).collect();
    spread.shuffle(&mut StdRng::seed_from_u64(seed));
    spread
        .into_iter()
        .enumerate()
        .map(|(len, raw)| raw % (len + 1))
        .collect()
}

/// A vector holding `0..n` with capacity exactly `max(n, min_capacity)`.
pub fn prefilled(n: u64) -> Vector<u64> {
    Vector::from_list(0..n)
}
