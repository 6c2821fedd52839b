//! Reusable input sequences.
//!
//! - [`ascending`] — `1..=n`, the usual push/print scenario input.
//! - [`labels`] — owned `String`s, for element types with heap data.
//! - [`interleaved_positions`] — insertion indices that hit front, middle
//!   and end of a growing sequence.

/// `1..=n` as a `Vec<i32>`.
pub fn ascending(n: i32) -> Vec<i32> {
    (1..=n).collect()
}

/// `"item-0"`, `"item-1"`, … as owned strings.
pub fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i}")).collect()
}

/// For step `i` of inserting into a sequence of current length `i`,
/// an index in `0..=i`. Cycles through front, middle and end.
pub fn interleaved_positions(n: usize) -> Vec<usize> {
    (0..n)
        .map(|len| match len % 3 {
            0 => 0,
            1 => len / 2,
            _ => len,
        })
        .collect()
}
