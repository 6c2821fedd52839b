//! Test utilities and element types for seqvec development.
//!
//! Provides element types that make container bookkeeping observable:
//! [`DropCounter`] counts destructor runs, [`Opaque`] implements neither
//! `Clone` nor `Default`. See [`fixtures`] for ready-made sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter of [`Tracked`] drops.
///
/// Hand out tracked values with [`track`](DropCounter::track), run the code
/// under test, then assert on [`drops`](DropCounter::drops).
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so that dropping it bumps this counter.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// A value whose drop is recorded by a [`DropCounter`].
#[derive(Debug)]
pub struct Tracked<T> {
    pub value: T,
    drops: Rc<Cell<usize>>,
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            drops: Rc::clone(&self.drops),
        }
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Element type with no `Clone` and no `Default`.
///
/// Containers must move these, never copy or default-construct them.
#[derive(Debug, PartialEq, Eq)]
pub struct Opaque(pub u32);
