//! Per-instance container identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`VectorId`] allocation.
static VECTOR_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a [`Vector`](crate::Vector).
///
/// Allocated from a monotonic atomic counter via [`VectorId::next`].
/// A cloned container gets a fresh ID: positions taken from the source
/// are rejected by the copy. IDs are never reused within a process, so a
/// container allocated at the address of a dropped one cannot accept the
/// dropped container's positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VectorId(u64);

impl VectorId {
    /// Allocate a fresh, unique instance ID.
    pub fn next() -> Self {
        Self(VECTOR_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for VectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
