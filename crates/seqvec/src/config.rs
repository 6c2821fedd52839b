//! Growth policy parameters.

use crate::error::{PolicyError, SeqError};

/// Capacity policy for a [`Vector`](crate::Vector).
///
/// Controls the capacity floor applied at construction and growth time and
/// the multiplier used when an append finds the buffer full.
/// Validated by [`Vector::with_policy`](crate::Vector::with_policy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Smallest capacity a constructed or grown buffer may have.
    ///
    /// Default: 5. Must be at least 1. `shrink_to_fit` may go below it.
    pub min_capacity: usize,

    /// Multiplier applied to the current capacity on growth.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,
}

impl GrowthPolicy {
    /// Default minimum capacity.
    pub const DEFAULT_MIN_CAPACITY: usize = 5;

    /// Default growth factor (doubling).
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a policy with explicit parameters.
    ///
    /// The result is not validated; see [`GrowthPolicy::validate`].
    pub const fn new(min_capacity: usize, growth_factor: usize) -> Self {
        Self {
            min_capacity,
            growth_factor,
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        if self.growth_factor < 2 {
            return Err(PolicyError::GrowthFactorTooSmall {
                factor: self.growth_factor,
            });
        }
        Ok(())
    }

    /// Clamp a requested construction capacity up to the floor.
    pub fn initial_capacity(&self, requested: usize) -> usize {
        requested.max(self.min_capacity)
    }

    /// Capacity to grow to when a buffer of `current` slots is full.
    ///
    /// `current * growth_factor`, but never below `min_capacity`, which
    /// covers buffers that `shrink_to_fit` took to zero.
    pub fn next_capacity(&self, current: usize) -> Result<usize, SeqError> {
        let grown = current
            .checked_mul(self.growth_factor)
            .ok_or(SeqError::CapacityOverflow {
                capacity: current,
                growth_factor: self.growth_factor,
            })?;
        Ok(grown.max(self.min_capacity))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_CAPACITY, Self::DEFAULT_GROWTH_FACTOR)
    }
}
