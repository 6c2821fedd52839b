//! Container error types.
//!
//! Every fallible operation on [`Vector`](crate::Vector) and its cursors
//! checks its preconditions before touching the buffer, so a returned error
//! always means the container is unchanged.

use std::error::Error;
use std::fmt;

/// Errors returned by container, cursor, and position operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// `pop_back` on a container with no live elements.
    EmptyContainer,
    /// A requested capacity is smaller than the current live count.
    InvalidCapacity {
        /// The capacity that was requested.
        requested: usize,
        /// Live count at the time of the request.
        len: usize,
    },
    /// Indexed access at or beyond the live count.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Live count at the time of the access.
        len: usize,
    },
    /// `insert`/`erase` at a position outside the accepted range.
    IteratorOutOfBounds {
        /// The position's index.
        index: usize,
        /// Live count at the time of the call.
        len: usize,
    },
    /// Dereference or advance of a cursor that sits at `end()`.
    EndOfRange {
        /// The cursor's index when the operation was attempted.
        index: usize,
    },
    /// A [`Position`](crate::Position) taken before the last reallocation.
    StalePosition {
        /// Epoch recorded in the position.
        position_epoch: u64,
        /// Current epoch of the container.
        current_epoch: u64,
    },
    /// A [`Position`](crate::Position) issued by a different container.
    ForeignPosition,
    /// The growth target does not fit in `usize`.
    CapacityOverflow {
        /// Capacity before growth.
        capacity: usize,
        /// Multiplier that overflowed.
        growth_factor: usize,
    },
    /// The allocator could not provide a buffer of the requested size.
    AllocationFailed {
        /// Capacity, in elements, of the failed allocation.
        requested: usize,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => write!(f, "cannot pop from an empty container"),
            Self::InvalidCapacity { requested, len } => {
                write!(
                    f,
                    "invalid capacity: requested {requested}, but {len} elements are live"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::IteratorOutOfBounds { index, len } => {
                write!(f, "position {index} out of bounds for length {len}")
            }
            Self::EndOfRange { index } => {
                write!(f, "cursor at end of range (index {index})")
            }
            Self::StalePosition {
                position_epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "stale position: epoch {position_epoch}, container epoch {current_epoch}"
                )
            }
            Self::ForeignPosition => write!(f, "position belongs to a different container"),
            Self::CapacityOverflow {
                capacity,
                growth_factor,
            } => {
                write!(
                    f,
                    "capacity overflow: cannot grow {capacity} by a factor of {growth_factor}"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed for a capacity of {requested} elements")
            }
        }
    }
}

impl Error for SeqError {}

/// Errors detected by [`GrowthPolicy::validate`](crate::GrowthPolicy::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// `min_capacity` is zero; growth from an empty buffer would stall.
    ZeroMinCapacity,
    /// `growth_factor` is below 2, so a full buffer would not grow.
    GrowthFactorTooSmall {
        /// The configured factor.
        factor: usize,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be at least 1"),
            Self::GrowthFactorTooSmall { factor } => {
                write!(f, "growth factor must be at least 2, got {factor}")
            }
        }
    }
}

impl Error for PolicyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_payload() {
        let err = SeqError::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(err.to_string(), "index 3 out of range for length 3");

        let err = SeqError::InvalidCapacity {
            requested: 1,
            len: 4,
        };
        assert!(err.to_string().contains("requested 1"));
    }

    #[test]
    fn policy_error_display() {
        let err = PolicyError::GrowthFactorTooSmall { factor: 1 };
        assert_eq!(err.to_string(), "growth factor must be at least 2, got 1");
    }
}
