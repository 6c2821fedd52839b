//! Detached positions into a container.
//!
//! A [`Position`] records where a cursor stood without borrowing the
//! container, so it can be handed to [`Vector::insert`](crate::Vector::insert)
//! and [`Vector::erase`](crate::Vector::erase). It is epoch-scoped: the
//! `epoch` field allows an O(1) staleness check against the container's
//! reallocation counter.

use std::fmt;
use std::ops::{Add, Sub};

use crate::error::SeqError;
use crate::id::VectorId;

/// Index into a specific container at a specific reallocation epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Position {
    /// Element index.
    pub(crate) index: usize,
    /// Container that issued this position.
    pub(crate) owner: VectorId,
    /// Owner's epoch when the position was issued.
    pub(crate) epoch: u64,
}

impl Position {
    pub(crate) fn new(index: usize, owner: VectorId, epoch: u64) -> Self {
        Self {
            index,
            owner,
            epoch,
        }
    }

    /// Element index this position refers to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Container that issued this position.
    pub fn owner(&self) -> VectorId {
        self.owner
    }

    /// Reallocation epoch this position was issued in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Signed distance in elements from `origin` to `self`.
    ///
    /// Unspecified (but not a panic) if the positions belong to different
    /// containers.
    pub fn distance_from(&self, origin: Position) -> isize {
        signed_distance(self.index, origin.index)
    }

    /// Verify that this position was issued by `owner` at `epoch`.
    pub(crate) fn check(&self, owner: VectorId, epoch: u64) -> Result<(), SeqError> {
        if self.owner != owner {
            return Err(SeqError::ForeignPosition);
        }
        if self.epoch != epoch {
            return Err(SeqError::StalePosition {
                position_epoch: self.epoch,
                current_epoch: epoch,
            });
        }
        Ok(())
    }
}

/// Saturates at `usize::MAX`, which no container can hold, so an
/// overflowing offset is always rejected as out of bounds.
impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Position {
        Position {
            index: self.index.saturating_add(rhs),
            ..self
        }
    }
}

impl Sub for Position {
    type Output = isize;

    fn sub(self, rhs: Position) -> isize {
        self.distance_from(rhs)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position(idx={}, owner={}, epoch={})",
            self.index, self.owner, self.epoch
        )
    }
}

/// `to - from` as a signed element count.
pub(crate) fn signed_distance(to: usize, from: usize) -> isize {
    if to >= from {
        (to - from) as isize
    } else {
        -((from - to) as isize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_moves_index_only() {
        let owner = VectorId::next();
        let p = Position::new(2, owner, 7) + 3;
        assert_eq!(p.index(), 5);
        assert_eq!(p.owner(), owner);
        assert_eq!(p.epoch(), 7);
    }

    #[test]
    fn add_saturates_instead_of_wrapping() {
        let p = Position::new(2, VectorId::next(), 0) + usize::MAX;
        assert_eq!(p.index(), usize::MAX);
    }

    #[test]
    fn difference_is_signed() {
        let owner = VectorId::next();
        let a = Position::new(1, owner, 0);
        let b = Position::new(4, owner, 0);
        assert_eq!(b - a, 3);
        assert_eq!(a - b, -3);
        assert_eq!(a - a, 0);
    }

    #[test]
    fn check_rejects_foreign_owner() {
        let p = Position::new(0, VectorId::next(), 0);
        assert_eq!(p.check(VectorId::next(), 0), Err(SeqError::ForeignPosition));
    }

    #[test]
    fn check_rejects_old_epoch() {
        let owner = VectorId::next();
        let p = Position::new(0, owner, 1);
        assert_eq!(
            p.check(owner, 2),
            Err(SeqError::StalePosition {
                position_epoch: 1,
                current_epoch: 2,
            })
        );
        assert!(p.check(owner, 1).is_ok());
    }
}
