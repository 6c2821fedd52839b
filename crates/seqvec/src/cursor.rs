//! Bounds-checked forward cursors.
//!
//! [`Cursor`] (read-only) and [`CursorMut`] (mutable) are an index plus a
//! borrow of the owning [`Vector`]. The borrow is what keeps a cursor from
//! outliving a reallocation; the "am I at `end()`" check is made against
//! the vector's length at call time.
//!
//! A mutable cursor converts one way into a read-only cursor at the same
//! index, via [`From`] or [`CursorMut::as_cursor`].

use std::fmt;
use std::ops::Sub;
use std::ptr;

use crate::error::SeqError;
use crate::position::{signed_distance, Position};
use crate::vector::Vector;

/// Read-only cursor into a [`Vector`].
pub struct Cursor<'a, T> {
    vector: &'a Vector<T>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(vector: &'a Vector<T>, index: usize) -> Self {
        Self { vector, index }
    }

    /// Current element index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor sits at or past `end()`.
    pub fn is_end(&self) -> bool {
        self.index >= self.vector.len()
    }

    /// Detach this cursor into a [`Position`].
    pub fn position(&self) -> Position {
        self.vector.position_at(self.index)
    }

    /// The element under the cursor.
    pub fn get(&self) -> Result<&'a T, SeqError> {
        self.vector
            .as_slice()
            .get(self.index)
            .ok_or(SeqError::EndOfRange { index: self.index })
    }

    /// Move to the next element (pre-increment).
    pub fn advance(&mut self) -> Result<(), SeqError> {
        if self.is_end() {
            return Err(SeqError::EndOfRange { index: self.index });
        }
        self.index += 1;
        Ok(())
    }

    /// Move to the next element, returning the cursor as it was before.
    pub fn post_advance(&mut self) -> Result<Self, SeqError> {
        let before = *self;
        self.advance()?;
        Ok(before)
    }

    /// Signed element distance from `origin` to `self`.
    pub fn distance(&self, origin: &Cursor<'_, T>) -> isize {
        signed_distance(self.index, origin.index)
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(self.vector, other.vector)
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> Sub for Cursor<'_, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        self.distance(&rhs)
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.get().ok()?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("owner", &self.vector.id())
            .field("index", &self.index)
            .finish()
    }
}

/// Mutable cursor into a [`Vector`].
///
/// Holds the vector's unique borrow, so at most one exists at a time and
/// no reallocation can happen while it lives.
pub struct CursorMut<'a, T> {
    vector: &'a mut Vector<T>,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(vector: &'a mut Vector<T>, index: usize) -> Self {
        Self { vector, index }
    }

    /// Current element index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the cursor sits at or past `end()`.
    pub fn is_end(&self) -> bool {
        self.index >= self.vector.len()
    }

    /// Detach this cursor into a [`Position`].
    pub fn position(&self) -> Position {
        self.vector.position_at(self.index)
    }

    /// The element under the cursor.
    pub fn get(&self) -> Result<&T, SeqError> {
        self.vector
            .as_slice()
            .get(self.index)
            .ok_or(SeqError::EndOfRange { index: self.index })
    }

    /// The element under the cursor, mutably.
    pub fn get_mut(&mut self) -> Result<&mut T, SeqError> {
        let index = self.index;
        self.vector
            .as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::EndOfRange { index })
    }

    /// Consume the cursor, yielding the element for the full borrow.
    pub fn into_mut(self) -> Result<&'a mut T, SeqError> {
        let Self { vector, index } = self;
        vector
            .as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::EndOfRange { index })
    }

    /// Move to the next element (pre-increment).
    pub fn advance(&mut self) -> Result<(), SeqError> {
        if self.is_end() {
            return Err(SeqError::EndOfRange { index: self.index });
        }
        self.index += 1;
        Ok(())
    }

    /// Move to the next element, returning where the cursor was.
    ///
    /// The snapshot is a [`Position`]: a second live cursor would alias the
    /// unique borrow.
    pub fn post_advance(&mut self) -> Result<Position, SeqError> {
        let before = self.position();
        self.advance()?;
        Ok(before)
    }

    /// Signed element distance from `origin` to this cursor.
    pub fn distance_from(&self, origin: Position) -> isize {
        signed_distance(self.index, origin.index())
    }

    /// Read-only view at the same index.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.vector, self.index)
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    fn from(cursor: CursorMut<'a, T>) -> Self {
        let vector: &'a Vector<T> = cursor.vector;
        Cursor::new(vector, cursor.index)
    }
}

impl<T> PartialEq for CursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && ptr::eq(&*self.vector, &*other.vector)
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("owner", &self.vector.id())
            .field("index", &self.index)
            .finish()
    }
}
