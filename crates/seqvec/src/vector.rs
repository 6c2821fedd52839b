//! The growable sequence container.
//!
//! [`Vector`] owns one [`Buffer`] and routes every capacity change through
//! a single reallocation path. Each reallocation bumps the container's
//! epoch, which is how detached [`Position`]s are recognised as stale.

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::cursor::{Cursor, CursorMut};
use crate::error::{PolicyError, SeqError};
use crate::id::VectorId;
use crate::position::Position;

/// A contiguous, growable sequence of `T`.
///
/// Holds `len` live elements in a buffer of `capacity` slots. Appending to
/// a full buffer grows it by the policy's growth factor (doubling by
/// default); construction and growth never go below the policy's minimum
/// capacity. Only [`Vector::shrink_to_fit`] may take the capacity under
/// that floor.
///
/// Bounds are checked on every access and reported as [`SeqError`] rather
/// than panics. The [`Index`]/[`IndexMut`] impls are the exception: they
/// panic with the same message.
pub struct Vector<T> {
    buf: Buffer<T>,
    policy: GrowthPolicy,
    id: VectorId,
    /// Reallocation counter.
    epoch: u64,
}

impl<T> Vector<T> {
    /// Create an empty vector with the default policy and minimum capacity.
    pub fn new() -> Self {
        Self::from_parts(GrowthPolicy::DEFAULT_MIN_CAPACITY, GrowthPolicy::default())
    }

    /// Create an empty vector with room for `capacity` elements.
    ///
    /// Requests below the minimum capacity are clamped up to it.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated, like `Vec::with_capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let policy = GrowthPolicy::default();
        Self::from_parts(policy.initial_capacity(capacity), policy)
    }

    /// Create an empty vector governed by `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, PolicyError> {
        Self::with_capacity_and_policy(policy.min_capacity, policy)
    }

    /// Create an empty vector with room for `capacity` elements under `policy`.
    pub fn with_capacity_and_policy(
        capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self::from_parts(policy.initial_capacity(capacity), policy))
    }

    /// Create a vector holding exactly `items`, in order.
    ///
    /// Capacity is the item count, clamped up to the minimum capacity.
    pub fn from_list<I: IntoIterator<Item = T>>(items: I) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        let policy = GrowthPolicy::default();
        let mut vector = Self::from_parts(policy.initial_capacity(items.len()), policy);
        for item in items {
            vector.append_unchecked(item);
        }
        vector
    }

    fn from_parts(capacity: usize, policy: GrowthPolicy) -> Self {
        Self {
            buf: Buffer::new(capacity),
            policy,
            id: VectorId::next(),
            epoch: 0,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The growth policy governing this vector.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// This vector's instance ID.
    pub fn id(&self) -> VectorId {
        self.id
    }

    /// Number of reallocations since construction.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drop all live elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows or cannot be allocated. Use
    /// [`Vector::try_push_back`] to get the error instead.
    pub fn push_back(&mut self, value: T) {
        if let Err(err) = self.try_push_back(value) {
            panic!("{err}");
        }
    }

    /// Append `value`, growing the buffer first if it is full.
    pub fn try_push_back(&mut self, value: T) -> Result<(), SeqError> {
        if self.buf.is_full() {
            self.grow()?;
        }
        self.append_unchecked(value);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Result<T, SeqError> {
        self.buf.pop().ok_or(SeqError::EmptyContainer)
    }

    /// Reallocate to exactly `new_capacity` slots.
    ///
    /// Fails with [`SeqError::InvalidCapacity`] if `new_capacity` is below
    /// the live count. Any successful call invalidates outstanding
    /// positions, even if the capacity does not change. If the allocation
    /// fails, [`SeqError::AllocationFailed`] is returned and nothing changes.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), SeqError> {
        let len = self.len();
        if new_capacity < len {
            debug!(id = %self.id, requested = new_capacity, len, "reserve rejected");
            return Err(SeqError::InvalidCapacity {
                requested: new_capacity,
                len,
            });
        }
        self.reallocate(new_capacity)
    }

    /// Reallocate so that capacity equals the live count.
    ///
    /// May leave the capacity below the policy's minimum; the next growth
    /// restores it.
    pub fn shrink_to_fit(&mut self) -> Result<(), SeqError> {
        self.reallocate(self.len())
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        let len = self.len();
        self.buf
            .as_slice()
            .get(index)
            .ok_or(SeqError::IndexOutOfRange { index, len })
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, SeqError> {
        let len = self.len();
        self.buf
            .as_mut_slice()
            .get_mut(index)
            .ok_or(SeqError::IndexOutOfRange { index, len })
    }

    /// Insert `value` immediately before `at`.
    ///
    /// `at` may equal `end()`, which appends. Grows the buffer like
    /// [`Vector::push_back`] when it is full. Returns a cursor at the new
    /// element.
    pub fn insert(&mut self, at: Position, value: T) -> Result<CursorMut<'_, T>, SeqError> {
        at.check(self.id, self.epoch)?;
        let len = self.len();
        if at.index > len {
            debug!(id = %self.id, index = at.index, len, "insert rejected");
            return Err(SeqError::IteratorOutOfBounds {
                index: at.index,
                len,
            });
        }
        if self.buf.is_full() {
            self.grow()?;
        }
        if self.buf.insert(at.index, value).is_err() {
            unreachable!("buffer has a free slot after growth");
        }
        Ok(CursorMut::new(self, at.index))
    }

    /// Remove the element at `at`, shifting later elements left.
    ///
    /// `at` must refer to a live element; `end()` is rejected. Returns a
    /// cursor at the element that followed the removed one, or `end()`.
    pub fn erase(&mut self, at: Position) -> Result<CursorMut<'_, T>, SeqError> {
        at.check(self.id, self.epoch)?;
        let len = self.len();
        if at.index >= len {
            debug!(id = %self.id, index = at.index, len, "erase rejected");
            return Err(SeqError::IteratorOutOfBounds {
                index: at.index,
                len,
            });
        }
        drop(self.buf.remove(at.index));
        Ok(CursorMut::new(self, at.index))
    }

    /// Read-only cursor at the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Read-only cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.len())
    }

    /// Mutable cursor at the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len();
        CursorMut::new(self, len)
    }

    /// A detached position at `index` in the current epoch.
    ///
    /// The index is not checked here; `insert` and `erase` check it.
    pub fn position_at(&self, index: usize) -> Position {
        Position::new(index, self.id, self.epoch)
    }

    /// Live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.as_slice().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.buf.as_mut_slice().iter_mut()
    }

    fn grow(&mut self) -> Result<(), SeqError> {
        let next = self.policy.next_capacity(self.capacity())?;
        self.reallocate(next)
    }

    /// The sole path that resizes the buffer in place.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SeqError> {
        let old_capacity = self.capacity();
        if let Err(err) = self.buf.relocate(new_capacity) {
            debug!(id = %self.id, old_capacity, new_capacity, "reallocation failed");
            return Err(err);
        }
        self.advance_epoch(old_capacity);
        Ok(())
    }

    /// Record that the buffer was replaced.
    fn advance_epoch(&mut self, old_capacity: usize) {
        self.epoch += 1;
        trace!(
            id = %self.id,
            old_capacity,
            new_capacity = self.capacity(),
            bytes = self.buf.memory_bytes(),
            epoch = self.epoch,
            "buffer reallocated"
        );
    }

    fn append_unchecked(&mut self, value: T) {
        if self.buf.push(value).is_err() {
            unreachable!("caller ensured a free slot");
        }
    }
}

impl<T: Clone> Vector<T> {
    /// Replace this vector's contents with a copy of `source`'s.
    ///
    /// The previous buffer is released first. The new capacity is
    /// `source.len()` clamped up to the minimum, and the policy is taken
    /// from `source`. Outstanding positions become stale.
    pub fn assign(&mut self, source: &Self) {
        let old_capacity = self.capacity();
        self.policy = source.policy;
        self.buf = Buffer::new(self.policy.initial_capacity(source.len()));
        self.advance_epoch(old_capacity);
        for item in source.iter() {
            self.append_unchecked(item.clone());
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Deep copy into a tightly sized buffer with a fresh ID.
    fn clone(&self) -> Self {
        let mut copy = Self::from_parts(self.policy.initial_capacity(self.len()), self.policy);
        for item in self.iter() {
            copy.append_unchecked(item.clone());
        }
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics with the [`SeqError::IndexOutOfRange`] message if
    /// `index >= len`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_list(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(items: [T; N]) -> Self {
        Self::from_list(items)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
