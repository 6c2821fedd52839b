//! Single-owner contiguous storage with an explicit logical capacity.
//!
//! A [`Buffer`] holds the live elements of a container in a `Vec<T>` and
//! tracks its own capacity separately, so that capacity changes only when
//! the owner asks for a reallocation. `Vec`'s own growth never kicks in:
//! every push and insert is checked against the logical capacity first.

use crate::error::SeqError;

/// Contiguous element storage with a fixed number of slots.
///
/// Live elements occupy `[0, len)`. Slots `[len, capacity)` are reserved
/// but hold nothing. The only way to change the slot count is
/// [`Buffer::relocate`], which moves every live element into a freshly
/// allocated buffer and drops the old one.
pub struct Buffer<T> {
    /// Live elements. Reserved to at least `capacity` slots.
    data: Vec<T>,
    /// Logical slot count.
    capacity: usize,
}

impl<T> Buffer<T> {
    /// Allocate an empty buffer with exactly `capacity` logical slots.
    ///
    /// # Panics
    ///
    /// Panics if the allocation cannot be made. See [`Buffer::try_new`].
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(buf) => buf,
            Err(err) => panic!("{err}"),
        }
    }

    /// Allocate an empty buffer with exactly `capacity` logical slots.
    ///
    /// Returns [`SeqError::AllocationFailed`] if the byte size overflows or
    /// the allocator refuses the request.
    pub fn try_new(capacity: usize) -> Result<Self, SeqError> {
        Ok(Self {
            data: allocate(capacity)?,
            capacity,
        })
    }

    /// Append `value` at the next free slot.
    ///
    /// Returns the value back as `Err` if every slot is occupied.
    pub fn push(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.data.push(value);
        Ok(())
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Returns the value back as `Err` if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        self.data.insert(index, value);
        Ok(())
    }

    /// Remove the element at `index`, shifting the tail one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        self.data.remove(index)
    }

    /// Remove and return the last live element.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Drop every live element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Move all live elements into a new allocation of `new_capacity` slots.
    ///
    /// The old allocation is released before returning. On
    /// [`SeqError::AllocationFailed`] the buffer is left as it was.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity < len`; callers check this first.
    pub fn relocate(&mut self, new_capacity: usize) -> Result<(), SeqError> {
        assert!(
            new_capacity >= self.data.len(),
            "relocate below live count: {new_capacity} < {}",
            self.data.len()
        );
        let mut fresh = allocate(new_capacity)?;
        fresh.extend(self.data.drain(..));
        self.data = fresh;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer, yielding the live elements.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Logical slot count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the logical slot region in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }
}

/// An empty `Vec` reserved to exactly `capacity` elements.
fn allocate<T>(capacity: usize) -> Result<Vec<T>, SeqError> {
    let mut data = Vec::new();
    data.try_reserve_exact(capacity)
        .map_err(|_| SeqError::AllocationFailed {
            requested: capacity,
        })?;
    Ok(data)
}
