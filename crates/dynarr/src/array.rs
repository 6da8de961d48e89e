//! The resizable array and its indexing discipline.
//!
//! A [`DynamicArray`] keeps `size` live elements in the first `size` slots
//! of an exclusively owned [`FixedBuffer`]. Capacity changes replace the
//! buffer wholesale: a new buffer is allocated, the live prefix is moved
//! across, and the old buffer is dropped.
//!
//! Growth and shrink decisions come from the array's [`GrowthPolicy`]:
//!
//! - **append / insert:** a full array grows to `capacity * growth_factor`.
//! - **remove:** a sparsely filled array shrinks according to
//!   [`GrowthPolicy::shrink_plan`] before the element is removed.

use std::fmt;

use dynarr_buffer::FixedBuffer;
use dynarr_core::{Access, ConfigError, GrowthPolicy, IndexError};

/// A growable sequence of `T` over fixed-capacity storage.
///
/// Invariant: `size <= capacity`, slots `[0, size)` are occupied and slots
/// `[size, capacity)` are vacant. A failed operation never changes the
/// elements. The only state a failure can change is capacity: an insert
/// into a full array grows before checking its index.
#[derive(Clone)]
pub struct DynamicArray<T> {
    /// Number of live elements.
    size: usize,
    /// Backing slots; `buffer.len()` is the capacity.
    buffer: FixedBuffer<T>,
    policy: GrowthPolicy,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default policy (capacity 4).
    pub fn new() -> Self {
        Self::from_policy(GrowthPolicy::new())
    }

    /// Create an empty array governed by `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self::from_policy(policy))
    }

    /// Build an empty array sharing a policy that is already known valid.
    pub(crate) fn from_policy(policy: GrowthPolicy) -> Self {
        Self {
            size: 0,
            buffer: FixedBuffer::allocate(policy.initial_capacity),
            policy,
        }
    }

    /// Number of live elements.
    pub fn length(&self) -> usize {
        self.size
    }

    /// Alias for [`length`](Self::length).
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The policy governing this array's capacity changes.
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }

    /// Borrow the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.check_live(Access::Get, index)?;
        self.buffer.get(index)
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.check_live(Access::Set, index)?;
        self.buffer.get_mut(index)
    }

    /// Overwrite the element at `index`.
    ///
    /// Only live positions may be set; the array never grows implicitly.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        self.check_live(Access::Set, index)?;
        self.buffer.set(index, value)?;
        Ok(())
    }

    /// Change the capacity to `new_capacity`, keeping every live element.
    ///
    /// Requests for zero slots or for fewer slots than there are live
    /// elements are ignored.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity == 0 || new_capacity < self.size {
            return;
        }
        let old = std::mem::replace(&mut self.buffer, FixedBuffer::allocate(0));
        self.buffer = old.resized(new_capacity);
    }

    /// Add `value` after the last element, growing first if full.
    pub fn append(&mut self, value: T) {
        self.grow_if_full();
        self.buffer
            .set(self.size, value)
            .expect("size < capacity after growth, so the slot exists");
        self.size += 1;
    }

    /// Insert `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == length()` is allowed and behaves like [`append`](Self::append).
    /// A full array grows before the index is checked, so an out-of-range
    /// insert into a full array still doubles its capacity.
    pub fn insert_at_index(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        self.grow_if_full();
        if index > self.size {
            return Err(IndexError::OutOfBounds {
                access: Access::Insert,
                index,
                len: self.size,
            });
        }

        // Park the value in the first vacant slot, then walk it down to
        // `index`; each swap moves one element up by one.
        self.buffer.set(self.size, value)?;
        for slot in (index + 1..=self.size).rev() {
            self.buffer.swap(slot, slot - 1)?;
        }
        self.size += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot left.
    ///
    /// The shrink policy is applied before the element is removed, using
    /// the size prior to removal.
    pub fn remove_at_index(&mut self, index: usize) -> Result<T, IndexError> {
        self.check_live(Access::Remove, index)?;

        for target in self.policy.shrink_plan(self.size, self.capacity()) {
            self.resize(target);
        }

        let removed = self
            .buffer
            .take(index)?
            .ok_or(IndexError::VacantSlot { index })?;
        // Walk the hole to the end so the trailing slot is left vacant.
        for slot in index..self.size - 1 {
            self.buffer.swap(slot, slot + 1)?;
        }
        self.size -= 1;
        Ok(removed)
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> crate::iter::Iter<'_, T> {
        crate::iter::Iter::new(self)
    }

    fn grow_if_full(&mut self) {
        if self.size == self.capacity() {
            self.resize(self.policy.grown(self.capacity()));
        }
    }

    fn check_live(&self, access: Access, index: usize) -> Result<(), IndexError> {
        if index >= self.size {
            return Err(IndexError::OutOfBounds {
                access,
                index,
                len: self.size,
            });
        }
        Ok(())
    }
}

impl<T: Clone> DynamicArray<T> {
    /// Copy the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DYN_ARR Size/Cap: {}/{} [", self.size, self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("elements", &Elements(self))
            .finish()
    }
}

struct Elements<'a, T>(&'a DynamicArray<T>);

impl<T: fmt::Debug> fmt::Debug for Elements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
