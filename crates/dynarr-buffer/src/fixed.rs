//! Fixed-length slot storage.
//!
//! A [`FixedBuffer`] is allocated once with a slot count that never changes.
//! Growing or shrinking means allocating a new buffer and moving values
//! across; the old buffer is then dropped.

use dynarr_core::IndexError;

/// A fixed number of bounds-checked slots, each either vacant or holding
/// one value.
///
/// All slots start vacant. Access outside `[0, len)` fails with
/// [`IndexError::SlotOutOfRange`] instead of panicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBuffer<T> {
    /// Backing storage. Allocated to full length at creation.
    slots: Box<[Option<T>]>,
}

impl<T> FixedBuffer<T> {
    /// Allocate a buffer of `len` vacant slots.
    pub fn allocate(len: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Fixed slot count.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the buffer has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow the value in slot `index`.
    ///
    /// Fails with [`IndexError::VacantSlot`] if the slot was never written
    /// or has been cleared.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.slot(index)?
            .as_ref()
            .ok_or(IndexError::VacantSlot { index })
    }

    /// Mutably borrow the value in slot `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.slot_mut(index)?
            .as_mut()
            .ok_or(IndexError::VacantSlot { index })
    }

    /// Store `value` in slot `index`, returning the previous occupant.
    pub fn set(&mut self, index: usize, value: T) -> Result<Option<T>, IndexError> {
        Ok(self.slot_mut(index)?.replace(value))
    }

    /// Clear slot `index`, returning whatever it held.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, IndexError> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Exchange the contents of slots `a` and `b`.
    ///
    /// Both indices are checked before anything moves.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), IndexError> {
        self.slot(a)?;
        self.slot(b)?;
        self.slots.swap(a, b);
        Ok(())
    }

    /// Allocate a buffer of `len` slots and move this buffer's contents
    /// into it, slot for slot.
    ///
    /// Slots at or beyond `len` are dropped along with the old buffer, so
    /// callers shrinking a buffer must keep those slots vacant.
    pub fn resized(self, len: usize) -> Self {
        let mut next = Self::allocate(len);
        for (dst, src) in next.slots.iter_mut().zip(self.slots.into_vec()) {
            *dst = src;
        }
        next
    }

    /// Number of slots currently holding a value.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    fn slot(&self, index: usize) -> Result<&Option<T>, IndexError> {
        let capacity = self.slots.len();
        self.slots
            .get(index)
            .ok_or(IndexError::SlotOutOfRange { index, capacity })
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<T>, IndexError> {
        let capacity = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or(IndexError::SlotOutOfRange { index, capacity })
    }
}
