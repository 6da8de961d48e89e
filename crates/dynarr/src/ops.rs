//! Whole-array operations built on the public array contract.
//!
//! Every operation that produces a new array builds it by appending, under
//! the source array's [`GrowthPolicy`](dynarr_core::GrowthPolicy), so result
//! capacities follow the normal growth sequence rather than the result
//! length. None of these operations mutate their source except
//! [`merge`](DynamicArray::merge), which mutates only its receiver.

use dynarr_core::IndexError;

use crate::array::DynamicArray;

impl<T: Clone> DynamicArray<T> {
    /// Copy `length` elements starting at `start_index` into a new array.
    ///
    /// `start_index` must address a live element (so slicing an empty
    /// array always fails) and the slice must end within the live range.
    /// A zero-length slice at a live index is valid and empty.
    pub fn slice(&self, start_index: usize, length: usize) -> Result<Self, IndexError> {
        let end = start_index.checked_add(length);
        if start_index >= self.length() || end.is_none_or(|end| end > self.length()) {
            return Err(IndexError::SliceOutOfBounds {
                start: start_index,
                length,
                len: self.length(),
            });
        }
        let mut out = Self::from_policy(*self.policy());
        out.extend(self.iter().skip(start_index).take(length).cloned());
        Ok(out)
    }

    /// Append a copy of every element of `other`, in order.
    pub fn merge(&mut self, other: &DynamicArray<T>) {
        self.extend(other.iter().cloned());
    }

    /// New array holding the elements for which `predicate` returns `true`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        let mut out = Self::from_policy(*self.policy());
        out.extend(self.iter().filter(|&value| predicate(value)).cloned());
        out
    }

    /// Left fold seeded with the first element.
    ///
    /// Returns `None` for an empty array. A single-element array yields a
    /// copy of that element without calling `f`.
    pub fn reduce<F>(&self, f: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let mut iter = self.iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, f))
    }
}

impl<T> DynamicArray<T> {
    /// New array of `f(element)` for each element, in order.
    pub fn map<U, F>(&self, f: F) -> DynamicArray<U>
    where
        F: FnMut(&T) -> U,
    {
        let mut out = DynamicArray::from_policy(*self.policy());
        out.extend(self.iter().map(f));
        out
    }

    /// Left fold over every element starting from `init`.
    ///
    /// An empty array yields `init` unchanged.
    pub fn reduce_with<U, F>(&self, init: U, f: F) -> U
    where
        F: FnMut(U, &T) -> U,
    {
        self.iter().fold(init, f)
    }
}
