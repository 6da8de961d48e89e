//! Error types for the dynarr workspace.
//!
//! Runtime failures of array and buffer operations are all reported as
//! [`IndexError`]. [`ConfigError`] is only produced when validating a
//! [`GrowthPolicy`](crate::GrowthPolicy).

use std::error::Error;
use std::fmt;

/// The kind of positional access that was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// Reading a live element.
    Get,
    /// Overwriting a live element.
    Set,
    /// Inserting before a position (`index == len` is allowed).
    Insert,
    /// Removing a live element.
    Remove,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Set => write!(f, "set"),
            Self::Insert => write!(f, "insert"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Out-of-range access to an array or its backing buffer.
///
/// Every operation that returns this error leaves its receiver unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// Index outside the live range of an array.
    OutOfBounds {
        /// Which operation was attempted.
        access: Access,
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A slice request that does not fit inside the live range.
    SliceOutOfBounds {
        /// First index of the requested slice.
        start: usize,
        /// Requested number of elements.
        length: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Slot index beyond the fixed length of a buffer.
    SlotOutOfRange {
        /// The rejected slot index.
        index: usize,
        /// Fixed slot count of the buffer.
        capacity: usize,
    },
    /// Read of a buffer slot that holds no value.
    VacantSlot {
        /// The vacant slot index.
        index: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { access, index, len } => {
                write!(f, "{access} index {index} out of bounds for length {len}")
            }
            Self::SliceOutOfBounds { start, length, len } => {
                write!(
                    f,
                    "slice of {length} elements at {start} out of bounds for length {len}"
                )
            }
            Self::SlotOutOfRange { index, capacity } => {
                write!(f, "slot {index} out of range for buffer of {capacity} slots")
            }
            Self::VacantSlot { index } => write!(f, "slot {index} is vacant"),
        }
    }
}

impl Error for IndexError {}

/// Errors detected by [`GrowthPolicy::validate()`](crate::GrowthPolicy::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is zero; an array always owns at least one slot.
    ZeroInitialCapacity,
    /// `growth_factor` below 2 would fail to make room on a full append.
    GrowthFactorTooSmall {
        /// The configured factor.
        configured: usize,
    },
    /// `shrink_divisor` is zero.
    ZeroShrinkDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial capacity must be at least 1"),
            Self::GrowthFactorTooSmall { configured } => {
                write!(f, "growth factor must be at least 2, got {configured}")
            }
            Self::ZeroShrinkDivisor => write!(f, "shrink divisor must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
