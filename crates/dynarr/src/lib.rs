//! Resizable array over fixed-capacity storage.
//!
//! [`DynamicArray`] grows by doubling when full and shrinks when a removal
//! finds it sparsely filled, always by replacing its [`FixedBuffer`]
//! wholesale. On top of the positional operations it offers whole-array
//! operations (`slice`, `merge`, `map`, `filter`, `reduce`) and the
//! [`stats`] module finds modes.
//!
//! # Architecture
//!
//! ```text
//! dynarr (this crate)
//! ├── array   DynamicArray: size, capacity, resize, append, insert, remove
//! ├── iter    Iter, FromIterator/Extend/From conversions
//! ├── ops     slice, merge, map, filter, reduce
//! └── stats   find_mode (run-length scan), tally_mode (occurrence count)
//! dynarr-buffer   FixedBuffer: bounds-checked slots of fixed length
//! dynarr-core     IndexError, ConfigError, GrowthPolicy
//! ```
//!
//! # Example
//!
//! ```
//! use dynarr::DynamicArray;
//!
//! let mut da: DynamicArray<i32> = [1, 2, 3, 4].into();
//! assert_eq!(da.capacity(), 4);
//! da.append(5);
//! assert_eq!(da.capacity(), 8);
//! da.insert_at_index(0, 0).unwrap();
//! assert_eq!(da.remove_at_index(5), Ok(5));
//! assert!(da.get(5).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod iter;
mod ops;
pub mod stats;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use dynarr_buffer::FixedBuffer;
pub use dynarr_core::{Access, ConfigError, GrowthPolicy, IndexError, ShrinkPlan};
pub use stats::{find_mode, tally_mode, Mode};
