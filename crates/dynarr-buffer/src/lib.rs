//! Fixed-capacity backing storage for dynarr.
//!
//! [`FixedBuffer`] is the collaborator a resizable array is built on: a
//! slot array whose length is chosen at allocation time and never changes.
//! Every access is bounds-checked and reported through
//! [`IndexError`](dynarr_core::IndexError).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixed;

pub use fixed::FixedBuffer;
