//! Test utilities for dynarr development.
//!
//! Provides proptest strategies for the sequences the array is exercised
//! with ([`strategies`]) and the reference scenarios used by integration
//! tests ([`fixtures`]). Nothing here depends on the array crates, so the
//! same data can drive tests in any workspace member.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::{ModeCase, RemovalStep};
