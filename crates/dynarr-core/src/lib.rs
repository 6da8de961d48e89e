//! Core types for the dynarr resizable array.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error types shared by the buffer and array crates and the
//! [`GrowthPolicy`] that governs capacity changes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::{GrowthPolicy, ShrinkPlan};
pub use error::{Access, ConfigError, IndexError};
