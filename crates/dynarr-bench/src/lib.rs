//! Benchmark workloads for the dynarr resizable array.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`filled_array`]: an array of `0..n` built by appending
//! - [`sorted_runs`]: sorted data with runs of a fixed length
//! - [`scattered_indices`]: a reproducible sequence of in-range positions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarr::DynamicArray;

/// Build an array holding `0..n` by repeated append.
pub fn filled_array(n: usize) -> DynamicArray<u64> {
    (0..n as u64).collect()
}

/// Sorted array of `n` elements made of consecutive runs of `run` equal
/// values. The final run may be shorter.
pub fn sorted_runs(n: usize, run: usize) -> DynamicArray<u64> {
    let run = run.max(1);
    (0..n).map(|i| (i / run) as u64).collect()
}

/// `count` positions for an array whose length starts at `len` and grows
/// by one per position (as during a sequence of inserts).
///
/// Uses a fixed-stride walk so every run of the benchmark touches the same
/// positions.
pub fn scattered_indices(len: usize, count: usize) -> Vec<usize> {
    const STRIDE: usize = 7_919;
    (0..count)
        .map(|i| (i * STRIDE) % (len + i + 1))
        .collect()
}
