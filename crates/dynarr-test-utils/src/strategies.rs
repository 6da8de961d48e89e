//! Reusable proptest strategies.

use proptest::prelude::*;

/// Arbitrary sequences of small integers, including the empty sequence.
pub fn arb_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000i32..1_000, 0..200)
}

/// Non-empty sequences, for operations that need a live index.
pub fn arb_nonempty_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000i32..1_000, 1..200)
}

/// A non-empty sequence plus a valid `(start, length)` slice of it.
pub fn arb_slice_request() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    arb_nonempty_values().prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 0..len).prop_flat_map(move |(values, start)| {
            (Just(values), Just(start), 0..=len - start)
        })
    })
}

/// Sorted sequences with deliberately long runs of repeated values.
///
/// Drawn from a narrow value range so that ties between runs are common.
pub fn arb_sorted_runs() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec((0i32..12, 1usize..6), 0..12).prop_map(|runs| {
        let mut values: Vec<i32> = runs
            .into_iter()
            .flat_map(|(value, count)| std::iter::repeat_n(value, count))
            .collect();
        values.sort_unstable();
        values
    })
}

/// A sequence of array operations, encoded as `(op, index, value)` where
/// `op` selects append / insert / remove and `index` may be out of range.
pub fn arb_ops() -> impl Strategy<Value = Vec<(u8, usize, i32)>> {
    prop::collection::vec((0u8..3, 0usize..64, any::<i32>()), 0..200)
}
