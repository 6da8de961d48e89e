//! Reference scenarios with known outcomes.
//!
//! - [`removal_trace`]: the capacity sequence produced by appending 100
//!   elements and then removing from the front in fixed batches.
//! - [`integer_mode_cases`] and [`word_mode_case`]: mode inputs with their
//!   expected values and frequency.

/// One batch of front removals and the expected `(length, capacity)` after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovalStep {
    pub removals: usize,
    pub length: usize,
    pub capacity: usize,
}

fn step(removals: usize, length: usize, capacity: usize) -> RemovalStep {
    RemovalStep {
        removals,
        length,
        capacity,
    }
}

/// Number of elements appended before [`removal_trace`] starts removing.
pub const REMOVAL_TRACE_FILL: usize = 100;

/// Capacity after filling an array with [`REMOVAL_TRACE_FILL`] elements.
pub const REMOVAL_TRACE_FILLED_CAPACITY: usize = 128;

/// Batches of `remove_at_index(0)` calls applied in order after the fill.
pub fn removal_trace() -> Vec<RemovalStep> {
    vec![
        step(68, 32, 128),
        step(1, 31, 128),
        step(1, 30, 62),
        step(14, 16, 62),
        step(1, 15, 62),
        step(1, 14, 30),
    ]
}

/// Expected `(length, capacity)` after each single removal that drains the
/// array left by [`removal_trace`].
pub fn drain_trace() -> Vec<(usize, usize)> {
    vec![
        (13, 30),
        (12, 30),
        (11, 30),
        (10, 30),
        (9, 30),
        (8, 30),
        (7, 30),
        (6, 14),
        (5, 14),
        (4, 14),
        (3, 14),
        (2, 10),
        (1, 10),
        (0, 10),
    ]
}

/// A mode input with its expected result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeCase<T> {
    pub input: Vec<T>,
    pub modes: Vec<T>,
    pub frequency: usize,
}

fn case<T>(input: Vec<T>, modes: Vec<T>, frequency: usize) -> ModeCase<T> {
    ModeCase {
        input,
        modes,
        frequency,
    }
}

/// Integer mode cases, including ties, a longest run away from the end,
/// and non-adjacent ties separated by a shorter run.
pub fn integer_mode_cases() -> Vec<ModeCase<i32>> {
    vec![
        case(vec![1, 1, 2, 3, 3, 4], vec![1, 3], 2),
        case(vec![1, 2, 3, 4, 5], vec![1, 2, 3, 4, 5], 1),
        case(vec![5], vec![5], 1),
        case(vec![1, 2, 2, 2, 3, 3, 4], vec![2], 3),
        case(vec![1, 1, 2, 3, 3, 4, 5, 5], vec![1, 3, 5], 2),
        case(vec![1, 1, 1, 2, 3, 3, 3, 4, 4], vec![1, 3], 3),
        case(vec![0, 0, 1, 1, 1, 2, 2], vec![1], 3),
    ]
}

/// Sorted words where two runs of three tie.
pub fn word_mode_case() -> ModeCase<&'static str> {
    case(
        vec![
            "Apple", "Banana", "Banana", "Carrot", "Carrot", "Date", "Date", "Date", "Eggplant",
            "Eggplant", "Eggplant", "Fig", "Fig", "Grape",
        ],
        vec!["Date", "Eggplant"],
        3,
    )
}

/// Descending input grown one element at a time, with the expected
/// `(modes, frequency)` after each append.
pub fn growing_mode_trace() -> (Vec<i32>, Vec<(Vec<i32>, usize)>) {
    let input = vec![4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
    let expected = vec![
        (vec![4], 1),
        (vec![4, 3], 1),
        (vec![3], 2),
        (vec![3], 2),
        (vec![3, 2], 2),
        (vec![2], 3),
        (vec![2], 3),
        (vec![2], 3),
        (vec![2, 1], 3),
        (vec![1], 4),
    ];
    (input, expected)
}
