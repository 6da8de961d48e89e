//! Mode finding over dynamic arrays.
//!
//! [`find_mode`] scans runs of adjacent equal elements and is meant for
//! sorted input. [`tally_mode`] counts every occurrence and accepts any
//! order. Both report tied values in order of first occurrence, and the
//! `values` array they return shares the input array's [`GrowthPolicy`].

use std::cmp::Ordering;
use std::hash::Hash;

use dynarr_core::GrowthPolicy;
use indexmap::IndexMap;

use crate::array::DynamicArray;

/// The most frequent value(s) of an array and how often they occur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mode<T> {
    /// Every value that reaches the highest frequency, in order of first
    /// occurrence. Empty only when the input was empty.
    pub values: DynamicArray<T>,
    /// Occurrence count of each mode value.
    ///
    /// Empty input reports 0 rather than 1, so `frequency` is always an
    /// actual count and no value is claimed to occur once.
    pub frequency: usize,
}

impl<T> Mode<T> {
    fn empty(policy: GrowthPolicy) -> Self {
        Self {
            values: DynamicArray::from_policy(policy),
            frequency: 0,
        }
    }
}

impl<T: Clone> Mode<T> {
    /// Fold a finished run of `length` copies of `value` into the result.
    fn record_run(&mut self, value: &T, length: usize) {
        match length.cmp(&self.frequency) {
            Ordering::Greater => {
                self.values = DynamicArray::from_policy(*self.values.policy());
                self.values.append(value.clone());
                self.frequency = length;
            }
            Ordering::Equal => self.values.append(value.clone()),
            Ordering::Less => {}
        }
    }
}

/// Find the mode of an array whose equal values are adjacent.
///
/// Input is expected sorted (either direction); this is not checked. Each
/// maximal run of equal elements is one candidate. A longer run replaces
/// the current result, a run of equal length adds its value, and shorter
/// runs are ignored. A single-element array yields that element with
/// frequency 1.
///
/// If equal values are split across non-adjacent runs, each run counts
/// separately and the value may be reported more than once; use
/// [`tally_mode`] for unsorted input.
pub fn find_mode<T: PartialEq + Clone>(array: &DynamicArray<T>) -> Mode<T> {
    let mut best = Mode::empty(*array.policy());
    let mut elements = array.iter();
    let Some(mut current) = elements.next() else {
        return best;
    };
    let mut run = 1;

    for value in elements {
        if value == current {
            run += 1;
            continue;
        }
        best.record_run(current, run);
        current = value;
        run = 1;
    }
    best.record_run(current, run);
    best
}

/// Find the mode of an array in any order by counting occurrences.
pub fn tally_mode<T: Hash + Eq + Clone>(array: &DynamicArray<T>) -> Mode<T> {
    let mut counts: IndexMap<&T, usize> = IndexMap::new();
    for value in array {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut mode = Mode::empty(*array.policy());
    let Some(&frequency) = counts.values().max() else {
        return mode;
    };
    mode.values.extend(
        counts
            .into_iter()
            .filter(|&(_, count)| count == frequency)
            .map(|(value, _)| value.clone()),
    );
    mode.frequency = frequency;
    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of<T: PartialEq + Clone>(values: &[T]) -> (Vec<T>, usize) {
        let da: DynamicArray<T> = values.iter().cloned().collect();
        let mode = find_mode(&da);
        (mode.values.to_vec(), mode.frequency)
    }

    #[test]
    fn two_way_tie() {
        assert_eq!(mode_of(&[1, 1, 2, 3, 3, 4]), (vec![1, 3], 2));
    }

    #[test]
    fn all_distinct_is_all_modes() {
        assert_eq!(mode_of(&[1, 2, 3, 4, 5]), (vec![1, 2, 3, 4, 5], 1));
    }

    #[test]
    fn single_element() {
        assert_eq!(mode_of(&[5]), (vec![5], 1));
    }

    #[test]
    fn empty_input() {
        let (values, frequency) = mode_of::<i32>(&[]);
        assert!(values.is_empty());
        assert_eq!(frequency, 0);
    }

    #[test]
    fn strings_with_tie_of_three() {
        let words = [
            "Apple", "Banana", "Banana", "Carrot", "Carrot", "Date", "Date", "Date", "Eggplant",
            "Eggplant", "Eggplant", "Fig", "Fig", "Grape",
        ];
        assert_eq!(mode_of(&words), (vec!["Date", "Eggplant"], 3));
    }

    #[test]
    fn longest_run_not_at_end() {
        assert_eq!(mode_of(&[1, 2, 2, 2, 3, 3, 4]), (vec![2], 3));
    }

    #[test]
    fn ties_separated_by_shorter_run() {
        assert_eq!(mode_of(&[1, 1, 2, 3, 3]), (vec![1, 3], 2));
    }

    #[test]
    fn longer_run_after_tie_resets() {
        assert_eq!(mode_of(&[1, 1, 2, 2, 3, 3, 3]), (vec![3], 3));
    }

    #[test]
    fn descending_input() {
        assert_eq!(mode_of(&[4, 3, 3, 2, 2, 2, 1, 1, 1, 1]), (vec![1], 4));
    }

    #[test]
    fn split_runs_count_separately() {
        assert_eq!(mode_of(&[1, 2, 1]), (vec![1, 2, 1], 1));
    }

    #[test]
    fn tally_handles_unsorted_input() {
        let da: DynamicArray<i32> = [3, 1, 3, 2, 1, 4].into();
        let mode = tally_mode(&da);
        assert_eq!(mode.values.to_vec(), vec![3, 1]);
        assert_eq!(mode.frequency, 2);
    }

    #[test]
    fn tally_empty() {
        let da: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(tally_mode(&da), Mode::empty(GrowthPolicy::new()));
    }

    #[test]
    fn tally_agrees_with_scan_on_sorted_input() {
        let da: DynamicArray<i32> = [1, 1, 2, 3, 3, 4].into();
        assert_eq!(tally_mode(&da), find_mode(&da));
    }

    #[test]
    fn mode_values_inherit_source_policy() {
        let policy = GrowthPolicy {
            initial_capacity: 1,
            ..GrowthPolicy::new()
        };
        let mut da = DynamicArray::with_policy(policy).unwrap();
        da.extend([1, 2, 3]);

        let scanned = find_mode(&da);
        assert_eq!(scanned.values.policy(), &policy);
        assert_eq!(scanned.values.capacity(), 4);
        assert_eq!(tally_mode(&da).values.policy(), &policy);

        let empty = DynamicArray::<i32>::with_policy(policy).unwrap();
        assert_eq!(find_mode(&empty).values.capacity(), 1);
        assert_eq!(find_mode(&empty).frequency, 0);
    }
}
