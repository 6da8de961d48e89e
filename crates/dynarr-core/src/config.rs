//! Growth and shrink policy for resizable arrays.

use smallvec::SmallVec;

use crate::error::ConfigError;

/// Resize targets issued before a single removal. At most two entries.
pub type ShrinkPlan = SmallVec<[usize; 2]>;

/// Capacity management parameters for a dynamic array.
///
/// Controls the starting capacity, the doubling factor applied when an
/// append or insert finds the array full, and the thresholds that decide
/// when a removal shrinks the backing buffer. Validated when an array is
/// built from it; immutable for the lifetime of that array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Slots allocated for a freshly created, empty array.
    ///
    /// Default: 4. Must be at least 1.
    pub initial_capacity: usize,

    /// Multiplier applied to the capacity when the array is full.
    ///
    /// Also the multiplier applied to the live size to compute a shrink
    /// target. Default: 2. Must be at least 2.
    pub growth_factor: usize,

    /// A removal shrinks the buffer only when
    /// `size < capacity / shrink_divisor`.
    ///
    /// Default: 4. Must be at least 1.
    pub shrink_divisor: usize,

    /// Capacity a shrink settles on once the array is nearly empty.
    ///
    /// Default: 10. A single remaining element never triggers the floor.
    pub shrink_floor: usize,
}

impl GrowthPolicy {
    /// Default starting capacity.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Default growth factor (doubling).
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default shrink threshold divisor (quarter full).
    pub const DEFAULT_SHRINK_DIVISOR: usize = 4;

    /// Default shrink floor.
    pub const DEFAULT_SHRINK_FLOOR: usize = 10;

    /// Create a policy with the default parameters.
    pub const fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            shrink_divisor: Self::DEFAULT_SHRINK_DIVISOR,
            shrink_floor: Self::DEFAULT_SHRINK_FLOOR,
        }
    }

    /// Check the structural invariants of this policy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                configured: self.growth_factor,
            });
        }
        if self.shrink_divisor == 0 {
            return Err(ConfigError::ZeroShrinkDivisor);
        }
        Ok(())
    }

    /// Capacity to grow to when an array of `capacity` slots is full.
    pub fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor)
    }

    /// Resize targets to apply, in order, before removing one element from
    /// an array holding `size` elements in `capacity` slots.
    ///
    /// Nothing is returned unless `size < capacity / shrink_divisor`. Past
    /// that threshold the scaled size is proposed if it exceeds the floor,
    /// and the floor itself is proposed if the scaled size falls short of
    /// it (except for a single remaining element). The two checks are
    /// evaluated independently.
    pub fn shrink_plan(&self, size: usize, capacity: usize) -> ShrinkPlan {
        let mut plan = ShrinkPlan::new();
        if size.saturating_mul(self.shrink_divisor) >= capacity {
            return plan;
        }
        let target = size.saturating_mul(self.growth_factor);
        if target > self.shrink_floor {
            plan.push(target);
        }
        if target < self.shrink_floor && size != 1 {
            plan.push(self.shrink_floor);
        }
        plan
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_valid() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.initial_capacity, 4);
        assert_eq!(policy.growth_factor, 2);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_initial_capacity() {
        let policy = GrowthPolicy {
            initial_capacity: 0,
            ..GrowthPolicy::new()
        };
        assert_eq!(policy.validate(), Err(ConfigError::ZeroInitialCapacity));
    }

    #[test]
    fn validate_rejects_factor_below_two() {
        let policy = GrowthPolicy {
            growth_factor: 1,
            ..GrowthPolicy::new()
        };
        match policy.validate() {
            Err(ConfigError::GrowthFactorTooSmall { configured: 1 }) => {}
            other => panic!("expected GrowthFactorTooSmall, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_zero_divisor() {
        let policy = GrowthPolicy {
            shrink_divisor: 0,
            ..GrowthPolicy::new()
        };
        assert_eq!(policy.validate(), Err(ConfigError::ZeroShrinkDivisor));
    }

    #[test]
    fn grown_doubles() {
        assert_eq!(GrowthPolicy::new().grown(4), 8);
        assert_eq!(GrowthPolicy::new().grown(usize::MAX), usize::MAX);
    }

    #[test]
    fn no_shrink_at_quarter_or_above() {
        let policy = GrowthPolicy::new();
        assert!(policy.shrink_plan(32, 128).is_empty());
        assert!(policy.shrink_plan(100, 128).is_empty());
    }

    #[test]
    fn shrink_to_double_size_above_floor() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.shrink_plan(31, 128).as_slice(), &[62]);
        assert_eq!(policy.shrink_plan(7, 30).as_slice(), &[14]);
    }

    #[test]
    fn shrink_to_floor_when_nearly_empty() {
        let policy = GrowthPolicy::new();
        assert_eq!(policy.shrink_plan(3, 14).as_slice(), &[10]);
        assert_eq!(policy.shrink_plan(2, 10).as_slice(), &[10]);
    }

    #[test]
    fn single_element_never_shrinks() {
        let policy = GrowthPolicy::new();
        assert!(policy.shrink_plan(1, 10).is_empty());
        assert!(policy.shrink_plan(1, 64).is_empty());
    }

    #[test]
    fn exactly_floor_target_is_left_alone() {
        // 2 * 5 == 10: neither above nor below the floor.
        assert!(GrowthPolicy::new().shrink_plan(5, 64).is_empty());
    }

    #[test]
    fn custom_floor_moves_both_thresholds() {
        let policy = GrowthPolicy {
            shrink_floor: 6,
            ..GrowthPolicy::new()
        };
        assert_eq!(policy.shrink_plan(4, 64).as_slice(), &[8]);
        assert_eq!(policy.shrink_plan(2, 64).as_slice(), &[6]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn plan_targets_never_drop_below_size(
                size in 0usize..10_000,
                capacity in 1usize..40_000,
            ) {
                let plan = GrowthPolicy::new().shrink_plan(size, capacity);
                prop_assert!(plan.len() <= 2);
                for target in plan {
                    prop_assert!(target >= size);
                }
            }

            #[test]
            fn plan_empty_when_at_least_quarter_full(
                capacity in 1usize..40_000,
                extra in 0usize..1_000,
            ) {
                let size = capacity.div_ceil(4) + extra;
                prop_assert!(GrowthPolicy::new().shrink_plan(size, capacity).is_empty());
            }
        }
    }
}
