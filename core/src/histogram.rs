//! # Distance Histogram
//!
//! Per-group accumulation of reuse distances.
//!
//! Distance `0` is an overloaded bucket: it counts both cold accesses (address
//! never seen) and accesses whose previous use fell outside the tracking
//! window. The two cases are deliberately merged; report consumers read the
//! bucket as "no valid reuse measured".

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

// ============================================================================
// DISTANCE HISTOGRAM
// ============================================================================

/// Distance → occurrence-count mapping for one group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceHistogram {
    /// Occurrences per distance
    distance_counts: HashMap<u64, u64>,
    /// Sum of every recorded event, bucket 0 included
    total_accesses: u64,
}

impl DistanceHistogram {
    /// Distance recorded for cold and outside-window accesses
    pub const OUTSIDE_WINDOW: u64 = 0;

    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `distance`
    #[inline]
    pub fn record(&mut self, distance: u64) {
        *self.distance_counts.entry(distance).or_insert(0) += 1;
        self.total_accesses += 1;
    }

    /// Exact occurrence count for one distance
    #[inline]
    pub fn count_at(&self, distance: u64) -> u64 {
        self.distance_counts.get(&distance).copied().unwrap_or(0)
    }

    /// Sum of counts for distances in the half-open range `[low, high)`
    pub fn count_in_range(&self, low: u64, high: u64) -> u64 {
        self.distance_counts
            .iter()
            .filter(|&(&d, _)| d >= low && d < high)
            .map(|(_, &count)| count)
            .sum()
    }

    /// Largest distance ever recorded, `0` when empty
    pub fn max_distance(&self) -> u64 {
        self.distance_counts.keys().copied().max().unwrap_or(0)
    }

    /// Distinct recorded distances in ascending order
    pub fn sorted_distances(&self) -> Vec<u64> {
        let mut keys: Vec<u64> = self.distance_counts.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// `(distance, count)` pairs in ascending distance order
    pub fn iter_sorted(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.sorted_distances()
            .into_iter()
            .map(move |d| (d, self.count_at(d)))
    }

    /// Total number of recorded events
    #[inline(always)]
    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }

    /// Cold plus outside-window events (bucket 0)
    #[inline(always)]
    pub fn outside_window_count(&self) -> u64 {
        self.count_at(Self::OUTSIDE_WINDOW)
    }

    /// Number of distinct distances recorded
    #[inline(always)]
    pub fn distinct_distances(&self) -> usize {
        self.distance_counts.len()
    }

    /// Whether nothing has been recorded yet
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.total_accesses == 0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> DistanceHistogram {
        let mut h = DistanceHistogram::new();
        for d in [0, 0, 3, 3, 3, 7, 12, 1, 0] {
            h.record(d);
        }
        h
    }

    #[test]
    fn test_empty() {
        let h = DistanceHistogram::new();
        assert!(h.is_empty());
        assert_eq!(h.total_accesses(), 0);
        assert_eq!(h.max_distance(), 0);
        assert_eq!(h.count_at(0), 0);
        assert_eq!(h.count_in_range(0, u64::MAX), 0);
        assert!(h.sorted_distances().is_empty());
    }

    #[test]
    fn test_record_and_count() {
        let h = sample();
        assert_eq!(h.total_accesses(), 9);
        assert_eq!(h.count_at(0), 3);
        assert_eq!(h.count_at(3), 3);
        assert_eq!(h.count_at(7), 1);
        assert_eq!(h.count_at(4), 0);
        assert_eq!(h.outside_window_count(), 3);
        assert_eq!(h.distinct_distances(), 5);
    }

    #[test]
    fn test_totals_match_counts() {
        let h = sample();
        let sum: u64 = h.iter_sorted().map(|(_, c)| c).sum();
        assert_eq!(sum, h.total_accesses());
    }

    #[test]
    fn test_count_in_range_half_open() {
        let h = sample();
        assert_eq!(h.count_in_range(0, 1), 3);
        assert_eq!(h.count_in_range(1, 3), 1);
        assert_eq!(h.count_in_range(1, 4), 4);
        assert_eq!(h.count_in_range(3, 12), 4);
        assert_eq!(h.count_in_range(3, 13), 5);
        assert_eq!(h.count_in_range(5, 5), 0);
        assert_eq!(h.count_in_range(9, 2), 0);
    }

    #[test]
    fn test_range_equals_sum_of_points() {
        let h = sample();
        for low in 0..14 {
            for high in (low + 1)..15 {
                let expected: u64 = (low..high).map(|d| h.count_at(d)).sum();
                assert_eq!(h.count_in_range(low, high), expected, "[{}, {})", low, high);
            }
        }
    }

    #[test]
    fn test_max_distance() {
        assert_eq!(sample().max_distance(), 12);

        let mut only_cold = DistanceHistogram::new();
        only_cold.record(0);
        assert_eq!(only_cold.max_distance(), 0);
        assert!(!only_cold.is_empty());
    }

    #[test]
    fn test_sorted_distances() {
        assert_eq!(sample().sorted_distances(), vec![0, 1, 3, 7, 12]);
        let pairs: Vec<(u64, u64)> = sample().iter_sorted().collect();
        assert_eq!(pairs, vec![(0, 3), (1, 1), (3, 3), (7, 1), (12, 1)]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.record(99);
        assert_eq!(copy.count_at(99), 1);
        assert_eq!(original.count_at(99), 0);
        assert_eq!(original.total_accesses() + 1, copy.total_accesses());
    }
}
