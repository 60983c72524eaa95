//! Level order randomization
//!
//! Forward Fisher-Yates over an injected random source, so runs can be
//! reproduced from a seed and tests can script the draws.

use rand::Rng;
use rand::rngs::{StdRng, ThreadRng};

/// Uniform integer generator handed to the shuffler
pub trait RandomSource {
    /// Uniform draw from `[low, high)`; callers guarantee `low < high`
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;
}

impl RandomSource for StdRng {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

impl RandomSource for ThreadRng {
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Shuffle `items` in place into a uniformly random permutation
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    let n = items.len();
    // i = n - 1 could only ever swap with itself
    for i in 0..n.saturating_sub(1) {
        let j = rng.next_in_range(i, n);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    /// Always draws the upper end of the range
    struct HighRng;

    impl RandomSource for HighRng {
        fn next_in_range(&mut self, _low: usize, high: usize) -> usize {
            high - 1
        }
    }

    /// Always draws the lower end of the range (never moves anything)
    struct LowRng;

    impl RandomSource for LowRng {
        fn next_in_range(&mut self, low: usize, _high: usize) -> usize {
            low
        }
    }

    /// Records every range requested
    #[derive(Default)]
    struct RecordingRng {
        calls: Vec<(usize, usize)>,
    }

    impl RandomSource for RecordingRng {
        fn next_in_range(&mut self, low: usize, high: usize) -> usize {
            self.calls.push((low, high));
            low
        }
    }

    fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
        let mut v = items.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_shuffle_empty_and_single_are_noops() {
        let mut empty: Vec<i32> = Vec::new();
        shuffle(&mut empty, &mut HighRng);
        assert!(empty.is_empty());

        let mut one = vec![7];
        let mut rng = RecordingRng::default();
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
        assert!(rng.calls.is_empty());
    }

    #[test]
    fn test_shuffle_low_draws_keep_order() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut LowRng);
        assert_eq!(items, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_shuffle_high_draws_rotate() {
        // i=0 swaps with 3, i=1 with 3, i=2 with 3
        let mut items = vec![1, 2, 3, 4];
        shuffle(&mut items, &mut HighRng);
        assert_eq!(items, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_shuffle_draw_ranges_are_forward() {
        let mut items = vec![0; 5];
        let mut rng = RecordingRng::default();
        shuffle(&mut items, &mut rng);
        assert_eq!(rng.calls, vec![(0, 5), (1, 5), (2, 5), (3, 5)]);
    }

    #[test]
    fn test_shuffle_seeded_is_reproducible() {
        let mut first = vec![1, 2, 3, 4, 5];
        let mut second = vec![1, 2, 3, 4, 5];
        shuffle(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle(&mut second, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
        assert_eq!(sorted(&first), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_seeded_order_is_pinned() {
        // Fixed for rand 0.8 StdRng; a change here breaks recorded run orders
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut items, &mut StdRng::seed_from_u64(42));
        assert_eq!(items, vec![4, 2, 1, 5, 3]);
    }

    #[test]
    fn test_shuffle_through_trait_object() {
        let mut rng: Box<dyn RandomSource> = Box::new(StdRng::seed_from_u64(7));
        let mut items = vec!["x", "y", "z"];
        shuffle(&mut items, rng.as_mut());
        assert_eq!(sorted(&items), vec!["x", "y", "z"]);
    }

    proptest! {
        #[test]
        fn prop_shuffle_is_permutation(items in proptest::collection::vec(0u8..8, 0..40), seed in any::<u64>()) {
            let mut shuffled = items.clone();
            shuffle(&mut shuffled, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(shuffled.len(), items.len());
            prop_assert_eq!(sorted(&shuffled), sorted(&items));
        }
    }
}
