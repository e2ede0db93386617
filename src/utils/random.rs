//! Seeded-random helpers shared by every generator.
//!
//! Each helper takes the generator explicitly so a whole run can be replayed
//! from one seed. The number of draws a helper makes is part of its contract.

use rand::Rng;

/// Picks one item uniformly. A one-element slice is returned without a draw.
pub fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    match items.len() {
        0 => None,
        1 => items.first(),
        len => items.get(rng.gen_range(0..len)),
    }
}

/// Uniform integer in `0..range`; ranges of 0 or 1 return 0 without a draw.
pub fn rand_index(range: usize, rng: &mut impl Rng) -> usize {
    if range <= 1 {
        0
    } else {
        rng.gen_range(0..range)
    }
}

/// Returns `count` distinct indices from `0..max` in draw order.
/// `count` is clamped to `max`.
pub fn random_unique_indices(max: usize, count: usize, rng: &mut impl Rng) -> Vec<usize> {
    let count = count.min(max);
    let mut remaining: Vec<usize> = (0..max).collect();
    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let i = rand_index(remaining.len(), rng);
        chosen.push(remaining.remove(i));
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_pick_empty_and_single() {
        let mut rng = create_test_rng();
        let empty: [u32; 0] = [];
        assert_eq!(pick(&empty, &mut rng), None);
        assert_eq!(pick(&[7], &mut rng), Some(&7));
    }

    #[test]
    fn test_single_item_pick_does_not_advance_rng() {
        let mut a = create_test_rng();
        let mut b = create_test_rng();
        pick(&["only"], &mut a);
        assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    }

    #[test]
    fn test_unique_indices_are_distinct_and_in_range() {
        let mut rng = create_test_rng();
        for count in 0..=6 {
            let indices = random_unique_indices(6, count, &mut rng);
            assert_eq!(indices.len(), count);
            let set: HashSet<_> = indices.iter().copied().collect();
            assert_eq!(set.len(), count);
            assert!(indices.iter().all(|&i| i < 6));
        }
    }

    #[test]
    fn test_unique_indices_clamps_count() {
        let mut rng = create_test_rng();
        assert_eq!(random_unique_indices(2, 5, &mut rng).len(), 2);
        assert!(random_unique_indices(0, 1, &mut rng).is_empty());
    }
}
