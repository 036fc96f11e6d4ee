use rand::Rng;

/// Fisher–Yates shuffle, in place.
///
/// Walks from the last index down to 1, swapping each element with a
/// uniformly drawn earlier (or same) position. Given a uniform `rng` this
/// produces a uniformly random permutation in O(n). Empty and
/// single-element slices are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform sample of `count` items without replacement, order randomized.
///
/// Shuffles the whole input and truncates, so the retained prefix is both a
/// uniform subset and in uniformly random order. `count` must not exceed
/// `items.len()`; callers validate before sampling.
#[must_use]
pub fn sample<T, R: Rng + ?Sized>(mut items: Vec<T>, count: usize, rng: &mut R) -> Vec<T> {
    shuffle(&mut items, rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![42];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![42]);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        shuffle(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_draws_distinct_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample((0..10).collect::<Vec<u32>>(), 4, &mut rng);

        assert_eq!(picked.len(), 4);
        let mut sorted = picked.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 4);
        assert!(picked.iter().all(|n| *n < 10));
    }

    #[test]
    fn sample_of_full_length_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample((0..10).collect::<Vec<u32>>(), 10, &mut rng);
        let mut sorted = picked;
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
