use rand::Rng;

use quiz_core::model::Question;

/// Default number of questions drawn for one session.
pub const DEFAULT_SAMPLE_SIZE: usize = 20;

/// In-place Fisher–Yates shuffle.
///
/// Walks from the last index down to 1 and swaps each slot with a uniformly
/// chosen slot in `[0, i]`, so every permutation is equally likely.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// First `min(k, bank.len())` questions of a uniformly random permutation of `bank`.
pub fn sample_working_set<R: Rng + ?Sized>(
    bank: &[Question],
    k: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut pool = bank.to_vec();
    fisher_yates(&mut pool, rng);
    pool.truncate(k.min(bank.len()));
    pool
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::fixtures::numbered_bank;

    #[test]
    fn shuffle_is_uniform_over_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 60_000;
        let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
        for _ in 0..trials {
            let mut items = [1_u8, 2, 3];
            fisher_yates(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6, "some permutations never appeared: {counts:?}");
        let expected = trials / 6;
        for (perm, count) in &counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 20,
                "permutation {perm:?} seen {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut items: Vec<u32> = (0..50).collect();
        fisher_yates(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        fisher_yates(&mut empty, &mut rng);
        let mut one = [9_u8];
        fisher_yates(&mut one, &mut rng);
        assert_eq!(one, [9]);
    }

    #[test]
    fn sample_size_is_min_of_bank_and_k() {
        let bank = numbered_bank(12);
        let mut rng = StdRng::seed_from_u64(3);
        for k in [0, 1, 5, 12, 20] {
            let sample = sample_working_set(bank.questions(), k, &mut rng);
            assert_eq!(sample.len(), k.min(12));
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let bank = numbered_bank(25);
        let mut rng = StdRng::seed_from_u64(5);
        let sample = sample_working_set(bank.questions(), 20, &mut rng);
        let mut ids: Vec<_> = sample.iter().map(Question::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }
}
