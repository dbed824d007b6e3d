// tests/sample.rs
//
// Sampling never fabricates rows, never repeats one, and can be pinned
// with a seed for scripting.
//
use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use market_compare::sample::{sample_indices, sample_sorted, DEFAULT_SAMPLE_SIZE};

#[test]
fn small_pool_returns_every_index() {
    let ix = sample_indices(5, DEFAULT_SAMPLE_SIZE, &mut thread_rng());
    assert_eq!(ix.len(), 5);
    let set: HashSet<usize> = ix.iter().copied().collect();
    assert_eq!(set, (0..5).collect::<HashSet<usize>>());
}

#[test]
fn large_pool_returns_exactly_n_distinct_in_range() {
    let ix = sample_indices(1000, DEFAULT_SAMPLE_SIZE, &mut thread_rng());
    assert_eq!(ix.len(), DEFAULT_SAMPLE_SIZE);
    let set: HashSet<usize> = ix.iter().copied().collect();
    assert_eq!(set.len(), DEFAULT_SAMPLE_SIZE);
    assert!(ix.iter().all(|&i| i < 1000));
}

#[test]
fn empty_pool_yields_empty_sample() {
    assert!(sample_indices(0, DEFAULT_SAMPLE_SIZE, &mut thread_rng()).is_empty());
}

#[test]
fn seeded_sampling_is_deterministic() {
    let a = sample_indices(500, 15, &mut StdRng::seed_from_u64(7));
    let b = sample_indices(500, 15, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn sorted_variant_is_ascending() {
    let ix = sample_sorted(1000, 15, &mut StdRng::seed_from_u64(3));
    let mut sorted = ix.clone();
    sorted.sort_unstable();
    assert_eq!(ix, sorted);
}
