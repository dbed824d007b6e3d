// src/sample.rs
//
// Uniform without-replacement sampling of visible rows. Display
// convenience only — records themselves are never touched.

use rand::Rng;

/// How many rows the table shows by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 15;

/// Draw up to `n` distinct indices from `0..pool`, uniformly.
///
/// Partial Fisher–Yates: after k swap steps the first k slots are an
/// unbiased sample. A pool smaller than `n` returns every index — rows are
/// never fabricated.
pub fn sample_indices<R: Rng + ?Sized>(pool: usize, n: usize, rng: &mut R) -> Vec<usize> {
    let mut ix: Vec<usize> = (0..pool).collect();
    let k = n.min(pool);
    for i in 0..k {
        let j = rng.gen_range(i..pool);
        ix.swap(i, j);
    }
    ix.truncate(k);
    ix
}

/// Sample and return the indices in file order for display.
pub fn sample_sorted<R: Rng + ?Sized>(pool: usize, n: usize, rng: &mut R) -> Vec<usize> {
    let mut ix = sample_indices(pool, n, rng);
    ix.sort_unstable();
    ix
}
