//! Random key generation for probing experiments
//!
//! Fixed seed ensures identical key batches across runs

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Size of the measured novel-key batch. Keys below this bound are reserved
/// for that batch and never appear among seed keys.
pub const NOVEL_KEY_COUNT: usize = 50;

/// Create the experiment RNG from a fixed seed.
pub fn experiment_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Draw `count` random seed keys.
///
/// All keys are at least [`NOVEL_KEY_COUNT`], so the novel batch can never
/// collide with a seed key by value. Duplicates within the batch are
/// possible, as in any independent random draw.
pub fn seed_keys(rng: &mut impl Rng, count: usize) -> Vec<i64> {
    (0..count)
        .map(|_| rng.gen_range(NOVEL_KEY_COUNT as i64..=i32::MAX as i64))
        .collect()
}

/// The measured batch: the keys `0..NOVEL_KEY_COUNT`, shuffled.
///
/// Guaranteed unique and disjoint from every seed key.
pub fn novel_keys(rng: &mut impl Rng) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..NOVEL_KEY_COUNT as i64).collect();
    keys.shuffle(rng);
    keys
}
