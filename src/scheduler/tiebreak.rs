//! Seeded tie-break ordering.
//!
//! Teammates with equal counters are ordered by a pseudo-random permutation
//! keyed on `(seed, job name, date)`, the date entering as its day number
//! (`Datelike::num_days_from_ce`). The key is hashed with SHA-256 and the
//! digest seeds a ChaCha8 generator, both of which are stable across
//! platforms and releases, so a stored plan can always be recomputed.

use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Builds the generator for one (job, date) round.
pub(crate) fn round_rng(seed: u64, job: &str, date: NaiveDate) -> ChaCha8Rng {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    // Length prefix so job name bytes cannot run into the date bytes.
    hasher.update((job.len() as u64).to_le_bytes());
    hasher.update(job.as_bytes());
    hasher.update(date.num_days_from_ce().to_le_bytes());

    let mut key = [0u8; 32];
    key.copy_from_slice(&hasher.finalize());
    ChaCha8Rng::from_seed(key)
}

/// Returns `0..n` shuffled for the given round.
pub(crate) fn permutation(seed: u64, job: &str, date: NaiveDate, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut round_rng(seed, job, date));
    order
}
