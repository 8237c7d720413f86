//! Deterministic RNG seed derivation for simulation trials.
//!
//! A master seed is expanded into per-trial sub-seeds via BLAKE3 hashing.
//! Because derivation is hash-based (not order-dependent), the same master
//! seed produces identical trial RNGs regardless of the order in which a
//! thread pool schedules the trials.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Per-trial RNG factory.
///
/// Each `(label, trial)` pair gets an independent `StdRng`. The label keeps
/// distinct sampling stages (or symbols) from sharing a stream even when
/// their trial indices collide.
#[derive(Debug, Clone)]
pub struct TrialSeeder {
    master_seed: u64,
}

impl TrialSeeder {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for `(label, trial)`.
    pub fn trial_seed(&self, label: &str, trial: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(&trial.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().expect("8-byte prefix"))
    }

    /// Create a seeded StdRng for `(label, trial)`.
    pub fn rng_for(&self, label: &str, trial: u64) -> StdRng {
        StdRng::seed_from_u64(self.trial_seed(label, trial))
    }
}
