//! Deterministic RNG construction and sub-seed derivation.
//!
//! All randomness in this crate flows through PCG32 engines built by
//! [`create_rng`]. Sub-seeds for independent streams are derived with BLAKE3
//! rather than by drawing from another PCG instance: a hash in counter mode
//! is a different generator family altogether, so the sub-seed bitstream can
//! never alias the bitstreams later consumed for magnitude or phase draws,
//! while still being fully reproducible from one master seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 engine from a 32-bit seed.
///
/// The seed is widened to 64 bits by duplicating it in both halves, as
/// required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives an independent seed from a master seed and a component key.
///
/// Hashes the master seed concatenated with the key and truncates to 32
/// bits. Distinct keys yield independent streams; the same `(master, key)`
/// pair always yields the same seed.
pub fn derive_seed(master_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&master_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());
    truncate_hash(&input)
}

/// Hands out a reproducible sequence of uncorrelated 32-bit sub-seeds.
///
/// Each call to [`next_sub_seed`](Self::next_sub_seed) hashes the master
/// seed together with a running counter. Identical master seeds reproduce
/// identical sub-seed sequences.
#[derive(Debug, Clone)]
pub struct SubSeedGenerator {
    master_seed: u32,
    counter: u32,
}

impl SubSeedGenerator {
    /// Creates a generator for the given master seed.
    pub fn new(master_seed: u32) -> Self {
        Self {
            master_seed,
            counter: 0,
        }
    }

    /// Reseeds with a new master seed and restarts the sequence.
    pub fn reset(&mut self, master_seed: u32) {
        self.master_seed = master_seed;
        self.counter = 0;
    }

    /// Returns the next uniformly distributed 32-bit sub-seed.
    pub fn next_sub_seed(&mut self) -> u32 {
        let mut input = [0u8; 8];
        input[..4].copy_from_slice(&self.master_seed.to_le_bytes());
        input[4..].copy_from_slice(&self.counter.to_le_bytes());
        self.counter = self.counter.wrapping_add(1);
        truncate_hash(&input)
    }
}

fn truncate_hash(input: &[u8]) -> u32 {
    let hash = blake3::hash(input);
    // Truncate to u32 (first 4 bytes, little-endian)
    let bytes: [u8; 4] = hash.as_bytes()[0..4].try_into().unwrap();
    u32::from_le_bytes(bytes)
}
