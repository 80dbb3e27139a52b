//! Stable seeding for deterministic rotations.
//!
//! The seed must not change between runs, processes or platforms, so it is taken
//! from a SHA-256 digest rather than `std::hash`.

use sha2::{Digest, Sha256};

/// Folds the given parts into a 64-bit seed.
///
/// Each part is length-prefixed so that ("ab", "c") and ("a", "bc") differ.
pub fn stable_seed(parts: &[&str]) -> u64 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(bytes)
}
