//! Identifier Allocation
//!
//! Draws identifiers for new state files.
//!
//! ## Format
//! A non-negative 31-bit integer rendered in base 10, e.g. `"123456789"`.
//! Identifiers are random, not sequential, and carry no uniqueness
//! guarantee on their own; the driver checks for collisions on disk.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of identifiers for new records
pub trait IdAllocator {
    /// Draw the next identifier
    fn next_id(&mut self) -> String;
}

/// Random allocator backed by a seeded `StdRng`
pub struct RandomIdAllocator {
    rng: StdRng,
}

impl RandomIdAllocator {
    /// Seed from the current wall-clock time
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(nanos)
    }

    /// Fixed seed, for reproducible identifier sequences
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for RandomIdAllocator {
    fn next_id(&mut self) -> String {
        self.rng.gen_range(0..=i32::MAX).to_string()
    }
}
