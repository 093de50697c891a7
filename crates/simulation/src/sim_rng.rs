//! Deterministic storm RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! Every random draw in the storm (flash trigger, flash magnitude, drop
//! records, rock scatter) goes through `ResMut<SimRng>` instead of
//! `rand::thread_rng()`, so identical seeds produce identical storms.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Deterministic RNG resource for all storm randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and use `rng.0`
/// (which is a `ChaCha8Rng` implementing `rand::Rng`).
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Derive an independent generator for a one-off task (e.g. scattering
    /// props) without disturbing the main stream's sequence more than once.
    pub fn fork(&mut self) -> ChaCha8Rng {
        use rand::Rng;
        ChaCha8Rng::seed_from_u64(self.0.gen())
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}
