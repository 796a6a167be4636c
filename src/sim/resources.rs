//! Sim domain: run-wide resources.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run parameters fixed at startup.
#[derive(Resource, Debug, Clone)]
pub struct RunConfig {
    pub seed: u64,
    /// Simulation tick rate in Hz
    pub tick_rate: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_rate: 60.0,
        }
    }
}

/// Seeded RNG shared by every roll in the simulation (loot drops).
#[derive(Resource, Debug)]
pub struct SimRng {
    pub rng: ChaCha8Rng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// Counters kept for the whole run.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub enemies_killed: u32,
    pub player_deaths: u32,
}
