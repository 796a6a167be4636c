//! Sim domain: tick ordering, run configuration and shared outcome types.

mod error;
mod resources;

pub use error::ActionError;
pub use resources::{RunConfig, RunStats, SimRng};

use bevy::prelude::*;

/// Phases of one fixed simulation tick, run in declaration order.
///
/// Timers age before casts are processed, and AI transitions are decided
/// before motion is integrated, so every phase sees this tick's timers.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    /// Cooldowns, timed effects, invulnerability and respawn countdowns
    Timers,
    /// Cast requests and consumables
    Casting,
    /// Debounced AI state transitions, stuns
    AiDecide,
    /// Per-tick steering and enemy attacks
    AiMotion,
    /// Curses, damage application and kill rewards
    Damage,
    /// Experience and level-ups
    Rewards,
    /// Death handling and respawns
    Lifecycle,
}

pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<RunConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_rate))
            .insert_resource(SimRng::new(config.seed))
            .insert_resource(config)
            .init_resource::<RunStats>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Timers,
                    SimSet::Casting,
                    SimSet::AiDecide,
                    SimSet::AiMotion,
                    SimSet::Damage,
                    SimSet::Rewards,
                    SimSet::Lifecycle,
                )
                    .chain(),
            );
    }
}
