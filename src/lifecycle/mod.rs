//! Lifecycle domain: death, lives, respawn timing and post-respawn
//! invulnerability.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Dead, DeathOutcome, LifePhase, Lives, RespawnLifecycle};
pub use events::{Died, LivesExhausted, Respawned};

use bevy::prelude::*;

use crate::lifecycle::systems::{complete_respawns, handle_deaths, tick_lifecycles};
use crate::sim::SimSet;

pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Died>()
            .add_message::<Respawned>()
            .add_message::<LivesExhausted>()
            .add_systems(FixedUpdate, tick_lifecycles.in_set(SimSet::Timers))
            .add_systems(
                FixedUpdate,
                (handle_deaths, complete_respawns)
                    .chain()
                    .in_set(SimSet::Lifecycle),
            );
    }
}
