//! Stats domain: actor resource pools, leveling and their notifications.

mod events;
mod pool;
mod systems;


pub use events::{ConsumeItem, ExperienceGained, HealthChanged, LeveledUp, ManaChanged};
pub use pool::{DamageGuard, DamageOutcome, ResourcePool, StatGrowth, xp_threshold};

use bevy::prelude::*;

use crate::sim::SimSet;
use crate::stats::systems::{apply_consumables, apply_experience};

pub struct StatsPlugin;

impl Plugin for StatsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<HealthChanged>()
            .add_message::<ManaChanged>()
            .add_message::<LeveledUp>()
            .add_message::<ExperienceGained>()
            .add_message::<ConsumeItem>()
            .add_systems(FixedUpdate, apply_consumables.in_set(SimSet::Casting))
            .add_systems(FixedUpdate, apply_experience.in_set(SimSet::Rewards));
    }
}
