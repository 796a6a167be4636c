//! Abilities domain: three-slot loadouts, cooldown tracking and the cast gate.

mod caster;
mod cooldowns;
mod events;
mod systems;


pub use caster::{AbilityLoadout, AbilitySpec};
pub use cooldowns::{AbilityCooldowns, AbilitySlot, CooldownTimer};
pub use events::{AbilityCast, CastRejected, CastRequest};

use bevy::prelude::*;

use crate::abilities::systems::{process_cast_requests, tick_cooldowns};
use crate::sim::SimSet;

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CastRequest>()
            .add_message::<AbilityCast>()
            .add_message::<CastRejected>()
            .add_systems(FixedUpdate, tick_cooldowns.in_set(SimSet::Timers))
            .add_systems(FixedUpdate, process_cast_requests.in_set(SimSet::Casting));
    }
}
