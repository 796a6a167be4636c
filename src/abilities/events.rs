//! Abilities domain: cast input and cast outcome messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::abilities::cooldowns::AbilitySlot;
use crate::sim::ActionError;

/// "Cast ability N" from the input source. `slot_index` is zero-based.
#[derive(Debug, Clone)]
pub struct CastRequest {
    pub caster: Entity,
    pub slot_index: usize,
}

impl Message for CastRequest {}

/// A cast passed every check; `effect` is the ability's effect id.
#[derive(Debug, Clone)]
pub struct AbilityCast {
    pub caster: Entity,
    pub slot: AbilitySlot,
    pub effect: String,
}

impl Message for AbilityCast {}

/// A cast was refused. Nothing was spent.
#[derive(Debug, Clone)]
pub struct CastRejected {
    pub caster: Entity,
    pub slot_index: usize,
    pub reason: ActionError,
}

impl Message for CastRejected {}
