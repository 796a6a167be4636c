//! Stats domain: resource notifications and one-shot requests.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Health value changed (damage, heal, level-up, respawn)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: i32,
    pub max: i32,
}

impl Message for HealthChanged {}

/// Mana value changed (cast, potion, level-up, respawn)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManaChanged {
    pub entity: Entity,
    pub current: i32,
    pub max: i32,
}

impl Message for ManaChanged {}

/// One message per level gained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledUp {
    pub entity: Entity,
    pub new_level: u32,
}

impl Message for LeveledUp {}

/// Grant experience to an actor
#[derive(Debug, Clone)]
pub struct ExperienceGained {
    pub entity: Entity,
    pub amount: i32,
}

impl Message for ExperienceGained {}

/// Use a consumable from the inventory on an actor
#[derive(Debug, Clone)]
pub struct ConsumeItem {
    pub entity: Entity,
    pub item_id: String,
}

impl Message for ConsumeItem {}
