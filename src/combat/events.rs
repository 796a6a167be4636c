//! Combat domain: damage, crowd control and enemy attack messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct DamageEvent {
    /// None for environmental or effect damage
    pub source: Option<Entity>,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}

/// Stun an enemy's AI for `duration` seconds
#[derive(Debug, Clone)]
pub struct StunEnemy {
    pub target: Entity,
    pub duration: f32,
}

impl Message for StunEnemy {}

/// Curse: damage over time plus a movement slow
#[derive(Debug, Clone)]
pub struct ApplyCurse {
    pub source: Option<Entity>,
    pub target: Entity,
    pub damage_per_second: i32,
    pub duration: f32,
    pub slow_fraction: f32,
}

impl Message for ApplyCurse {}

/// A ranged enemy fired. Projectile simulation happens elsewhere.
#[derive(Debug, Clone)]
pub struct ShotFired {
    pub shooter: Entity,
    pub origin: Vec2,
    pub direction: Vec2,
}

impl Message for ShotFired {}

/// Items dropped by a dying enemy
#[derive(Debug, Clone)]
pub struct LootDropped {
    pub enemy: Entity,
    pub position: Vec2,
    pub item_id: String,
    pub count: u32,
}

impl Message for LootDropped {}
