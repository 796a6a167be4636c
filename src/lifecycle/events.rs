//! Lifecycle domain: death and respawn notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Health reached zero this tick
#[derive(Debug, Clone)]
pub struct Died {
    pub entity: Entity,
    pub killer: Option<Entity>,
}

impl Message for Died {}

#[derive(Debug, Clone)]
pub struct Respawned {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for Respawned {}

/// The actor died with no lives left
#[derive(Debug, Clone)]
pub struct LivesExhausted {
    pub entity: Entity,
}

impl Message for LivesExhausted {}
