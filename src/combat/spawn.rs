//! Combat domain: player and enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{AbilityCooldowns, AbilityLoadout};
use crate::combat::ai::EnemyAi;
use crate::combat::components::{Enemy, EnemyReward, EnemyShooter, Player};
use crate::combat::effects::ActiveEffects;
use crate::content::{ClassDef, EnemyDef, PlayerDefaults};
use crate::lifecycle::{Lives, RespawnLifecycle};
use crate::stats::{ResourcePool, StatGrowth};

/// Bundle for the player actor built from a class template
#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub pool: ResourcePool,
    pub loadout: AbilityLoadout,
    pub cooldowns: AbilityCooldowns,
    pub lifecycle: RespawnLifecycle,
    pub effects: ActiveEffects,
    pub transform: Transform,
    pub velocity: LinearVelocity,
}

impl PlayerBundle {
    pub fn new(class: &ClassDef, defaults: &PlayerDefaults, position: Vec2) -> Self {
        let loadout = AbilityLoadout::new(class.id.clone(), class.abilities.to_slots());
        let cooldowns = loadout.cooldowns();
        Self {
            player: Player,
            pool: ResourcePool::from_class(&class.stats, defaults.starting_level),
            loadout,
            cooldowns,
            lifecycle: RespawnLifecycle::new(
                Lives::limited(defaults.lives),
                position,
                defaults.respawn_time,
            )
            .with_invulnerability(defaults.invulnerability),
            effects: ActiveEffects::default(),
            transform: Transform::from_translation(position.extend(0.0)),
            velocity: LinearVelocity::ZERO,
        }
    }
}

/// Bundle for an enemy archetype; optional parts are added by `spawn_enemy`
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub reward: EnemyReward,
    pub pool: ResourcePool,
    pub ai: EnemyAi,
    pub effects: ActiveEffects,
    pub transform: Transform,
    pub velocity: LinearVelocity,
}

impl EnemyBundle {
    pub fn new(def: &EnemyDef, position: Vec2) -> Self {
        let transform = Transform::from_translation(position.extend(0.0));
        Self {
            enemy: Enemy {
                archetype_id: def.id.clone(),
            },
            reward: EnemyReward {
                xp_reward: def.xp_reward,
            },
            pool: ResourcePool::from_class(
                &StatGrowth::flat(def.max_health, 0, def.attack_power),
                1,
            ),
            ai: EnemyAi::new(def.ai, position).with_spawn_facing(transform.rotation),
            effects: ActiveEffects::default(),
            transform,
            velocity: LinearVelocity::ZERO,
        }
    }
}

pub fn spawn_player(
    commands: &mut Commands,
    class: &ClassDef,
    defaults: &PlayerDefaults,
    position: Vec2,
) -> Entity {
    let entity = commands
        .spawn(PlayerBundle::new(class, defaults, position))
        .id();
    info!("Spawned {} player {:?} at {:?}", class.name, entity, position);
    entity
}

pub fn spawn_enemy(commands: &mut Commands, def: &EnemyDef, position: Vec2) -> Entity {
    let mut entity = commands.spawn(EnemyBundle::new(def, position));

    if let Some(respawn) = def.respawn {
        entity.insert(RespawnLifecycle::new(
            Lives::Unlimited,
            position,
            respawn.respawn_time,
        ));
    }
    if let Some(loot) = &def.loot {
        entity.insert(loot.clone());
    }
    if let Some(shooter) = def.shooter {
        entity.insert(EnemyShooter::new(shooter.interval, shooter.range));
    }

    let id = entity.id();
    debug!("Spawned {} {:?} at {:?}", def.name, id, position);
    id
}
