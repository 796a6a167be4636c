//! Combat domain: enemy AI, damage, timed effects, loot and spawning.

pub mod ai;
mod components;
mod effects;
mod events;
mod loot;
mod resources;
mod spawn;
mod systems;


pub use ai::{AiState, AiTuning, EnemyAi};
pub use components::{Enemy, EnemyReward, EnemyShooter, Player};
pub use effects::{ActiveEffects, Curse, EffectDamage};
pub use events::{ApplyCurse, DamageEvent, LootDropped, ShotFired, StunEnemy};
pub use loot::LootTable;
pub use resources::{AiMotionTuning, RespawnGuard};
pub use spawn::{EnemyBundle, PlayerBundle, spawn_enemy, spawn_player};

use bevy::prelude::*;

use crate::combat::ai::{apply_stuns, fire_enemy_shooters, steer_enemies, tick_stuns, update_enemy_ai};
use crate::combat::systems::{apply_curses, apply_damage, reward_enemy_deaths, tick_effects};
use crate::sim::SimSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AiTuning>()
            .register_type::<AiMotionTuning>()
            .register_type::<LootTable>()
            .add_message::<DamageEvent>()
            .add_message::<StunEnemy>()
            .add_message::<ApplyCurse>()
            .add_message::<ShotFired>()
            .add_message::<LootDropped>()
            .add_systems(
                FixedUpdate,
                (tick_effects, tick_stuns).in_set(SimSet::Timers),
            )
            .add_systems(
                FixedUpdate,
                (apply_stuns, update_enemy_ai)
                    .chain()
                    .in_set(SimSet::AiDecide),
            )
            .add_systems(
                FixedUpdate,
                (steer_enemies, fire_enemy_shooters)
                    .chain()
                    .in_set(SimSet::AiMotion),
            )
            .add_systems(
                FixedUpdate,
                (apply_curses, apply_damage, reward_enemy_deaths)
                    .chain()
                    .in_set(SimSet::Damage),
            );
    }
}
