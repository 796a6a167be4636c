//! Serde data definitions for the RON content files.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abilities::{AbilitySlot, AbilitySpec};
use crate::combat::{AiMotionTuning, AiTuning, LootTable, RespawnGuard};
use crate::stats::StatGrowth;

// ============================================================================
// Common Types
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Classes (classes.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ClassDef {
    pub id: String,
    pub name: String,
    pub stats: StatGrowth,
    pub abilities: ClassAbilities,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ClassAbilities {
    pub primary: AbilitySpec,
    pub secondary: AbilitySpec,
    pub ultimate: AbilitySpec,
}

impl ClassAbilities {
    pub fn get(&self, slot: AbilitySlot) -> &AbilitySpec {
        match slot {
            AbilitySlot::Primary => &self.primary,
            AbilitySlot::Secondary => &self.secondary,
            AbilitySlot::Ultimate => &self.ultimate,
        }
    }

    pub fn to_slots(&self) -> [AbilitySpec; 3] {
        [
            self.primary.clone(),
            self.secondary.clone(),
            self.ultimate.clone(),
        ]
    }
}

// ============================================================================
// Enemies (enemies.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    pub max_health: i32,
    #[serde(default)]
    pub attack_power: i32,
    #[serde(default)]
    pub xp_reward: i32,
    #[serde(default)]
    pub ai: AiTuning,
    /// Absent for enemies that stay dead
    #[serde(default)]
    pub respawn: Option<EnemyRespawnDef>,
    #[serde(default)]
    pub loot: Option<LootTable>,
    #[serde(default)]
    pub shooter: Option<ShooterDef>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct EnemyRespawnDef {
    pub respawn_time: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
pub struct ShooterDef {
    pub interval: f32,
    pub range: f32,
}

// ============================================================================
// Consumables (consumables.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ConsumableDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub health_restore: i32,
    #[serde(default)]
    pub mana_restore: i32,
}

// ============================================================================
// Gameplay Defaults (gameplay_defaults.ron) - Single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    #[serde(default)]
    pub player: PlayerDefaults,
    #[serde(default)]
    pub ai_motion: AiMotionTuning,
    #[serde(default)]
    pub respawn_guard: RespawnGuard,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            player: PlayerDefaults::default(),
            ai_motion: AiMotionTuning::default(),
            respawn_guard: RespawnGuard::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlayerDefaults {
    pub lives: u32,
    pub starting_level: u32,
    pub respawn_time: f32,
    /// Invulnerability after respawning
    pub invulnerability: f32,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            lives: 3,
            starting_level: 1,
            respawn_time: 3.0,
            invulnerability: 2.0,
        }
    }
}
