//! Combat domain: tuning shared by every enemy.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Smoothing factors for enemy steering, applied once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AiMotionTuning {
    /// Velocity lerp toward the chase velocity
    pub chase_blend: f32,
    /// Velocity decay inside stopping distance
    pub stop_decay: f32,
    /// Speed under which decay stops
    pub rest_speed: f32,
    /// Velocity lerp toward the return velocity
    pub return_blend: f32,
    /// Return speed as a fraction of move speed
    pub return_speed_factor: f32,
    pub facing_blend: f32,
    /// Position ease toward the anchor once close enough
    pub settle_blend: f32,
    pub settle_radius: f32,
}

impl Default for AiMotionTuning {
    fn default() -> Self {
        Self {
            chase_blend: 0.2,
            stop_decay: 0.1,
            rest_speed: 0.1,
            return_blend: 0.1,
            return_speed_factor: 0.7,
            facing_blend: 0.1,
            settle_blend: 0.1,
            settle_radius: 0.5,
        }
    }
}

/// Where enemy respawns are held back while the player stands close.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct RespawnGuard {
    pub radius: f32,
    /// Seconds added to the respawn timer per blocked attempt
    pub delay: f32,
}

impl Default for RespawnGuard {
    fn default() -> Self {
        Self {
            radius: 5.0,
            delay: 5.0,
        }
    }
}
