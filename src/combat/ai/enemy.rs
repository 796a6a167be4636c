//! Combat domain: the enemy AI state machine.
//!
//! Everything here is plain data and arithmetic; the systems in
//! `combat::ai::systems` feed it positions and time and apply its intents.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::resources::AiMotionTuning;

/// Distance to the spawn anchor under which a returning enemy is home.
pub const ARRIVE_RADIUS: f32 = 1.0;

/// Per-archetype AI configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AiTuning {
    pub chase_range: f32,
    pub stopping_distance: f32,
    pub leash_range: f32,
    pub aggro_buffer: f32,
    /// Minimum seconds between two transition evaluations
    pub state_change_delay: f32,
    pub move_speed: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            chase_range: 10.0,
            stopping_distance: 1.0,
            leash_range: 15.0,
            aggro_buffer: 2.0,
            state_change_delay: 0.3,
            move_speed: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum AiState {
    #[default]
    Idle,
    Chasing,
    Returning,
    Stunned,
}

/// Distances the AI decides on, measured this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distances {
    pub to_target: f32,
    pub to_anchor: f32,
}

/// A realized state change. The caller zeroes velocity for every one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTransition {
    pub from: AiState,
    pub to: AiState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Stun {
    remaining: f32,
    /// State entered when the stun runs out
    restore: AiState,
}

/// Inputs to one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringInput {
    pub position: Vec2,
    pub target: Vec2,
    pub velocity: Vec2,
    pub facing: Quat,
}

/// What steering wants applied this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionIntent {
    pub velocity: Vec2,
    pub facing: Option<Quat>,
    /// Direct position nudge while settling onto the anchor
    pub position: Option<Vec2>,
}

#[derive(Component, Debug, Clone)]
pub struct EnemyAi {
    pub tuning: AiTuning,
    state: AiState,
    spawn_anchor: Vec2,
    /// Rotation restored on respawn
    spawn_facing: Quat,
    is_aggroed: bool,
    last_state_change: f32,
    stun: Option<Stun>,
}

impl EnemyAi {
    /// Idle at `spawn_anchor`; the first evaluation is not debounced.
    pub fn new(tuning: AiTuning, spawn_anchor: Vec2) -> Self {
        Self {
            tuning,
            state: AiState::Idle,
            spawn_anchor,
            spawn_facing: Quat::IDENTITY,
            is_aggroed: false,
            last_state_change: f32::NEG_INFINITY,
            stun: None,
        }
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    pub fn spawn_anchor(&self) -> Vec2 {
        self.spawn_anchor
    }

    pub fn with_spawn_facing(mut self, facing: Quat) -> Self {
        self.spawn_facing = facing;
        self
    }

    pub fn spawn_facing(&self) -> Quat {
        self.spawn_facing
    }

    pub fn is_aggroed(&self) -> bool {
        self.is_aggroed
    }

    pub fn stun_remaining(&self) -> Option<f32> {
        self.stun.map(|stun| stun.remaining)
    }

    pub fn should_start_chasing(&self, distances: Distances) -> bool {
        let t = &self.tuning;
        (self.is_aggroed || distances.to_target <= t.chase_range)
            && distances.to_anchor <= t.leash_range
            && distances.to_target > t.stopping_distance
    }

    pub fn should_stop_chasing(&self, distances: Distances) -> bool {
        let t = &self.tuning;
        distances.to_anchor > t.leash_range
            || (distances.to_target > t.chase_range + t.aggro_buffer && !self.is_aggroed)
    }

    /// Run the debounced transition table.
    ///
    /// At most one evaluation per `state_change_delay`; the timestamp is
    /// refreshed on every evaluation that runs, whether or not it moves.
    pub fn evaluate(&mut self, now: f32, distances: Distances) -> Option<AiTransition> {
        if self.state == AiState::Stunned {
            return None;
        }
        if now - self.last_state_change < self.tuning.state_change_delay {
            return None;
        }
        self.last_state_change = now;

        let next = match self.state {
            AiState::Idle if self.should_start_chasing(distances) => {
                self.is_aggroed = true;
                AiState::Chasing
            }
            AiState::Chasing if self.should_stop_chasing(distances) => {
                if distances.to_anchor > self.tuning.leash_range {
                    self.is_aggroed = false;
                    AiState::Returning
                } else {
                    AiState::Idle
                }
            }
            AiState::Returning if distances.to_anchor < ARRIVE_RADIUS => AiState::Idle,
            AiState::Returning if self.should_start_chasing(distances) => {
                self.is_aggroed = true;
                AiState::Chasing
            }
            _ => return None,
        };

        Some(self.enter(next))
    }

    /// Damage response: aggro and chase at once, skipping the debounce.
    ///
    /// Damage breaks a stun.
    pub fn notify_damaged(&mut self) -> Option<AiTransition> {
        if self.state == AiState::Chasing {
            return None;
        }
        self.stun = None;
        self.is_aggroed = true;
        Some(self.enter(AiState::Chasing))
    }

    /// Stun for `duration` seconds. Stunning a stunned enemy restarts the
    /// countdown and it comes out Idle.
    pub fn stun(&mut self, duration: f32) -> Option<AiTransition> {
        debug_assert!(duration >= 0.0, "negative stun: {duration}");
        let remaining = duration.max(0.0);

        if self.state == AiState::Stunned {
            self.stun = Some(Stun {
                remaining,
                restore: AiState::Idle,
            });
            return None;
        }

        self.stun = Some(Stun {
            remaining,
            restore: self.state,
        });
        Some(self.enter(AiState::Stunned))
    }

    /// Count the stun down; returns the restore transition when it ends.
    pub fn tick_stun(&mut self, dt: f32) -> Option<AiTransition> {
        debug_assert!(dt >= 0.0, "negative tick delta: {dt}");
        let stun = self.stun.as_mut()?;
        stun.remaining -= dt.max(0.0);
        if stun.remaining > 0.0 {
            return None;
        }

        let restore = stun.restore;
        self.stun = None;
        Some(self.enter(restore))
    }

    /// Back to Idle without aggro. The caller zeroes velocity.
    pub fn reset(&mut self, now: f32) {
        self.state = AiState::Idle;
        self.is_aggroed = false;
        self.stun = None;
        self.last_state_change = now;
    }

    /// Per-tick motion for the current state.
    pub fn steer(
        &self,
        input: SteeringInput,
        motion: &AiMotionTuning,
        speed_multiplier: f32,
    ) -> MotionIntent {
        let speed = self.tuning.move_speed * speed_multiplier.max(0.0);
        let mut intent = MotionIntent {
            velocity: input.velocity,
            facing: None,
            position: None,
        };

        match self.state {
            AiState::Chasing => {
                let offset = input.target - input.position;
                if offset.length() > self.tuning.stopping_distance {
                    let desired = offset.normalize_or_zero() * speed;
                    intent.velocity = input.velocity.lerp(desired, motion.chase_blend);
                } else if input.velocity.length() > motion.rest_speed {
                    intent.velocity = input.velocity.lerp(Vec2::ZERO, motion.stop_decay);
                }
            }
            AiState::Returning => {
                let offset = self.spawn_anchor - input.position;
                if offset.length() > motion.settle_radius {
                    let direction = offset.normalize_or_zero();
                    let desired = direction * speed * motion.return_speed_factor;
                    intent.velocity = input.velocity.lerp(desired, motion.return_blend);
                    let heading = Quat::from_rotation_z(direction.to_angle());
                    intent.facing = Some(input.facing.slerp(heading, motion.facing_blend));
                } else {
                    intent.velocity = Vec2::ZERO;
                    intent.position =
                        Some(input.position.lerp(self.spawn_anchor, motion.settle_blend));
                }
            }
            AiState::Idle | AiState::Stunned => {}
        }

        intent
    }

    fn enter(&mut self, next: AiState) -> AiTransition {
        let transition = AiTransition {
            from: self.state,
            to: next,
        };
        self.state = next;
        transition
    }
}
