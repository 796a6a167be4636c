//! Combat domain: actor markers and enemy attack state.

use bevy::prelude::*;

/// The player-controlled actor. The AI targets the first living one.
#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct Enemy {
    pub archetype_id: String,
}

/// Experience granted to the player when this enemy dies
#[derive(Component, Debug, Clone, Copy)]
pub struct EnemyReward {
    pub xp_reward: i32,
}

/// Ranged attacker: fires at the player on a fixed interval while in range.
#[derive(Component, Debug, Clone)]
pub struct EnemyShooter {
    pub interval: f32,
    pub range: f32,
    timer: f32,
}

impl EnemyShooter {
    pub fn new(interval: f32, range: f32) -> Self {
        Self {
            interval: interval.max(0.0),
            range,
            timer: interval.max(0.0),
        }
    }

    /// Advance the countdown; true when a shot goes off this tick.
    ///
    /// The countdown only runs while the target is in range.
    pub fn tick(&mut self, dt: f32, distance_to_target: f32) -> bool {
        debug_assert!(dt >= 0.0, "negative tick delta: {dt}");
        if distance_to_target > self.range {
            return false;
        }

        self.timer -= dt.max(0.0);
        if self.timer > 0.0 {
            return false;
        }
        self.timer += self.interval;
        if self.timer <= 0.0 {
            self.timer = self.interval;
        }
        true
    }
}
