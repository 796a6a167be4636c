//! Lifecycle domain: death, lives and respawn state.

use bevy::prelude::*;

use crate::abilities::AbilityCooldowns;
use crate::stats::{DamageGuard, ResourcePool};

/// Present while an actor is dead. Gameplay systems skip marked actors.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lives {
    Limited { current: u32, max: u32 },
    Unlimited,
}

impl Lives {
    pub fn limited(max: u32) -> Self {
        Self::Limited { current: max, max }
    }

    pub fn remaining(&self) -> Option<u32> {
        match self {
            Self::Limited { current, .. } => Some(*current),
            Self::Unlimited => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifePhase {
    Alive,
    /// Waiting out the respawn timer
    Dead { respawn_in: f32 },
    /// Out of lives; stays dead
    Terminal,
}

/// Result of the health-reached-zero notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeathOutcome {
    AlreadyDead,
    RespawnScheduled { respawn_in: f32 },
    Terminal,
}

#[derive(Component, Debug, Clone)]
pub struct RespawnLifecycle {
    lives: Lives,
    phase: LifePhase,
    pub respawn_point: Vec2,
    pub respawn_time: f32,
    /// Invulnerability granted on respawn, 0 for none
    pub invulnerability_window: f32,
    invulnerable_for: f32,
    /// This death already spent its one deferral
    respawn_deferred: bool,
}

impl RespawnLifecycle {
    pub fn new(lives: Lives, respawn_point: Vec2, respawn_time: f32) -> Self {
        Self {
            lives,
            phase: LifePhase::Alive,
            respawn_point,
            respawn_time: respawn_time.max(0.0),
            invulnerability_window: 0.0,
            invulnerable_for: 0.0,
            respawn_deferred: false,
        }
    }

    pub fn with_invulnerability(mut self, window: f32) -> Self {
        self.invulnerability_window = window.max(0.0);
        self
    }

    pub fn lives(&self) -> Lives {
        self.lives
    }

    pub fn phase(&self) -> LifePhase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        !matches!(self.phase, LifePhase::Alive)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, LifePhase::Terminal)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_for > 0.0
    }

    pub fn damage_guard(&self) -> DamageGuard {
        DamageGuard {
            dead: self.is_dead(),
            invulnerable: self.is_invulnerable(),
        }
    }

    /// Record a death. Lives drop by one; with lives left a respawn is
    /// scheduled, otherwise the actor is terminal.
    pub fn on_health_reached_zero(&mut self) -> DeathOutcome {
        if self.is_dead() {
            return DeathOutcome::AlreadyDead;
        }
        self.invulnerable_for = 0.0;

        let lives_left = match &mut self.lives {
            Lives::Limited { current, .. } => {
                *current = current.saturating_sub(1);
                *current > 0
            }
            Lives::Unlimited => true,
        };

        if lives_left {
            self.phase = LifePhase::Dead {
                respawn_in: self.respawn_time,
            };
            DeathOutcome::RespawnScheduled {
                respawn_in: self.respawn_time,
            }
        } else {
            self.phase = LifePhase::Terminal;
            DeathOutcome::Terminal
        }
    }

    /// Age the respawn countdown and the invulnerability window.
    pub fn tick(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative tick delta: {dt}");
        let dt = dt.max(0.0);
        if self.invulnerable_for > 0.0 {
            self.invulnerable_for = (self.invulnerable_for - dt).max(0.0);
        }
        if let LifePhase::Dead { respawn_in } = &mut self.phase {
            *respawn_in = (*respawn_in - dt).max(0.0);
        }
    }

    pub fn is_respawn_due(&self) -> bool {
        matches!(self.phase, LifePhase::Dead { respawn_in } if respawn_in <= 0.0)
    }

    pub fn is_respawn_deferred(&self) -> bool {
        self.respawn_deferred
    }

    /// Push a pending respawn back by `delay` seconds, once per death.
    /// Returns false if the deferral was already used or nothing is pending.
    pub fn defer_respawn(&mut self, delay: f32) -> bool {
        if self.respawn_deferred {
            return false;
        }
        let LifePhase::Dead { respawn_in } = &mut self.phase else {
            return false;
        };
        *respawn_in += delay.max(0.0);
        self.respawn_deferred = true;
        true
    }

    /// Bring the actor back: refill the pool, clear cooldowns and start the
    /// invulnerability window. Returns the position to move to, or None
    /// when the actor is not waiting to respawn.
    pub fn respawn(
        &mut self,
        pool: &mut ResourcePool,
        cooldowns: Option<&mut AbilityCooldowns>,
    ) -> Option<Vec2> {
        if !matches!(self.phase, LifePhase::Dead { .. }) {
            return None;
        }

        pool.refill();
        if let Some(cooldowns) = cooldowns {
            cooldowns.reset_all();
        }
        self.phase = LifePhase::Alive;
        self.respawn_deferred = false;
        self.grant_invulnerability(self.invulnerability_window);
        Some(self.respawn_point)
    }

    /// Extra life, up to the maximum. Returns true if one was added.
    pub fn add_life(&mut self) -> bool {
        match &mut self.lives {
            Lives::Limited { current, max } if *current < *max => {
                *current += 1;
                true
            }
            Lives::Limited { .. } | Lives::Unlimited => false,
        }
    }

    pub fn set_respawn_point(&mut self, point: Vec2) {
        self.respawn_point = point;
    }

    pub fn grant_invulnerability(&mut self, duration: f32) {
        self.invulnerable_for = self.invulnerable_for.max(duration.max(0.0));
    }
}
