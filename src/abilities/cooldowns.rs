//! Abilities domain: slot indices and per-slot cooldown timers.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sim::ActionError;

/// The three ability buttons every class exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum AbilitySlot {
    Primary,
    Secondary,
    Ultimate,
}

impl AbilitySlot {
    pub const ALL: [AbilitySlot; 3] = [Self::Primary, Self::Secondary, Self::Ultimate];

    pub fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
            Self::Ultimate => 2,
        }
    }

    /// Zero-based slot lookup.
    pub fn from_index(index: usize) -> Result<Self, ActionError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ActionError::InvalidSlot(index))
    }
}

/// Countdown for one slot. `remaining` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CooldownTimer {
    pub duration: f32,
    pub remaining: f32,
}

impl CooldownTimer {
    pub fn on_cooldown(&self) -> bool {
        self.remaining > 0.0
    }
}

/// Cooldown state for the three ability slots of one actor.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AbilityCooldowns {
    timers: [CooldownTimer; 3],
}

impl AbilityCooldowns {
    /// All slots ready, with durations taken from class data.
    pub fn with_durations(durations: [f32; 3]) -> Self {
        Self {
            timers: durations.map(|duration| CooldownTimer {
                duration: duration.max(0.0),
                remaining: 0.0,
            }),
        }
    }

    /// Age every active timer by `dt`, stopping at exactly zero.
    pub fn tick(&mut self, dt: f32) {
        debug_assert!(dt >= 0.0, "negative tick delta: {dt}");
        let dt = dt.max(0.0);
        for timer in &mut self.timers {
            if timer.on_cooldown() {
                timer.remaining = (timer.remaining - dt).max(0.0);
            }
        }
    }

    /// Arm a slot. Re-arming an active slot restarts it.
    pub fn start_cooldown(&mut self, slot: AbilitySlot, duration: f32) {
        debug_assert!(duration >= 0.0, "negative cooldown: {duration}");
        let duration = duration.max(0.0);
        let timer = &mut self.timers[slot.index()];
        timer.duration = duration;
        timer.remaining = duration;
    }

    pub fn is_ready(&self, slot: AbilitySlot) -> bool {
        !self.timers[slot.index()].on_cooldown()
    }

    /// Fraction of the cooldown still to run, 0 when ready.
    pub fn percentage(&self, slot: AbilitySlot) -> f32 {
        let timer = &self.timers[slot.index()];
        if timer.duration <= 0.0 || !timer.on_cooldown() {
            return 0.0;
        }
        (timer.remaining / timer.duration).clamp(0.0, 1.0)
    }

    pub fn remaining(&self, slot: AbilitySlot) -> f32 {
        self.timers[slot.index()].remaining
    }

    pub fn timer(&self, slot: AbilitySlot) -> CooldownTimer {
        self.timers[slot.index()]
    }

    pub fn reset_all(&mut self) {
        for timer in &mut self.timers {
            timer.remaining = 0.0;
        }
    }
}
