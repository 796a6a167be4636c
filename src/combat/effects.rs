//! Combat domain: timed status effects advanced by the tick.

use bevy::prelude::*;

/// Slack for float drift when counting whole seconds.
const PULSE_EPSILON: f32 = 1e-4;

/// Damage over time with a movement slow.
#[derive(Debug, Clone, PartialEq)]
pub struct Curse {
    pub source: Option<Entity>,
    pub damage_per_second: i32,
    pub slow_fraction: f32,
    pub duration: f32,
    elapsed: f32,
    pulses_done: u32,
}

impl Curse {
    pub fn new(
        source: Option<Entity>,
        damage_per_second: i32,
        duration: f32,
        slow_fraction: f32,
    ) -> Self {
        debug_assert!(damage_per_second >= 0, "negative curse damage");
        Self {
            source,
            damage_per_second: damage_per_second.max(0),
            slow_fraction: slow_fraction.clamp(0.0, 1.0),
            duration: duration.max(0.0),
            elapsed: 0.0,
            pulses_done: 0,
        }
    }

    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    fn total_pulses(&self) -> u32 {
        (self.duration + PULSE_EPSILON).floor() as u32
    }

    fn is_expired(&self) -> bool {
        self.remaining() <= PULSE_EPSILON
    }
}

/// Damage a curse dealt this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectDamage {
    pub source: Option<Entity>,
    pub amount: i32,
}

/// Timed effects currently on an actor. Cleared on death.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ActiveEffects {
    curse: Option<Curse>,
}

impl ActiveEffects {
    pub fn curse(&self) -> Option<&Curse> {
        self.curse.as_ref()
    }

    /// Apply a curse; an existing one is replaced and starts over.
    pub fn apply_curse(&mut self, curse: Curse) {
        self.curse = Some(curse);
    }

    pub fn clear(&mut self) {
        self.curse = None;
    }

    /// Movement scale from active slows, 1.0 when unaffected.
    pub fn speed_multiplier(&self) -> f32 {
        match &self.curse {
            Some(curse) => 1.0 - curse.slow_fraction,
            None => 1.0,
        }
    }

    /// Advance every effect; a curse pulses once per elapsed whole second.
    pub fn tick(&mut self, dt: f32) -> Option<EffectDamage> {
        debug_assert!(dt >= 0.0, "negative tick delta: {dt}");
        let curse = self.curse.as_mut()?;
        curse.elapsed = (curse.elapsed + dt.max(0.0)).min(curse.duration);

        let due = if curse.is_expired() {
            curse.total_pulses()
        } else {
            ((curse.elapsed + PULSE_EPSILON).floor() as u32).min(curse.total_pulses())
        };
        let pulses = due.saturating_sub(curse.pulses_done);
        curse.pulses_done = due;

        let damage = (pulses > 0).then(|| EffectDamage {
            source: curse.source,
            amount: curse.damage_per_second.saturating_mul(pulses as i32),
        });

        if curse.is_expired() {
            self.curse = None;
        }
        damage
    }
}
