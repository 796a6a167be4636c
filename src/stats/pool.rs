//! Stats domain: health, mana, level and experience arithmetic.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sim::ActionError;

/// Base stats at level 1 plus the flat gain per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub struct StatGrowth {
    pub base_health: i32,
    pub base_mana: i32,
    pub base_attack: i32,
    pub health_per_level: i32,
    pub mana_per_level: i32,
    pub attack_per_level: i32,
}

impl StatGrowth {
    /// Fixed stats that never grow (enemies).
    pub fn flat(health: i32, mana: i32, attack: i32) -> Self {
        Self {
            base_health: health,
            base_mana: mana,
            base_attack: attack,
            ..Default::default()
        }
    }

    fn at_level(&self, level: u32) -> (i32, i32, i32) {
        let steps = level.saturating_sub(1) as i32;
        (
            (self.base_health + self.health_per_level * steps).max(0),
            (self.base_mana + self.mana_per_level * steps).max(0),
            (self.base_attack + self.attack_per_level * steps).max(0),
        )
    }
}

/// Experience needed to advance past `level`: round(100 * level^1.5).
pub fn xp_threshold(level: u32) -> i32 {
    (100.0 * f64::from(level).powf(1.5)).round() as i32
}

/// Whether damage may land on the actor right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DamageGuard {
    pub dead: bool,
    pub invulnerable: bool,
}

impl DamageGuard {
    pub fn blocks(&self) -> bool {
        self.dead || self.invulnerable
    }
}

/// What a hit did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Rejected (dead, invulnerable or already at zero); nothing changed
    Ignored,
    /// Health changed and the actor survived
    Wounded,
    /// Health reached zero with this hit
    Killed,
}

/// Health, mana and progression owned by one actor.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ResourcePool {
    health: i32,
    max_health: i32,
    mana: i32,
    max_mana: i32,
    level: u32,
    xp: i32,
    xp_to_next: i32,
    attack_power: i32,
    growth: StatGrowth,
}

impl ResourcePool {
    /// Build a pool at `level` with every resource full.
    pub fn from_class(growth: &StatGrowth, level: u32) -> Self {
        let mut pool = Self {
            health: 0,
            max_health: 0,
            mana: 0,
            max_mana: 0,
            level: 1,
            xp: 0,
            xp_to_next: xp_threshold(1),
            attack_power: 0,
            growth: *growth,
        };
        pool.initialize_from_class(growth, level);
        pool
    }

    /// Reset maxima from `base + per_level * (level - 1)` and refill.
    pub fn initialize_from_class(&mut self, growth: &StatGrowth, level: u32) {
        let level = level.max(1);
        self.growth = *growth;
        self.level = level;
        self.xp = 0;
        self.xp_to_next = xp_threshold(level);
        self.apply_growth();
        self.refill();
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn mana(&self) -> i32 {
        self.mana
    }

    pub fn max_mana(&self) -> i32 {
        self.max_mana
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> i32 {
        self.xp
    }

    pub fn xp_to_next(&self) -> i32 {
        self.xp_to_next
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }

    pub fn health_percent(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }

    pub fn take_damage(&mut self, amount: i32, guard: DamageGuard) -> DamageOutcome {
        debug_assert!(amount >= 0, "negative damage: {amount}");
        if guard.blocks() || self.health == 0 {
            return DamageOutcome::Ignored;
        }

        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            DamageOutcome::Killed
        } else {
            DamageOutcome::Wounded
        }
    }

    /// Returns true if health changed.
    pub fn heal(&mut self, amount: i32) -> bool {
        debug_assert!(amount >= 0, "negative heal: {amount}");
        let before = self.health;
        self.health = self
            .health
            .saturating_add(amount.max(0))
            .min(self.max_health);
        self.health != before
    }

    pub fn spend_mana(&mut self, cost: i32) -> Result<(), ActionError> {
        debug_assert!(cost >= 0, "negative mana cost: {cost}");
        let cost = cost.max(0);
        if self.mana < cost {
            return Err(ActionError::InsufficientResource);
        }
        self.mana -= cost;
        Ok(())
    }

    /// Returns true if mana changed.
    pub fn restore_mana(&mut self, amount: i32) -> bool {
        debug_assert!(amount >= 0, "negative mana restore: {amount}");
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount.max(0)).min(self.max_mana);
        self.mana != before
    }

    /// Add experience and resolve every level it pays for.
    ///
    /// Returns each level reached, in order. Leveling recomputes maxima from
    /// the growth curve and fully restores health and mana.
    pub fn gain_xp(&mut self, amount: i32) -> Vec<u32> {
        debug_assert!(amount >= 0, "negative xp: {amount}");
        self.xp = self.xp.saturating_add(amount.max(0));

        let mut reached = Vec::new();
        while self.xp >= self.xp_to_next {
            // thresholds are >= 100 for every level >= 1
            debug_assert!(
                self.xp_to_next > 0,
                "non-positive xp threshold at level {}",
                self.level
            );
            if self.xp_to_next <= 0 {
                break;
            }
            self.level += 1;
            self.xp -= self.xp_to_next;
            self.xp_to_next = xp_threshold(self.level);
            self.apply_growth();
            self.refill();
            reached.push(self.level);
        }
        reached
    }

    /// Restore health and mana to their maxima.
    pub fn refill(&mut self) {
        self.health = self.max_health;
        self.mana = self.max_mana;
    }

    fn apply_growth(&mut self) {
        let (health, mana, attack) = self.growth.at_level(self.level);
        self.max_health = health;
        self.max_mana = mana;
        self.attack_power = attack;
        self.health = self.health.min(self.max_health);
        self.mana = self.mana.min(self.max_mana);
    }
}
