//! Abilities domain: class loadouts and the cast gate.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::abilities::cooldowns::{AbilityCooldowns, AbilitySlot};
use crate::sim::ActionError;
use crate::stats::ResourcePool;

/// One ability as class data: timing, cost and the effect id handed to the
/// effect callback.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct AbilitySpec {
    pub name: String,
    pub cooldown: f32,
    #[serde(default)]
    pub mana_cost: i32,
    pub effect: String,
}

/// Abilities bound to the three slots of one actor.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AbilityLoadout {
    pub class_id: String,
    pub abilities: [AbilitySpec; 3],
    /// When false every slot is always ready and no cooldown is started
    pub cooldowns_enabled: bool,
}

impl AbilityLoadout {
    pub fn new(class_id: impl Into<String>, abilities: [AbilitySpec; 3]) -> Self {
        Self {
            class_id: class_id.into(),
            abilities,
            cooldowns_enabled: true,
        }
    }

    /// Fresh cooldown state sized to this loadout.
    pub fn cooldowns(&self) -> AbilityCooldowns {
        AbilityCooldowns::with_durations(self.abilities.each_ref().map(|spec| spec.cooldown))
    }

    pub fn spec(&self, slot: AbilitySlot) -> &AbilitySpec {
        &self.abilities[slot.index()]
    }

    /// Gate a cast and, if it passes, run `effect` and arm the cooldown.
    ///
    /// Checks run in order: dead, cooldown, mana. A failed check leaves the
    /// pool and the cooldowns untouched.
    pub fn try_use(
        &self,
        slot: AbilitySlot,
        is_dead: bool,
        pool: &mut ResourcePool,
        cooldowns: &mut AbilityCooldowns,
        effect: impl FnOnce(&AbilitySpec),
    ) -> Result<(), ActionError> {
        if is_dead {
            return Err(ActionError::ActorDead);
        }
        if self.cooldowns_enabled && !cooldowns.is_ready(slot) {
            return Err(ActionError::OnCooldown);
        }

        let spec = self.spec(slot);
        if spec.mana_cost > 0 {
            pool.spend_mana(spec.mana_cost)?;
        }

        effect(spec);

        if self.cooldowns_enabled {
            cooldowns.start_cooldown(slot, spec.cooldown);
        }
        Ok(())
    }

    /// `try_use` for a raw zero-based slot index.
    pub fn try_use_index(
        &self,
        index: usize,
        is_dead: bool,
        pool: &mut ResourcePool,
        cooldowns: &mut AbilityCooldowns,
        effect: impl FnOnce(&AbilitySpec),
    ) -> Result<AbilitySlot, ActionError> {
        let slot = AbilitySlot::from_index(index)?;
        self.try_use(slot, is_dead, pool, cooldowns, effect)?;
        Ok(slot)
    }
}
