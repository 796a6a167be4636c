//! Combat domain: enemy loot tables.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One consumable an enemy may drop on death.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct LootTable {
    pub item_id: String,
    /// Probability in [0, 1]
    pub drop_chance: f32,
    pub min: u32,
    pub max: u32,
}

impl LootTable {
    /// Roll the table; `Some(count)` when something drops.
    pub fn roll(&self, rng: &mut impl Rng) -> Option<u32> {
        if self.drop_chance <= 0.0 || rng.random::<f32>() >= self.drop_chance {
            return None;
        }

        let count = if self.min >= self.max {
            self.min
        } else {
            rng.random_range(self.min..=self.max)
        };
        (count > 0).then_some(count)
    }
}
