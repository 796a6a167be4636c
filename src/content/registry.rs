//! Content domain: id-keyed lookup of every loaded definition.

use bevy::prelude::*;
use std::collections::HashMap;

use super::data::{ClassDef, ConsumableDef, EnemyDef};

/// Class templates, enemy archetypes and consumables, keyed by their `id`.
#[derive(Resource, Default)]
pub struct ContentRegistry {
    pub classes: HashMap<String, ClassDef>,
    pub enemies: HashMap<String, EnemyDef>,
    pub consumables: HashMap<String, ConsumableDef>,
}

impl ContentRegistry {
    pub fn class(&self, id: &str) -> Option<&ClassDef> {
        self.classes.get(id)
    }

    pub fn enemy(&self, id: &str) -> Option<&EnemyDef> {
        self.enemies.get(id)
    }

    pub fn consumable(&self, id: &str) -> Option<&ConsumableDef> {
        self.consumables.get(id)
    }

    /// One-line count of each table for the startup log.
    pub fn summary(&self) -> String {
        format!(
            "Content loaded: {} classes, {} enemies, {} consumables",
            self.classes.len(),
            self.enemies.len(),
            self.consumables.len(),
        )
    }
}
