//! Gameplay core for a 2D action RPG: resource pools and leveling, ability
//! cooldowns and casting, enemy AI, timed effects and the respawn lifecycle.
//!
//! Everything runs headless in `FixedUpdate`, ordered by [`sim::SimSet`].

pub mod abilities;
pub mod combat;
pub mod content;
pub mod lifecycle;
pub mod sim;
pub mod stats;

use std::path::PathBuf;

use bevy::prelude::*;

use crate::abilities::AbilitiesPlugin;
use crate::combat::CombatPlugin;
use crate::content::ContentPlugin;
use crate::lifecycle::LifecyclePlugin;
use crate::sim::SimPlugin;
use crate::stats::StatsPlugin;

/// Every gameplay plugin, reading content from `content_path`.
pub struct EmberfallPlugin {
    pub content_path: PathBuf,
}

impl Default for EmberfallPlugin {
    fn default() -> Self {
        Self {
            content_path: ContentPlugin::default().base_path,
        }
    }
}

impl Plugin for EmberfallPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            SimPlugin,
            ContentPlugin {
                base_path: self.content_path.clone(),
            },
            StatsPlugin,
            AbilitiesPlugin,
            CombatPlugin,
            LifecyclePlugin,
        ));
    }
}
