//! Content domain: RON data definitions, loading and validation.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::*;
pub use loader::{ContentLoadError, load_all_content, parse_ron};
pub use registry::ContentRegistry;
pub use validation::{ValidationError, validate_content};

use bevy::prelude::*;
use std::path::PathBuf;

/// Directory the content files are read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentSource {
    pub base_path: PathBuf,
}

pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ClassDef>()
            .register_type::<EnemyDef>()
            .register_type::<ConsumableDef>()
            .register_type::<GameplayDefaults>()
            .insert_resource(ContentSource {
                base_path: self.base_path.clone(),
            })
            .init_resource::<ContentRegistry>()
            .init_resource::<GameplayDefaults>()
            .add_systems(Startup, load_content);
    }
}

/// Read every content file; on failure keep the built-in defaults.
pub fn load_content(mut commands: Commands, source: Res<ContentSource>) {
    match load_all_content(&source.base_path) {
        Ok((registry, defaults)) => {
            for error in validate_content(&registry) {
                warn!("Content validation: {}", error);
            }
            info!("{}", registry.summary());
            commands.insert_resource(registry);
            commands.insert_resource(defaults);
        }
        Err(errors) => {
            for error in &errors {
                warn!("{}", error);
            }
            warn!(
                "Content from {} not loaded ({} errors), using built-in defaults",
                source.base_path.display(),
                errors.len()
            );
        }
    }
}
