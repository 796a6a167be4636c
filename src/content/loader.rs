//! Content domain: reading the RON files under the content directory.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::ContentRegistry;

/// A content file that could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ContentLoadError {
    #[error("Failed to load {file}: IO error: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load {file}: Parse error: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

impl ContentLoadError {
    pub fn file(&self) -> &str {
        match self {
            Self::Io { file, .. } | Self::Parse { file, .. } => file,
        }
    }
}

/// `IMPLICIT_SOME` lets files write `respawn: (..)` for optional fields.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON value from a string.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|source| ContentLoadError::Parse {
            file: file.to_string(),
            source,
        })
}

/// Read one file holding a bare struct.
fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ContentLoadError::Io {
        file: file.clone(),
        source,
    })?;
    parse_ron(&file, &contents)
}

/// Read one `DataFile<T>` list and drop the wrapper.
fn load_data_file<T>(path: &Path) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    load_single_file::<DataFile<T>>(path).map(|data| data.items)
}

/// Read classes, enemies, consumables and gameplay defaults from `base_path`.
///
/// Every list file is attempted so all failures are reported together.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let mut registry = ContentRegistry::default();
    let mut errors = Vec::new();

    macro_rules! load_into {
        ($registry_field:expr, $file:expr, $type:ty) => {
            match load_data_file::<$type>(&base_path.join($file)) {
                Ok(items) => {
                    for item in items {
                        $registry_field.insert(item.id.clone(), item);
                    }
                }
                Err(error) => errors.push(error),
            }
        };
    }

    load_into!(registry.classes, "classes.ron", ClassDef);
    load_into!(registry.enemies, "enemies.ron", EnemyDef);
    load_into!(registry.consumables, "consumables.ron", ConsumableDef);

    let gameplay_defaults =
        match load_single_file::<GameplayDefaults>(&base_path.join("gameplay_defaults.ron")) {
            Ok(defaults) => defaults,
            Err(error) => {
                errors.push(error);
                return Err(errors);
            }
        };

    if errors.is_empty() {
        Ok((registry, gameplay_defaults))
    } else {
        Err(errors)
    }
}
