//! Levels domain: the ordered level file registry.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::loader;

pub const MANIFEST_PATH: &str = "assets/levels/levels.ron";

/// Ordered level files discovered at startup. An empty registry still
/// reports one level so the built-in fallback document can cycle.
#[derive(Resource, Debug, Default)]
pub struct LevelRegistry {
    pub files: Vec<PathBuf>,
}

impl LevelRegistry {
    pub fn level_count(&self) -> usize {
        self.files.len().max(1)
    }

    /// File for a 1-based level index.
    pub fn path_for(&self, index: usize) -> Option<&Path> {
        self.files.get(index.checked_sub(1)?).map(PathBuf::as_path)
    }
}

/// Startup system: read the manifest into the registry. A missing or
/// malformed manifest degrades to the built-in fallback level.
pub(crate) fn setup_level_registry(mut registry: ResMut<LevelRegistry>) {
    let manifest_path = Path::new(MANIFEST_PATH);
    match loader::load_manifest(manifest_path) {
        Ok(manifest) => {
            let base = manifest_path.parent().unwrap_or(Path::new(""));
            registry.files = manifest.levels.iter().map(|file| base.join(file)).collect();
            info!("Level registry: {} levels", registry.files.len());
        }
        Err(e) => {
            warn!("{} (using the built-in level only)", e);
        }
    }
}
