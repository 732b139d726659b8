//! Levels domain: RON loading for level documents and the manifest.

use std::fs;
use std::path::Path;

use ron::Options;

use super::data::{LevelDoc, LevelManifest};

/// Error type for level-file loading failures.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn load_ron<T>(path: &Path) -> Result<T, LevelLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options().from_str(&contents).map_err(|e| LevelLoadError {
        file: file_name,
        message: format!("Parse error: {}", e),
    })
}

pub fn load_level_doc(path: &Path) -> Result<LevelDoc, LevelLoadError> {
    load_ron(path)
}

pub fn load_manifest(path: &Path) -> Result<LevelManifest, LevelLoadError> {
    load_ron(path)
}
