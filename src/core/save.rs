//! Core domain: progress persistence.
//!
//! Progress is written as JSON to a fixed path and reloaded verbatim on
//! startup. Every failure degrades silently to defaults; persistence is never
//! allowed to interrupt play.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::resources::GameProgress;

pub const SAVE_FILE: &str = "save/progress.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub level_index: usize,
    pub collectables_collected: u32,
}

impl From<&GameProgress> for SaveData {
    fn from(progress: &GameProgress) -> Self {
        Self {
            level_index: progress.level_index,
            collectables_collected: progress.collectables_collected,
        }
    }
}

impl SaveData {
    pub fn apply_to(&self, progress: &mut GameProgress) {
        progress.level_index = self.level_index.max(1);
        progress.collectables_collected = self.collectables_collected;
    }
}

pub fn default_save_path() -> PathBuf {
    PathBuf::from(SAVE_FILE)
}

/// Read saved progress, or None when the file is absent or unreadable.
pub fn load_progress(path: &Path) -> Option<SaveData> {
    let contents = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&contents) {
        Ok(data) => Some(data),
        Err(e) => {
            warn!("Ignoring malformed save file {}: {}", path.display(), e);
            None
        }
    }
}

/// Write progress to disk, creating the parent directory as needed.
pub fn store_progress(path: &Path, data: &SaveData) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Could not create save directory: {}", e);
            return;
        }
    }
    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                warn!("Could not write save file {}: {}", path.display(), e);
            }
        }
        Err(e) => warn!("Could not serialize progress: {}", e),
    }
}

/// Startup system: fold saved progress into the fresh [`GameProgress`].
pub(crate) fn restore_saved_progress(mut progress: ResMut<GameProgress>) {
    if let Some(data) = load_progress(&default_save_path()) {
        data.apply_to(&mut progress);
        info!(
            "Restored progress: level {}, {} collectables",
            progress.level_index, progress.collectables_collected
        );
    }
}
