//! Levels domain: declarative level documents, the registry, and spawning.

mod components;
mod data;
mod loader;
mod registry;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{BackgroundProp, LevelEntity, Platform, SceneProp};
pub use data::{LevelDoc, LevelManifest, NpcDef, RectDef, ViewBox};
pub use loader::{LevelLoadError, load_level_doc, load_manifest};
pub use registry::LevelRegistry;

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::{FrameSet, GameState};

/// Request to replace the live entity set with the given 1-based level.
#[derive(Debug)]
pub struct LoadLevelEvent {
    pub index: usize,
}

impl Message for LoadLevelEvent {}

pub struct LevelsPlugin;

impl Plugin for LevelsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LevelRegistry>()
            .add_message::<LoadLevelEvent>()
            .add_systems(Startup, registry::setup_level_registry)
            .add_systems(
                Update,
                spawn::handle_load_level
                    .in_set(FrameSet::Spawn)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
