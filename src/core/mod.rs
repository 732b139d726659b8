//! Core domain: session states, shared resources, and the frame schedule.

mod resources;
mod save;
mod state;
mod systems;


pub use resources::{Canvas, GameProgress, GameTuning, Invincible, LevelAdvance, Lives};
pub use save::{SaveData, default_save_path, load_progress, store_progress};
pub use state::GameState;

use bevy::prelude::*;

/// Fixed per-frame pipeline. Overlap policies in [`FrameSet::Interact`] rely
/// on positions already settled by [`FrameSet::Collide`] in the same frame,
/// so the sets are chained and nothing may run out of order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Sample the held-key snapshot.
    Input,
    /// Integrate velocities and apply gravity (player, boxes, patrols).
    Physics,
    /// Resolve platform/box collisions and bounds clamps.
    Collide,
    /// Player-vs-box contact: pushing and standing.
    Contact,
    /// Overlap policies: collectables, checkpoints, enemies, NPCs.
    Interact,
    /// Session flow reacting to this frame's events (lives, advances).
    Flow,
    /// Level population triggered by this frame's load requests.
    Spawn,
    /// Map canvas-space state onto render transforms.
    Sync,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Canvas>()
            .init_resource::<GameTuning>()
            .init_resource::<GameProgress>()
            .init_resource::<Lives>()
            .init_resource::<LevelAdvance>()
            .init_resource::<Invincible>()
            .configure_sets(
                Update,
                (
                    FrameSet::Input,
                    FrameSet::Physics,
                    FrameSet::Collide,
                    FrameSet::Contact,
                    FrameSet::Interact,
                    FrameSet::Flow,
                    FrameSet::Spawn,
                    FrameSet::Sync,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (
                    systems::setup_camera,
                    systems::load_tuning,
                    save::restore_saved_progress,
                ),
            )
            .add_systems(Update, systems::finish_boot.run_if(in_state(GameState::Boot)))
            .add_systems(OnEnter(GameState::Playing), systems::begin_session)
            .add_systems(
                Update,
                (
                    systems::handle_checkpoint_claimed,
                    systems::handle_player_hit,
                    systems::tick_level_advance,
                )
                    .chain()
                    .in_set(FrameSet::Flow)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
