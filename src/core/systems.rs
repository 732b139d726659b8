//! Core domain: session flow systems.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::collision::{Aabb, Velocity};
use crate::core::resources::{GameProgress, GameTuning, Invincible, LevelAdvance, Lives};
use crate::core::save::{self, SaveData};
use crate::core::state::GameState;
use crate::enemies::PlayerHitEvent;
use crate::levels::{LevelRegistry, LoadLevelEvent};
use crate::movement::{Player, PlayerState, reset_player};
use crate::pickups::CheckpointClaimedEvent;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Load frame-based tuning constants from `assets/data/tuning.ron`, falling
/// back to the built-in defaults when the file is missing or malformed.
pub(crate) fn load_tuning(mut tuning: ResMut<GameTuning>) {
    let path = Path::new("assets/data/tuning.ron");
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("No tuning file at {}: {} (using defaults)", path.display(), e);
            return;
        }
    };

    let options = ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    match options.from_str::<GameTuning>(&contents) {
        Ok(loaded) => *tuning = loaded,
        Err(e) => warn!("Malformed tuning file: {} (using defaults)", e),
    }
}

pub(crate) fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Title);
}

/// Entering play: fresh lives, no pending advance, and a load request for the
/// current level.
pub(crate) fn begin_session(
    tuning: Res<GameTuning>,
    progress: Res<GameProgress>,
    mut lives: ResMut<Lives>,
    mut advance: ResMut<LevelAdvance>,
    mut load_events: MessageWriter<LoadLevelEvent>,
) {
    lives.reset(tuning.starting_lives);
    advance.timer = None;
    info!("Starting session at level {}", progress.level_index);
    load_events.write(LoadLevelEvent {
        index: progress.level_index,
    });
}

/// A claimed checkpoint schedules exactly one pending advance.
pub(crate) fn handle_checkpoint_claimed(
    mut events: MessageReader<CheckpointClaimedEvent>,
    tuning: Res<GameTuning>,
    mut advance: ResMut<LevelAdvance>,
) {
    for _ in events.read() {
        if advance.is_pending() {
            continue;
        }
        advance.schedule(tuning.advance_delay);
    }
}

/// Count down a pending level advance; on expiry, bump the level index
/// (wrapping), persist progress, and request the next level.
pub(crate) fn tick_level_advance(
    time: Res<Time>,
    registry: Res<LevelRegistry>,
    mut advance: ResMut<LevelAdvance>,
    mut progress: ResMut<GameProgress>,
    mut load_events: MessageWriter<LoadLevelEvent>,
) {
    let Some(timer) = advance.timer.as_mut() else {
        return;
    };
    if !timer.tick(time.delta()).just_finished() {
        return;
    }
    advance.timer = None;

    progress.advance(registry.level_count());
    save::store_progress(&save::default_save_path(), &SaveData::from(&*progress));
    info!("Advancing to level {}", progress.level_index);
    load_events.write(LoadLevelEvent {
        index: progress.level_index,
    });
}

/// Enemy contact: lose a life and respawn; at zero lives the session enters
/// the terminal game-over state, leaving the world frozen under the overlay.
pub(crate) fn handle_player_hit(
    mut events: MessageReader<PlayerHitEvent>,
    tuning: Res<GameTuning>,
    invincible: Res<Invincible>,
    mut lives: ResMut<Lives>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player: Query<(&mut Aabb, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    for _ in events.read() {
        if invincible.0 {
            continue;
        }
        let Ok((mut aabb, mut velocity, mut state)) = player.single_mut() else {
            return;
        };
        reset_player(&tuning, &mut aabb, &mut velocity, &mut state);

        if lives.lose() {
            info!("Out of lives: game over");
            next_state.set(GameState::GameOver);
        } else {
            info!("Life lost, {} remaining", lives.remaining);
        }
    }
}
