//! Movement domain: player marker and kinematic state.

use bevy::prelude::*;

use crate::collision::{Aabb, Velocity};
use crate::core::GameTuning;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct PlayerState {
    /// Set by the downward probe each frame: at the canvas floor or within
    /// probe distance of a platform top.
    pub on_surface: bool,
    /// Latched by a consumed jump press, cleared on landing.
    pub jumping: bool,
    /// Latched while the crouch key is held; guards key-repeat so the
    /// height/base adjustment applies exactly once per press and release.
    pub crouching: bool,
}

/// Put the player back at the fixed spawn point, standing, at rest.
pub fn reset_player(
    tuning: &GameTuning,
    aabb: &mut Aabb,
    velocity: &mut Velocity,
    state: &mut PlayerState,
) {
    aabb.pos = tuning.spawn_point();
    aabb.size = Vec2::new(tuning.player_width, tuning.player_height);
    velocity.0 = Vec2::ZERO;
    *state = PlayerState::default();
}
