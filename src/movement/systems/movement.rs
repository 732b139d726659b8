//! Movement domain: per-frame player kinematics.
//!
//! Constants are per frame of display refresh, not per second; see
//! `GameTuning`. The systems here run chained in the physics set: probe,
//! crouch, jump, gravity, horizontal, integrate.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collision::{self, Aabb, Velocity};
use crate::core::{Canvas, GameTuning};
use crate::levels::{LoadLevelEvent, Platform};
use crate::movement::kinematics;
use crate::movement::{MovementInput, Player, PlayerState, reset_player};

/// Downward surface probe: at the canvas floor, or within probe distance of
/// a platform top. The result gates both jumping and gravity this frame.
pub(crate) fn probe_surface(
    tuning: Res<GameTuning>,
    canvas: Res<Canvas>,
    platforms: Query<&Aabb, With<Platform>>,
    mut player: Query<(&Aabb, &mut PlayerState), With<Player>>,
) {
    let Ok((aabb, mut state)) = player.single_mut() else {
        return;
    };

    let at_floor = aabb.pos.y >= canvas.ground_for(aabb.size.y) - tuning.surface_probe;
    let on_platform = platforms
        .iter()
        .any(|platform| collision::supported_by(aabb, platform, tuning.surface_probe));

    state.on_surface = at_floor || on_platform;
}

/// Crouching swaps between the two fixed heights with the base line fixed.
/// The latch guards key-repeat so each press and release applies once.
pub(crate) fn apply_crouch(
    input: Res<MovementInput>,
    tuning: Res<GameTuning>,
    mut player: Query<(&mut Aabb, &mut PlayerState), With<Player>>,
) {
    let Ok((mut aabb, mut state)) = player.single_mut() else {
        return;
    };

    if input.crouch_held && !state.crouching {
        kinematics::change_height(&mut aabb, tuning.crouch_height);
        state.crouching = true;
    } else if !input.crouch_held && state.crouching {
        kinematics::change_height(&mut aabb, tuning.player_height);
        state.crouching = false;
    }
}

/// A jump press is consumed only when the surface probe succeeded this
/// frame; airborne presses are dropped, not buffered.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<GameTuning>,
    mut player: Query<(&mut Velocity, &mut PlayerState), With<Player>>,
) {
    let Ok((mut velocity, mut state)) = player.single_mut() else {
        return;
    };

    if input.jump_just_pressed && state.on_surface && !state.jumping {
        velocity.0.y = -tuning.jump_power;
        state.jumping = true;
    }
}

pub(crate) fn apply_gravity(
    tuning: Res<GameTuning>,
    mut player: Query<(&mut Velocity, &mut PlayerState), With<Player>>,
) {
    let Ok((mut velocity, mut state)) = player.single_mut() else {
        return;
    };

    let (vy, landed) = kinematics::gravity_step(velocity.0.y, state.on_surface, tuning.gravity);
    velocity.0.y = vy;
    if landed {
        state.jumping = false;
    }
}

pub(crate) fn apply_horizontal(
    input: Res<MovementInput>,
    tuning: Res<GameTuning>,
    mut player: Query<&mut Velocity, With<Player>>,
) {
    let Ok(mut velocity) = player.single_mut() else {
        return;
    };
    velocity.0.x = kinematics::drive_horizontal(velocity.0.x, input.axis, &tuning);
}

pub(crate) fn integrate_player(mut player: Query<(&mut Aabb, &Velocity), With<Player>>) {
    let Ok((mut aabb, velocity)) = player.single_mut() else {
        return;
    };
    aabb.pos += velocity.0;
}

/// Every level transition puts the player back at the fixed spawn point.
pub(crate) fn reset_on_level_load(
    mut events: MessageReader<LoadLevelEvent>,
    tuning: Res<GameTuning>,
    mut player: Query<(&mut Aabb, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    if events.read().next().is_none() {
        return;
    }
    let Ok((mut aabb, mut velocity, mut state)) = player.single_mut() else {
        return;
    };
    reset_player(&tuning, &mut aabb, &mut velocity, &mut state);
}
