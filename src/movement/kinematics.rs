//! Movement domain: pure per-frame kinematic rules.
//!
//! Systems are thin wrappers over these so the frame behavior can be
//! exercised in tests without an app.

use crate::collision::{Aabb, Velocity};
use crate::core::{Canvas, GameTuning};

/// Horizontal rule: a held key drives velocity directly; otherwise the
/// current velocity decays by the friction factor and snaps to zero below
/// the stop epsilon.
pub fn drive_horizontal(vx: f32, axis: f32, tuning: &GameTuning) -> f32 {
    if axis != 0.0 {
        return axis * tuning.move_speed;
    }
    let decayed = vx * tuning.friction;
    if decayed.abs() < tuning.stop_epsilon {
        0.0
    } else {
        decayed
    }
}

/// Vertical rule: gravity accrues while airborne; on a surface only downward
/// velocity is zeroed, preserving the upward velocity of a jump started this
/// frame. Returns the new velocity and whether the fall ended.
pub fn gravity_step(vy: f32, on_surface: bool, gravity: f32) -> (f32, bool) {
    if !on_surface {
        (vy + gravity, false)
    } else if vy > 0.0 {
        (0.0, true)
    } else {
        (vy, false)
    }
}

/// Swap the standing height while keeping the base line fixed: the top edge
/// moves by the height difference, the base does not.
pub fn change_height(aabb: &mut Aabb, to_height: f32) {
    let delta = aabb.size.y - to_height;
    aabb.size.y = to_height;
    aabb.pos.y += delta;
}

/// Clamp to the canvas: walls kill horizontal velocity, the floor ends any
/// fall. Returns true when the floor clamp fired.
pub fn clamp_to_canvas(aabb: &mut Aabb, velocity: &mut Velocity, canvas: &Canvas) -> bool {
    if aabb.pos.x < 0.0 {
        aabb.pos.x = 0.0;
        velocity.0.x = 0.0;
    }
    let max_x = canvas.width - aabb.size.x;
    if aabb.pos.x > max_x {
        aabb.pos.x = max_x;
        velocity.0.x = 0.0;
    }

    let ground = canvas.ground_for(aabb.size.y);
    if aabb.pos.y > ground {
        aabb.pos.y = ground;
        velocity.0.y = 0.0;
        return true;
    }
    false
}
