//! Movement domain: tests for the per-frame kinematic rules.

use bevy::prelude::*;

use super::components::{PlayerState, reset_player};
use super::kinematics::{change_height, clamp_to_canvas, drive_horizontal, gravity_step};
use crate::collision::{Aabb, Velocity};
use crate::core::{Canvas, GameTuning};

fn tuning() -> GameTuning {
    GameTuning::default()
}

// -----------------------------------------------------------------------------
// Horizontal rule
// -----------------------------------------------------------------------------

#[test]
fn test_held_key_drives_velocity_directly() {
    let t = tuning();
    assert_eq!(drive_horizontal(0.0, 1.0, &t), 5.0);
    assert_eq!(drive_horizontal(5.0, -1.0, &t), -5.0);
}

#[test]
fn test_friction_decays_without_input() {
    let t = tuning();
    let vx = drive_horizontal(5.0, 0.0, &t);
    assert_eq!(vx, 4.0);
}

#[test]
fn test_friction_snaps_to_zero_below_epsilon() {
    let t = tuning();
    assert_eq!(drive_horizontal(0.12, 0.0, &t), 0.0);
    assert_eq!(drive_horizontal(-0.12, 0.0, &t), 0.0);
}

#[test]
fn test_friction_reaches_rest_in_finite_frames() {
    let t = tuning();
    let mut vx = 5.0;
    let mut frames = 0;
    while vx != 0.0 {
        vx = drive_horizontal(vx, 0.0, &t);
        frames += 1;
        assert!(frames < 100, "friction never brought the player to rest");
    }
    assert!(frames > 1);
}

// -----------------------------------------------------------------------------
// Gravity rule
// -----------------------------------------------------------------------------

#[test]
fn test_gravity_accrues_in_the_air() {
    let (vy, landed) = gravity_step(0.0, false, 0.5);
    assert_eq!(vy, 0.5);
    assert!(!landed);
}

#[test]
fn test_surface_zeroes_only_downward_velocity() {
    let (vy, landed) = gravity_step(3.0, true, 0.5);
    assert_eq!(vy, 0.0);
    assert!(landed);

    // Upward velocity on the jump frame survives the surface test.
    let (vy, landed) = gravity_step(-9.0, true, 0.5);
    assert_eq!(vy, -9.0);
    assert!(!landed);
}

// -----------------------------------------------------------------------------
// Crouch
// -----------------------------------------------------------------------------

#[test]
fn test_crouch_press_and_release_preserve_the_base_line() {
    let t = tuning();
    let mut aabb = Aabb::new(50.0, 350.0, t.player_width, t.player_height);
    let base = aabb.bottom();

    change_height(&mut aabb, t.crouch_height);
    assert_eq!(aabb.size.y, 40.0);
    assert_eq!(aabb.pos.y, 370.0);
    assert_eq!(aabb.bottom(), base);

    change_height(&mut aabb, t.player_height);
    assert_eq!(aabb.size.y, 60.0);
    assert_eq!(aabb.pos.y, 350.0);
    assert_eq!(aabb.bottom(), base);
}

// -----------------------------------------------------------------------------
// Canvas bounds
// -----------------------------------------------------------------------------

#[test]
fn test_walls_clamp_and_kill_horizontal_velocity() {
    let canvas = Canvas::default();
    let mut aabb = Aabb::new(-10.0, 100.0, 45.0, 60.0);
    let mut velocity = Velocity(Vec2::new(-5.0, 0.0));
    clamp_to_canvas(&mut aabb, &mut velocity, &canvas);
    assert_eq!(aabb.pos.x, 0.0);
    assert_eq!(velocity.0.x, 0.0);

    let mut aabb = Aabb::new(2000.0, 100.0, 45.0, 60.0);
    let mut velocity = Velocity(Vec2::new(5.0, 0.0));
    clamp_to_canvas(&mut aabb, &mut velocity, &canvas);
    assert_eq!(aabb.pos.x, canvas.width - 45.0);
    assert_eq!(velocity.0.x, 0.0);
}

#[test]
fn test_floor_clamp_ends_the_fall() {
    let canvas = Canvas::default();
    let mut aabb = Aabb::new(50.0, 900.0, 45.0, 60.0);
    let mut velocity = Velocity(Vec2::new(0.0, 12.0));
    let landed = clamp_to_canvas(&mut aabb, &mut velocity, &canvas);
    assert!(landed);
    assert_eq!(aabb.pos.y, canvas.ground_for(60.0));
    assert_eq!(velocity.0.y, 0.0);
}

/// Frame-loop property: whatever the input sequence, the player stays inside
/// the horizontal canvas range and never sinks below ground level.
#[test]
fn test_player_stays_inside_canvas_over_many_frames() {
    let t = tuning();
    let canvas = Canvas::default();
    let mut aabb = Aabb::new(t.spawn_x, t.spawn_y, t.player_width, t.player_height);
    let mut velocity = Velocity(Vec2::ZERO);

    // Alternate between holding right, holding left, and coasting, with
    // gravity always on (no platforms in this scenario).
    for frame in 0..600 {
        let axis = match (frame / 40) % 3 {
            0 => 1.0,
            1 => -1.0,
            _ => 0.0,
        };
        velocity.0.x = drive_horizontal(velocity.0.x, axis, &t);
        let on_surface = aabb.pos.y >= canvas.ground_for(aabb.size.y) - t.surface_probe;
        let (vy, _) = gravity_step(velocity.0.y, on_surface, t.gravity);
        velocity.0.y = vy;
        aabb.pos += velocity.0;
        clamp_to_canvas(&mut aabb, &mut velocity, &canvas);

        assert!(aabb.pos.x >= 0.0);
        assert!(aabb.pos.x <= canvas.width - aabb.size.x);
        assert!(aabb.pos.y <= canvas.ground_for(aabb.size.y));
    }
}

// -----------------------------------------------------------------------------
// Respawn
// -----------------------------------------------------------------------------

#[test]
fn test_reset_player_restores_spawn_and_standing_height() {
    let t = tuning();
    let mut aabb = Aabb::new(900.0, 100.0, t.player_width, t.crouch_height);
    let mut velocity = Velocity(Vec2::new(5.0, -3.0));
    let mut state = PlayerState {
        on_surface: false,
        jumping: true,
        crouching: true,
    };

    reset_player(&t, &mut aabb, &mut velocity, &mut state);

    assert_eq!(aabb.pos, Vec2::new(50.0, 350.0));
    assert_eq!(aabb.size, Vec2::new(45.0, 60.0));
    assert_eq!(velocity.0, Vec2::ZERO);
    assert!(!state.jumping);
    assert!(!state.crouching);
}
