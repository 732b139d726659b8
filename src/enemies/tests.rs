//! Enemies domain: tests for the patrol state machine.

use super::patrol_step;

const CANVAS_W: f32 = 1280.0;

#[test]
fn test_patrol_moves_by_speed_times_direction() {
    let (x, dir) = patrol_step(100.0, 40.0, 2.0, 1.0, CANVAS_W);
    assert_eq!(x, 102.0);
    assert_eq!(dir, 1.0);

    let (x, dir) = patrol_step(100.0, 40.0, 2.0, -1.0, CANVAS_W);
    assert_eq!(x, 98.0);
    assert_eq!(dir, -1.0);
}

#[test]
fn test_patrol_flips_at_right_boundary_exactly() {
    // One step short of the boundary: no flip yet.
    let (x, dir) = patrol_step(CANVAS_W - 40.0 - 4.0, 40.0, 2.0, 1.0, CANVAS_W);
    assert_eq!(x, CANVAS_W - 42.0);
    assert_eq!(dir, 1.0);

    // Leading edge reaches the boundary: flip and clamp.
    let (x, dir) = patrol_step(CANVAS_W - 42.0, 40.0, 2.0, 1.0, CANVAS_W);
    assert_eq!(x, CANVAS_W - 40.0);
    assert_eq!(dir, -1.0);
}

#[test]
fn test_patrol_flips_at_left_boundary_exactly() {
    let (x, dir) = patrol_step(4.0, 40.0, 2.0, -1.0, CANVAS_W);
    assert_eq!(x, 2.0);
    assert_eq!(dir, -1.0);

    let (x, dir) = patrol_step(2.0, 40.0, 2.0, -1.0, CANVAS_W);
    assert_eq!(x, 0.0);
    assert_eq!(dir, 1.0);
}

#[test]
fn test_patrol_invariant_holds_over_many_frames() {
    let width = 25.0;
    let mut x = 500.0;
    let mut dir = 1.0;
    let mut flips = 0;
    let mut last_dir = dir;

    for _ in 0..10_000 {
        let (nx, ndir) = patrol_step(x, width, 2.0, dir, CANVAS_W);
        x = nx;
        dir = ndir;
        assert!(x >= 0.0);
        assert!(x <= CANVAS_W - width);
        if dir != last_dir {
            flips += 1;
            last_dir = dir;
        }
    }

    // A patrol bounded by both walls keeps turning around.
    assert!(flips >= 2);
}

#[test]
fn test_patrol_overshoot_clamps_to_bounds() {
    // A fast enemy would overshoot the wall; the step clamps it onto it.
    let (x, dir) = patrol_step(10.0, 30.0, 50.0, -1.0, CANVAS_W);
    assert_eq!(x, 0.0);
    assert_eq!(dir, 1.0);
}
