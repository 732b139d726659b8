//! Axis-aligned bounding boxes and the overlap policies built on them.
//!
//! Everything here is pure: systems feed in canvas-space boxes and per-frame
//! velocities, and get back predicates. Canvas space is y-down with the
//! origin at the top-left, so an entity's base line is `pos.y + size.y`.

use bevy::prelude::*;

/// Canvas-space bounding box shared by every game object.
/// `pos` is the top-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict AABB overlap test. Edge-touching boxes do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Horizontal extent overlap only, used by the landing and probe checks.
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }
}

/// Per-frame velocity in canvas space (y-down, so falling is positive y).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Which axis dominates a player/box contact, by center-offset magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAxis {
    Horizontal,
    Vertical,
}

/// Classify a contact by comparing horizontal vs. vertical center offsets.
pub fn contact_axis(a: &Aabb, b: &Aabb) -> ContactAxis {
    let delta = a.center() - b.center();
    if delta.x.abs() > delta.y.abs() {
        ContactAxis::Horizontal
    } else {
        ContactAxis::Vertical
    }
}

/// Landing test for a mover that already integrated this frame's velocity.
///
/// True only when the mover is falling (`vy >= 0`), horizontally overlaps the
/// surface, its bottom edge has reached the surface top, and its bottom edge
/// at the start of the frame (`bottom - vy`) was still above the surface top.
/// The velocity-sized window is what keeps a fast fall from tunneling through
/// a surface thinner than one frame of travel.
pub fn lands_on(mover: &Aabb, vy: f32, surface: &Aabb) -> bool {
    vy >= 0.0
        && mover.overlaps_x(surface)
        && mover.bottom() >= surface.top()
        && mover.bottom() - vy <= surface.top()
}

/// Downward support probe: is the mover resting on (or hovering within
/// `probe` of) the surface top, without having sunk into it?
pub fn supported_by(mover: &Aabb, surface: &Aabb, probe: f32) -> bool {
    mover.overlaps_x(surface)
        && mover.bottom() <= surface.top()
        && mover.bottom() + probe >= surface.top()
}

/// Standing test for the player on top of a box: falling, bottom within
/// `tolerance` of the box top, and centers close enough that the player is
/// actually above the box rather than clipping a corner.
pub fn stands_on(player: &Aabb, vy: f32, on: &Aabb, tolerance: f32) -> bool {
    vy >= 0.0
        && player.bottom() <= on.top() + tolerance
        && (player.center().x - on.center().x).abs() < (player.size.x + on.size.x) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(x, y, w, h)
    }

    // -------------------------------------------------------------------------
    // Overlap predicate
    // -------------------------------------------------------------------------

    #[test]
    fn test_overlap_detects_intersection() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_rejects_separation() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let b = aabb(20.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_overlap_is_strict_at_shared_edge() {
        let a = aabb(0.0, 0.0, 10.0, 10.0);
        let touching = aabb(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    // -------------------------------------------------------------------------
    // Landing
    // -------------------------------------------------------------------------

    #[test]
    fn test_lands_on_when_falling_through_top_edge() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        // Bottom at 105 after a 9px fall: started at 96, above the top.
        let player = aabb(50.0, 45.0, 45.0, 60.0);
        assert!(lands_on(&player, 9.0, &platform));
    }

    #[test]
    fn test_lands_on_rejects_upward_movement() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        let player = aabb(50.0, 45.0, 45.0, 60.0);
        assert!(!lands_on(&player, -9.0, &platform));
    }

    #[test]
    fn test_lands_on_rejects_prior_bottom_below_top() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        // Bottom at 115; even rolling back the 5px fall leaves 110 > 100,
        // so the player was already inside the platform before this frame.
        let player = aabb(50.0, 55.0, 45.0, 60.0);
        assert!(!lands_on(&player, 5.0, &platform));
    }

    #[test]
    fn test_lands_on_rejects_without_horizontal_overlap() {
        let platform = aabb(200.0, 100.0, 50.0, 20.0);
        let player = aabb(0.0, 45.0, 45.0, 60.0);
        assert!(!lands_on(&player, 9.0, &platform));
    }

    #[test]
    fn test_lands_on_thin_platform_with_fast_fall() {
        // Platform thinner than one frame of fall: the velocity window
        // still catches the crossing.
        let platform = aabb(0.0, 100.0, 200.0, 4.0);
        let player = aabb(50.0, 52.0, 45.0, 60.0); // bottom at 112
        assert!(lands_on(&player, 20.0, &platform));
    }

    // -------------------------------------------------------------------------
    // Support probe
    // -------------------------------------------------------------------------

    #[test]
    fn test_supported_by_within_probe_distance() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        let player = aabb(50.0, 33.0, 45.0, 60.0); // bottom at 93, 7px above
        assert!(supported_by(&player, &platform, 10.0));
    }

    #[test]
    fn test_supported_by_rejects_beyond_probe() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        let player = aabb(50.0, 25.0, 45.0, 60.0); // bottom at 85, 15px above
        assert!(!supported_by(&player, &platform, 10.0));
    }

    #[test]
    fn test_supported_by_rejects_sunken_mover() {
        let platform = aabb(0.0, 100.0, 200.0, 20.0);
        let player = aabb(50.0, 50.0, 45.0, 60.0); // bottom at 110, inside
        assert!(!supported_by(&player, &platform, 10.0));
    }

    // -------------------------------------------------------------------------
    // Contact classification
    // -------------------------------------------------------------------------

    #[test]
    fn test_contact_axis_horizontal_dominance() {
        let player = aabb(0.0, 100.0, 45.0, 60.0);
        let bx = aabb(40.0, 110.0, 40.0, 40.0);
        assert_eq!(contact_axis(&player, &bx), ContactAxis::Horizontal);
    }

    #[test]
    fn test_contact_axis_vertical_dominance() {
        let player = aabb(10.0, 50.0, 45.0, 60.0);
        let bx = aabb(10.0, 115.0, 45.0, 40.0);
        assert_eq!(contact_axis(&player, &bx), ContactAxis::Vertical);
    }

    #[test]
    fn test_stands_on_near_flush_top() {
        let bx = aabb(100.0, 200.0, 40.0, 40.0);
        let player = aabb(100.0, 145.0, 45.0, 60.0); // bottom at 205
        assert!(stands_on(&player, 2.0, &bx, 10.0));
    }

    #[test]
    fn test_stands_on_rejects_deep_overlap() {
        let bx = aabb(100.0, 200.0, 40.0, 40.0);
        let player = aabb(100.0, 160.0, 45.0, 60.0); // bottom at 220
        assert!(!stands_on(&player, 2.0, &bx, 10.0));
    }

    #[test]
    fn test_stands_on_rejects_offset_centers() {
        let bx = aabb(100.0, 200.0, 40.0, 40.0);
        let player = aabb(160.0, 145.0, 45.0, 60.0);
        assert!(!stands_on(&player, 2.0, &bx, 10.0));
    }
}
