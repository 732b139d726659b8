//! Movement domain: the per-frame held-key snapshot.

use bevy::prelude::*;

/// Keyboard state sampled once at the top of every frame. Game logic only
/// ever reads this snapshot, never the input events themselves, so input
/// capture timing is decoupled from simulation order.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// -1.0, 0.0, or 1.0 from the held left/right keys.
    pub axis: f32,
    pub jump_just_pressed: bool,
    pub crouch_held: bool,
    pub interact_just_pressed: bool,
}
