mod collisions;
mod input;
mod movement;

pub(crate) use collisions::{clamp_player_bounds, land_on_platforms};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_crouch, apply_gravity, apply_horizontal, apply_jump, integrate_player, probe_surface,
    reset_on_level_load,
};
