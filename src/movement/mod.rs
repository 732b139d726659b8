//! Movement domain: player spawn, input snapshot, and frame-based physics.

mod components;
pub mod kinematics;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Player, PlayerState, reset_player};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::collision::{Aabb, Velocity};
use crate::core::{FrameSet, GameState, GameTuning};
use crate::visuals::{EntityKind, fallback_color};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                systems::read_input
                    .in_set(FrameSet::Input)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    systems::probe_surface,
                    systems::apply_crouch,
                    systems::apply_jump,
                    systems::apply_gravity,
                    systems::apply_horizontal,
                    systems::integrate_player,
                )
                    .chain()
                    .in_set(FrameSet::Physics)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (systems::land_on_platforms, systems::clamp_player_bounds)
                    .chain()
                    .in_set(FrameSet::Collide)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                systems::reset_on_level_load
                    .in_set(FrameSet::Spawn)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Spawn the single player entity, or reset the existing one when play
/// resumes after a game over.
fn spawn_player(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    mut existing: Query<(&mut Aabb, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    if let Ok((mut aabb, mut velocity, mut state)) = existing.single_mut() {
        reset_player(&tuning, &mut aabb, &mut velocity, &mut state);
        return;
    }

    let size = Vec2::new(tuning.player_width, tuning.player_height);
    commands.spawn((
        Player,
        PlayerState::default(),
        Aabb {
            pos: tuning.spawn_point(),
            size,
        },
        Velocity::default(),
        Sprite {
            color: fallback_color(EntityKind::Player),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 5.0),
    ));
}
