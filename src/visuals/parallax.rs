//! Visuals domain: looping parallax backdrop.
//!
//! Two full-canvas strips sit behind everything and slide opposite the held
//! movement direction, wrapping for a seamless loop.

use bevy::prelude::*;

use crate::collision::Aabb;
use crate::core::{Canvas, GameTuning};
use crate::movement::MovementInput;
use crate::visuals::{EntityKind, Textured, fallback_color};

const Z_BACKDROP: f32 = -8.0;

#[derive(Component, Debug)]
pub struct ParallaxLayer {
    /// 0 or 1: which of the two looping strips this is.
    pub index: usize,
}

#[derive(Resource, Debug, Default)]
pub struct ParallaxState {
    pub offset: f32,
}

pub(crate) fn spawn_backdrop(
    mut commands: Commands,
    canvas: Res<Canvas>,
    mut state: ResMut<ParallaxState>,
    existing: Query<(), With<ParallaxLayer>>,
) {
    if !existing.is_empty() {
        return;
    }
    state.offset = 0.0;

    for index in 0..2 {
        commands.spawn((
            ParallaxLayer { index },
            Aabb::new(index as f32 * canvas.width, 0.0, canvas.width, canvas.height),
            Sprite {
                color: fallback_color(EntityKind::Background),
                custom_size: Some(Vec2::new(canvas.width, canvas.height)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, Z_BACKDROP),
            Textured(EntityKind::Background),
        ));
    }
}

/// Slide the strips while a movement key is held, wrapping at one strip
/// width. The plugin only runs this while playing, so the strips freeze
/// under the game-over overlay.
pub(crate) fn scroll_backdrop(
    canvas: Res<Canvas>,
    tuning: Res<GameTuning>,
    input: Res<MovementInput>,
    mut state: ResMut<ParallaxState>,
    mut strips: Query<(&ParallaxLayer, &mut Aabb)>,
) {
    if input.axis > 0.0 {
        state.offset -= tuning.background_speed;
    } else if input.axis < 0.0 {
        state.offset += tuning.background_speed;
    }

    if state.offset <= -canvas.width {
        state.offset = 0.0;
    } else if state.offset >= canvas.width {
        state.offset = 0.0;
    }

    for (layer, mut aabb) in &mut strips {
        aabb.pos.x = state.offset + layer.index as f32 * canvas.width;
    }
}
