//! Enemies domain: boundary patrol and player contact.

#[cfg(test)]
mod tests;

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::collision::Aabb;
use crate::core::{Canvas, FrameSet, GameState};
use crate::movement::Player;

/// Patrolling hazard. Two states only: moving right (`direction = 1`) and
/// moving left (`direction = -1`).
#[derive(Component, Debug)]
pub struct Enemy {
    pub speed: f32,
    pub direction: f32,
}

/// Fired once per enemy whose box overlaps the player this frame.
#[derive(Debug)]
pub struct PlayerHitEvent {
    pub enemy: Entity,
}

impl Message for PlayerHitEvent {}

/// One patrol step. The direction flips exactly when the leading edge
/// reaches a canvas boundary, never before, and the position is clamped
/// so `x` stays within `[0, canvas_width - width]` every frame.
pub fn patrol_step(x: f32, width: f32, speed: f32, direction: f32, canvas_width: f32) -> (f32, f32) {
    let mut x = x + speed * direction;
    let mut direction = direction;

    if x <= 0.0 {
        x = 0.0;
        direction = 1.0;
    } else if x + width >= canvas_width {
        x = canvas_width - width;
        direction = -1.0;
    }

    (x, direction)
}

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlayerHitEvent>()
            .add_systems(
                Update,
                patrol
                    .in_set(FrameSet::Physics)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                detect_player_contact
                    .in_set(FrameSet::Interact)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn patrol(canvas: Res<Canvas>, mut enemies: Query<(&mut Aabb, &mut Enemy)>) {
    for (mut aabb, mut enemy) in &mut enemies {
        let (x, direction) = patrol_step(
            aabb.pos.x,
            aabb.size.x,
            enemy.speed,
            enemy.direction,
            canvas.width,
        );
        aabb.pos.x = x;
        enemy.direction = direction;
    }
}

/// Every live enemy is checked every frame; the scan never short-circuits,
/// so two overlapping enemies cost two lives.
fn detect_player_contact(
    player: Query<&Aabb, With<Player>>,
    enemies: Query<(Entity, &Aabb), With<Enemy>>,
    mut events: MessageWriter<PlayerHitEvent>,
) {
    let Ok(player_aabb) = player.single() else {
        return;
    };

    for (entity, enemy_aabb) in &enemies {
        if player_aabb.overlaps(enemy_aabb) {
            events.write(PlayerHitEvent { enemy: entity });
        }
    }
}
