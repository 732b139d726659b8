//! Boxes domain: gravity-bound crates the player can push and stand on.
//!
//! Boxes stay pushable even while resting against platform gravity each
//! frame; they never block the player outright. See DESIGN.md for the
//! resolution of that ambiguity.


use bevy::prelude::*;

use crate::collision::{self, Aabb, ContactAxis, Velocity};
use crate::core::{Canvas, FrameSet, GameState, GameTuning};
use crate::levels::Platform;
use crate::movement::{MovementInput, Player, PlayerState};

#[derive(Component, Debug)]
pub struct PushBox;

/// Outcome of one frame of player/box contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxContact {
    None,
    /// Shove the box horizontally by this many pixels.
    Push(f32),
    /// Player stands on the box; snap its base to this y.
    Stand(f32),
}

/// Classify a player/box overlap. Horizontally dominant contact with the
/// matching direction key held pushes the box; a falling player whose base
/// is near-flush with the box top stands on it instead.
pub fn classify_contact(
    player: &Aabb,
    player_vy: f32,
    axis: f32,
    bx: &Aabb,
    tuning: &GameTuning,
) -> BoxContact {
    if !player.overlaps(bx) {
        return BoxContact::None;
    }

    if collision::contact_axis(player, bx) == ContactAxis::Horizontal {
        let player_left_of_box = player.center().x < bx.center().x;
        if player_left_of_box && axis > 0.0 {
            return BoxContact::Push(tuning.box_push);
        }
        if !player_left_of_box && axis < 0.0 {
            return BoxContact::Push(-tuning.box_push);
        }
        return BoxContact::None;
    }

    if collision::stands_on(player, player_vy, bx, tuning.stand_tolerance) {
        return BoxContact::Stand(bx.top() - player.size.y);
    }

    BoxContact::None
}

pub struct BoxesPlugin;

impl Plugin for BoxesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            fall.in_set(FrameSet::Physics)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            settle
                .in_set(FrameSet::Collide)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            push_and_carry
                .in_set(FrameSet::Contact)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Boxes fall under the same per-frame gravity as the player. Horizontal
/// motion comes only from pushes, never from velocity.
fn fall(tuning: Res<GameTuning>, mut boxes: Query<(&mut Aabb, &mut Velocity), With<PushBox>>) {
    for (mut aabb, mut velocity) in &mut boxes {
        velocity.0.y += tuning.gravity;
        aabb.pos.y += velocity.0.y;
    }
}

/// Land falling boxes on platform tops and clamp them to the canvas floor.
fn settle(
    canvas: Res<Canvas>,
    platforms: Query<&Aabb, (With<Platform>, Without<PushBox>)>,
    mut boxes: Query<(&mut Aabb, &mut Velocity), With<PushBox>>,
) {
    for (mut aabb, mut velocity) in &mut boxes {
        for platform in &platforms {
            if collision::lands_on(&aabb, velocity.0.y, platform) {
                aabb.pos.y = platform.top() - aabb.size.y;
                velocity.0.y = 0.0;
            }
        }

        let ground = canvas.ground_for(aabb.size.y);
        if aabb.pos.y > ground {
            aabb.pos.y = ground;
            velocity.0.y = 0.0;
        }
    }
}

/// Resolve player/box contact for every box, every frame.
fn push_and_carry(
    tuning: Res<GameTuning>,
    canvas: Res<Canvas>,
    input: Res<MovementInput>,
    mut boxes: Query<&mut Aabb, (With<PushBox>, Without<Player>)>,
    mut player: Query<(&mut Aabb, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    let Ok((mut player_aabb, mut player_velocity, mut state)) = player.single_mut() else {
        return;
    };

    for mut box_aabb in &mut boxes {
        match classify_contact(
            &player_aabb,
            player_velocity.0.y,
            input.axis,
            &box_aabb,
            &tuning,
        ) {
            BoxContact::Push(dx) => {
                box_aabb.pos.x = (box_aabb.pos.x + dx).clamp(0.0, canvas.width - box_aabb.size.x);
            }
            BoxContact::Stand(y) => {
                player_aabb.pos.y = y;
                player_velocity.0.y = 0.0;
                state.jumping = false;
            }
            BoxContact::None => {}
        }
    }
}
