//! Movement domain: platform landing and canvas bounds resolution.

use bevy::prelude::*;

use crate::collision::{self, Aabb, Velocity};
use crate::core::Canvas;
use crate::levels::Platform;
use crate::movement::kinematics;
use crate::movement::{Player, PlayerState};

/// Landing check against every platform. Runs after integration: a falling
/// player whose base crossed a platform top this frame snaps onto it. The
/// scan never short-circuits; snapping to one platform is idempotent for any
/// further platform sharing the same top edge.
pub(crate) fn land_on_platforms(
    platforms: Query<&Aabb, With<Platform>>,
    mut player: Query<
        (&mut Aabb, &mut Velocity, &mut PlayerState),
        (With<Player>, Without<Platform>),
    >,
) {
    let Ok((mut aabb, mut velocity, mut state)) = player.single_mut() else {
        return;
    };

    for platform in &platforms {
        if collision::lands_on(&aabb, velocity.0.y, platform) {
            aabb.pos.y = platform.top() - aabb.size.y;
            velocity.0.y = 0.0;
            state.jumping = false;
        }
    }
}

pub(crate) fn clamp_player_bounds(
    canvas: Res<Canvas>,
    mut player: Query<(&mut Aabb, &mut Velocity, &mut PlayerState), With<Player>>,
) {
    let Ok((mut aabb, mut velocity, mut state)) = player.single_mut() else {
        return;
    };

    if kinematics::clamp_to_canvas(&mut aabb, &mut velocity, &canvas) {
        state.jumping = false;
    }
}
