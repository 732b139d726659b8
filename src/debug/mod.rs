//! Debug tooling for fast iteration, behind the `dev-tools` feature.
//!
//! Hotkeys while playing:
//! - F1 toggles the info overlay (position, velocity, level, lives)
//! - F2 toggles invincibility
//! - F3 warps to the next level immediately

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::collision::{Aabb, Velocity};
use crate::core::{GameProgress, GameState, Invincible, Lives};
use crate::levels::{LevelRegistry, LoadLevelEvent};
use crate::movement::{Player, PlayerState};

/// Resource tracking debug overlay state.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the debug overlay root.
#[derive(Component)]
pub struct DebugOverlay;

/// Marker for the overlay's info text.
#[derive(Component)]
pub struct DebugInfoText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (handle_hotkeys, update_overlay)
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn handle_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    registry: Res<LevelRegistry>,
    mut state: ResMut<DebugState>,
    mut invincible: ResMut<Invincible>,
    mut progress: ResMut<GameProgress>,
    mut load_events: MessageWriter<LoadLevelEvent>,
    overlay: Query<Entity, With<DebugOverlay>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.overlay_visible = !state.overlay_visible;
        if state.overlay_visible {
            spawn_overlay(&mut commands);
        } else {
            for entity in &overlay {
                commands.entity(entity).despawn();
            }
        }
    }

    if keyboard.just_pressed(KeyCode::F2) {
        invincible.0 = !invincible.0;
        info!("Invincibility: {}", invincible.0);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        progress.advance(registry.level_count());
        info!("Warping to level {}", progress.level_index);
        load_events.write(LoadLevelEvent {
            index: progress.level_index,
        });
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                bottom: Val::Px(16.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(90),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("DEBUG"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.9, 0.9)),
            ));
            parent.spawn((
                DebugInfoText,
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

fn update_overlay(
    state: Res<DebugState>,
    progress: Res<GameProgress>,
    lives: Res<Lives>,
    invincible: Res<Invincible>,
    player: Query<(&Aabb, &Velocity, &PlayerState), With<Player>>,
    mut text: Query<&mut Text, With<DebugInfoText>>,
) {
    if !state.overlay_visible {
        return;
    }
    let Ok((aabb, velocity, player_state)) = player.single() else {
        return;
    };
    for mut info in &mut text {
        **info = format!(
            "pos ({:.1}, {:.1})  vel ({:.2}, {:.2})\nlevel {}  lives {}  surface {}  jumping {}  invincible {}",
            aabb.pos.x,
            aabb.pos.y,
            velocity.0.x,
            velocity.0.y,
            progress.level_index,
            lives.remaining,
            player_state.on_surface,
            player_state.jumping,
            invincible.0,
        );
    }
}
