//! UI domain: in-game HUD, the collectable counter and lives row.

use bevy::prelude::*;

use crate::core::{GameProgress, GameTuning, Lives};

const HUD_PADDING: f32 = 16.0;
const HEART_SIZE: f32 = 22.0;
const HEART_GAP: f32 = 6.0;

/// Marker for the collectable counter text.
#[derive(Component)]
pub struct CollectableCounterText;

/// Marker for one heart in the lives row; the index counts from the left.
#[derive(Component)]
pub struct HeartIcon(pub usize);

/// Marker for the HUD root.
#[derive(Component)]
pub struct HudRoot;

pub(crate) fn spawn_hud(
    mut commands: Commands,
    tuning: Res<GameTuning>,
    existing: Query<(), With<HudRoot>>,
) {
    if !existing.is_empty() {
        return;
    }

    // Lives row, top-left.
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                column_gap: Val::Px(HEART_GAP),
                ..default()
            },
        ))
        .with_children(|parent| {
            for index in 0..tuning.starting_lives as usize {
                parent.spawn((
                    HeartIcon(index),
                    Node {
                        width: Val::Px(HEART_SIZE),
                        height: Val::Px(HEART_SIZE),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.85, 0.2, 0.25)),
                ));
            }
        });

    // Collectable counter, top-right.
    commands
        .spawn((
            HudRoot,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                ..default()
            },
        ))
        .with_child((
            CollectableCounterText,
            Text::new("Collectables: 0"),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.85, 0.4)),
        ));
}

pub(crate) fn update_collectable_counter(
    progress: Res<GameProgress>,
    mut query: Query<&mut Text, With<CollectableCounterText>>,
) {
    if progress.is_changed() {
        for mut text in &mut query {
            **text = format!("Collectables: {}", progress.collectables_collected);
        }
    }
}

/// Dim the hearts beyond the remaining lives.
pub(crate) fn update_lives_row(
    lives: Res<Lives>,
    mut hearts: Query<(&HeartIcon, &mut BackgroundColor)>,
) {
    if !lives.is_changed() {
        return;
    }
    for (heart, mut color) in &mut hearts {
        color.0 = if heart.0 < lives.remaining as usize {
            Color::srgb(0.85, 0.2, 0.25)
        } else {
            Color::srgba(0.3, 0.3, 0.3, 0.6)
        };
    }
}
