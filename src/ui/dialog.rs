//! UI domain: NPC dialog panel and the collectable pickup notice.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::npcs::ActiveDialog;
use crate::pickups::CollectablePickedEvent;

const NOTICE_SECONDS: f32 = 1.5;

/// Marker for the dialog panel root.
#[derive(Component)]
pub struct DialogPanel;

/// Marker for the dialog message text.
#[derive(Component)]
pub struct DialogText;

/// Marker for the transient pickup notice.
#[derive(Component)]
pub struct PickupNoticeUI;

/// Countdown for the pickup notice currently on screen.
#[derive(Resource, Debug, Default)]
pub struct PickupNotice {
    pub timer: Option<Timer>,
}

// -----------------------------------------------------------------------------
// NPC dialog
// -----------------------------------------------------------------------------

/// Keep the panel in step with [`ActiveDialog`]: spawn it when a line opens,
/// tear it down when the line is dismissed.
pub(crate) fn sync_dialog_panel(
    mut commands: Commands,
    dialog: Res<ActiveDialog>,
    panel: Query<Entity, With<DialogPanel>>,
    mut text: Query<&mut Text, With<DialogText>>,
) {
    if !dialog.is_changed() {
        return;
    }

    match &dialog.message {
        Some(message) => {
            if let Ok(mut existing) = text.single_mut() {
                **existing = message.clone();
                return;
            }
            commands
                .spawn((
                    DialogPanel,
                    Node {
                        position_type: PositionType::Absolute,
                        left: Val::Percent(15.0),
                        right: Val::Percent(15.0),
                        bottom: Val::Px(48.0),
                        padding: UiRect::all(Val::Px(18.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        flex_direction: FlexDirection::Column,
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.08, 0.08, 0.12, 0.92)),
                    BorderColor::all(Color::srgb(0.6, 0.45, 0.7)),
                    ZIndex(60),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        DialogText,
                        Text::new(message.clone()),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.92, 0.92, 0.92)),
                    ));
                    parent.spawn((
                        Text::new("[Enter] to close"),
                        TextFont {
                            font_size: 13.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.5, 0.5, 0.55)),
                        Node {
                            margin: UiRect::top(Val::Px(10.0)),
                            ..default()
                        },
                    ));
                });
        }
        None => {
            for entity in &panel {
                commands.entity(entity).despawn();
            }
        }
    }
}

pub(crate) fn close_dialog(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut dialog: ResMut<ActiveDialog>,
) {
    if !dialog.is_open() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Escape) {
        dialog.close();
    }
}

// -----------------------------------------------------------------------------
// Pickup notice
// -----------------------------------------------------------------------------

pub(crate) fn show_pickup_notice(
    mut commands: Commands,
    mut events: MessageReader<CollectablePickedEvent>,
    mut notice: ResMut<PickupNotice>,
    existing: Query<Entity, With<PickupNoticeUI>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }
    notice.timer = Some(Timer::from_seconds(NOTICE_SECONDS, TimerMode::Once));

    commands
        .spawn((
            PickupNoticeUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Percent(14.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            ZIndex(40),
        ))
        .with_child((
            Text::new(format!("Collectable found! ({} total)", event.total)),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(Color::srgb(0.95, 0.85, 0.4)),
        ));
}

pub(crate) fn expire_pickup_notice(
    mut commands: Commands,
    time: Res<Time>,
    mut notice: ResMut<PickupNotice>,
    existing: Query<Entity, With<PickupNoticeUI>>,
) {
    let Some(timer) = notice.timer.as_mut() else {
        return;
    };
    if timer.tick(time.delta()).just_finished() {
        notice.timer = None;
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}
