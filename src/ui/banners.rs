//! UI domain: title screen, level-complete banner, and game-over overlay.

use bevy::prelude::*;

use crate::core::{
    GameProgress, GameState, LevelAdvance, SaveData, default_save_path, store_progress,
};

/// Marker for the title screen root.
#[derive(Component)]
pub struct TitleScreenUI;

/// Marker for the start button on the title screen.
#[derive(Component)]
pub struct StartButton;

/// Marker for the level-complete banner.
#[derive(Component)]
pub struct LevelCompleteBanner;

/// Marker for the game-over overlay root.
#[derive(Component)]
pub struct GameOverUI;

/// Marker for the restart button on the game-over overlay.
#[derive(Component)]
pub struct RestartButton;

// -----------------------------------------------------------------------------
// Title screen
// -----------------------------------------------------------------------------

pub(crate) fn spawn_title_screen(mut commands: Commands) {
    commands
        .spawn((
            TitleScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgb(0.08, 0.08, 0.12)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PIXELJUMP"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    StartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(14.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.28)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("START"),
                    TextFont {
                        font_size: 26.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Arrows/WASD move - Space jumps - S crouches - I talks"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.55)),
                Node {
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn despawn_title_screen(
    mut commands: Commands,
    query: Query<Entity, With<TitleScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_start(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (With<StartButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let should_start = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::Space)
        || buttons
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_start {
        next_state.set(GameState::Playing);
    }
}

// -----------------------------------------------------------------------------
// Level-complete banner
// -----------------------------------------------------------------------------

pub(crate) fn spawn_level_banner(
    mut commands: Commands,
    existing: Query<(), With<LevelCompleteBanner>>,
) {
    if !existing.is_empty() {
        return;
    }

    commands
        .spawn((
            LevelCompleteBanner,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Percent(30.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
            ZIndex(50),
        ))
        .with_child((
            Text::new("LEVEL COMPLETE"),
            TextFont {
                font_size: 52.0,
                ..default()
            },
            TextColor(Color::srgb(0.4, 0.9, 0.45)),
        ));
}

/// The banner shows for exactly as long as an advance is pending.
pub(crate) fn sync_level_banner(
    advance: Res<LevelAdvance>,
    mut banner: Query<&mut Visibility, With<LevelCompleteBanner>>,
) {
    for mut visibility in &mut banner {
        *visibility = if advance.is_pending() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

// -----------------------------------------------------------------------------
// Game over
// -----------------------------------------------------------------------------

pub(crate) fn spawn_game_over(mut commands: Commands) {
    commands
        .spawn((
            GameOverUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.15, 0.15)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn((
                    RestartButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RESTART"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            parent.spawn((
                Text::new("Press [Enter] or click to start over"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn despawn_game_over(mut commands: Commands, query: Query<Entity, With<GameOverUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

/// Explicit restart is the only way out of the terminal state: progress goes
/// back to level 1 with zero collectables, and the reset is persisted.
pub(crate) fn handle_restart(
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<&Interaction, (With<RestartButton>, Changed<Interaction>)>,
    mut progress: ResMut<GameProgress>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let should_restart = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || buttons
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if !should_restart {
        return;
    }

    progress.reset();
    store_progress(&default_save_path(), &SaveData::from(&*progress));
    next_state.set(GameState::Playing);
}
