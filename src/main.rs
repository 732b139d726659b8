mod boxes;
mod collision;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod levels;
mod movement;
mod npcs;
mod pickups;
mod ui;
mod visuals;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Pixeljump".to_string(),
            resolution: (1280, 720).into(),
            resizable: false,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        levels::LevelsPlugin,
        movement::MovementPlugin,
        boxes::BoxesPlugin,
        enemies::EnemiesPlugin,
        pickups::PickupsPlugin,
        npcs::NpcsPlugin,
        visuals::VisualsPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
