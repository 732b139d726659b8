//! UI domain: HUD, overlays, and dialog presentation.

mod banners;
mod dialog;
mod hud;

pub use banners::{GameOverUI, LevelCompleteBanner, RestartButton, StartButton, TitleScreenUI};
pub use dialog::{DialogPanel, PickupNotice};
pub use hud::{CollectableCounterText, HeartIcon, HudRoot};

use bevy::prelude::*;

use crate::core::GameState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PickupNotice>()
            .add_systems(OnEnter(GameState::Title), banners::spawn_title_screen)
            .add_systems(OnExit(GameState::Title), banners::despawn_title_screen)
            .add_systems(
                Update,
                banners::handle_start.run_if(in_state(GameState::Title)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                (hud::spawn_hud, banners::spawn_level_banner),
            )
            .add_systems(
                Update,
                (
                    hud::update_collectable_counter,
                    hud::update_lives_row,
                    banners::sync_level_banner,
                    dialog::sync_dialog_panel,
                    dialog::close_dialog,
                    dialog::show_pickup_notice,
                    dialog::expire_pickup_notice,
                )
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::GameOver), banners::spawn_game_over)
            .add_systems(OnExit(GameState::GameOver), banners::despawn_game_over)
            .add_systems(
                Update,
                banners::handle_restart.run_if(in_state(GameState::GameOver)),
            );
    }
}
