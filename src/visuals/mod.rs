//! Visuals domain: entity styling, optional textures, parallax backdrop,
//! and the canvas-to-world transform sync.
//!
//! Canvas space is y-down from the top-left; Bevy's world is y-up from the
//! center. Simulation never touches `Transform`; the sync system here is
//! the only bridge.

mod parallax;
mod textures;

#[cfg(test)]
mod tests;

pub use parallax::ParallaxLayer;
pub use textures::{TextureCatalog, Textured};

use bevy::prelude::*;
use rand::Rng;

use crate::collision::Aabb;
use crate::core::{Canvas, FrameSet, GameState};

/// Closed set of renderable entity kinds, keying fallback fills and
/// optional texture lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Player,
    Platform,
    Collectable,
    Checkpoint,
    Enemy,
    PushBox,
    Npc,
    Prompt,
    Scene,
    Background,
}

/// Fixed fallback fill for each entity kind, used whenever the optional
/// texture for that kind is missing or not yet loaded.
pub fn fallback_color(kind: EntityKind) -> Color {
    match kind {
        EntityKind::Player => Color::srgb_u8(0, 0, 139),
        EntityKind::Platform => Color::BLACK,
        EntityKind::Collectable => Color::srgb_u8(255, 215, 0),
        EntityKind::Checkpoint => Color::srgb_u8(0, 128, 0),
        EntityKind::Enemy => Color::srgb_u8(200, 30, 30),
        EntityKind::PushBox => Color::srgb_u8(139, 69, 19),
        EntityKind::Npc => Color::srgba_u8(200, 100, 200, 204),
        EntityKind::Prompt => Color::WHITE,
        EntityKind::Scene => Color::srgb_u8(18, 28, 160),
        EntityKind::Background => Color::srgb_u8(240, 240, 240),
    }
}

/// Nudge a color by a small seeded offset per channel. Level spawning feeds
/// a per-level `ChaCha8Rng` through this so fills vary slightly between
/// entities but are identical on every load of the same level.
pub fn jitter(color: Color, rng: &mut impl Rng) -> Color {
    let base = color.to_srgba();
    let mut shift = |v: f32| -> f32 { (v + rng.random_range(-0.04..0.04)).clamp(0.0, 1.0) };
    Color::srgba(
        shift(base.red),
        shift(base.green),
        shift(base.blue),
        base.alpha,
    )
}

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureCatalog>()
            .init_resource::<parallax::ParallaxState>()
            .add_systems(Startup, textures::setup_texture_catalog)
            .add_systems(OnEnter(GameState::Playing), parallax::spawn_backdrop)
            .add_systems(
                Update,
                (
                    parallax::scroll_backdrop.run_if(in_state(GameState::Playing)),
                    textures::apply_loaded_textures,
                    sync_transforms,
                )
                    .chain()
                    .in_set(FrameSet::Sync),
            );
    }
}

/// Map every canvas-space box onto its render transform, and keep sprite
/// sizes in step with box sizes (the player's height changes when crouching).
fn sync_transforms(
    canvas: Res<Canvas>,
    mut query: Query<(&Aabb, &mut Transform, &mut Sprite)>,
) {
    for (aabb, mut transform, mut sprite) in &mut query {
        let center = aabb.center();
        transform.translation.x = center.x - canvas.width / 2.0;
        transform.translation.y = canvas.height / 2.0 - center.y;
        sprite.custom_size = Some(aabb.size);
    }
}
