//! Visuals domain: optional texture overlays.
//!
//! Each texturable kind has one well-known image path. When the image turns
//! up in the asset store the sprite switches from its fallback fill to the
//! texture; when it never does, the fill simply stays. No retries, no
//! surfaced errors.

use bevy::prelude::*;

use super::EntityKind;

/// Marks an entity as wanting the texture for its kind, if it ever loads.
#[derive(Component, Debug)]
pub struct Textured(pub EntityKind);

/// Marks sprites that already switched to their texture.
#[derive(Component, Debug)]
pub struct TextureApplied;

#[derive(Resource, Debug, Default)]
pub struct TextureCatalog {
    pub entries: Vec<(EntityKind, Handle<Image>)>,
}

impl TextureCatalog {
    pub fn handle_for(&self, kind: EntityKind) -> Option<&Handle<Image>> {
        self.entries
            .iter()
            .find(|(entry_kind, _)| *entry_kind == kind)
            .map(|(_, handle)| handle)
    }
}

/// Asset path for kinds that have an optional texture.
pub(crate) fn texture_path(kind: EntityKind) -> Option<&'static str> {
    match kind {
        EntityKind::Platform => Some("textures/platform.png"),
        EntityKind::Checkpoint => Some("textures/checkpoint.png"),
        EntityKind::PushBox => Some("textures/box.png"),
        EntityKind::Scene => Some("textures/scene.png"),
        EntityKind::Background => Some("textures/background.png"),
        _ => None,
    }
}

pub(crate) fn setup_texture_catalog(
    asset_server: Res<AssetServer>,
    mut catalog: ResMut<TextureCatalog>,
) {
    const KINDS: [EntityKind; 5] = [
        EntityKind::Platform,
        EntityKind::Checkpoint,
        EntityKind::PushBox,
        EntityKind::Scene,
        EntityKind::Background,
    ];

    for kind in KINDS {
        if let Some(path) = texture_path(kind) {
            catalog.entries.push((kind, asset_server.load(path)));
        }
    }
}

/// Swap fills for textures as their images become available.
pub(crate) fn apply_loaded_textures(
    mut commands: Commands,
    images: Res<Assets<Image>>,
    catalog: Res<TextureCatalog>,
    mut query: Query<(Entity, &Textured, &mut Sprite), Without<TextureApplied>>,
) {
    for (entity, textured, mut sprite) in &mut query {
        let Some(handle) = catalog.handle_for(textured.0) else {
            continue;
        };
        if !images.contains(handle) {
            continue;
        }
        sprite.image = handle.clone();
        sprite.color = Color::WHITE;
        commands.entity(entity).insert(TextureApplied);
    }
}
