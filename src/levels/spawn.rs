//! Levels domain: atomic level population.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::boxes::PushBox;
use crate::collision::{Aabb, Velocity};
use crate::core::{Canvas, GameTuning};
use crate::enemies::Enemy;
use crate::npcs::{self, Npc, NpcPrompt};
use crate::pickups::{Checkpoint, Collectable};
use crate::visuals::{EntityKind, Textured, fallback_color, jitter};

use super::LoadLevelEvent;
use super::components::{BackgroundProp, LevelEntity, Platform, SceneProp};
use super::data::LevelDoc;
use super::loader;
use super::registry::LevelRegistry;

const Z_BACKGROUND: f32 = -4.0;
const Z_SCENE: f32 = -2.0;
const Z_PLATFORM: f32 = 0.0;
const Z_BOX: f32 = 1.0;
const Z_PICKUP: f32 = 2.0;
const Z_NPC: f32 = 2.0;
const Z_ENEMY: f32 = 3.0;
const Z_PROMPT: f32 = 6.0;

/// Replace the live entity set with the requested level. Replacement is
/// atomic: the previous set is despawned in full before anything from the
/// new document spawns; there is no merging of levels.
pub(crate) fn handle_load_level(
    mut commands: Commands,
    mut events: MessageReader<LoadLevelEvent>,
    registry: Res<LevelRegistry>,
    canvas: Res<Canvas>,
    tuning: Res<GameTuning>,
    existing: Query<Entity, With<LevelEntity>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    let doc = match registry.path_for(event.index) {
        Some(path) => match loader::load_level_doc(path) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("{} (falling back to the built-in level)", e);
                LevelDoc::fallback()
            }
        },
        None => LevelDoc::fallback(),
    };

    let scale = doc.scale_for(canvas.height);
    // Stable per-level seed: entity colors jitter around their base fill but
    // never shimmer between frames or between loads of the same level.
    let mut rng = ChaCha8Rng::seed_from_u64(event.index as u64);

    for rect in &doc.backgrounds {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            jitter(fallback_color(EntityKind::Background), &mut rng),
            Z_BACKGROUND,
            (BackgroundProp, Textured(EntityKind::Background)),
        );
    }

    for rect in &doc.scenes {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            jitter(fallback_color(EntityKind::Scene), &mut rng),
            Z_SCENE,
            (SceneProp, Textured(EntityKind::Scene)),
        );
    }

    for rect in &doc.platforms {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            jitter(fallback_color(EntityKind::Platform), &mut rng),
            Z_PLATFORM,
            (Platform, Textured(EntityKind::Platform)),
        );
    }

    for rect in &doc.collectables {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            fallback_color(EntityKind::Collectable),
            Z_PICKUP,
            Collectable,
        );
    }

    for rect in &doc.checkpoints {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            fallback_color(EntityKind::Checkpoint),
            Z_PICKUP,
            (Checkpoint::default(), Textured(EntityKind::Checkpoint)),
        );
    }

    for rect in &doc.enemies {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            jitter(fallback_color(EntityKind::Enemy), &mut rng),
            Z_ENEMY,
            Enemy {
                speed: tuning.enemy_speed,
                direction: 1.0,
            },
        );
    }

    for rect in &doc.boxes {
        spawn_rect(
            &mut commands,
            rect.to_aabb(scale),
            jitter(fallback_color(EntityKind::PushBox), &mut rng),
            Z_BOX,
            (PushBox, Velocity::default(), Textured(EntityKind::PushBox)),
        );
    }

    for (ordinal, def) in doc.npcs.iter().enumerate() {
        let show = def.show.to_aabb(scale);
        let message = def
            .message
            .clone()
            .unwrap_or_else(|| npcs::default_message(event.index, ordinal).to_string());

        let npc = spawn_rect(
            &mut commands,
            show,
            fallback_color(EntityKind::Npc),
            Z_NPC,
            Npc::new(message),
        );

        // The interaction prompt hovers over the NPC until consumed.
        let prompt = def.prompt.map(|rect| rect.to_aabb(scale)).unwrap_or(Aabb::new(
            show.center().x - 9.0,
            show.top() - 24.0,
            18.0,
            18.0,
        ));
        commands.spawn((
            LevelEntity,
            NpcPrompt { npc },
            prompt,
            Sprite {
                color: fallback_color(EntityKind::Prompt),
                custom_size: Some(prompt.size),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, Z_PROMPT),
            Visibility::Hidden,
        ));
    }

    info!(
        "Level {} live: {} platforms, {} collectables, {} checkpoints, {} enemies, {} boxes, {} npcs",
        event.index,
        doc.platforms.len(),
        doc.collectables.len(),
        doc.checkpoints.len(),
        doc.enemies.len(),
        doc.boxes.len(),
        doc.npcs.len(),
    );
}

fn spawn_rect(
    commands: &mut Commands,
    aabb: Aabb,
    color: Color,
    z: f32,
    extras: impl Bundle,
) -> Entity {
    commands
        .spawn((
            LevelEntity,
            aabb,
            Sprite {
                color,
                custom_size: Some(aabb.size),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, z),
            extras,
        ))
        .id()
}
