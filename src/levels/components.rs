//! Levels domain: markers for level-owned entities.

use bevy::prelude::*;

/// Everything spawned from a level document carries this marker; a level
/// transition despawns the whole set before the next document is spawned,
/// so exactly one entity set is ever live.
#[derive(Component, Debug)]
pub struct LevelEntity;

/// Static, immutable collision surface.
#[derive(Component, Debug)]
pub struct Platform;

/// Decorative mid-ground rect; rendered, never collided with.
#[derive(Component, Debug)]
pub struct SceneProp;

/// Decorative far-ground rect from the document's `backgrounds` group.
#[derive(Component, Debug)]
pub struct BackgroundProp;
