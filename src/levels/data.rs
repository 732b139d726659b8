//! Levels domain: declarative level document types.
//!
//! A level is a viewbox plus named groups of rectangles in document space.
//! On load every rect is scaled uniformly by `canvas_height / viewbox.height`
//! so the document fits the display's vertical extent, whatever its authored
//! coordinate space.

use serde::{Deserialize, Serialize};

use crate::collision::Aabb;

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ViewBox {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectDef {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Canvas-space box for this rect under a uniform scale factor.
    pub fn to_aabb(&self, scale: f32) -> Aabb {
        Aabb::new(
            self.x * scale,
            self.y * scale,
            self.w * scale,
            self.h * scale,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NpcDef {
    pub show: RectDef,
    /// Interaction prompt indicator; defaults to a small marker above the
    /// show rect when absent.
    #[serde(default)]
    pub prompt: Option<RectDef>,
    /// Dialog line; absent means the per-level default table applies.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDoc {
    pub viewbox: ViewBox,
    #[serde(default)]
    pub platforms: Vec<RectDef>,
    #[serde(default)]
    pub collectables: Vec<RectDef>,
    #[serde(default)]
    pub checkpoints: Vec<RectDef>,
    #[serde(default)]
    pub enemies: Vec<RectDef>,
    #[serde(default)]
    pub boxes: Vec<RectDef>,
    #[serde(default)]
    pub npcs: Vec<NpcDef>,
    #[serde(default)]
    pub scenes: Vec<RectDef>,
    #[serde(default)]
    pub backgrounds: Vec<RectDef>,
}

impl LevelDoc {
    /// Uniform scale fitting this document to the given canvas height.
    pub fn scale_for(&self, canvas_height: f32) -> f32 {
        canvas_height / self.viewbox.height
    }

    /// Built-in layout used when a level document cannot be loaded. Modest
    /// on purpose: a floor run, a couple of hops, one of everything.
    pub fn fallback() -> Self {
        Self {
            viewbox: ViewBox {
                width: 1280.0,
                height: 720.0,
            },
            platforms: vec![
                RectDef::new(200.0, 560.0, 220.0, 24.0),
                RectDef::new(520.0, 460.0, 220.0, 24.0),
                RectDef::new(840.0, 360.0, 220.0, 24.0),
            ],
            collectables: vec![
                RectDef::new(280.0, 520.0, 20.0, 20.0),
                RectDef::new(600.0, 420.0, 20.0, 20.0),
                RectDef::new(920.0, 320.0, 20.0, 20.0),
            ],
            checkpoints: vec![RectDef::new(1180.0, 630.0, 30.0, 30.0)],
            enemies: vec![RectDef::new(700.0, 680.0, 40.0, 40.0)],
            boxes: vec![RectDef::new(420.0, 620.0, 40.0, 40.0)],
            npcs: vec![NpcDef {
                show: RectDef::new(80.0, 620.0, 35.0, 40.0),
                prompt: None,
                message: None,
            }],
            scenes: vec![],
            backgrounds: vec![],
        }
    }
}

/// Ordered list of level document files, loaded from the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelManifest {
    pub levels: Vec<String>,
}
