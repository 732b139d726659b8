//! Levels domain: tests for document parsing, scaling, and the registry.

use std::path::PathBuf;

use super::data::{LevelDoc, LevelManifest, RectDef, ViewBox};
use super::registry::LevelRegistry;

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

// -----------------------------------------------------------------------------
// Scaling
// -----------------------------------------------------------------------------

#[test]
fn test_rect_scales_uniformly() {
    let rect = RectDef::new(100.0, 200.0, 50.0, 25.0);
    let aabb = rect.to_aabb(1.8);
    assert_eq!(aabb.pos.x, 180.0);
    assert_eq!(aabb.pos.y, 360.0);
    assert_eq!(aabb.size.x, 90.0);
    assert_eq!(aabb.size.y, 45.0);
}

#[test]
fn test_scale_fits_the_canvas_vertical_extent() {
    let doc = LevelDoc {
        viewbox: ViewBox {
            width: 2000.0,
            height: 400.0,
        },
        ..LevelDoc::fallback()
    };
    assert_eq!(doc.scale_for(720.0), 1.8);

    // A document-space rect at the viewbox floor lands at the canvas floor.
    let floor = RectDef::new(0.0, 380.0, 2000.0, 20.0);
    let aabb = floor.to_aabb(doc.scale_for(720.0));
    assert_eq!(aabb.bottom(), 720.0);
}

// -----------------------------------------------------------------------------
// Document parsing
// -----------------------------------------------------------------------------

#[test]
fn test_level_doc_parses_named_groups() {
    let source = r#"(
        viewbox: (width: 2000, height: 400),
        platforms: [(x: 0, y: 380, w: 2000, h: 20)],
        collectables: [(x: 100, y: 300, w: 12, h: 12)],
        checkpoints: [(x: 1900, y: 350, w: 30, h: 30)],
        enemies: [(x: 500, y: 360, w: 25, h: 20)],
        boxes: [(x: 300, y: 356, w: 24, h: 24)],
        npcs: [(show: (x: 50, y: 350, w: 20, h: 30), message: "Hi there.")],
    )"#;

    let doc: LevelDoc = ron_options().from_str(source).unwrap();
    assert_eq!(doc.platforms.len(), 1);
    assert_eq!(doc.collectables.len(), 1);
    assert_eq!(doc.checkpoints.len(), 1);
    assert_eq!(doc.enemies.len(), 1);
    assert_eq!(doc.boxes.len(), 1);
    assert_eq!(doc.npcs.len(), 1);
    assert_eq!(doc.npcs[0].message.as_deref(), Some("Hi there."));
    // Groups absent from the document are empty, not an error.
    assert!(doc.scenes.is_empty());
    assert!(doc.backgrounds.is_empty());
}

#[test]
fn test_npc_prompt_rect_is_optional() {
    let source = r#"(
        viewbox: (width: 400, height: 400),
        npcs: [(show: (x: 50, y: 350, w: 20, h: 30))],
    )"#;
    let doc: LevelDoc = ron_options().from_str(source).unwrap();
    assert!(doc.npcs[0].prompt.is_none());
    assert!(doc.npcs[0].message.is_none());
}

#[test]
fn test_fallback_level_has_a_full_loop() {
    let doc = LevelDoc::fallback();
    assert!(!doc.platforms.is_empty());
    assert!(!doc.collectables.is_empty());
    assert_eq!(doc.checkpoints.len(), 1);
    assert!(!doc.enemies.is_empty());
    assert!(doc.viewbox.height > 0.0);
}

// -----------------------------------------------------------------------------
// Manifest & registry
// -----------------------------------------------------------------------------

#[test]
fn test_manifest_parses_ordered_list() {
    let source = r#"(levels: ["level1.ron", "level2.ron", "level3.ron"])"#;
    let manifest: LevelManifest = ron_options().from_str(source).unwrap();
    assert_eq!(
        manifest.levels,
        vec!["level1.ron", "level2.ron", "level3.ron"]
    );
}

#[test]
fn test_registry_indexing_is_one_based() {
    let registry = LevelRegistry {
        files: vec![PathBuf::from("a.ron"), PathBuf::from("b.ron")],
    };
    assert_eq!(registry.level_count(), 2);
    assert_eq!(registry.path_for(1), Some(PathBuf::from("a.ron").as_path()));
    assert_eq!(registry.path_for(2), Some(PathBuf::from("b.ron").as_path()));
    assert_eq!(registry.path_for(0), None);
    assert_eq!(registry.path_for(3), None);
}

#[test]
fn test_empty_registry_still_counts_the_fallback() {
    let registry = LevelRegistry::default();
    assert_eq!(registry.level_count(), 1);
    assert_eq!(registry.path_for(1), None);
}
