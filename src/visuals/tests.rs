//! Visuals domain: tests for fills and seeded jitter.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::textures::texture_path;
use super::{EntityKind, fallback_color, jitter};

#[test]
fn test_every_kind_has_a_fallback_fill() {
    let kinds = [
        EntityKind::Player,
        EntityKind::Platform,
        EntityKind::Collectable,
        EntityKind::Checkpoint,
        EntityKind::Enemy,
        EntityKind::PushBox,
        EntityKind::Npc,
        EntityKind::Prompt,
        EntityKind::Scene,
        EntityKind::Background,
    ];
    for kind in kinds {
        let color = fallback_color(kind).to_srgba();
        assert!(color.alpha > 0.0, "{:?} fill is fully transparent", kind);
    }
}

#[test]
fn test_jitter_is_deterministic_per_seed() {
    let base = fallback_color(EntityKind::Platform);

    let mut a = ChaCha8Rng::seed_from_u64(2);
    let mut b = ChaCha8Rng::seed_from_u64(2);
    assert_eq!(jitter(base, &mut a), jitter(base, &mut b));
}

#[test]
fn test_jitter_stays_in_gamut_and_keeps_alpha() {
    let base = fallback_color(EntityKind::Npc);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let jittered = jitter(base, &mut rng).to_srgba();
        assert!((0.0..=1.0).contains(&jittered.red));
        assert!((0.0..=1.0).contains(&jittered.green));
        assert!((0.0..=1.0).contains(&jittered.blue));
        assert_eq!(jittered.alpha, base.to_srgba().alpha);
    }
}

#[test]
fn test_only_surface_kinds_have_textures() {
    assert!(texture_path(EntityKind::Platform).is_some());
    assert!(texture_path(EntityKind::PushBox).is_some());
    assert!(texture_path(EntityKind::Player).is_none());
    assert!(texture_path(EntityKind::Collectable).is_none());
    assert!(texture_path(EntityKind::Enemy).is_none());
}
