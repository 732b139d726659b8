//! Pickups domain: tests for the checkpoint latch.

use super::Checkpoint;
use crate::collision::Aabb;

#[test]
fn test_checkpoint_starts_unclaimed() {
    let checkpoint = Checkpoint::default();
    assert!(!checkpoint.claimed);
}

#[test]
fn test_claim_latches_exactly_once() {
    let mut checkpoint = Checkpoint::default();
    assert!(checkpoint.claim());
    assert!(checkpoint.claimed);
    // Re-entering an already-claimed checkpoint has no effect.
    assert!(!checkpoint.claim());
    assert!(!checkpoint.claim());
    assert!(checkpoint.claimed);
}

#[test]
fn test_checkpoint_claim_scenario() {
    // Player at the spawn point, checkpoint at x=500 on the same baseline.
    let mut player = Aabb::new(50.0, 350.0, 45.0, 60.0);
    let checkpoint_box = Aabb::new(500.0, 350.0, 30.0, 30.0);
    let mut checkpoint = Checkpoint::default();

    assert!(!player.overlaps(&checkpoint_box));

    // Move the player onto the checkpoint: the first overlap claims once.
    player.pos.x = 500.0;
    let mut advances_scheduled = 0;
    if player.overlaps(&checkpoint_box) && checkpoint.claim() {
        advances_scheduled += 1;
    }
    assert!(checkpoint.claimed);
    assert_eq!(advances_scheduled, 1);

    // A second overlap check leaves it claimed with no duplicate schedule.
    if player.overlaps(&checkpoint_box) && checkpoint.claim() {
        advances_scheduled += 1;
    }
    assert!(checkpoint.claimed);
    assert_eq!(advances_scheduled, 1);
}
