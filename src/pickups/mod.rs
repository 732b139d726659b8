//! Pickups domain: collectables and one-shot checkpoints.

#[cfg(test)]
mod tests;

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::collision::Aabb;
use crate::core::{FrameSet, GameProgress, GameState};
use crate::movement::Player;

/// Collected on first overlap with the player, at most once per instance.
#[derive(Component, Debug)]
pub struct Collectable;

/// Level-exit trigger with a one-shot latch: `claimed` goes false→true once
/// and never resets within a level's lifetime.
#[derive(Component, Debug, Default)]
pub struct Checkpoint {
    pub claimed: bool,
}

impl Checkpoint {
    /// Latch the checkpoint. True only on the claiming transition.
    pub fn claim(&mut self) -> bool {
        if self.claimed {
            return false;
        }
        self.claimed = true;
        true
    }
}

/// Fired per collected collectable, carrying the running total.
#[derive(Debug)]
pub struct CollectablePickedEvent {
    pub total: u32,
}

impl Message for CollectablePickedEvent {}

/// Fired once per checkpoint on its claiming transition.
#[derive(Debug)]
pub struct CheckpointClaimedEvent;

impl Message for CheckpointClaimedEvent {}

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CollectablePickedEvent>()
            .add_message::<CheckpointClaimedEvent>()
            .add_systems(
                Update,
                (collect_collectables, claim_checkpoints)
                    .chain()
                    .in_set(FrameSet::Interact)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Scan every collectable, gathering the overlapped ones into a removal set
/// that is applied only after the scan completes; the live list is never
/// mutated mid-iteration. A despawned collectable is gone from the next
/// frame's scan, which is what makes collection idempotent per instance.
fn collect_collectables(
    mut commands: Commands,
    player: Query<&Aabb, With<Player>>,
    collectables: Query<(Entity, &Aabb), With<Collectable>>,
    mut progress: ResMut<GameProgress>,
    mut events: MessageWriter<CollectablePickedEvent>,
) {
    let Ok(player_aabb) = player.single() else {
        return;
    };

    let mut collected: Vec<Entity> = Vec::new();
    for (entity, aabb) in &collectables {
        if player_aabb.overlaps(aabb) {
            collected.push(entity);
        }
    }

    for entity in collected {
        commands.entity(entity).despawn();
        progress.collectables_collected += 1;
        events.write(CollectablePickedEvent {
            total: progress.collectables_collected,
        });
    }
}

/// Claim overlapped checkpoints. The latch keeps re-entry (and continued
/// overlap across the advance delay) from scheduling a second advance; a
/// claimed checkpoint also disappears from view.
fn claim_checkpoints(
    player: Query<&Aabb, With<Player>>,
    mut checkpoints: Query<(&Aabb, &mut Checkpoint, &mut Visibility)>,
    mut events: MessageWriter<CheckpointClaimedEvent>,
) {
    let Ok(player_aabb) = player.single() else {
        return;
    };

    for (aabb, mut checkpoint, mut visibility) in &mut checkpoints {
        if player_aabb.overlaps(aabb) && checkpoint.claim() {
            *visibility = Visibility::Hidden;
            events.write(CheckpointClaimedEvent);
        }
    }
}
