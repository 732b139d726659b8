//! NPCs domain: proximity prompts and one-key dialog.


use bevy::prelude::*;

use crate::collision::Aabb;
use crate::core::{FrameSet, GameState};
use crate::movement::{MovementInput, Player};

/// A talkative bystander. The first overlap with the player arms
/// `available`; the interact key consumes it to show the dialog, after
/// which the NPC stays quiet (`interacted`).
#[derive(Component, Debug)]
pub struct Npc {
    pub message: String,
    pub available: bool,
    pub interacted: bool,
}

impl Npc {
    pub fn new(message: String) -> Self {
        Self {
            message,
            available: false,
            interacted: false,
        }
    }

    /// First-overlap latch: arms the prompt once per NPC, ever. Further
    /// overlaps are no-ops whether or not the prompt was consumed.
    pub fn notice(&mut self) {
        if !self.interacted {
            self.available = true;
            self.interacted = true;
        }
    }

    /// Consume the armed prompt, yielding the dialog line.
    pub fn consume(&mut self) -> Option<&str> {
        if !self.available {
            return None;
        }
        self.available = false;
        Some(&self.message)
    }
}

/// Floating indicator tied to an NPC, shown while its prompt is armed.
#[derive(Component, Debug)]
pub struct NpcPrompt {
    pub npc: Entity,
}

/// The dialog line currently on screen, if any. The UI renders it; a
/// confirm key dismisses it.
#[derive(Resource, Debug, Default)]
pub struct ActiveDialog {
    pub message: Option<String>,
}

impl ActiveDialog {
    pub fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn close(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}

/// Default dialog lines per level, in NPC document order, for documents
/// that do not carry their own text.
pub fn default_message(level: usize, ordinal: usize) -> &'static str {
    const LEVEL_1: [&str; 3] = [
        "Hello there! Welcome to level 1. Collect all the gold coins to proceed!",
        "Watch out for enemies! They'll reduce your lives.",
        "Use arrow keys to move and space to jump!",
    ];
    const LEVEL_2: [&str; 3] = [
        "Level 2 is more challenging! Be careful with the platforms.",
        "Remember, you can crouch with the S key!",
        "The checkpoint is at the end - reach it to complete the level!",
    ];
    const LEVEL_3: [&str; 3] = [
        "Final level! This one has more complex platforms.",
        "You're doing great! Almost there!",
        "Collect all coins to get the best score!",
    ];

    let table: &[&str] = match level {
        1 => &LEVEL_1,
        2 => &LEVEL_2,
        3 => &LEVEL_3,
        _ => &[],
    };
    table
        .get(ordinal)
        .copied()
        .unwrap_or("Hello! Keep going to find more collectables!")
}

pub struct NpcsPlugin;

impl Plugin for NpcsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveDialog>().add_systems(
            Update,
            (notice_player, handle_interact, sync_prompts)
                .chain()
                .in_set(FrameSet::Interact)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

fn notice_player(player: Query<&Aabb, With<Player>>, mut npcs: Query<(&Aabb, &mut Npc)>) {
    let Ok(player_aabb) = player.single() else {
        return;
    };

    for (aabb, mut npc) in &mut npcs {
        if player_aabb.overlaps(aabb) {
            npc.notice();
        }
    }
}

/// The interact key consumes the first armed prompt and opens its dialog.
fn handle_interact(
    input: Res<MovementInput>,
    mut dialog: ResMut<ActiveDialog>,
    mut npcs: Query<&mut Npc>,
) {
    if !input.interact_just_pressed {
        return;
    }

    for mut npc in &mut npcs {
        if let Some(message) = npc.consume() {
            let message = message.to_string();
            dialog.open(message);
            break;
        }
    }
}

fn sync_prompts(
    npcs: Query<&Npc>,
    mut prompts: Query<(&NpcPrompt, &mut Visibility)>,
) {
    for (prompt, mut visibility) in &mut prompts {
        let armed = npcs.get(prompt.npc).map(|npc| npc.available).unwrap_or(false);
        *visibility = if armed {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}
