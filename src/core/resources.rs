//! Core domain: shared resources for the canvas, tuning, and progression.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Logical canvas the simulation runs in. Canvas space is y-down with the
/// origin at the top-left; rendering maps it onto Bevy's centered world.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Canvas {
    /// Lowest y a box of the given height can sit at (its resting top edge).
    pub fn ground_for(&self, entity_height: f32) -> f32 {
        self.height - entity_height
    }
}

/// Frame-based gameplay constants, loaded from `assets/data/tuning.ron` with
/// these values as the fallback. All motion constants are per frame, not per
/// second: the simulation advances one fixed step per display refresh.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameTuning {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_power: f32,
    /// Horizontal decay applied per frame while no movement key is held.
    pub friction: f32,
    /// Magnitude below which a decaying horizontal velocity snaps to zero.
    pub stop_epsilon: f32,
    /// Downward probe distance for the ground/platform jump check.
    pub surface_probe: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub crouch_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub enemy_speed: f32,
    /// Pixels a box is shoved per frame of horizontally-dominant contact.
    pub box_push: f32,
    /// How far above a box top the player's base may be and still stand on it.
    pub stand_tolerance: f32,
    /// Seconds between claiming a checkpoint and the level advancing.
    pub advance_delay: f32,
    pub background_speed: f32,
    pub starting_lives: u32,
}

impl Default for GameTuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            move_speed: 5.0,
            jump_power: 9.0,
            friction: 0.8,
            stop_epsilon: 0.1,
            surface_probe: 10.0,
            player_width: 45.0,
            player_height: 60.0,
            crouch_height: 40.0,
            spawn_x: 50.0,
            spawn_y: 350.0,
            enemy_speed: 2.0,
            box_push: 2.0,
            stand_tolerance: 10.0,
            advance_delay: 2.0,
            background_speed: 0.5,
            starting_lives: 3,
        }
    }
}

impl GameTuning {
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.spawn_x, self.spawn_y)
    }
}

/// Progress through the level sequence. Survives level transitions, is
/// persisted to disk, and is reset wholesale on restart after a game over.
#[derive(Resource, Debug, Clone)]
pub struct GameProgress {
    /// 1-based level index; wraps past the last level back to 1.
    pub level_index: usize,
    pub collectables_collected: u32,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            level_index: 1,
            collectables_collected: 0,
        }
    }
}

impl GameProgress {
    pub fn reset(&mut self) {
        self.level_index = 1;
        self.collectables_collected = 0;
    }

    /// Advance to the next level, wrapping after `level_count`.
    pub fn advance(&mut self, level_count: usize) {
        self.level_index += 1;
        if self.level_index > level_count.max(1) {
            self.level_index = 1;
        }
    }
}

#[derive(Resource, Debug)]
pub struct Lives {
    pub remaining: u32,
}

impl Default for Lives {
    fn default() -> Self {
        Self { remaining: 3 }
    }
}

impl Lives {
    pub fn reset(&mut self, count: u32) {
        self.remaining = count;
    }

    /// Remove one life. Returns true when none remain.
    pub fn lose(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

/// Pending level advance scheduled by a claimed checkpoint. While the timer
/// runs the level-complete banner is up and gameplay continues; when it
/// finishes the next level replaces the current one wholesale.
#[derive(Resource, Debug, Default)]
pub struct LevelAdvance {
    pub timer: Option<Timer>,
}

impl LevelAdvance {
    pub fn schedule(&mut self, delay: f32) {
        self.timer = Some(Timer::from_seconds(delay, TimerMode::Once));
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }
}

/// Debug-toggled damage immunity, read by the enemy-contact handler.
#[derive(Resource, Debug, Default)]
pub struct Invincible(pub bool);
