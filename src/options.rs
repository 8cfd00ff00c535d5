//! Options shared between the menu and the game
//!
//! Lives for the whole process. Loading and saving belong to whoever embeds
//! the game; this module only converts to and from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lerp;

/// Player-chosen difficulty and the session high score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// 1 (slowest) to 9 (fastest)
    difficulty: u8,
    /// Best score seen; only ever raised
    #[serde(default)]
    high_score: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            difficulty: MAX_DIFFICULTY,
            high_score: 0,
        }
    }
}

impl GameOptions {
    pub fn new(difficulty: u8) -> Self {
        Self {
            difficulty: clamp_difficulty(difficulty),
            high_score: 0,
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: u8) {
        self.difficulty = clamp_difficulty(difficulty);
    }

    /// Seconds between movement ticks; shrinks linearly with difficulty
    pub fn update_interval(&self) -> f32 {
        let t = self.difficulty as f32 / MAX_DIFFICULTY as f32;
        SLOWEST_TICK - lerp(0.0, TICK_SPEEDUP, t)
    }

    /// Seconds a bonus bug stays on the board
    pub fn bonus_visible_duration(&self) -> f32 {
        BONUS_BASE_SECONDS - self.difficulty as f32
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Raise the high score if `score` beats it. Returns true on a new record.
    pub fn record_score(&mut self, score: u32) -> bool {
        if score > self.high_score {
            self.high_score = score;
            true
        } else {
            false
        }
    }

    /// Parse options saved by [`GameOptions::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut options: Self = serde_json::from_str(json)?;
        options.difficulty = clamp_difficulty(options.difficulty);
        Ok(options)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn clamp_difficulty(difficulty: u8) -> u8 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}
