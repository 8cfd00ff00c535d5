//! Input boundary
//!
//! Scenes only ever ask two questions: is a logical key held right now
//! (level-triggered), and was it pressed this frame (edge-triggered).
//! Platform code maps physical keys onto [`Key`] and feeds [`KeyboardState`]
//! once per frame.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Logical keys understood by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Right,
    Down,
    Left,
    Up,
    Confirm,
    Pause,
    Escape,
}

impl From<Direction> for Key {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Right => Key::Right,
            Direction::Down => Key::Down,
            Direction::Left => Key::Left,
            Direction::Up => Key::Up,
        }
    }
}

/// Per-frame input queries
pub trait InputSource {
    /// Key is down this frame
    fn is_held(&self, key: Key) -> bool;

    /// Key went down this frame (true for exactly one frame per press)
    fn was_pressed(&self, key: Key) -> bool;

    fn is_direction_held(&self, direction: Direction) -> bool {
        self.is_held(direction.into())
    }

    fn was_direction_pressed(&self, direction: Direction) -> bool {
        self.was_pressed(direction.into())
    }

    /// First held direction in priority order Right, Down, Left, Up
    fn held_direction(&self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.is_direction_held(dir))
    }
}

/// Keyboard snapshot with previous-frame memory for edge detection
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    previous: HashSet<Key>,
    current: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame with the given keys held
    pub fn update<I: IntoIterator<Item = Key>>(&mut self, held: I) {
        self.previous = std::mem::take(&mut self.current);
        self.current = held.into_iter().collect();
    }
}

impl InputSource for KeyboardState {
    fn is_held(&self, key: Key) -> bool {
        self.current.contains(&key)
    }

    fn was_pressed(&self, key: Key) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }
}
