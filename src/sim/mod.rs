//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time enters only as frame deltas fed to countdowns
//! - No rendering or platform dependencies

pub mod countdown;
pub mod direction;
pub mod game;
pub mod grid;
pub mod snake;

pub use countdown::Countdown;
pub use direction::Direction;
pub use game::{Bonus, BonusView, GameScene, GameSceneState, GameSnapshot, StepOutcome};
pub use grid::{GridSize, pick_empty_cell};
pub use snake::{BodyPart, PartKind, Snake, direction_between, segment_kind};
