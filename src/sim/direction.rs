//! Cardinal directions on the grid

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Movement direction, in cyclic order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    /// All directions in input priority order
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Unit step for this direction (y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Right => IVec2::new(1, 0),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Up => IVec2::new(0, -1),
        }
    }

    /// Right and Down count as positive; decides which corner sprite is used
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Right | Direction::Left)
    }

    /// Whether turning from `self` to `next` is allowed.
    ///
    /// Only a change of axis counts as a turn; same-axis input (including the
    /// 180° reversal) is ignored.
    pub fn can_turn_to(self, next: Direction) -> bool {
        self.is_horizontal() != next.is_horizontal()
    }

    /// Neighbouring cell one step away, before wrapping
    pub fn step(self, point: Point) -> Point {
        point + self.delta()
    }
}
