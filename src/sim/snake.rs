//! The snake body and its segment geometry
//!
//! The body is a deque ordered head-first. Every step pushes a new head and,
//! unless the snake is eating, pops the tail. Segment kinds are derived from
//! the turn taken at each segment and only matter to the renderer.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use crate::Point;

/// Visual shape of a body segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartKind {
    Head,
    Tail,
    /// Straight segment
    BellyEmpty,
    /// Segment just behind a swallowed item
    BellyFull,
    /// Turn after moving Right or Down
    CornerPositive,
    /// Turn after moving Left or Up
    CornerNegative,
}

/// One body segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    pub position: Point,
    pub kind: PartKind,
    /// Direction the snake was travelling when it left this cell
    pub direction: Direction,
}

impl BodyPart {
    pub fn new(position: Point, kind: PartKind, direction: Direction) -> Self {
        Self {
            position,
            kind,
            direction,
        }
    }

    fn with_kind(self, kind: PartKind) -> Self {
        Self { kind, ..self }
    }
}

/// The player's snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    parts: VecDeque<BodyPart>,
    /// Set by `eat` so the following step paints the bulge behind the head
    last_move_was_eat: bool,
}

impl Snake {
    /// Two-segment snake heading Right
    pub fn new(head: Point, tail: Point) -> Self {
        let parts = VecDeque::from([
            BodyPart::new(head, PartKind::Head, Direction::Right),
            BodyPart::new(tail, PartKind::Tail, Direction::Right),
        ]);
        Self {
            parts,
            last_move_was_eat: false,
        }
    }

    pub fn head(&self) -> &BodyPart {
        &self.parts[0]
    }

    pub fn tail(&self) -> &BodyPart {
        &self.parts[self.parts.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<BodyPart> {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Never true; a snake always has a head and a tail
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.parts.iter().map(|part| part.position)
    }

    /// Whether `point` is covered by any segment other than the tail
    pub fn occupies_before_tail(&self, point: Point) -> bool {
        self.parts
            .iter()
            .take(self.parts.len() - 1)
            .any(|part| part.position == point)
    }

    /// Step onto `next_head`, keeping the length
    pub fn move_to(&mut self, next_head: Point) {
        self.advance(next_head);
        self.parts.pop_back();
        let last = self.parts.len() - 1;
        self.parts[last] = self.parts[last].with_kind(PartKind::Tail);
        self.last_move_was_eat = false;
        debug_assert!(self.parts.len() >= 2);
    }

    /// Step onto `next_head` and grow by one segment.
    ///
    /// Like `move_to`, this points the old head along the new direction
    /// instead of only relabelling its kind, so every segment carries the
    /// direction it was left in.
    pub fn eat(&mut self, next_head: Point) {
        self.advance(next_head);
        self.last_move_was_eat = true;
    }

    /// Relabel the old head and push the new one
    fn advance(&mut self, next_head: Point) {
        let old = self.parts[0];
        let direction = direction_between(old.position, next_head);
        let kind = if self.last_move_was_eat {
            PartKind::BellyFull
        } else {
            segment_kind(old.direction, direction)
        };
        self.parts[0] = BodyPart {
            kind,
            direction,
            ..old
        };
        self.parts
            .push_front(BodyPart::new(next_head, PartKind::Head, direction));
    }
}

/// Direction of a single step from `prev` to `next`.
///
/// A jump of more than one cell along an axis means the step wrapped around
/// the opposite edge.
pub fn direction_between(prev: Point, next: Point) -> Direction {
    if prev.y == next.y {
        if next.x == prev.x + 1 || next.x < prev.x - 1 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if next.y == prev.y + 1 || next.y < prev.y - 1 {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Shape of the segment where the snake went from `prev` to `next`
pub fn segment_kind(prev: Direction, next: Direction) -> PartKind {
    if prev == next {
        PartKind::BellyEmpty
    } else if prev.is_positive() {
        PartKind::CornerPositive
    } else {
        PartKind::CornerNegative
    }
}
