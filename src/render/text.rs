//! Headless text renderer
//!
//! Draws one character per cell. Used by the native binary and handy for
//! eyeballing board states in tests.

use std::fmt::Write;

use super::Renderer;
use crate::scene::MenuView;
use crate::sim::{BodyPart, Direction, GameSceneState, GameSnapshot, PartKind};

const EMPTY: char = '.';
const FOOD: char = '*';
const BONUS: char = '$';

/// Glyph for a body segment
pub fn part_glyph(part: &BodyPart) -> char {
    match part.kind {
        PartKind::Head => match part.direction {
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Up => '^',
        },
        PartKind::Tail => 'o',
        PartKind::BellyEmpty => '#',
        PartKind::BellyFull => '@',
        PartKind::CornerPositive => '+',
        PartKind::CornerNegative => '%',
    }
}

/// Renders the most recent frame into a string
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last drawn frame
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for TextRenderer {
    fn draw_menu(&mut self, menu: &MenuView) {
        self.frame.clear();
        let _ = writeln!(self.frame, "S N A K E");
        let _ = writeln!(self.frame);
        for (i, label) in menu.labels.iter().enumerate() {
            let marker = if i == menu.selected { '>' } else { ' ' };
            let _ = writeln!(self.frame, "{} {}", marker, label);
        }
        let _ = writeln!(self.frame);
        let _ = write!(self.frame, "Highscore: {}", menu.high_score);
    }

    fn draw_game(&mut self, game: &GameSnapshot<'_>, high_score: u32) {
        let cols = game.grid.cols as usize;
        let rows = game.grid.rows as usize;
        let mut cells = vec![vec![EMPTY; cols]; rows];

        let mut put = |x: i32, y: i32, glyph: char| {
            if game.grid.contains(glam::IVec2::new(x, y)) {
                cells[y as usize][x as usize] = glyph;
            }
        };
        if let Some(food) = game.food {
            put(food.x, food.y, FOOD);
        }
        if let Some(bonus) = &game.bonus {
            put(bonus.position.x, bonus.position.y, BONUS);
        }
        // Tail first so the head wins if they ever share a cell
        for part in game.body.iter().rev() {
            put(part.position.x, part.position.y, part_glyph(part));
        }

        self.frame.clear();
        let _ = write!(self.frame, "Score: {}  High: {}", game.score, high_score);
        if let Some(bonus) = &game.bonus {
            let _ = write!(self.frame, "  Bonus: {:.0}s", bonus.remaining);
        }
        let _ = writeln!(self.frame);
        for row in &cells {
            self.frame.extend(row.iter());
            self.frame.push('\n');
        }

        let overlay = match game.state {
            GameSceneState::Created => "Press a direction to start",
            GameSceneState::Playing => "",
            GameSceneState::Paused => "PAUSED",
            GameSceneState::GameOver => "GAME OVER",
            GameSceneState::Won => "YOU WIN",
        };
        self.frame.push_str(overlay);
    }
}
