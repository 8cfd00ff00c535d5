//! Main menu: Play / Difficulty / Exit

use super::{SceneKind, Transition};
use crate::consts::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::input::{InputSource, Key};
use crate::options::GameOptions;
use crate::sim::Direction;

/// Menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Difficulty,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Difficulty, MenuItem::Exit];
}

/// What the renderer shows for the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub labels: Vec<String>,
    pub selected: usize,
    pub high_score: u32,
}

#[derive(Debug, Clone)]
pub struct MenuScene {
    selected: usize,
    /// Pending difficulty; copied into the options when Play is chosen
    difficulty: u8,
}

impl MenuScene {
    pub fn new(options: &GameOptions) -> Self {
        Self {
            selected: 0,
            difficulty: options.difficulty(),
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn update(&mut self, input: &dyn InputSource, options: &mut GameOptions) -> Transition {
        if input.was_direction_pressed(Direction::Down) {
            self.selected = (self.selected + 1).min(MenuItem::ALL.len() - 1);
        }
        if input.was_direction_pressed(Direction::Up) {
            self.selected = self.selected.saturating_sub(1);
        }

        let item = self.selected();
        if input.was_direction_pressed(Direction::Right) {
            self.on_right(item);
        }
        if input.was_direction_pressed(Direction::Left) {
            self.on_left(item);
        }
        if input.was_pressed(Key::Confirm) {
            return self.on_enter(item, options);
        }

        Transition::None
    }

    fn on_right(&mut self, item: MenuItem) {
        if item == MenuItem::Difficulty {
            self.difficulty = (self.difficulty + 1).min(MAX_DIFFICULTY);
        }
    }

    fn on_left(&mut self, item: MenuItem) {
        if item == MenuItem::Difficulty {
            self.difficulty = self.difficulty.saturating_sub(1).max(MIN_DIFFICULTY);
        }
    }

    fn on_enter(&mut self, item: MenuItem, options: &mut GameOptions) -> Transition {
        match item {
            MenuItem::Play => {
                options.set_difficulty(self.difficulty);
                log::info!("Starting game at difficulty {}", self.difficulty);
                Transition::Push(SceneKind::Game)
            }
            MenuItem::Difficulty => Transition::None,
            MenuItem::Exit => Transition::Pop,
        }
    }

    fn label(&self, item: MenuItem) -> String {
        match item {
            MenuItem::Play => "Play".to_string(),
            MenuItem::Difficulty => format!("Difficulty {}", self.difficulty),
            MenuItem::Exit => "Exit".to_string(),
        }
    }

    pub fn view(&self, options: &GameOptions) -> MenuView {
        MenuView {
            labels: MenuItem::ALL.iter().map(|&item| self.label(item)).collect(),
            selected: self.selected,
            high_score: options.high_score(),
        }
    }
}
