//! Render boundary
//!
//! Scenes describe what is on screen through plain snapshots; a renderer
//! turns those into pixels, sprites or text.

pub mod text;

pub use text::TextRenderer;

use crate::scene::MenuView;
use crate::sim::GameSnapshot;

pub trait Renderer {
    fn draw_menu(&mut self, menu: &MenuView);

    fn draw_game(&mut self, game: &GameSnapshot<'_>, high_score: u32);
}
