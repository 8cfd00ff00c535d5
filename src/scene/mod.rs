//! Scenes and the scene stack
//!
//! A scene is either the menu or a round of snake. Scenes never touch the
//! stack directly; they hand a [`Transition`] back to the [`SceneManager`].

pub mod manager;
pub mod menu;

pub use manager::SceneManager;
pub use menu::{MenuItem, MenuScene, MenuView};

use crate::input::InputSource;
use crate::options::GameOptions;
use crate::render::Renderer;
use crate::sim::GameScene;

/// Which scene to construct on a push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneKind {
    Menu,
    Game,
}

/// Stack change requested by a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    #[default]
    None,
    Push(SceneKind),
    Pop,
}

/// Per-frame inputs shared with the active scene
pub struct SceneContext<'a> {
    pub input: &'a dyn InputSource,
    pub options: &'a mut GameOptions,
    /// Frame time in seconds
    pub dt: f32,
}

/// A scene on the stack
#[derive(Debug, Clone)]
pub enum Scene {
    Menu(MenuScene),
    Game(GameScene),
}

impl Scene {
    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Menu(_) => SceneKind::Menu,
            Scene::Game(_) => SceneKind::Game,
        }
    }

    pub fn update(&mut self, ctx: &mut SceneContext<'_>) -> Transition {
        match self {
            Scene::Menu(menu) => menu.update(ctx.input, ctx.options),
            Scene::Game(game) => {
                game.update(ctx.input, ctx.dt, ctx.options);
                Transition::None
            }
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, options: &GameOptions) {
        match self {
            Scene::Menu(menu) => renderer.draw_menu(&menu.view(options)),
            Scene::Game(game) => renderer.draw_game(&game.snapshot(), options.high_score()),
        }
    }
}
