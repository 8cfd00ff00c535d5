//! Top-level frame driver
//!
//! Owns the options and the scene stack and runs one frame at a time:
//! clamp the frame time, update the top scene, then draw it.

use crate::consts::MAX_FRAME_DT;
use crate::input::InputSource;
use crate::options::GameOptions;
use crate::render::Renderer;
use crate::scene::{SceneKind, SceneManager};

#[derive(Debug, Clone)]
pub struct App {
    options: GameOptions,
    scenes: SceneManager,
    running: bool,
}

impl App {
    /// Start at the main menu
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_start_scene(options, SceneKind::Menu, seed)
    }

    pub fn with_start_scene(options: GameOptions, start: SceneKind, seed: u64) -> Self {
        let scenes = SceneManager::with_initial(start, &options, seed);
        Self {
            options,
            scenes,
            running: true,
        }
    }

    /// Run one frame. Returns false once the app has exited.
    pub fn frame(&mut self, input: &dyn InputSource, dt: f32, renderer: &mut dyn Renderer) -> bool {
        if !self.running {
            return false;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.running = self.scenes.update(input, &mut self.options, dt);
        if self.running {
            self.scenes.draw(renderer, &self.options);
        }
        self.running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// For loading a saved high score or difficulty
    pub fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    pub fn scenes(&self) -> &SceneManager {
        &self.scenes
    }
}
