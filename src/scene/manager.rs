//! Scene stack
//!
//! Only the top scene is updated and drawn. Escape is handled here, not in
//! the scenes: it pops back to the previous scene, or ends the app when the
//! last scene is on screen.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{MenuScene, Scene, SceneContext, SceneKind, Transition};
use crate::input::{InputSource, Key};
use crate::options::GameOptions;
use crate::render::Renderer;
use crate::sim::GameScene;

#[derive(Debug, Clone)]
pub struct SceneManager {
    scenes: Vec<Scene>,
    /// Seeds each new game so a session replays from one seed
    rng: Pcg32,
}

impl SceneManager {
    /// Empty stack
    pub fn new(seed: u64) -> Self {
        Self {
            scenes: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Stack holding a single `initial` scene
    pub fn with_initial(initial: SceneKind, options: &GameOptions, seed: u64) -> Self {
        let mut manager = Self::new(seed);
        manager.push(initial, options);
        manager
    }

    /// Build a fresh scene of `kind` and put it on top
    pub fn push(&mut self, kind: SceneKind, options: &GameOptions) {
        let scene = match kind {
            SceneKind::Menu => Scene::Menu(MenuScene::new(options)),
            SceneKind::Game => Scene::Game(GameScene::new(options, self.rng.random())),
        };
        log::info!("Push {:?} (depth {})", kind, self.scenes.len() + 1);
        self.scenes.push(scene);
    }

    pub fn pop(&mut self) -> Option<Scene> {
        let scene = self.scenes.pop();
        if let Some(scene) = &scene {
            log::info!("Pop {:?} (depth {})", scene.kind(), self.scenes.len());
        }
        scene
    }

    pub fn current(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Update the top scene. Returns false once the app should exit.
    pub fn update(&mut self, input: &dyn InputSource, options: &mut GameOptions, dt: f32) -> bool {
        if input.was_pressed(Key::Escape) {
            return self.pop_or_exit();
        }

        let Some(scene) = self.scenes.last_mut() else {
            return false;
        };

        let mut ctx = SceneContext {
            input,
            options: &mut *options,
            dt,
        };
        match scene.update(&mut ctx) {
            Transition::None => true,
            Transition::Push(kind) => {
                self.push(kind, options);
                true
            }
            Transition::Pop => self.pop_or_exit(),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, options: &GameOptions) {
        if let Some(scene) = self.current() {
            scene.draw(renderer, options);
        }
    }

    fn pop_or_exit(&mut self) -> bool {
        if self.scenes.len() > 1 {
            self.pop();
            true
        } else {
            log::info!("Last scene closed, exiting");
            self.scenes.clear();
            false
        }
    }
}
