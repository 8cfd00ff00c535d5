//! Snake Arcade - a snake game on a toroidal grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, grid, timers, game state machine)
//! - `scene`: Scene stack with the menu and game scenes
//! - `input`: Logical key boundary and keyboard edge detection
//! - `render`: Render boundary and a headless text renderer
//! - `options`: Difficulty and high score shared across scenes

pub mod app;
pub mod input;
pub mod options;
pub mod render;
pub mod scene;
pub mod sim;

pub use app::App;
pub use options::GameOptions;

use glam::IVec2;

/// Integer grid coordinate
pub type Point = IVec2;

/// Game configuration constants
pub mod consts {
    /// Grid dimensions (cells)
    pub const GRID_COLS: i32 = 40;
    pub const GRID_ROWS: i32 = 24;

    /// Points awarded for each food item
    pub const FOOD_SCORE: u32 = 1;
    /// Bonus points per whole second left on the bonus timer
    pub const BONUS_SCORE_MULTIPLIER: u32 = 5;
    /// Food items to eat before a bonus bug appears
    pub const BONUS_COUNTDOWN: u32 = 5;
    /// Number of bonus bug sprites
    pub const BONUS_VARIANTS: u8 = 6;

    /// Difficulty bounds
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 9;
    /// Movement tick at difficulty 0 (seconds)
    pub const SLOWEST_TICK: f32 = 0.5;
    /// How much faster the tick gets at max difficulty (seconds)
    pub const TICK_SPEEDUP: f32 = 0.4;
    /// Bonus visibility at difficulty 0 (seconds)
    pub const BONUS_BASE_SECONDS: f32 = 15.0;

    /// Largest frame delta fed into the simulation, to survive long stalls
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Wrap a point onto a `cols` x `rows` torus
#[inline]
pub fn wrap_point(point: Point, cols: i32, rows: i32) -> Point {
    IVec2::new(point.x.rem_euclid(cols), point.y.rem_euclid(rows))
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
