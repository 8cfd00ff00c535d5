//! Game scene state machine
//!
//! Created -> Playing <-> Paused, Playing -> GameOver | Won.
//!
//! `update` runs once per frame. Pause handling happens every frame; movement
//! happens only when the movement countdown runs out, so the snake's speed
//! depends on difficulty and not on the display rate.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::countdown::Countdown;
use super::direction::Direction;
use super::grid::{GridSize, pick_empty_cell};
use super::snake::{BodyPart, Snake};
use crate::Point;
use crate::consts::*;
use crate::input::{InputSource, Key};
use crate::options::GameOptions;

/// Lifecycle of a game scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameSceneState {
    /// Waiting for the first direction key
    Created,
    /// Active gameplay
    Playing,
    /// Frozen until pause is pressed again
    Paused,
    /// Snake bit itself
    GameOver,
    /// Snake fills the whole board
    Won,
}

/// A time-limited bonus bug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonus {
    pub position: Point,
    /// Sprite index in `0..BONUS_VARIANTS`
    pub variant: u8,
}

/// Bonus as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusView {
    pub position: Point,
    pub variant: u8,
    pub remaining: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct GameSnapshot<'a> {
    pub grid: GridSize,
    pub body: &'a VecDeque<BodyPart>,
    pub food: Option<Point>,
    pub bonus: Option<BonusView>,
    pub score: u32,
    pub state: GameSceneState,
}

/// What happened on a movement tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    AteFood,
    AteBonus { points: u32 },
    Collided,
    FilledBoard,
}

/// One round of snake
#[derive(Debug, Clone)]
pub struct GameScene {
    pub grid: GridSize,
    pub snake: Snake,
    pub food: Option<Point>,
    pub bonus: Option<Bonus>,
    /// Direction of the last movement tick
    pub direction: Direction,
    pub state: GameSceneState,
    pub score: u32,
    /// Food items left before the next bonus; zero while a bonus is out
    pub bonus_countdown: u32,
    /// Gates movement ticks
    pub move_timer: Countdown,
    /// Visibility window of the current bonus
    pub bonus_timer: Countdown,
    /// Direction pressed since the last tick, applied if nothing is held
    buffered_turn: Option<Direction>,
    /// A new high score was announced this round
    new_record: bool,
    rng: Pcg32,
}

impl GameScene {
    /// Fresh round on the default grid
    pub fn new(options: &GameOptions, seed: u64) -> Self {
        Self::with_grid(GridSize::default(), options, seed)
    }

    /// Fresh round with a two-segment snake in the middle of `grid`
    pub fn with_grid(grid: GridSize, options: &GameOptions, seed: u64) -> Self {
        let head = grid.center();
        let tail = grid.wrap(Direction::Left.step(head));
        Self::with_snake(grid, Snake::new(head, tail), options, seed)
    }

    pub fn with_snake(grid: GridSize, snake: Snake, options: &GameOptions, seed: u64) -> Self {
        Self {
            grid,
            snake,
            food: None,
            bonus: None,
            direction: Direction::Right,
            state: GameSceneState::Created,
            score: 0,
            bonus_countdown: BONUS_COUNTDOWN,
            move_timer: Countdown::new(options.update_interval()),
            bonus_timer: Countdown::new(options.bonus_visible_duration()),
            buffered_turn: None,
            new_record: false,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Renderable view of the current state
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: self.grid,
            body: self.snake.body(),
            food: self.food,
            bonus: self.bonus.map(|bonus| BonusView {
                position: bonus.position,
                variant: bonus.variant,
                remaining: self.bonus_timer.remaining().max(0.0),
            }),
            score: self.score,
            state: self.state,
        }
    }

    /// Advance by one frame of `dt` seconds
    pub fn update(&mut self, input: &dyn InputSource, dt: f32, options: &mut GameOptions) {
        match self.state {
            GameSceneState::Created => self.update_created(input),
            GameSceneState::Playing => self.update_playing(input, dt, options),
            GameSceneState::Paused => {
                if input.was_pressed(Key::Pause) {
                    log::info!("Resumed");
                    self.state = GameSceneState::Playing;
                }
            }
            GameSceneState::GameOver | GameSceneState::Won => {}
        }
    }

    fn update_created(&mut self, input: &dyn InputSource) {
        let Some(direction) = input.held_direction() else {
            return;
        };

        self.direction = direction;
        self.food = self.spawn_cell(self.bonus_position());
        match self.food {
            Some(_) => {
                log::info!("Game started heading {:?}", direction);
                self.state = GameSceneState::Playing;
            }
            None => {
                log::warn!("No room for food on a {}x{} grid", self.grid.cols, self.grid.rows);
                self.state = GameSceneState::Won;
            }
        }
    }

    fn update_playing(&mut self, input: &dyn InputSource, dt: f32, options: &mut GameOptions) {
        if input.was_pressed(Key::Pause) {
            log::info!("Paused");
            self.state = GameSceneState::Paused;
            return;
        }

        self.buffer_turn(input);
        self.update_bonus_timer(dt);

        self.move_timer.update(dt);
        if self.move_timer.is_expired() {
            self.direction = self.resolve_direction(input);
            self.buffered_turn = None;
            match self.step(options) {
                StepOutcome::Collided => log::info!("Game over with score {}", self.score),
                StepOutcome::FilledBoard => log::info!("Board full with score {}", self.score),
                StepOutcome::Moved | StepOutcome::AteFood | StepOutcome::AteBonus { .. } => {}
            }
            self.move_timer.reset();
        }
    }

    /// Remember a turn tapped between ticks
    fn buffer_turn(&mut self, input: &dyn InputSource) {
        if let Some(dir) = Direction::ALL
            .into_iter()
            .find(|&dir| input.was_direction_pressed(dir) && self.direction.can_turn_to(dir))
        {
            self.buffered_turn = Some(dir);
        }
    }

    /// Pick the direction for this tick. Held keys win over a buffered tap;
    /// only turns onto the other axis are accepted.
    fn resolve_direction(&self, input: &dyn InputSource) -> Direction {
        let candidates: [Direction; 2] = if self.direction.is_horizontal() {
            [Direction::Down, Direction::Up]
        } else {
            [Direction::Right, Direction::Left]
        };

        candidates
            .into_iter()
            .find(|&dir| input.is_direction_held(dir))
            .or(self.buffered_turn)
            .filter(|&dir| self.direction.can_turn_to(dir))
            .unwrap_or(self.direction)
    }

    fn update_bonus_timer(&mut self, dt: f32) {
        if self.bonus.is_none() || self.bonus_countdown != 0 {
            return;
        }

        self.bonus_timer.update(dt);
        if self.bonus_timer.is_expired() {
            log::debug!("Bonus expired");
            self.bonus = None;
            self.bonus_countdown = BONUS_COUNTDOWN;
        }
    }

    /// Run one movement tick in the current direction
    pub fn step(&mut self, options: &mut GameOptions) -> StepOutcome {
        let next = self.grid.wrap(self.direction.step(self.snake.head().position));

        let outcome = if Some(next) == self.food {
            self.eat_food(next)
        } else if self.bonus_position() == Some(next) {
            self.eat_bonus(next)
        } else if self.snake.occupies_before_tail(next) {
            self.state = GameSceneState::GameOver;
            StepOutcome::Collided
        } else {
            self.snake.move_to(next);
            StepOutcome::Moved
        };

        if options.record_score(self.score) && !self.new_record {
            log::info!("New high score");
            self.new_record = true;
        }

        outcome
    }

    fn eat_food(&mut self, next: Point) -> StepOutcome {
        self.snake.eat(next);
        self.score += FOOD_SCORE;
        log::debug!("Ate food at {}, score {}", next, self.score);

        if self.snake.len() >= self.grid.cell_count() {
            self.food = None;
            self.state = GameSceneState::Won;
            return StepOutcome::FilledBoard;
        }

        self.food = self.spawn_cell(self.bonus_position());
        if self.food.is_none() {
            // The bonus holds the last free cell; it gives way to the food
            if let Some(bonus) = self.bonus.take() {
                log::debug!("Bonus at {} replaced by food", bonus.position);
                self.food = Some(bonus.position);
                self.bonus_countdown = BONUS_COUNTDOWN;
            }
            return StepOutcome::AteFood;
        }

        if self.bonus_countdown > 0 {
            self.bonus_countdown -= 1;
            if self.bonus_countdown == 0 {
                self.spawn_bonus();
            }
        }

        StepOutcome::AteFood
    }

    fn eat_bonus(&mut self, next: Point) -> StepOutcome {
        self.snake.eat(next);
        self.bonus = None;

        let seconds = self.bonus_timer.remaining().max(0.0).round() as u32;
        let points = seconds * BONUS_SCORE_MULTIPLIER;
        self.score += points;
        self.bonus_countdown = BONUS_COUNTDOWN;
        log::debug!("Ate bonus at {} for {} points", next, points);

        StepOutcome::AteBonus { points }
    }

    fn spawn_bonus(&mut self) {
        match self.spawn_cell(self.food) {
            Some(position) => {
                let variant = self.rng.random_range(0..BONUS_VARIANTS);
                self.bonus = Some(Bonus { position, variant });
                self.bonus_timer.reset();
                log::debug!("Bonus {} spawned at {}", variant, position);
            }
            None => {
                // Nowhere to put it; try again after another round of food
                self.bonus_countdown = BONUS_COUNTDOWN;
            }
        }
    }

    fn bonus_position(&self) -> Option<Point> {
        self.bonus.map(|bonus| bonus.position)
    }

    fn spawn_cell(&mut self, excluded: Option<Point>) -> Option<Point> {
        pick_empty_cell(&mut self.rng, self.grid, self.snake.positions(), excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyboardState;
    use glam::IVec2;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn options() -> GameOptions {
        GameOptions::new(5)
    }

    fn small_scene() -> GameScene {
        GameScene::with_grid(GridSize::new(10, 10), &options(), 1234)
    }

    fn held(keys: &[Key]) -> KeyboardState {
        let mut input = KeyboardState::new();
        input.update(keys.iter().copied());
        input
    }

    /// Start a round heading Right without moving
    fn started_scene() -> GameScene {
        let mut scene = small_scene();
        scene.update(&held(&[Key::Right]), DT, &mut options());
        assert_eq!(scene.state, GameSceneState::Playing);
        scene
    }

    /// Frame long enough to trigger exactly one movement tick
    fn tick(scene: &mut GameScene, input: &dyn InputSource, options: &mut GameOptions) {
        let dt = scene.move_timer.remaining().max(0.0) + 1e-4;
        scene.update(input, dt, options);
    }

    #[test]
    fn test_created_waits_for_direction() {
        let mut scene = small_scene();
        let mut opts = options();
        scene.update(&held(&[]), 5.0, &mut opts);
        scene.update(&held(&[Key::Confirm, Key::Pause]), 5.0, &mut opts);
        assert_eq!(scene.state, GameSceneState::Created);
        assert_eq!(scene.food, None);
        assert_eq!(scene.snake.head().position, IVec2::new(5, 5));
    }

    #[test]
    fn test_start_latches_direction_and_spawns_food() {
        let mut scene = small_scene();
        assert_eq!(scene.snake.head().position, IVec2::new(5, 5));
        assert_eq!(scene.snake.len(), 2);

        scene.update(&held(&[Key::Right]), DT, &mut options());

        assert_eq!(scene.state, GameSceneState::Playing);
        assert_eq!(scene.direction, Direction::Right);
        let food = scene.food.expect("food spawned");
        assert!(scene.grid.contains(food));
        assert!(scene.snake.positions().all(|p| p != food));
        // No movement on the starting frame
        assert_eq!(scene.snake.head().position, IVec2::new(5, 5));
    }

    #[test]
    fn test_start_direction_priority() {
        let mut scene = small_scene();
        scene.update(&held(&[Key::Up, Key::Left]), DT, &mut options());
        assert_eq!(scene.direction, Direction::Left);

        let mut scene = small_scene();
        scene.update(&held(&[Key::Up, Key::Down]), DT, &mut options());
        assert_eq!(scene.direction, Direction::Down);
    }

    #[test]
    fn test_movement_waits_for_timer() {
        let mut scene = started_scene();
        let mut opts = options();
        let none = held(&[]);
        let interval = opts.update_interval();

        scene.update(&none, interval * 0.5, &mut opts);
        assert_eq!(scene.snake.head().position, IVec2::new(5, 5));

        scene.update(&none, interval * 0.6, &mut opts);
        assert_eq!(scene.snake.head().position, IVec2::new(6, 5));
        assert_eq!(scene.move_timer.remaining(), scene.move_timer.total());
    }

    #[test]
    fn test_wraps_at_right_edge() {
        let mut scene = started_scene();
        scene.snake = Snake::new(IVec2::new(9, 5), IVec2::new(8, 5));
        scene.food = Some(IVec2::new(3, 3));
        let mut opts = options();

        tick(&mut scene, &held(&[]), &mut opts);

        assert_eq!(scene.snake.head().position, IVec2::new(0, 5));
        assert_eq!(scene.snake.len(), 2);
        assert_eq!(scene.state, GameSceneState::Playing);
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        let mut opts = options();

        tick(&mut scene, &held(&[Key::Left]), &mut opts);
        assert_eq!(scene.direction, Direction::Right);
        assert_eq!(scene.snake.head().position, IVec2::new(6, 5));

        tick(&mut scene, &held(&[Key::Up]), &mut opts);
        assert_eq!(scene.direction, Direction::Up);
        assert_eq!(scene.snake.head().position, IVec2::new(6, 4));

        tick(&mut scene, &held(&[Key::Down]), &mut opts);
        assert_eq!(scene.direction, Direction::Up);

        tick(&mut scene, &held(&[Key::Left]), &mut opts);
        assert_eq!(scene.direction, Direction::Left);
    }

    #[test]
    fn test_tapped_turn_is_buffered() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        let mut opts = options();
        let mut input = KeyboardState::new();

        // Tap Down for one short frame, then release before the tick
        input.update([Key::Down]);
        scene.update(&input, DT, &mut opts);
        input.update([]);
        tick(&mut scene, &input, &mut opts);

        assert_eq!(scene.direction, Direction::Down);
        assert_eq!(scene.snake.head().position, IVec2::new(5, 6));

        // Buffer is consumed by the tick
        tick(&mut scene, &input, &mut opts);
        assert_eq!(scene.direction, Direction::Down);
    }

    #[test]
    fn test_eating_food() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(6, 5));
        scene.bonus = Some(Bonus {
            position: IVec2::new(2, 2),
            variant: 0,
        });
        scene.bonus_countdown = 3;
        let mut opts = options();

        tick(&mut scene, &held(&[]), &mut opts);

        assert_eq!(scene.snake.len(), 3);
        assert_eq!(scene.score, FOOD_SCORE);
        assert_eq!(scene.bonus_countdown, 2);
        let food = scene.food.expect("food respawned");
        assert_ne!(food, IVec2::new(2, 2));
        assert!(scene.snake.positions().all(|p| p != food));
        assert_eq!(opts.high_score(), FOOD_SCORE);
    }

    #[test]
    fn test_bonus_spawns_when_countdown_ends() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(6, 5));
        scene.bonus_countdown = 1;
        scene.bonus_timer.update(3.0);
        let mut opts = options();

        tick(&mut scene, &held(&[]), &mut opts);

        assert_eq!(scene.bonus_countdown, 0);
        let bonus = scene.bonus.expect("bonus spawned");
        assert!(bonus.variant < BONUS_VARIANTS);
        assert!(scene.grid.contains(bonus.position));
        assert_ne!(Some(bonus.position), scene.food);
        assert!(scene.snake.positions().all(|p| p != bonus.position));
        assert_eq!(scene.bonus_timer.remaining(), scene.bonus_timer.total());
    }

    #[test]
    fn test_eating_bonus_scores_remaining_time() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        scene.bonus = Some(Bonus {
            position: IVec2::new(6, 5),
            variant: 2,
        });
        scene.bonus_countdown = 0;
        // 10s window with 7.7s left rounds up to 8
        scene.bonus_timer = Countdown::new(10.0);
        scene.bonus_timer.update(2.3 - scene.move_timer.remaining() - 1e-4);
        let mut opts = options();

        tick(&mut scene, &held(&[]), &mut opts);

        assert_eq!(scene.bonus, None);
        assert_eq!(scene.snake.len(), 3);
        assert_eq!(scene.score, 8 * BONUS_SCORE_MULTIPLIER);
        assert_eq!(scene.bonus_countdown, BONUS_COUNTDOWN);
    }

    #[test]
    fn test_bonus_expires() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        scene.bonus = Some(Bonus {
            position: IVec2::new(2, 8),
            variant: 1,
        });
        scene.bonus_countdown = 0;
        scene.bonus_timer = Countdown::new(0.05);
        let mut opts = options();

        scene.update(&held(&[]), 0.03, &mut opts);
        assert!(scene.bonus.is_some());

        scene.update(&held(&[]), 0.03, &mut opts);
        assert_eq!(scene.bonus, None);
        assert_eq!(scene.bonus_countdown, BONUS_COUNTDOWN);
    }

    #[test]
    fn test_self_collision_ends_game() {
        // Body: head (5,5) -> (5,6) -> (6,6) -> (6,5) -> tail (7,5)
        let mut snake = Snake::new(IVec2::new(6, 5), IVec2::new(7, 5));
        snake.eat(IVec2::new(6, 6));
        snake.eat(IVec2::new(5, 6));
        snake.eat(IVec2::new(5, 5));
        let mut scene = GameScene::with_snake(GridSize::new(10, 10), snake, &options(), 1);
        scene.state = GameSceneState::Playing;
        scene.direction = Direction::Up;
        scene.food = Some(IVec2::new(0, 0));
        let mut opts = options();

        // Turn Right into (6,5), which is not the tail
        scene.direction = Direction::Right;
        assert_eq!(scene.step(&mut opts), StepOutcome::Collided);
        assert_eq!(scene.state, GameSceneState::GameOver);
        let body: Vec<BodyPart> = scene.snake.body().iter().copied().collect();

        for _ in 0..5 {
            tick(&mut scene, &held(&[Key::Up, Key::Pause]), &mut opts);
        }
        assert_eq!(scene.state, GameSceneState::GameOver);
        let after: Vec<BodyPart> = scene.snake.body().iter().copied().collect();
        assert_eq!(body, after);
    }

    #[test]
    fn test_moving_into_tail_is_allowed() {
        // Square loop: head (5,5) -> (5,6) -> (6,6) -> tail (6,5)
        let mut snake = Snake::new(IVec2::new(6, 6), IVec2::new(6, 5));
        snake.eat(IVec2::new(5, 6));
        snake.eat(IVec2::new(5, 5));
        let mut scene = GameScene::with_snake(GridSize::new(10, 10), snake, &options(), 1);
        scene.state = GameSceneState::Playing;
        scene.direction = Direction::Up;
        scene.food = Some(IVec2::new(0, 0));
        let mut opts = options();

        tick(&mut scene, &held(&[Key::Right]), &mut opts);

        assert_eq!(scene.state, GameSceneState::Playing);
        assert_eq!(scene.snake.head().position, IVec2::new(6, 5));
        assert_eq!(scene.snake.len(), 4);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        scene.bonus = Some(Bonus {
            position: IVec2::new(2, 8),
            variant: 1,
        });
        scene.bonus_countdown = 0;
        let mut opts = options();
        let mut input = KeyboardState::new();

        input.update([]);
        scene.update(&input, 0.01, &mut opts);
        let move_left = scene.move_timer.remaining();
        let bonus_left = scene.bonus_timer.remaining();

        input.update([Key::Pause]);
        scene.update(&input, 0.01, &mut opts);
        assert_eq!(scene.state, GameSceneState::Paused);

        // Held pause and other keys do nothing
        input.update([Key::Pause, Key::Down, Key::Confirm]);
        scene.update(&input, 10.0, &mut opts);
        input.update([Key::Up]);
        scene.update(&input, 10.0, &mut opts);
        assert_eq!(scene.state, GameSceneState::Paused);
        assert_eq!(scene.move_timer.remaining(), move_left);
        assert_eq!(scene.bonus_timer.remaining(), bonus_left);
        assert_eq!(scene.snake.head().position, IVec2::new(5, 5));

        input.update([Key::Pause]);
        scene.update(&input, 0.01, &mut opts);
        assert_eq!(scene.state, GameSceneState::Playing);
        assert_eq!(scene.move_timer.remaining(), move_left);
        assert_eq!(scene.direction, Direction::Right);
    }

    #[test]
    fn test_filling_the_board_wins() {
        // 3x1 board: snake covers two cells, food the third
        let snake = Snake::new(IVec2::new(1, 0), IVec2::new(0, 0));
        let mut scene = GameScene::with_snake(GridSize::new(3, 1), snake, &options(), 9);
        scene.update(&held(&[Key::Right]), DT, &mut options());
        assert_eq!(scene.food, Some(IVec2::new(2, 0)));

        let mut opts = options();
        tick(&mut scene, &held(&[]), &mut opts);
        assert_eq!(scene.state, GameSceneState::Won);
        assert_eq!(scene.snake.len(), 3);
        assert_eq!(scene.food, None);
    }

    #[test]
    fn test_bonus_on_last_free_cell_gives_way_to_food() {
        // 4x1 board: snake on two cells, food and bonus on the other two
        let snake = Snake::new(IVec2::new(1, 0), IVec2::new(0, 0));
        let mut scene = GameScene::with_snake(GridSize::new(4, 1), snake, &options(), 9);
        scene.state = GameSceneState::Playing;
        scene.food = Some(IVec2::new(2, 0));
        scene.bonus = Some(Bonus {
            position: IVec2::new(3, 0),
            variant: 3,
        });
        scene.bonus_countdown = 0;
        let mut opts = options();

        assert_eq!(scene.step(&mut opts), StepOutcome::AteFood);
        assert_eq!(scene.state, GameSceneState::Playing);
        assert_eq!(scene.snake.len(), 3);
        assert_eq!(scene.bonus, None);
        assert_eq!(scene.food, Some(IVec2::new(3, 0)));
        assert_eq!(scene.bonus_countdown, BONUS_COUNTDOWN);

        assert_eq!(scene.step(&mut opts), StepOutcome::FilledBoard);
        assert_eq!(scene.state, GameSceneState::Won);
        assert_eq!(scene.snake.len(), scene.grid.cell_count());
    }

    #[test]
    fn test_held_cross_axis_priority() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(0, 0));
        let mut opts = options();

        // Moving Right with Up and Down held: Down wins
        tick(&mut scene, &held(&[Key::Up, Key::Down]), &mut opts);
        assert_eq!(scene.direction, Direction::Down);
        assert_eq!(scene.snake.head().position, IVec2::new(5, 6));

        // Moving Down with Left and Right held: Right wins
        tick(&mut scene, &held(&[Key::Left, Key::Right]), &mut opts);
        assert_eq!(scene.direction, Direction::Right);
        assert_eq!(scene.snake.head().position, IVec2::new(6, 6));
    }

    #[test]
    fn test_snapshot() {
        let mut scene = started_scene();
        scene.bonus = Some(Bonus {
            position: IVec2::new(1, 1),
            variant: 4,
        });
        scene.bonus_countdown = 0;
        scene.score = 17;

        let snapshot = scene.snapshot();
        assert_eq!(snapshot.body.len(), 2);
        assert_eq!(snapshot.food, scene.food);
        assert_eq!(snapshot.score, 17);
        assert_eq!(snapshot.state, GameSceneState::Playing);
        let bonus = snapshot.bonus.expect("bonus visible");
        assert_eq!(bonus.variant, 4);
        assert_eq!(bonus.remaining, scene.bonus_timer.remaining());
    }

    #[test]
    fn test_step_outcomes() {
        let mut scene = started_scene();
        scene.food = Some(IVec2::new(7, 5));
        scene.bonus = Some(Bonus {
            position: IVec2::new(8, 5),
            variant: 0,
        });
        scene.bonus_countdown = 0;
        scene.bonus_timer = Countdown::new(4.0);
        let mut opts = options();

        assert_eq!(scene.step(&mut opts), StepOutcome::Moved);
        assert_eq!(scene.step(&mut opts), StepOutcome::AteFood);
        assert_eq!(
            scene.step(&mut opts),
            StepOutcome::AteBonus {
                points: 4 * BONUS_SCORE_MULTIPLIER
            }
        );
        assert_eq!(scene.snake.len(), 4);
    }

    fn keys_from_mask(mask: u8) -> Vec<Key> {
        [Key::Right, Key::Down, Key::Left, Key::Up, Key::Pause]
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, key)| key)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_frames_keep_board_consistent(
            seed in any::<u64>(),
            frames in proptest::collection::vec((0u8..32, 0.0f32..0.1), 1..300),
        ) {
            let grid = GridSize::new(6, 5);
            let mut opts = GameOptions::new(MAX_DIFFICULTY);
            let mut scene = GameScene::with_grid(grid, &opts, seed);
            let mut input = KeyboardState::new();

            for (mask, dt) in frames {
                let len_before = scene.snake.len();
                let score_before = scene.score;
                let food_before = scene.food;
                let bonus_before = scene.bonus.map(|bonus| bonus.position);

                input.update(keys_from_mask(mask));
                scene.update(&input, dt, &mut opts);

                let positions: Vec<Point> = scene.snake.positions().collect();
                for pair in positions.windows(2) {
                    prop_assert!(grid.are_adjacent(pair[0], pair[1]));
                }

                let len = scene.snake.len();
                prop_assert!(len == len_before || len == len_before + 1);
                if len > len_before {
                    let head = Some(scene.snake.head().position);
                    prop_assert!(head == food_before || head == bonus_before);
                } else {
                    prop_assert_eq!(scene.score, score_before);
                }

                if matches!(scene.state, GameSceneState::Playing | GameSceneState::Paused) {
                    prop_assert!(scene.food.is_some());
                }
                if let Some(food) = scene.food {
                    prop_assert!(!positions.contains(&food));
                    prop_assert_ne!(Some(food), scene.bonus.map(|bonus| bonus.position));
                }
                if let Some(bonus) = scene.bonus {
                    prop_assert!(!positions.contains(&bonus.position));
                }
            }
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let run = |seed| {
            let mut scene = GameScene::with_grid(GridSize::new(12, 8), &options(), seed);
            let mut opts = options();
            scene.update(&held(&[Key::Down]), DT, &mut opts);
            let mut foods = vec![scene.food];
            for i in 0..40 {
                let key = if i % 7 == 0 { Key::Right } else { Key::Down };
                tick(&mut scene, &held(&[key]), &mut opts);
                foods.push(scene.food);
            }
            (foods, scene.score, scene.state)
        };
        assert_eq!(run(77), run(77));
    }
}
