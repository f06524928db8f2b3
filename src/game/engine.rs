use rand::{Rng, distributions::Standard, rngs::ThreadRng};

use super::{apple::Apple, config::GameConfig, direction::Direction, geometry::Grid, state::Snake};
use crate::input::KeyAction;
use crate::render::Surface;

/// What the driver should do after a step of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking
    Running,
    /// The player asked to leave
    Quit,
    /// The snake ran into itself
    CollisionEnded,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TickOutcome::Running)
    }
}

/// Whether the snake is still moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Alive,
    Terminated,
}

/// The game: one snake, one apple, and the source of randomness that places them
pub struct Game<R: Rng = ThreadRng> {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    apple: Apple,
    status: GameStatus,
    rng: R,
}

impl Game<ThreadRng> {
    /// Create a new game with the thread-local random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    /// Create a new game: a single-cell snake in the middle of the arena
    /// heading in a random direction, and an apple on a random cell
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let grid = config.grid();
        let direction: Direction = rng.sample(Standard);
        let snake = Snake::new(grid.center(), direction);
        let apple = Apple::random(&grid, &mut rng);

        Self::from_parts(config, snake, apple, rng)
    }

    /// Assemble a game from an existing snake and apple
    pub fn from_parts(config: GameConfig, snake: Snake, apple: Apple, rng: R) -> Self {
        Self {
            grid: config.grid(),
            config,
            snake,
            apple,
            status: GameStatus::Alive,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status == GameStatus::Alive
    }

    /// React to a key press
    pub fn handle_action(&mut self, action: KeyAction) -> TickOutcome {
        match action {
            KeyAction::Quit => TickOutcome::Quit,
            KeyAction::Turn(direction) => {
                if self.is_alive() && !self.snake.set_next_direction(direction) {
                    tracing::trace!(
                        ?direction,
                        current = ?self.snake.direction,
                        "Reversal ignored"
                    );
                }
                self.outcome()
            }
            KeyAction::None => self.outcome(),
        }
    }

    /// Execute one step of the game
    pub fn update(&mut self) -> TickOutcome {
        if !self.is_alive() {
            return TickOutcome::CollisionEnded;
        }

        self.snake.apply_pending_direction();
        self.snake.advance(&self.grid);

        if self.snake.has_self_collision() {
            self.status = GameStatus::Terminated;
            tracing::info!(
                length = self.snake.len(),
                head = ?self.snake.head(),
                "Snake ran into itself"
            );
            return TickOutcome::CollisionEnded;
        }

        if self.snake.head() == self.apple.position {
            self.snake.grow();
            self.apple.relocate(&self.grid, &mut self.rng);
            tracing::debug!(
                length = self.snake.len(),
                apple = ?self.apple.position,
                "Apple eaten"
            );
        }

        TickOutcome::Running
    }

    /// Paint the arena, the snake, then the apple
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let palette = &self.config.palette;
        surface.fill(palette.background);
        self.snake.render(surface, palette);
        self.apple.render(surface, palette);
    }

    fn outcome(&self) -> TickOutcome {
        match self.status {
            GameStatus::Alive => TickOutcome::Running,
            GameStatus::Terminated => TickOutcome::CollisionEnded,
        }
    }
}
