use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use rand::{Rng, rngs::ThreadRng};
use ratatui::backend::Backend;

use super::clock::Clock;
use crate::game::{Game, GameConfig, TickOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Display;

pub struct HumanMode<R: Rng = ThreadRng> {
    game: Game<R>,
    metrics: SessionMetrics,
    input_handler: InputHandler,
}

impl HumanMode<ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_game(Game::new(config))
    }
}

impl<R: Rng> HumanMode<R> {
    pub fn with_game(game: Game<R>) -> Self {
        let mut metrics = SessionMetrics::new();
        metrics.length = game.snake().len();

        Self {
            game,
            metrics,
            input_handler: InputHandler::new(),
        }
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Play until the player quits or the snake runs into itself
    pub async fn run(&mut self) -> Result<TickOutcome> {
        let grid = *self.game.grid();
        let background = self.game.config().palette.background;
        let mut display = Display::acquire(grid, background)?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut display).await;
        let released = display.release();

        let outcome = first_error(result, released)?;
        self.metrics.update();
        tracing::info!(
            ?outcome,
            ticks = self.metrics.ticks,
            apples = self.metrics.apples_eaten,
            length = self.metrics.length,
            elapsed = %self.metrics.format_time(),
            "Session over"
        );
        Ok(outcome)
    }

    async fn run_game_loop<B: Backend>(
        &mut self,
        display: &mut Display<B>,
    ) -> Result<TickOutcome> {
        let mut event_stream = EventStream::new();
        let mut clock = Clock::new(self.game.config().tick_interval());

        self.render(display)?;

        loop {
            let outcome = tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => TickOutcome::Quit,
                    }
                }

                // Game logic tick
                _ = clock.tick() => {
                    let outcome = self.update_game();
                    if !outcome.is_terminal() {
                        self.render(display)?;
                    }
                    outcome
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => TickOutcome::Quit,
            };

            if outcome.is_terminal() {
                return Ok(outcome);
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> TickOutcome {
        let action = match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.input_handler.handle_key_event(key)
            }
            _ => KeyAction::None,
        };

        let outcome = self.game.handle_action(action);
        if outcome == TickOutcome::Quit {
            tracing::info!("Quit requested");
        }
        outcome
    }

    fn update_game(&mut self) -> TickOutcome {
        let outcome = self.game.update();
        self.metrics.on_tick(self.game.snake().len());
        outcome
    }

    fn render<B: Backend>(&mut self, display: &mut Display<B>) -> Result<()> {
        self.metrics.update();
        self.game.draw(display);
        display.present(&self.metrics)
    }
}

/// Combine the game loop result with the terminal release, reporting the
/// loop's error ahead of the release's
fn first_error<T>(result: Result<T>, released: Result<()>) -> Result<T> {
    match (result, released) {
        (Ok(value), released) => released.map(|()| value),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(release_err)) => {
            tracing::warn!(%release_err, "Failed to release terminal");
            Err(err)
        }
    }
}
