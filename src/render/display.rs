use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{self, Stderr, stderr};

use super::{canvas::Canvas, renderer::Renderer, surface::Surface};
use crate::game::{Cell, Grid, Rgb};
use crate::metrics::SessionMetrics;

/// Handle on the terminal the game is drawn to.
///
/// Painting goes to an off-screen [`Canvas`]; [`Display::present`] flushes it.
pub struct Display<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
    renderer: Renderer,
}

impl<B: Backend> Display<B> {
    pub fn new(backend: B, grid: Grid, background: Rgb) -> Result<Self> {
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        Ok(Self {
            terminal,
            canvas: Canvas::new(grid, background),
            renderer: Renderer::new(),
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Draw the current canvas and session stats to the terminal
    pub fn present(&mut self, metrics: &SessionMetrics) -> Result<()> {
        let Self {
            terminal,
            canvas,
            renderer,
        } = self;
        terminal
            .draw(|frame| renderer.render(frame, canvas, metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl<B: Backend> Surface for Display<B> {
    fn fill(&mut self, color: Rgb) {
        self.canvas.fill(color);
    }

    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>) {
        self.canvas.draw_cell(cell, fill, border);
    }
}

impl Display<CrosstermBackend<Stderr>> {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor
    pub fn acquire(grid: Grid, background: Rgb) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        restore_on_error(Self::enter_screen(grid, background), disable_raw_mode)
    }

    fn enter_screen(grid: Grid, background: Rgb) -> Result<Self> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;

        let mut display = Self::new(CrosstermBackend::new(stderr), grid, background)?;
        display.terminal.hide_cursor().context("Failed to hide cursor")?;
        display.terminal.clear().context("Failed to clear terminal")?;
        Ok(display)
    }

    /// Give the terminal back in the state it was found
    pub fn release(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Run `restore` when `result` failed. The original error is kept.
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce() -> io::Result<()>) -> Result<T> {
    if result.is_err() {
        if let Err(err) = restore() {
            tracing::warn!(%err, "Failed to restore terminal");
        }
    }
    result
}
