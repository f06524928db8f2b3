use rand::Rng;

use super::{config::Palette, geometry::Grid, state::Cell};
use crate::render::Surface;

/// The apple the snake is chasing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Place an apple on a random cell of the grid
    pub fn random<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self::new(grid.random_cell(rng))
    }

    /// Move the apple to a random cell. The snake's body is not excluded.
    pub fn relocate<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.draw_cell(self.position, palette.apple, Some(palette.border));
    }
}
