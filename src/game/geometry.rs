use rand::Rng;

use super::state::Cell;

/// Axis of movement on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Arena geometry: cell size and pixel dimensions.
///
/// Cells are addressed in pixel units, so every valid coordinate is a
/// multiple of `cell_size` in `[0, width)` × `[0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cell_size: i32,
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(cell_size: i32, width: i32, height: i32) -> Self {
        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Number of cells per row
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells per column
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells in the arena
    pub fn area(&self) -> usize {
        (self.columns() * self.rows()) as usize
    }

    /// Check if a cell lies on the grid
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width
            && cell.y >= 0
            && cell.y < self.height
            && cell.x % self.cell_size == 0
            && cell.y % self.cell_size == 0
    }

    /// The cell the snake starts on
    pub fn center(&self) -> Cell {
        Cell::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    /// Step `cell` by `delta` cells along `axis`, wrapping around the arena edges
    pub fn wrap(&self, cell: Cell, axis: Axis, delta: i32) -> Cell {
        let step = delta * self.cell_size;
        match axis {
            Axis::X => Cell::new((cell.x + step).rem_euclid(self.width), cell.y),
            Axis::Y => Cell::new(cell.x, (cell.y + step).rem_euclid(self.height)),
        }
    }

    /// Pick a cell uniformly over the whole grid
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(
            rng.gen_range(0..self.columns()) * self.cell_size,
            rng.gen_range(0..self.rows()) * self.cell_size,
        )
    }
}
