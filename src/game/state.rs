use std::collections::HashSet;

use super::{config::Palette, direction::Direction, geometry::Grid};
use crate::render::Surface;

/// A cell on the game grid, in pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Direction to take on the next update
    pub next_direction: Option<Direction>,
    /// Tail cell vacated by the latest advance
    pub last: Option<Cell>,
}

impl Snake {
    /// Create a single-cell snake
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            next_direction: None,
            last: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Queue a turn for the next update.
    ///
    /// The turn is rejected when it reverses the current direction. Any
    /// direction already queued is not consulted.
    pub fn set_next_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.next_direction = Some(direction);
        true
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    /// Move one cell in the current direction, wrapping at the arena edges
    pub fn advance(&mut self, grid: &Grid) {
        let (axis, step) = self.direction.axis_step();
        let new_head = grid.wrap(self.head(), axis, step);

        self.last = self.body.last().copied();
        // Follow the leader: every segment takes the place of the one ahead.
        self.body.rotate_right(1);
        self.body[0] = new_head;
    }

    /// True if any two segments share a cell
    pub fn has_self_collision(&self) -> bool {
        let distinct: HashSet<&Cell> = self.body.iter().collect();
        distinct.len() < self.body.len()
    }

    /// Extend the tail back onto the cell it vacated on the last advance
    pub fn grow(&mut self) {
        if let Some(last) = self.last {
            self.body.push(last);
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        for &cell in &self.body[1..] {
            surface.draw_cell(cell, palette.snake, Some(palette.border));
        }
        surface.draw_cell(self.head(), palette.snake, Some(palette.border));

        if let Some(last) = self.last {
            surface.draw_cell(last, palette.background, None);
        }
    }
}
