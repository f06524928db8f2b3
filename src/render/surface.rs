use crate::game::{Cell, Rgb};

/// The drawing capability the game needs from a display.
///
/// Cells are given in pixel units; a surface decides how a grid cell maps
/// onto its own coordinates.
pub trait Surface {
    /// Paint the whole surface in one color
    fn fill(&mut self, color: Rgb);

    /// Paint one grid cell, optionally outlined with a 1-unit border
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>);
}
