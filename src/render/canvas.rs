use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::surface::Surface;
use crate::game::{Cell, Grid, Rgb};

/// Terminal columns used to draw one grid cell
pub const CELL_COLUMNS: u16 = 2;

/// Contents of one grid cell on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub fill: Rgb,
    pub border: Option<Rgb>,
}

impl Tile {
    fn blank(fill: Rgb) -> Self {
        Self { fill, border: None }
    }
}

/// Framebuffer holding one tile per grid cell.
///
/// The game paints into it through [`Surface`]; ratatui then draws it as a
/// widget, two terminal columns per cell.
#[derive(Debug, Clone)]
pub struct Canvas {
    grid: Grid,
    tiles: Vec<Tile>,
}

impl Canvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        Self {
            grid,
            tiles: vec![Tile::blank(background); grid.area()],
        }
    }

    /// Size of the canvas in terminal cells
    pub fn size(&self) -> (u16, u16) {
        (
            self.grid.columns() as u16 * CELL_COLUMNS,
            self.grid.rows() as u16,
        )
    }

    /// Tile at a column and row of the grid
    pub fn tile(&self, column: i32, row: i32) -> Option<Tile> {
        if column < 0 || row < 0 || column >= self.grid.columns() || row >= self.grid.rows() {
            return None;
        }
        self.tiles
            .get((row * self.grid.columns() + column) as usize)
            .copied()
    }

    fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.grid.contains(cell) {
            return None;
        }
        let column = cell.x / self.grid.cell_size;
        let row = cell.y / self.grid.cell_size;
        Some((row * self.grid.columns() + column) as usize)
    }
}

impl Surface for Canvas {
    fn fill(&mut self, color: Rgb) {
        self.tiles.fill(Tile::blank(color));
    }

    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Option<Rgb>) {
        if let Some(index) = self.index_of(cell) {
            self.tiles[index] = Tile { fill, border };
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.grid.rows() {
            for column in 0..self.grid.columns() {
                let x = area.x + column as u16 * CELL_COLUMNS;
                let y = area.y + row as u16;
                if x + CELL_COLUMNS > area.right() || y >= area.bottom() {
                    continue;
                }

                let Some(tile) = self.tile(column, row) else {
                    continue;
                };
                let style = Style::default().bg(color(tile.fill));
                match tile.border {
                    Some(border) => buf.set_string(x, y, "[]", style.fg(color(border))),
                    None => buf.set_string(x, y, "  ", style),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Palette;

    fn canvas() -> Canvas {
        Canvas::new(Grid::new(20, 100, 60), Rgb(0, 0, 0))
    }

    #[test]
    fn test_size() {
        assert_eq!(canvas().size(), (10, 3));
    }

    #[test]
    fn test_draw_cell_maps_pixels_to_tiles() {
        let palette = Palette::default();
        let mut canvas = canvas();
        canvas.draw_cell(Cell::new(40, 20), palette.snake, Some(palette.border));

        assert_eq!(
            canvas.tile(2, 1),
            Some(Tile {
                fill: palette.snake,
                border: Some(palette.border),
            })
        );
        assert_eq!(canvas.tile(0, 0), Some(Tile::blank(Rgb(0, 0, 0))));
        assert_eq!(canvas.tile(5, 0), None);
    }

    #[test]
    fn test_off_grid_cells_ignored() {
        let mut canvas = canvas();
        canvas.draw_cell(Cell::new(100, 0), Rgb(1, 2, 3), None);
        canvas.draw_cell(Cell::new(-20, 0), Rgb(1, 2, 3), None);

        for row in 0..3 {
            for column in 0..5 {
                assert_eq!(canvas.tile(column, row), Some(Tile::blank(Rgb(0, 0, 0))));
            }
        }
    }

    #[test]
    fn test_fill_clears_tiles() {
        let mut canvas = canvas();
        canvas.draw_cell(Cell::new(0, 0), Rgb(0, 255, 0), Some(Rgb(1, 1, 1)));
        canvas.fill(Rgb(9, 9, 9));
        assert_eq!(canvas.tile(0, 0), Some(Tile::blank(Rgb(9, 9, 9))));
    }

    #[test]
    fn test_widget_output() {
        let mut canvas = canvas();
        canvas.draw_cell(Cell::new(20, 0), Rgb(255, 0, 0), Some(Rgb(93, 216, 228)));

        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        assert_eq!(buf[(2, 0)].symbol(), "[");
        assert_eq!(buf[(3, 0)].symbol(), "]");
        assert_eq!(buf[(2, 0)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(2, 0)].fg, Color::Rgb(93, 216, 228));
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_widget_clips_to_area() {
        let canvas = canvas();
        let area = Rect::new(0, 0, 5, 2);
        let mut buf = Buffer::empty(area);
        (&canvas).render(area, &mut buf);

        // Only two whole cells fit per row
        assert_eq!(buf[(2, 1)].bg, Color::Rgb(0, 0, 0));
        assert_eq!(buf[(4, 1)].bg, Color::Reset);
    }
}
