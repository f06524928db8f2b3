use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::geometry::Grid;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors used to paint the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            apple: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side of one grid cell, in pixel units
    pub cell_size: i32,
    /// Arena width in pixel units
    pub screen_width: i32,
    /// Arena height in pixel units
    pub screen_height: i32,
    /// Game updates per second
    pub ticks_per_second: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            screen_width: 640,
            screen_height: 480,
            ticks_per_second: 10,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.cell_size, self.screen_width, self.screen_height)
    }

    /// Time between two game updates
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Create a small arena for testing
    pub fn small() -> Self {
        Self {
            screen_width: 200,
            screen_height: 200,
            ..Default::default()
        }
    }
}
