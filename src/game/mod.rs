//! Core game logic module for Snake
//!
//! This module contains the rules of the game: movement with wraparound,
//! growth and self-collision. Drawing goes through the [`Surface`] trait so
//! the logic itself does no I/O.
//!
//! [`Surface`]: crate::render::Surface

pub mod apple;
pub mod config;
pub mod direction;
pub mod engine;
pub mod geometry;
pub mod state;

// Re-export commonly used types
pub use apple::Apple;
pub use config::{GameConfig, Palette, Rgb};
pub use direction::Direction;
pub use engine::{Game, GameStatus, TickOutcome};
pub use geometry::{Axis, Grid};
pub use state::{Cell, Snake};
