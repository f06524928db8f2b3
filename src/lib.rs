//! Grid Snake - a single-player Snake game for the terminal
//!
//! This library provides:
//! - Core game logic (game module)
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
