//! Terminal output: the [`Surface`] the game paints on, and the ratatui
//! pieces that put it on screen.

pub mod canvas;
pub mod display;
pub mod renderer;
pub mod surface;

pub use canvas::Canvas;
pub use display::Display;
pub use renderer::Renderer;
pub use surface::Surface;
