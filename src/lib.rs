//! Library exports for the canvas drawing demo.
//!
//! Exposes the drawing surface API, the demo canvases, the column layout and
//! the screen that ties them together, so tests and other tools can render
//! individual canvases or the whole screen onto their own Cairo surfaces.

pub mod config;
pub mod demo;
pub mod draw;
pub mod export;
pub mod layout;
pub mod screen;
pub mod util;

pub use config::Config;
pub use screen::MainScreen;
