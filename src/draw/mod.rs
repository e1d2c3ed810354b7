//! Rendering primitives and the drawing surface API (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas demo:
//! - [`Color`]: RGBA color representation with the toolkit's palette constants
//! - [`Dp`], [`Sp`], [`Density`]: density-independent units
//! - [`Brush`], [`DrawStyle`], [`Path`], [`Outline`]: what and how to paint
//! - [`ImageBitmap`] and [`ColorFilter`]: raster images and pixel filters
//! - [`DrawScope`]: the sized drawing area every canvas paints into

pub mod brush;
pub mod color;
pub mod filter;
pub mod font;
pub mod geometry;
pub mod image;
pub mod outline;
pub mod path;
pub mod render;
pub mod style;
pub mod unit;

// Re-export commonly used types at module level
pub use brush::Brush;
pub use color::Color;
pub use filter::ColorFilter;
pub use font::FontDescriptor;
pub use geometry::{CornerRadius, IntOffset, IntSize, Offset, Rect, RoundRect, Size};
pub use image::{ImageBitmap, ImageError};
pub use outline::Outline;
pub use path::Path;
pub use render::DrawScope;
pub use style::{DrawStyle, PointMode, Stroke, StrokeCap, StrokeJoin};
pub use unit::{Density, Dp, DpSize, Sp};

pub use color::{
    BLACK, BLUE, CYAN, DARK_GRAY, GRAY, GREEN, LIGHT_GRAY, MAGENTA, RED, TRANSPARENT, WHITE,
    YELLOW,
};
