//! Raster images backed by Cairo image surfaces.

use super::filter::ColorFilter;
use super::geometry::{IntOffset, IntSize};
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or transforming an image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to open image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode PNG: {0}")]
    Decode(#[from] cairo::IoError),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Image surface is still borrowed: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Image has no pixels ({width}x{height})")]
    Empty { width: i32, height: i32 },
}

/// A decoded ARGB32 raster image.
///
/// Cloning is cheap: clones share the same underlying surface.
#[derive(Clone, Debug)]
pub struct ImageBitmap {
    surface: cairo::ImageSurface,
}

impl ImageBitmap {
    /// Wraps an existing image surface.
    pub fn from_surface(surface: cairo::ImageSurface) -> Result<Self, ImageError> {
        if surface.width() <= 0 || surface.height() <= 0 {
            return Err(ImageError::Empty {
                width: surface.width(),
                height: surface.height(),
            });
        }
        Ok(Self { surface })
    }

    /// Decodes a PNG held in memory.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let mut cursor = Cursor::new(bytes);
        let surface = cairo::ImageSurface::create_from_png(&mut cursor)?;
        Self::from_surface(surface)
    }

    /// Decodes a PNG file from disk.
    pub fn from_png_file(path: &Path) -> Result<Self, ImageError> {
        let mut file = File::open(path)?;
        let surface = cairo::ImageSurface::create_from_png(&mut file)?;
        log::debug!(
            "Loaded image {} ({}x{})",
            path.display(),
            surface.width(),
            surface.height()
        );
        Self::from_surface(surface)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Returns the `size` pixels starting at `offset` as an image of their own.
    ///
    /// Parts of the region outside the image come out transparent. Sampling
    /// the copy never reads neighbours from outside the region.
    pub fn cropped(&self, offset: IntOffset, size: IntSize) -> Result<Self, ImageError> {
        if offset == IntOffset::ZERO && size == IntSize::new(self.width(), self.height()) {
            return Ok(self.clone());
        }
        let target = cairo::ImageSurface::create(cairo::Format::ARgb32, size.width, size.height)?;
        {
            let ctx = cairo::Context::new(&target)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.surface, -(offset.x as f64), -(offset.y as f64))?;
            ctx.paint()?;
        }
        target.flush();
        Self::from_surface(target)
    }

    /// Returns a copy of this image with `filter` applied to every pixel.
    pub fn filtered(&self, filter: &ColorFilter) -> Result<Self, ImageError> {
        let mut target =
            cairo::ImageSurface::create(cairo::Format::ARgb32, self.width(), self.height())?;
        {
            let ctx = cairo::Context::new(&target)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.set_source_surface(&self.surface, 0.0, 0.0)?;
            ctx.paint()?;
        }
        target.flush();
        {
            let mut data = target.data()?;
            filter.apply_to_buffer(&mut data);
        }
        Ok(Self { surface: target })
    }
}
