//! The single demo screen: a padded column of the twelve canvases.

use crate::config::Config;
use crate::demo::{self, Canvas};
use crate::draw::{
    BLACK, BLUE, Color, CornerRadius, CYAN, DARK_GRAY, Density, DrawScope, Dp, GREEN, ImageBitmap,
    IntSize, LIGHT_GRAY, MAGENTA, RED, Sp, YELLOW,
};
use crate::export;
use crate::layout::{Column, Placement};
use anyhow::{Context, Result};
use log::{debug, info};

/// Bitmap drawn by the image canvas unless the config points elsewhere.
pub const BUNDLED_IMAGE: &[u8] = include_bytes!("../assets/android.png");

/// Text drawn by the text canvas.
pub const DEMO_TEXT: &str = "Hello Canvas";

/// One laid-out canvas, as reported by [`MainScreen::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub name: &'static str,
    pub placement: Placement,
}

/// The demo screen: viewport, density, background and the ordered canvases.
pub struct MainScreen {
    viewport: IntSize,
    density: Density,
    background: Color,
    column: Column,
    canvases: Vec<Canvas>,
}

impl MainScreen {
    /// Builds the demo screen described by `config`.
    ///
    /// # Errors
    /// Returns an error if the configured image cannot be decoded.
    pub fn new(config: &Config) -> Result<Self> {
        let density = Density::new(config.screen.density, config.screen.font_scale);
        let image = load_image(config)?;

        let column = Column::new(
            density.dp_round_to_px(Dp(config.layout.padding_dp)),
            config.layout.arrangement,
            config.layout.alignment,
        );

        Ok(Self::with_canvases(
            IntSize::new(config.screen.width, config.screen.height),
            density,
            config.screen.background.to_color(),
            column,
            demo_canvases(image),
        ))
    }

    pub fn with_canvases(
        viewport: IntSize,
        density: Density,
        background: Color,
        column: Column,
        canvases: Vec<Canvas>,
    ) -> Self {
        Self {
            viewport,
            density,
            background,
            column,
            canvases,
        }
    }

    /// Lays out every canvas and returns them in drawing order.
    pub fn cells(&self) -> Vec<Cell> {
        let sizes: Vec<IntSize> = self
            .canvases
            .iter()
            .map(|canvas| {
                let size = canvas.min_size();
                IntSize::new(
                    self.density.dp_round_to_px(size.width),
                    self.density.dp_round_to_px(size.height),
                )
            })
            .collect();

        self.canvases
            .iter()
            .zip(self.column.place(self.viewport, &sizes))
            .map(|(canvas, placement)| Cell {
                name: canvas.name(),
                placement,
            })
            .collect()
    }

    /// Paints the background and every canvas onto `ctx`.
    pub fn render_to(&self, ctx: &cairo::Context) {
        let _ = ctx.save();
        self.background.apply_to(ctx);
        ctx.set_operator(cairo::Operator::Source);
        let _ = ctx.paint();
        let _ = ctx.restore();

        for (canvas, cell) in self.canvases.iter().zip(self.cells()) {
            let placement = cell.placement;
            debug!(
                "Drawing {} at ({}, {}) size {}x{}",
                cell.name,
                placement.offset.x,
                placement.offset.y,
                placement.size.width,
                placement.size.height
            );

            let _ = ctx.save();
            ctx.translate(placement.offset.x as f64, placement.offset.y as f64);
            let scope = DrawScope::new(ctx, placement.size.to_size(), self.density);
            canvas.draw(&scope);
            let _ = ctx.restore();
        }
    }

    /// Renders the whole screen into a new image surface of the viewport size.
    pub fn render(&self) -> Result<cairo::ImageSurface> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            self.viewport.width,
            self.viewport.height,
        )
        .context("Failed to create render surface")?;

        {
            let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
            self.render_to(&ctx);
        }
        surface.flush();

        info!(
            "Rendered {} canvases at {}x{}",
            self.canvases.len(),
            self.viewport.width,
            self.viewport.height
        );
        Ok(surface)
    }
}

/// The demo canvases in screen order.
pub fn demo_canvases(image: ImageBitmap) -> Vec<Canvas> {
    vec![
        demo::simple_circle(GREEN),
        demo::circle_with_gradient(GREEN, DARK_GRAY),
        demo::simple_rect(DARK_GRAY),
        demo::simple_round_rect(LIGHT_GRAY, CornerRadius::new(10.0, 10.0)),
        demo::simple_line(BLUE),
        demo::simple_oval(MAGENTA),
        demo::simple_arc(CYAN),
        demo::simple_path(BLACK),
        demo::simple_points(RED),
        demo::simple_outline(YELLOW),
        demo::simple_image(image),
        demo::simple_text(DEMO_TEXT, Sp(12.0)),
    ]
}

/// Decodes the configured image, or the bundled bitmap when none is set.
fn load_image(config: &Config) -> Result<ImageBitmap> {
    match &config.demo.image_path {
        Some(path) => {
            let path = export::expand_tilde(path);
            info!("Loading image from {}", path.display());
            ImageBitmap::from_png_file(&path)
                .with_context(|| format!("Failed to load image from {}", path.display()))
        }
        None => ImageBitmap::from_png_bytes(BUNDLED_IMAGE).context("Failed to decode bundled image"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_screen_has_twelve_cells_in_order() {
        let screen = MainScreen::new(&Config::default()).unwrap();
        let names: Vec<&str> = screen.cells().iter().map(|cell| cell.name).collect();
        assert_eq!(
            names,
            vec![
                "simple_circle",
                "circle_with_gradient",
                "simple_rect",
                "simple_round_rect",
                "simple_line",
                "simple_oval",
                "simple_arc",
                "simple_path",
                "simple_points",
                "simple_outline",
                "simple_image",
                "simple_text",
            ]
        );
    }

    #[test]
    fn cells_are_centered_and_spread_over_the_viewport() {
        let mut config = Config::default();
        config.screen.width = 400;
        config.screen.height = 2000;
        config.screen.density = 2.0;
        let screen = MainScreen::new(&config).unwrap();
        let cells = screen.cells();

        let padding = 16;
        assert_eq!(cells[0].placement.offset.y, padding);
        let last = cells.last().unwrap().placement;
        assert_eq!(last.offset.y + last.size.height, 2000 - padding);
        for cell in &cells {
            let placement = cell.placement;
            assert_eq!(placement.offset.x, (400 - placement.size.width) / 2);
        }
        assert_eq!(cells[5].placement.size, IntSize::new(64, 128));
    }

    #[test]
    fn bundled_image_decodes() {
        let image = ImageBitmap::from_png_bytes(BUNDLED_IMAGE).unwrap();
        assert!(image.width() > 0);
        assert!(image.height() > 0);
    }

    #[test]
    fn missing_image_path_is_an_error() {
        let mut config = Config::default();
        config.demo.image_path = Some("/nonexistent/android.png".to_string());
        assert!(MainScreen::new(&config).is_err());
    }
}
