//! The twelve demo canvases.
//!
//! Each builder returns a fixed-size [`Canvas`] whose painter draws one
//! primitive with literal parameters. The canvases share nothing and are
//! painted independently, once per render.

use crate::draw::{
    Brush, Color, ColorFilter, CornerRadius, DrawScope, DrawStyle, Dp, DpSize, FontDescriptor,
    ImageBitmap, IntOffset, IntSize, Offset, Outline, Path, PointMode, Rect, Sp, StrokeCap, BLACK,
    RED, YELLOW,
};

/// Size every demo canvas gets unless it asks for another one.
pub const DEFAULT_MIN_SIZE: DpSize = DpSize::new(Dp(32.0), Dp(32.0));

/// Stroke width shared by the outlined demos.
const STROKE_WIDTH: Dp = Dp(2.0);

type Painter = Box<dyn Fn(&DrawScope<'_>)>;

/// A fixed-size drawing cell with its painter.
pub struct Canvas {
    name: &'static str,
    min_size: DpSize,
    painter: Painter,
}

impl Canvas {
    pub fn new(
        name: &'static str,
        min_size: DpSize,
        painter: impl Fn(&DrawScope<'_>) + 'static,
    ) -> Self {
        Self {
            name,
            min_size,
            painter: Box::new(painter),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min_size(&self) -> DpSize {
        self.min_size
    }

    /// Runs the painter against a scope already sized and positioned for this canvas.
    pub fn draw(&self, scope: &DrawScope<'_>) {
        (self.painter)(scope);
    }
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("name", &self.name)
            .field("min_size", &self.min_size)
            .finish_non_exhaustive()
    }
}

pub fn simple_circle(color: Color) -> Canvas {
    Canvas::new("simple_circle", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_circle(&Brush::solid(color), None, None, &DrawStyle::Fill);
    })
}

pub fn circle_with_gradient(center_color: Color, outer_color: Color) -> Canvas {
    let brush = Brush::radial_gradient(vec![center_color, outer_color]);
    Canvas::new("circle_with_gradient", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_circle(&brush, None, None, &DrawStyle::Fill);
    })
}

pub fn simple_rect(color: Color) -> Canvas {
    Canvas::new("simple_rect", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_rect(&Brush::solid(color), Offset::ZERO, None, &DrawStyle::Fill);
    })
}

/// Rounded rectangle; the corner radius is in pixels, not dp.
pub fn simple_round_rect(color: Color, corner_radius: CornerRadius) -> Canvas {
    Canvas::new("simple_round_rect", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_round_rect(
            &Brush::solid(color),
            Offset::ZERO,
            None,
            corner_radius,
            &DrawStyle::Fill,
        );
    })
}

/// Diagonal from the top-left corner to (width, width).
pub fn simple_line(color: Color) -> Canvas {
    Canvas::new("simple_line", DEFAULT_MIN_SIZE, move |scope| {
        let width = scope.size().width;
        scope.draw_line(
            color,
            Offset::ZERO,
            Offset::new(width, width),
            scope.dp_to_px(STROKE_WIDTH),
            StrokeCap::Butt,
        );
    })
}

pub fn simple_oval(color: Color) -> Canvas {
    Canvas::new(
        "simple_oval",
        DpSize::new(Dp(32.0), Dp(64.0)),
        move |scope| {
            scope.draw_oval(&Brush::solid(color), Offset::ZERO, None, &DrawStyle::Fill);
        },
    )
}

/// Upper half of the inscribed circle, stroked.
pub fn simple_arc(color: Color) -> Canvas {
    Canvas::new("simple_arc", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_arc(
            color,
            180.0,
            180.0,
            false,
            Offset::ZERO,
            None,
            &DrawStyle::stroke(scope.dp_to_px(STROKE_WIDTH)),
        );
    })
}

/// Closed bow-tie shape: straight top and bottom edges, sides curving in
/// towards the center.
pub fn simple_path(color: Color) -> Canvas {
    Canvas::new("simple_path", DEFAULT_MIN_SIZE, move |scope| {
        let size = scope.size();
        let mut path = Path::new();
        path.line_to(size.width, 0.0)
            .quadratic_bezier_to(size.width / 2.0, size.height / 2.0, size.width, size.height)
            .line_to(0.0, size.height)
            .quadratic_bezier_to(size.width / 2.0, size.height / 2.0, 0.0, 0.0)
            .close();

        scope.draw_path(
            &path,
            &Brush::solid(color),
            &DrawStyle::stroke(scope.dp_to_px(STROKE_WIDTH)),
        );
    })
}

/// The four corners and the center as individual dots.
pub fn simple_points(color: Color) -> Canvas {
    Canvas::new("simple_points", DEFAULT_MIN_SIZE, move |scope| {
        let size = scope.size();
        let points = [
            Offset::new(0.0, 0.0),
            Offset::new(size.width, 0.0),
            Offset::new(size.width, size.height),
            Offset::new(0.0, size.height),
            Offset::new(size.width / 2.0, size.height / 2.0),
        ];
        scope.draw_points(
            &points,
            PointMode::Points,
            color,
            scope.dp_to_px(STROKE_WIDTH),
            StrokeCap::Butt,
        );
    })
}

pub fn simple_outline(color: Color) -> Canvas {
    Canvas::new("simple_outline", DEFAULT_MIN_SIZE, move |scope| {
        let size = scope.size();
        let outline = Outline::Rectangle(Rect::new(0.0, 0.0, size.width, size.height));
        scope.draw_outline(
            &outline,
            color,
            &DrawStyle::stroke(scope.dp_to_px(STROKE_WIDTH)),
        );
    })
}

/// The bitmap squeezed into a width-by-width square, tinted by a lighting
/// filter that multiplies with yellow and adds red.
pub fn simple_image(image: ImageBitmap) -> Canvas {
    let filter = ColorFilter::lighting(YELLOW, RED);
    Canvas::new("simple_image", DEFAULT_MIN_SIZE, move |scope| {
        let side = scope.size().width as i32;
        if let Err(err) = scope.draw_image(
            &image,
            IntOffset::ZERO,
            None,
            IntOffset::ZERO,
            Some(IntSize::new(side, side)),
            Some(&filter),
        ) {
            log::warn!("Failed to draw image: {}", err);
        }
    })
}

/// Black text with its baseline on the top edge of the canvas, so the
/// glyphs extend upwards out of the cell.
pub fn simple_text(text: impl Into<String>, text_size: Sp) -> Canvas {
    let text = text.into();
    let font = FontDescriptor::default();
    Canvas::new("simple_text", DEFAULT_MIN_SIZE, move |scope| {
        scope.draw_text(
            &text,
            Offset::ZERO,
            scope.sp_to_px(text_size),
            BLACK,
            &font,
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::GREEN;

    #[test]
    fn default_canvases_are_square() {
        let canvas = simple_circle(GREEN);
        assert_eq!(canvas.name(), "simple_circle");
        assert_eq!(canvas.min_size(), DEFAULT_MIN_SIZE);
    }

    #[test]
    fn oval_is_twice_as_tall() {
        let canvas = simple_oval(GREEN);
        assert_eq!(canvas.min_size(), DpSize::new(Dp(32.0), Dp(64.0)));
        assert!(format!("{:?}", canvas).contains("simple_oval"));
    }
}
