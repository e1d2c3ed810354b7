//! Cairo-backed drawing scope: the immediate-mode canvas API.

use super::brush::Brush;
use super::color::Color;
use super::filter::ColorFilter;
use super::font::FontDescriptor;
use super::geometry::{CornerRadius, IntOffset, IntSize, Offset, Rect, RoundRect, Size};
use super::image::{ImageBitmap, ImageError};
use super::outline::Outline;
use super::path::Path;
use super::style::{DrawStyle, PointMode, Stroke, StrokeCap};
use super::unit::{Density, Dp, Sp};
use std::f64::consts::PI;

/// A sized drawing area over a Cairo context.
///
/// Coordinates are pixels relative to the scope's origin, which the caller
/// positions by translating the context. Nothing is clipped to `size`.
/// Every draw call saves and restores the context, so state never leaks
/// between calls.
pub struct DrawScope<'a> {
    ctx: &'a cairo::Context,
    size: Size,
    density: Density,
}

impl<'a> DrawScope<'a> {
    pub fn new(ctx: &'a cairo::Context, size: Size, density: Density) -> Self {
        Self { ctx, size, density }
    }

    /// Size of the drawing area in pixels.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn center(&self) -> Offset {
        self.size.center()
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn context(&self) -> &cairo::Context {
        self.ctx
    }

    pub fn dp_to_px(&self, dp: Dp) -> f64 {
        self.density.dp_to_px(dp)
    }

    pub fn sp_to_px(&self, sp: Sp) -> f64 {
        self.density.sp_to_px(sp)
    }

    /// Size remaining to the right of and below `top_left`.
    fn remaining_size(&self, top_left: Offset) -> Size {
        Size::new(
            self.size.width - top_left.x,
            self.size.height - top_left.y,
        )
    }

    fn with_saved_state(&self, draw: impl FnOnce(&cairo::Context)) {
        if self.ctx.save().is_err() {
            log::warn!("Cairo context is in an error state, skipping draw call");
            return;
        }
        draw(self.ctx);
        let _ = self.ctx.restore();
    }

    /// Draws a circle. Radius defaults to half the smaller side, center to the scope center.
    pub fn draw_circle(
        &self,
        brush: &Brush,
        radius: Option<f64>,
        center: Option<Offset>,
        style: &DrawStyle,
    ) {
        let radius = radius.unwrap_or_else(|| self.size.min_dimension() / 2.0);
        let center = center.unwrap_or_else(|| self.center());
        if radius <= 0.0 {
            return;
        }

        self.with_saved_state(|ctx| {
            brush.apply_to(ctx, self.size);
            ctx.new_path();
            ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
            ctx.close_path();
            style.finish(ctx);
        });
    }

    /// Draws a rectangle. Size defaults to the remainder of the scope.
    pub fn draw_rect(&self, brush: &Brush, top_left: Offset, size: Option<Size>, style: &DrawStyle) {
        let size = size.unwrap_or_else(|| self.remaining_size(top_left));

        self.with_saved_state(|ctx| {
            brush.apply_to(ctx, self.size);
            ctx.new_path();
            ctx.rectangle(top_left.x, top_left.y, size.width, size.height);
            style.finish(ctx);
        });
    }

    /// Draws a rectangle with elliptical corners.
    pub fn draw_round_rect(
        &self,
        brush: &Brush,
        top_left: Offset,
        size: Option<Size>,
        corner_radius: CornerRadius,
        style: &DrawStyle,
    ) {
        let size = size.unwrap_or_else(|| self.remaining_size(top_left));
        let round = RoundRect::new(Rect::from_offset_size(top_left, size), corner_radius);

        self.with_saved_state(|ctx| {
            brush.apply_to(ctx, self.size);
            append_round_rect(ctx, &round);
            style.finish(ctx);
        });
    }

    /// Draws a straight stroked segment.
    pub fn draw_line(
        &self,
        color: Color,
        start: Offset,
        end: Offset,
        stroke_width: f64,
        cap: StrokeCap,
    ) {
        let stroke = Stroke {
            width: stroke_width,
            cap,
            ..Stroke::default()
        };

        self.with_saved_state(|ctx| {
            color.apply_to(ctx);
            ctx.new_path();
            ctx.move_to(start.x, start.y);
            ctx.line_to(end.x, end.y);
            DrawStyle::Stroke(stroke).finish(ctx);
        });
    }

    /// Draws an ellipse inscribed in the given rectangle.
    pub fn draw_oval(&self, brush: &Brush, top_left: Offset, size: Option<Size>, style: &DrawStyle) {
        let size = size.unwrap_or_else(|| self.remaining_size(top_left));
        let bounds = Rect::from_offset_size(top_left, size);

        self.with_saved_state(|ctx| {
            brush.apply_to(ctx, self.size);
            ctx.new_path();
            if append_elliptical_arc(ctx, &bounds, 0.0, 360.0, false) {
                ctx.close_path();
                style.finish(ctx);
            }
        });
    }

    /// Draws a section of the oval inscribed in the given rectangle.
    ///
    /// Angles are in degrees; 0 is 3 o'clock and positive sweeps run
    /// clockwise. With `use_center` the arc is closed through the oval's
    /// center, producing a wedge.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &self,
        color: Color,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
        top_left: Offset,
        size: Option<Size>,
        style: &DrawStyle,
    ) {
        let size = size.unwrap_or_else(|| self.remaining_size(top_left));
        let bounds = Rect::from_offset_size(top_left, size);

        self.with_saved_state(|ctx| {
            color.apply_to(ctx);
            ctx.new_path();
            if append_elliptical_arc(ctx, &bounds, start_angle, sweep_angle, use_center) {
                style.finish(ctx);
            }
        });
    }

    /// Draws an arbitrary path.
    pub fn draw_path(&self, path: &Path, brush: &Brush, style: &DrawStyle) {
        if path.is_empty() {
            return;
        }

        self.with_saved_state(|ctx| {
            brush.apply_to(ctx, self.size);
            path.append_to(ctx);
            style.finish(ctx);
        });
    }

    /// Draws a list of points according to `mode`.
    ///
    /// In [`PointMode::Points`] each point is a dot `stroke_width` across:
    /// a disc for round caps, a square otherwise. [`PointMode::Lines`] joins
    /// consecutive pairs (a trailing odd point is ignored) and
    /// [`PointMode::Polygon`] joins every point in order.
    pub fn draw_points(
        &self,
        points: &[Offset],
        mode: PointMode,
        color: Color,
        stroke_width: f64,
        cap: StrokeCap,
    ) {
        if points.is_empty() {
            return;
        }
        let stroke = Stroke {
            width: stroke_width,
            cap,
            ..Stroke::default()
        };

        self.with_saved_state(|ctx| {
            color.apply_to(ctx);
            ctx.new_path();
            match mode {
                PointMode::Points => {
                    let half = stroke.effective_width() / 2.0;
                    for point in points {
                        if cap == StrokeCap::Round {
                            ctx.new_sub_path();
                            ctx.arc(point.x, point.y, half, 0.0, 2.0 * PI);
                            ctx.close_path();
                        } else {
                            ctx.rectangle(point.x - half, point.y - half, half * 2.0, half * 2.0);
                        }
                    }
                    let _ = ctx.fill();
                }
                PointMode::Lines => {
                    for pair in points.chunks_exact(2) {
                        ctx.move_to(pair[0].x, pair[0].y);
                        ctx.line_to(pair[1].x, pair[1].y);
                    }
                    DrawStyle::Stroke(stroke).finish(ctx);
                }
                PointMode::Polygon => {
                    ctx.move_to(points[0].x, points[0].y);
                    for point in &points[1..] {
                        ctx.line_to(point.x, point.y);
                    }
                    DrawStyle::Stroke(stroke).finish(ctx);
                }
            }
        });
    }

    /// Draws the shape described by an outline.
    pub fn draw_outline(&self, outline: &Outline, color: Color, style: &DrawStyle) {
        let brush = Brush::solid(color);
        match outline {
            Outline::Rectangle(rect) => {
                self.draw_rect(&brush, rect.top_left(), Some(rect.size()), style)
            }
            Outline::Rounded(round) => self.draw_round_rect(
                &brush,
                round.rect.top_left(),
                Some(round.rect.size()),
                round.radius,
                style,
            ),
            Outline::Generic(path) => self.draw_path(path, &brush, style),
        }
    }

    /// Draws a region of an image scaled into a destination rectangle.
    ///
    /// `src_size` defaults to the part of the image right of and below
    /// `src_offset`; `dst_size` defaults to `src_size`. The optional color
    /// filter is applied to the image pixels before compositing.
    pub fn draw_image(
        &self,
        image: &ImageBitmap,
        src_offset: IntOffset,
        src_size: Option<IntSize>,
        dst_offset: IntOffset,
        dst_size: Option<IntSize>,
        color_filter: Option<&ColorFilter>,
    ) -> Result<(), ImageError> {
        let src_size = src_size.unwrap_or_else(|| {
            IntSize::new(image.width() - src_offset.x, image.height() - src_offset.y)
        });
        let dst_size = dst_size.unwrap_or(src_size);
        if src_size.width <= 0 || src_size.height <= 0 || dst_size.width <= 0 || dst_size.height <= 0
        {
            return Ok(());
        }

        let region = image.cropped(src_offset, src_size)?;
        let source = match color_filter {
            Some(filter) => region.filtered(filter)?,
            None => region,
        };

        let mut result = Ok(());
        self.with_saved_state(|ctx| {
            ctx.rectangle(
                dst_offset.x as f64,
                dst_offset.y as f64,
                dst_size.width as f64,
                dst_size.height as f64,
            );
            ctx.clip();
            ctx.translate(dst_offset.x as f64, dst_offset.y as f64);
            ctx.scale(
                dst_size.width as f64 / src_size.width as f64,
                dst_size.height as f64 / src_size.height as f64,
            );
            result = ctx
                .set_source_surface(source.surface(), 0.0, 0.0)
                .map_err(ImageError::from);
            if result.is_ok() {
                let pattern = ctx.source();
                pattern.set_filter(cairo::Filter::Good);
                pattern.set_extend(cairo::Extend::Pad);
                let _ = ctx.paint();
            }
        });
        result
    }

    /// Draws a single line of text with its baseline starting at `origin`.
    pub fn draw_text(
        &self,
        text: &str,
        origin: Offset,
        text_size_px: f64,
        color: Color,
        font: &FontDescriptor,
    ) {
        if text.is_empty() || text_size_px <= 0.0 {
            return;
        }

        self.with_saved_state(|ctx| {
            ctx.set_antialias(cairo::Antialias::Best);

            let layout = pangocairo::functions::create_layout(ctx);
            layout.set_font_description(Some(&font.to_pango_description(text_size_px)));
            layout.set_text(text);

            // Pango positions layouts by their top-left corner.
            let baseline = layout.baseline() as f64 / pango::SCALE as f64;
            ctx.move_to(origin.x, origin.y - baseline);
            color.apply_to(ctx);
            pangocairo::functions::show_layout(ctx, &layout);
        });
    }
}

/// Appends a rounded rectangle sub-path, falling back to a plain rectangle for zero radii.
fn append_round_rect(ctx: &cairo::Context, round: &RoundRect) {
    let rect = round.rect;
    let radius = round.effective_radius();
    ctx.new_path();

    if radius.x <= 0.0 || radius.y <= 0.0 {
        ctx.rectangle(rect.left, rect.top, rect.width(), rect.height());
        return;
    }

    let corners = [
        (rect.right - radius.x, rect.top + radius.y, -PI / 2.0),
        (rect.right - radius.x, rect.bottom - radius.y, 0.0),
        (rect.left + radius.x, rect.bottom - radius.y, PI / 2.0),
        (rect.left + radius.x, rect.top + radius.y, PI),
    ];

    ctx.new_sub_path();
    for (cx, cy, start) in corners {
        let _ = ctx.save();
        ctx.translate(cx, cy);
        ctx.scale(radius.x, radius.y);
        ctx.arc(0.0, 0.0, 1.0, start, start + PI / 2.0);
        let _ = ctx.restore();
    }
    ctx.close_path();
}

/// Appends an arc of the oval inscribed in `bounds` to the current path.
///
/// Returns `false` when the oval is degenerate and nothing was appended.
fn append_elliptical_arc(
    ctx: &cairo::Context,
    bounds: &Rect,
    start_degrees: f64,
    sweep_degrees: f64,
    use_center: bool,
) -> bool {
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;
    if rx <= 0.0 || ry <= 0.0 || sweep_degrees == 0.0 {
        return false;
    }

    let sweep = sweep_degrees.clamp(-360.0, 360.0);
    let start = start_degrees.to_radians();
    let end = (start_degrees + sweep).to_radians();
    let center = bounds.center();

    // The scale is undone before stroking so line widths stay uniform.
    let _ = ctx.save();
    ctx.translate(center.x, center.y);
    ctx.scale(rx, ry);
    if use_center {
        ctx.move_to(0.0, 0.0);
    } else {
        ctx.new_sub_path();
    }
    if sweep > 0.0 {
        ctx.arc(0.0, 0.0, 1.0, start, end);
    } else {
        ctx.arc_negative(0.0, 0.0, 1.0, start, end);
    }
    if use_center {
        ctx.close_path();
    }
    let _ = ctx.restore();
    true
}
