//! Fill/stroke styles and point modes.

/// Line end shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl StrokeCap {
    fn to_cairo(self) -> cairo::LineCap {
        match self {
            StrokeCap::Butt => cairo::LineCap::Butt,
            StrokeCap::Round => cairo::LineCap::Round,
            StrokeCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Corner shape where two stroked segments meet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl StrokeJoin {
    fn to_cairo(self) -> cairo::LineJoin {
        match self {
            StrokeJoin::Miter => cairo::LineJoin::Miter,
            StrokeJoin::Round => cairo::LineJoin::Round,
            StrokeJoin::Bevel => cairo::LineJoin::Bevel,
        }
    }
}

/// Outline stroke parameters. A width of 0 is a one-pixel hairline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
    pub miter: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 0.0,
            cap: StrokeCap::Butt,
            join: StrokeJoin::Miter,
            miter: 4.0,
        }
    }
}

impl Stroke {
    /// Default stroke with the given width.
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Width actually handed to Cairo.
    pub fn effective_width(&self) -> f64 {
        if self.width > 0.0 { self.width } else { 1.0 }
    }

    /// Configures the Cairo context's line state for this stroke.
    pub fn apply_to(&self, ctx: &cairo::Context) {
        ctx.set_line_width(self.effective_width());
        ctx.set_line_cap(self.cap.to_cairo());
        ctx.set_line_join(self.join.to_cairo());
        ctx.set_miter_limit(self.miter);
    }
}

/// Whether a shape is filled or outlined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DrawStyle {
    #[default]
    Fill,
    Stroke(Stroke),
}

impl DrawStyle {
    pub fn stroke(width: f64) -> Self {
        DrawStyle::Stroke(Stroke::with_width(width))
    }

    /// Fills or strokes the current Cairo path, consuming it.
    pub fn finish(&self, ctx: &cairo::Context) {
        match self {
            DrawStyle::Fill => {
                let _ = ctx.fill();
            }
            DrawStyle::Stroke(stroke) => {
                stroke.apply_to(ctx);
                let _ = ctx.stroke();
            }
        }
    }
}

/// How `draw_points` interprets its point list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointMode {
    /// Each point is drawn on its own
    #[default]
    Points,
    /// Consecutive pairs are joined as separate segments
    Lines,
    /// All points are joined as one open polyline
    Polygon,
}
