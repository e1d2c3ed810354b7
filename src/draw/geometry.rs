//! Pixel-space geometry: offsets, sizes, rectangles and corner radii.

/// A point or displacement in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in fractional pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of width and height.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Center point of a rectangle of this size anchored at the origin.
    pub fn center(&self) -> Offset {
        Offset::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Whole-pixel offset used by layout and image placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const ZERO: IntOffset = IntOffset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Whole-pixel size used by layout and image placement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntSize {
    pub width: i32,
    pub height: i32,
}

impl IntSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn to_size(self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }
}

/// Axis-aligned rectangle described by its four edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_offset_size(offset: Offset, size: Size) -> Self {
        Self::new(
            offset.x,
            offset.y,
            offset.x + size.width,
            offset.y + size.height,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn top_left(&self) -> Offset {
        Offset::new(self.left, self.top)
    }

    pub fn center(&self) -> Offset {
        Offset::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Elliptical corner radius; `x` is horizontal, `y` vertical.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadius {
    pub x: f64,
    pub y: f64,
}

impl CornerRadius {
    pub const ZERO: CornerRadius = CornerRadius { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rectangle with the same elliptical radius on all four corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundRect {
    pub rect: Rect,
    pub radius: CornerRadius,
}

impl RoundRect {
    pub fn new(rect: Rect, radius: CornerRadius) -> Self {
        Self { rect, radius }
    }

    /// Radius clamped so opposite corners never overlap.
    pub fn effective_radius(&self) -> CornerRadius {
        let max_x = (self.rect.width().abs() / 2.0).max(0.0);
        let max_y = (self.rect.height().abs() / 2.0).max(0.0);
        CornerRadius::new(
            self.radius.x.clamp(0.0, max_x),
            self.radius.y.clamp(0.0, max_y),
        )
    }
}
