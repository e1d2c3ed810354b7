//! Vector path built from line and Bezier segments.

use super::geometry::Offset;

/// One path command. Coordinates are absolute pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Offset),
    LineTo(Offset),
    /// Quadratic Bezier: control point, end point
    QuadTo(Offset, Offset),
    /// Cubic Bezier: two control points, end point
    CubicTo(Offset, Offset, Offset),
    Close,
}

/// An ordered list of path commands.
///
/// A path whose first command is not a move starts at the origin, so
/// `Path::new().line_to(..)` draws from (0, 0).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Offset::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Offset::new(x, y)));
        self
    }

    pub fn quadratic_bezier_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.commands.push(PathCommand::QuadTo(
            Offset::new(x1, y1),
            Offset::new(x2, y2),
        ));
        self
    }

    pub fn cubic_to(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    ) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(
            Offset::new(x1, y1),
            Offset::new(x2, y2),
            Offset::new(x3, y3),
        ));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays the path onto a Cairo context as a new path.
    ///
    /// Cairo has no quadratic segment, so quads are elevated to cubics.
    pub fn append_to(&self, ctx: &cairo::Context) {
        ctx.new_path();
        let mut current = Offset::ZERO;
        let mut subpath_start = Offset::ZERO;

        if !matches!(self.commands.first(), Some(PathCommand::MoveTo(_))) {
            ctx.move_to(0.0, 0.0);
        }

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    ctx.move_to(p.x, p.y);
                    current = p;
                    subpath_start = p;
                }
                PathCommand::LineTo(p) => {
                    ctx.line_to(p.x, p.y);
                    current = p;
                }
                PathCommand::QuadTo(c, p) => {
                    let (c1, c2) = quad_to_cubic(current, c, p);
                    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                    current = p;
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    ctx.curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                    current = p;
                }
                PathCommand::Close => {
                    ctx.close_path();
                    current = subpath_start;
                }
            }
        }
    }
}

/// Control points of the cubic equivalent to a quadratic from `start` via `control` to `end`.
pub fn quad_to_cubic(start: Offset, control: Offset, end: Offset) -> (Offset, Offset) {
    let c1 = Offset::new(
        start.x + 2.0 / 3.0 * (control.x - start.x),
        start.y + 2.0 / 3.0 * (control.y - start.y),
    );
    let c2 = Offset::new(
        end.x + 2.0 / 3.0 * (control.x - end.x),
        end.y + 2.0 / 3.0 * (control.y - end.y),
    );
    (c1, c2)
}
