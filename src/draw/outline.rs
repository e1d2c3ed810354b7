//! Shape outlines: plain rectangle, rounded rectangle, or arbitrary path.

use super::geometry::{Rect, RoundRect};
use super::path::Path;

/// The outline of a shape, as produced by a shape's layout.
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    Rectangle(Rect),
    Rounded(RoundRect),
    Generic(Path),
}
