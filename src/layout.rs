//! Vertical stack layout for fixed-size children.

use crate::draw::{IntOffset, IntSize};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How children are distributed along the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Arrangement {
    /// Packed against the top edge
    Top,
    /// Packed in the middle
    Center,
    /// Packed against the bottom edge
    Bottom,
    /// First child at the top, last at the bottom, equal gaps between
    #[default]
    SpaceBetween,
    /// Equal gaps before, between and after the children
    SpaceEvenly,
    /// Equal gaps between children, half gaps at both ends
    SpaceAround,
}

impl Arrangement {
    /// Vertical positions of children with the given heights inside `total` pixels.
    ///
    /// When the children do not fit, every arrangement stacks them from the
    /// top without gaps.
    pub fn arrange(&self, total: i32, heights: &[i32]) -> Vec<i32> {
        let count = heights.len();
        if count == 0 {
            return Vec::new();
        }
        let consumed: i32 = heights.iter().sum();
        let free = (total - consumed) as f64;

        let (start, gap) = if free <= 0.0 {
            (0.0, 0.0)
        } else {
            match self {
                Arrangement::Top => (0.0, 0.0),
                Arrangement::Center => (free / 2.0, 0.0),
                Arrangement::Bottom => (free, 0.0),
                Arrangement::SpaceBetween => {
                    if count == 1 {
                        (0.0, 0.0)
                    } else {
                        (0.0, free / (count - 1) as f64)
                    }
                }
                Arrangement::SpaceEvenly => {
                    let gap = free / (count + 1) as f64;
                    (gap, gap)
                }
                Arrangement::SpaceAround => {
                    let gap = free / count as f64;
                    (gap / 2.0, gap)
                }
            }
        };

        let mut current = start;
        heights
            .iter()
            .map(|height| {
                let position = current.round() as i32;
                current += *height as f64 + gap;
                position
            })
            .collect()
    }
}

/// Where a child sits horizontally when it is narrower than the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalAlignment {
    Start,
    #[default]
    CenterHorizontally,
    End,
}

impl HorizontalAlignment {
    /// Horizontal offset of a child of `width` inside `space` pixels.
    pub fn align(&self, width: i32, space: i32) -> i32 {
        let free = (space - width) as f64;
        match self {
            HorizontalAlignment::Start => 0,
            HorizontalAlignment::CenterHorizontally => (free / 2.0 + 0.5).floor() as i32,
            HorizontalAlignment::End => space - width,
        }
    }
}

/// Final position and size of one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub offset: IntOffset,
    pub size: IntSize,
}

/// A column filling its viewport, inset by `padding` on every side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Inset in pixels
    pub padding: i32,
    pub arrangement: Arrangement,
    pub alignment: HorizontalAlignment,
}

impl Column {
    pub fn new(padding: i32, arrangement: Arrangement, alignment: HorizontalAlignment) -> Self {
        Self {
            padding,
            arrangement,
            alignment,
        }
    }

    /// Places children of the given sizes inside `viewport`, in order.
    pub fn place(&self, viewport: IntSize, children: &[IntSize]) -> Vec<Placement> {
        let content_width = (viewport.width - 2 * self.padding).max(0);
        let content_height = (viewport.height - 2 * self.padding).max(0);

        let heights: Vec<i32> = children.iter().map(|size| size.height).collect();
        let positions = self.arrangement.arrange(content_height, &heights);

        children
            .iter()
            .zip(positions)
            .map(|(size, y)| Placement {
                offset: IntOffset::new(
                    self.padding + self.alignment.align(size.width, content_width),
                    self.padding + y,
                ),
                size: *size,
            })
            .collect()
    }
}
