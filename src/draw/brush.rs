//! Paint sources: solid colors and radial gradients.

use super::color::Color;
use super::geometry::{Offset, Size};

/// What a shape is painted with.
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Radial gradient with colors spread evenly from center to edge.
    ///
    /// An unset `center` means the center of the drawing area and an unset
    /// `radius` means half of its smaller side.
    RadialGradient {
        colors: Vec<Color>,
        center: Option<Offset>,
        radius: Option<f64>,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn radial_gradient(colors: Vec<Color>) -> Self {
        Brush::RadialGradient {
            colors,
            center: None,
            radius: None,
        }
    }

    /// Evenly spaced stop offsets for `count` colors.
    pub fn stop_offsets(count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![0.0],
            n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        }
    }

    /// Sets this brush as the Cairo source for a drawing area of `size`.
    pub fn apply_to(&self, ctx: &cairo::Context, size: Size) {
        match self {
            Brush::Solid(color) => color.apply_to(ctx),
            Brush::RadialGradient {
                colors,
                center,
                radius,
            } => {
                let center = center.unwrap_or_else(|| size.center());
                let radius = radius.unwrap_or_else(|| size.min_dimension() / 2.0);

                if colors.is_empty() {
                    ctx.set_source_rgba(0.0, 0.0, 0.0, 0.0);
                    return;
                }
                if radius <= 0.0 || colors.len() == 1 {
                    // Degenerate gradient: paint the outermost color.
                    if let Some(last) = colors.last() {
                        last.apply_to(ctx);
                    }
                    return;
                }

                let gradient =
                    cairo::RadialGradient::new(center.x, center.y, 0.0, center.x, center.y, radius);
                for (offset, color) in Self::stop_offsets(colors.len()).iter().zip(colors) {
                    gradient.add_color_stop_rgba(*offset, color.r, color.g, color.b, color.a);
                }
                gradient.set_extend(cairo::Extend::Pad);
                if let Err(err) = ctx.set_source(&gradient) {
                    log::warn!("Failed to set gradient source: {}", err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_offsets_are_evenly_spread() {
        assert!(Brush::stop_offsets(0).is_empty());
        assert_eq!(Brush::stop_offsets(1), vec![0.0]);
        assert_eq!(Brush::stop_offsets(2), vec![0.0, 1.0]);
        assert_eq!(Brush::stop_offsets(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn radial_gradient_defaults_are_unset() {
        match Brush::radial_gradient(vec![Color::from_argb(0xFF00_FF00)]) {
            Brush::RadialGradient { center, radius, .. } => {
                assert!(center.is_none());
                assert!(radius.is_none());
            }
            other => panic!("unexpected brush {:?}", other),
        }
    }
}
