//! Configuration enum types.

use crate::draw::{Color, color::WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// background = "light-gray"
///
/// # Custom RGB color (0-255 per component)
/// background = [250, 250, 250]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: black, dark-gray, gray, light-gray, white, red, green,
    /// blue, yellow, cyan, magenta, transparent
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped with `util::name_to_color()`. Unknown names
    /// fall back to white with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using white", name);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{DARK_GRAY, MAGENTA};

    #[test]
    fn named_and_rgb_specs_resolve() {
        assert_eq!(ColorSpec::Name("Dark-Gray".into()).to_color(), DARK_GRAY);
        assert_eq!(ColorSpec::Rgb([255, 0, 255]).to_color(), MAGENTA);
    }

    #[test]
    fn unknown_name_falls_back_to_white() {
        assert_eq!(ColorSpec::Name("chartreuse".into()).to_color(), WHITE);
    }
}
