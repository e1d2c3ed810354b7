//! RGBA color type and the toolkit's predefined color constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use canvas_draw::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let dark_gray = Color::from_argb(0xFF44_4444);
/// assert_eq!(dark_gray.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0 to 1.0 range.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as f64 / 255.0,
            g: ((argb >> 8) & 0xFF) as f64 / 255.0,
            b: (argb & 0xFF) as f64 / 255.0,
            a: ((argb >> 24) & 0xFF) as f64 / 255.0,
        }
    }

    /// Creates an opaque color from 8-bit RGB components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Sets this color as the solid source of a Cairo context.
    pub fn apply_to(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Predefined Color Constants (toolkit palette)
// ============================================================================

/// Black (`#000000`)
pub const BLACK: Color = Color::from_argb(0xFF00_0000);

/// Dark gray (`#444444`)
pub const DARK_GRAY: Color = Color::from_argb(0xFF44_4444);

/// Gray (`#888888`)
pub const GRAY: Color = Color::from_argb(0xFF88_8888);

/// Light gray (`#CCCCCC`)
pub const LIGHT_GRAY: Color = Color::from_argb(0xFFCC_CCCC);

/// White (`#FFFFFF`)
pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);

/// Red (`#FF0000`)
pub const RED: Color = Color::from_argb(0xFFFF_0000);

/// Green (`#00FF00`)
pub const GREEN: Color = Color::from_argb(0xFF00_FF00);

/// Blue (`#0000FF`)
pub const BLUE: Color = Color::from_argb(0xFF00_00FF);

/// Yellow (`#FFFF00`)
pub const YELLOW: Color = Color::from_argb(0xFFFF_FF00);

/// Cyan (`#00FFFF`)
pub const CYAN: Color = Color::from_argb(0xFF00_FFFF);

/// Magenta (`#FF00FF`)
pub const MAGENTA: Color = Color::from_argb(0xFFFF_00FF);

/// Fully transparent black
pub const TRANSPARENT: Color = Color::from_argb(0x0000_0000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_argb_unpacks_channels() {
        let color = Color::from_argb(0x80FF_4400);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 68.0 / 255.0).abs() < 1e-9);
        assert_eq!(color.b, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn palette_matches_rgb8() {
        assert_eq!(DARK_GRAY, Color::from_rgb8(0x44, 0x44, 0x44));
        assert_eq!(LIGHT_GRAY, Color::from_rgb8(0xCC, 0xCC, 0xCC));
        assert_eq!(MAGENTA, Color::from_rgb8(0xFF, 0x00, 0xFF));
        assert_eq!(TRANSPARENT.a, 0.0);
    }
}
