//! Color filters applied to image pixels.

use super::color::Color;

/// A per-pixel color transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorFilter {
    /// Lighting filter: each RGB channel becomes `channel * multiply + add`,
    /// clamped to the valid range. Alpha is left alone.
    Lighting { multiply: Color, add: Color },
}

impl ColorFilter {
    pub fn lighting(multiply: Color, add: Color) -> Self {
        ColorFilter::Lighting { multiply, add }
    }

    /// Applies the filter to a straight (unpremultiplied) RGB triple.
    pub fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            ColorFilter::Lighting { multiply, add } => [
                (rgb[0] * multiply.r + add.r).clamp(0.0, 1.0),
                (rgb[1] * multiply.g + add.g).clamp(0.0, 1.0),
                (rgb[2] * multiply.b + add.b).clamp(0.0, 1.0),
            ],
        }
    }

    /// Applies the filter to one Cairo ARGB32 pixel.
    ///
    /// Cairo stores premultiplied alpha; the channels are unpremultiplied,
    /// filtered, then premultiplied again. Fully transparent pixels stay
    /// transparent.
    pub fn apply_argb32(&self, pixel: u32) -> u32 {
        let a = (pixel >> 24) & 0xFF;
        if a == 0 {
            return pixel;
        }
        let alpha = a as f64 / 255.0;
        let unpremultiply = |shift: u32| ((pixel >> shift) & 0xFF) as f64 / 255.0 / alpha;
        let rgb = [
            unpremultiply(16).min(1.0),
            unpremultiply(8).min(1.0),
            unpremultiply(0).min(1.0),
        ];

        let [r, g, b] = self.apply_rgb(rgb);
        let premultiply = |value: f64| ((value * alpha * 255.0).round() as u32).min(a);

        (a << 24) | (premultiply(r) << 16) | (premultiply(g) << 8) | premultiply(b)
    }

    /// Filters a buffer of native-endian ARGB32 pixels in place.
    pub fn apply_to_buffer(&self, data: &mut [u8]) {
        for chunk in data.chunks_exact_mut(4) {
            let pixel = u32::from_ne_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
            chunk.copy_from_slice(&self.apply_argb32(pixel).to_ne_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, YELLOW};

    #[test]
    fn lighting_multiplies_then_adds() {
        let filter = ColorFilter::lighting(YELLOW, RED);
        // Red saturates, green passes through, blue is zeroed.
        assert_eq!(filter.apply_rgb([0.2, 0.6, 0.9]), [1.0, 0.6, 0.0]);
    }

    #[test]
    fn opaque_pixel_is_filtered() {
        let filter = ColorFilter::lighting(YELLOW, RED);
        let blue = 0xFF00_00FF;
        assert_eq!(filter.apply_argb32(blue), 0xFFFF_0000);
        let green = 0xFF3D_DC84;
        assert_eq!(filter.apply_argb32(green), 0xFFFF_DC00);
    }

    #[test]
    fn premultiplied_pixel_keeps_alpha() {
        let filter = ColorFilter::lighting(YELLOW, RED);
        // Half-transparent white, premultiplied: 0x80 in every channel.
        let pixel = 0x8080_8080;
        let out = filter.apply_argb32(pixel);
        assert_eq!(out >> 24, 0x80);
        assert_eq!((out >> 16) & 0xFF, 0x80);
        assert_eq!((out >> 8) & 0xFF, 0x80);
        assert_eq!(out & 0xFF, 0);
    }

    #[test]
    fn transparent_pixels_are_untouched() {
        let filter = ColorFilter::lighting(YELLOW, RED);
        assert_eq!(filter.apply_argb32(0), 0);

        let mut buffer = vec![0u8; 8];
        buffer[4..8].copy_from_slice(&0xFF00_00FFu32.to_ne_bytes());
        filter.apply_to_buffer(&mut buffer);
        assert_eq!(&buffer[0..4], &[0, 0, 0, 0]);
        assert_eq!(
            u32::from_ne_bytes([buffer[4], buffer[5], buffer[6], buffer[7]]),
            0xFFFF_0000
        );
    }
}
