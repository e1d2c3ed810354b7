//! Density-independent units and their conversion to device pixels.

/// Density-independent pixels. One dp is one pixel at density 1.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

/// Scale-independent pixels, used for text. Scales with both density and font scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f64);

/// Width and height in dp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DpSize {
    pub width: Dp,
    pub height: Dp,
}

impl DpSize {
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }
}

/// Screen density used to resolve dp and sp into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    /// Pixels per dp
    pub density: f64,
    /// Additional multiplier applied to sp on top of `density`
    pub font_scale: f64,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            density: 1.0,
            font_scale: 1.0,
        }
    }
}

impl Density {
    pub fn new(density: f64, font_scale: f64) -> Self {
        Self {
            density,
            font_scale,
        }
    }

    /// Converts dp to (fractional) pixels.
    pub fn dp_to_px(&self, dp: Dp) -> f64 {
        dp.0 * self.density
    }

    /// Converts sp to (fractional) pixels.
    pub fn sp_to_px(&self, sp: Sp) -> f64 {
        sp.0 * self.density * self.font_scale
    }

    /// Converts dp to whole pixels, rounding half away from zero.
    ///
    /// Layout sizes and offsets are always integral.
    pub fn dp_round_to_px(&self, dp: Dp) -> i32 {
        self.dp_to_px(dp).round() as i32
    }
}
