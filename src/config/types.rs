//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::layout::{Arrangement, HorizontalAlignment};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Virtual screen the demo is rendered onto.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ScreenConfig {
    /// Viewport width in pixels (valid range: 64 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Viewport height in pixels (valid range: 64 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Pixels per dp (valid range: 0.75 - 4.0)
    #[serde(default = "default_density")]
    pub density: f64,

    /// Extra multiplier for sp text sizes (valid range: 0.5 - 3.0)
    #[serde(default = "default_font_scale")]
    pub font_scale: f64,

    /// Window background behind the canvases
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            density: default_density(),
            font_scale: default_font_scale(),
            background: default_background(),
        }
    }
}

/// Column layout settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LayoutConfig {
    /// Inset on every side in dp (valid range: 0.0 - 64.0)
    #[serde(default = "default_padding_dp")]
    pub padding_dp: f64,

    /// Vertical distribution (top, center, bottom, space-between, space-evenly, space-around)
    #[serde(default)]
    pub arrangement: Arrangement,

    /// Horizontal placement (start, center-horizontally, end)
    #[serde(default)]
    pub alignment: HorizontalAlignment,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_dp: default_padding_dp(),
            arrangement: Arrangement::default(),
            alignment: HorizontalAlignment::default(),
        }
    }
}

/// Demo content settings.
///
/// Only the image source is configurable; unknown keys are rejected.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DemoConfig {
    /// PNG drawn by the image canvas instead of the bundled bitmap
    #[serde(default)]
    pub image_path: Option<String>,
}

/// Where rendered images are written.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Output directory; defaults to `<Pictures>/canvas-draw`
    #[serde(default)]
    pub directory: Option<String>,

    /// Filename template (chrono format specifiers), without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_width() -> i32 {
    1080
}

fn default_height() -> i32 {
    2340
}

fn default_density() -> f64 {
    2.75
}

fn default_font_scale() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_padding_dp() -> f64 {
    8.0
}

fn default_filename_template() -> String {
    "canvas_%Y-%m-%d_%H%M%S".to_string()
}
