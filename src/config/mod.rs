//! Configuration file support for canvas-draw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/canvas-draw/config.toml`. Settings cover the virtual screen
//! (size, density, background), the column layout, the demo image, and where rendered
//! images are written.
//!
//! If no config file exists, defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DemoConfig, LayoutConfig, OutputConfig, ScreenConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [screen]
/// width = 1080
/// height = 2340
/// density = 2.75
/// background = "white"
///
/// [layout]
/// padding_dp = 8.0
/// arrangement = "space-between"
/// alignment = "center-horizontally"
///
/// [demo]
/// image_path = "~/Pictures/robot.png"
///
/// [output]
/// directory = "~/Pictures/canvas-draw"
/// filename_template = "canvas_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Virtual screen size, density and background
    #[serde(default)]
    pub screen: ScreenConfig,

    /// Column padding, arrangement and alignment
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Demo content overrides
    #[serde(default)]
    pub demo: DemoConfig,

    /// Output location for rendered images
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `screen.width`, `screen.height`: 64 - 8192
    /// - `screen.density`: 0.75 - 4.0
    /// - `screen.font_scale`: 0.5 - 3.0
    /// - `layout.padding_dp`: 0.0 - 64.0
    pub fn validate_and_clamp(&mut self) {
        if !(64..=8192).contains(&self.screen.width) {
            log::warn!(
                "Invalid screen width {}, clamping to 64-8192 range",
                self.screen.width
            );
            self.screen.width = self.screen.width.clamp(64, 8192);
        }

        if !(64..=8192).contains(&self.screen.height) {
            log::warn!(
                "Invalid screen height {}, clamping to 64-8192 range",
                self.screen.height
            );
            self.screen.height = self.screen.height.clamp(64, 8192);
        }

        // clamp() passes NaN through, so it is replaced outright.
        if self.screen.density.is_nan() {
            log::warn!("Invalid density NaN, using 2.75");
            self.screen.density = 2.75;
        } else if !(0.75..=4.0).contains(&self.screen.density) {
            log::warn!(
                "Invalid density {:.2}, clamping to 0.75-4.0 range",
                self.screen.density
            );
            self.screen.density = self.screen.density.clamp(0.75, 4.0);
        }

        if self.screen.font_scale.is_nan() {
            log::warn!("Invalid font_scale NaN, using 1.0");
            self.screen.font_scale = 1.0;
        } else if !(0.5..=3.0).contains(&self.screen.font_scale) {
            log::warn!(
                "Invalid font_scale {:.2}, clamping to 0.5-3.0 range",
                self.screen.font_scale
            );
            self.screen.font_scale = self.screen.font_scale.clamp(0.5, 3.0);
        }

        if self.layout.padding_dp.is_nan() {
            log::warn!("Invalid padding_dp NaN, using 8.0");
            self.layout.padding_dp = 8.0;
        } else if !(0.0..=64.0).contains(&self.layout.padding_dp) {
            log::warn!(
                "Invalid padding_dp {:.1}, clamping to 0.0-64.0 range",
                self.layout.padding_dp
            );
            self.layout.padding_dp = self.layout.padding_dp.clamp(0.0, 64.0);
        }

        if self.output.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to the default");
            self.output.filename_template = OutputConfig::default().filename_template;
        }
    }

    /// Applies command-line overrides and re-validates.
    pub fn apply_overrides(&mut self, width: Option<i32>, height: Option<i32>, density: Option<f64>) {
        if let Some(width) = width {
            self.screen.width = width;
        }
        if let Some(height) = height {
            self.screen.height = height;
        }
        if let Some(density) = density {
            self.screen.density = density;
        }
        self.validate_and_clamp();
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/canvas-draw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("canvas-draw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Loads configuration from an explicit file. A missing file is an error.
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Arrangement, HorizontalAlignment};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.screen.width, 1080);
        assert_eq!(config.screen.height, 2340);
        assert_eq!(config.screen.density, 2.75);
        assert_eq!(config.layout.padding_dp, 8.0);
        assert_eq!(config.layout.arrangement, Arrangement::SpaceBetween);
        assert_eq!(
            config.layout.alignment,
            HorizontalAlignment::CenterHorizontally
        );
        assert!(config.demo.image_path.is_none());
    }

    #[test]
    fn sections_parse() {
        let config = Config::from_toml_str(
            r#"
            [screen]
            width = 720
            density = 2.0
            background = [10, 20, 30]

            [layout]
            arrangement = "space-evenly"
            alignment = "start"

            [output]
            directory = "/tmp/renders"
            "#,
        )
        .unwrap();
        assert_eq!(config.screen.width, 720);
        assert_eq!(config.screen.height, 2340);
        assert_eq!(config.screen.background, ColorSpec::Rgb([10, 20, 30]));
        assert_eq!(config.layout.arrangement, Arrangement::SpaceEvenly);
        assert_eq!(config.layout.alignment, HorizontalAlignment::Start);
        assert_eq!(config.output.directory.as_deref(), Some("/tmp/renders"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [screen]
            width = 10
            height = 100000
            density = 9.0
            font_scale = 0.1

            [layout]
            padding_dp = -4.0

            [output]
            filename_template = "  "
            "#,
        )
        .unwrap();
        assert_eq!(config.screen.width, 64);
        assert_eq!(config.screen.height, 8192);
        assert_eq!(config.screen.density, 4.0);
        assert_eq!(config.screen.font_scale, 0.5);
        assert_eq!(config.layout.padding_dp, 0.0);
        assert_eq!(config.output.filename_template, "canvas_%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn overrides_are_validated() {
        let mut config = Config::default();
        config.apply_overrides(Some(320), None, Some(0.1));
        assert_eq!(config.screen.width, 320);
        assert_eq!(config.screen.height, 2340);
        assert_eq!(config.screen.density, 0.75);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(Config::from_toml_str("[screen\nwidth = ").is_err());
        assert!(Config::from_toml_str("[layout]\narrangement = \"diagonal\"").is_err());
    }

    #[test]
    fn demo_section_only_accepts_image_path() {
        let config = Config::from_toml_str("[demo]\nimage_path = \"~/robot.png\"").unwrap();
        assert_eq!(config.demo.image_path.as_deref(), Some("~/robot.png"));

        assert!(Config::from_toml_str("[demo]\ntext = \"Bye\"").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/canvas-draw.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("screen"));
        assert!(schema.contains("space-between"));
    }
}
