//! Utility functions for color names.
//!
//! This module provides the mapping from color names used in the
//! configuration file to the palette constants in `draw::color`.

use crate::draw::{Color, color::*};

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
/// Matching is case-insensitive and ignores `-`, `_` and spaces, so
/// "dark-gray", "DarkGray" and "dark gray" are the same color.
///
/// # Supported Names
/// - "black", "dark-gray", "gray", "light-gray", "white"
/// - "red", "green", "blue", "yellow", "cyan", "magenta", "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let normalized: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase();

    match normalized.as_str() {
        "black" => Some(BLACK),
        "darkgray" | "darkgrey" => Some(DARK_GRAY),
        "gray" | "grey" => Some(GRAY),
        "lightgray" | "lightgrey" => Some(LIGHT_GRAY),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "cyan" => Some(CYAN),
        "magenta" => Some(MAGENTA),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_case_and_separators() {
        assert_eq!(name_to_color("DarkGray"), Some(DARK_GRAY));
        assert_eq!(name_to_color("light_grey"), Some(LIGHT_GRAY));
        assert_eq!(name_to_color("dark gray"), Some(DARK_GRAY));
        assert_eq!(name_to_color("Magenta"), Some(MAGENTA));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(name_to_color("orange"), None);
        assert_eq!(name_to_color(""), None);
    }
}
