//! Closed color set for status line styling.
//!
//! The renderer only ever uses four colors, so they are modeled as an enum
//! mapped to terminal styling through the `colored` crate instead of
//! dispatching on free-form color name strings.
//!
//! # Color Scheme
//! - **Gray**: display directory, verbose header prefix
//! - **White**: repository basename
//! - **Red**: dirty state ("N modified", "N stashes") and error messages
//! - **Green**: clean state ("Clean", empty stash column)

use colored::{ColoredString, Colorize};

/// The closed set of colors used by the status renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Gray,
    White,
    Red,
    Green,
}

/// Apply a [`Color`] to a piece of text
pub fn style(text: &str, color: Color) -> ColoredString {
    match color {
        Color::Gray => text.bright_black(),
        Color::White => text.white(),
        Color::Red => text.red(),
        Color::Green => text.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_keeps_text() {
        for color in [Color::Gray, Color::White, Color::Red, Color::Green] {
            assert!(style("~/work/", color).to_string().contains("~/work/"));
        }
    }

    #[test]
    fn test_style_is_deterministic() {
        let first = style("Clean", Color::Green).to_string();
        let second = style("Clean", Color::Green).to_string();
        assert_eq!(first, second);
    }
}
