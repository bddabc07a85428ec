//! iced colours for the shared palettes.

use iced::Color;

use crate::theme::{parse_hex_color, Palette};

/// A palette resolved to iced colours.
#[derive(Debug, Clone)]
pub struct EmomeTheme {
    pub background: Color,
    pub button: Color,
    pub button_hover: Color,
    pub text: Color,
    pub accent: Color,
}

impl EmomeTheme {
    /// Parse a hex color string like "#6e6a86" to iced Color.
    pub fn from_hex(hex: &str) -> Color {
        let (r, g, b) = parse_hex_color(hex);
        Color::from_rgb8(r, g, b)
    }

    /// Create a color with alpha transparency.
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color::from_rgba(color.r, color.g, color.b, alpha)
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            background: Self::from_hex(palette.background),
            button: Self::from_hex(palette.button),
            button_hover: Self::from_hex(palette.button_hover),
            text: Self::from_hex(palette.text),
            accent: Self::from_hex(palette.accent),
        }
    }

    /// Get theme by name.
    pub fn by_name(name: &str) -> Self {
        Self::from_palette(&Palette::by_name(name))
    }
}
