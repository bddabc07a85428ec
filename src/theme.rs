//! Colour palettes shared by every frontend.
//!
//! Palettes are plain hex strings; the iced frontend converts them to
//! `iced::Color`, the GTK frontend interpolates them into CSS.

/// A named colour palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub button: &'static str,
    pub button_hover: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl Palette {
    /// Names accepted in `appearance.theme`.
    pub const NAMES: [&'static str; 5] = [
        "rose-pine",
        "rose-pine-moon",
        "catppuccin-mocha",
        "nord",
        "dracula",
    ];

    /// Get palette by name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "rose-pine" => Self::rose_pine(),
            "rose-pine-moon" => Self::rose_pine_moon(),
            "catppuccin-mocha" => Self::catppuccin_mocha(),
            "nord" => Self::nord(),
            "dracula" => Self::dracula(),
            other => {
                tracing::warn!("Unknown theme '{}', using rose-pine", other);
                Self::rose_pine()
            }
        }
    }

    /// Rosé Pine (default).
    pub fn rose_pine() -> Self {
        Self {
            name: "rose-pine",
            background: "#191724",
            button: "#6e6a86",
            button_hover: "#908caa",
            text: "#e0def4",
            accent: "#ebbcba",
        }
    }

    pub fn rose_pine_moon() -> Self {
        Self {
            name: "rose-pine-moon",
            background: "#232136",
            button: "#6e6a86",
            button_hover: "#908caa",
            text: "#e0def4",
            accent: "#ea9a97",
        }
    }

    pub fn catppuccin_mocha() -> Self {
        Self {
            name: "catppuccin-mocha",
            background: "#1e1e2e",
            button: "#45475a",
            button_hover: "#585b70",
            text: "#cdd6f4",
            accent: "#cba6f7",
        }
    }

    pub fn nord() -> Self {
        Self {
            name: "nord",
            background: "#2e3440",
            button: "#434c5e",
            button_hover: "#4c566a",
            text: "#eceff4",
            accent: "#88c0d0",
        }
    }

    pub fn dracula() -> Self {
        Self {
            name: "dracula",
            background: "#282a36",
            button: "#44475a",
            button_hover: "#6272a4",
            text: "#f8f8f2",
            accent: "#bd93f9",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rose_pine()
    }
}

/// Parse a hex color string like "#6e6a86" to (r, g, b)
pub fn parse_hex_color(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim_start_matches('#');
    if hex.len() >= 6 && hex.is_char_boundary(6) {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(128);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(128);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(128);
        (r, g, b)
    } else {
        (128, 128, 128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_resolve() {
        for name in Palette::NAMES {
            assert_eq!(Palette::by_name(name).name, name);
        }
        assert_eq!(Palette::by_name("solarized"), Palette::rose_pine());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#191724"), (25, 23, 36));
        assert_eq!(parse_hex_color("6e6a86"), (110, 106, 134));
        assert_eq!(parse_hex_color("#fff"), (128, 128, 128));
        assert_eq!(parse_hex_color("#zz0000"), (128, 0, 0));
    }
}
