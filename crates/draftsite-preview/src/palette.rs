//! Color scheme lookup table.

use serde::Serialize;

/// The closed set of color schemes the wizard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Blue,
    Green,
    Purple,
    Red,
    Neutral,
}

impl ColorScheme {
    /// Parse a scheme id. Unknown or empty keys fall back to neutral;
    /// the palette lookup never fails.
    pub fn from_key(key: &str) -> Self {
        match key {
            "blue" => ColorScheme::Blue,
            "green" => ColorScheme::Green,
            "purple" => ColorScheme::Purple,
            "red" => ColorScheme::Red,
            _ => ColorScheme::Neutral,
        }
    }
}

/// Presentation colors derived from a scheme. Values are plain CSS
/// colors consumed by the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Headers, footers, filled buttons.
    pub primary: &'static str,
    /// Tinted chips and icon wells.
    pub secondary: &'static str,
    /// Accent text.
    pub text: &'static str,
    /// Button hover shade, one step darker than primary.
    pub hover: &'static str,
    /// Tinted borders.
    pub border: &'static str,
    /// Text on filled buttons.
    pub button_text: &'static str,
    /// Tinted section backgrounds.
    pub light: &'static str,
}

impl Palette {
    /// Look up the palette for a scheme id, defaulting to neutral.
    pub fn for_scheme(key: &str) -> Palette {
        match ColorScheme::from_key(key) {
            ColorScheme::Blue => Palette {
                primary: "#2563eb",
                secondary: "#dbeafe",
                text: "#2563eb",
                hover: "#1d4ed8",
                border: "#bfdbfe",
                button_text: "#ffffff",
                light: "#eff6ff",
            },
            ColorScheme::Green => Palette {
                primary: "#16a34a",
                secondary: "#dcfce7",
                text: "#16a34a",
                hover: "#15803d",
                border: "#bbf7d0",
                button_text: "#ffffff",
                light: "#f0fdf4",
            },
            ColorScheme::Purple => Palette {
                primary: "#9333ea",
                secondary: "#f3e8ff",
                text: "#9333ea",
                hover: "#7e22ce",
                border: "#e9d5ff",
                button_text: "#ffffff",
                light: "#faf5ff",
            },
            ColorScheme::Red => Palette {
                primary: "#dc2626",
                secondary: "#fee2e2",
                text: "#dc2626",
                hover: "#b91c1c",
                border: "#fecaca",
                button_text: "#ffffff",
                light: "#fef2f2",
            },
            ColorScheme::Neutral => Palette {
                primary: "#1e293b",
                secondary: "#f1f5f9",
                text: "#1e293b",
                hover: "#0f172a",
                border: "#e2e8f0",
                button_text: "#ffffff",
                light: "#f8fafc",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purple_yields_purple_variant() {
        let palette = Palette::for_scheme("purple");
        assert_eq!(palette.primary, "#9333ea");
        assert_eq!(palette.light, "#faf5ff");
    }

    #[test]
    fn empty_key_yields_neutral() {
        assert_eq!(Palette::for_scheme(""), Palette::for_scheme("neutral"));
    }

    #[test]
    fn unknown_key_yields_neutral() {
        assert_eq!(ColorScheme::from_key("chartreuse"), ColorScheme::Neutral);
    }
}
