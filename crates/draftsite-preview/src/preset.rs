//! Design style lookup table.

use serde::Serialize;

/// The closed set of design styles the wizard offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignStyle {
    Minimal,
    Modern,
    Classic,
    Creative,
    Corporate,
}

impl DesignStyle {
    /// Parse a style id. Unknown or empty keys fall back to corporate.
    pub fn from_key(key: &str) -> Self {
        match key {
            "minimal" => DesignStyle::Minimal,
            "modern" => DesignStyle::Modern,
            "classic" => DesignStyle::Classic,
            "creative" => DesignStyle::Creative,
            _ => DesignStyle::Corporate,
        }
    }
}

/// Layout and typography treatment derived from a design style.
/// Values are CSS fragments consumed by the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylePreset {
    /// Content column max width.
    pub container_max: &'static str,
    /// Horizontal container padding.
    pub container_pad: &'static str,
    pub heading_size: &'static str,
    pub heading_weight: &'static str,
    /// normal or italic.
    pub heading_style: &'static str,
    /// Font stack for headings.
    pub heading_family: &'static str,
    pub subheading_size: &'static str,
    pub subheading_weight: &'static str,
    pub card_border: &'static str,
    pub card_radius: &'static str,
    pub card_shadow: &'static str,
    /// Vertical padding between page sections.
    pub section_pad: &'static str,
}

const SANS: &str = "system-ui, sans-serif";
const SERIF: &str = "Georgia, 'Times New Roman', serif";

impl StylePreset {
    /// Look up the preset for a style id, defaulting to corporate.
    pub fn for_style(key: &str) -> StylePreset {
        match DesignStyle::from_key(key) {
            DesignStyle::Minimal => StylePreset {
                container_max: "1280px",
                container_pad: "1rem",
                heading_size: "1.875rem",
                heading_weight: "300",
                heading_style: "normal",
                heading_family: SANS,
                subheading_size: "1.25rem",
                subheading_weight: "300",
                card_border: "1px solid #f3f4f6",
                card_radius: "0.5rem",
                card_shadow: "0 1px 2px rgba(0, 0, 0, 0.05)",
                section_pad: "3rem",
            },
            DesignStyle::Modern => StylePreset {
                container_max: "1280px",
                container_pad: "1.5rem",
                heading_size: "2.25rem",
                heading_weight: "700",
                heading_style: "normal",
                heading_family: SANS,
                subheading_size: "1.5rem",
                subheading_weight: "500",
                card_border: "none",
                card_radius: "0.75rem",
                card_shadow: "0 10px 15px rgba(0, 0, 0, 0.1)",
                section_pad: "4rem",
            },
            DesignStyle::Classic => StylePreset {
                container_max: "1024px",
                container_pad: "1rem",
                heading_size: "1.875rem",
                heading_weight: "400",
                heading_style: "normal",
                heading_family: SERIF,
                subheading_size: "1.25rem",
                subheading_weight: "400",
                card_border: "1px solid #e5e7eb",
                card_radius: "0.25rem",
                card_shadow: "0 1px 3px rgba(0, 0, 0, 0.1)",
                section_pad: "2.5rem",
            },
            DesignStyle::Creative => StylePreset {
                container_max: "1280px",
                container_pad: "2rem",
                heading_size: "2.25rem",
                heading_weight: "700",
                heading_style: "italic",
                heading_family: SANS,
                subheading_size: "1.5rem",
                subheading_weight: "500",
                card_border: "none",
                card_radius: "1rem",
                card_shadow: "0 20px 25px rgba(0, 0, 0, 0.1)",
                section_pad: "3.5rem",
            },
            DesignStyle::Corporate => StylePreset {
                container_max: "1024px",
                container_pad: "1rem",
                heading_size: "1.875rem",
                heading_weight: "600",
                heading_style: "normal",
                heading_family: SANS,
                subheading_size: "1.25rem",
                subheading_weight: "500",
                card_border: "none",
                card_radius: "0.5rem",
                card_shadow: "0 4px 6px rgba(0, 0, 0, 0.1)",
                section_pad: "2rem",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_is_light_weight() {
        let preset = StylePreset::for_style("minimal");
        assert_eq!(preset.heading_weight, "300");
        assert_eq!(preset.container_max, "1280px");
    }

    #[test]
    fn classic_uses_serif_headings() {
        assert!(StylePreset::for_style("classic").heading_family.contains("serif"));
    }

    #[test]
    fn creative_is_italic() {
        assert_eq!(StylePreset::for_style("creative").heading_style, "italic");
    }

    #[test]
    fn empty_and_unknown_fall_back_to_corporate() {
        assert_eq!(DesignStyle::from_key(""), DesignStyle::Corporate);
        assert_eq!(DesignStyle::from_key("vaporwave"), DesignStyle::Corporate);
        assert_eq!(
            StylePreset::for_style(""),
            StylePreset::for_style("corporate")
        );
    }
}
