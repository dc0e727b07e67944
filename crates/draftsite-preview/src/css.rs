//! Stylesheet generation for preview documents.
//!
//! The palette and preset become CSS custom properties; everything else
//! is a fixed base sheet the page templates reference.

use crate::palette::Palette;
use crate::preset::StylePreset;

/// Stylesheet builder for a single preview document.
pub struct Stylesheet;

impl Stylesheet {
    /// Generate the full stylesheet for one palette/preset combination.
    pub fn generate(palette: &Palette, preset: &StylePreset) -> String {
        format!(
            r#":root {{
  --primary: {primary};
  --secondary: {secondary};
  --accent-text: {text};
  --primary-hover: {hover};
  --tint-border: {border};
  --button-text: {button_text};
  --light: {light};
  --container-max: {container_max};
  --container-pad: {container_pad};
  --heading-size: {heading_size};
  --heading-weight: {heading_weight};
  --heading-style: {heading_style};
  --heading-family: {heading_family};
  --subheading-size: {subheading_size};
  --subheading-weight: {subheading_weight};
  --card-border: {card_border};
  --card-radius: {card_radius};
  --card-shadow: {card_shadow};
  --section-pad: {section_pad};
}}
{base}"#,
            primary = palette.primary,
            secondary = palette.secondary,
            text = palette.text,
            hover = palette.hover,
            border = palette.border,
            button_text = palette.button_text,
            light = palette.light,
            container_max = preset.container_max,
            container_pad = preset.container_pad,
            heading_size = preset.heading_size,
            heading_weight = preset.heading_weight,
            heading_style = preset.heading_style,
            heading_family = preset.heading_family,
            subheading_size = preset.subheading_size,
            subheading_weight = preset.subheading_weight,
            card_border = preset.card_border,
            card_radius = preset.card_radius,
            card_shadow = preset.card_shadow,
            section_pad = preset.section_pad,
            base = BASE_CSS,
        )
    }

    /// Minify CSS using lightningcss. Falls back to the input on parse
    /// failure so a bad sheet degrades instead of erroring the render.
    pub fn minify(css: &str) -> String {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let Ok(stylesheet) = StyleSheet::parse(css, ParserOptions::default()) else {
            tracing::warn!("CSS parse failed, serving unminified sheet");
            return css.to_string();
        };

        match stylesheet.to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        }) {
            Ok(out) => out.code,
            Err(e) => {
                tracing::warn!("CSS minify failed: {}", e);
                css.to_string()
            }
        }
    }
}

const BASE_CSS: &str = r#"
* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: #ffffff;
  color: #111827;
  line-height: 1.6;
}

.container {
  max-width: var(--container-max);
  margin: 0 auto;
  padding: 0 var(--container-pad);
}

.heading {
  font-size: var(--heading-size);
  font-weight: var(--heading-weight);
  font-style: var(--heading-style);
  font-family: var(--heading-family);
}

.subheading {
  font-size: var(--subheading-size);
  font-weight: var(--subheading-weight);
  font-family: var(--heading-family);
}

.section {
  padding: var(--section-pad) 0;
}

.section-light {
  background: var(--light);
}

.section-primary {
  background: var(--primary);
  color: var(--button-text);
}

.card {
  background: #ffffff;
  border: var(--card-border);
  border-radius: var(--card-radius);
  box-shadow: var(--card-shadow);
  padding: 1.5rem;
}

.btn {
  display: inline-block;
  border: none;
  cursor: pointer;
  padding: 0.5rem 1.5rem;
  border-radius: 0.375rem;
  font-size: 1rem;
}

.btn-primary {
  background: var(--primary);
  color: var(--button-text);
}

.btn-primary:hover {
  background: var(--primary-hover);
}

.btn-outline {
  background: #ffffff;
  border: 1px solid #d1d5db;
  color: #111827;
}

.btn-pill {
  border-radius: 9999px;
}

.btn-inverse {
  background: #ffffff;
  color: #111827;
  font-weight: 500;
}

.accent-text {
  color: var(--accent-text);
}

.chip {
  display: inline-block;
  background: var(--secondary);
  color: var(--accent-text);
  border-radius: 9999px;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  font-weight: 500;
}

.site-header {
  padding: 1rem 0;
}

.site-header.filled {
  background: var(--primary);
  color: var(--button-text);
}

.site-header.bordered {
  background: #ffffff;
  border-bottom: 1px solid #e5e7eb;
}

.site-header .brand {
  font-weight: 700;
  font-size: 1.25rem;
}

.site-header nav {
  display: flex;
  gap: 1.5rem;
}

.site-header nav a {
  color: inherit;
  text-decoration: none;
}

.site-header nav a:hover {
  text-decoration: underline;
}

.header-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.hero-split {
  display: flex;
  align-items: center;
  gap: 2rem;
  flex-wrap: wrap;
}

.hero-split > div {
  flex: 1 1 20rem;
}

.grid-2, .grid-3, .grid-4 {
  display: grid;
  gap: 1.5rem;
}

.grid-2 { grid-template-columns: repeat(2, 1fr); }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }

.centered {
  text-align: center;
}

.muted {
  color: #4b5563;
}

.icon-well {
  background: var(--secondary);
  color: var(--accent-text);
  border-radius: 9999px;
  width: 4rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.tile {
  background: var(--secondary);
  color: var(--accent-text);
  border-radius: 0.5rem;
  padding: 1rem;
  text-align: center;
  font-weight: 500;
  text-decoration: none;
  display: block;
}

.placeholder {
  background: #e5e7eb;
  color: #6b7280;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 0.5rem;
  min-height: 10rem;
}

.placeholder.round {
  border-radius: 9999px;
  width: 8rem;
  height: 8rem;
  margin: 0 auto 1.5rem;
  min-height: 0;
}

.form-grid {
  display: grid;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.form-grid input,
.form-grid textarea,
.form-grid select {
  width: 100%;
  border: 1px solid #d1d5db;
  border-radius: 0.375rem;
  padding: 0.75rem;
  font: inherit;
}

.newsletter-row {
  display: flex;
  max-width: 28rem;
  margin: 0 auto;
}

.newsletter-row input {
  flex: 1;
  padding: 0.5rem 1rem;
  border: none;
  border-radius: 0.5rem 0 0 0.5rem;
  color: #111827;
}

.newsletter-row button {
  border-radius: 0 0.5rem 0.5rem 0;
}

.site-footer {
  padding: 2rem 0;
}

.site-footer.filled {
  background: var(--primary);
  color: var(--button-text);
}

.site-footer.plain {
  background: #f3f4f6;
  color: #4b5563;
}

.site-footer h3 {
  margin-bottom: 1rem;
}

.site-footer ul {
  list-style: none;
}

.site-footer a {
  color: inherit;
  text-decoration: none;
}

.site-footer a:hover {
  text-decoration: underline;
}

.footer-legal {
  margin-top: 2rem;
  padding-top: 2rem;
  border-top: 1px solid rgba(0, 0, 0, 0.1);
  text-align: center;
  font-size: 0.875rem;
  opacity: 0.8;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_reflect_palette_and_preset() {
        let css = Stylesheet::generate(
            &Palette::for_scheme("green"),
            &StylePreset::for_style("modern"),
        );

        assert!(css.contains("--primary: #16a34a;"));
        assert!(css.contains("--heading-weight: 700;"));
        assert!(css.contains(".btn-primary"));
    }

    #[test]
    fn minify_shrinks_output() {
        let css = Stylesheet::generate(
            &Palette::for_scheme("blue"),
            &StylePreset::for_style("minimal"),
        );
        let min = Stylesheet::minify(&css);

        assert!(min.len() < css.len());
        assert!(min.contains("--primary:#2563eb"));
    }

    #[test]
    fn minify_passes_through_bad_css() {
        let bad = "this is { not css";
        assert_eq!(Stylesheet::minify(bad), bad);
    }
}
