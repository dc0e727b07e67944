//! Template dispatch: one page template per business-type variant.

use draftsite_wizard::PreferenceRecord;
use minijinja::{context, Environment};

use crate::css::Stylesheet;
use crate::palette::Palette;
use crate::preset::StylePreset;
use crate::sections::render_feature_sections;
use crate::templates::TEMPLATES;

/// The closed set of site variants. Adding a variant means adding an
/// enum arm and a template, not editing a conditional chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    Business,
    Portfolio,
    Ecommerce,
    Blog,
    Personal,
}

impl BusinessType {
    /// Parse a business-type id. Unknown or empty keys fall back to the
    /// personal variant.
    pub fn from_key(key: &str) -> Self {
        match key {
            "business" => BusinessType::Business,
            "portfolio" => BusinessType::Portfolio,
            "ecommerce" => BusinessType::Ecommerce,
            "blog" => BusinessType::Blog,
            _ => BusinessType::Personal,
        }
    }

    fn template_name(&self) -> &'static str {
        match self {
            BusinessType::Business => "business.html",
            BusinessType::Portfolio => "portfolio.html",
            BusinessType::Ecommerce => "ecommerce.html",
            BusinessType::Blog => "blog.html",
            BusinessType::Personal => "personal.html",
        }
    }

    /// Site name shown when the record has no business name yet.
    fn name_fallback(&self) -> &'static str {
        match self {
            BusinessType::Business => "Business Name",
            BusinessType::Portfolio | BusinessType::Personal => "Your Name",
            BusinessType::Ecommerce => "Shop Name",
            BusinessType::Blog => "Blog Name",
        }
    }

    fn description_fallback(&self) -> &'static str {
        match self {
            BusinessType::Business => {
                "We provide exceptional services to help your business grow and succeed \
                 in today's competitive market."
            }
            BusinessType::Portfolio => {
                "I'm a creative professional specializing in design, development, and \
                 digital solutions. I create beautiful, functional work that helps \
                 businesses succeed."
            }
            BusinessType::Personal => {
                "I'm passionate about sharing my journey, experiences, and insights with \
                 the world. Welcome to my personal website where I document my adventures \
                 and thoughts."
            }
            BusinessType::Ecommerce | BusinessType::Blog => "",
        }
    }

    fn short_description_fallback(&self) -> &'static str {
        match self {
            BusinessType::Business => "Short description of your business and what you do.",
            BusinessType::Ecommerce => {
                "Your one-stop shop for quality products at affordable prices."
            }
            BusinessType::Blog => {
                "A blog about interesting topics and insights from around the world."
            }
            BusinessType::Portfolio | BusinessType::Personal => "",
        }
    }
}

/// Errors from preview rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders preview documents from a preference record.
///
/// Selection is deterministic and re-entrant: the same record always
/// yields the same document.
pub struct PreviewEngine {
    env: Environment<'static>,
    minify_css: bool,
}

impl PreviewEngine {
    /// Create an engine with all variant and section templates loaded.
    pub fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add preview template");
        }

        Self {
            env,
            minify_css: false,
        }
    }

    /// Minify the embedded stylesheet in rendered documents.
    pub fn with_minified_css(mut self, minify: bool) -> Self {
        self.minify_css = minify;
        self
    }

    pub(crate) fn env(&self) -> &Environment<'static> {
        &self.env
    }

    /// Render the preview document for a record.
    pub fn render(&self, record: &PreferenceRecord) -> Result<String, RenderError> {
        let variant = BusinessType::from_key(&record.business_type);
        let palette = Palette::for_scheme(&record.color_scheme);
        let preset = StylePreset::for_style(&record.design_style);

        let styles = {
            let css = Stylesheet::generate(&palette, &preset);
            if self.minify_css {
                Stylesheet::minify(&css)
            } else {
                css
            }
        };

        let name = non_empty_or(&record.business_name, variant.name_fallback());
        let description =
            non_empty_or(&record.business_description, variant.description_fallback());
        let short_description = if record.business_description.is_empty() {
            variant.short_description_fallback().to_string()
        } else {
            truncate_chars(&record.business_description, 100)
        };

        // Feature sections only exist on the business variant.
        let feature_sections = match variant {
            BusinessType::Business => render_feature_sections(&self.env, record)?,
            _ => String::new(),
        };

        tracing::debug!(?variant, "rendering preview");

        let tmpl = self.env.get_template(variant.template_name())?;
        let html = tmpl.render(context! {
            name => name,
            hero_name => non_empty_or(&record.business_name, "Our Business"),
            first_name => first_name(&record.business_name),
            description => description,
            short_description => short_description,
            show_blog_link => record.has_feature("blog"),
            feature_sections => feature_sections,
            styles => styles,
        })?;

        Ok(html)
    }
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// First whitespace-separated word of the name, for greeting copy.
fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("John")
}

/// Truncate to at most `max` characters without splitting a char.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(business_type: &str) -> PreferenceRecord {
        PreferenceRecord {
            business_type: business_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn dispatches_by_business_type() {
        let engine = PreviewEngine::new();

        let html = engine.render(&record("ecommerce")).unwrap();
        assert!(html.contains("Featured Products"));

        let html = engine.render(&record("blog")).unwrap();
        assert!(html.contains("Recent Posts"));

        let html = engine.render(&record("portfolio")).unwrap();
        assert!(html.contains("My Projects"));
    }

    #[test]
    fn unknown_type_falls_back_to_personal() {
        assert_eq!(BusinessType::from_key("unknown"), BusinessType::Personal);
        assert_eq!(BusinessType::from_key(""), BusinessType::Personal);

        let engine = PreviewEngine::new();
        let html = engine.render(&record("unknown")).unwrap();
        assert!(html.contains("Recent Blog Posts"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let engine = PreviewEngine::new();
        let record = PreferenceRecord {
            business_type: "business".to_string(),
            design_style: "modern".to_string(),
            color_scheme: "purple".to_string(),
            features: vec!["gallery".to_string(), "contact".to_string()],
            business_name: "Acme Widgets".to_string(),
            business_description: "Widgets for all.".to_string(),
            ..Default::default()
        };

        assert_eq!(engine.render(&record).unwrap(), engine.render(&record).unwrap());
    }

    #[test]
    fn business_uses_name_fallbacks() {
        let engine = PreviewEngine::new();
        let html = engine.render(&record("business")).unwrap();

        assert!(html.contains("Business Name"));
        assert!(html.contains("Welcome to Our Business"));
        assert!(html.contains("Short description of your business"));
    }

    #[test]
    fn personal_greets_with_first_name() {
        let engine = PreviewEngine::new();

        let mut rec = record("personal");
        rec.business_name = "Jane Smith".to_string();
        let html = engine.render(&rec).unwrap();
        assert!(html.contains("Hello, I'm Jane"));

        let html = engine.render(&record("personal")).unwrap();
        assert!(html.contains("Hello, I'm John"));
    }

    #[test]
    fn portfolio_greets_with_first_name() {
        let engine = PreviewEngine::new();
        let mut rec = record("portfolio");
        rec.business_name = "Ada Lovelace".to_string();

        let html = engine.render(&rec).unwrap();
        assert!(html.contains("Hi, I'm Ada"));
    }

    #[test]
    fn blog_feature_adds_nav_link_on_business() {
        let engine = PreviewEngine::new();

        let mut rec = record("business");
        assert!(!engine.render(&rec).unwrap().contains(">Blog</a>"));

        rec.features = vec!["blog".to_string()];
        assert!(engine.render(&rec).unwrap().contains(">Blog</a>"));
    }

    #[test]
    fn footer_description_truncates_on_char_boundary() {
        let long = "é".repeat(150);

        let short = truncate_chars(&long, 100);
        assert_eq!(short.chars().count(), 100);

        // Multibyte input must not panic the render.
        let engine = PreviewEngine::new();
        let mut rec = record("business");
        rec.business_description = long;
        engine.render(&rec).unwrap();
    }

    #[test]
    fn feature_sections_only_on_business_variant() {
        let engine = PreviewEngine::new();
        let mut rec = record("blog");
        rec.features = vec!["gallery".to_string()];

        let html = engine.render(&rec).unwrap();
        assert!(!html.contains("Gallery"));
    }

    #[test]
    fn user_input_is_escaped() {
        let engine = PreviewEngine::new();
        let mut rec = record("business");
        rec.business_name = "<script>alert(1)</script>".to_string();

        let html = engine.render(&rec).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn minified_css_still_renders() {
        let engine = PreviewEngine::new().with_minified_css(true);
        let html = engine.render(&record("business")).unwrap();

        assert!(html.contains("--primary:#1e293b"));
    }
}
