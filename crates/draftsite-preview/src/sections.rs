//! Feature sections appended to the business template.

use draftsite_wizard::PreferenceRecord;
use minijinja::Environment;

/// Feature ids that add a section, in the order sections are appended.
/// The order is fixed regardless of the order ids were selected in.
/// Other feature ids (blog, social, chat, search) render no section.
pub const FEATURE_SECTION_ORDER: &[&str] = &[
    "contact",
    "testimonials",
    "map",
    "gallery",
    "newsletter",
    "booking",
];

/// Render the selected feature sections as one HTML fragment, in the
/// fixed order above.
pub fn render_feature_sections(
    env: &Environment<'_>,
    record: &PreferenceRecord,
) -> Result<String, minijinja::Error> {
    let mut html = String::new();

    for id in FEATURE_SECTION_ORDER {
        if !record.has_feature(id) {
            continue;
        }
        let tmpl = env.get_template(&format!("section_{id}.html"))?;
        html.push_str(&tmpl.render(minijinja::context! {})?);
        html.push('\n');
    }

    Ok(html)
}
