//! Wizard chrome: the step pages served around the collected record.

use draftsite_wizard::{catalog, summary_badges, Step, WizardSession, STEP_COUNT};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::generator::GenerationStatus;

/// One selectable option in a step form.
#[derive(Debug, Clone, Serialize)]
struct OptionRow {
    id: &'static str,
    label: &'static str,
    selected: bool,
}

fn rows(entries: &[catalog::CatalogEntry], is_selected: impl Fn(&str) -> bool) -> Vec<OptionRow> {
    entries
        .iter()
        .map(|e| OptionRow {
            id: e.id,
            label: e.label,
            selected: is_selected(e.id),
        })
        .collect()
}

/// Template engine for the wizard pages.
pub(crate) struct PageTemplates {
    env: Environment<'static>,
}

impl PageTemplates {
    pub(crate) fn new() -> Self {
        let mut env = Environment::new();

        for (name, source) in PAGE_TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())
                .expect("Failed to add page template");
        }

        Self { env }
    }

    /// Render the page for the session's current step.
    pub(crate) fn render_step(
        &self,
        session: &WizardSession,
        generation: GenerationStatus,
    ) -> Result<String, minijinja::Error> {
        let record = session.record();
        let step = session.current_step();

        let step_template = match step {
            Step::BusinessType => "step_business_type.html",
            Step::DesignPreferences => "step_design.html",
            Step::Features => "step_features.html",
            Step::Content => "step_content.html",
            Step::Summary => "step_summary.html",
            Step::Preview => "step_preview.html",
        };

        let tmpl = self.env.get_template("page.html")?;
        tmpl.render(context! {
            step_template => step_template,
            step_number => session.current_index() + 1,
            step_count => STEP_COUNT,
            step_name => step.name(),
            progress => session.progress_percent(),
            badges => summary_badges(record),
            is_first => session.is_first(),
            is_last => session.is_last(),
            can_advance => session.can_advance(),
            business_types => rows(catalog::BUSINESS_TYPES, |id| id == record.business_type),
            industries => rows(catalog::INDUSTRIES, |id| id == record.industry_type),
            design_styles => rows(catalog::DESIGN_STYLES, |id| id == record.design_style),
            color_schemes => rows(catalog::COLOR_SCHEMES, |id| id == record.color_scheme),
            features => rows(catalog::FEATURES, |id| record.has_feature(id)),
            content_types => rows(catalog::CONTENT_TYPES, |id| record.has_content_type(id)),
            business_name => &record.business_name,
            business_description => &record.business_description,
            business_type_label =>
                catalog::label_for(catalog::BUSINESS_TYPES, &record.business_type),
            industry_label => catalog::label_for(catalog::INDUSTRIES, &record.industry_type),
            design_style_label => catalog::label_for(catalog::DESIGN_STYLES, &record.design_style),
            color_scheme_label => catalog::label_for(catalog::COLOR_SCHEMES, &record.color_scheme),
            generation => generation,
        })
    }
}

/// Stylesheet for the wizard chrome, served at /assets/site.css.
pub(crate) const WIZARD_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: #f8fafc;
  color: #0f172a;
  line-height: 1.6;
}

.wrap { max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }

.progress-meta {
  display: flex;
  justify-content: space-between;
  color: #64748b;
  font-size: 0.875rem;
  margin-bottom: 0.25rem;
}

.progress-track {
  background: #e2e8f0;
  border-radius: 9999px;
  height: 0.5rem;
  overflow: hidden;
}

.progress-fill { background: #0f172a; height: 100%; }

.nav-row {
  display: flex;
  justify-content: space-between;
  margin: 1rem 0;
}

.btn {
  display: inline-block;
  border: none;
  cursor: pointer;
  padding: 0.5rem 1.25rem;
  border-radius: 0.375rem;
  font-size: 1rem;
}

.btn-primary { background: #0f172a; color: #ffffff; }
.btn-outline { background: #ffffff; border: 1px solid #cbd5e1; }
.btn[disabled] { opacity: 0.5; cursor: not-allowed; }

.panel {
  background: #ffffff;
  border: 1px solid #e2e8f0;
  border-radius: 0.5rem;
  padding: 1.5rem;
  margin-bottom: 1rem;
}

.badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }

.badge-form { display: inline; }

.badge {
  background: #f1f5f9;
  border: none;
  border-radius: 9999px;
  padding: 0.25rem 0.75rem;
  font-size: 0.875rem;
  cursor: pointer;
}

.option-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
  margin: 1rem 0;
}

.option {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  border: 1px solid #e2e8f0;
  border-radius: 0.375rem;
  padding: 1rem;
}

.option.selected { border-color: #0f172a; background: #f1f5f9; }

.toggle {
  width: 100%;
  text-align: left;
  background: #ffffff;
  border: 1px solid #e2e8f0;
  border-radius: 0.375rem;
  padding: 1rem;
  cursor: pointer;
}

.toggle.selected { border-color: #0f172a; background: #f1f5f9; }

.field { margin-bottom: 1rem; }
.field label { display: block; font-weight: 500; margin-bottom: 0.25rem; }

.field input, .field textarea, .field select {
  width: 100%;
  border: 1px solid #cbd5e1;
  border-radius: 0.375rem;
  padding: 0.625rem;
  font: inherit;
}

.summary-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.kv { display: flex; justify-content: space-between; margin-bottom: 0.5rem; }
.kv .k { color: #64748b; }
.kv .v { font-weight: 500; }

.preview-frame {
  width: 100%;
  height: 32rem;
  border: 1px solid #e2e8f0;
  border-radius: 0.5rem;
  background: #ffffff;
}

.generated-note {
  background: #f0fdf4;
  border: 1px solid #bbf7d0;
  color: #166534;
  border-radius: 0.5rem;
  padding: 1rem;
  text-align: center;
  margin-top: 1rem;
}

h2 { margin-bottom: 1rem; }
.muted { color: #64748b; }
"#;

const PAGE_TEMPLATES: &[(&str, &str)] = &[
    ("page.html", PAGE),
    ("step_business_type.html", STEP_BUSINESS_TYPE),
    ("step_design.html", STEP_DESIGN),
    ("step_features.html", STEP_FEATURES),
    ("step_content.html", STEP_CONTENT),
    ("step_summary.html", STEP_SUMMARY),
    ("step_preview.html", STEP_PREVIEW),
];

const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Website Builder - {{ step_name }}</title>
  <link rel="stylesheet" href="/assets/site.css">
</head>
<body>
  <div class="wrap">
    <div class="progress-meta">
      <span>Step {{ step_number }} of {{ step_count }}</span>
      <span>{{ step_name }}</span>
    </div>
    <div class="progress-track">
      <div class="progress-fill" style="width: {{ progress }}%"></div>
    </div>

    <div class="nav-row">
      <form method="post" action="/back">
        <button class="btn btn-outline" {% if is_first %}disabled{% endif %}>&larr; Back</button>
      </form>
      <form method="post" action="/next">
        <button class="btn btn-primary" {% if not can_advance %}disabled{% endif %}>
          {% if is_last %}Create Website{% else %}Next &rarr;{% endif %}
        </button>
      </form>
    </div>

    <div class="panel">
      <h3>Your selections:</h3>
      <div class="badges">
        {% for badge in badges %}
        <form class="badge-form" method="post" action="/jump/{{ badge.step }}">
          <button class="badge">{{ badge.label }} &#9998;</button>
        </form>
        {% else %}
        <span class="muted">Nothing selected yet.</span>
        {% endfor %}
      </div>
    </div>

    <div class="panel">
      {% include step_template %}
    </div>
  </div>
</body>
</html>"##;

const STEP_BUSINESS_TYPE: &str = r##"<form method="post" action="/update">
  <h2>What type of website do you need?</h2>
  <div class="option-grid">
    {% for type in business_types %}
    <label class="option{% if type.selected %} selected{% endif %}">
      <input type="radio" name="business_type" value="{{ type.id }}"
             {% if type.selected %}checked{% endif %}>
      {{ type.label }}
    </label>
    {% endfor %}
  </div>

  <h2>What industry are you in?</h2>
  <div class="field">
    <select name="industry_type">
      <option value="">Select an industry</option>
      {% for industry in industries %}
      <option value="{{ industry.id }}" {% if industry.selected %}selected{% endif %}>
        {{ industry.label }}
      </option>
      {% endfor %}
    </select>
  </div>

  <button class="btn btn-primary">Save</button>
</form>"##;

const STEP_DESIGN: &str = r##"<form method="post" action="/update">
  <h2>What design style do you prefer?</h2>
  <div class="option-grid">
    {% for style in design_styles %}
    <label class="option{% if style.selected %} selected{% endif %}">
      <input type="radio" name="design_style" value="{{ style.id }}"
             {% if style.selected %}checked{% endif %}>
      {{ style.label }}
    </label>
    {% endfor %}
  </div>

  <h2>Choose a color scheme</h2>
  <div class="option-grid">
    {% for scheme in color_schemes %}
    <label class="option{% if scheme.selected %} selected{% endif %}">
      <input type="radio" name="color_scheme" value="{{ scheme.id }}"
             {% if scheme.selected %}checked{% endif %}>
      {{ scheme.label }}
    </label>
    {% endfor %}
  </div>

  <button class="btn btn-primary">Save</button>
</form>"##;

const STEP_FEATURES: &str = r##"<h2>What features do you need?</h2>
<p class="muted">Select all the features you want to include in your website.</p>
<div class="option-grid">
  {% for feature in features %}
  <form method="post" action="/toggle/feature/{{ feature.id }}">
    <button class="toggle{% if feature.selected %} selected{% endif %}">
      {% if feature.selected %}&#10003; {% endif %}{{ feature.label }}
    </button>
  </form>
  {% endfor %}
</div>"##;

const STEP_CONTENT: &str = r##"<h2>What content will your website have?</h2>
<div class="option-grid">
  {% for content in content_types %}
  <form method="post" action="/toggle/content/{{ content.id }}">
    <button class="toggle{% if content.selected %} selected{% endif %}">
      {% if content.selected %}&#10003; {% endif %}{{ content.label }}
    </button>
  </form>
  {% endfor %}
</div>

<form method="post" action="/update">
  <h2>Basic Information</h2>
  <div class="field">
    <label for="business-name">Business/Website Name</label>
    <input id="business-name" name="business_name" value="{{ business_name }}"
           placeholder="Enter your business or website name">
  </div>
  <div class="field">
    <label for="business-description">Brief Description</label>
    <textarea id="business-description" name="business_description" rows="4"
              placeholder="Describe your business or website in a few sentences">{{ business_description }}</textarea>
  </div>
  <button class="btn btn-primary">Save</button>
</form>"##;

const STEP_SUMMARY: &str = r##"<h2>Summary of Your Website</h2>
<p class="muted">Review your selections before we generate your website.</p>

<div class="summary-grid">
  <div class="panel">
    <h3>Website Type</h3>
    <div class="kv"><span class="k">Type:</span><span class="v">{{ business_type_label }}</span></div>
    <div class="kv"><span class="k">Industry:</span><span class="v">{{ industry_label }}</span></div>
  </div>
  <div class="panel">
    <h3>Design Preferences</h3>
    <div class="kv"><span class="k">Style:</span><span class="v">{{ design_style_label }}</span></div>
    <div class="kv"><span class="k">Color Scheme:</span><span class="v">{{ color_scheme_label }}</span></div>
  </div>
  <div class="panel">
    <h3>Features</h3>
    <ul>
      {% for feature in features %}{% if feature.selected %}
      <li>&#10003; {{ feature.label }}</li>
      {% endif %}{% endfor %}
    </ul>
  </div>
  <div class="panel">
    <h3>Content Types</h3>
    <ul>
      {% for content in content_types %}{% if content.selected %}
      <li>&#10003; {{ content.label }}</li>
      {% endif %}{% endfor %}
    </ul>
  </div>
</div>

<div class="panel">
  <h3>Basic Information</h3>
  <p><strong>Business/Website Name:</strong> {{ business_name }}</p>
  <p><strong>Description:</strong> {{ business_description }}</p>
</div>"##;

const STEP_PREVIEW: &str = r##"<h2>Your Website Preview</h2>
<p class="muted">Here's a preview of your website based on your selections.</p>

<iframe class="preview-frame" src="/preview" title="Website preview"></iframe>

<div id="generate-area" style="text-align: center; margin-top: 1rem;">
  {% if generation == "completed" %}
  <button class="btn btn-outline">&#8595; Download Website Files</button>
  <div class="generated-note">
    Your website has been successfully generated! You can now download the
    files or deploy directly to your hosting provider.
  </div>
  {% elif generation == "pending" %}
  <button class="btn btn-primary" disabled>Generating your website...</button>
  {% else %}
  <form method="post" action="/generate">
    <button class="btn btn-primary">Generate Website</button>
  </form>
  {% endif %}
</div>

{% if generation == "pending" %}
<script>
(function() {
  'use strict';
  var timer = setInterval(function() {
    fetch('/generate/status')
      .then(function(res) { return res.json(); })
      .then(function(body) {
        if (body.status !== 'pending') {
          clearInterval(timer);
          location.reload();
        }
      })
      .catch(function() { clearInterval(timer); });
  }, 500);
})();
</script>
{% endif %}"##;

#[cfg(test)]
mod tests {
    use super::*;
    use draftsite_wizard::PreferenceUpdate;

    #[test]
    fn renders_first_step_with_disabled_nav() {
        let pages = PageTemplates::new();
        let session = WizardSession::new();

        let html = pages
            .render_step(&session, GenerationStatus::Idle)
            .unwrap();

        assert!(html.contains("Step 1 of 6"));
        assert!(html.contains("Business Type"));
        assert!(html.contains("What type of website do you need?"));
        // Back and Next both disabled: start boundary, gate unmet.
        assert_eq!(html.matches("disabled").count(), 2);
    }

    #[test]
    fn badges_render_as_jump_forms() {
        let pages = PageTemplates::new();
        let mut session = WizardSession::new();
        session.update(PreferenceUpdate {
            design_style: Some("modern".to_string()),
            ..Default::default()
        });

        let html = pages
            .render_step(&session, GenerationStatus::Idle)
            .unwrap();

        assert!(html.contains(r#"action="/jump/1""#));
        assert!(html.contains("Modern &amp; Bold"));
    }

    #[test]
    fn preview_step_shows_generate_states() {
        let pages = PageTemplates::new();
        let mut session = WizardSession::new();
        session.jump_to(5).unwrap();

        let idle = pages
            .render_step(&session, GenerationStatus::Idle)
            .unwrap();
        assert!(idle.contains("Generate Website"));

        let pending = pages
            .render_step(&session, GenerationStatus::Pending)
            .unwrap();
        assert!(pending.contains("Generating your website..."));

        let done = pages
            .render_step(&session, GenerationStatus::Completed)
            .unwrap();
        assert!(done.contains("Download Website Files"));
    }
}
