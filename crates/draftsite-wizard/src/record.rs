//! The preference record accumulated across wizard steps.

use serde::{Deserialize, Serialize};

/// All preferences collected by the wizard. Fields start empty and are
/// filled in as the user works through the steps; nothing here enforces
/// completeness (that is the job of step gating).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceRecord {
    /// Site variant id: business, personal, portfolio, ecommerce, blog.
    pub business_type: String,

    /// Industry category id from the catalog.
    pub industry_type: String,

    /// Design style id: minimal, modern, classic, creative, corporate.
    pub design_style: String,

    /// Color scheme id: blue, green, purple, red, neutral.
    pub color_scheme: String,

    /// Selected feature ids. Membership-tested, never duplicated.
    pub features: Vec<String>,

    /// Selected content type ids. Membership-tested, never duplicated.
    pub content_types: Vec<String>,

    /// Business or site name.
    pub business_name: String,

    /// Short description of the business or site.
    pub business_description: String,
}

impl PreferenceRecord {
    /// Whether a feature id is currently selected.
    pub fn has_feature(&self, id: &str) -> bool {
        self.features.iter().any(|f| f == id)
    }

    /// Whether a content type id is currently selected.
    pub fn has_content_type(&self, id: &str) -> bool {
        self.content_types.iter().any(|c| c == id)
    }
}

/// A partial update merged into the record field-by-field. The two set
/// fields are whole replacements supplied by the caller; the record has
/// no add/remove primitive of its own.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PreferenceUpdate {
    pub business_type: Option<String>,
    pub industry_type: Option<String>,
    pub design_style: Option<String>,
    pub color_scheme: Option<String>,
    pub features: Option<Vec<String>>,
    pub content_types: Option<Vec<String>>,
    pub business_name: Option<String>,
    pub business_description: Option<String>,
}

impl PreferenceUpdate {
    /// Merge this update into `record`. Unset fields are left untouched;
    /// set fields overwrite. Replacement sets are de-duplicated keeping
    /// the first occurrence.
    pub fn apply(self, record: &mut PreferenceRecord) {
        if let Some(v) = self.business_type {
            record.business_type = v;
        }
        if let Some(v) = self.industry_type {
            record.industry_type = v;
        }
        if let Some(v) = self.design_style {
            record.design_style = v;
        }
        if let Some(v) = self.color_scheme {
            record.color_scheme = v;
        }
        if let Some(v) = self.features {
            record.features = dedupe(v);
        }
        if let Some(v) = self.content_types {
            record.content_types = dedupe(v);
        }
        if let Some(v) = self.business_name {
            record.business_name = v;
        }
        if let Some(v) = self.business_description {
            record.business_description = v;
        }
    }
}

fn dedupe(ids: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_empty() {
        let record = PreferenceRecord::default();

        assert_eq!(record.business_type, "");
        assert!(record.features.is_empty());
        assert!(record.content_types.is_empty());
    }

    #[test]
    fn apply_overwrites_only_set_fields() {
        let mut record = PreferenceRecord {
            business_type: "blog".to_string(),
            business_name: "Original".to_string(),
            ..Default::default()
        };

        PreferenceUpdate {
            business_name: Some("Acme".to_string()),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.business_name, "Acme");
        assert_eq!(record.business_type, "blog");
    }

    #[test]
    fn apply_replaces_sets_whole() {
        let mut record = PreferenceRecord {
            features: vec!["contact".to_string(), "map".to_string()],
            ..Default::default()
        };

        PreferenceUpdate {
            features: Some(vec!["gallery".to_string()]),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.features, vec!["gallery".to_string()]);
    }

    #[test]
    fn apply_deduplicates_replacement_sets() {
        let mut record = PreferenceRecord::default();

        PreferenceUpdate {
            content_types: Some(vec![
                "text".to_string(),
                "images".to_string(),
                "text".to_string(),
            ]),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(
            record.content_types,
            vec!["text".to_string(), "images".to_string()]
        );
    }

    #[test]
    fn membership_checks() {
        let record = PreferenceRecord {
            features: vec!["gallery".to_string()],
            content_types: vec!["videos".to_string()],
            ..Default::default()
        };

        assert!(record.has_feature("gallery"));
        assert!(!record.has_feature("contact"));
        assert!(record.has_content_type("videos"));
        assert!(!record.has_content_type("text"));
    }

    #[test]
    fn update_deserializes_partially() {
        let update: PreferenceUpdate =
            serde_json::from_str(r#"{"color_scheme": "purple"}"#).unwrap();

        assert_eq!(update.color_scheme.as_deref(), Some("purple"));
        assert!(update.business_name.is_none());
    }
}
