//! Ordered step definitions and their gating predicates.

use crate::record::PreferenceRecord;

/// One page of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    BusinessType,
    DesignPreferences,
    Features,
    Content,
    Summary,
    Preview,
}

/// The wizard's step order. Navigation indexes into this slice.
pub const STEPS: &[Step] = &[
    Step::BusinessType,
    Step::DesignPreferences,
    Step::Features,
    Step::Content,
    Step::Summary,
    Step::Preview,
];

/// Number of steps in the wizard.
pub const STEP_COUNT: usize = STEPS.len();

impl Step {
    /// Display name shown in the progress header.
    pub fn name(&self) -> &'static str {
        match self {
            Step::BusinessType => "Business Type",
            Step::DesignPreferences => "Design Preferences",
            Step::Features => "Features",
            Step::Content => "Content",
            Step::Summary => "Summary",
            Step::Preview => "Preview",
        }
    }

    /// Whether forward navigation away from this step is permitted.
    ///
    /// Gating is advisory: it only blocks `advance`, it does not make
    /// the record structurally valid. Jumping backward (or via a badge)
    /// bypasses it entirely.
    pub fn is_complete(&self, record: &PreferenceRecord) -> bool {
        match self {
            Step::BusinessType => {
                !record.business_type.is_empty() && !record.industry_type.is_empty()
            }
            Step::DesignPreferences => {
                !record.design_style.is_empty() && !record.color_scheme.is_empty()
            }
            Step::Content => {
                !record.business_name.is_empty() && !record.business_description.is_empty()
            }
            Step::Features | Step::Summary | Step::Preview => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_steps_in_order() {
        assert_eq!(STEP_COUNT, 6);
        assert_eq!(STEPS[0], Step::BusinessType);
        assert_eq!(STEPS[5], Step::Preview);
    }

    #[test]
    fn business_type_step_requires_both_fields() {
        let mut record = PreferenceRecord::default();
        assert!(!Step::BusinessType.is_complete(&record));

        record.business_type = "business".to_string();
        assert!(!Step::BusinessType.is_complete(&record));

        record.industry_type = "technology".to_string();
        assert!(Step::BusinessType.is_complete(&record));
    }

    #[test]
    fn design_step_requires_style_and_scheme() {
        let mut record = PreferenceRecord {
            design_style: "minimal".to_string(),
            ..Default::default()
        };
        assert!(!Step::DesignPreferences.is_complete(&record));

        record.color_scheme = "blue".to_string();
        assert!(Step::DesignPreferences.is_complete(&record));
    }

    #[test]
    fn content_step_requires_name_and_description() {
        let mut record = PreferenceRecord {
            business_name: "Acme".to_string(),
            ..Default::default()
        };
        assert!(!Step::Content.is_complete(&record));

        record.business_description = "We make things.".to_string();
        assert!(Step::Content.is_complete(&record));
    }

    #[test]
    fn ungated_steps_always_pass() {
        let record = PreferenceRecord::default();

        assert!(Step::Features.is_complete(&record));
        assert!(Step::Summary.is_complete(&record));
        assert!(Step::Preview.is_complete(&record));
    }
}
