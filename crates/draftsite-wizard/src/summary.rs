//! Summary badges: a compact view of what has been selected so far,
//! each linking back to the step that owns the value.

use serde::Serialize;

use crate::catalog::{self, label_for};
use crate::record::PreferenceRecord;

/// One badge in the selection strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryBadge {
    /// Display text.
    pub label: String,
    /// Step index a quick-edit jump should land on.
    pub step: usize,
}

/// Build the badge strip for the current record. Empty fields and
/// empty sets produce no badge; set badges show a count.
pub fn summary_badges(record: &PreferenceRecord) -> Vec<SummaryBadge> {
    let mut badges = Vec::new();

    if !record.business_type.is_empty() {
        badges.push(SummaryBadge {
            label: label_for(catalog::BUSINESS_TYPES, &record.business_type).to_string(),
            step: 0,
        });
    }
    if !record.industry_type.is_empty() {
        badges.push(SummaryBadge {
            label: label_for(catalog::INDUSTRIES, &record.industry_type).to_string(),
            step: 0,
        });
    }
    if !record.design_style.is_empty() {
        badges.push(SummaryBadge {
            label: label_for(catalog::DESIGN_STYLES, &record.design_style).to_string(),
            step: 1,
        });
    }
    if !record.color_scheme.is_empty() {
        badges.push(SummaryBadge {
            label: label_for(catalog::COLOR_SCHEMES, &record.color_scheme).to_string(),
            step: 1,
        });
    }
    if !record.features.is_empty() {
        badges.push(SummaryBadge {
            label: counted(record.features.len(), "feature"),
            step: 2,
        });
    }
    if !record.content_types.is_empty() {
        badges.push(SummaryBadge {
            label: counted(record.content_types.len(), "content type"),
            step: 3,
        });
    }

    badges
}

fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}
