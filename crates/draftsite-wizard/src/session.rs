//! One wizard session: the accumulated record plus the current step.

use serde::Serialize;

use crate::record::{PreferenceRecord, PreferenceUpdate};
use crate::steps::{Step, STEPS, STEP_COUNT};

/// Errors from session operations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Step index {0} out of range (0..{STEP_COUNT})")]
    StepOutOfRange(usize),
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavOutcome {
    /// The current step changed.
    Moved,
    /// The current step's gate failed; index unchanged.
    Blocked,
    /// Already at the first or last step; index unchanged.
    AtBoundary,
}

/// Ephemeral wizard session. Created on startup, mutated by navigation
/// and updates, discarded with the process. There is no persistence.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    record: PreferenceRecord,
    current_step: usize,
}

impl WizardSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    /// Index of the current step, always within `0..STEP_COUNT`.
    pub fn current_index(&self) -> usize {
        self.current_step
    }

    pub fn current_step(&self) -> Step {
        STEPS[self.current_step]
    }

    pub fn is_first(&self) -> bool {
        self.current_step == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_step == STEP_COUNT - 1
    }

    /// Progress through the wizard as a percentage, counting the current
    /// step as reached.
    pub fn progress_percent(&self) -> f64 {
        (self.current_step + 1) as f64 / STEP_COUNT as f64 * 100.0
    }

    /// Whether the current step's gate passes, i.e. whether `advance`
    /// would move (boundary aside).
    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.current_step().is_complete(&self.record)
    }

    /// Move forward one step. Blocked by the current step's gating
    /// predicate and by the last-step boundary.
    pub fn advance(&mut self) -> NavOutcome {
        if self.is_last() {
            return NavOutcome::AtBoundary;
        }
        if !self.current_step().is_complete(&self.record) {
            tracing::debug!(step = self.current_step, "advance blocked by gating");
            return NavOutcome::Blocked;
        }
        self.current_step += 1;
        NavOutcome::Moved
    }

    /// Move back one step. No-op at the first step.
    pub fn retreat(&mut self) -> NavOutcome {
        if self.is_first() {
            return NavOutcome::AtBoundary;
        }
        self.current_step -= 1;
        NavOutcome::Moved
    }

    /// Jump directly to a step, bypassing gating. Used by the summary
    /// badges to re-open an already-visited step.
    pub fn jump_to(&mut self, index: usize) -> Result<(), WizardError> {
        if index >= STEP_COUNT {
            return Err(WizardError::StepOutOfRange(index));
        }
        self.current_step = index;
        Ok(())
    }

    /// Merge a partial update into the record.
    pub fn update(&mut self, update: PreferenceUpdate) {
        update.apply(&mut self.record);
    }

    /// Toggle a feature id: remove it if selected, append it otherwise.
    /// Computed as a whole-set replacement; toggling is its own inverse.
    pub fn toggle_feature(&mut self, id: &str) {
        let features = toggled(&self.record.features, id);
        self.update(PreferenceUpdate {
            features: Some(features),
            ..Default::default()
        });
    }

    /// Toggle a content type id, same replacement semantics as features.
    pub fn toggle_content_type(&mut self, id: &str) {
        let content_types = toggled(&self.record.content_types, id);
        self.update(PreferenceUpdate {
            content_types: Some(content_types),
            ..Default::default()
        });
    }
}

fn toggled(current: &[String], id: &str) -> Vec<String> {
    if current.iter().any(|x| x == id) {
        current.iter().filter(|x| *x != id).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(id.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::PreferenceUpdate;
    use pretty_assertions::assert_eq;

    fn complete_step0(session: &mut WizardSession) {
        session.update(PreferenceUpdate {
            business_type: Some("business".to_string()),
            industry_type: Some("technology".to_string()),
            ..Default::default()
        });
    }

    #[test]
    fn retreat_at_first_step_is_noop() {
        let mut session = WizardSession::new();

        assert_eq!(session.retreat(), NavOutcome::AtBoundary);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_blocked_without_business_type() {
        let mut session = WizardSession::new();

        assert_eq!(session.advance(), NavOutcome::Blocked);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_succeeds_once_step_complete() {
        let mut session = WizardSession::new();
        complete_step0(&mut session);

        assert_eq!(session.advance(), NavOutcome::Moved);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn design_step_blocks_without_color_scheme() {
        let mut session = WizardSession::new();
        complete_step0(&mut session);
        session.advance();
        session.update(PreferenceUpdate {
            design_style: Some("modern".to_string()),
            ..Default::default()
        });

        assert_eq!(session.advance(), NavOutcome::Blocked);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        let mut session = WizardSession::new();
        complete_step0(&mut session);
        session.update(PreferenceUpdate {
            design_style: Some("minimal".to_string()),
            color_scheme: Some("green".to_string()),
            business_name: Some("Acme".to_string()),
            business_description: Some("desc".to_string()),
            ..Default::default()
        });

        for _ in 0..20 {
            session.advance();
            assert!(session.current_index() < STEP_COUNT);
        }
        assert!(session.is_last());
        assert_eq!(session.advance(), NavOutcome::AtBoundary);

        for _ in 0..20 {
            session.retreat();
        }
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn jump_bypasses_gating_but_not_bounds() {
        let mut session = WizardSession::new();

        session.jump_to(5).unwrap();
        assert_eq!(session.current_index(), 5);

        assert!(matches!(
            session.jump_to(6),
            Err(WizardError::StepOutOfRange(6))
        ));
        assert_eq!(session.current_index(), 5);
    }

    #[test]
    fn feature_toggle_is_its_own_inverse() {
        let mut session = WizardSession::new();
        session.update(PreferenceUpdate {
            features: Some(vec!["contact".to_string()]),
            ..Default::default()
        });
        let before = session.record().features.clone();

        session.toggle_feature("gallery");
        assert!(session.record().has_feature("gallery"));

        session.toggle_feature("gallery");
        assert_eq!(session.record().features, before);
    }

    #[test]
    fn content_toggle_removes_existing_id() {
        let mut session = WizardSession::new();
        session.toggle_content_type("text");
        session.toggle_content_type("images");
        session.toggle_content_type("text");

        assert_eq!(session.record().content_types, vec!["images".to_string()]);
    }

    #[test]
    fn progress_counts_current_step() {
        let mut session = WizardSession::new();
        assert!((session.progress_percent() - 100.0 / 6.0).abs() < 1e-9);

        complete_step0(&mut session);
        session.advance();
        assert!((session.progress_percent() - 200.0 / 6.0).abs() < 1e-9);
    }
}
