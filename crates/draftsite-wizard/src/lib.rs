//! Step wizard state machine for the draftsite builder.
//!
//! This crate owns the preference record collected across the wizard,
//! the ordered step definitions with their gating predicates, and the
//! session that navigates between them. It is pure state transformation;
//! rendering and delivery live in the preview and server crates.

pub mod catalog;
pub mod record;
pub mod session;
pub mod steps;
pub mod summary;

pub use record::{PreferenceRecord, PreferenceUpdate};
pub use session::{NavOutcome, WizardError, WizardSession};
pub use steps::{Step, STEPS, STEP_COUNT};
pub use summary::{summary_badges, SummaryBadge};
