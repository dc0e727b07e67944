//! Preview document renderer for the draftsite builder.
//!
//! Maps an accumulated [`PreferenceRecord`](draftsite_wizard::PreferenceRecord)
//! to a complete, self-contained HTML document: the business type picks
//! one of five page templates, the color scheme and design style pick
//! presentation bundles, and selected feature ids append canned sections.
//! Rendering is deterministic and side-effect free.

pub mod css;
pub mod engine;
pub mod palette;
pub mod preset;
pub mod sections;
mod templates;

pub use engine::{BusinessType, PreviewEngine, RenderError};
pub use palette::{ColorScheme, Palette};
pub use preset::{DesignStyle, StylePreset};
