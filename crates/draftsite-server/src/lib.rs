//! Wizard web server for the draftsite builder.
//!
//! Serves the step UI for one wizard session, applies form posts to the
//! shared session, renders the preview document, and hosts the timed
//! generation trigger.

pub mod generator;
mod pages;
pub mod server;

pub use generator::{GenerationStatus, Generator, DEFAULT_GENERATION_DELAY};
pub use server::{ServerError, WizardServer, WizardServerConfig};
