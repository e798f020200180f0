//! Multi-step calculator wizard.
//!
//! The [`WizardController`] owns the [`Session`](crate::Session), merges
//! field updates into it, gates step transitions on required fields, and
//! runs the calculation engine when the user leaves the financials step.

mod controller;
mod gating;
mod update;

pub use controller::WizardController;
pub use gating::{can_advance, missing_fields};
pub use update::SectionUpdate;
