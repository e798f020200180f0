//! Return-on-investment engine for fractional commercial property deals.
//!
//! The crate models one calculator session: a wizard collecting property,
//! lease, expense and deal inputs as free text, the forward (buyer) and
//! reverse (seller) ROI formulas, a rent-escalation cash-flow projection and
//! a counter-offer price solver.

pub mod calculations;
pub mod config;
pub mod models;
pub mod report;
pub mod wizard;

pub use config::{ConfigError, EngineConfig};
pub use models::*;
pub use report::{ExportError, ReportError, ReportExporter, ReportKind};
pub use wizard::{SectionUpdate, WizardController};
