//! ROI calculation engine.
//!
//! Pure functions of the session inputs: the forward buyer calculation, the
//! reverse seller price solve, the multi-year cash-flow projection and the
//! counter-offer solver. Nothing here fails; degenerate input produces
//! degenerate numbers or a skipped calculation.

pub mod cash_flow;
pub mod common;
pub mod counter_offer;
pub mod roi;

pub use cash_flow::CashFlowProjection;
pub use counter_offer::CounterOfferSolver;
pub use roi::{REGISTRY_RATE, RoiCalculator, RoiInputs};
