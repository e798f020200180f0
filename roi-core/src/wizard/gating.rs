//! Step-completion rules.

use crate::calculations::common::is_blank;
use crate::{InvestorMode, Session, WizardStep};

/// Names of the required fields still blank at the session's current step.
///
/// Empty when the step has no requirements or all of them are filled.
pub fn missing_fields(session: &Session) -> Vec<&'static str> {
    let required: Vec<(&'static str, &str)> = match session.step() {
        WizardStep::ModeSelection | WizardStep::Results => Vec::new(),
        WizardStep::Property => vec![("saleable area", session.property().area.as_str())],
        WizardStep::Lease => vec![
            ("monthly rent", session.lease().monthly_rent.as_str()),
            ("occupation period", session.lease().occupation_period.as_str()),
        ],
        WizardStep::Expenses => vec![
            ("monthly property tax", session.expenses().monthly_property_tax.as_str()),
            ("monthly maintenance", session.expenses().monthly_maintenance.as_str()),
        ],
        WizardStep::Financials => match session.mode() {
            Some(InvestorMode::Buyer) => {
                vec![("acquisition cost", session.financials().acquisition_cost.as_str())]
            }
            Some(InvestorMode::Seller) => {
                vec![("target roi", session.financials().target_roi.as_str())]
            }
            None => return vec!["mode"],
        },
    };

    required
        .into_iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| name)
        .collect()
}

/// Whether the session may move forward from its current step.
///
/// Always true at mode selection; always false at the terminal results step.
pub fn can_advance(session: &Session) -> bool {
    session.step().next().is_some() && missing_fields(session).is_empty()
}
