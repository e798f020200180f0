use std::fmt;

use serde::Serialize;

use super::{
    CashFlowRow, CounterOffer, Expenses, Financials, InvestorMode, LeaseTerms, PropertyDetails,
    RoiResult,
};

/// Position in the calculator wizard.
///
/// Step 0 picks the mode, steps 1-4 collect input, step 5 shows the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum WizardStep {
    #[default]
    ModeSelection,
    Property,
    Lease,
    Expenses,
    Financials,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        Self::ModeSelection,
        Self::Property,
        Self::Lease,
        Self::Expenses,
        Self::Financials,
        Self::Results,
    ];

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The following step, or `None` at the terminal results step.
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at mode selection.
    pub fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ModeSelection => "Mode selection",
            Self::Property => "Property details",
            Self::Lease => "Lease details",
            Self::Expenses => "Expenses",
            Self::Financials => "Financials",
            Self::Results => "Results",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} ({})", self.index(), self.title())
    }
}

/// All inputs and derived outputs of one calculator run.
///
/// A session is replaced as a whole by the
/// [`WizardController`](crate::wizard::WizardController) on every change;
/// outside the crate it is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub(crate) mode: Option<InvestorMode>,
    pub(crate) step: WizardStep,
    pub(crate) property: PropertyDetails,
    pub(crate) lease: LeaseTerms,
    pub(crate) expenses: Expenses,
    pub(crate) financials: Financials,
    pub(crate) result: RoiResult,
    pub(crate) cash_flow: Vec<CashFlowRow>,
    pub(crate) counter_offer: Option<CounterOffer>,
}

impl Session {
    /// `None` until chosen at step 0.
    pub fn mode(&self) -> Option<InvestorMode> {
        self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn property(&self) -> &PropertyDetails {
        &self.property
    }

    pub fn lease(&self) -> &LeaseTerms {
        &self.lease
    }

    pub fn expenses(&self) -> &Expenses {
        &self.expenses
    }

    pub fn financials(&self) -> &Financials {
        &self.financials
    }

    /// Result of the last calculation; all zero before the first one.
    pub fn result(&self) -> &RoiResult {
        &self.result
    }

    pub fn cash_flow(&self) -> &[CashFlowRow] {
        &self.cash_flow
    }

    pub fn counter_offer(&self) -> Option<&CounterOffer> {
        self.counter_offer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn step_navigation_stays_in_range() {
        assert_eq!(WizardStep::ModeSelection.previous(), None);
        assert_eq!(WizardStep::Results.next(), None);
        assert_eq!(WizardStep::Expenses.next(), Some(WizardStep::Financials));
        assert_eq!(WizardStep::Expenses.previous(), Some(WizardStep::Lease));
    }

    #[test]
    fn step_index_round_trips() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_index(step.index()), Some(step));
        }
        assert_eq!(WizardStep::from_index(6), None);
    }

    #[test]
    fn new_session_starts_at_mode_selection() {
        let session = Session::default();

        assert_eq!(session.step(), WizardStep::ModeSelection);
        assert_eq!(session.mode(), None);
        assert!(session.cash_flow().is_empty());
        assert!(session.counter_offer().is_none());
    }
}
