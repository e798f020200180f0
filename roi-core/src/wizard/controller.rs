use rust_decimal::Decimal;
use tracing::debug;

use super::SectionUpdate;
use super::gating;
use crate::calculations::{CashFlowProjection, CounterOfferSolver, RoiCalculator, RoiInputs};
use crate::report::{self, ReportError, ReportExporter, ReportKind};
use crate::{EngineConfig, InvestorMode, RoiResult, Session, WizardStep};

/// Drives one calculator session through the wizard.
///
/// Every operation builds a new [`Session`] from the current one and swaps
/// it in whole, so readers never see a half-applied change. Operations that
/// are not allowed in the current state are silent no-ops; the boolean
/// returns only tell the caller whether anything changed.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::wizard::WizardController;
/// use roi_core::{ExpensesPatch, FinancialsPatch, InvestorMode, LeasePatch, PropertyPatch, WizardStep};
///
/// let mut wizard = WizardController::default();
/// wizard.select_mode(InvestorMode::Buyer);
///
/// wizard.update_field(PropertyPatch { area: Some("1200".into()), ..Default::default() });
/// assert!(wizard.next_step());
/// wizard.update_field(LeasePatch {
///     monthly_rent: Some("100000".into()),
///     occupation_period: Some("9".into()),
///     ..Default::default()
/// });
/// assert!(wizard.next_step());
/// wizard.update_field(ExpensesPatch {
///     monthly_property_tax: Some("5000".into()),
///     monthly_maintenance: Some("2000".into()),
///     ..Default::default()
/// });
/// assert!(wizard.next_step());
/// wizard.update_field(FinancialsPatch {
///     acquisition_cost: Some("10000000".into()),
///     ..Default::default()
/// });
/// assert!(wizard.next_step());
///
/// assert_eq!(wizard.session().step(), WizardStep::Results);
/// assert_eq!(wizard.session().result().total_investment, dec!(10800000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    session: Session,
    config: EngineConfig,
}

impl WizardController {
    /// Opens a fresh session.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            session: Session::default(),
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Closes the wizard, handing back the final session.
    pub fn into_session(self) -> Session {
        self.session
    }

    fn publish(
        &mut self,
        session: Session,
    ) {
        self.session = session;
    }

    /// Fixes the mode and moves to step 1.
    ///
    /// Only honoured at step 0 while no mode has been chosen.
    pub fn select_mode(
        &mut self,
        mode: InvestorMode,
    ) -> bool {
        if self.session.step != WizardStep::ModeSelection || self.session.mode.is_some() {
            debug!(%mode, step = %self.session.step, "mode already fixed; selection ignored");
            return false;
        }

        debug!(%mode, "mode selected");
        self.publish(Session {
            mode: Some(mode),
            step: WizardStep::Property,
            ..self.session.clone()
        });
        true
    }

    /// Merges the provided fields into their section.
    ///
    /// Values are stored as typed; nothing is validated until calculation.
    pub fn update_field(
        &mut self,
        update: impl Into<SectionUpdate>,
    ) {
        let update = update.into();
        debug!(section = update.section_name(), "section updated");

        let current = &self.session;
        let next = match &update {
            SectionUpdate::Property(patch) => Session {
                property: current.property.merged(patch),
                ..current.clone()
            },
            SectionUpdate::Lease(patch) => Session {
                lease: current.lease.merged(patch),
                ..current.clone()
            },
            SectionUpdate::Expenses(patch) => Session {
                expenses: current.expenses.merged(patch),
                ..current.clone()
            },
            SectionUpdate::Financials(patch) => Session {
                financials: current.financials.merged(patch),
                ..current.clone()
            },
        };
        self.publish(next);
    }

    pub fn can_advance(&self) -> bool {
        gating::can_advance(&self.session)
    }

    /// Required fields blocking the current step.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        gating::missing_fields(&self.session)
    }

    /// Moves forward one step if the current step is complete.
    ///
    /// Leaving the financials step runs the calculation first and stores its
    /// result. At step 0 a mode must have been selected.
    pub fn next_step(&mut self) -> bool {
        let step = self.session.step;
        if !self.can_advance() {
            debug!(%step, missing = ?self.missing_fields(), "advance refused");
            return false;
        }
        let Some(next) = step.next() else {
            return false;
        };
        if self.session.mode.is_none() {
            debug!(%step, "advance refused; no mode selected");
            return false;
        }

        let mut updated = Session {
            step: next,
            ..self.session.clone()
        };
        if step == WizardStep::Financials {
            if let Some(result) = self.calculate() {
                updated.result = result;
            }
        }

        debug!(from = %step, to = %next, "step advanced");
        self.publish(updated);
        true
    }

    /// Moves back one step, keeping every entered and derived value.
    pub fn previous_step(&mut self) -> bool {
        let Some(previous) = self.session.step.previous() else {
            return false;
        };

        debug!(from = %self.session.step, to = %previous, "step retreated");
        self.publish(Session {
            step: previous,
            ..self.session.clone()
        });
        true
    }

    /// Runs the ROI calculation on the current inputs without storing it.
    ///
    /// `None` before a mode is chosen, or when the seller guard skips the
    /// calculation.
    pub fn calculate(&self) -> Option<RoiResult> {
        let mode = self.session.mode?;
        let input = RoiInputs::parse(
            &self.session.lease,
            &self.session.expenses,
            &self.session.financials,
        );
        RoiCalculator.calculate(mode, &input)
    }

    /// Replaces the stored cash-flow projection with a fresh one.
    pub fn generate_cash_flow(&mut self) {
        let rows = CashFlowProjection::new(&self.config)
            .project(&self.session.lease, &self.session.expenses);

        debug!(rows = rows.len(), "cash flow generated");
        self.publish(Session {
            cash_flow: rows,
            ..self.session.clone()
        });
    }

    /// Solves and stores a counter offer against the last calculated result.
    ///
    /// A non-positive `desired_roi` leaves the session untouched.
    pub fn calculate_counter_offer(
        &mut self,
        desired_roi: Decimal,
    ) -> bool {
        let Some(offer) = CounterOfferSolver.solve(&self.session.result, desired_roi) else {
            return false;
        };

        self.publish(Session {
            counter_offer: Some(offer),
            ..self.session.clone()
        });
        true
    }

    /// Hands a read-only view of the session to `exporter`.
    pub fn export_report<E>(
        &self,
        exporter: &E,
        kind: ReportKind,
    ) -> Result<(), ReportError>
    where
        E: ReportExporter + ?Sized,
    {
        report::export_report(&self.session, exporter, kind)
    }
}
