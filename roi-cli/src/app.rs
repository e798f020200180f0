//! Command handlers behind the `roi` binary.
//!
//! Each handler drives [`WizardController`]s the way the mobile front end
//! does and returns what should be printed, leaving I/O to `main`.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use roi_core::{EngineConfig, InvestorMode, ReportKind, WizardController};
use rust_decimal::Decimal;
use tracing::warn;

use crate::export::CsvReportExporter;
use crate::render::{money, percent};
use crate::scenario::Scenario;

/// What to do after a scenario reaches the results step.
#[derive(Debug, Clone, Default)]
pub struct RunOptions<'a> {
    pub cash_flow: bool,
    pub counter_offer_roi: Option<Decimal>,
    pub export: Option<&'a Path>,
    pub report_kind: ReportKind,
}

/// Drives one scenario to the results step and applies `options`.
///
/// # Errors
///
/// Fails when the scenario cannot pass a step or the report cannot be
/// written.
pub fn run_scenario(
    scenario: &Scenario,
    config: EngineConfig,
    options: &RunOptions<'_>,
) -> Result<WizardController> {
    let mut wizard = scenario
        .drive(config)
        .with_context(|| format!("Scenario '{}' is incomplete", scenario.display_name()))?;

    if options.cash_flow {
        wizard.generate_cash_flow();
    }
    if let Some(roi) = options.counter_offer_roi {
        if !wizard.calculate_counter_offer(roi) {
            warn!(%roi, "counter offer ROI must be positive; ignored");
        }
    }
    if let Some(path) = options.export {
        wizard
            .export_report(&CsvReportExporter::new(path), options.report_kind)
            .with_context(|| format!("Failed to export report to {}", path.display()))?;
    }

    Ok(wizard)
}

/// One line of batch output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    Calculated {
        name: String,
        mode: InvestorMode,
        /// Acquisition cost for buyers, solved selling price for sellers.
        price: Decimal,
        roi: Decimal,
        net_annual_income: Decimal,
    },
    Incomplete {
        name: String,
        reason: String,
    },
}

impl fmt::Display for BatchOutcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Calculated {
                name,
                mode,
                price,
                roi,
                net_annual_income,
            } => write!(
                f,
                "{name:<24} {:<6} price {:>16}  net {:>14}  roi {:>8}",
                mode.as_str(),
                money(*price),
                money(*net_annual_income),
                percent(*roi)
            ),
            Self::Incomplete { name, reason } => write!(f, "{name:<24} incomplete: {reason}"),
        }
    }
}

/// Runs every scenario independently, never stopping at a failed one.
pub fn run_batch(
    scenarios: &[Scenario],
    config: &EngineConfig,
) -> Vec<BatchOutcome> {
    scenarios
        .iter()
        .map(|scenario| {
            let name = scenario.display_name().to_string();
            match scenario.drive(config.clone()) {
                Ok(wizard) => {
                    let session = wizard.session();
                    let result = session.result();
                    BatchOutcome::Calculated {
                        name,
                        mode: scenario.mode,
                        price: result.base_price,
                        roi: result.calculated_roi,
                        net_annual_income: result.net_annual_income,
                    }
                }
                Err(err) => BatchOutcome::Incomplete {
                    name,
                    reason: err.to_string(),
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::csv_loader;

    const BATCH: &str = "\
name,mode,area,monthly_rent,occupation_period,monthly_property_tax,monthly_maintenance,acquisition_cost,target_roi
Dock,buyer,24000,100000,9,5000,2000,10000000,
Dock resale,seller,24000,100000,9,5000,2000,,12
No area,buyer,,100000,9,5000,2000,10000000,
";

    #[test]
    fn batch_keeps_going_past_incomplete_rows() {
        let scenarios = csv_loader::load_from_str(BATCH).unwrap();

        let outcomes = run_batch(&scenarios, &EngineConfig::default());

        assert_eq!(outcomes.len(), 3);
        match &outcomes[0] {
            BatchOutcome::Calculated {
                price,
                net_annual_income,
                ..
            } => {
                assert_eq!(*price, dec!(10000000));
                assert_eq!(*net_annual_income, dec!(1116000));
            }
            other => panic!("expected calculated, got {other:?}"),
        }
        match &outcomes[1] {
            BatchOutcome::Calculated { price, roi, .. } => {
                assert_eq!(*roi, dec!(12));
                // 1,116,000 / 12% = 9,300,000 total, over 1.08.
                assert!((*price - dec!(8611111.11)).abs() < dec!(0.01));
            }
            other => panic!("expected calculated, got {other:?}"),
        }
        assert_eq!(
            outcomes[2],
            BatchOutcome::Incomplete {
                name: "No area".to_string(),
                reason: "cannot leave step 1 (Property details): missing saleable area"
                    .to_string(),
            }
        );
    }

    #[test]
    fn batch_price_is_the_calculated_base_price() {
        let scenarios = csv_loader::load_from_str(BATCH).unwrap();
        let config = EngineConfig::default();

        let outcomes = run_batch(&scenarios[..2], &config);

        for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
            let wizard = scenario.drive(config.clone()).unwrap();
            let BatchOutcome::Calculated { price, .. } = outcome else {
                panic!("expected calculated, got {outcome:?}");
            };
            assert_eq!(*price, wizard.session().result().base_price);
        }
    }

    #[test]
    fn run_scenario_applies_cash_flow_and_counter_offer() {
        let scenarios = csv_loader::load_from_str(BATCH).unwrap();
        let options = RunOptions {
            cash_flow: true,
            counter_offer_roi: Some(dec!(12)),
            ..Default::default()
        };

        let wizard = run_scenario(&scenarios[0], EngineConfig::default(), &options).unwrap();

        assert_eq!(wizard.session().cash_flow().len(), 9);
        assert_eq!(wizard.session().counter_offer().map(|o| o.roi), Some(dec!(12)));
    }

    #[test]
    fn run_scenario_reports_incomplete_scenario() {
        let scenarios = csv_loader::load_from_str(BATCH).unwrap();

        let err = run_scenario(&scenarios[2], EngineConfig::default(), &RunOptions::default())
            .unwrap_err();

        assert_eq!(err.to_string(), "Scenario 'No area' is incomplete");
    }
}
