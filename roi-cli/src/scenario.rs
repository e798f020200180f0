//! Scenario files: the inputs of one calculator run, kept on disk.
//!
//! A scenario names the mode and carries one table per wizard section.
//! Field names match the section patch types in `roi_core`; any field may be
//! omitted. Values are text, bare numbers are accepted too.
//!
//! ```toml
//! name = "Harbour Point"
//! mode = "buyer"
//!
//! [property]
//! area = "24000"
//! property_type = "warehouse"
//!
//! [lease]
//! monthly_rent = "100000"
//! occupation_period = "9"
//! escalation_percent = "15"
//! escalation_frequency = "3"
//!
//! [expenses]
//! monthly_property_tax = "5000"
//! monthly_maintenance = "2000"
//! maintenance_payer = "landlord"
//!
//! [financials]
//! acquisition_cost = "10000000"
//! ```

use std::path::Path;

use roi_core::{
    EngineConfig, ExpensesPatch, FinancialsPatch, InvestorMode, LeasePatch, PropertyPatch,
    SectionUpdate, WizardController, WizardStep,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors while reading scenario files.
#[derive(Debug, Error)]
pub enum ScenarioLoadError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV cell held a value outside its enumeration. `row` is 1-based
    /// (header = row 0).
    #[error("unrecognised {column} '{value}' on row {row}")]
    InvalidValue {
        column: &'static str,
        value: String,
        row: usize,
    },
}

/// A scenario stopped at a step whose required fields were blank.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot leave step {step}: missing {}", .missing.join(", "))]
pub struct IncompleteScenario {
    pub step: WizardStep,
    pub missing: Vec<&'static str>,
}

/// Inputs for one calculator run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    pub mode: InvestorMode,
    #[serde(default)]
    pub property: PropertyPatch,
    #[serde(default)]
    pub lease: LeasePatch,
    #[serde(default)]
    pub expenses: ExpensesPatch,
    #[serde(default)]
    pub financials: FinancialsPatch,
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioLoadError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ScenarioLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed scenario")
    }

    /// Walks a fresh wizard through every step the way a user would:
    /// fill a section, then try to advance.
    ///
    /// # Errors
    ///
    /// Returns [`IncompleteScenario`] at the first step that cannot be left.
    pub fn drive(
        &self,
        config: EngineConfig,
    ) -> Result<WizardController, IncompleteScenario> {
        let mut wizard = WizardController::new(config);
        wizard.select_mode(self.mode);

        let sections: [SectionUpdate; 4] = [
            self.property.clone().into(),
            self.lease.clone().into(),
            self.expenses.clone().into(),
            self.financials.clone().into(),
        ];
        for update in sections {
            wizard.update_field(update);
            if !wizard.next_step() {
                return Err(IncompleteScenario {
                    step: wizard.session().step(),
                    missing: wizard.missing_fields(),
                });
            }
            debug!(scenario = self.display_name(), step = %wizard.session().step(), "step completed");
        }

        info!(scenario = self.display_name(), mode = %self.mode, "scenario calculated");
        Ok(wizard)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use roi_core::{MaintenancePayer, PropertyType};
    use rust_decimal_macros::dec;

    use super::*;

    const BUYER_TOML: &str = r#"
name = "Harbour Point"
mode = "buyer"

[property]
area = 24000
property_type = "warehouse"

[lease]
monthly_rent = "1,00,000"
occupation_period = 9

[expenses]
monthly_property_tax = "5000"
monthly_maintenance = "2000"
maintenance_payer = "tenant"

[financials]
acquisition_cost = "10000000"
legal_charges = 25000.5
"#;

    #[test]
    fn toml_scenario_parses_text_and_numbers() {
        let scenario = Scenario::from_toml_str(BUYER_TOML).unwrap();

        assert_eq!(scenario.display_name(), "Harbour Point");
        assert_eq!(scenario.mode, InvestorMode::Buyer);
        assert_eq!(scenario.property.area.as_deref(), Some("24000"));
        assert_eq!(scenario.property.property_type, Some(PropertyType::Warehouse));
        assert_eq!(scenario.lease.monthly_rent.as_deref(), Some("1,00,000"));
        assert_eq!(scenario.lease.occupation_period.as_deref(), Some("9"));
        assert_eq!(scenario.expenses.maintenance_payer, Some(MaintenancePayer::Tenant));
        assert_eq!(scenario.financials.legal_charges.as_deref(), Some("25000.5"));
        assert_eq!(scenario.financials.target_roi, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = Scenario::from_toml_str("mode = \"seller\"\n[lease]\nrent = \"5\"\n");

        assert!(matches!(result, Err(ScenarioLoadError::Toml(_))));
    }

    #[test]
    fn mode_is_required() {
        assert!(Scenario::from_toml_str("[property]\narea = \"10\"\n").is_err());
    }

    #[test]
    fn drive_reaches_results() {
        let scenario = Scenario::from_toml_str(BUYER_TOML).unwrap();

        let wizard = scenario.drive(EngineConfig::default()).unwrap();

        let session = wizard.session();
        assert_eq!(session.step(), WizardStep::Results);
        // Tenant pays maintenance, so only property tax is deducted.
        assert_eq!(session.result().net_annual_income, dec!(1140000));
        assert_eq!(session.result().total_other_charges, dec!(25000.5));
    }

    #[test]
    fn drive_stops_at_first_incomplete_step() {
        let scenario = Scenario::from_toml_str(
            "mode = \"seller\"\n[property]\narea = \"10\"\n[lease]\nmonthly_rent = \"100\"\n",
        )
        .unwrap();

        let err = scenario.drive(EngineConfig::default()).unwrap_err();

        assert_eq!(
            err,
            IncompleteScenario {
                step: WizardStep::Lease,
                missing: vec!["occupation period"],
            }
        );
        assert_eq!(
            err.to_string(),
            "cannot leave step 2 (Lease details): missing occupation period"
        );
    }
}
