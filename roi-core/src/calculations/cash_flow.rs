//! Year-by-year rental income projection.
//!
//! The monthly rent starts at the lease rent and is compounded by the
//! escalation percentage at each year `y > 1` where `(y - 1)` is a multiple
//! of the escalation frequency. Expenses (property tax plus landlord-paid
//! maintenance) stay flat for the whole horizon.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::calculations::CashFlowProjection;
//! use roi_core::{EngineConfig, Expenses, LeaseTerms};
//!
//! let lease = LeaseTerms {
//!     monthly_rent: "100000".to_string(),
//!     occupation_period: "5".to_string(),
//!     escalation_percent: "5".to_string(),
//!     escalation_frequency: "3".to_string(),
//!     ..Default::default()
//! };
//! let expenses = Expenses {
//!     monthly_property_tax: "5000".to_string(),
//!     ..Default::default()
//! };
//!
//! let config = EngineConfig::default();
//! let rows = CashFlowProjection::new(&config).project(&lease, &expenses);
//!
//! assert_eq!(rows.len(), 5);
//! assert_eq!(rows[2].annual_rent, dec!(1200000));
//! assert_eq!(rows[3].annual_rent, dec!(1260000));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::common::{parse_count_or, parse_or_zero, parse_years_or};
use super::roi::{annualize, landlord_maintenance};
use crate::{CashFlowRow, EngineConfig, Expenses, LeaseTerms};

/// Projects rental cash flow over the occupation period.
#[derive(Debug, Clone)]
pub struct CashFlowProjection<'a> {
    config: &'a EngineConfig,
}

impl<'a> CashFlowProjection<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Builds a fresh row list, one row per projected year starting at 1.
    pub fn project(
        &self,
        lease: &LeaseTerms,
        expenses: &Expenses,
    ) -> Vec<CashFlowRow> {
        let years = self.years(&lease.occupation_period);
        let frequency = parse_count_or(
            &lease.escalation_frequency,
            self.config.default_escalation_frequency_years,
        );
        let escalation_factor =
            Decimal::ONE + parse_or_zero(&lease.escalation_percent) / Decimal::ONE_HUNDRED;
        let annual_expenses = annualize(parse_or_zero(&expenses.monthly_property_tax))
            .saturating_add(landlord_maintenance(
                parse_or_zero(&expenses.monthly_maintenance),
                expenses.maintenance_payer,
            ));

        debug!(years, frequency, %escalation_factor, %annual_expenses, "projecting cash flow");

        let mut monthly_rent = parse_or_zero(&lease.monthly_rent);
        (1..=years)
            .map(|year| {
                if self.escalates_in(year, frequency) {
                    monthly_rent = monthly_rent.saturating_mul(escalation_factor);
                }
                let annual_rent = annualize(monthly_rent);
                CashFlowRow {
                    year,
                    annual_rent,
                    annual_expenses,
                    net_income: annual_rent.saturating_sub(annual_expenses),
                }
            })
            .collect()
    }

    /// Projection length, clamped to the configured maximum.
    fn years(
        &self,
        occupation_period: &str,
    ) -> u32 {
        let years = parse_years_or(occupation_period, self.config.default_occupation_years);
        if years > self.config.max_projection_years {
            warn!(
                years,
                max = self.config.max_projection_years,
                "projection clamped to maximum length"
            );
            return self.config.max_projection_years;
        }
        years
    }

    /// Escalation takes effect from year 2 onwards, every `frequency` years.
    fn escalates_in(
        &self,
        year: u32,
        frequency: u32,
    ) -> bool {
        year > 1 && (year - 1).checked_rem(frequency) == Some(0)
    }
}
