//! Forward (buyer) and reverse (seller) ROI calculations.
//!
//! # Derivations
//!
//! | Value | Formula |
//! |-------|---------|
//! | Gross annual rent | monthly rent × 12 |
//! | Annual property tax | monthly tax × 12 |
//! | Annual maintenance | monthly maintenance × 12 if landlord-paid, else 0 |
//! | Net annual income | gross rent − property tax − maintenance |
//! | Other charges | legal + electricity + DG + fire fighting |
//! | Registry cost | base price × 8% |
//! | Total investment | base price + registry cost + other charges |
//! | ROI | net annual income ÷ total investment × 100 |
//!
//! Buyers supply the base price (acquisition cost) and get the ROI. Sellers
//! supply the ROI and the base price is solved by inverting the total
//! investment relation: `base = (net ÷ (roi ÷ 100) − other) ÷ 1.08`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::calculations::{RoiCalculator, RoiInputs};
//! use roi_core::{InvestorMode, MaintenancePayer};
//!
//! let input = RoiInputs {
//!     monthly_rent: dec!(100000),
//!     monthly_property_tax: dec!(5000),
//!     monthly_maintenance: dec!(2000),
//!     maintenance_payer: MaintenancePayer::Landlord,
//!     acquisition_cost: dec!(10000000),
//!     ..Default::default()
//! };
//!
//! let result = RoiCalculator.calculate(InvestorMode::Buyer, &input).unwrap();
//!
//! assert_eq!(result.net_annual_income, dec!(1116000));
//! assert_eq!(result.total_investment, dec!(10800000));
//! assert_eq!(result.calculated_roi.round_dp(2), dec!(10.33));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::common::parse_or_zero;
use crate::{Expenses, Financials, InvestorMode, LeaseTerms, MaintenancePayer, RoiResult};

/// Registry levy applied to the base price (8%).
pub const REGISTRY_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Numeric inputs to the ROI calculation, parsed from the session text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiInputs {
    pub monthly_rent: Decimal,
    pub monthly_property_tax: Decimal,
    pub monthly_maintenance: Decimal,
    pub maintenance_payer: MaintenancePayer,
    /// Base price in buyer mode.
    pub acquisition_cost: Decimal,
    /// Target ROI in percent, seller mode.
    pub target_roi: Decimal,
    pub legal_charges: Decimal,
    pub electricity_charges: Decimal,
    pub dg_charges: Decimal,
    pub fire_fighting_charges: Decimal,
}

impl RoiInputs {
    /// Parses the relevant session sections. Unparsable fields become zero.
    pub fn parse(
        lease: &LeaseTerms,
        expenses: &Expenses,
        financials: &Financials,
    ) -> Self {
        Self {
            monthly_rent: parse_or_zero(&lease.monthly_rent),
            monthly_property_tax: parse_or_zero(&expenses.monthly_property_tax),
            monthly_maintenance: parse_or_zero(&expenses.monthly_maintenance),
            maintenance_payer: expenses.maintenance_payer,
            acquisition_cost: parse_or_zero(&financials.acquisition_cost),
            target_roi: parse_or_zero(&financials.target_roi),
            legal_charges: parse_or_zero(&financials.legal_charges),
            electricity_charges: parse_or_zero(&financials.electricity_charges),
            dg_charges: parse_or_zero(&financials.dg_charges),
            fire_fighting_charges: parse_or_zero(&financials.fire_fighting_charges),
        }
    }
}

/// Annualises a monthly amount.
pub(crate) fn annualize(monthly: Decimal) -> Decimal {
    monthly.saturating_mul(MONTHS_PER_YEAR)
}

/// Annual maintenance borne by the landlord.
pub(crate) fn landlord_maintenance(
    monthly_maintenance: Decimal,
    payer: MaintenancePayer,
) -> Decimal {
    match payer {
        MaintenancePayer::Landlord => annualize(monthly_maintenance),
        MaintenancePayer::Tenant => Decimal::ZERO,
    }
}

/// Solves the base price whose total investment yields `roi` percent.
///
/// Returns `None` when `roi` is not positive or the division overflows.
pub(crate) fn base_price_for_roi(
    net_annual_income: Decimal,
    total_other_charges: Decimal,
    roi: Decimal,
) -> Option<Decimal> {
    if roi <= Decimal::ZERO {
        return None;
    }
    let required_total_investment = net_annual_income.checked_div(roi / Decimal::ONE_HUNDRED)?;
    (required_total_investment.saturating_sub(total_other_charges))
        .checked_div(Decimal::ONE + REGISTRY_RATE)
}

/// Stateless ROI calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoiCalculator;

impl RoiCalculator {
    /// Runs the calculation for `mode`.
    ///
    /// Returns `None` only in seller mode when the target ROI is not positive
    /// (or so small the solve overflows); callers keep their previous result
    /// in that case.
    pub fn calculate(
        &self,
        mode: InvestorMode,
        input: &RoiInputs,
    ) -> Option<RoiResult> {
        let result = match mode {
            InvestorMode::Buyer => Some(self.calculate_buyer(input)),
            InvestorMode::Seller => self.calculate_seller(input),
        };
        if let Some(r) = &result {
            info!(
                %mode,
                net_annual_income = %r.net_annual_income,
                total_investment = %r.total_investment,
                roi = %r.calculated_roi,
                "roi calculated"
            );
        }
        result
    }

    /// Forward calculation: ROI from the acquisition cost.
    pub fn calculate_buyer(
        &self,
        input: &RoiInputs,
    ) -> RoiResult {
        let income = self.income(input);
        let total_other_charges = self.total_other_charges(input);
        let base_price = input.acquisition_cost;
        let registry_cost = self.registry_cost(base_price);
        let total_investment = self.total_investment(base_price, registry_cost, total_other_charges);
        let calculated_roi = self.roi(income.net_annual_income, total_investment);

        RoiResult {
            total_other_charges,
            base_price,
            registry_cost,
            total_investment,
            calculated_roi,
            calculated_selling_price: None,
            ..income
        }
    }

    /// Reverse calculation: selling price from the target ROI.
    ///
    /// The resulting `calculated_roi` is the target itself, not a re-check
    /// of the solved price.
    pub fn calculate_seller(
        &self,
        input: &RoiInputs,
    ) -> Option<RoiResult> {
        let target_roi = input.target_roi;
        if target_roi <= Decimal::ZERO {
            warn!(%target_roi, "target roi not positive; seller calculation skipped");
            return None;
        }

        let income = self.income(input);
        let total_other_charges = self.total_other_charges(input);
        let Some(base_price) =
            base_price_for_roi(income.net_annual_income, total_other_charges, target_roi)
        else {
            warn!(%target_roi, "selling price solve overflowed; seller calculation skipped");
            return None;
        };
        let registry_cost = self.registry_cost(base_price);
        let total_investment = self.total_investment(base_price, registry_cost, total_other_charges);

        Some(RoiResult {
            total_other_charges,
            base_price,
            registry_cost,
            total_investment,
            calculated_roi: target_roi,
            calculated_selling_price: Some(base_price),
            ..income
        })
    }

    /// Income lines shared by both modes; the remaining fields are zero.
    fn income(
        &self,
        input: &RoiInputs,
    ) -> RoiResult {
        let gross_annual_rent = annualize(input.monthly_rent);
        let annual_property_tax = annualize(input.monthly_property_tax);
        let annual_maintenance =
            landlord_maintenance(input.monthly_maintenance, input.maintenance_payer);
        let net_annual_income = gross_annual_rent
            .saturating_sub(annual_property_tax)
            .saturating_sub(annual_maintenance);

        RoiResult {
            gross_annual_rent,
            annual_property_tax,
            annual_maintenance,
            net_annual_income,
            ..Default::default()
        }
    }

    fn total_other_charges(
        &self,
        input: &RoiInputs,
    ) -> Decimal {
        input
            .legal_charges
            .saturating_add(input.electricity_charges)
            .saturating_add(input.dg_charges)
            .saturating_add(input.fire_fighting_charges)
    }

    fn registry_cost(
        &self,
        base_price: Decimal,
    ) -> Decimal {
        base_price * REGISTRY_RATE
    }

    fn total_investment(
        &self,
        base_price: Decimal,
        registry_cost: Decimal,
        total_other_charges: Decimal,
    ) -> Decimal {
        base_price
            .saturating_add(registry_cost)
            .saturating_add(total_other_charges)
    }

    fn roi(
        &self,
        net_annual_income: Decimal,
        total_investment: Decimal,
    ) -> Decimal {
        if total_investment <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        net_annual_income
            .checked_div(total_investment)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or_else(|| {
                warn!(%net_annual_income, %total_investment, "roi overflowed; reported as zero");
                Decimal::ZERO
            })
    }
}
