use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Figures derived by the ROI calculation.
///
/// Every value is re-derivable from the session inputs and is replaced
/// wholesale on each calculation, never edited field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub gross_annual_rent: Decimal,
    pub annual_property_tax: Decimal,
    /// Zero when the tenant pays maintenance.
    pub annual_maintenance: Decimal,
    pub net_annual_income: Decimal,
    pub total_other_charges: Decimal,
    /// Price the registry levy is charged on: the acquisition cost for
    /// buyers, the solved selling price for sellers.
    pub base_price: Decimal,
    /// 8% of [`base_price`](Self::base_price).
    pub registry_cost: Decimal,
    pub total_investment: Decimal,
    /// ROI in percent. For sellers this echoes the target ROI.
    pub calculated_roi: Decimal,
    /// Back-solved base price; only set in seller mode.
    pub calculated_selling_price: Option<Decimal>,
}

/// One signed line of the income breakdown shown with the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncomeLine {
    pub label: &'static str,
    pub amount: Decimal,
}

impl RoiResult {
    /// Breaks net income down into signed contributions.
    ///
    /// Costs are reported as negative amounts. The maintenance line is
    /// omitted when it does not reduce income.
    pub fn income_statement(&self) -> Vec<IncomeLine> {
        let mut lines = vec![
            IncomeLine {
                label: "Gross annual rent",
                amount: self.gross_annual_rent,
            },
            IncomeLine {
                label: "Property tax",
                amount: -self.annual_property_tax,
            },
        ];
        if !self.annual_maintenance.is_zero() {
            lines.push(IncomeLine {
                label: "Maintenance",
                amount: -self.annual_maintenance,
            });
        }
        lines.push(IncomeLine {
            label: "Net annual income",
            amount: self.net_annual_income,
        });
        lines
    }
}

/// One projected year of rental income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// 1-based year index.
    pub year: u32,
    pub annual_rent: Decimal,
    pub annual_expenses: Decimal,
    pub net_income: Decimal,
}

/// Totals over a cash-flow projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CashFlowSummary {
    pub years: u32,
    pub total_rent: Decimal,
    pub total_expenses: Decimal,
    pub total_net_income: Decimal,
}

impl CashFlowSummary {
    pub fn from_rows(rows: &[CashFlowRow]) -> Self {
        rows.iter().fold(
            Self {
                years: rows.len() as u32,
                ..Default::default()
            },
            |acc, row| Self {
                total_rent: acc.total_rent.saturating_add(row.annual_rent),
                total_expenses: acc.total_expenses.saturating_add(row.annual_expenses),
                total_net_income: acc.total_net_income.saturating_add(row.net_income),
                ..acc
            },
        )
    }
}

/// Offer price solved for a buyer-specified ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterOffer {
    /// Solved base price. Non-positive means no price reaches the ROI.
    pub price: Decimal,
    /// The desired ROI in percent the price was solved for.
    pub roi: Decimal,
}

impl CounterOffer {
    pub fn is_achievable(&self) -> bool {
        self.price > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn landlord_result() -> RoiResult {
        RoiResult {
            gross_annual_rent: dec!(1200000),
            annual_property_tax: dec!(60000),
            annual_maintenance: dec!(24000),
            net_annual_income: dec!(1116000),
            ..Default::default()
        }
    }

    // =========================================================================
    // income_statement tests
    // =========================================================================

    #[test]
    fn income_statement_reports_costs_as_negative() {
        let lines = landlord_result().income_statement();

        let amounts: Vec<Decimal> = lines.iter().map(|l| l.amount).collect();
        assert_eq!(
            amounts,
            vec![dec!(1200000), dec!(-60000), dec!(-24000), dec!(1116000)]
        );
    }

    #[test]
    fn income_statement_omits_tenant_paid_maintenance() {
        let result = RoiResult {
            annual_maintenance: Decimal::ZERO,
            net_annual_income: dec!(1140000),
            ..landlord_result()
        };

        let labels: Vec<&str> = result.income_statement().iter().map(|l| l.label).collect();

        assert_eq!(
            labels,
            vec!["Gross annual rent", "Property tax", "Net annual income"]
        );
    }

    // =========================================================================
    // CashFlowSummary tests
    // =========================================================================

    #[test]
    fn summary_totals_all_rows() {
        let rows = vec![
            CashFlowRow {
                year: 1,
                annual_rent: dec!(1200),
                annual_expenses: dec!(200),
                net_income: dec!(1000),
            },
            CashFlowRow {
                year: 2,
                annual_rent: dec!(1260),
                annual_expenses: dec!(200),
                net_income: dec!(1060),
            },
        ];

        let summary = CashFlowSummary::from_rows(&rows);

        assert_eq!(summary.years, 2);
        assert_eq!(summary.total_rent, dec!(2460));
        assert_eq!(summary.total_expenses, dec!(400));
        assert_eq!(summary.total_net_income, dec!(2060));
    }

    #[test]
    fn summary_of_empty_projection_is_zero() {
        assert_eq!(CashFlowSummary::from_rows(&[]), CashFlowSummary::default());
    }

    #[test]
    fn counter_offer_achievable_only_when_price_positive() {
        let ok = CounterOffer {
            price: dec!(1),
            roi: dec!(12),
        };
        let zero = CounterOffer {
            price: Decimal::ZERO,
            ..ok
        };
        let negative = CounterOffer {
            price: dec!(-5000),
            ..ok
        };

        assert!(ok.is_achievable());
        assert!(!zero.is_achievable());
        assert!(!negative.is_achievable());
    }
}
