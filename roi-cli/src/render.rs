//! Plain-text rendering of a calculator session for the terminal.

use std::fmt;

use roi_core::calculations::common::round_half_up;
use roi_core::{CashFlowSummary, InvestorMode, Session};
use rust_decimal::Decimal;

/// Formats an amount rounded half-up to two places.
pub fn money(value: Decimal) -> String {
    format!("{:.2}", round_half_up(value))
}

/// Formats a percentage rounded half-up to two places.
pub fn percent(value: Decimal) -> String {
    format!("{:.2}%", round_half_up(value))
}

/// Formats an optional text field, substituting a dash when blank.
fn text_or_dash(s: &str) -> &str {
    if s.trim().is_empty() { "—" } else { s }
}

/// Result screen: property, income breakdown, investment and ROI.
pub struct SessionSummary<'a>(pub &'a Session);

impl fmt::Display for SessionSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let session = self.0;
        let result = session.result();
        let mode = session
            .mode()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "—".to_string());

        writeln!(f, "Mode:                {mode}")?;
        writeln!(
            f,
            "Property:            {} ({})",
            text_or_dash(&session.property().name),
            session.property().property_type.label()
        )?;
        writeln!(
            f,
            "Saleable area:       {}",
            text_or_dash(&session.property().area)
        )?;
        writeln!(
            f,
            "Tenant:              {}",
            text_or_dash(&session.lease().tenant_name)
        )?;
        writeln!(
            f,
            "Maintenance paid by: {}",
            session.expenses().maintenance_payer.label()
        )?;
        writeln!(f)?;

        for line in result.income_statement() {
            writeln!(f, "{:<21}{:>18}", format!("{}:", line.label), money(line.amount))?;
        }
        writeln!(f)?;

        if session.mode() == Some(InvestorMode::Seller) {
            if let Some(price) = result.calculated_selling_price {
                writeln!(f, "{:<21}{:>18}", "Selling price:", money(price))?;
            }
        }
        writeln!(f, "{:<21}{:>18}", "Registry cost (8%):", money(result.registry_cost))?;
        writeln!(f, "{:<21}{:>18}", "Other charges:", money(result.total_other_charges))?;
        writeln!(f, "{:<21}{:>18}", "Total investment:", money(result.total_investment))?;
        write!(f, "{:<21}{:>18}", "ROI:", percent(result.calculated_roi))?;

        if let Some(offer) = session.counter_offer() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Counter offer at {}: ", percent(offer.roi))?;
            if offer.is_achievable() {
                write!(f, "{}", money(offer.price))?;
            } else {
                write!(f, "not achievable ({})", money(offer.price))?;
            }
        }
        Ok(())
    }
}

/// Cash-flow table with a totals line.
pub struct CashFlowTable<'a>(pub &'a Session);

impl fmt::Display for CashFlowTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rows = self.0.cash_flow();
        writeln!(
            f,
            "{:>4} {:>18} {:>18} {:>18}",
            "Year", "Rent", "Expenses", "Net income"
        )?;
        for row in rows {
            writeln!(
                f,
                "{:>4} {:>18} {:>18} {:>18}",
                row.year,
                money(row.annual_rent),
                money(row.annual_expenses),
                money(row.net_income)
            )?;
        }
        let totals = CashFlowSummary::from_rows(rows);
        write!(
            f,
            "{:>4} {:>18} {:>18} {:>18}",
            "Sum",
            money(totals.total_rent),
            money(totals.total_expenses),
            money(totals.total_net_income)
        )
    }
}
