//! CSV report exporter.
//!
//! Writes a `section,label,value` summary block, followed (standard report)
//! by a blank line and the cash-flow table, or (counter-offer report) by the
//! counter-offer figures.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use roi_core::{CashFlowSummary, ExportError, ReportExporter, ReportKind, Session};
use tracing::info;

use crate::render::{money, percent};

fn record<W: Write>(
    csv: &mut csv::Writer<W>,
    section: &str,
    label: &str,
    value: &str,
) -> csv::Result<()> {
    csv.write_record([section, label, value])
}

/// Writes reports to a CSV file, replacing it if present.
#[derive(Debug, Clone)]
pub struct CsvReportExporter {
    path: PathBuf,
}

impl CsvReportExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes the report to any sink.
    pub fn write_to<W: Write>(
        writer: W,
        session: &Session,
        kind: ReportKind,
    ) -> Result<(), ExportError> {
        let mut csv = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(writer);
        let result = session.result();
        let mode = session.mode().map(|m| m.as_str()).unwrap_or("");

        record(&mut csv, "section", "label", "value")?;
        record(&mut csv, "report", "kind", &kind.to_string())?;
        record(
            &mut csv,
            "report",
            "generated_at",
            &Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        )?;
        record(&mut csv, "report", "mode", mode)?;

        let property = session.property();
        record(&mut csv, "property", "name", &property.name)?;
        record(&mut csv, "property", "address", &property.address)?;
        record(&mut csv, "property", "type", property.property_type.label())?;
        record(&mut csv, "property", "area", &property.area)?;
        let lease = session.lease();
        record(&mut csv, "lease", "tenant", &lease.tenant_name)?;
        record(&mut csv, "lease", "occupation_period", &lease.occupation_period)?;
        record(&mut csv, "lease", "lock_in_period", &lease.lock_in_period)?;
        record(&mut csv, "lease", "security_deposit", &lease.security_deposit)?;

        for line in result.income_statement() {
            record(&mut csv, "income", line.label, &money(line.amount))?;
        }
        if let Some(price) = result.calculated_selling_price {
            record(&mut csv, "investment", "Selling price", &money(price))?;
        }
        record(&mut csv, "investment", "Registry cost", &money(result.registry_cost))?;
        record(&mut csv, "investment", "Other charges", &money(result.total_other_charges))?;
        record(&mut csv, "investment", "Total investment", &money(result.total_investment))?;
        record(&mut csv, "investment", "ROI", &percent(result.calculated_roi))?;

        match kind {
            ReportKind::Standard => {
                csv.write_record([""])?;
                csv.write_record(["year", "annual_rent", "annual_expenses", "net_income"])?;
                for row in session.cash_flow() {
                    csv.write_record([
                        row.year.to_string(),
                        money(row.annual_rent),
                        money(row.annual_expenses),
                        money(row.net_income),
                    ])?;
                }
                if !session.cash_flow().is_empty() {
                    let totals = CashFlowSummary::from_rows(session.cash_flow());
                    csv.write_record([
                        "total".to_string(),
                        money(totals.total_rent),
                        money(totals.total_expenses),
                        money(totals.total_net_income),
                    ])?;
                }
            }
            ReportKind::CounterOffer => {
                if let Some(offer) = session.counter_offer() {
                    let achievable = if offer.is_achievable() { "yes" } else { "no" };
                    record(&mut csv, "counter_offer", "ROI", &percent(offer.roi))?;
                    record(&mut csv, "counter_offer", "Price", &money(offer.price))?;
                    record(&mut csv, "counter_offer", "Achievable", achievable)?;
                }
            }
        }

        csv.flush()?;
        Ok(())
    }
}

impl ReportExporter for CsvReportExporter {
    fn export(
        &self,
        session: &Session,
        kind: ReportKind,
    ) -> Result<(), ExportError> {
        let file = File::create(&self.path)?;
        Self::write_to(file, session, kind)?;
        info!(path = %self.path.display(), %kind, "report exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roi_core::{EngineConfig, ReportError};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::scenario::Scenario;

    const SCENARIO: &str = r#"
mode = "buyer"
[property]
name = "Dock"
area = "24000"
[lease]
monthly_rent = "100000"
occupation_period = "3"
[expenses]
monthly_property_tax = "5000"
monthly_maintenance = "2000"
[financials]
acquisition_cost = "10000000"
"#;

    fn render(
        session: &Session,
        kind: ReportKind,
    ) -> String {
        let mut buf = Vec::new();
        CsvReportExporter::write_to(&mut buf, session, kind).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn standard_report_contains_figures_and_cash_flow() {
        let mut wizard = Scenario::from_toml_str(SCENARIO)
            .unwrap()
            .drive(EngineConfig::default())
            .unwrap();
        wizard.generate_cash_flow();

        let out = render(wizard.session(), ReportKind::Standard);

        assert!(out.contains("report,kind,standard\n"));
        assert!(out.contains("income,Net annual income,1116000.00\n"));
        assert!(out.contains("income,Property tax,-60000.00\n"));
        assert!(out.contains("investment,Total investment,10800000.00\n"));
        assert!(out.contains("investment,ROI,10.33%\n"));
        assert!(out.contains("3,1200000.00,84000.00,1116000.00\n"));
        assert!(out.contains("total,3600000.00,252000.00,3348000.00\n"));
        assert!(!out.contains("counter_offer"));
    }

    #[test]
    fn counter_offer_report_lists_the_offer() {
        let mut wizard = Scenario::from_toml_str(SCENARIO)
            .unwrap()
            .drive(EngineConfig::default())
            .unwrap();
        wizard.calculate_counter_offer(dec!(10));

        let out = render(wizard.session(), ReportKind::CounterOffer);

        assert!(out.contains("counter_offer,ROI,10.00%\n"));
        assert!(out.contains("counter_offer,Price,10333333.33\n"));
        assert!(out.contains("counter_offer,Achievable,yes\n"));
        assert!(!out.contains("annual_rent"));
    }

    #[test]
    fn export_to_missing_directory_is_wrapped() {
        let wizard = Scenario::from_toml_str(SCENARIO)
            .unwrap()
            .drive(EngineConfig::default())
            .unwrap();
        let exporter = CsvReportExporter::new("/nonexistent-dir/report.csv");

        let err = wizard
            .export_report(&exporter, ReportKind::Standard)
            .unwrap_err();

        assert!(matches!(err, ReportError::Export { .. }));
    }
}
