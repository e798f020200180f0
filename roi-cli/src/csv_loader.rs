//! CSV loader for batches of calculator scenarios.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so order does not matter. Only
//! `mode` is structurally required; an empty cell means the field was not
//! provided, which the wizard treats the same as a blank input.
//!
//! | Column | Section | Notes |
//! |--------|---------|-------|
//! | `name` | - | Label used in output |
//! | `mode` | - | `buyer` or `seller` |
//! | `property_type` | property | `retail`, `office` or `warehouse` |
//! | `area` | property | required to pass step 1 |
//! | `monthly_rent` | lease | required to pass step 2 |
//! | `occupation_period` | lease | required to pass step 2 |
//! | `escalation_percent` | lease | |
//! | `escalation_frequency` | lease | |
//! | `monthly_property_tax` | expenses | required to pass step 3 |
//! | `monthly_maintenance` | expenses | required to pass step 3 |
//! | `maintenance_payer` | expenses | `landlord` or `tenant` |
//! | `acquisition_cost` | financials | required for buyers |
//! | `target_roi` | financials | required for sellers |
//! | `legal_charges` | financials | |
//! | `electricity_charges` | financials | |
//! | `dg_charges` | financials | |
//! | `fire_fighting_charges` | financials | |
//!
//! ### Minimal example
//!
//! ```csv
//! name,mode,area,monthly_rent,occupation_period,monthly_property_tax,monthly_maintenance,acquisition_cost
//! Harbour Point,buyer,24000,100000,9,5000,2000,10000000
//! ```

use std::path::Path;

use roi_core::{
    ExpensesPatch, FinancialsPatch, InvestorMode, LeasePatch, MaintenancePayer, PropertyPatch,
    PropertyType,
};
use serde::Deserialize;

use crate::scenario::{Scenario, ScenarioLoadError};

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: Option<String>,
    mode: String,
    property_type: Option<String>,
    area: Option<String>,
    monthly_rent: Option<String>,
    occupation_period: Option<String>,
    escalation_percent: Option<String>,
    escalation_frequency: Option<String>,
    monthly_property_tax: Option<String>,
    monthly_maintenance: Option<String>,
    maintenance_payer: Option<String>,
    acquisition_cost: Option<String>,
    target_roi: Option<String>,
    legal_charges: Option<String>,
    electricity_charges: Option<String>,
    dg_charges: Option<String>,
    fire_fighting_charges: Option<String>,
}

/// Parses an optional enumeration cell, reporting the row on failure.
fn parse_cell<T>(
    cell: Option<String>,
    column: &'static str,
    row: usize,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ScenarioLoadError> {
    cell.map(|value| parse(&value).ok_or(ScenarioLoadError::InvalidValue { column, value, row }))
        .transpose()
}

/// Convert a single CSV row into a [`Scenario`].
///
/// `row_number` is 1-based (for error messages).
fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoadError> {
    let mode = InvestorMode::parse(&row.mode).ok_or_else(|| ScenarioLoadError::InvalidValue {
        column: "mode",
        value: row.mode.clone(),
        row: row_number,
    })?;
    let property_type = parse_cell(
        row.property_type,
        "property_type",
        row_number,
        PropertyType::parse,
    )?;
    let maintenance_payer = parse_cell(
        row.maintenance_payer,
        "maintenance_payer",
        row_number,
        MaintenancePayer::parse,
    )?;

    Ok(Scenario {
        name: row.name,
        mode,
        property: PropertyPatch {
            property_type,
            area: row.area,
            ..Default::default()
        },
        lease: LeasePatch {
            monthly_rent: row.monthly_rent,
            occupation_period: row.occupation_period,
            escalation_percent: row.escalation_percent,
            escalation_frequency: row.escalation_frequency,
            ..Default::default()
        },
        expenses: ExpensesPatch {
            monthly_property_tax: row.monthly_property_tax,
            monthly_maintenance: row.monthly_maintenance,
            maintenance_payer,
        },
        financials: FinancialsPatch {
            acquisition_cost: row.acquisition_cost,
            target_roi: row.target_roi,
            legal_charges: row.legal_charges,
            electricity_charges: row.electricity_charges,
            dg_charges: row.dg_charges,
            fire_fighting_charges: row.fire_fighting_charges,
        },
    })
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [`ScenarioLoadError::Csv`] if the CSV is structurally invalid or the
///   `mode` column is missing.
/// * [`ScenarioLoadError::InvalidValue`] if a mode, property type or
///   maintenance payer cell is not recognised.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}
