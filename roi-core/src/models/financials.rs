use serde::{Deserialize, Serialize};

use super::patch::{lenient_text, pick};

/// Deal figures (wizard step 4).
///
/// Buyers must fill `acquisition_cost`, sellers `target_roi`. The four
/// charges are optional one-off costs added on top of the base price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financials {
    pub acquisition_cost: String,
    /// Target ROI in percent.
    pub target_roi: String,
    pub legal_charges: String,
    pub electricity_charges: String,
    pub dg_charges: String,
    pub fire_fighting_charges: String,
}

/// Partial update for [`Financials`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinancialsPatch {
    #[serde(deserialize_with = "lenient_text")]
    pub acquisition_cost: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub target_roi: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub legal_charges: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub electricity_charges: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dg_charges: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub fire_fighting_charges: Option<String>,
}

impl Financials {
    /// Returns a copy with the provided patch fields applied.
    pub fn merged(
        &self,
        patch: &FinancialsPatch,
    ) -> Self {
        Self {
            acquisition_cost: pick(&self.acquisition_cost, &patch.acquisition_cost),
            target_roi: pick(&self.target_roi, &patch.target_roi),
            legal_charges: pick(&self.legal_charges, &patch.legal_charges),
            electricity_charges: pick(&self.electricity_charges, &patch.electricity_charges),
            dg_charges: pick(&self.dg_charges, &patch.dg_charges),
            fire_fighting_charges: pick(&self.fire_fighting_charges, &patch.fire_fighting_charges),
        }
    }
}
