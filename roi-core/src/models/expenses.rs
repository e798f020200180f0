use serde::{Deserialize, Serialize};

use super::MaintenancePayer;
use super::patch::{lenient_text, pick};

/// Recurring monthly outgoings on the property (wizard step 3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expenses {
    pub monthly_property_tax: String,
    pub monthly_maintenance: String,
    pub maintenance_payer: MaintenancePayer,
}

/// Partial update for [`Expenses`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExpensesPatch {
    #[serde(deserialize_with = "lenient_text")]
    pub monthly_property_tax: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub monthly_maintenance: Option<String>,
    pub maintenance_payer: Option<MaintenancePayer>,
}

impl Expenses {
    /// Returns a copy with the provided patch fields applied.
    pub fn merged(
        &self,
        patch: &ExpensesPatch,
    ) -> Self {
        Self {
            monthly_property_tax: pick(&self.monthly_property_tax, &patch.monthly_property_tax),
            monthly_maintenance: pick(&self.monthly_maintenance, &patch.monthly_maintenance),
            maintenance_payer: patch.maintenance_payer.unwrap_or(self.maintenance_payer),
        }
    }
}
