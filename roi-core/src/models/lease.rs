use serde::{Deserialize, Serialize};

use super::patch::{lenient_text, pick};

/// Lease terms of the sitting tenant (wizard step 2).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseTerms {
    pub tenant_name: String,
    /// Occupation period in years; required, and the cash-flow horizon.
    pub occupation_period: String,
    pub lock_in_period: String,
    /// Rent escalation in percent, applied every `escalation_frequency` years.
    pub escalation_percent: String,
    pub escalation_frequency: String,
    /// Required.
    pub monthly_rent: String,
    pub security_deposit: String,
}

/// Partial update for [`LeaseTerms`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeasePatch {
    #[serde(deserialize_with = "lenient_text")]
    pub tenant_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub occupation_period: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub lock_in_period: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub escalation_percent: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub escalation_frequency: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub monthly_rent: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub security_deposit: Option<String>,
}

impl LeaseTerms {
    /// Returns a copy with the provided patch fields applied.
    pub fn merged(
        &self,
        patch: &LeasePatch,
    ) -> Self {
        Self {
            tenant_name: pick(&self.tenant_name, &patch.tenant_name),
            occupation_period: pick(&self.occupation_period, &patch.occupation_period),
            lock_in_period: pick(&self.lock_in_period, &patch.lock_in_period),
            escalation_percent: pick(&self.escalation_percent, &patch.escalation_percent),
            escalation_frequency: pick(&self.escalation_frequency, &patch.escalation_frequency),
            monthly_rent: pick(&self.monthly_rent, &patch.monthly_rent),
            security_deposit: pick(&self.security_deposit, &patch.security_deposit),
        }
    }
}
