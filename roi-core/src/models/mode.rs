use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the deal the calculator is run for.
///
/// Buyers enter an acquisition cost and get an ROI back; sellers enter a
/// target ROI and get a selling price back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorMode {
    Buyer,
    Seller,
}

impl InvestorMode {
    pub fn from_is_buyer(is_buyer: bool) -> Self {
        if is_buyer { Self::Buyer } else { Self::Seller }
    }

    pub fn is_buyer(&self) -> bool {
        matches!(self, Self::Buyer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Seller => "seller",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buyer" | "b" => Some(Self::Buyer),
            "seller" | "s" => Some(Self::Seller),
            _ => None,
        }
    }
}

impl fmt::Display for InvestorMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Buyer => write!(f, "Buyer"),
            Self::Seller => write!(f, "Seller"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Retail,
    Office,
    Warehouse,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Retail => "Retail",
            Self::Office => "Office",
            Self::Warehouse => "Warehouse",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retail" => Some(Self::Retail),
            "office" => Some(Self::Office),
            "warehouse" => Some(Self::Warehouse),
            _ => None,
        }
    }
}

/// Who pays the monthly maintenance charge.
///
/// Only landlord-paid maintenance reduces the landlord's net income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenancePayer {
    #[default]
    Landlord,
    Tenant,
}

impl MaintenancePayer {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Landlord => "Landlord",
            Self::Tenant => "Tenant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landlord" => Some(Self::Landlord),
            "tenant" => Some(Self::Tenant),
            _ => None,
        }
    }
}
