use crate::{ExpensesPatch, FinancialsPatch, LeasePatch, PropertyPatch};

/// A partial update addressed to one input section of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionUpdate {
    Property(PropertyPatch),
    Lease(LeasePatch),
    Expenses(ExpensesPatch),
    Financials(FinancialsPatch),
}

impl From<PropertyPatch> for SectionUpdate {
    fn from(patch: PropertyPatch) -> Self {
        Self::Property(patch)
    }
}

impl From<LeasePatch> for SectionUpdate {
    fn from(patch: LeasePatch) -> Self {
        Self::Lease(patch)
    }
}

impl From<ExpensesPatch> for SectionUpdate {
    fn from(patch: ExpensesPatch) -> Self {
        Self::Expenses(patch)
    }
}

impl From<FinancialsPatch> for SectionUpdate {
    fn from(patch: FinancialsPatch) -> Self {
        Self::Financials(patch)
    }
}

impl SectionUpdate {
    pub fn section_name(&self) -> &'static str {
        match self {
            Self::Property(_) => "property",
            Self::Lease(_) => "lease",
            Self::Expenses(_) => "expenses",
            Self::Financials(_) => "financials",
        }
    }
}
