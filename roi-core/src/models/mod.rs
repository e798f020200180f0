mod expenses;
mod financials;
mod lease;
mod mode;
mod patch;
mod property;
mod results;
mod session;

pub use expenses::{Expenses, ExpensesPatch};
pub use financials::{Financials, FinancialsPatch};
pub use lease::{LeasePatch, LeaseTerms};
pub use mode::{InvestorMode, MaintenancePayer, PropertyType};
pub use property::{PropertyDetails, PropertyPatch};
pub use results::{CashFlowRow, CashFlowSummary, CounterOffer, IncomeLine, RoiResult};
pub use session::{Session, WizardStep};
