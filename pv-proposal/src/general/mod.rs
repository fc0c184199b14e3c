pub mod cash_flow;
pub mod finance;

pub use finance::{FinanceError, PlanSurcharges, amortize, payment_plan};
