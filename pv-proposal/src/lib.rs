pub mod general;
pub mod simple;

// Re-export commonly used items for convenience
pub use general::cash_flow::{ProjectionInput, first_year_savings, payback, project};
pub use general::finance::{FinanceError, amortize, payment_plan};
pub use simple::proposal::{ProposalResults, build_proposal};
pub use simple::sizing::size_system;
