pub mod general;
pub mod system;

pub use general::regulation::{
    CONNECTION_TIERS, ConnectionTier, FIO_B_SCHEDULE, RegulatorySchedule,
    RegulatoryScheduleEntry,
};
pub use system::finance::{
    CardTerms, CashFlowYear, CashTerms, FinancingTerms, FirstYearSavings, Payback,
    PaymentModality, PaymentPlanResult,
};
pub use system::sizing::{SizingInput, SizingResult};
