use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// One year of the long-term projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct CashFlowYear {
    /// Year index, starting at 1.
    pub year: u32,
    /// Calendar year this projection year falls in.
    pub calendar_year: i32,
    /// Wire fee percentage payable in this calendar year.
    pub payable_pct: f64,
    /// Net saving of this year alone (never negative).
    pub net_saving: f64,
    /// Cumulative spend on electricity without the PV system.
    pub accumulated_baseline_spend: f64,
    /// Cumulative cash flow with the PV system, starting at minus the outlay.
    pub accumulated_cash_flow: f64,
}

/// When cumulative savings offset the initial outlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub enum Payback {
    /// Paid back inside `year`, after `months` months in total.
    Interpolated { year: u32, months: f64 },
    /// Paid back in `year`, sub-year precision not available.
    WholeYear { year: u32 },
    /// The cash flow never turns positive inside the horizon.
    BeyondHorizon { horizon_years: u32 },
}

impl Payback {
    /// Elapsed time in years, if the outlay is recovered inside the horizon.
    pub fn years(&self) -> Option<f64> {
        match self {
            Payback::Interpolated { months, .. } => Some(months / 12.0),
            Payback::WholeYear { year } => Some(*year as f64),
            Payback::BeyondHorizon { .. } => None,
        }
    }

    pub fn year(&self) -> Option<u32> {
        match self {
            Payback::Interpolated { year, .. } | Payback::WholeYear { year } => Some(*year),
            Payback::BeyondHorizon { .. } => None,
        }
    }
}

/// Monthly bill comparison for the first year, at the starting tariff.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct FirstYearSavings {
    pub old_monthly_bill: f64,
    pub self_consumed_kwh: f64,
    pub exported_kwh: f64,
    /// Estimated wire fee price per exported kWh
    pub wire_fee_per_kwh: f64,
    pub payable_pct: f64,
    pub wire_fee_monthly: f64,
    pub availability_monthly: f64,
    /// Wire fee + availability charge + fixed fee
    pub new_monthly_bill: f64,
    pub monthly_saving: f64,
    pub annual_saving: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct CashTerms {
    /// Upfront discount in percent.
    pub discount_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct FinancingTerms {
    /// Number of monthly installments.
    pub months: u32,
    /// Grace months before the first installment; each one adds a fixed surcharge.
    pub grace_months: u32,
    /// Interest rate per month in percent.
    pub monthly_rate_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct CardTerms {
    /// Number of card installments.
    pub installments: u32,
    /// Card interest rate per month in percent.
    pub monthly_rate_pct: f64,
}

/// How the customer pays for the system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "./finance.ts")]
pub enum PaymentModality {
    Cash(CashTerms),
    Financing(FinancingTerms),
    CreditCard(CardTerms),
}

impl Default for PaymentModality {
    fn default() -> Self {
        PaymentModality::Cash(CashTerms { discount_pct: 5.0 })
    }
}

impl PaymentModality {
    pub fn name(&self) -> &'static str {
        match self {
            PaymentModality::Cash(_) => "Cash",
            PaymentModality::Financing(_) => "Financing",
            PaymentModality::CreditCard(_) => "Credit card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./finance.ts")]
pub struct PaymentPlanResult {
    pub modality: PaymentModality,
    /// Amount the installments are computed on (after surcharges or discount).
    pub principal: f64,
    /// Fixed monthly installment; `None` for cash payment.
    pub installment: Option<f64>,
    /// Total amount paid by the end of the plan.
    pub final_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payback_years() {
        let interpolated = Payback::Interpolated {
            year: 2,
            months: 18.0,
        };
        assert_eq!(interpolated.years(), Some(1.5));
        assert_eq!(interpolated.year(), Some(2));
        assert_eq!(Payback::WholeYear { year: 3 }.years(), Some(3.0));
        let beyond = Payback::BeyondHorizon { horizon_years: 25 };
        assert_eq!(beyond.years(), None);
        assert_eq!(beyond.year(), None);
    }

    #[test]
    fn test_default_modality_is_discounted_cash() {
        match PaymentModality::default() {
            PaymentModality::Cash(terms) => assert_eq!(terms.discount_pct, 5.0),
            other => panic!("unexpected modality {:?}", other),
        }
    }
}
