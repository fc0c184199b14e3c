use pv_model::{CardTerms, CashTerms, FinancingTerms, PaymentModality, PaymentPlanResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinanceError {
    #[error("invalid argument '{param}': {message}")]
    InvalidArgument { param: &'static str, message: String },
}

/// Fixed surcharges added to the base system cost before amortization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSurcharges {
    /// Added to the financed amount for every grace month.
    pub grace_cost_per_month: f64,
    /// Flat fee added to credit card purchases.
    pub card_fixed_fee: f64,
}

impl Default for PlanSurcharges {
    fn default() -> Self {
        Self {
            grace_cost_per_month: 1350.0,
            card_fixed_fee: 2286.0,
        }
    }
}

/// Fixed installment paying off `principal` in `num_periods` periods.
///
/// Uses the standard annuity formula `P * i / (1 - (1 + i)^-n)`; a zero rate
/// degenerates to the straight-line `P / n`.
pub fn amortize(
    principal: f64,
    rate_per_period: f64,
    num_periods: u32,
) -> Result<f64, FinanceError> {
    if num_periods == 0 {
        return Err(FinanceError::InvalidArgument {
            param: "num_periods",
            message: "at least one period is required".to_string(),
        });
    }
    if !principal.is_finite() {
        return Err(FinanceError::InvalidArgument {
            param: "principal",
            message: format!("{} is not a finite amount", principal),
        });
    }
    if !rate_per_period.is_finite() || rate_per_period < 0.0 {
        return Err(FinanceError::InvalidArgument {
            param: "rate_per_period",
            message: format!("{} is not a non-negative rate", rate_per_period),
        });
    }

    let n = num_periods as f64;
    if rate_per_period == 0.0 {
        return Ok(principal / n);
    }

    Ok(principal * rate_per_period / (1.0 - (1.0 + rate_per_period).powf(-n)))
}

/// Upfront payment with a discount; no installments.
pub fn cash_plan(base_cost: f64, terms: CashTerms) -> PaymentPlanResult {
    let final_amount = base_cost * (1.0 - terms.discount_pct / 100.0);
    PaymentPlanResult {
        modality: PaymentModality::Cash(terms),
        principal: final_amount,
        installment: None,
        final_amount,
    }
}

/// Bank financing; every grace month adds a fixed surcharge to the principal.
pub fn financing_plan(
    base_cost: f64,
    terms: FinancingTerms,
    surcharges: &PlanSurcharges,
) -> Result<PaymentPlanResult, FinanceError> {
    let principal = base_cost + terms.grace_months as f64 * surcharges.grace_cost_per_month;
    let installment = amortize(principal, terms.monthly_rate_pct / 100.0, terms.months)?;

    Ok(PaymentPlanResult {
        modality: PaymentModality::Financing(terms),
        principal,
        installment: Some(installment),
        final_amount: installment * terms.months as f64,
    })
}

/// Credit card installments on the base cost plus a flat card fee.
pub fn card_plan(
    base_cost: f64,
    terms: CardTerms,
    surcharges: &PlanSurcharges,
) -> Result<PaymentPlanResult, FinanceError> {
    let principal = base_cost + surcharges.card_fixed_fee;
    let installment = amortize(principal, terms.monthly_rate_pct / 100.0, terms.installments)?;

    Ok(PaymentPlanResult {
        modality: PaymentModality::CreditCard(terms),
        principal,
        installment: Some(installment),
        final_amount: installment * terms.installments as f64,
    })
}

pub fn payment_plan(
    base_cost: f64,
    modality: &PaymentModality,
    surcharges: &PlanSurcharges,
) -> Result<PaymentPlanResult, FinanceError> {
    let plan = match *modality {
        PaymentModality::Cash(terms) => cash_plan(base_cost, terms),
        PaymentModality::Financing(terms) => financing_plan(base_cost, terms, surcharges)?,
        PaymentModality::CreditCard(terms) => card_plan(base_cost, terms, surcharges)?,
    };

    debug!(
        modality = modality.name(),
        principal = plan.principal,
        installment = ?plan.installment,
        final_amount = plan.final_amount,
        "payment plan computed"
    );

    Ok(plan)
}
