use pv_model::{
    CashFlowYear, FIO_B_SCHEDULE, FirstYearSavings, Payback, PaymentPlanResult,
    RegulatorySchedule, SizingResult,
};
use serde::Serialize;
use tracing::info;

use crate::general::cash_flow::{
    first_year_savings, horizon_net_savings, payback, project_with_schedule,
};
use crate::general::finance::{FinanceError, payment_plan};
use crate::simple::proposal_utils::ProposalConfig;
use crate::simple::sizing::size_system;

/// Struct to hold every figure a proposal quotes
#[derive(Debug, Clone, Serialize)]
pub struct ProposalResults {
    pub sizing: SizingResult,
    /// Capacity times the price per kWp
    pub base_cost: f64,
    pub payment: PaymentPlanResult,
    pub first_year: FirstYearSavings,
    pub projection: Vec<CashFlowYear>,
    pub payback: Payback,
    pub horizon_net_savings: f64,

    // Configuration used
    pub config: ProposalConfig,
}

/// Run sizing, payment and projection for one proposal.
///
/// The final amount of the chosen payment plan is the initial outlay of the projection.
pub fn build_proposal(config: &ProposalConfig) -> Result<ProposalResults, FinanceError> {
    let sizing = size_system(&config.sizing_input());
    let base_cost = sizing.capacity_kw * config.price_per_kwp;

    let payment = payment_plan(base_cost, &config.payment, &config.surcharges)?;

    let schedule = match &config.wire_fee_schedule {
        Some(entries) => RegulatorySchedule::new(entries),
        None => FIO_B_SCHEDULE,
    };

    let projection_input =
        config.projection_input(sizing.monthly_generation_kwh, payment.final_amount);
    let projection = project_with_schedule(&projection_input, &schedule);
    let first_year = first_year_savings(&projection_input, &schedule);
    let payback = payback(&projection, payment.final_amount);
    let horizon_net_savings = horizon_net_savings(&projection, payment.final_amount);

    info!(
        panels = sizing.panel_count,
        capacity_kw = sizing.capacity_kw,
        final_amount = payment.final_amount,
        payback_years = ?payback.years(),
        horizon_net_savings,
        "proposal built"
    );

    Ok(ProposalResults {
        sizing,
        base_cost,
        payment,
        first_year,
        projection,
        payback,
        horizon_net_savings,
        config: config.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv_model::{CardTerms, PaymentModality};

    #[test]
    fn test_default_proposal() {
        let results = build_proposal(&ProposalConfig::default()).unwrap();

        assert_eq!(results.sizing.panel_count, 10);
        assert!((results.base_cost - 14300.0).abs() < 1e-6);
        assert!((results.payment.final_amount - 13585.0).abs() < 1e-6);
        assert_eq!(results.projection.len(), 25);
        assert!((results.projection[0].accumulated_cash_flow - (-4896.3508)).abs() < 1e-4);
        assert_eq!(results.payback.year(), Some(2));
        assert!((results.horizon_net_savings - 349676.2148861118).abs() < 1e-3);
        assert!((results.first_year.monthly_saving - 724.0541).abs() < 1e-4);
    }

    #[test]
    fn test_outlay_follows_payment_plan() {
        let config = ProposalConfig {
            payment: PaymentModality::CreditCard(CardTerms {
                installments: 12,
                monthly_rate_pct: 1.25,
            }),
            ..ProposalConfig::default()
        };
        let results = build_proposal(&config).unwrap();
        let outlay = results.payment.final_amount;

        assert!((outlay - 17964.29).abs() < 0.01);
        let first = &results.projection[0];
        assert!((first.accumulated_cash_flow - (first.net_saving - outlay)).abs() < 1e-6);
    }

    #[test]
    fn test_custom_schedule_changes_first_year() {
        let config = ProposalConfig {
            wire_fee_schedule: Some(vec![pv_model::RegulatoryScheduleEntry::new(2024, 0.0)]),
            ..ProposalConfig::default()
        };
        let results = build_proposal(&config).unwrap();

        assert_eq!(results.first_year.payable_pct, 0.0);
        assert_eq!(results.first_year.wire_fee_monthly, 0.0);
        assert_eq!(results.projection[1].payable_pct, 100.0);
    }

    #[test]
    fn test_degenerate_sizing_costs_nothing() {
        let config = ProposalConfig {
            peak_sun_hours: 0.0,
            ..ProposalConfig::default()
        };
        let results = build_proposal(&config).unwrap();

        assert!(results.sizing.is_zero());
        assert_eq!(results.base_cost, 0.0);
        assert_eq!(results.payment.final_amount, 0.0);
    }
}
