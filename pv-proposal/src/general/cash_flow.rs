use pv_model::{CashFlowYear, FIO_B_SCHEDULE, FirstYearSavings, Payback, RegulatorySchedule};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs of the long-term cash-flow projection.
///
/// Percentages are plain numbers in 0-100 (`_pct`), rates are fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub horizon_years: u32,
    /// Amount paid for the system, booked as a negative flow before year 1.
    pub initial_outlay: f64,
    pub monthly_consumption_kwh: f64,
    /// Energy tariff in the first year (R$/kWh).
    pub tariff: f64,
    /// Monthly generation in the first year (kWh).
    pub monthly_generation_kwh: f64,
    pub self_consumption_pct: f64,
    /// Share of the tariff that corresponds to the wire fee.
    pub wire_fee_fraction_pct: f64,
    /// Calendar year of grid connection.
    pub start_year: i32,
    pub tariff_inflation: f64,
    pub panel_degradation: f64,
    /// Minimum billable energy of the connection tier (kWh/month).
    pub min_availability_kwh: f64,
    /// Public lighting fee billed every month, with or without solar.
    pub fixed_monthly_fee: f64,
}

/// Project the accumulated spend without solar and the accumulated net cash flow
/// with solar over `horizon_years`, using the built-in wire fee schedule.
pub fn project(input: &ProjectionInput) -> Vec<CashFlowYear> {
    project_with_schedule(input, &FIO_B_SCHEDULE)
}

pub fn project_with_schedule(
    input: &ProjectionInput,
    schedule: &RegulatorySchedule,
) -> Vec<CashFlowYear> {
    let mut years = Vec::with_capacity(input.horizon_years as usize);
    let mut accumulated_baseline_spend = 0.0;
    let mut accumulated_cash_flow = -input.initial_outlay;
    let export_share = 1.0 - input.self_consumption_pct / 100.0;

    for year in 1..=input.horizon_years {
        let calendar_year = input.start_year + (year as i32 - 1);
        let payable_pct = schedule.payable_pct(calendar_year);

        let inflation = (1.0 + input.tariff_inflation).powi(year as i32 - 1);
        let tariff = input.tariff * inflation;
        let fixed_fee = input.fixed_monthly_fee * inflation;
        let generation =
            input.monthly_generation_kwh * (1.0 - input.panel_degradation).powi(year as i32 - 1);

        let baseline_spend = 12.0 * input.monthly_consumption_kwh * tariff + 12.0 * fixed_fee;
        accumulated_baseline_spend += baseline_spend;

        let exported_kwh = generation * export_share;
        let wire_fee_cost = exported_kwh
            * (tariff * input.wire_fee_fraction_pct / 100.0)
            * (payable_pct / 100.0)
            * 12.0;
        let availability_cost = input.min_availability_kwh * tariff * 12.0;
        let new_spend = wire_fee_cost + availability_cost + 12.0 * fixed_fee;

        // Savings are floored at zero, a year never reduces the accumulated cash flow
        let net_saving = (baseline_spend - new_spend).max(0.0);
        accumulated_cash_flow += net_saving;

        years.push(CashFlowYear {
            year,
            calendar_year,
            payable_pct,
            net_saving,
            accumulated_baseline_spend,
            accumulated_cash_flow,
        });
    }

    if let Some(last) = years.last() {
        debug!(
            horizon_years = input.horizon_years,
            accumulated_baseline_spend = last.accumulated_baseline_spend,
            accumulated_cash_flow = last.accumulated_cash_flow,
            "cash flow projected"
        );
    }

    years
}

/// Net savings at the end of the horizon, or minus the outlay for an empty projection
pub fn horizon_net_savings(years: &[CashFlowYear], initial_outlay: f64) -> f64 {
    years
        .last()
        .map(|year| year.accumulated_cash_flow)
        .unwrap_or(-initial_outlay)
}

/// First year in which the accumulated cash flow turns positive.
///
/// Within that year the crossing is interpolated linearly from the previous year's
/// accumulation (minus the outlay for year 1). A crossing without a positive gain
/// is reported as the whole year.
pub fn payback(years: &[CashFlowYear], initial_outlay: f64) -> Payback {
    let mut previous = -initial_outlay;

    for entry in years {
        if entry.accumulated_cash_flow > 0.0 {
            let gain = entry.accumulated_cash_flow - previous;
            if gain <= 0.0 || previous > 0.0 {
                return Payback::WholeYear { year: entry.year };
            }
            let months = (entry.year - 1) as f64 * 12.0 + previous.abs() / gain * 12.0;
            return Payback::Interpolated {
                year: entry.year,
                months,
            };
        }
        previous = entry.accumulated_cash_flow;
    }

    Payback::BeyondHorizon {
        horizon_years: years.len() as u32,
    }
}

/// Monthly bill before and after solar in the first year, at the starting tariff.
pub fn first_year_savings(
    input: &ProjectionInput,
    schedule: &RegulatorySchedule,
) -> FirstYearSavings {
    let payable_pct = schedule.payable_pct(input.start_year);
    let self_consumed_kwh = input.monthly_generation_kwh * input.self_consumption_pct / 100.0;
    let exported_kwh = input.monthly_generation_kwh * (1.0 - input.self_consumption_pct / 100.0);

    let old_monthly_bill =
        input.monthly_consumption_kwh * input.tariff + input.fixed_monthly_fee;
    let wire_fee_per_kwh = input.tariff * input.wire_fee_fraction_pct / 100.0;
    let wire_fee_monthly = exported_kwh * wire_fee_per_kwh * payable_pct / 100.0;
    let availability_monthly = input.min_availability_kwh * input.tariff;
    let new_monthly_bill = wire_fee_monthly + availability_monthly + input.fixed_monthly_fee;
    let monthly_saving = (old_monthly_bill - new_monthly_bill).max(0.0);

    FirstYearSavings {
        old_monthly_bill,
        self_consumed_kwh,
        exported_kwh,
        wire_fee_per_kwh,
        payable_pct,
        wire_fee_monthly,
        availability_monthly,
        new_monthly_bill,
        monthly_saving,
        annual_saving: monthly_saving * 12.0,
    }
}
