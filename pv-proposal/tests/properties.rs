use proptest::prelude::*;
use pv_model::{FIO_B_SCHEDULE, SizingInput, SizingResult};
use pv_proposal::general::cash_flow::ProjectionInput;
use pv_proposal::{amortize, project, size_system};

fn projection(
    tariff: f64,
    consumption: f64,
    generation: f64,
    self_consumption_pct: f64,
    start_year: i32,
) -> ProjectionInput {
    ProjectionInput {
        horizon_years: 25,
        initial_outlay: 15000.0,
        monthly_consumption_kwh: consumption,
        tariff,
        monthly_generation_kwh: generation,
        self_consumption_pct,
        wire_fee_fraction_pct: 28.0,
        start_year,
        tariff_inflation: 0.05,
        panel_degradation: 0.005,
        min_availability_kwh: 50.0,
        fixed_monthly_fee: 12.0,
    }
}

proptest! {
    #[test]
    fn non_positive_inputs_size_nothing(
        consumption in -1000.0f64..=0.0,
        peak_sun_hours in -5.0f64..=0.0,
        loss in 0.0f64..0.5,
        watts in 1u32..800,
    ) {
        let base = SizingInput {
            consumption_kwh: 500.0,
            peak_sun_hours: 5.0,
            loss_fraction: loss,
            panel_watts: watts,
            panel_override: None,
        };
        let no_consumption = SizingInput { consumption_kwh: consumption, ..base.clone() };
        let no_sun = SizingInput { peak_sun_hours, ..base.clone() };
        let no_watts = SizingInput { panel_watts: 0, ..base };

        prop_assert_eq!(size_system(&no_consumption), SizingResult::zero());
        prop_assert_eq!(size_system(&no_sun), SizingResult::zero());
        prop_assert_eq!(size_system(&no_watts), SizingResult::zero());
    }

    #[test]
    fn recommended_count_is_ceiling_of_requirement(
        consumption in 1.0f64..5000.0,
        peak_sun_hours in 3.0f64..7.0,
        loss in 0.05f64..0.25,
        watts in prop::sample::select(vec![585u32, 605, 650, 700]),
    ) {
        let result = size_system(&SizingInput {
            consumption_kwh: consumption,
            peak_sun_hours,
            loss_fraction: loss,
            panel_watts: watts,
            panel_override: None,
        });
        let per_panel = (watts as f64 / 1000.0) * peak_sun_hours * 30.0 * (1.0 - loss);
        let expected = ((consumption / per_panel).ceil() as u32).max(1);

        prop_assert_eq!(result.panel_count, expected);
        prop_assert!((result.capacity_kw - expected as f64 * watts as f64 / 1000.0).abs() < 1e-9);
        prop_assert!(result.monthly_generation_kwh >= consumption - 1e-9);
    }

    #[test]
    fn override_is_taken_verbatim(
        consumption in 1.0f64..5000.0,
        count in 1u32..200,
    ) {
        let result = size_system(&SizingInput {
            consumption_kwh: consumption,
            peak_sun_hours: 5.0,
            loss_fraction: 0.15,
            panel_watts: 650,
            panel_override: Some(count),
        });
        prop_assert_eq!(result.panel_count, count);
        prop_assert!((result.monthly_generation_kwh - count as f64 * 82.875).abs() < 1e-6);
    }

    #[test]
    fn installments_pay_off_the_principal(
        principal in 1000.0f64..100_000.0,
        rate in 0.001f64..0.05,
        periods in 1u32..120,
    ) {
        let installment = amortize(principal, rate, periods).unwrap();
        let balance = (0..periods)
            .fold(principal, |balance, _| balance * (1.0 + rate) - installment);
        prop_assert!(balance.abs() < 1e-6 * principal, "balance {}", balance);
    }

    #[test]
    fn zero_rate_divides_evenly(principal in 0.0f64..100_000.0, periods in 1u32..120) {
        prop_assert_eq!(amortize(principal, 0.0, periods).unwrap(), principal / periods as f64);
    }

    #[test]
    fn accumulated_series_are_monotonic(
        tariff in 0.5f64..3.0,
        consumption in 50.0f64..3000.0,
        generation in 0.0f64..3000.0,
        self_consumption_pct in 10.0f64..=100.0,
        start_year in 2023i32..2030,
    ) {
        let input = projection(tariff, consumption, generation, self_consumption_pct, start_year);
        let years = project(&input);

        prop_assert_eq!(years.len(), 25);
        prop_assert!(years[0].accumulated_cash_flow >= -15000.0);
        for pair in years.windows(2) {
            prop_assert!(pair[1].accumulated_baseline_spend > pair[0].accumulated_baseline_spend);
            prop_assert!(pair[1].accumulated_cash_flow >= pair[0].accumulated_cash_flow);
        }
    }

    #[test]
    fn late_connections_pay_the_full_fee(offset in 0i32..30) {
        let start_year = FIO_B_SCHEDULE.last_explicit_year().unwrap() + offset;
        let years = project(&projection(1.1, 800.0, 828.75, 40.0, start_year));
        prop_assert!(years.iter().all(|year| year.payable_pct == 100.0));
    }
}
