use pv_model::{SizingInput, SizingResult};
use tracing::{debug, warn};

/// Days per month assumed by the monthly energy estimate
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Monthly energy of one panel in kWh
pub fn panel_monthly_energy(panel_watts: u32, peak_sun_hours: f64, loss_fraction: f64) -> f64 {
    (panel_watts as f64 / 1000.0) * peak_sun_hours * DAYS_PER_MONTH * (1.0 - loss_fraction)
}

/// Size a PV system for the target monthly consumption.
///
/// Non-positive consumption, peak sun hours or panel power, as well as losses of
/// 100 % or more, give the all-zero result instead of an error. The recommended
/// count is the ceiling of the exact requirement (at least one panel); a positive
/// override replaces it verbatim, even when it under-sizes the system.
pub fn size_system(input: &SizingInput) -> SizingResult {
    if input.consumption_kwh <= 0.0 || input.peak_sun_hours <= 0.0 || input.panel_watts == 0 {
        warn!(
            consumption_kwh = input.consumption_kwh,
            peak_sun_hours = input.peak_sun_hours,
            panel_watts = input.panel_watts,
            "sizing input out of range, returning empty system"
        );
        return SizingResult::zero();
    }

    let panel_monthly_kwh = panel_monthly_energy(
        input.panel_watts,
        input.peak_sun_hours,
        input.loss_fraction,
    );
    if panel_monthly_kwh.is_nan() || panel_monthly_kwh <= 0.0 {
        warn!(
            loss_fraction = input.loss_fraction,
            "panel yields no energy after losses, returning empty system"
        );
        return SizingResult::zero();
    }

    let exact_requirement = input.consumption_kwh / panel_monthly_kwh;
    let recommended_panels = (exact_requirement.ceil() as u32).max(1);

    let panel_count = match input.panel_override {
        Some(count) if count > 0 => count,
        _ => recommended_panels,
    };

    let capacity_kw = panel_count as f64 * input.panel_watts as f64 / 1000.0;
    let monthly_generation_kwh = panel_count as f64 * panel_monthly_kwh;

    debug!(
        panel_count,
        recommended_panels, capacity_kw, monthly_generation_kwh, "system sized"
    );

    SizingResult {
        panel_count,
        recommended_panels,
        capacity_kw,
        monthly_generation_kwh,
        panel_monthly_kwh,
    }
}
