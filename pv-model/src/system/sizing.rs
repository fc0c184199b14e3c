use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Site and equipment parameters for sizing a PV system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./sizing.ts")]
pub struct SizingInput {
    /// Target monthly consumption in kWh.
    pub consumption_kwh: f64,
    /// Peak sun hours per day (HSP).
    pub peak_sun_hours: f64,
    /// System losses as a fraction (0.15 = 15 %).
    pub loss_fraction: f64,
    /// Nameplate power of one panel in W.
    pub panel_watts: u32,
    /// Panel count chosen by the user; takes precedence over the recommendation.
    pub panel_override: Option<u32>,
}

/// Outcome of a sizing call. All fields are zero for degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./sizing.ts")]
pub struct SizingResult {
    /// Panels actually installed (the override when one is given).
    pub panel_count: u32,
    /// Smallest panel count covering the consumption.
    pub recommended_panels: u32,
    /// Installed capacity in kWp.
    pub capacity_kw: f64,
    /// Estimated monthly generation in kWh.
    pub monthly_generation_kwh: f64,
    /// Monthly energy of a single panel in kWh.
    pub panel_monthly_kwh: f64,
}

impl SizingResult {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.panel_count == 0
    }

    /// True when the effective count differs from the recommendation.
    pub fn is_overridden(&self) -> bool {
        self.panel_count != self.recommended_panels
    }
}
