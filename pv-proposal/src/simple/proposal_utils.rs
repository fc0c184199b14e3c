use anyhow::{Context, Result};
use pv_model::{ConnectionTier, PaymentModality, RegulatoryScheduleEntry, SizingInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::general::cash_flow::ProjectionInput;
use crate::general::finance::PlanSurcharges;

/// Configuration struct holding every input of a proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalConfig {
    // Customer
    pub monthly_consumption_kwh: f64, // Target consumption to offset
    pub tariff: f64,                  // Energy tariff in R$/kWh
    pub connection_tier: ConnectionTier, // Defines the minimum availability charge
    pub self_consumption_pct: f64,    // Share of generation consumed instantly
    pub fixed_monthly_fee: f64,       // Public lighting fee in R$/month

    // Site and equipment
    pub peak_sun_hours: f64,      // HSP in h/day
    pub losses_pct: f64,          // Global system losses
    pub panel_watts: u32,         // Module nameplate power
    pub panel_override: Option<u32>, // Manual panel count, replaces the recommendation
    pub price_per_kwp: f64,       // Installed price per kWp

    // Regulation
    pub wire_fee_fraction_pct: f64, // Share of the tariff that is Fio B (national average 28 %)
    pub start_year: i32,            // Year of grid connection
    pub wire_fee_schedule: Option<Vec<RegulatoryScheduleEntry>>, // Replaces the built-in schedule

    // Projection
    pub horizon_years: u32,
    pub tariff_inflation_pct: f64, // Yearly energy inflation
    pub panel_degradation: f64,    // Yearly efficiency loss as a fraction

    // Payment
    pub payment: PaymentModality,
    pub surcharges: PlanSurcharges,
}

impl Default for ProposalConfig {
    fn default() -> Self {
        Self {
            monthly_consumption_kwh: 800.0,
            tariff: 1.10,
            connection_tier: ConnectionTier::ThreePhase,
            self_consumption_pct: 40.0,
            fixed_monthly_fee: 0.0,

            peak_sun_hours: 5.0,
            losses_pct: 15.0,
            panel_watts: 650,
            panel_override: None,
            price_per_kwp: 2200.0,

            wire_fee_fraction_pct: 28.0,
            start_year: 2024,
            wire_fee_schedule: None,

            horizon_years: 25,
            tariff_inflation_pct: 5.0,
            panel_degradation: 0.005,

            payment: PaymentModality::default(),
            surcharges: PlanSurcharges::default(),
        }
    }
}

impl ProposalConfig {
    /// Load a proposal from a TOML file; missing keys keep their defaults
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn sizing_input(&self) -> SizingInput {
        SizingInput {
            consumption_kwh: self.monthly_consumption_kwh,
            peak_sun_hours: self.peak_sun_hours,
            loss_fraction: self.losses_pct / 100.0,
            panel_watts: self.panel_watts,
            panel_override: self.panel_override,
        }
    }

    /// Projection inputs for a system generating `monthly_generation_kwh`
    pub fn projection_input(
        &self,
        monthly_generation_kwh: f64,
        initial_outlay: f64,
    ) -> ProjectionInput {
        ProjectionInput {
            horizon_years: self.horizon_years,
            initial_outlay,
            monthly_consumption_kwh: self.monthly_consumption_kwh,
            tariff: self.tariff,
            monthly_generation_kwh,
            self_consumption_pct: self.self_consumption_pct,
            wire_fee_fraction_pct: self.wire_fee_fraction_pct,
            start_year: self.start_year,
            tariff_inflation: self.tariff_inflation_pct / 100.0,
            panel_degradation: self.panel_degradation,
            min_availability_kwh: self.connection_tier.min_availability_kwh(),
            fixed_monthly_fee: self.fixed_monthly_fee,
        }
    }
}
