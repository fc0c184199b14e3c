use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Share of the wire fee ("Fio B") payable on exported energy in a given calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./regulation.ts")]
pub struct RegulatoryScheduleEntry {
    /// Calendar year the entry applies to.
    pub year: i32,
    /// Percentage (0-100) of the wire fee charged that year.
    pub payable_pct: f64,
}

impl RegulatoryScheduleEntry {
    pub const fn new(year: i32, payable_pct: f64) -> Self {
        Self { year, payable_pct }
    }
}

/// Transitional phase-in of the wire fee under Lei 14.300.
///
/// Years that are not listed resolve to the full fee. New calendar years are added
/// by extending the entry list (or passing a custom schedule); the calculations only
/// ever go through [`RegulatorySchedule::payable_pct`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegulatorySchedule<'a> {
    entries: &'a [RegulatoryScheduleEntry],
}

const FIO_B_ENTRIES: &[RegulatoryScheduleEntry] = &[
    RegulatoryScheduleEntry::new(2023, 15.0),
    RegulatoryScheduleEntry::new(2024, 30.0),
    RegulatoryScheduleEntry::new(2025, 45.0),
    RegulatoryScheduleEntry::new(2026, 60.0),
    RegulatoryScheduleEntry::new(2027, 75.0),
    RegulatoryScheduleEntry::new(2028, 90.0),
    RegulatoryScheduleEntry::new(2029, 100.0),
];

/// Schedule version 2023-2029.
pub const FIO_B_SCHEDULE: RegulatorySchedule<'static> = RegulatorySchedule::new(FIO_B_ENTRIES);

impl<'a> RegulatorySchedule<'a> {
    /// Percentage charged for years without an entry.
    pub const FULL_FEE_PCT: f64 = 100.0;

    pub const fn new(entries: &'a [RegulatoryScheduleEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'a [RegulatoryScheduleEntry] {
        self.entries
    }

    /// Last calendar year with an explicit entry.
    pub fn last_explicit_year(&self) -> Option<i32> {
        self.entries.iter().map(|entry| entry.year).max()
    }

    /// Percentage of the wire fee payable in `year`.
    pub fn payable_pct(&self, year: i32) -> f64 {
        self.entries
            .iter()
            .find(|entry| entry.year == year)
            .map(|entry| entry.payable_pct)
            .unwrap_or(Self::FULL_FEE_PCT)
    }
}

impl Default for RegulatorySchedule<'static> {
    fn default() -> Self {
        FIO_B_SCHEDULE
    }
}

/// Grid connection category of the consumer unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./regulation.ts")]
pub enum ConnectionTier {
    /// Monofásico
    SinglePhase,
    /// Bifásico
    TwoPhase,
    /// Trifásico
    #[default]
    ThreePhase,
}

/// Minimum billable energy per connection tier in kWh/month (ANEEL Res. 1000).
pub const CONNECTION_TIERS: [(ConnectionTier, f64); 3] = [
    (ConnectionTier::SinglePhase, 30.0),
    (ConnectionTier::TwoPhase, 50.0),
    (ConnectionTier::ThreePhase, 100.0),
];

impl ConnectionTier {
    /// Monthly energy volume billed regardless of generation
    pub fn min_availability_kwh(&self) -> f64 {
        CONNECTION_TIERS
            .iter()
            .find(|(tier, _)| tier == self)
            .map(|(_, kwh)| *kwh)
            .unwrap_or(0.0)
    }

    /// Get the local name of the tier
    pub fn local_name(&self) -> &'static str {
        match self {
            ConnectionTier::SinglePhase => "Monofásico",
            ConnectionTier::TwoPhase => "Bifásico",
            ConnectionTier::ThreePhase => "Trifásico",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_in_steps() {
        assert_eq!(FIO_B_SCHEDULE.payable_pct(2023), 15.0);
        assert_eq!(FIO_B_SCHEDULE.payable_pct(2024), 30.0);
        assert_eq!(FIO_B_SCHEDULE.payable_pct(2028), 90.0);
        assert_eq!(FIO_B_SCHEDULE.last_explicit_year(), Some(2029));
    }

    #[test]
    fn test_unlisted_years_pay_full_fee() {
        for year in [2022, 2029, 2030, 2050] {
            assert_eq!(FIO_B_SCHEDULE.payable_pct(year), 100.0);
        }
    }

    #[test]
    fn test_custom_schedule() {
        let entries = [RegulatoryScheduleEntry::new(2030, 50.0)];
        let schedule = RegulatorySchedule::new(&entries);
        assert_eq!(schedule.payable_pct(2030), 50.0);
        assert_eq!(schedule.payable_pct(2024), 100.0);
        assert_eq!(schedule.last_explicit_year(), Some(2030));
    }

    #[test]
    fn test_connection_tiers() {
        assert_eq!(ConnectionTier::SinglePhase.min_availability_kwh(), 30.0);
        assert_eq!(ConnectionTier::TwoPhase.min_availability_kwh(), 50.0);
        assert_eq!(ConnectionTier::ThreePhase.min_availability_kwh(), 100.0);
        assert_eq!(ConnectionTier::default(), ConnectionTier::ThreePhase);
    }
}
