use serde::Serialize;

use super::LegResult;

/// the outcome of planning a trip: per-leg estimates and their total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSummary {
    pub legs: Vec<LegResult>,
    pub total_emissions_kgco2e: f64,
}

impl PlanSummary {
    /// total shipping distance across all legs.
    pub fn total_distance_km(&self) -> f64 {
        self.legs.iter().map(|leg| leg.distance_km).sum()
    }
}
