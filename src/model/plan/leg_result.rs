use serde::Serialize;

/// a fully-resolved trip leg with its emission estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegResult {
    /// 1-based position of this leg in the plan
    pub leg: usize,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub distance_km: f64,
    pub weight_tons: f64,
    pub emissions_kgco2e: f64,
}
