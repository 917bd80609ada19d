use super::PredictError;

/// anything that can estimate the carbon emissions of a single shipment
/// leg. implementations own whatever trained artifact backs the estimate
/// and must be deterministic for fixed inputs.
pub trait EmissionPredictor {
    /// estimated kilograms of CO2-equivalent for one shipment leg.
    ///
    /// # Arguments
    /// * `distance_km` - shipping distance in kilometers
    /// * `weight_tons` - shipment weight in metric tons
    /// * `mode`        - transport mode label as it appears in the training data
    fn predict(&self, distance_km: f64, weight_tons: f64, mode: &str) -> Result<f64, PredictError>;

    /// transport mode labels this predictor was trained on.
    fn modes(&self) -> &[String];
}
