use serde::{Deserialize, Serialize};

/// one observed shipment from the historical dataset: a directed movement
/// of goods between two locations using a single transport mode.
///
/// only the columns used by graph construction are mandatory. the
/// remaining observation columns are retained when present so downstream
/// reporting can surface them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    #[serde(default)]
    pub shipment_id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub distance_km: f64,
    pub emissions_kgco2e: f64,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub fuel_consumed_l: Option<f64>,
    #[serde(default)]
    pub load_utilization: Option<f64>,
    #[serde(default)]
    pub delivery_time_hr: Option<f64>,
    #[serde(default)]
    pub cost_usd: Option<f64>,
}

impl ShipmentRecord {
    /// creates a record carrying only the columns graph construction
    /// depends on, leaving the remaining observation columns unset.
    pub fn new(
        origin: &str,
        destination: &str,
        mode: &str,
        distance_km: f64,
        emissions_kgco2e: f64,
    ) -> ShipmentRecord {
        ShipmentRecord {
            shipment_id: None,
            origin: String::from(origin),
            destination: String::from(destination),
            mode: String::from(mode),
            distance_km,
            emissions_kgco2e,
            weight_kg: None,
            fuel_type: None,
            fuel_consumed_l: None,
            load_utilization: None,
            delivery_time_hr: None,
            cost_usd: None,
        }
    }

    /// shipment weight in metric tons, the unit the emission model was
    /// trained on. the dataset stores kilograms.
    pub fn weight_tons(&self) -> Option<f64> {
        self.weight_kg.map(|kg| kg / 1000.0)
    }
}
