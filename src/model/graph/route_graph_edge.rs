use serde::{Deserialize, Serialize};

/// attributes of one directed connection in the shipment graph, taken
/// wholesale from the most recent record observed for its
/// (origin, destination) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteGraphEdge {
    /// historical shipping distance between the two locations
    pub distance_km: f64,
    /// co2-equivalent emissions observed for the connection
    pub emissions_kgco2e: f64,
}
