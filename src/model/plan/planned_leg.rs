use serde::{Deserialize, Serialize};

/// one requested leg of a multi-leg trip, before resolution.
///
/// origin may be omitted on legs after the first, in which case the leg
/// departs from the previous leg's destination. distance may be omitted
/// when the shipment history holds a matching record to borrow it from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedLeg {
    #[serde(default)]
    pub origin: Option<String>,
    pub destination: String,
    pub mode: String,
    pub weight_tons: f64,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

impl PlannedLeg {
    pub fn new(
        origin: Option<&str>,
        destination: &str,
        mode: &str,
        weight_tons: f64,
        distance_km: Option<f64>,
    ) -> PlannedLeg {
        PlannedLeg {
            origin: origin.map(String::from),
            destination: String::from(destination),
            mode: String::from(mode),
            weight_tons,
            distance_km,
        }
    }
}
