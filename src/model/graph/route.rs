use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;

/// a concrete path through the shipment graph annotated with its
/// aggregate distance and emissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// locations visited in order, including both endpoints
    pub nodes: Vec<String>,
    /// sum of edge distances along the path
    pub distance_km: f64,
    /// sum of edge emissions along the path
    pub emissions_kgco2e: f64,
}

impl Route {
    /// number of edges this route traverses.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nodes.iter().join(" → "))
    }
}
