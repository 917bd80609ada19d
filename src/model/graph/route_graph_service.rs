use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{
    ModeFilter, Route, RouteGraph, RouteGraphError, DEFAULT_MAX_HOPS, DEFAULT_MAX_RESULTS,
};
use crate::model::dataset::ShipmentDataset;

/// bounds applied to alternative route enumeration when a query does not
/// provide explicit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteQueryDefaults {
    pub max_hops: usize,
    pub max_results: usize,
}

impl Default for RouteQueryDefaults {
    fn default() -> Self {
        RouteQueryDefaults {
            max_hops: DEFAULT_MAX_HOPS,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// the answer to one route comparison query: the emission-minimizing
/// route plus the alternatives that were on the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteComparison {
    pub best: Route,
    pub alternatives: Vec<Route>,
}

/// query layer over the shipment history.
///
/// the dataset is injected once and shared read-only; each query builds
/// its own filtered graph, so callers can vary the mode filter freely
/// without coordinating with one another.
pub struct RouteGraphService {
    dataset: Arc<ShipmentDataset>,
    defaults: RouteQueryDefaults,
}

impl RouteGraphService {
    pub fn new(dataset: Arc<ShipmentDataset>, defaults: RouteQueryDefaults) -> RouteGraphService {
        RouteGraphService { dataset, defaults }
    }

    /// constructs the directed graph induced by the given mode filter.
    pub fn build_graph(&self, filter: &ModeFilter) -> RouteGraph {
        RouteGraph::new(self.dataset.records(), filter)
    }

    /// finds the emission-minimizing route under the given mode filter.
    pub fn shortest_route(
        &self,
        start: &str,
        end: &str,
        filter: &ModeFilter,
    ) -> Result<Route, RouteGraphError> {
        self.build_graph(filter).shortest_route(start, end)
    }

    /// enumerates alternative routes under the given mode filter, falling
    /// back to the configured defaults when bounds are not provided.
    pub fn alternative_routes(
        &self,
        start: &str,
        end: &str,
        filter: &ModeFilter,
        max_hops: Option<usize>,
        max_results: Option<usize>,
    ) -> Result<Vec<Route>, RouteGraphError> {
        self.build_graph(filter).alternative_routes(
            start,
            end,
            max_hops.unwrap_or(self.defaults.max_hops),
            max_results.unwrap_or(self.defaults.max_results),
        )
    }

    /// answers both queries against a single graph build: the best route
    /// and the alternatives considered alongside it.
    pub fn compare(
        &self,
        start: &str,
        end: &str,
        filter: &ModeFilter,
        max_hops: Option<usize>,
        max_results: Option<usize>,
    ) -> Result<RouteComparison, RouteGraphError> {
        let graph = self.build_graph(filter);
        let best = graph.shortest_route(start, end)?;
        let alternatives = graph.alternative_routes(
            start,
            end,
            max_hops.unwrap_or(self.defaults.max_hops),
            max_results.unwrap_or(self.defaults.max_results),
        )?;
        Ok(RouteComparison { best, alternatives })
    }
}
