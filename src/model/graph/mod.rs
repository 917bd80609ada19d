mod mode_filter;
mod route;
mod route_graph;
mod route_graph_edge;
mod route_graph_error;
mod route_graph_service;

pub use mode_filter::ModeFilter;
pub use route::Route;
pub use route_graph::RouteGraph;
pub use route_graph_edge::RouteGraphEdge;
pub use route_graph_error::RouteGraphError;
pub use route_graph_service::{RouteComparison, RouteGraphService, RouteQueryDefaults};

/// default bound on the number of hops a route may take when
/// enumerating alternatives.
pub const DEFAULT_MAX_HOPS: usize = 5;

/// default bound on the number of alternative routes reported.
pub const DEFAULT_MAX_RESULTS: usize = 5;
