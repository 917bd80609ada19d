use std::collections::HashMap;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use petgraph::algo::{all_simple_paths, astar};
use petgraph::graph::{DiGraph, NodeIndex};

use super::{ModeFilter, Route, RouteGraphEdge, RouteGraphError};
use crate::model::dataset::ShipmentRecord;

/// directed graph over shipment locations where each edge carries the
/// attributes of the most recent shipment observed between its endpoints.
///
/// the graph stores at most one edge per ordered (origin, destination)
/// pair: when the history contains several records for the same pair,
/// the record seen last overwrites the edge attributes. construction is
/// pure, so callers needing a different mode filter simply build again.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    graph: DiGraph<String, RouteGraphEdge>,
    node_lookup: HashMap<String, NodeIndex>,
}

impl RouteGraph {
    pub fn empty() -> RouteGraph {
        RouteGraph {
            graph: DiGraph::new(),
            node_lookup: HashMap::new(),
        }
    }

    /// builds a graph from shipment records, skipping records excluded
    /// by the mode filter. records are trusted as given, no validation
    /// of locations or weights happens here.
    pub fn new<'a, I>(records: I, filter: &ModeFilter) -> RouteGraph
    where
        I: IntoIterator<Item = &'a ShipmentRecord>,
    {
        let mut graph = RouteGraph::empty();
        for record in records {
            if !filter.matches(&record.mode) {
                continue;
            }
            graph.add_shipment(record);
        }
        graph
    }

    /// inserts or overwrites the directed edge described by one record.
    pub fn add_shipment(&mut self, record: &ShipmentRecord) {
        let src = self.get_or_create_node(&record.origin);
        let dst = self.get_or_create_node(&record.destination);
        let edge = RouteGraphEdge {
            distance_km: record.distance_km,
            emissions_kgco2e: record.emissions_kgco2e,
        };
        let _ = self.graph.update_edge(src, dst, edge);
    }

    fn get_or_create_node(&mut self, name: &str) -> NodeIndex {
        match self.node_lookup.get(name) {
            Some(index) => *index,
            None => {
                let index = self.graph.add_node(String::from(name));
                self.node_lookup.insert(String::from(name), index);
                index
            }
        }
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_lookup.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// location names in insertion order.
    pub fn node_names(&self) -> Vec<&str> {
        self.graph.node_weights().map(|n| n.as_str()).collect_vec()
    }

    /// edge attributes between two named locations, if directly connected.
    pub fn get_edge(&self, origin: &str, destination: &str) -> Option<&RouteGraphEdge> {
        let src = self.node_lookup.get(origin)?;
        let dst = self.node_lookup.get(destination)?;
        let edge = self.graph.find_edge(*src, *dst)?;
        self.graph.edge_weight(edge)
    }

    /// finds the route minimizing total emissions between two locations.
    ///
    /// emissions are non-negative so a standard least-cost search applies.
    /// when several routes tie on total emissions any one of them may be
    /// returned. fails with [RouteGraphError::NoPath] when either location
    /// is unknown or no directed path connects them.
    pub fn shortest_route(&self, start: &str, end: &str) -> Result<Route, RouteGraphError> {
        let no_path = || RouteGraphError::NoPath {
            start: String::from(start),
            end: String::from(end),
        };
        let src = self.node_lookup.get(start).ok_or_else(no_path)?;
        let dst = self.node_lookup.get(end).ok_or_else(no_path)?;
        let (_, path) = astar(
            &self.graph,
            *src,
            |node| node == *dst,
            |edge| OrderedFloat(edge.weight().emissions_kgco2e),
            |_| OrderedFloat(0.0),
        )
        .ok_or_else(no_path)?;
        self.route_from_path(&path)
    }

    /// enumerates simple paths between two locations for comparison
    /// against the shortest route.
    ///
    /// every returned route has at most `max_hops` edges, and enumeration
    /// stops after `max_results` routes. the order of the result follows
    /// the traversal of the underlying graph and carries no meaning for
    /// ranking. unknown endpoints yield an empty collection rather than
    /// an error, so "nothing to offer" reads uniformly for callers that
    /// already established reachability via [RouteGraph::shortest_route].
    pub fn alternative_routes(
        &self,
        start: &str,
        end: &str,
        max_hops: usize,
        max_results: usize,
    ) -> Result<Vec<Route>, RouteGraphError> {
        let (src, dst) = match (self.node_lookup.get(start), self.node_lookup.get(end)) {
            (Some(src), Some(dst)) => (*src, *dst),
            _ => return Ok(vec![]),
        };
        if src == dst || max_hops == 0 || max_results == 0 {
            return Ok(vec![]);
        }
        // the enumeration bounds intermediate node counts, and a route of
        // n hops visits n - 1 intermediate locations
        let max_intermediate = Some(max_hops - 1);
        let paths =
            all_simple_paths::<Vec<NodeIndex>, _, std::collections::hash_map::RandomState>(
                &self.graph,
                src,
                dst,
                0,
                max_intermediate,
            )
                .take(max_results)
                .collect_vec();
        paths
            .iter()
            .map(|path| self.route_from_path(path))
            .collect::<Result<Vec<_>, _>>()
    }

    /// assembles a [Route] from a path of node indices by walking the
    /// consecutive pairs and accumulating edge attributes.
    fn route_from_path(&self, path: &[NodeIndex]) -> Result<Route, RouteGraphError> {
        let mut nodes: Vec<String> = Vec::with_capacity(path.len());
        for index in path.iter() {
            let name = self.graph.node_weight(*index).ok_or_else(|| {
                RouteGraphError::InternalError(format!(
                    "route references node index {} not in graph",
                    index.index()
                ))
            })?;
            nodes.push(name.clone());
        }
        let mut distance_km = 0.0;
        let mut emissions_kgco2e = 0.0;
        for ((src, dst), (src_name, dst_name)) in
            path.iter().tuple_windows().zip(nodes.iter().tuple_windows())
        {
            let edge_index = self.graph.find_edge(*src, *dst).ok_or_else(|| {
                RouteGraphError::InternalError(format!(
                    "route step ('{src_name}')->('{dst_name}') has no edge in graph"
                ))
            })?;
            let edge = self.graph.edge_weight(edge_index).ok_or_else(|| {
                RouteGraphError::InternalError(format!(
                    "route step ('{src_name}')->('{dst_name}') has no edge attributes"
                ))
            })?;
            distance_km += edge.distance_km;
            emissions_kgco2e += edge.emissions_kgco2e;
        }
        Ok(Route {
            nodes,
            distance_km,
            emissions_kgco2e,
        })
    }
}

#[cfg(test)]
mod test {
    use super::RouteGraph;
    use crate::model::dataset::ShipmentRecord;
    use crate::model::graph::{ModeFilter, RouteGraphError};

    fn record(
        origin: &str,
        destination: &str,
        mode: &str,
        distance_km: f64,
        emissions_kgco2e: f64,
    ) -> ShipmentRecord {
        ShipmentRecord::new(origin, destination, mode, distance_km, emissions_kgco2e)
    }

    #[test]
    fn test_duplicate_pair_keeps_last_record() {
        let records = vec![
            record("A", "B", "Road", 500.0, 80.0),
            record("A", "B", "Road", 480.0, 55.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1, "duplicate pairs collapse to one edge");
        let edge = graph
            .get_edge("A", "B")
            .expect("test invariant failed: edge should exist");
        assert_eq!(edge.distance_km, 480.0);
        assert_eq!(edge.emissions_kgco2e, 55.0);
    }

    #[test]
    fn test_shortest_route_minimizes_emissions_not_distance() {
        // the two-hop path is longer in distance but cheaper in emissions
        let records = vec![
            record("A", "B", "Road", 500.0, 20.0),
            record("B", "C", "Road", 500.0, 20.0),
            record("A", "C", "Air", 300.0, 150.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let route = graph
            .shortest_route("A", "C")
            .expect("test invariant failed: route should exist");
        assert_eq!(route.nodes, vec!["A", "B", "C"]);
        assert_eq!(route.distance_km, 1000.0);
        assert_eq!(route.emissions_kgco2e, 40.0);
    }

    #[test]
    fn test_shortest_route_accepts_either_path_on_emission_tie() {
        let records = vec![
            record("A", "B", "Road", 100.0, 20.0),
            record("B", "C", "Road", 150.0, 30.0),
            record("A", "C", "Air", 300.0, 50.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let route = graph
            .shortest_route("A", "C")
            .expect("test invariant failed: route should exist");
        // both candidates total exactly 50 kg CO2e; either is a valid answer
        assert_eq!(route.emissions_kgco2e, 50.0);
        assert!(
            route.nodes == vec!["A", "B", "C"] || route.nodes == vec!["A", "C"],
            "unexpected route {:?}",
            route.nodes
        );
    }

    #[test]
    fn test_route_aggregates_are_edge_sums() {
        let records = vec![
            record("A", "B", "Road", 110.0, 11.0),
            record("B", "C", "Road", 120.0, 12.0),
            record("C", "D", "Road", 130.0, 13.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let route = graph
            .shortest_route("A", "D")
            .expect("test invariant failed: route should exist");
        assert_eq!(route.nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(route.hops(), 3);
        assert_eq!(route.distance_km, 110.0 + 120.0 + 130.0);
        assert_eq!(route.emissions_kgco2e, 11.0 + 12.0 + 13.0);
    }

    #[test]
    fn test_no_route_returned_by_any_query_beats_the_shortest() {
        // a diamond with asymmetric costs plus a long detour
        let records = vec![
            record("A", "B", "Road", 100.0, 35.0),
            record("A", "C", "Road", 100.0, 10.0),
            record("B", "D", "Road", 100.0, 5.0),
            record("C", "D", "Road", 100.0, 25.0),
            record("A", "D", "Air", 250.0, 60.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let best = graph
            .shortest_route("A", "D")
            .expect("test invariant failed: route should exist");
        assert_eq!(best.emissions_kgco2e, 35.0, "A->C->D should win");

        let alternatives = graph
            .alternative_routes("A", "D", 5, 10)
            .expect("test invariant failed: enumeration should succeed");
        assert!(!alternatives.is_empty());
        for alternative in alternatives.iter() {
            assert!(
                alternative.emissions_kgco2e >= best.emissions_kgco2e,
                "alternative {:?} undercuts the shortest route",
                alternative.nodes
            );
        }
    }

    #[test]
    fn test_shortest_route_fails_when_disconnected() {
        let records = vec![
            record("A", "B", "Road", 100.0, 10.0),
            record("C", "D", "Road", 100.0, 10.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        match graph.shortest_route("A", "D") {
            Err(RouteGraphError::NoPath { start, end }) => {
                assert_eq!(start, "A");
                assert_eq!(end, "D");
            }
            other => panic!("expected no-path error, got {other:?}"),
        }
    }

    #[test]
    fn test_shortest_route_fails_when_node_absent() {
        let records = vec![record("A", "B", "Road", 100.0, 10.0)];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        assert!(matches!(
            graph.shortest_route("A", "Z"),
            Err(RouteGraphError::NoPath { .. })
        ));
        assert!(matches!(
            graph.shortest_route("Z", "B"),
            Err(RouteGraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_edges_are_directed() {
        let records = vec![record("A", "B", "Road", 100.0, 10.0)];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        assert!(graph.shortest_route("A", "B").is_ok());
        assert!(matches!(
            graph.shortest_route("B", "A"),
            Err(RouteGraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_shortest_route_to_self_is_trivial() {
        let records = vec![record("A", "B", "Road", 100.0, 10.0)];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let route = graph
            .shortest_route("A", "A")
            .expect("test invariant failed: trivial route should exist");
        assert_eq!(route.nodes, vec!["A"]);
        assert_eq!(route.distance_km, 0.0);
        assert_eq!(route.emissions_kgco2e, 0.0);
    }

    #[test]
    fn test_alternatives_absent_node_yields_empty_not_error() {
        let records = vec![record("A", "B", "Road", 100.0, 10.0)];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let routes = graph
            .alternative_routes("A", "Z", 5, 5)
            .expect("test invariant failed: enumeration should succeed");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_alternatives_between_same_node_are_empty() {
        let records = vec![
            record("A", "B", "Road", 100.0, 10.0),
            record("B", "A", "Road", 100.0, 10.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let routes = graph
            .alternative_routes("A", "A", 5, 5)
            .expect("test invariant failed: enumeration should succeed");
        assert!(routes.is_empty());
    }

    #[test]
    fn test_alternatives_respect_hop_cutoff() {
        // one direct edge and one three-hop detour
        let records = vec![
            record("A", "D", "Air", 300.0, 60.0),
            record("A", "B", "Road", 100.0, 10.0),
            record("B", "C", "Road", 100.0, 10.0),
            record("C", "D", "Road", 100.0, 10.0),
        ];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let unbounded = graph
            .alternative_routes("A", "D", 5, 10)
            .expect("test invariant failed: enumeration should succeed");
        assert_eq!(unbounded.len(), 2);

        let bounded = graph
            .alternative_routes("A", "D", 2, 10)
            .expect("test invariant failed: enumeration should succeed");
        assert_eq!(bounded.len(), 1, "three-hop detour exceeds the cutoff");
        assert_eq!(bounded[0].nodes, vec!["A", "D"]);
        for route in unbounded.iter().chain(bounded.iter()) {
            assert!(route.hops() <= 5);
        }
    }

    #[test]
    fn test_alternatives_truncate_at_max_results() {
        // six two-hop paths A -> hub_i -> Z
        let mut records = vec![];
        for hub in ["P", "Q", "R", "S", "T", "U"] {
            records.push(record("A", hub, "Road", 100.0, 10.0));
            records.push(record(hub, "Z", "Road", 100.0, 10.0));
        }
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        let routes = graph
            .alternative_routes("A", "Z", 5, 5)
            .expect("test invariant failed: enumeration should succeed");
        assert_eq!(routes.len(), 5, "enumeration truncates after max results");

        let all = graph
            .alternative_routes("A", "Z", 5, 100)
            .expect("test invariant failed: enumeration should succeed");
        assert_eq!(all.len(), 6);
    }

    #[test]
    fn test_zero_bounds_yield_no_alternatives() {
        let records = vec![record("A", "B", "Road", 100.0, 10.0)];
        let graph = RouteGraph::new(&records, &ModeFilter::All);

        assert!(graph
            .alternative_routes("A", "B", 0, 5)
            .expect("test invariant failed: enumeration should succeed")
            .is_empty());
        assert!(graph
            .alternative_routes("A", "B", 5, 0)
            .expect("test invariant failed: enumeration should succeed")
            .is_empty());
    }

    #[test]
    fn test_mode_filter_selects_matching_records_only() {
        let records = vec![
            record("A", "B", "Road", 100.0, 10.0),
            record("B", "C", "Rail", 100.0, 5.0),
            record("A", "C", "Air", 300.0, 60.0),
        ];

        let air_only = RouteGraph::new(&records, &ModeFilter::Mode(String::from("Air")));
        assert!(air_only.get_edge("A", "C").is_some());
        assert!(air_only.get_edge("A", "B").is_none());
        assert!(!air_only.contains_node("B"));
        assert_eq!(air_only.node_names(), vec!["A", "C"]);

        let rail_only = RouteGraph::new(&records, &ModeFilter::Mode(String::from("Rail")));
        assert_eq!(rail_only.edge_count(), 1);
        assert!(rail_only.get_edge("B", "C").is_some());
    }

    #[test]
    fn test_mode_filter_changes_query_answers() {
        // by road the only way from A to C is through B; by air it is direct
        let records = vec![
            record("A", "B", "Road", 100.0, 10.0),
            record("B", "C", "Road", 100.0, 10.0),
            record("A", "C", "Air", 300.0, 60.0),
        ];

        let road = RouteGraph::new(&records, &ModeFilter::Mode(String::from("Road")));
        let road_route = road
            .shortest_route("A", "C")
            .expect("test invariant failed: road route should exist");
        assert_eq!(road_route.nodes, vec!["A", "B", "C"]);

        let air = RouteGraph::new(&records, &ModeFilter::Mode(String::from("Air")));
        let air_route = air
            .shortest_route("A", "C")
            .expect("test invariant failed: air route should exist");
        assert_eq!(air_route.nodes, vec!["A", "C"]);

        let rail = RouteGraph::new(&records, &ModeFilter::Mode(String::from("Rail")));
        assert!(matches!(
            rail.shortest_route("A", "C"),
            Err(RouteGraphError::NoPath { .. })
        ));
    }

    #[test]
    fn test_empty_graph_has_no_routes() {
        let graph = RouteGraph::empty();
        assert_eq!(graph.node_count(), 0);
        assert!(matches!(
            graph.shortest_route("A", "B"),
            Err(RouteGraphError::NoPath { .. })
        ));
        assert!(graph
            .alternative_routes("A", "B", 5, 5)
            .expect("test invariant failed: enumeration should succeed")
            .is_empty());
    }
}
