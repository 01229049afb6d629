//! The router connects geolocated points of interest that are close to each other and finds
//! the shortest routes between them.
//!
//! 1. Load the points and check the validity of their coordinates.
//! 2. Add one node for each distinct coordinate.
//! 3. Connect every pair of nodes within the maximum edge length, weighted by their
//!    great-circle distance.
//! 4. Answer route queries with the shortest path between the nodes of two points.

use tracing::{debug, trace, warn};

use crate::{Coordinate, Geolocated, Length, NodeId, Route, RouterError, WeightedGraph};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS: Length = Length::from_kilometers(6371.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouterConfig {
    /// Maximum great-circle distance between two points for them to be directly connected.
    pub max_edge_length: Length,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_edge_length: Length::from_kilometers(1.0),
        }
    }
}

/// Great-circle distance between two coordinates computed with the haversine formula.
pub fn haversine_distance(c1: Coordinate, c2: Coordinate) -> Length {
    let delta_lat = (c2.lat - c1.lat).to_radians();
    let delta_lon = (c2.lon - c1.lon).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + c1.lat.to_radians().cos() * c2.lat.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can push antipodal points slightly above 1
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Length::from_kilometers(EARTH_RADIUS.kilometers() * c)
}

/// Routes between the points of interest it has been loaded with.
///
/// The graph is rebuilt from scratch every time points are loaded, there is no incremental
/// update. Routes are computed on demand and never cached.
#[derive(Debug, Clone)]
pub struct ProximityRouter<P> {
    config: RouterConfig,
    points: Vec<P>,
    graph: WeightedGraph<NodeId>,
    loaded: bool,
}

impl<P> Default for ProximityRouter<P> {
    fn default() -> Self {
        Self {
            config: RouterConfig::default(),
            points: vec![],
            graph: WeightedGraph::default(),
            loaded: false,
        }
    }
}

impl<P: Geolocated> ProximityRouter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RouterConfig) -> Result<Self, RouterError> {
        if !config.max_edge_length.is_valid_weight() {
            return Err(RouterError::InvalidConfig(config.max_edge_length));
        }

        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Replaces the loaded points and rebuilds the graph.
    ///
    /// Fails if any point has an invalid coordinate, in which case the previously loaded
    /// points and graph are kept.
    pub fn load(&mut self, points: impl IntoIterator<Item = P>) -> Result<(), RouterError> {
        let points: Vec<P> = points.into_iter().collect();

        if let Some(invalid) = points
            .iter()
            .map(Geolocated::coordinate)
            .find(|c| !c.is_valid())
        {
            return Err(RouterError::InvalidCoordinate(invalid));
        }

        let graph = Self::build_graph(&self.config, &points)?;
        debug!(
            "Loaded {} points into a graph of {} nodes and {} edges",
            points.len(),
            graph.node_count(),
            graph.edge_count()
        );

        self.points = points;
        self.graph = graph;
        self.loaded = true;

        Ok(())
    }

    /// Builds the proximity graph: one node per distinct coordinate, and one edge between
    /// every pair of nodes that are within the maximum edge length.
    fn build_graph(
        config: &RouterConfig,
        points: &[P],
    ) -> Result<WeightedGraph<NodeId>, RouterError> {
        let coordinates: Vec<Coordinate> = points.iter().map(Geolocated::coordinate).collect();
        let mut graph = WeightedGraph::with_capacity(coordinates.len());

        for &coordinate in &coordinates {
            let node = NodeId::from(coordinate);
            if graph.contains_node(node) {
                warn!("Points at {node} share the same node");
            }
            graph.add_node(node);
        }

        for (i, &c1) in coordinates.iter().enumerate() {
            for &c2 in &coordinates[i + 1..] {
                let (n1, n2) = (NodeId::from(c1), NodeId::from(c2));
                if n1 == n2 {
                    continue;
                }

                let distance = haversine_distance(c1, c2);
                if distance <= config.max_edge_length {
                    trace!("Connecting {n1} <-> {n2}: {distance}");
                    graph.add_edge(n1, n2, distance)?;
                }
            }
        }

        Ok(graph)
    }

    /// Great-circle distance between two points.
    pub fn distance(&self, p1: &impl Geolocated, p2: &impl Geolocated) -> Length {
        haversine_distance(p1.coordinate(), p2.coordinate())
    }

    /// Finds the shortest route between the nodes of the two points.
    ///
    /// Points that are not loaded, or that cannot be reached from each other, result in an
    /// unreachable route.
    pub fn find_route(
        &self,
        start: &impl Geolocated,
        end: &impl Geolocated,
    ) -> Result<Route<NodeId>, RouterError> {
        let (start, end) = (start.coordinate(), end.coordinate());

        for coordinate in [start, end] {
            if !coordinate.is_valid() {
                return Err(RouterError::InvalidCoordinate(coordinate));
            }
        }

        Ok(self.graph.shortest_path(start.into(), end.into()))
    }

    /// Finds the shortest route between two of the loaded points given their indices.
    /// Returns None if any of the indices is out of bounds.
    pub fn find_route_between(
        &self,
        start_index: usize,
        end_index: usize,
    ) -> Option<Route<NodeId>> {
        let start = self.points.get(start_index)?.node_id();
        let end = self.points.get(end_index)?.node_id();
        Some(self.graph.shortest_path(start, end))
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn graph(&self) -> &WeightedGraph<NodeId> {
        &self.graph
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Returns true once points have been successfully loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
