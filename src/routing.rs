use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::UndirectedGraph;
use crate::graph::dijkstra::{HeapElement, unpack_path};
use crate::{Coordinate, Length, NodeId};

/// Shortest route between two vertices.
///
/// The path goes from start to end, both included. If the end cannot be reached the path is
/// empty and the distance is infinite.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<VertexId> {
    pub path: Vec<VertexId>,
    pub distance: Length,
}

impl<VertexId> Route<VertexId> {
    pub fn unreachable() -> Self {
        Self {
            path: vec![],
            distance: Length::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.distance.is_finite()
    }

    /// Number of vertices along the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl Route<NodeId> {
    /// Gets the ordered coordinates of the path, e.g. to draw the route on a map.
    pub fn coordinates(&self) -> impl DoubleEndedIterator<Item = Coordinate> {
        self.path.iter().map(NodeId::coordinate)
    }
}

/// Computes the shortest route from start to end with Dijkstra's algorithm.
///
/// The search settles vertices by increasing distance from start and stops as soon as the
/// end is settled, or when no reachable vertex is left to settle.
/// Returns an unreachable route if start or end don't belong to the graph.
pub fn shortest_path<G: UndirectedGraph>(
    graph: &G,
    origin: G::VertexId,
    destination: G::VertexId,
) -> Route<G::VertexId> {
    debug!("Computing shortest path {origin:?} -> {destination:?}");

    if !graph.contains_vertex(origin) || !graph.contains_vertex(destination) {
        return Route::unreachable();
    }

    // (current) shortest distance from origin to this vertex
    let mut shortest_distances = FxHashMap::from_iter([(origin, Length::ZERO)]);

    // previous vertex (value) on the current best known path from origin to this vertex (key)
    let mut previous_map: FxHashMap<G::VertexId, G::VertexId> = FxHashMap::default();

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        vertex: origin,
        distance: Length::ZERO,
    }]);

    while let Some(element) = frontier.pop() {
        if element.vertex == destination {
            let path = unpack_path(&previous_map, destination);
            debug_assert_eq!(path.first(), Some(&origin));

            return Route {
                path,
                distance: element.distance,
            };
        }

        // check if we already know a cheaper way to get to this vertex from the origin
        let shortest_distance = *shortest_distances
            .get(&element.vertex)
            .unwrap_or(&Length::INFINITY);
        if element.distance > shortest_distance {
            continue;
        }

        for (vertex_to, weight) in graph.vertex_neighbors(element.vertex) {
            let distance = element.distance + weight;

            let shortest_distance = *shortest_distances
                .get(&vertex_to)
                .unwrap_or(&Length::INFINITY);

            // check if we can follow the current path to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(vertex_to, distance);
                previous_map.insert(vertex_to, element.vertex);
                frontier.push(HeapElement {
                    vertex: vertex_to,
                    distance,
                });
            }
        }
    }

    Route::unreachable()
}
