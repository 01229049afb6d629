use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::graph::UndirectedGraph;
use crate::{GraphError, Length, Route, shortest_path};

/// Undirected graph stored as adjacency maps.
///
/// Every edge is stored twice, once in the neighbor map of each endpoint, always with the
/// same weight. Every edge endpoint is a node of the graph, there are no self-loops and no
/// multi-edges: adding an edge between two connected nodes overwrites its weight.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    nodes: FxHashMap<V, FxHashMap<V, Length>>,
}

impl<V: Eq + Hash> PartialEq for WeightedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self {
            nodes: FxHashMap::default(),
        }
    }
}

impl<V: Debug + Copy + Ord + Hash> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Adds the node to the graph, does nothing if the node already exists.
    pub fn add_node(&mut self, node: V) {
        self.nodes.entry(node).or_default();
    }

    /// Adds an undirected edge between two nodes, adding the nodes first if needed.
    /// Re-adding an edge between the same nodes overwrites the previous weight.
    pub fn add_edge(&mut self, a: V, b: V, weight: Length) -> Result<(), GraphError<V>> {
        if !weight.is_valid_weight() {
            return Err(GraphError::InvalidWeight(weight));
        } else if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        self.nodes.entry(a).or_default().insert(b, weight);
        self.nodes.entry(b).or_default().insert(a, weight);

        Ok(())
    }

    /// Computes the shortest route from start to end.
    /// Returns an unreachable route if either node doesn't belong to the graph.
    pub fn shortest_path(&self, start: V, end: V) -> Route<V> {
        shortest_path(self, start, end)
    }

    pub fn contains_node(&self, node: V) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Gets the weight of the edge between the two nodes, None if they are not adjacent.
    pub fn edge_weight(&self, a: V, b: V) -> Option<Length> {
        self.nodes.get(&a)?.get(&b).copied()
    }

    /// Gets an iterator over the neighbors of the node and the weights of the edges to them.
    pub fn neighbors(&self, node: V) -> impl Iterator<Item = (V, Length)> {
        self.nodes
            .get(&node)
            .into_iter()
            .flatten()
            .map(|(&v, &weight)| (v, weight))
    }

    pub fn nodes(&self) -> impl Iterator<Item = V> {
        self.nodes.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|neighbors| neighbors.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<V: Debug + Copy + Ord + Hash> UndirectedGraph for WeightedGraph<V> {
    type VertexId = V;

    fn contains_vertex(&self, vertex: Self::VertexId) -> bool {
        self.contains_node(vertex)
    }

    fn vertex_neighbors(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Length)> {
        self.neighbors(vertex)
    }
}
