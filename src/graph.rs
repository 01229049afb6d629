use std::fmt::Debug;
use std::hash::Hash;

use crate::Length;

/// Undirected graph with non-negative edge weights.
/// Exposes the behavior the shortest path search runs on.
pub trait UndirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Copy + Ord + Hash;

    /// Returns true only if the vertex belongs to the graph.
    fn contains_vertex(&self, vertex: Self::VertexId) -> bool;

    /// Gets an iterator over all the neighbors of the given vertex.
    /// For each neighbor returns its vertex ID and the weight of the connecting edge.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_neighbors(
        &self,
        vertex: Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Length)>;

    /// Returns the number of edges that are connected to the vertex.
    fn vertex_degree(&self, vertex: Self::VertexId) -> usize {
        self.vertex_neighbors(vertex).count()
    }
}

pub mod dijkstra;
pub mod weighted;
