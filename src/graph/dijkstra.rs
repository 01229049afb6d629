use std::cmp::Ordering;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::Length;

/// Entry of the shortest path frontier: a vertex (e.g. the node of a pump) reached from the
/// origin at the given distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapElement<VertexId> {
    /// Current shortest distance from origin to this vertex.
    pub distance: Length,
    pub vertex: VertexId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<VertexId: Ord> Ord for HeapElement<VertexId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // breaking ties in a deterministic way
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<VertexId: Ord> PartialOrd for HeapElement<VertexId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Unpacks the shortest path from destination back to origin.
/// The returned path starts at the first vertex that has no predecessor, which is the origin
/// only if the destination has been reached by the search.
pub fn unpack_path<VertexId: Copy + Eq + Hash>(
    previous_vertices: &FxHashMap<VertexId, VertexId>,
    destination: VertexId,
) -> Vec<VertexId> {
    let mut vertices = vec![destination];
    let mut next = destination;

    while let Some(&v) = previous_vertices.get(&next) {
        next = v;
        vertices.push(v);
    }

    vertices.reverse();
    vertices
}
