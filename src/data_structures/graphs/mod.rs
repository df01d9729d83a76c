mod compressed_adjacency_array;
mod edge;
mod undirected_adjacency_list;

#[cfg(test)]
pub(crate) mod tests;

use thiserror::Error;

pub use self::compressed_adjacency_array::CompressedAdjacencyArray;
pub use self::edge::{Edge, EdgeData, EdgeRef, EdgeWeight};
pub use self::undirected_adjacency_list::{IncidenceEdges, UndirectedAdjacencyList};

use super::Key;

/// Failure modes of graph construction and growth.
///
/// Search misses are not errors; lookup operations report them in-band by
/// returning `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError<K: Key> {
    /// The edge input was not sorted by non-decreasing source key.
    #[error("edge source {current} arrived after source {previous}; edges must be ordered by non-decreasing source key")]
    UnorderedEdges { previous: K, current: K },
    /// A key (or a requested vertex-set size) would collide with the
    /// reserved [nil](Key::nil) sentinel.
    #[error("key {key} exceeds the largest addressable key {max}")]
    KeyOutOfBounds { key: K, max: K },
}

/// The uniform access protocol over graph containers.
///
/// Every container exposes its vertices as dense keys in `[0, |V|)` and its
/// edges as [EdgeRef] observations. Traversal ranges and algorithms depend
/// only on this trait, never on a concrete container.
pub trait Graph<K: Key, EV: EdgeData = ()> {
    /// Returns the number of vertices of the graph.
    fn num_vertices(&self) -> K;

    /// Returns the number of distinct edges of the graph.
    ///
    /// For an undirected graph each adjacent pair of vertices counts once,
    /// even though [edges](Graph::edges) observes it from both endpoints.
    fn num_edges(&self) -> K;

    /// Returns all edges of the graph.
    ///
    /// An undirected graph produces every edge twice, once per endpoint
    /// with `source` set to that endpoint (a loop twice from its single
    /// vertex). Consumers that need each edge once must deduplicate by `id`
    /// or iterate per vertex.
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_>;

    /// Returns the outgoing (directed) or incident (undirected) edges at `u`,
    /// with `source` normalized to `u`.
    fn out_edges(&self, u: K) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_>;

    /// Returns an iterator for the vertices of the graph.
    fn vertices(&self) -> K::KeyIterator {
        K::zero().range(self.num_vertices())
    }

    /// O(1) lookup of a vertex by key; `None` past the vertex set.
    fn find_vertex(&self, key: K) -> Option<K> {
        (key < self.num_vertices()).then_some(key)
    }

    /// Returns the size of `u`'s incidence range.
    fn out_degree(&self, u: K) -> K {
        K::new(self.out_edges(u).count())
    }

    /// Returns the far endpoints of `u`'s incidence range.
    fn neighbors(&self, u: K) -> Box<dyn Iterator<Item = K> + '_> {
        Box::new(self.out_edges(u).map(move |e| e.other(u)))
    }

    /// Returns `u`'s neighbors along with the edge values.
    fn adjacencies(&self, u: K) -> Box<dyn Iterator<Item = (K, EV)> + '_> {
        Box::new(self.out_edges(u).map(move |e| (e.other(u), e.value)))
    }

    /// Linear search for the first edge from `u` to `v` in `u`'s incidence
    /// order; `None` if the vertices are not adjacent.
    fn find_out_edge(&self, u: K, v: K) -> Option<EdgeRef<K, EV>> {
        self.out_edges(u).find(|e| e.other(u) == v)
    }
}

/// Marker trait for directed graphs
pub trait DirectedGraph<K: Key, EV: EdgeData = ()>: Graph<K, EV> {}

/// Marker trait for undirected graphs
pub trait UndirectedGraph<K: Key, EV: EdgeData = ()>: Graph<K, EV> {}
