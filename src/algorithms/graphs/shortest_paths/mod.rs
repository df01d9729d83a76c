pub mod bellman_ford;
pub mod dijkstra;

pub use self::bellman_ford::{bellman_ford_shortest_distances, bellman_ford_shortest_paths};
pub use self::dijkstra::{dijkstra_shortest_distances, dijkstra_shortest_paths};

use fixedbitset::FixedBitSet;

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef, EdgeWeight},
    Key,
};

/// The shortest distance from `source` to `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortestDistance<K: Key, D: EdgeWeight> {
    pub source: K,
    pub target: K,
    pub distance: D,
}

/// A reconstructed shortest path, running from the source to the target.
/// The source's own path is `[source]` with distance zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath<K: Key, D: EdgeWeight> {
    pub path: Vec<K>,
    pub distance: D,
}

/// The default-style weight function: every edge costs one hop.
pub fn hop_weight<K: Key, EV: EdgeData, D: EdgeWeight>(_: &EdgeRef<K, EV>) -> D {
    D::one()
}

/// Relaxation results shared by the shortest-path algorithms: per vertex the
/// best-known predecessor, the distance from the source (`None` while
/// unreachable), and whether the vertex currently ends a maximal path.
pub(crate) struct PathTable<K: Key, D: EdgeWeight> {
    pub predecessor: Vec<K>,
    pub distance: Vec<Option<D>>,
    pub leaf: FixedBitSet,
}

impl<K: Key, D: EdgeWeight> PathTable<K, D> {
    pub fn new(num_vertices: usize, source: K) -> Self {
        let mut predecessor = vec![K::nil(); num_vertices];
        let mut distance = vec![None; num_vertices];
        predecessor[source.index()] = source;
        distance[source.index()] = Some(D::zero());

        Self {
            predecessor,
            distance,
            leaf: FixedBitSet::with_capacity(num_vertices),
        }
    }

    /// Emits a distance record per reachable vertex (or per leaf), in vertex
    /// key order. Unreachable vertices are skipped.
    pub fn emit_distances(
        &self,
        source: K,
        leaves_only: bool,
        sink: &mut impl FnMut(ShortestDistance<K, D>),
    ) {
        for (index, distance) in self.distance.iter().enumerate() {
            if leaves_only && !self.leaf.contains(index) {
                continue;
            }
            if let Some(distance) = *distance {
                sink(ShortestDistance {
                    source,
                    target: K::new(index),
                    distance,
                });
            }
        }
    }

    /// Walks the predecessor chain back from each selected target and emits
    /// the reversed path, in vertex key order. Unreachable vertices are
    /// skipped.
    pub fn emit_paths(
        &self,
        source: K,
        leaves_only: bool,
        sink: &mut impl FnMut(ShortestPath<K, D>),
    ) {
        for (index, distance) in self.distance.iter().enumerate() {
            if leaves_only && !self.leaf.contains(index) {
                continue;
            }
            let Some(distance) = *distance else {
                continue;
            };

            let mut path = Vec::new();
            let mut vertex = K::new(index);
            while vertex != source {
                path.push(vertex);
                vertex = self.predecessor[vertex.index()];
            }
            path.push(source);
            path.reverse();

            sink(ShortestPath { path, distance });
        }
    }
}
