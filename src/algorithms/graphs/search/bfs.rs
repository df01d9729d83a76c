use std::{collections::VecDeque, marker::PhantomData};

use fixedbitset::FixedBitSet;

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef, Graph, UndirectedGraph},
    Key,
};

use super::{EdgeVisit, VertexVisit};

/// Lazy breadth-first walk over the vertices reachable from a seed.
///
/// Every reachable vertex is produced exactly once, in layer order: the seed
/// at depth 1, then all its unvisited neighbors at depth 2, and so on. Depths
/// are non-decreasing over the walk. Single-pass; the graph must not be
/// mutated while the range is alive.
pub struct BfsVertexRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    graph: &'a G,
    queue: VecDeque<(K, usize)>,
    visited: FixedBitSet,
    _phantom: PhantomData<EV>,
}

impl<'a, G, K, EV> BfsVertexRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    pub fn new(graph: &'a G, seed: K) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.num_vertices().index());
        visited.insert(seed.index());

        let mut queue = VecDeque::new();
        queue.push_back((seed, 1));

        Self {
            graph,
            queue,
            visited,
            _phantom: PhantomData,
        }
    }
}

impl<K, G, EV> Iterator for BfsVertexRange<'_, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    type Item = VertexVisit<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, depth) = self.queue.pop_front()?;

        for e in self.graph.out_edges(vertex) {
            if !self.visited.contains(e.target.index()) {
                self.visited.insert(e.target.index());
                self.queue.push_back((e.target, depth + 1));
            }
        }

        Some(VertexVisit { vertex, depth })
    }
}

/// A frame of the breadth-first edge walk: a discovered vertex, the rest of
/// its incidence range, the edge it was discovered through, and its layer.
struct BfsFrame<'a, K: Key, EV: EdgeData> {
    vertex: K,
    depth: usize,
    edges: Box<dyn Iterator<Item = EdgeRef<K, EV>> + 'a>,
    arrival: Option<K>,
    emitted: bool,
}

/// Lazy breadth-first walk over edges, classifying each emission as a tree
/// edge, a back edge, or a path-end.
///
/// Edges are produced in layer order: all emissions of a vertex's frame carry
/// that vertex's depth. A vertex whose frame produces no edge at all closes a
/// maximal path and emits one path-end. As in [DfsEdgeRange](super::dfs::DfsEdgeRange),
/// the physical arrival edge of a frame is suppressed on undirected graphs
/// and every other edge to a visited vertex is a back edge.
pub struct BfsEdgeRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    graph: &'a G,
    queue: VecDeque<BfsFrame<'a, K, EV>>,
    visited: FixedBitSet,
}

impl<'a, G, K, EV> BfsEdgeRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    pub fn new(graph: &'a G, seed: K) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.num_vertices().index());
        visited.insert(seed.index());

        let mut queue = VecDeque::new();
        queue.push_back(BfsFrame {
            vertex: seed,
            depth: 1,
            edges: graph.out_edges(seed),
            arrival: None,
            emitted: false,
        });

        Self {
            graph,
            queue,
            visited,
        }
    }
}

impl<K, G, EV> Iterator for BfsEdgeRange<'_, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    type Item = EdgeVisit<K, EV>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.queue.front_mut()?;
            let arrival = frame.arrival;
            let depth = frame.depth;

            match frame.edges.find(|e| Some(e.id) != arrival) {
                Some(e) if !self.visited.contains(e.target.index()) => {
                    frame.emitted = true;
                    self.visited.insert(e.target.index());
                    self.queue.push_back(BfsFrame {
                        vertex: e.target,
                        depth: depth + 1,
                        edges: self.graph.out_edges(e.target),
                        arrival: Some(e.id),
                        emitted: false,
                    });
                    return Some(EdgeVisit::Tree { edge: e, depth });
                }
                Some(e) => {
                    frame.emitted = true;
                    return Some(EdgeVisit::Back { edge: e, depth });
                }
                None => {
                    if let Some(done) = self.queue.pop_front() {
                        if !done.emitted {
                            return Some(EdgeVisit::PathEnd {
                                vertex: done.vertex,
                                depth,
                            });
                        }
                    }
                }
            }
        }
    }
}

/// Whether every vertex is reachable from vertex 0; the empty graph counts
/// as connected.
pub fn is_connected<G, K, EV>(graph: &G) -> bool
where
    G: UndirectedGraph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    if graph.num_vertices().is_zero() {
        return true;
    }
    let discovered = BfsVertexRange::new(graph, K::zero()).count();
    K::new(discovered) == graph.num_vertices()
}
