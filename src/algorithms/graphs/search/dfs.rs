use fixedbitset::FixedBitSet;

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef, Graph},
    Key,
};

use super::{EdgeVisit, VertexVisit};

/// Lazy depth-first walk over the vertices reachable from a seed.
///
/// Every reachable vertex is produced exactly once, in depth-first order,
/// with its depth (the seed is at depth 1, a vertex's depth is the walk's
/// stack size when it is first entered). The range is single-pass; restart by
/// constructing a fresh one. The graph must not be mutated while the range is
/// alive.
pub struct DfsVertexRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    graph: &'a G,
    stack: Vec<Box<dyn Iterator<Item = EdgeRef<K, EV>> + 'a>>,
    visited: FixedBitSet,
    seed: Option<K>,
}

impl<'a, G, K, EV> DfsVertexRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    pub fn new(graph: &'a G, seed: K) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.num_vertices().index());
        visited.insert(seed.index());

        Self {
            graph,
            stack: vec![graph.out_edges(seed)],
            visited,
            seed: Some(seed),
        }
    }
}

impl<K, G, EV> Iterator for DfsVertexRange<'_, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    type Item = VertexVisit<K>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(seed) = self.seed.take() {
            return Some(VertexVisit {
                vertex: seed,
                depth: 1,
            });
        }

        loop {
            let edges = self.stack.last_mut()?;
            match edges.find(|e| !self.visited.contains(e.target.index())) {
                Some(e) => {
                    self.visited.insert(e.target.index());
                    self.stack.push(self.graph.out_edges(e.target));
                    return Some(VertexVisit {
                        vertex: e.target,
                        depth: self.stack.len(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// A frame of the depth-first edge walk: a discovered vertex, the rest of its
/// incidence range, and the edge it was entered through.
struct DfsFrame<'a, K: Key, EV: EdgeData> {
    vertex: K,
    edges: Box<dyn Iterator<Item = EdgeRef<K, EV>> + 'a>,
    /// Edge id the walk arrived over; that edge is not offered again from
    /// this frame (it would trivially lead back to the parent on an
    /// undirected graph).
    arrival: Option<K>,
    /// Whether this frame produced any tree or back edge.
    emitted: bool,
}

/// Lazy depth-first walk over edges, classifying each emission as a tree
/// edge, a back edge, or a path-end.
///
/// A tree edge extends the current path by an unvisited vertex; a back edge
/// reaches a visited one; a path-end marks a vertex from which the walk could
/// not continue at all, closing a maximal path. On an undirected graph the
/// physical edge a vertex was entered through is suppressed in that vertex's
/// frame; any other edge to a visited vertex (a parallel edge to the parent
/// included) is reported as a back edge.
pub struct DfsEdgeRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    graph: &'a G,
    stack: Vec<DfsFrame<'a, K, EV>>,
    visited: FixedBitSet,
}

impl<'a, G, K, EV> DfsEdgeRange<'a, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    pub fn new(graph: &'a G, seed: K) -> Self {
        let mut visited = FixedBitSet::with_capacity(graph.num_vertices().index());
        visited.insert(seed.index());

        Self {
            graph,
            stack: vec![DfsFrame {
                vertex: seed,
                edges: graph.out_edges(seed),
                arrival: None,
                emitted: false,
            }],
            visited,
        }
    }
}

impl<K, G, EV> Iterator for DfsEdgeRange<'_, G, K, EV>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
{
    type Item = EdgeVisit<K, EV>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len();
            let frame = self.stack.last_mut()?;
            let arrival = frame.arrival;

            match frame.edges.find(|e| Some(e.id) != arrival) {
                Some(e) if !self.visited.contains(e.target.index()) => {
                    frame.emitted = true;
                    self.visited.insert(e.target.index());
                    self.stack.push(DfsFrame {
                        vertex: e.target,
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
                    if let Some(done) = self.stack.pop() {
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
