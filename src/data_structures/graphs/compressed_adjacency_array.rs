use std::fmt::Display;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{DirectedGraph, Edge, EdgeData, EdgeRef, Graph, GraphError, Key};

/// A directed graph stored as a compressed adjacency array.
///
/// All edges live in one dense array, grouped by source vertex in
/// non-decreasing key order. Every vertex records the offset of its first
/// outgoing edge; its edge range ends where the next vertex's begins (or at
/// the end of the edge set for the last vertex). Neighbor ranges are O(1)
/// subranges and iteration is cache-friendly, at the price of immutability:
/// once built, no vertex or edge can be added or removed.
///
/// The graph, each vertex and each edge carry an optional user value (`GV`,
/// `VV`, `EV`).
#[derive(Serialize, Deserialize, Debug)]
pub struct CompressedAdjacencyArray<K: Key, GV = (), VV = (), EV: EdgeData = ()> {
    vertices: Vec<ArrayVertex<K, VV>>,
    edges: Vec<ArrayEdge<K, EV>>,
    value: GV,
}

#[derive(Serialize, Deserialize, Debug)]
struct ArrayVertex<K: Key, VV> {
    first_edge: K,
    value: VV,
}

#[derive(Serialize, Deserialize, Debug)]
struct ArrayEdge<K: Key, EV> {
    source: K,
    target: K,
    value: EV,
}

impl<K: Key, GV, VV, EV: EdgeData> CompressedAdjacencyArray<K, GV, VV, EV> {
    /// An empty graph carrying only a user value.
    pub fn new(graph_value: GV) -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            value: graph_value,
        }
    }

    /// Builds a graph from an edge range plus a vertex-value range.
    ///
    /// `edge_key` extracts the `(source, target)` key pair and `edge_value`
    /// the edge value from each edge item. Edges MUST arrive ordered by
    /// non-decreasing source key or construction fails with
    /// [GraphError::UnorderedEdges].
    ///
    /// The vertex set is sized to cover both `vertex_values` and the largest
    /// key referenced by any edge; vertex values are assigned in iteration
    /// order and vertices beyond them are default-constructed. Any key that
    /// would collide with the reserved sentinel is rejected with
    /// [GraphError::KeyOutOfBounds].
    pub fn try_with<ER, EI>(
        edges: ER,
        edge_key: impl Fn(&EI) -> (K, K),
        edge_value: impl Fn(&EI) -> EV,
        vertex_values: impl IntoIterator<Item = VV>,
        graph_value: GV,
    ) -> Result<Self, GraphError<K>>
    where
        ER: IntoIterator<Item = EI>,
        VV: Default,
    {
        let edges: Vec<EI> = edges.into_iter().collect();
        let max = K::nil() - K::one();

        // validate ordering and key bounds, and find the largest key in play
        let mut max_key: Option<K> = None;
        let mut previous = K::zero();
        for item in &edges {
            let (source, target) = edge_key(item);
            if source < previous {
                return Err(GraphError::UnorderedEdges {
                    previous,
                    current: source,
                });
            }
            previous = source;

            let hi = source.max(target);
            if hi > max {
                return Err(GraphError::KeyOutOfBounds { key: hi, max });
            }
            max_key = Some(max_key.map_or(hi, |k| k.max(hi)));
        }

        let mut vertices: Vec<ArrayVertex<K, VV>> = vertex_values
            .into_iter()
            .map(|value| ArrayVertex {
                first_edge: K::zero(),
                value,
            })
            .collect();
        if vertices.len() > max.index() + 1 {
            return Err(GraphError::KeyOutOfBounds { key: K::nil(), max });
        }
        let num_vertices = match max_key {
            Some(k) => vertices.len().max(k.index() + 1),
            None => vertices.len(),
        };
        vertices.resize_with(num_vertices, || ArrayVertex {
            first_edge: K::zero(),
            value: VV::default(),
        });

        // walk the ordered edges, recording each vertex's first edge offset
        let mut compressed = Vec::with_capacity(edges.len());
        let mut filled = K::zero();
        for item in &edges {
            let (source, target) = edge_key(item);
            while filled <= source {
                vertices[filled.index()].first_edge = K::new(compressed.len());
                filled += K::one();
            }
            compressed.push(ArrayEdge {
                source,
                target,
                value: edge_value(item),
            });
        }
        // trailing vertices own an empty range at the edge-set end
        while filled.index() < num_vertices {
            vertices[filled.index()].first_edge = K::new(compressed.len());
            filled += K::one();
        }

        debug!(
            "built compressed adjacency array: {} vertices, {} edges",
            num_vertices,
            compressed.len()
        );
        Ok(Self {
            vertices,
            edges: compressed,
            value: graph_value,
        })
    }

    /// Builds a graph from `(source, target)` or `(source, target, value)`
    /// tuples, with the same source-ordering requirement as
    /// [try_with](Self::try_with).
    pub fn try_from_edges<E: Edge<K, EV>>(
        edges: &[E],
        graph_value: GV,
    ) -> Result<Self, GraphError<K>>
    where
        VV: Default,
    {
        Self::try_with(
            edges.iter(),
            |e| (e.source(), e.target()),
            |e| e.value(),
            std::iter::empty(),
            graph_value,
        )
    }

    pub fn graph_value(&self) -> &GV {
        &self.value
    }

    pub fn graph_value_mut(&mut self) -> &mut GV {
        &mut self.value
    }

    pub fn vertex_value(&self, u: K) -> &VV {
        &self.vertices[u.index()].value
    }

    pub fn vertex_value_mut(&mut self, u: K) -> &mut VV {
        &mut self.vertices[u.index()].value
    }

    /// The value of the edge with the given id (its position in the edge set).
    pub fn edge_value(&self, edge: K) -> &EV {
        &self.edges[edge.index()].value
    }

    pub fn edge_value_mut(&mut self, edge: K) -> &mut EV {
        &mut self.edges[edge.index()].value
    }

    /// The `(source, target)` keys of the edge with the given id.
    pub fn endpoints(&self, edge: K) -> (K, K) {
        let e = &self.edges[edge.index()];
        (e.source, e.target)
    }

    /// `[first edge, one past last edge)` of `v`'s outgoing range.
    #[inline]
    fn bounds(&self, v: K) -> (K, K) {
        let start_inclusive = self.vertices[v.index()].first_edge;
        let end_exclusive = match self.vertices.get(v.index() + 1) {
            Some(next) => next.first_edge,
            None => self.num_edges(),
        };

        (start_inclusive, end_exclusive)
    }

    #[inline]
    fn edge_ref(&self, index: usize) -> EdgeRef<K, EV> {
        let e = &self.edges[index];
        EdgeRef {
            id: K::new(index),
            source: e.source,
            target: e.target,
            value: e.value,
        }
    }
}

impl<K: Key, GV, VV, EV: EdgeData> Graph<K, EV> for CompressedAdjacencyArray<K, GV, VV, EV> {
    fn num_vertices(&self) -> K {
        K::new(self.vertices.len())
    }

    fn num_edges(&self) -> K {
        K::new(self.edges.len())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_> {
        Box::new((0..self.edges.len()).map(|index| self.edge_ref(index)))
    }

    fn out_edges(&self, u: K) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_> {
        let (start_inclusive, end_exclusive) = self.bounds(u);
        Box::new((start_inclusive.index()..end_exclusive.index()).map(|index| self.edge_ref(index)))
    }

    fn out_degree(&self, u: K) -> K {
        let (start_inclusive, end_exclusive) = self.bounds(u);
        end_exclusive - start_inclusive
    }
}

impl<K: Key, GV, VV, EV: EdgeData> DirectedGraph<K, EV> for CompressedAdjacencyArray<K, GV, VV, EV> {}

impl<K: Key, GV, VV, EV: EdgeData> Display for CompressedAdjacencyArray<K, GV, VV, EV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "CompressedAdjacencyArray(n={}, m={}) [",
            self.num_vertices(),
            self.num_edges()
        )?;
        for v in self.vertices() {
            write!(f, "\t{} →", v)?;
            for e in self.out_edges(v) {
                write!(f, " {}({:?}),", e.target, e.value)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
