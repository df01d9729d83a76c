pub mod bfs;
pub mod dfs;

pub use self::bfs::{is_connected, BfsEdgeRange, BfsVertexRange};
pub use self::dfs::{DfsEdgeRange, DfsVertexRange};

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef},
    Key,
};

/// One vertex produced by a vertex traversal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexVisit<K: Key> {
    pub vertex: K,
    /// Number of path vertices up to and including this one; seeds are at
    /// depth 1.
    pub depth: usize,
}

/// One emission of an edge traversal range.
///
/// A walk travels tree edges, notices back edges, and marks the tip of every
/// maximal path with a path-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeVisit<K: Key, EV: EdgeData> {
    /// The edge discovers its target for the first time.
    Tree { edge: EdgeRef<K, EV>, depth: usize },
    /// The edge reaches an already-visited vertex.
    Back { edge: EdgeRef<K, EV>, depth: usize },
    /// The walk stands at `vertex` with nowhere left to go from it.
    PathEnd { vertex: K, depth: usize },
}

impl<K: Key, EV: EdgeData> EdgeVisit<K, EV> {
    /// Number of frames on the walk up to and including the emitting one.
    pub fn depth(&self) -> usize {
        match self {
            Self::Tree { depth, .. } | Self::Back { depth, .. } | Self::PathEnd { depth, .. } => {
                *depth
            }
        }
    }

    pub fn is_back_edge(&self) -> bool {
        matches!(self, Self::Back { .. })
    }

    pub fn is_path_end(&self) -> bool {
        matches!(self, Self::PathEnd { .. })
    }

    /// The traveled edge, absent for path-ends.
    pub fn edge(&self) -> Option<&EdgeRef<K, EV>> {
        match self {
            Self::Tree { edge, .. } | Self::Back { edge, .. } => Some(edge),
            Self::PathEnd { .. } => None,
        }
    }

    /// The vertex the walk stands at: the edge's source, or the path tip.
    pub fn in_vertex(&self) -> K {
        match self {
            Self::Tree { edge, .. } | Self::Back { edge, .. } => edge.source,
            Self::PathEnd { vertex, .. } => *vertex,
        }
    }

    /// The far vertex of the emission: the edge's target, or the path tip
    /// itself.
    pub fn back_vertex(&self) -> K {
        match self {
            Self::Tree { edge, .. } | Self::Back { edge, .. } => edge.target,
            Self::PathEnd { vertex, .. } => *vertex,
        }
    }
}
