use std::{fmt::Debug, ops::Add};

use num::{One, Zero};

use super::Key;

macro_rules! auto_impl {
    ($trait:ty, $($type:ty)*) => ($(
        impl $trait for $type {}
    )*)
}

/// A user value attached to every edge of a graph.
pub trait EdgeData: Copy + Clone + Default + Debug + 'static {}
auto_impl!(EdgeData, () u8 i8 u16 i16 u32 i32 u64 i64 u128 i128 f32 f64 usize);

/// A numeric measure accumulated along paths, usable as an edge weight or a
/// path distance. Signed types are allowed so that Bellman-Ford can work with
/// negative weights.
pub trait EdgeWeight: EdgeData + Ord + Add<Self> + Zero + One {}
auto_impl!(EdgeWeight, u8 i8 u16 i16 u32 i32 u64 i64 u128 i128 usize);

/// An edge description used as construction input.
///
/// Implemented for `(source, target)` and `(source, target, value)` tuples so
/// that plain tuple slices can feed the graph constructors.
pub trait Edge<K: Key, EV: EdgeData>: Copy + Clone {
    fn source(&self) -> K;
    fn target(&self) -> K;
    fn value(&self) -> EV;
}

impl<K: Key, EV: EdgeData> Edge<K, EV> for (K, K, EV) {
    fn source(&self) -> K {
        self.0
    }

    fn target(&self) -> K {
        self.1
    }

    fn value(&self) -> EV {
        self.2
    }
}

impl<K: Key, EV: EdgeData> Edge<K, EV> for &(K, K, EV) {
    fn source(&self) -> K {
        self.0
    }

    fn target(&self) -> K {
        self.1
    }

    fn value(&self) -> EV {
        self.2
    }
}

impl<K: Key> Edge<K, ()> for (K, K) {
    fn source(&self) -> K {
        self.0
    }

    fn target(&self) -> K {
        self.1
    }

    fn value(&self) {}
}

impl<K: Key> Edge<K, ()> for &(K, K) {
    fn source(&self) -> K {
        self.0
    }

    fn target(&self) -> K {
        self.1
    }

    fn value(&self) {}
}

/// One observation of a stored edge, as produced by the access protocol.
///
/// `id` is the edge's stable identity inside its container: the position in
/// the edge set for the compressed adjacency array, the slab index for the
/// undirected adjacency list. When an edge is observed through a vertex's
/// incidence range, `source` is the owning vertex and `target` the far
/// endpoint; an undirected edge therefore appears with both orientations,
/// once per endpoint, under the same `id`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeRef<K: Key, EV: EdgeData> {
    pub id: K,
    pub source: K,
    pub target: K,
    pub value: EV,
}

impl<K: Key, EV: EdgeData> EdgeRef<K, EV> {
    /// The `(source key, target key)` pair.
    pub fn key(&self) -> (K, K) {
        (self.source, self.target)
    }

    /// The endpoint opposite `vertex`.
    pub fn other(&self, vertex: K) -> K {
        if self.source == vertex {
            self.target
        } else {
            self.source
        }
    }
}
