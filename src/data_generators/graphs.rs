use rand::{distributions::Distribution, Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::algorithms::graphs::search::is_connected;
use crate::data_structures::{
    graphs::{CompressedAdjacencyArray, EdgeData, UndirectedAdjacencyList},
    Key,
};

/// Generates edges in the uniform G(n, p) model, ordered by source key.
///
/// Every pair `u < v` becomes an edge with probability `edge_probability`,
/// with its value drawn from `edge_values`. The result feeds the ordered
/// graph constructors directly.
///
/// # Panics
///
/// Panics if `edge_probability` is not between 0 and 1 (inclusive).
pub fn gnp_edges<K: Key, EV: EdgeData>(
    num_vertices: K,
    edge_probability: f64,
    edge_values: &impl Distribution<EV>,
    rng: &mut impl Rng,
) -> Vec<(K, K, EV)> {
    let mut edges = Vec::new();
    for u in K::zero().range(num_vertices) {
        for v in (u + K::one()).range(num_vertices) {
            if rng.gen_bool(edge_probability) {
                edges.push((u, v, edge_values.sample(rng)));
            }
        }
    }
    edges
}

/// A seeded random digraph in the uniform G(n, p) model.
///
/// # Panics
///
/// Panics if `edge_probability` is not between 0 and 1 (inclusive).
pub fn random_directed<K: Key, EV: EdgeData>(
    num_vertices: K,
    edge_probability: f64,
    edge_values: &impl Distribution<EV>,
    seed: u64,
) -> CompressedAdjacencyArray<K, (), (), EV> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let edges = gnp_edges(num_vertices, edge_probability, edge_values, &mut rng);
    CompressedAdjacencyArray::try_with(
        edges,
        |&(source, target, _)| (source, target),
        |&(_, _, value)| value,
        std::iter::repeat(()).take(num_vertices.index()),
        (),
    )
    .expect("generated edges are ordered by source")
}

/// A seeded random undirected graph in the uniform G(n, p) model.
///
/// # Panics
///
/// Panics if `edge_probability` is not between 0 and 1 (inclusive).
pub fn random_undirected<K: Key, EV: EdgeData>(
    num_vertices: K,
    edge_probability: f64,
    edge_values: &impl Distribution<EV>,
    seed: u64,
) -> UndirectedAdjacencyList<K, (), (), EV> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let edges = gnp_edges(num_vertices, edge_probability, edge_values, &mut rng);
    UndirectedAdjacencyList::try_with(
        edges,
        |&(source, target, _)| (source, target),
        |&(_, _, value)| value,
        std::iter::repeat(()).take(num_vertices.index()),
        (),
    )
    .expect("generated edges are ordered by source")
}

/// Rejection-samples seeded G(n, p) graphs until a connected one appears.
///
/// `edge_probability` should be comfortably above `ln(n) / n`, otherwise
/// connected samples are rare and the loop runs for a long time.
///
/// # Panics
///
/// Panics if `edge_probability` is not between 0 and 1 (inclusive).
pub fn random_connected_undirected<K: Key, EV: EdgeData>(
    num_vertices: K,
    edge_probability: f64,
    edge_values: &impl Distribution<EV>,
    seed: u64,
) -> UndirectedAdjacencyList<K, (), (), EV> {
    let mut rng = Pcg64::seed_from_u64(seed);
    loop {
        let edges = gnp_edges(num_vertices, edge_probability, edge_values, &mut rng);
        let graph = UndirectedAdjacencyList::try_with(
            edges,
            |&(source, target, _): &(K, K, EV)| (source, target),
            |&(_, _, value)| value,
            std::iter::repeat(()).take(num_vertices.index()),
            (),
        )
        .expect("generated edges are ordered by source");
        if is_connected(&graph) {
            return graph;
        }
    }
}
