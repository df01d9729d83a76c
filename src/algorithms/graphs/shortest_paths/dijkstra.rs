use binary_heap_plus::BinaryHeap;
use fixedbitset::FixedBitSet;

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef, EdgeWeight, Graph},
    Key,
};

use super::{PathTable, ShortestDistance, ShortestPath};

/// Finds the shortest distances from `source` to every reachable vertex and
/// feeds a [ShortestDistance] record per vertex to `sink`, in vertex key
/// order. Runs in O(|E| + |V| log |V|).
///
/// With `leaves_only` set, only vertices that end a maximal shortest path are
/// reported. Unreachable vertices are never reported.
///
/// `weight` maps an edge to its length. Weights must be non-negative; this is
/// not checked, and negative weights yield unspecified distances (use
/// [bellman_ford_shortest_distances](super::bellman_ford_shortest_distances)
/// for those).
pub fn dijkstra_shortest_distances<G, K, EV, D>(
    graph: &G,
    source: K,
    sink: &mut impl FnMut(ShortestDistance<K, D>),
    leaves_only: bool,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    let table = relax(graph, source, weight);
    table.emit_distances(source, leaves_only, sink);
}

/// Like [dijkstra_shortest_distances], but feeds a reconstructed
/// [ShortestPath] per reported vertex to `sink`. The path runs from `source`
/// to the target; the source's own path is `[source]` with distance zero.
pub fn dijkstra_shortest_paths<G, K, EV, D>(
    graph: &G,
    source: K,
    sink: &mut impl FnMut(ShortestPath<K, D>),
    leaves_only: bool,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    let table = relax(graph, source, weight);
    table.emit_paths(source, leaves_only, sink);
}

fn relax<G, K, EV, D>(
    graph: &G,
    source: K,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) -> PathTable<K, D>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    let num_vertices = graph.num_vertices().index();
    let mut table = PathTable::new(num_vertices, source);
    let mut in_queue = FixedBitSet::with_capacity(num_vertices);

    // Min-heap on (distance, vertex key). There is no decrease-key; a vertex
    // is re-pushed only when it is improved while not in the queue, so stale
    // priorities are tolerated and relaxation always reads the current
    // distance.
    let mut queue = BinaryHeap::new_min();
    queue.push((D::zero(), source));
    in_queue.insert(source.index());

    while let Some((_, u)) = queue.pop() {
        in_queue.set(u.index(), false);
        let Some(u_dist) = table.distance[u.index()] else {
            continue;
        };

        for e in graph.out_edges(u) {
            let v = e.target;
            let v_dist = u_dist + weight(&e);
            table.leaf.set(u.index(), false);

            if table.distance[v.index()].is_none_or(|old| v_dist < old) {
                table.distance[v.index()] = Some(v_dist);
                table.predecessor[v.index()] = u;
                table.leaf.insert(v.index());
                if !in_queue.contains(v.index()) {
                    queue.push((v_dist, v));
                    in_queue.insert(v.index());
                }
            }
        }
    }

    table
}
