use log::debug;

use crate::data_structures::{
    graphs::{EdgeData, EdgeRef, EdgeWeight, Graph},
    Key,
};

use super::{PathTable, ShortestDistance, ShortestPath};

/// Finds the shortest distances from `source` to every reachable vertex and
/// feeds a [ShortestDistance] record per vertex to `sink`, in vertex key
/// order. Runs in O(|V| · |E|); slower than Dijkstra but negative edge
/// weights are allowed.
///
/// With `detect_negative_cycles` set, one extra pass over the edges checks
/// whether any distance can still improve; if so a negative-sum cycle is
/// reachable from `source`, the function returns `true` and the sink is
/// never called. With `leaves_only` set, only vertices that end a maximal
/// path are reported. Unreachable vertices are never reported.
pub fn bellman_ford_shortest_distances<G, K, EV, D>(
    graph: &G,
    source: K,
    sink: &mut impl FnMut(ShortestDistance<K, D>),
    leaves_only: bool,
    detect_negative_cycles: bool,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) -> bool
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    match relax(graph, source, leaves_only, detect_negative_cycles, weight) {
        Some(table) => {
            table.emit_distances(source, leaves_only, sink);
            false
        }
        None => true,
    }
}

/// Like [bellman_ford_shortest_distances], but feeds a reconstructed
/// [ShortestPath] per reported vertex to `sink`. Returns `true` (emitting
/// nothing) when a reachable negative cycle is detected.
pub fn bellman_ford_shortest_paths<G, K, EV, D>(
    graph: &G,
    source: K,
    sink: &mut impl FnMut(ShortestPath<K, D>),
    leaves_only: bool,
    detect_negative_cycles: bool,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) -> bool
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    match relax(graph, source, leaves_only, detect_negative_cycles, weight) {
        Some(table) => {
            table.emit_paths(source, leaves_only, sink);
            false
        }
        None => true,
    }
}

/// Runs the relaxation rounds; `None` means a reachable negative cycle was
/// detected.
fn relax<G, K, EV, D>(
    graph: &G,
    source: K,
    leaves_only: bool,
    detect_negative_cycles: bool,
    weight: impl Fn(&EdgeRef<K, EV>) -> D,
) -> Option<PathTable<K, D>>
where
    G: Graph<K, EV> + ?Sized,
    K: Key,
    EV: EdgeData,
    D: EdgeWeight,
{
    let num_vertices = graph.num_vertices().index();
    let mut table = PathTable::new(num_vertices, source);

    // |V|-1 rounds over the global edge iteration, leaving early once a
    // round stops improving anything
    let mut changed = true;
    for _ in 1..num_vertices {
        if !changed {
            break;
        }
        changed = false;

        for e in graph.edges() {
            let Some(u_dist) = table.distance[e.source.index()] else {
                continue;
            };
            let v_dist = u_dist + weight(&e);
            if table.distance[e.target.index()].is_none_or(|old| v_dist < old) {
                table.distance[e.target.index()] = Some(v_dist);
                table.predecessor[e.target.index()] = e.source;
                changed = true;
            }
        }
    }

    if leaves_only {
        let reached = table.distance.iter().filter(|d| d.is_some()).count();
        for (index, distance) in table.distance.iter().enumerate() {
            if distance.is_some() {
                table.leaf.insert(index);
            }
        }
        // every vertex with an outgoing edge is previous to some other
        // vertex; an isolated reachable source stays its own leaf
        if reached > 1 {
            for e in graph.edges() {
                table.leaf.set(e.source.index(), false);
            }
        }
    }

    if detect_negative_cycles {
        for e in graph.edges() {
            let Some(u_dist) = table.distance[e.source.index()] else {
                continue;
            };
            if table.distance[e.target.index()].is_none_or(|old| u_dist + weight(&e) < old) {
                debug!(
                    "negative cycle: edge {} -> {} can still be relaxed",
                    e.source, e.target
                );
                return None;
            }
        }
    }

    Some(table)
}

#[cfg(test)]
mod test {
    use crate::data_structures::graphs::tests::germany;
    use crate::data_structures::graphs::CompressedAdjacencyArray;

    use super::super::dijkstra::dijkstra_shortest_distances;
    use super::*;

    fn km(e: &EdgeRef<u32, i32>) -> i32 {
        e.value
    }

    #[test]
    fn test_directed_distances_from_frankfurt() {
        let graph = germany::directed();

        let mut records = Vec::new();
        let cyclic = bellman_ford_shortest_distances(
            &graph,
            germany::FRANKFURT,
            &mut |r| records.push(r),
            false,
            true,
            km,
        );

        assert!(!cyclic);
        let got: Vec<(u32, i32)> = records.iter().map(|r| (r.target, r.distance)).collect();
        assert_eq!(
            got,
            [
                (0, 415),
                (1, 403),
                (2, 0),
                (3, 165),
                (4, 173),
                (5, 85),
                (6, 487),
                (7, 320),
                (8, 503),
                (9, 217),
            ]
        );
    }

    #[test]
    fn test_directed_leaves_from_frankfurt() {
        let graph = germany::directed();

        let mut records = Vec::new();
        let cyclic = bellman_ford_shortest_distances(
            &graph,
            germany::FRANKFURT,
            &mut |r| records.push(r),
            true,
            true,
            km,
        );

        assert!(!cyclic);
        let got: Vec<(u32, i32)> = records.iter().map(|r| (r.target, r.distance)).collect();
        assert_eq!(got, [(1, 403), (6, 487), (8, 503)]);
    }

    #[test]
    fn test_paths_match_dijkstra_on_the_undirected_routes() {
        let graph = germany::undirected();

        let mut records = Vec::new();
        let cyclic = bellman_ford_shortest_paths(
            &graph,
            germany::FRANKFURT,
            &mut |r| records.push(r),
            false,
            true,
            km,
        );

        assert!(!cyclic);
        let distances: Vec<(u32, i32)> = records
            .iter()
            .map(|r| (*r.path.last().unwrap(), r.distance))
            .collect();
        assert_eq!(
            distances,
            [
                (0, 415),
                (1, 403),
                (2, 0),
                (3, 165),
                (4, 173),
                (5, 85),
                (6, 487),
                (7, 320),
                (8, 503),
                (9, 217),
            ]
        );
        for record in &records {
            assert_eq!(record.path.first(), Some(&germany::FRANKFURT));
        }
    }

    #[test]
    fn test_negative_weights_without_a_cycle() {
        let graph: CompressedAdjacencyArray<u32, (), (), i32> =
            CompressedAdjacencyArray::try_from_edges(
                &[(0u32, 1u32, 5i32), (0, 2, 2), (1, 2, -4), (2, 3, 1)],
                (),
            )
            .unwrap();

        let mut records = Vec::new();
        let cyclic =
            bellman_ford_shortest_distances(&graph, 0, &mut |r| records.push(r), false, true, km);

        assert!(!cyclic);
        let got: Vec<(u32, i32)> = records.iter().map(|r| (r.target, r.distance)).collect();
        // 0 -> 1 -> 2 beats the direct 0 -> 2 road
        assert_eq!(got, [(0, 0), (1, 5), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_negative_cycle_is_reported_and_nothing_is_emitted() {
        let graph: CompressedAdjacencyArray<u32, (), (), i32> =
            CompressedAdjacencyArray::try_from_edges(
                &[(0u32, 1u32, 4i32), (1, 2, -6), (2, 0, 1)],
                (),
            )
            .unwrap();

        let mut distances = Vec::new();
        assert!(bellman_ford_shortest_distances(
            &graph,
            0,
            &mut |r| distances.push(r),
            false,
            true,
            km,
        ));
        assert!(distances.is_empty());

        let mut paths = Vec::new();
        assert!(bellman_ford_shortest_paths(
            &graph,
            0,
            &mut |r: ShortestPath<u32, i32>| paths.push(r),
            false,
            true,
            km,
        ));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_unreachable_negative_cycle_is_not_reported() {
        // the 3 -> 4 -> 3 cycle is negative but not reachable from 0
        let graph: CompressedAdjacencyArray<u32, (), (), i32> =
            CompressedAdjacencyArray::try_from_edges(
                &[(0u32, 1u32, 2i32), (3, 4, -5), (4, 3, 1)],
                (),
            )
            .unwrap();

        let mut records = Vec::new();
        let cyclic =
            bellman_ford_shortest_distances(&graph, 0, &mut |r| records.push(r), false, true, km);

        assert!(!cyclic);
        let got: Vec<(u32, i32)> = records.iter().map(|r| (r.target, r.distance)).collect();
        assert_eq!(got, [(0, 0), (1, 2)]);
    }

    #[test]
    fn test_detection_can_be_disabled() {
        let graph: CompressedAdjacencyArray<u32, (), (), i32> =
            CompressedAdjacencyArray::try_from_edges(
                &[(0u32, 1u32, 4i32), (1, 2, -6), (2, 0, 1)],
                (),
            )
            .unwrap();

        let mut records = Vec::new();
        let cyclic =
            bellman_ford_shortest_distances(&graph, 0, &mut |r| records.push(r), false, false, km);

        assert!(!cyclic);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_agrees_with_dijkstra_on_non_negative_weights() {
        let graph = germany::directed();

        let mut dijkstra = Vec::new();
        dijkstra_shortest_distances(
            &graph,
            germany::FRANKFURT,
            &mut |r| dijkstra.push(r),
            false,
            km,
        );

        let mut bellman_ford = Vec::new();
        bellman_ford_shortest_distances(
            &graph,
            germany::FRANKFURT,
            &mut |r| bellman_ford.push(r),
            false,
            true,
            km,
        );

        assert_eq!(dijkstra, bellman_ford);
    }

    #[test]
    fn test_agrees_with_dijkstra_on_random_graphs() {
        use rand::distributions::Uniform;

        use crate::data_generators::graphs::random_directed;

        let weights = Uniform::new(1u32, 100);
        for seed in 0..8 {
            let graph = random_directed::<u32, u32>(40, 0.15, &weights, seed);

            let mut dijkstra = Vec::new();
            dijkstra_shortest_distances(&graph, 0, &mut |r| dijkstra.push(r), false, |e| e.value);

            let mut bellman_ford = Vec::new();
            bellman_ford_shortest_distances(
                &graph,
                0,
                &mut |r| bellman_ford.push(r),
                false,
                true,
                |e| e.value,
            );

            assert_eq!(dijkstra, bellman_ford);
        }
    }
}
