pub use super::*;

/// A small weighted digraph used by the container build tests.
pub mod small_weighted {
    pub fn edges() -> [(u32, u32, u8); 4] {
        [(0, 1, 7), (0, 3, 2), (2, 0, 4), (2, 3, 9)]
    }

    pub fn compressed() -> super::CompressedAdjacencyArray<u32, (), (), u8> {
        super::CompressedAdjacencyArray::try_from_edges(&edges(), ())
            .expect("edges are ordered by source")
    }
}

/// The German city routes used throughout the traversal and shortest-path
/// tests: ten cities keyed alphabetically, eleven roads with km weights.
pub mod germany {
    use super::*;

    pub const CITIES: [&str; 10] = [
        "Augsburg",
        "Erfurt",
        "Frankfürt",
        "Karlsruhe",
        "Kassel",
        "Mannheim",
        "München",
        "Nürnberg",
        "Stuttgart",
        "Würzburg",
    ];

    pub const FRANKFURT: u32 = 2;

    pub const ROUTES: [(u32, u32, i32); 11] = [
        (0, 6, 84),
        (2, 5, 85),
        (2, 9, 217),
        (2, 4, 173),
        (3, 0, 250),
        (4, 6, 502),
        (5, 3, 80),
        (7, 8, 183),
        (7, 6, 167),
        (9, 1, 186),
        (9, 7, 103),
    ];

    pub fn directed() -> CompressedAdjacencyArray<u32, (), String, i32> {
        CompressedAdjacencyArray::try_with(
            ROUTES,
            |&(source, target, _)| (source, target),
            |&(_, _, km)| km,
            CITIES.iter().map(|city| city.to_string()),
            (),
        )
        .expect("routes are ordered by source")
    }

    pub fn undirected() -> UndirectedAdjacencyList<u32, (), String, i32> {
        UndirectedAdjacencyList::try_with(
            ROUTES,
            |&(source, target, _)| (source, target),
            |&(_, _, km)| km,
            CITIES.iter().map(|city| city.to_string()),
            (),
        )
        .expect("routes are ordered by source")
    }
}

mod protocol {
    use rstest::rstest;

    use crate::helpers::assert_same_elements;

    use super::germany;
    use super::*;

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_vertices(#[case] graph: impl Graph<u32, i32>) {
        assert_eq!(graph.num_vertices(), 10);
        assert_same_elements(graph.vertices(), 0..10);
    }

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_num_edges_counts_distinct_edges(#[case] graph: impl Graph<u32, i32>) {
        assert_eq!(graph.num_edges(), 11);
    }

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_find_vertex(#[case] graph: impl Graph<u32, i32>) {
        assert_eq!(graph.find_vertex(0), Some(0));
        assert_eq!(graph.find_vertex(9), Some(9));
        assert_eq!(graph.find_vertex(10), None);
    }

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_find_out_edge(#[case] graph: impl Graph<u32, i32>) {
        let e = graph.find_out_edge(2, 4).expect("Frankfürt -- Kassel");
        assert_eq!(e.value, 173);
        assert_eq!(e.other(2), 4);

        assert!(graph.find_out_edge(5, 9).is_none());
    }

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_out_edges_are_anchored_at_their_vertex(#[case] graph: impl Graph<u32, i32>) {
        for u in graph.vertices() {
            assert_eq!(graph.out_degree(u), graph.out_edges(u).count() as u32);
            for e in graph.out_edges(u) {
                assert_eq!(e.source, u);
            }
        }
    }

    #[rstest]
    #[case::compressed_adjacency_array(germany::directed())]
    #[case::undirected_adjacency_list(germany::undirected())]
    fn test_neighbors_and_adjacencies_agree(#[case] graph: impl Graph<u32, i32>) {
        for u in graph.vertices() {
            let neighbors: Vec<u32> = graph.neighbors(u).collect();
            let adjacent: Vec<u32> = graph.adjacencies(u).map(|(v, _)| v).collect();
            assert_eq!(neighbors, adjacent);
        }
    }

    #[test]
    fn test_compressed_out_edges_match_the_route_table() {
        let graph = germany::directed();

        let grouped: Vec<(u32, u32, i32)> = graph
            .vertices()
            .flat_map(|u| graph.out_edges(u))
            .map(|e| (e.source, e.target, e.value))
            .collect();
        assert_eq!(grouped, germany::ROUTES);
    }

    #[test]
    fn test_undirected_edges_anchor_every_route_at_both_endpoints() {
        let graph = germany::undirected();

        let mut once_per_endpoint: Vec<(u32, u32, i32)> = graph
            .edges()
            .map(|e| (e.source, e.target, e.value))
            .collect();
        let mut expected: Vec<(u32, u32, i32)> = germany::ROUTES
            .iter()
            .flat_map(|&(s, t, km)| [(s, t, km), (t, s, km)])
            .collect();
        once_per_endpoint.sort();
        expected.sort();
        assert_eq!(once_per_endpoint, expected);
    }

    #[test]
    fn test_vertex_values_hold_the_city_names() {
        let directed = germany::directed();
        let undirected = germany::undirected();

        for (key, city) in germany::CITIES.iter().enumerate() {
            assert_eq!(directed.vertex_value(key as u32), city);
            assert_eq!(undirected.vertex_value(key as u32), city);
        }
        assert_eq!(directed.vertex_value(germany::FRANKFURT), "Frankfürt");
    }
}
