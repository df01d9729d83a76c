use std::fmt::Display;

use log::{debug, trace};

use super::{Edge, EdgeData, EdgeRef, Graph, GraphError, Key, UndirectedGraph};

/// An undirected graph with intrusive per-vertex incidence lists.
///
/// Edge nodes live in a slab owned by the graph. Each node carries two
/// doubly-linked list links, one per endpoint, so a single node is
/// simultaneously a member of both endpoints' incidence lists. Walking the
/// incidence list of a vertex `u` follows, at every node, the link whose
/// stored endpoint equals `u`. A loop's two links both land in its vertex's
/// list, where they occupy two adjacent positions (and count two toward the
/// degree); which side sits at which position is resolved by neighbor id.
///
/// Unlike [CompressedAdjacencyArray](super::CompressedAdjacencyArray), edges
/// can be created and erased after construction; erasing splices the node out
/// of both lists in O(1). Vertex keys are never invalidated by any edge
/// operation. Edge ids are slab indices and stay stable until the edge they
/// name is erased, after which the slot may be reused.
///
/// The graph, each vertex and each edge carry an optional user value (`GV`,
/// `VV`, `EV`).
#[derive(Debug)]
pub struct UndirectedAdjacencyList<K: Key, GV = (), VV = (), EV: EdgeData = ()> {
    vertices: Vec<ListVertex<K, VV>>,
    slots: Vec<Slot<K, EV>>,
    free_head: K,
    num_edges: K,
    value: GV,
}

#[derive(Debug)]
struct ListVertex<K: Key, VV> {
    head: K,
    tail: K,
    len: K,
    value: VV,
}

impl<K: Key, VV> ListVertex<K, VV> {
    fn new(value: VV) -> Self {
        Self {
            head: K::nil(),
            tail: K::nil(),
            len: K::zero(),
            value,
        }
    }
}

#[derive(Debug)]
enum Slot<K: Key, EV> {
    Occupied(EdgeNode<K, EV>),
    Vacant { next_free: K },
}

#[derive(Debug)]
struct EdgeNode<K: Key, EV> {
    links: [EdgeLink<K>; 2],
    value: EV,
}

#[derive(Clone, Copy, Debug)]
struct EdgeLink<K: Key> {
    endpoint: K,
    prev: K,
    next: K,
}

impl<K: Key> EdgeLink<K> {
    fn detached(endpoint: K) -> Self {
        Self {
            endpoint,
            prev: K::nil(),
            next: K::nil(),
        }
    }
}

impl<K: Key, EV> EdgeNode<K, EV> {
    /// The link threaded through `owner`'s incidence list.
    ///
    /// Only meaningful for a non-loop node. A loop's two links both land in
    /// the same list, so callers must resolve the side positionally via
    /// [side_after](Self::side_after) or [side_before](Self::side_before).
    fn link(&self, owner: K) -> &EdgeLink<K> {
        if self.links[0].endpoint == owner {
            &self.links[0]
        } else {
            &self.links[1]
        }
    }

    /// The side of this node occupying the position in `owner`'s list whose
    /// predecessor is `prev`.
    ///
    /// The endpoint decides for a non-loop node. A loop occupies two
    /// positions of the same list, so its sides are told apart by the
    /// predecessor id instead.
    fn side_after(&self, owner: K, prev: K) -> usize {
        if self.is_loop() {
            usize::from(self.links[0].prev != prev)
        } else if self.links[0].endpoint == owner {
            0
        } else {
            1
        }
    }

    /// The side of this node occupying the position in `owner`'s list whose
    /// successor is `next`.
    fn side_before(&self, owner: K, next: K) -> usize {
        if self.is_loop() {
            usize::from(self.links[0].next != next)
        } else if self.links[0].endpoint == owner {
            0
        } else {
            1
        }
    }

    /// The endpoint opposite `owner`.
    fn other(&self, owner: K) -> K {
        if self.links[0].endpoint == owner {
            self.links[1].endpoint
        } else {
            self.links[0].endpoint
        }
    }

    fn is_loop(&self) -> bool {
        self.links[0].endpoint == self.links[1].endpoint
    }
}

impl<K: Key, GV, VV, EV: EdgeData> UndirectedAdjacencyList<K, GV, VV, EV> {
    /// An empty graph carrying only a user value.
    pub fn new(graph_value: GV) -> Self {
        Self {
            vertices: Vec::new(),
            slots: Vec::new(),
            free_head: K::nil(),
            num_edges: K::zero(),
            value: graph_value,
        }
    }

    /// Builds a graph from an edge range plus a vertex-value range.
    ///
    /// Same contract as the compressed array's loader: `edge_key` extracts
    /// `(source, target)`, edges MUST arrive ordered by non-decreasing source
    /// key ([GraphError::UnorderedEdges] otherwise), the vertex set is sized
    /// to cover `vertex_values` and every endpoint, and keys colliding with
    /// the reserved sentinel are rejected. Every edge is inserted with
    /// [create_edge](Self::create_edge), i.e. appended to both incidence
    /// lists.
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

        let mut graph = Self::new(graph_value);
        graph.vertices = vertex_values.into_iter().map(ListVertex::new).collect();
        if graph.vertices.len() > max.index() + 1 {
            return Err(GraphError::KeyOutOfBounds { key: K::nil(), max });
        }
        let num_vertices = match max_key {
            Some(k) => graph.vertices.len().max(k.index() + 1),
            None => graph.vertices.len(),
        };
        graph
            .vertices
            .resize_with(num_vertices, || ListVertex::new(VV::default()));

        graph.slots.reserve(edges.len());
        for item in &edges {
            let (source, target) = edge_key(item);
            graph.create_edge(source, target, edge_value(item));
        }

        debug!(
            "built undirected adjacency list: {} vertices, {} edges",
            num_vertices, graph.num_edges
        );
        Ok(graph)
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

    /// The value of the live edge with the given id.
    pub fn edge_value(&self, edge: K) -> &EV {
        &self.node(edge).value
    }

    pub fn edge_value_mut(&mut self, edge: K) -> &mut EV {
        &mut self.node_mut(edge).value
    }

    /// The endpoint keys of the live edge with the given id.
    pub fn endpoints(&self, edge: K) -> (K, K) {
        let node = self.node(edge);
        (node.links[0].endpoint, node.links[1].endpoint)
    }

    /// Appends a vertex and returns its key.
    ///
    /// Growing the vertex set may reallocate vertex storage; existing keys
    /// and edge ids stay valid.
    pub fn create_vertex(&mut self, value: VV) -> Result<K, GraphError<K>> {
        let max = K::nil() - K::one();
        if self.vertices.len() > max.index() {
            return Err(GraphError::KeyOutOfBounds { key: K::nil(), max });
        }
        let key = K::new(self.vertices.len());
        self.vertices.push(ListVertex::new(value));
        Ok(key)
    }

    /// Grows the vertex set to `num_vertices` default-valued vertices.
    /// Never shrinks. Growth may reallocate vertex storage but leaves keys
    /// and edge ids valid.
    pub fn resize_vertices(&mut self, num_vertices: K)
    where
        VV: Default,
    {
        if num_vertices.index() > self.vertices.len() {
            self.vertices
                .resize_with(num_vertices.index(), || ListVertex::new(VV::default()));
        }
    }

    /// Allocates an edge between `u` and `v` and appends it to both
    /// incidence lists. Returns the new edge's id.
    ///
    /// Both keys must address existing vertices. A loop is appended to its
    /// vertex's list through both links, so it occupies two positions there
    /// and adds two to the degree.
    pub fn create_edge(&mut self, u: K, v: K, value: EV) -> K {
        debug_assert!(u < self.num_vertices() && v < self.num_vertices());
        let edge = self.allocate(EdgeNode {
            links: [EdgeLink::detached(u), EdgeLink::detached(v)],
            value,
        });
        self.link_back(edge);
        self.num_edges += K::one();
        trace!("created edge {edge}: {u} -- {v}");
        edge
    }

    /// Like [create_edge](Self::create_edge), but prepends to both incidence
    /// lists instead of appending.
    pub fn create_edge_front(&mut self, u: K, v: K, value: EV) -> K {
        debug_assert!(u < self.num_vertices() && v < self.num_vertices());
        let edge = self.allocate(EdgeNode {
            links: [EdgeLink::detached(u), EdgeLink::detached(v)],
            value,
        });
        self.link_front(edge);
        self.num_edges += K::one();
        trace!("created edge {edge}: {u} -- {v}");
        edge
    }

    /// Unlinks the edge from both incidence lists, destroys it, and returns
    /// the id of the edge that followed it in `owner`'s incidence list.
    ///
    /// Iterators positioned on the erased edge are invalidated; iterators on
    /// any other edge are unaffected.
    pub fn erase_edge(&mut self, owner: K, edge: K) -> Option<K> {
        let node = self.node(edge);
        // a loop occupies two adjacent positions; step past both of them
        let next = if node.is_loop() {
            if node.links[0].next == edge {
                node.links[1].next
            } else {
                node.links[0].next
            }
        } else {
            node.link(owner).next
        };
        self.unlink(edge);
        self.release(edge);
        self.num_edges -= K::one();
        trace!("erased edge {edge}");
        (next != K::nil()).then_some(next)
    }

    /// Erases the first edge between `u` and `v`, if any.
    pub fn erase_between(&mut self, u: K, v: K) -> bool {
        match self.find_incident_edge(u, v) {
            Some(edge) => {
                self.erase_edge(u, edge);
                true
            }
            None => false,
        }
    }

    /// Erases every edge in `u`'s incidence list.
    pub fn clear_edges(&mut self, u: K) {
        while self.vertices[u.index()].head != K::nil() {
            let edge = self.vertices[u.index()].head;
            self.erase_edge(u, edge);
        }
    }

    /// Removes every edge, then every vertex.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = K::nil();
        self.num_edges = K::zero();
        self.vertices.clear();
    }

    /// Scans `u`'s incidence list for the first edge whose far endpoint is
    /// `v`; `None` if the vertices are not adjacent.
    pub fn find_incident_edge(&self, u: K, v: K) -> Option<K> {
        self.incident_edges(u).find(|e| e.target == v).map(|e| e.id)
    }

    /// Iterates `u`'s incidence list in list order, observing every edge with
    /// `source` normalized to `u`. A loop is observed twice, once per
    /// position it occupies in the list.
    pub fn incident_edges(&self, u: K) -> IncidenceEdges<'_, K, GV, VV, EV> {
        let head = self.vertices[u.index()].head;
        let side = if head == K::nil() {
            0
        } else {
            self.node(head).side_after(u, K::nil())
        };

        IncidenceEdges {
            graph: self,
            owner: u,
            cursor: head,
            side,
        }
    }

    fn node(&self, edge: K) -> &EdgeNode<K, EV> {
        match &self.slots[edge.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("edge {edge} has been erased"),
        }
    }

    fn node_mut(&mut self, edge: K) -> &mut EdgeNode<K, EV> {
        match &mut self.slots[edge.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("edge {edge} has been erased"),
        }
    }

    fn allocate(&mut self, node: EdgeNode<K, EV>) -> K {
        if self.free_head != K::nil() {
            let edge = self.free_head;
            match self.slots[edge.index()] {
                Slot::Vacant { next_free } => self.free_head = next_free,
                Slot::Occupied(_) => unreachable!("free list points at a live edge"),
            }
            self.slots[edge.index()] = Slot::Occupied(node);
            edge
        } else {
            debug_assert!(self.slots.len() < K::nil().index());
            let edge = K::new(self.slots.len());
            self.slots.push(Slot::Occupied(node));
            edge
        }
    }

    fn release(&mut self, edge: K) {
        self.slots[edge.index()] = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = edge;
    }

    /// Appends the detached edge to the incidence list of each of its
    /// endpoints, one side at a time. A loop's two sides land in the same
    /// list, occupying two adjacent positions.
    fn link_back(&mut self, edge: K) {
        for side in 0..2 {
            let owner = self.node(edge).links[side].endpoint;
            let tail = self.vertices[owner.index()].tail;

            self.node_mut(edge).links[side].prev = tail;
            self.node_mut(edge).links[side].next = K::nil();
            if tail == K::nil() {
                self.vertices[owner.index()].head = edge;
            } else {
                // the tail occurrence is the side with no successor; while a
                // loop's second side is being threaded, that is still side 0
                let tail_side = self.node(tail).side_before(owner, K::nil());
                self.node_mut(tail).links[tail_side].next = edge;
            }

            let list = &mut self.vertices[owner.index()];
            list.tail = edge;
            list.len += K::one();
        }
    }

    /// Prepends the detached edge to the incidence list of each of its
    /// endpoints, one side at a time.
    fn link_front(&mut self, edge: K) {
        for side in 0..2 {
            let owner = self.node(edge).links[side].endpoint;
            let head = self.vertices[owner.index()].head;

            self.node_mut(edge).links[side].prev = K::nil();
            self.node_mut(edge).links[side].next = head;
            if head == K::nil() {
                self.vertices[owner.index()].tail = edge;
            } else {
                let head_side = self.node(head).side_after(owner, K::nil());
                self.node_mut(head).links[head_side].prev = edge;
            }

            let list = &mut self.vertices[owner.index()];
            list.head = edge;
            list.len += K::one();
        }
    }

    /// Splices the edge out of the incidence list of each of its endpoints,
    /// one side at a time, and detaches its links.
    fn unlink(&mut self, edge: K) {
        for side in 0..2 {
            let EdgeLink {
                endpoint: owner,
                prev,
                next,
            } = self.node(edge).links[side];

            if prev == K::nil() {
                self.vertices[owner.index()].head = next;
            } else {
                let prev_side = self.node(prev).side_before(owner, edge);
                self.node_mut(prev).links[prev_side].next = next;
            }
            if next == K::nil() {
                self.vertices[owner.index()].tail = prev;
            } else {
                let next_side = self.node(next).side_after(owner, edge);
                self.node_mut(next).links[next_side].prev = prev;
            }

            self.vertices[owner.index()].len -= K::one();
        }

        let node = self.node_mut(edge);
        node.links[0] = EdgeLink::detached(node.links[0].endpoint);
        node.links[1] = EdgeLink::detached(node.links[1].endpoint);
    }
}

impl<K: Key, GV, VV, EV: EdgeData> Graph<K, EV> for UndirectedAdjacencyList<K, GV, VV, EV> {
    fn num_vertices(&self) -> K {
        K::new(self.vertices.len())
    }

    fn num_edges(&self) -> K {
        self.num_edges
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_> {
        Box::new(self.vertices().flat_map(move |u| self.incident_edges(u)))
    }

    fn out_edges(&self, u: K) -> Box<dyn Iterator<Item = EdgeRef<K, EV>> + '_> {
        Box::new(self.incident_edges(u))
    }

    fn out_degree(&self, u: K) -> K {
        self.vertices[u.index()].len
    }
}

impl<K: Key, GV, VV, EV: EdgeData> UndirectedGraph<K, EV>
    for UndirectedAdjacencyList<K, GV, VV, EV>
{
}

impl<K: Key, GV, VV, EV: EdgeData> Display for UndirectedAdjacencyList<K, GV, VV, EV> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "UndirectedAdjacencyList(n={}, m={}) [",
            self.num_vertices(),
            self.num_edges()
        )?;
        for v in self.vertices() {
            write!(f, "\t{} →", v)?;
            for e in self.incident_edges(v) {
                write!(f, " {}({:?}),", e.target, e.value)?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}

/// Iterator over one vertex's incidence list.
///
/// Advancing follows, on the current edge node, the link threaded through
/// the owning vertex's list; the cursor carries the link side so that a
/// loop's two positions are traversed like any other pair of nodes.
/// Insertions at other vertices do not disturb it; erasing the edge it is
/// positioned on invalidates it.
pub struct IncidenceEdges<'a, K: Key, GV, VV, EV: EdgeData> {
    graph: &'a UndirectedAdjacencyList<K, GV, VV, EV>,
    owner: K,
    cursor: K,
    side: usize,
}

impl<K: Key, GV, VV, EV: EdgeData> Iterator for IncidenceEdges<'_, K, GV, VV, EV> {
    type Item = EdgeRef<K, EV>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == K::nil() {
            return None;
        }
        let id = self.cursor;
        let node = self.graph.node(id);
        let next = node.links[self.side].next;
        if next != K::nil() {
            self.side = self.graph.node(next).side_after(self.owner, id);
        }
        self.cursor = next;

        Some(EdgeRef {
            id,
            source: self.owner,
            target: node.other(self.owner),
            value: node.value,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::data_structures::graphs::tests::small_weighted;
    use crate::helpers::assert_same_elements;

    use super::*;

    fn small() -> UndirectedAdjacencyList<u32, (), (), u8> {
        UndirectedAdjacencyList::try_from_edges(&small_weighted::edges(), ()).unwrap()
    }

    #[test]
    fn test_incidence_lists_follow_insertion_order() {
        let graph = small();

        let at = |u: u32| -> Vec<(u32, u8)> {
            graph.incident_edges(u).map(|e| (e.target, e.value)).collect()
        };
        assert_eq!(at(0), [(1, 7), (3, 2), (2, 4)]);
        assert_eq!(at(1), [(0, 7)]);
        assert_eq!(at(2), [(0, 4), (3, 9)]);
        assert_eq!(at(3), [(0, 2), (2, 9)]);
    }

    #[test]
    fn test_degree_sum_is_twice_the_edge_count() {
        let mut graph = small();

        assert_eq!(graph.num_edges(), 4);
        let degree_sum: u32 = graph.vertices().map(|u| graph.out_degree(u)).sum();
        assert_eq!(degree_sum, 2 * graph.num_edges());

        // a loop is one edge contributing two to its vertex's degree
        graph.create_edge(3, 3, 1);
        assert_eq!(graph.num_edges(), 5);
        let degree_sum: u32 = graph.vertices().map(|u| graph.out_degree(u)).sum();
        assert_eq!(degree_sum, 2 * graph.num_edges());
    }

    #[test]
    fn test_edges_visits_every_edge_once_per_endpoint() {
        let graph = small();

        let mut seen: Vec<u32> = graph.edges().map(|e| e.id).collect();
        assert_eq!(seen.len(), 8);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);

        for e in graph.edges() {
            assert!(e.source == graph.endpoints(e.id).0 || e.source == graph.endpoints(e.id).1);
        }
    }

    #[test]
    fn test_erase_edge_splices_both_lists() {
        let mut graph = small();

        let edge = graph.find_incident_edge(0, 3).unwrap();
        let next = graph.erase_edge(0, edge);

        // the next edge in 0's list was 0 -- 2
        assert_eq!(next, graph.find_incident_edge(0, 2));
        assert_eq!(graph.num_edges(), 3);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.out_degree(3), 1);
        assert_eq!(graph.find_incident_edge(0, 3), None);
        assert_eq!(graph.find_incident_edge(3, 0), None);

        // the remaining edges are untouched
        assert_same_elements(
            graph.incident_edges(0).map(|e| (e.target, e.value)),
            [(1u32, 7u8), (2, 4)],
        );
        assert_same_elements(
            graph.incident_edges(3).map(|e| (e.target, e.value)),
            [(2u32, 9u8)],
        );
    }

    #[test]
    fn test_erase_tail_edge_updates_the_tail() {
        let mut graph = small();

        let edge = graph.find_incident_edge(0, 2).unwrap();
        assert_eq!(graph.erase_edge(0, edge), None);

        let created = graph.create_edge(0, 2, 13);
        let last = graph.incident_edges(0).last().unwrap();
        assert_eq!(last.id, created);
        assert_eq!(last.value, 13);
    }

    #[test]
    fn test_erased_slots_are_reused() {
        let mut graph = small();

        let edge = graph.find_incident_edge(2, 3).unwrap();
        graph.erase_edge(2, edge);
        let recreated = graph.create_edge(2, 3, 10);

        assert_eq!(recreated, edge);
        assert_eq!(graph.num_edges(), 4);
    }

    #[test]
    fn test_create_edge_front_prepends_to_both_lists() {
        let mut graph = small();

        let edge = graph.create_edge_front(1, 2, 5);
        assert_eq!(graph.incident_edges(1).next().unwrap().id, edge);
        assert_eq!(graph.incident_edges(2).next().unwrap().id, edge);
        assert_eq!(graph.out_degree(1), 2);
        assert_eq!(graph.out_degree(2), 3);
    }

    #[test]
    fn test_clear_edges_leaves_other_incidences_intact() {
        let mut graph = small();

        graph.clear_edges(0);

        assert_eq!(graph.out_degree(0), 0);
        assert_eq!(graph.num_edges(), 1);
        assert_same_elements(
            graph.incident_edges(2).map(|e| (e.target, e.value)),
            [(3u32, 9u8)],
        );
        assert_eq!(graph.out_degree(1), 0);
    }

    #[test]
    fn test_clear_empties_the_graph() {
        let mut graph = small();

        graph.clear();

        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn test_loops_add_two_to_their_vertex_degree() {
        let mut graph = small();

        let edge = graph.create_edge(1, 1, 3);
        assert_eq!(graph.num_edges(), 5);
        assert_eq!(graph.out_degree(1), 3);
        assert_eq!(graph.find_incident_edge(1, 1), Some(edge));
        // the loop occupies two positions in 1's incidence list
        assert_eq!(graph.incident_edges(1).filter(|e| e.id == edge).count(), 2);
        assert_eq!(graph.incident_edges(1).count(), 3);

        graph.erase_edge(1, edge);
        assert_eq!(graph.num_edges(), 4);
        assert_eq!(graph.out_degree(1), 1);
        assert_eq!(graph.find_incident_edge(1, 1), None);
    }

    #[test]
    fn test_erase_steps_past_both_positions_of_a_loop() {
        let mut graph = small();

        let a = graph.create_edge(1, 1, 3);
        let b = graph.create_edge(1, 2, 5);

        assert_eq!(graph.erase_edge(1, a), Some(b));
        assert_eq!(graph.out_degree(1), 2);
        assert_same_elements(
            graph.incident_edges(1).map(|e| (e.target, e.value)),
            [(0u32, 7u8), (2, 5)],
        );
    }

    #[test]
    fn test_vertex_growth_keeps_keys_valid() {
        let mut graph = small();

        let v = graph.create_vertex(()).unwrap();
        assert_eq!(v, 4);
        let edge = graph.create_edge(0, v, 6);

        assert_eq!(graph.out_degree(v), 1);
        assert_eq!(graph.endpoints(edge), (0, v));
    }

    #[test]
    fn test_unordered_edges_are_rejected() {
        let result: Result<UndirectedAdjacencyList<u32>, _> =
            UndirectedAdjacencyList::try_from_edges(&[(0, 1), (2, 3), (1, 2)], ());

        assert_eq!(
            result.unwrap_err(),
            GraphError::UnorderedEdges {
                previous: 2,
                current: 1
            }
        );
    }
}
