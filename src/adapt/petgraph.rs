//! Support for undirected graphs from [petgraph](::petgraph).
//!
//! The [core](crate::core) traits are implemented for
//! [`UnGraph`](::petgraph::graph::UnGraph), so that the algorithms can be run
//! directly on it.
//!
//! ```
//! use holes::algo::find_hole;
//! use petgraph::graph::UnGraph;
//!
//! let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)]);
//!
//! let hole = find_hole(&graph).unwrap().unwrap();
//! assert_eq!(hole.len(), 5);
//! ```

use std::iter::Map;

use petgraph::{
    graph::{
        EdgeIndex, EdgeIndices, EdgeReference, Edges, EdgesConnecting, Graph, IndexType,
        NodeIndex, NodeIndices,
    },
    visit::EdgeRef,
    Undirected,
};

use crate::core::{
    id::{CompactIdMap, IdType},
    EdgeSet, GraphBase, NeighborRef, Neighbors, VertexSet,
};

impl<Ix: IndexType> IdType for NodeIndex<Ix> {
    fn is_integer() -> bool {
        true
    }

    fn as_bits(&self) -> u64 {
        self.index() as u64
    }

    fn from_bits(bits: u64) -> Self {
        NodeIndex::new(bits as usize)
    }
}

impl<Ix: IndexType> IdType for EdgeIndex<Ix> {
    fn is_integer() -> bool {
        true
    }

    fn as_bits(&self) -> u64 {
        self.index() as u64
    }

    fn from_bits(bits: u64) -> Self {
        EdgeIndex::new(bits as usize)
    }
}

impl<N, E, Ix: IndexType> GraphBase for Graph<N, E, Undirected, Ix> {
    type VertexId = NodeIndex<Ix>;
    type EdgeId = EdgeIndex<Ix>;
}

impl<N, E, Ix: IndexType> VertexSet for Graph<N, E, Undirected, Ix> {
    type VertexIdsIter<'a> = NodeIndices<Ix>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.node_indices()
    }

    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        id.index() < self.node_count()
    }

    fn vertex_id_map(&self) -> CompactIdMap<Self::VertexId> {
        // Node indices of `Graph` are always contiguous.
        CompactIdMap::isomorphic(self.node_count())
    }
}

impl<N, E, Ix: IndexType> Neighbors for Graph<N, E, Undirected, Ix> {
    type NeighborRef<'a> = NeighborRef<NodeIndex<Ix>, EdgeIndex<Ix>>
    where
        Self: 'a;

    type NeighborsIter<'a> = NeighborsIter<'a, E, Ix>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        NeighborsIter {
            edges: self.edges(*from),
            from: *from,
        }
    }
}

pub struct NeighborsIter<'a, E, Ix: IndexType> {
    edges: Edges<'a, E, Undirected, Ix>,
    from: NodeIndex<Ix>,
}

impl<'a, E, Ix: IndexType> Iterator for NeighborsIter<'a, E, Ix> {
    type Item = NeighborRef<NodeIndex<Ix>, EdgeIndex<Ix>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|edge| {
            let id = if edge.source() == self.from {
                edge.target()
            } else {
                edge.source()
            };

            NeighborRef {
                id,
                edge: edge.id(),
                pred: self.from,
            }
        })
    }
}

type EdgeIdOf<'a, E, Ix> = fn(EdgeReference<'a, E, Ix>) -> EdgeIndex<Ix>;

fn edge_id_of<E, Ix: IndexType>(edge: EdgeReference<'_, E, Ix>) -> EdgeIndex<Ix> {
    edge.id()
}

impl<N, E, Ix: IndexType> EdgeSet for Graph<N, E, Undirected, Ix> {
    type EdgeIdsIter<'a> = EdgeIndices<Ix>
    where
        Self: 'a;

    type EdgeIdIter<'a> = Map<EdgesConnecting<'a, E, Undirected, Ix>, EdgeIdOf<'a, E, Ix>>
    where
        Self: 'a;

    fn edge_ids(&self) -> Self::EdgeIdsIter<'_> {
        self.edge_indices()
    }

    fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_> {
        self.edges_connecting(*from, *to)
            .map(edge_id_of as EdgeIdOf<'_, E, Ix>)
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.edge_endpoints(*id)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use petgraph::graph::UnGraph;

    use super::*;

    use crate::algo::{
        find_hole, find_hole_at_least, has_hole, has_hole_at_least, hole::Error, is_hole,
    };

    #[test]
    fn neighbors() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0), (2, 3)]);

        // `Graph` has an inherent method of the same name.
        let mut neighbors = Neighbors::neighbors_undirected(&graph, &NodeIndex::new(2))
            .map(|neighbor| neighbor.id.index())
            .collect::<Vec<_>>();
        neighbors.sort_unstable();

        assert_eq!(neighbors, vec![0, 1, 3]);
        assert_eq!(graph.degree_undirected(&NodeIndex::new(3)), 1);
    }

    #[test]
    fn vertices_and_edges() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);

        assert_eq!(VertexSet::vertex_count(&graph), 3);
        assert!(graph.contains_vertex(&NodeIndex::new(2)));
        assert!(!graph.contains_vertex(&NodeIndex::new(3)));

        assert_eq!(EdgeSet::edge_count(&graph), 2);
        assert!(graph.contains_edge_between(&NodeIndex::new(2), &NodeIndex::new(1)));
        assert!(!graph.contains_edge_between(&NodeIndex::new(0), &NodeIndex::new(2)));
        assert_eq!(
            graph.endpoints(&EdgeIndex::new(1)),
            Some((NodeIndex::new(1), NodeIndex::new(2)))
        );
    }

    #[test]
    fn holes() {
        let mut graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 0),
            (1, 6),
        ]);

        assert_eq!(has_hole(&graph), Ok(true));
        assert_eq!(has_hole_at_least(&graph, 7), Ok(false));

        let hole = find_hole_at_least(&graph, 6).unwrap().unwrap();
        assert!(is_hole(&graph, hole.vertices()));
        assert!(!hole.contains(&NodeIndex::new(0)));

        graph.add_edge(NodeIndex::new(1), NodeIndex::new(3), ());
        graph.add_edge(NodeIndex::new(1), NodeIndex::new(4), ());
        graph.add_edge(NodeIndex::new(1), NodeIndex::new(5), ());

        assert_eq!(find_hole(&graph), Ok(None));
    }

    #[test]
    fn self_loop() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 1)]);

        assert_matches!(has_hole(&graph), Err(Error::SelfLoop(v)) if v.index() == 1);
    }
}
