use std::ops::Range;

use tracing::debug;

use crate::core::{
    error::NotSimpleError,
    id::{CompactIdMap, IdType},
    NeighborReference, Neighbors, VertexSet,
};

use super::BitMatrix;

/// Dense view of a simple undirected graph.
///
/// Vertices are numbered `0..vertex_count()` and every edge `{u, v}` is
/// represented by two arcs, `u -> v` and `v -> u`, numbered
/// `0..arc_count()`. The arcs leaving a vertex are stored contiguously and
/// sorted by their heads, so that neighborhoods are slices and an arc can be
/// found by binary search. Adjacency queries take constant time.
#[derive(Debug)]
pub struct IndexedGraph<I> {
    map: CompactIdMap<I>,
    offsets: Vec<usize>,
    heads: Vec<usize>,
    reverse: Vec<usize>,
    adjacency: BitMatrix,
}

impl<I: IdType> IndexedGraph<I> {
    /// Builds the dense view, failing if the graph has a self-loop or
    /// parallel edges.
    pub fn new<G>(graph: &G) -> Result<Self, NotSimpleError<I>>
    where
        G: Neighbors + VertexSet<VertexId = I>,
    {
        let map = graph.vertex_id_map();
        let n = map.len();

        let mut offsets = Vec::with_capacity(n + 1);
        let mut heads = Vec::new();
        let mut adjacency = BitMatrix::triangular(n);

        offsets.push(0);

        for u in 0..n {
            let id = map.to_real(u).expect("dense index out of bounds");
            let start = heads.len();

            for neighbor in graph.neighbors_undirected(&id) {
                let v = map
                    .to_virt(neighbor.id().as_ref())
                    .expect("neighbor is not a vertex of the graph");

                if v == u {
                    return Err(NotSimpleError::SelfLoop(id));
                }

                heads.push(v);
            }

            let arcs = &mut heads[start..];
            arcs.sort_unstable();

            if let Some(pair) = arcs.windows(2).find(|pair| pair[0] == pair[1]) {
                let other = map.to_real(pair[0]).expect("dense index out of bounds");
                return Err(NotSimpleError::MultiEdge(id, other));
            }

            for &v in arcs.iter() {
                adjacency.insert(u, v);
            }

            offsets.push(heads.len());
        }

        let mut reverse = vec![0; heads.len()];

        for u in 0..n {
            for arc in offsets[u]..offsets[u + 1] {
                let v = heads[arc];
                let back = heads[offsets[v]..offsets[v + 1]]
                    .binary_search(&u)
                    .expect("neighborhoods are not symmetric");
                reverse[arc] = offsets[v] + back;
            }
        }

        debug!(vertices = n, arcs = heads.len(), "indexed graph");

        Ok(Self {
            map,
            offsets,
            heads,
            reverse,
            adjacency,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of arcs, which is twice the number of edges.
    pub fn arc_count(&self) -> usize {
        self.heads.len()
    }

    /// Arcs leaving vertex `u`.
    pub fn arcs(&self, u: usize) -> Range<usize> {
        self.offsets[u]..self.offsets[u + 1]
    }

    /// Target of the arc.
    pub fn head(&self, arc: usize) -> usize {
        self.heads[arc]
    }

    /// The opposite orientation of the arc.
    pub fn reverse(&self, arc: usize) -> usize {
        self.reverse[arc]
    }

    /// Returns the arc `u -> v`, if the vertices are adjacent.
    #[cfg(test)]
    pub fn arc(&self, u: usize, v: usize) -> Option<usize> {
        let start = self.offsets[u];
        self.neighbors(u)
            .binary_search(&v)
            .ok()
            .map(|offset| start + offset)
    }

    /// Neighbors of vertex `u` in increasing order.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.heads[self.arcs(u)]
    }

    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency.contains(u, v)
    }

    pub fn degree(&self, u: usize) -> usize {
        self.offsets[u + 1] - self.offsets[u]
    }

    /// Maps a dense vertex back to the ID in the original graph.
    pub fn id(&self, u: usize) -> I {
        self.map.to_real(u).expect("dense index out of bounds")
    }

    /// Maps an ID from the original graph to the dense vertex.
    #[cfg(test)]
    pub fn virt(&self, id: &I) -> Option<usize> {
        self.map.to_virt(id)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    use crate::{
        core::id::VertexId,
        infra::testing::{create_cycle, create_from_edges, LabeledGraph},
        storage::AdjList,
    };

    #[test]
    fn arcs_of_cycle() {
        let graph = create_cycle(5);
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.vertex_count(), 5);
        assert_eq!(indexed.arc_count(), 10);

        assert_eq!(indexed.neighbors(0), &[1, 4]);
        assert_eq!(indexed.neighbors(3), &[2, 4]);
        assert_eq!(indexed.degree(2), 2);

        assert!(indexed.is_adjacent(0, 4));
        assert!(indexed.is_adjacent(4, 0));
        assert!(!indexed.is_adjacent(0, 2));
        assert!(!indexed.is_adjacent(3, 3));
    }

    #[test]
    fn reverse_is_fixpoint_free_involution() {
        let graph = create_from_edges(6, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]);
        let indexed = IndexedGraph::new(&graph).unwrap();

        for u in 0..indexed.vertex_count() {
            for arc in indexed.arcs(u) {
                let back = indexed.reverse(arc);
                assert_ne!(arc, back);
                assert_eq!(indexed.reverse(back), arc);
                assert_eq!(indexed.head(back), u);
                assert_eq!(indexed.arc(u, indexed.head(arc)), Some(arc));
            }
        }

        assert_eq!(indexed.arc(0, 3), None);
    }

    #[test]
    fn self_loop() {
        let graph = create_from_edges(3, &[(0, 1), (1, 1), (1, 2)]);

        assert_matches!(
            IndexedGraph::new(&graph),
            Err(NotSimpleError::SelfLoop(VertexId(1)))
        );
    }

    #[test]
    fn multi_edge() {
        let graph = create_from_edges(3, &[(0, 1), (1, 2), (2, 1)]);

        assert_matches!(
            IndexedGraph::new(&graph),
            Err(NotSimpleError::MultiEdge(VertexId(1), VertexId(2)))
        );
    }

    #[test]
    fn empty() {
        let graph = AdjList::<(), ()>::new();
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.vertex_count(), 0);
        assert_eq!(indexed.arc_count(), 0);
    }

    #[test]
    fn labels() {
        let graph = LabeledGraph::new(&[("c", "a"), ("a", "b")]);
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.id(0), "a");
        assert_eq!(indexed.virt(&"c"), Some(2));
        assert_eq!(indexed.virt(&"z"), None);
        assert_eq!(indexed.neighbors(0), &[1, 2]);
    }
}
