use super::base::{GraphBase, NeighborReference};

/// Access to the neighbors of a vertex.
///
/// The graphs in this crate are undirected, so the neighbors are all vertices
/// connected with the given vertex by an edge, each reported once per edge.
/// Storages are required to yield a self-loop just once.
pub trait Neighbors: GraphBase {
    type NeighborRef<'a>: NeighborReference<Self::VertexId, Self::EdgeId>
    where
        Self: 'a;

    type NeighborsIter<'a>: Iterator<Item = Self::NeighborRef<'a>>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_>;

    fn degree_undirected(&self, id: &Self::VertexId) -> usize {
        self.neighbors_undirected(id)
            .map(|neighbor| {
                // A self-loop contributes to the degree twice.
                if neighbor.id().as_ref() == id {
                    2
                } else {
                    1
                }
            })
            .sum()
    }
}

macro_rules! deref_neighbors {
    ($($ref_kind:tt)*) => {
        impl<G> Neighbors for $($ref_kind)* G
        where
            G: Neighbors,
        {
            type NeighborRef<'a> = G::NeighborRef<'a>
            where
                Self: 'a;

            type NeighborsIter<'a> = G::NeighborsIter<'a>
            where
                Self: 'a;

            fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
                (**self).neighbors_undirected(from)
            }

            fn degree_undirected(&self, id: &Self::VertexId) -> usize {
                (**self).degree_undirected(id)
            }
        }
    }
}

deref_neighbors!(&);
deref_neighbors!(&mut);
