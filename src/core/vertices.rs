use super::{base::GraphBase, id::CompactIdMap};

/// A finite set of vertices of a graph.
pub trait VertexSet: GraphBase {
    type VertexIdsIter<'a>: Iterator<Item = Self::VertexId>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_>;

    fn vertex_count(&self) -> usize {
        self.vertex_ids().count()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertex_ids().any(|v| &v == id)
    }

    fn vertex_id_map(&self) -> CompactIdMap<Self::VertexId> {
        // Should be overridden to use `isomorphic` whenever possible.
        CompactIdMap::new(self.vertex_ids())
    }
}

macro_rules! deref_vertex_set {
    ($($ref_kind:tt)*) => {
        impl<G> VertexSet for $($ref_kind)* G
        where
            G: VertexSet,
        {
            type VertexIdsIter<'a> = G::VertexIdsIter<'a>
            where
                Self: 'a;

            fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
                (**self).vertex_ids()
            }

            fn vertex_count(&self) -> usize {
                (**self).vertex_count()
            }

            fn contains_vertex(&self, id: &Self::VertexId) -> bool {
                (**self).contains_vertex(id)
            }

            fn vertex_id_map(&self) -> CompactIdMap<Self::VertexId> {
                (**self).vertex_id_map()
            }
        }
    };
}

deref_vertex_set!(&);
deref_vertex_set!(&mut);
