use super::base::GraphBase;

/// A finite set of undirected edges of a graph.
pub trait EdgeSet: GraphBase {
    type EdgeIdsIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    type EdgeIdIter<'a>: Iterator<Item = Self::EdgeId>
    where
        Self: 'a;

    fn edge_ids(&self) -> Self::EdgeIdsIter<'_>;

    /// Returns the IDs of all edges connecting the two vertices, regardless
    /// of their order.
    fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_>;

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)>;

    fn edge_count(&self) -> usize {
        self.edge_ids().count()
    }

    fn contains_edge(&self, id: &Self::EdgeId) -> bool {
        self.endpoints(id).is_some()
    }

    fn edge_id_any(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<Self::EdgeId> {
        self.edge_id(from, to).next()
    }

    fn contains_edge_between(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
        self.edge_id_any(from, to).is_some()
    }
}

macro_rules! deref_edge_set {
    ($($ref_kind:tt)*) => {
        impl<G> EdgeSet for $($ref_kind)* G
        where
            G: EdgeSet,
        {
            type EdgeIdsIter<'a> = G::EdgeIdsIter<'a>
            where
                Self: 'a;

            type EdgeIdIter<'a> = G::EdgeIdIter<'a>
            where
                Self: 'a;

            fn edge_ids(&self) -> Self::EdgeIdsIter<'_> {
                (**self).edge_ids()
            }

            fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_> {
                (**self).edge_id(from, to)
            }

            fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
                (**self).endpoints(id)
            }

            fn edge_count(&self) -> usize {
                (**self).edge_count()
            }

            fn contains_edge(&self, id: &Self::EdgeId) -> bool {
                (**self).contains_edge(id)
            }

            fn edge_id_any(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<Self::EdgeId> {
                (**self).edge_id_any(from, to)
            }

            fn contains_edge_between(&self, from: &Self::VertexId, to: &Self::VertexId) -> bool {
                (**self).contains_edge_between(from, to)
            }
        }
    };
}

deref_edge_set!(&);
deref_edge_set!(&mut);
