use super::{
    borrow::OwnableRef,
    id::{IdPair, IdType},
};

/// Base of all graph traits. Specifies the types used for identifying vertices
/// and edges.
pub trait GraphBase {
    type VertexId: IdType;
    type EdgeId: IdType;
}

/// A neighbor of a vertex, as reported by [`Neighbors`](super::Neighbors).
pub struct NeighborRef<VI: IdType, EI: IdType> {
    /// The neighboring vertex.
    pub id: VI,
    /// The edge connecting the neighbor with its predecessor.
    pub edge: EI,
    /// The vertex whose neighbors are being iterated.
    pub pred: VI,
}

pub trait NeighborReference<VI: IdType, EI: IdType> {
    fn id(&self) -> OwnableRef<'_, VI>;
    fn edge(&self) -> OwnableRef<'_, EI>;
    fn pred(&self) -> OwnableRef<'_, VI>;
}

pub trait IntoEdge<Id: IdPair, E> {
    fn unpack(self) -> (Id::VertexId, Id::VertexId, E);
}

mod imp {
    use super::*;

    impl<VI: IdType, EI: IdType> NeighborReference<VI, EI> for NeighborRef<VI, EI> {
        fn id(&self) -> OwnableRef<'_, VI> {
            OwnableRef::Borrowed(&self.id)
        }

        fn edge(&self) -> OwnableRef<'_, EI> {
            OwnableRef::Borrowed(&self.edge)
        }

        fn pred(&self) -> OwnableRef<'_, VI> {
            OwnableRef::Borrowed(&self.pred)
        }
    }

    impl<Id: IdPair, E, I: Into<Id::VertexId>> IntoEdge<Id, E> for (I, I, E) {
        fn unpack(self) -> (Id::VertexId, Id::VertexId, E) {
            (self.0.into(), self.1.into(), self.2)
        }
    }

    impl<Id: IdPair, E: Default, I: Into<Id::VertexId>> IntoEdge<Id, E> for (I, I) {
        fn unpack(self) -> (Id::VertexId, Id::VertexId, E) {
            (self.0.into(), self.1.into(), E::default())
        }
    }

    impl<Id: IdPair, E: Default, I: Into<Id::VertexId> + Clone> IntoEdge<Id, E> for &(I, I) {
        fn unpack(self) -> (Id::VertexId, Id::VertexId, E) {
            (self.0.clone().into(), self.1.clone().into(), E::default())
        }
    }
}

macro_rules! deref_graph_base {
    ($($ref_kind:tt)*) => {
        impl<G> GraphBase for $($ref_kind)* G
        where
            G: GraphBase,
        {
            type VertexId = G::VertexId;
            type EdgeId = G::EdgeId;
        }
    }
}

deref_graph_base!(&);
deref_graph_base!(&mut);
