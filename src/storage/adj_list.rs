use std::{marker::PhantomData, ops::Range};

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::{CompactIdMap, DefaultId, IdPair, IdType, IntegerIdType},
    EdgeSet, GraphBase, IntoEdge, NeighborRef, Neighbors, VertexSet,
};

/// Undirected graph represented as an [adjacency list].
///
/// Every vertex holds the list of IDs of the edges incident to it. The storage
/// is general and therefore accepts self-loops and parallel edges. Such
/// graphs are rejected by the hole detection algorithms.
///
/// [adjacency list]: https://en.wikipedia.org/wiki/Adjacency_list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjList<V, E, Id: IdPair = DefaultId> {
    vertices: Vec<Vertex<Id, V>>,
    edges: Vec<E>,
    endpoints: Vec<[Id::VertexId; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex<Id: IdPair, V> {
    data: V,
    edges: Vec<Id::EdgeId>,
}

impl<V, E, Id: IdPair> AdjList<V, E, Id> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            edges: Vec::with_capacity(edge_count),
            endpoints: Vec::with_capacity(edge_count),
        }
    }
}

impl<V, E, Id: IdPair> AdjList<V, E, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    pub fn add_vertex(&mut self, vertex: V) -> Id::VertexId {
        let id = Id::VertexId::from_usize(self.vertices.len());
        self.vertices.push(Vertex {
            data: vertex,
            edges: Vec::new(),
        });
        id
    }

    pub fn try_add_edge(
        &mut self,
        src: &Id::VertexId,
        dst: &Id::VertexId,
        edge: E,
    ) -> Result<Id::EdgeId, AddEdgeError<E>> {
        if src.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::SourceAbsent));
        }

        if dst.as_usize() >= self.vertices.len() {
            return Err(AddEdgeError::new(edge, AddEdgeErrorKind::DestinationAbsent));
        }

        let id = Id::EdgeId::from_usize(self.edges.len());
        self.edges.push(edge);
        self.endpoints.push([*src, *dst]);

        self.vertices[src.as_usize()].edges.push(id);

        // A self-loop is recorded only once in the edge list of its vertex.
        if src != dst {
            self.vertices[dst.as_usize()].edges.push(id);
        }

        Ok(id)
    }

    /// Adds an edge between two existing vertices.
    ///
    /// # Panics
    ///
    /// Panics if any of the vertices does not exist.
    pub fn add_edge(&mut self, src: &Id::VertexId, dst: &Id::VertexId, edge: E) -> Id::EdgeId {
        match self.try_add_edge(src, dst, edge) {
            Ok(id) => id,
            Err(error) => panic!("{error}"),
        }
    }

    /// Adds all edges from the iterator, creating default vertices for
    /// endpoints that are not in the graph yet.
    pub fn extend_with_edges<T, I>(&mut self, iter: I)
    where
        V: Default,
        T: IntoEdge<Id, E>,
        I: IntoIterator<Item = T>,
    {
        for edge in iter {
            let (src, dst, edge) = edge.unpack();
            let bound = src.as_usize().max(dst.as_usize());

            while self.vertices.len() <= bound {
                self.add_vertex(V::default());
            }

            self.add_edge(&src, &dst, edge);
        }
    }

    pub fn vertex(&self, id: &Id::VertexId) -> Option<&V> {
        self.vertices.get(id.as_usize()).map(|vertex| &vertex.data)
    }

    pub fn edge(&self, id: &Id::EdgeId) -> Option<&E> {
        self.edges.get(id.as_usize())
    }
}

impl<V, E> Default for AdjList<V, E, DefaultId> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, Id: IdPair> GraphBase for AdjList<V, E, Id> {
    type VertexId = Id::VertexId;
    type EdgeId = Id::EdgeId;
}

impl<V, E, Id: IdPair> VertexSet for AdjList<V, E, Id>
where
    Id::VertexId: IntegerIdType,
{
    type VertexIdsIter<'a> = RangeIds<Self::VertexId>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        (0..self.vertices.len()).into()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        id.as_usize() < self.vertices.len()
    }

    fn vertex_id_map(&self) -> CompactIdMap<Self::VertexId> {
        CompactIdMap::isomorphic(self.vertex_count())
    }
}

impl<V, E, Id: IdPair> Neighbors for AdjList<V, E, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type NeighborRef<'a> = NeighborRef<Self::VertexId, Self::EdgeId>
    where
        Self: 'a;

    type NeighborsIter<'a> = NeighborsIter<'a, Id>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        let vertex = self
            .vertices
            .get(from.as_usize())
            .expect("vertex does not exist");

        NeighborsIter {
            src: *from,
            edges: vertex.edges.as_slice(),
            endpoints: self.endpoints.as_slice(),
        }
    }
}

impl<V, E, Id: IdPair> EdgeSet for AdjList<V, E, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type EdgeIdsIter<'a> = RangeIds<Self::EdgeId>
    where
        Self: 'a;

    type EdgeIdIter<'a> = EdgeIdIter<'a, Id>
    where
        Self: 'a;

    fn edge_ids(&self) -> Self::EdgeIdsIter<'_> {
        (0..self.edges.len()).into()
    }

    fn edge_id(&self, from: &Self::VertexId, to: &Self::VertexId) -> Self::EdgeIdIter<'_> {
        let edges = match self.vertices.get(from.as_usize()) {
            Some(vertex) => vertex.edges.as_slice(),
            None => &[],
        };

        EdgeIdIter {
            src: *from,
            dst: *to,
            edges,
            endpoints: self.endpoints.as_slice(),
        }
    }

    fn endpoints(&self, id: &Self::EdgeId) -> Option<(Self::VertexId, Self::VertexId)> {
        self.endpoints
            .get(id.as_usize())
            .map(|endpoints| (endpoints[0], endpoints[1]))
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

pub struct RangeIds<I> {
    range: Range<usize>,
    ty: PhantomData<fn() -> I>,
}

impl<I: IntegerIdType> Iterator for RangeIds<I> {
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(I::from_usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<I> From<Range<usize>> for RangeIds<I> {
    fn from(range: Range<usize>) -> Self {
        Self {
            range,
            ty: PhantomData,
        }
    }
}

pub struct NeighborsIter<'a, Id: IdPair> {
    src: Id::VertexId,
    edges: &'a [Id::EdgeId],
    endpoints: &'a [[Id::VertexId; 2]],
}

impl<Id: IdPair> Iterator for NeighborsIter<'_, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type Item = NeighborRef<Id::VertexId, Id::EdgeId>;

    fn next(&mut self) -> Option<Self::Item> {
        let (edge, tail) = self.edges.split_first()?;
        self.edges = tail;

        let endpoints = self.endpoints[edge.as_usize()];

        let neighbor = if endpoints[0] != self.src {
            endpoints[0]
        } else {
            endpoints[1]
        };

        Some(NeighborRef {
            id: neighbor,
            edge: *edge,
            pred: self.src,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.edges.len(), Some(self.edges.len()))
    }
}

pub struct EdgeIdIter<'a, Id: IdPair> {
    src: Id::VertexId,
    dst: Id::VertexId,
    edges: &'a [Id::EdgeId],
    endpoints: &'a [[Id::VertexId; 2]],
}

impl<Id: IdPair> Iterator for EdgeIdIter<'_, Id>
where
    Id::VertexId: IntegerIdType,
    Id::EdgeId: IntegerIdType,
{
    type Item = Id::EdgeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (edge, tail) = self.edges.split_first()?;
            self.edges = tail;

            let [a, b] = self.endpoints[edge.as_usize()];

            if (a == self.src && b == self.dst) || (a == self.dst && b == self.src) {
                return Some(*edge);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    use crate::core::{
        id::{CustomId, EdgeId, VertexId},
        NeighborReference,
    };

    fn neighbors_of<G>(graph: &G, id: G::VertexId) -> Vec<G::VertexId>
    where
        G: Neighbors,
    {
        let mut neighbors = graph
            .neighbors_undirected(&id)
            .map(|neighbor| neighbor.id().into_owned())
            .collect::<Vec<_>>();
        neighbors.sort();
        neighbors
    }

    #[test]
    fn basic() {
        let mut graph = AdjList::default();

        let v0 = graph.add_vertex("a");
        let v1 = graph.add_vertex("b");
        let v2 = graph.add_vertex("c");

        let e0 = graph.add_edge(&v0, &v1, 1);
        let e1 = graph.add_edge(&v2, &v1, 2);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.vertex(&v1), Some(&"b"));
        assert_eq!(graph.edge(&e1), Some(&2));

        assert_eq!(neighbors_of(&graph, v1), vec![v0, v2]);
        assert_eq!(graph.degree_undirected(&v1), 2);

        assert_eq!(graph.endpoints(&e0), Some((v0, v1)));
        assert_eq!(graph.edge_id_any(&v1, &v0), Some(e0));
        assert!(graph.contains_edge_between(&v1, &v2));
        assert!(!graph.contains_edge_between(&v0, &v2));

        assert!(graph.contains_vertex(&v2));
        assert!(!graph.contains_vertex(&VertexId(3)));
        assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec![v0, v1, v2]);
    }

    #[test]
    fn neighbor_reference() {
        let mut graph = AdjList::default();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());
        let e = graph.add_edge(&v0, &v1, ());

        let neighbor = graph.neighbors_undirected(&v1).next().unwrap();
        assert_eq!(*neighbor.id(), v0);
        assert_eq!(*neighbor.edge(), e);
        assert_eq!(*neighbor.pred(), v1);
    }

    #[test]
    fn self_loop_reported_once() {
        let mut graph = AdjList::default();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());

        graph.add_edge(&v0, &v0, ());
        graph.add_edge(&v0, &v1, ());

        assert_eq!(neighbors_of(&graph, v0), vec![v0, v1]);
        assert_eq!(graph.degree_undirected(&v0), 3);
        assert_eq!(graph.edge_id(&v0, &v0).count(), 1);
    }

    #[test]
    fn multi_edges() {
        let mut graph = AdjList::default();

        let v0 = graph.add_vertex(());
        let v1 = graph.add_vertex(());

        graph.add_edge(&v0, &v1, ());
        graph.add_edge(&v1, &v0, ());

        assert_eq!(neighbors_of(&graph, v0), vec![v1, v1]);
        assert_eq!(graph.edge_id(&v0, &v1).count(), 2);
    }

    #[test]
    fn try_add_edge_absent() {
        let mut graph = AdjList::<_, _>::new();

        let v0 = graph.add_vertex(());

        assert_matches!(
            graph.try_add_edge(&VertexId(3), &v0, 7),
            Err(AddEdgeError {
                attr: 7,
                kind: AddEdgeErrorKind::SourceAbsent
            })
        );
        assert_matches!(
            graph.try_add_edge(&v0, &VertexId(3), 7),
            Err(AddEdgeError {
                kind: AddEdgeErrorKind::DestinationAbsent,
                ..
            })
        );
    }

    #[test]
    #[should_panic(expected = "destination does not exist")]
    fn add_edge_absent() {
        let mut graph = AdjList::<(), ()>::new();

        let v0 = graph.add_vertex(());
        graph.add_edge(&v0, &VertexId(1), ());
    }

    #[test]
    fn extend_with_edges() {
        let mut graph = AdjList::<(), (), CustomId<VertexId<u8>, EdgeId<u8>>>::new();

        graph.extend_with_edges([(0usize, 1usize), (1, 4)]);

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(neighbors_of(&graph, VertexId(1)), vec![VertexId(0), VertexId(4)]);
        assert_eq!(graph.degree_undirected(&VertexId(3)), 0);
    }
}
