//! Find a [hole] in an undirected graph, i.e., an induced cycle of length at
//! least four.
//!
//! See available parameters [here](HoleBuilder#implementations).
//!
//! A graph without holes is called [chordal]. The detection is based on the
//! algorithm by Nikolopoulos and Palios, which runs in _O(|V| · |E|²)_ time in
//! the worst case. The search for holes of a given minimal length explores
//! induced paths exhaustively and can be exponential in the worst case.
//!
//! The graph must be [simple]: the algorithms fail with [`Error::SelfLoop`] or
//! [`Error::MultiEdge`] otherwise.
//!
//! [hole]: https://en.wikipedia.org/wiki/Hole_(graph_theory)
//! [chordal]: https://en.wikipedia.org/wiki/Chordal_graph
//! [simple]: https://en.wikipedia.org/wiki/Graph_(discrete_mathematics)#Simple_graph
//!
//! # Examples
//!
//! ```
//! use holes::{
//!     algo::{has_hole, Hole},
//!     core::id::VertexId,
//!     storage::AdjList,
//! };
//!
//! let mut graph = AdjList::<(), ()>::default();
//!
//! // Square 0 - 1 - 2 - 3 with a pendant vertex 4.
//! graph.extend_with_edges([(0usize, 1usize), (1, 2), (2, 3), (3, 0), (3, 4)]);
//!
//! let hole = Hole::on(&graph).run().unwrap().unwrap();
//! assert_eq!(hole.len(), 4);
//! assert!(!hole.contains(&VertexId(4)));
//!
//! // Holes with at least five vertices.
//! assert!(Hole::on(&graph).min_len(5).run().unwrap().is_none());
//!
//! // A chord splits the square into two triangles.
//! graph.add_edge(&VertexId(0), &VertexId(2), ());
//! assert!(!has_hole(&graph).unwrap());
//! ```

use std::{fmt, slice};

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    common::IndexedGraph,
    core::{error::NotSimpleError, GraphBase, NeighborReference, Neighbors, VertexSet},
};

mod bounded;
mod builder;
mod certificate;
mod palios;
mod path;

pub use builder::HoleBuilder;

/// The smallest number of vertices of a hole.
pub const MIN_HOLE_LEN: usize = 4;

/// Hole in a graph, represented by its vertices in cycle order.
///
/// Consecutive vertices, as well as the last and the first vertex, are
/// adjacent in the graph. No other pair of the vertices is.
///
/// See [module](self) documentation for more details and example.
pub struct Hole<G: GraphBase> {
    vertices: Vec<G::VertexId>,
}

impl<G> fmt::Debug for Hole<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hole").field(&self.vertices).finish()
    }
}

impl<G> Clone for Hole<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
        }
    }
}

impl<G> PartialEq for Hole<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl<G> Eq for Hole<G> where G: GraphBase {}

impl<G: GraphBase> Hole<G> {
    fn from_dense(graph: &IndexedGraph<G::VertexId>, cycle: Vec<usize>) -> Self {
        Self {
            vertices: cycle.into_iter().map(|v| graph.id(v)).collect(),
        }
    }

    /// Vertices of the hole in cycle order.
    pub fn vertices(&self) -> &[G::VertexId] {
        &self.vertices
    }

    /// Number of vertices, which is the same as the number of edges.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, G::VertexId> {
        self.vertices.iter()
    }

    /// Edges of the hole as pairs of consecutive vertices, including the pair
    /// of the last and the first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (&G::VertexId, &G::VertexId)> + '_ {
        self.vertices
            .iter()
            .zip(self.vertices.iter().cycle().skip(1))
    }

    pub fn contains(&self, id: &G::VertexId) -> bool {
        self.vertices.contains(id)
    }

    pub fn into_vec(self) -> Vec<G::VertexId> {
        self.vertices
    }
}

impl<'a, G: GraphBase> IntoIterator for &'a Hole<G> {
    type Item = &'a G::VertexId;
    type IntoIter = slice::Iter<'a, G::VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The error encountered during a [`Hole`] run.
#[derive(Error)]
pub enum Error<G>
where
    G: GraphBase,
{
    /// The graph contains an edge connecting a vertex with itself.
    #[error("vertex {0:?} has a self-loop")]
    SelfLoop(G::VertexId),

    /// The graph contains more than one edge between two vertices.
    #[error("vertices {0:?} and {1:?} are connected by more than one edge")]
    MultiEdge(G::VertexId, G::VertexId),

    /// The requested minimal length of a hole is less than four.
    #[error("minimal hole length must be at least 4, got {0}")]
    LengthTooSmall(usize),
}

impl<G> fmt::Debug for Error<G>
where
    G: GraphBase,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop(v) => f.debug_tuple("SelfLoop").field(v).finish(),
            Self::MultiEdge(u, v) => f.debug_tuple("MultiEdge").field(u).field(v).finish(),
            Self::LengthTooSmall(len) => f.debug_tuple("LengthTooSmall").field(len).finish(),
        }
    }
}

impl<G> Clone for Error<G>
where
    G: GraphBase,
{
    fn clone(&self) -> Self {
        match self {
            Self::SelfLoop(v) => Self::SelfLoop(v.clone()),
            Self::MultiEdge(u, v) => Self::MultiEdge(u.clone(), v.clone()),
            Self::LengthTooSmall(len) => Self::LengthTooSmall(*len),
        }
    }
}

impl<G> PartialEq for Error<G>
where
    G: GraphBase,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SelfLoop(lhs), Self::SelfLoop(rhs)) => lhs == rhs,
            (Self::MultiEdge(lu, lv), Self::MultiEdge(ru, rv)) => lu == ru && lv == rv,
            (Self::LengthTooSmall(lhs), Self::LengthTooSmall(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl<G> Eq for Error<G> where G: GraphBase {}

impl<G> From<NotSimpleError<G::VertexId>> for Error<G>
where
    G: GraphBase,
{
    fn from(error: NotSimpleError<G::VertexId>) -> Self {
        match error {
            NotSimpleError::SelfLoop(v) => Self::SelfLoop(v),
            NotSimpleError::MultiEdge(u, v) => Self::MultiEdge(u, v),
        }
    }
}

/// Returns `true` if the graph contains a hole.
pub fn has_hole<G>(graph: &G) -> Result<bool, Error<G>>
where
    G: Neighbors + VertexSet,
{
    Hole::on(graph).detect()
}

/// Returns a hole in the graph, if there is any.
pub fn find_hole<G>(graph: &G) -> Result<Option<Hole<G>>, Error<G>>
where
    G: Neighbors + VertexSet,
{
    Hole::on(graph).run()
}

/// Returns `true` if the graph contains a hole with at least `min_len`
/// vertices.
pub fn has_hole_at_least<G>(graph: &G, min_len: usize) -> Result<bool, Error<G>>
where
    G: Neighbors + VertexSet,
{
    Hole::on(graph).min_len(min_len).detect()
}

/// Returns a hole with at least `min_len` vertices, if there is any.
pub fn find_hole_at_least<G>(graph: &G, min_len: usize) -> Result<Option<Hole<G>>, Error<G>>
where
    G: Neighbors + VertexSet,
{
    Hole::on(graph).min_len(min_len).run()
}

/// Returns `true` if the sequence of vertices forms a hole in the graph.
///
/// The sequence is interpreted as a cycle, so the last vertex must be adjacent
/// to the first one. Vertices that are not in the graph make the sequence
/// invalid.
pub fn is_hole<G>(graph: &G, cycle: &[G::VertexId]) -> bool
where
    G: Neighbors + VertexSet,
{
    let len = cycle.len();

    if len < MIN_HOLE_LEN {
        return false;
    }

    let positions = cycle
        .iter()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect::<FxHashMap<_, _>>();

    if positions.len() != len {
        // A vertex is repeated.
        return false;
    }

    cycle.iter().enumerate().all(|(i, v)| {
        if !graph.contains_vertex(v) {
            return false;
        }

        let prev = (i + len - 1) % len;
        let next = (i + 1) % len;
        let (mut has_prev, mut has_next) = (false, false);

        for neighbor in graph.neighbors_undirected(v) {
            match positions.get::<G::VertexId>(neighbor.id().as_ref()) {
                None => {}
                Some(&j) if j == prev && !has_prev => has_prev = true,
                Some(&j) if j == next && !has_next => has_next = true,
                // A chord, a self-loop or a parallel edge.
                Some(_) => return false,
            }
        }

        has_prev && has_next
    })
}
