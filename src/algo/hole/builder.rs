use crate::{
    common::IndexedGraph,
    core::{GraphBase, Neighbors, VertexSet},
};

use super::{bounded, certificate, palios, Error, Hole, MIN_HOLE_LEN};

pub struct HoleBuilder<'a, G> {
    graph: &'a G,
    min_len: Option<usize>,
}

impl<G> Hole<G>
where
    G: GraphBase,
{
    pub fn on(graph: &G) -> HoleBuilder<'_, G> {
        HoleBuilder {
            graph,
            min_len: None,
        }
    }
}

impl<'a, G> HoleBuilder<'a, G>
where
    G: Neighbors + VertexSet,
{
    /// Restricts the search to holes with at least `min_len` vertices.
    ///
    /// The value must be at least four, otherwise the run fails with
    /// [`Error::LengthTooSmall`].
    pub fn min_len(self, min_len: usize) -> Self {
        Self {
            min_len: Some(min_len),
            ..self
        }
    }

    /// Finds a hole in the graph.
    ///
    /// Without [minimal length](HoleBuilder::min_len) specified, the returned
    /// hole is obtained by contracting the first cycle closed by the search.
    pub fn run(self) -> Result<Option<Hole<G>>, Error<G>> {
        let graph = self.index()?;

        let cycle = match self.min_len {
            Some(min_len) => bounded::search(&graph, min_len),
            None => palios::search(&graph).map(|cycle| certificate::minimize(&graph, cycle)),
        };

        Ok(cycle.map(|cycle| Hole::from_dense(&graph, cycle)))
    }

    /// Decides whether the graph contains a hole, without constructing it.
    pub fn detect(self) -> Result<bool, Error<G>> {
        let graph = self.index()?;

        let found = match self.min_len {
            Some(min_len) => bounded::search(&graph, min_len).is_some(),
            None => palios::search(&graph).is_some(),
        };

        Ok(found)
    }

    fn index(&self) -> Result<IndexedGraph<G::VertexId>, Error<G>> {
        match self.min_len {
            Some(min_len) if min_len < MIN_HOLE_LEN => Err(Error::LengthTooSmall(min_len)),
            _ => Ok(IndexedGraph::new(self.graph)?),
        }
    }
}
