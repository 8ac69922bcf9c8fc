use arbitrary::{Arbitrary, Result, Unstructured};

use crate::{
    core::id::{DefaultId, IdType, VertexId},
    storage::AdjList,
};

/// Position into a collection of yet unknown size.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

// Fuzzing is most effective on small graphs, where the search explores many
// different paths.
const MAX_VERTICES: usize = 32;

/// Generates graphs that may contain self-loops and parallel edges, so that
/// the rejection of such inputs is exercised too.
impl<'a, V, E> Arbitrary<'a> for AdjList<V, E, DefaultId>
where
    V: Arbitrary<'a>,
    E: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let vertex_count = u.int_in_range(0..=MAX_VERTICES)?;
        let mut graph = AdjList::with_capacity(vertex_count, 0);

        for _ in 0..vertex_count {
            graph.add_vertex(V::arbitrary(u)?);
        }

        let edges = u.arbitrary_iter::<(Index, Index, E)>()?;

        for edge in edges {
            let (src, dst, attr) = edge?;

            if let (Some(src), Some(dst)) = (src.get(vertex_count), dst.get(vertex_count)) {
                graph.add_edge(&VertexId::from_usize(src), &VertexId::from_usize(dst), attr);
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{EdgeSet, VertexSet};

    use super::*;

    #[test]
    fn edges_within_bounds() {
        let data = (0..=255u8).cycle().take(1024).collect::<Vec<_>>();
        let mut u = Unstructured::new(&data);

        let graph = AdjList::<(), ()>::arbitrary(&mut u).unwrap();

        for e in graph.edge_ids() {
            let (src, dst) = graph.endpoints(&e).unwrap();
            assert!(graph.contains_vertex(&src));
            assert!(graph.contains_vertex(&dst));
        }
    }

    #[test]
    fn no_data_no_vertices() {
        let mut u = Unstructured::new(&[]);
        let graph = AdjList::<(), ()>::arbitrary(&mut u).unwrap();

        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
