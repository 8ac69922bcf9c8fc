use std::{iter, ops::Range};

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::{common::IndexedGraph, core::id::IdType};

use super::path::ActivePath;

/// Searches for a hole with at least `min_len` vertices.
///
/// Induced paths are grown from every root by vertices adjacent to the tail
/// and to no other vertex of the path. Whether a vertex is such is decided by
/// the number of path vertices adjacent to it (its occupancy). A path is
/// closed into a hole by a vertex whose only path neighbors are the tail and
/// the root.
///
/// Every hole of length at least `min_len` contains an induced path of
/// `min_len - 2` vertices (a scaffold) from which the search closes it. A
/// scaffold is processed only once even if it is reached again, e.g. from its
/// other endpoint.
///
/// Returns the dense vertices of the hole in cycle order.
pub fn search<I: IdType>(graph: &IndexedGraph<I>, min_len: usize) -> Option<Vec<usize>> {
    debug_assert!(min_len >= 4, "holes have at least four vertices");

    let n = graph.vertex_count();

    if n < min_len {
        return None;
    }

    let mut search = Search {
        graph,
        path: ActivePath::new(n),
        occupancy: vec![0; n],
        arcs: Vec::new(),
        scaffolds: FxHashSet::default(),
        scaffold_len: min_len - 2,
    };

    for root in 0..n {
        if graph.degree(root) < 2 {
            continue;
        }

        trace!(root, "starting bounded search from root");

        if let Some(hole) = search.run(root, min_len) {
            debug!(len = hole.len(), min_len, "found hole");
            return Some(hole);
        }
    }

    None
}

struct Search<'a, I> {
    graph: &'a IndexedGraph<I>,
    path: ActivePath,
    // Number of path vertices adjacent to a vertex.
    occupancy: Vec<usize>,
    // Arcs leaving the path vertices that are yet to be tried.
    arcs: Vec<Range<usize>>,
    scaffolds: FxHashSet<Box<[usize]>>,
    scaffold_len: usize,
}

impl<I: IdType> Search<'_, I> {
    fn run(&mut self, root: usize, min_len: usize) -> Option<Vec<usize>> {
        self.push(root);

        loop {
            let arc = match self.arcs.last_mut() {
                Some(arcs) => arcs.next(),
                None => return None,
            };

            let w = match arc {
                Some(arc) => self.graph.head(arc),
                None => {
                    self.pop();
                    continue;
                }
            };

            if self.path.contains(w) {
                continue;
            }

            match self.occupancy[w] {
                1 => {
                    if self.path.len() + 1 == self.scaffold_len && !self.insert_scaffold(w) {
                        continue;
                    }

                    self.push(w);
                }
                2 if self.path.len() + 1 >= min_len && self.graph.is_adjacent(w, root) => {
                    let hole = self.path.as_slice().iter().copied().chain(iter::once(w));
                    return Some(hole.collect());
                }
                _ => {}
            }
        }
    }

    fn push(&mut self, v: usize) {
        self.path.push(v);

        for &w in self.graph.neighbors(v) {
            self.occupancy[w] += 1;
        }

        self.arcs.push(self.graph.arcs(v));
    }

    fn pop(&mut self) {
        self.arcs.pop();

        if let Some(v) = self.path.pop() {
            for &w in self.graph.neighbors(v) {
                self.occupancy[w] -= 1;
            }
        }
    }

    /// Records the scaffold formed by the path extended by `w`. Returns
    /// `false` if the same scaffold, possibly reversed, was seen before.
    fn insert_scaffold(&mut self, w: usize) -> bool {
        let forward = self
            .path
            .as_slice()
            .iter()
            .copied()
            .chain(iter::once(w))
            .collect::<Vec<_>>();
        let backward = forward.iter().rev().copied().collect::<Vec<_>>();

        let canonical = forward.min(backward);
        let inserted = self.scaffolds.insert(canonical.into_boxed_slice());

        if inserted {
            trace!(tail = ?self.path.tail(), next = w, "new scaffold");
        }

        inserted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infra::testing::{create_complete, create_cycle, create_from_edges, TestGraph};

    fn hole_at_least(graph: &TestGraph, min_len: usize) -> Option<Vec<usize>> {
        search(&IndexedGraph::new(graph).unwrap(), min_len)
    }

    fn sorted(mut vertices: Vec<usize>) -> Vec<usize> {
        vertices.sort_unstable();
        vertices
    }

    #[test]
    fn cycle_lengths() {
        let graph = create_cycle(7);

        assert_eq!(hole_at_least(&graph, 4).map(sorted), Some((0..7).collect()));
        assert_eq!(hole_at_least(&graph, 7).map(sorted), Some((0..7).collect()));
        assert_eq!(hole_at_least(&graph, 8), None);
    }

    #[test]
    fn chorded_cycle() {
        let mut edges = (0..7).map(|v| (v, (v + 1) % 7)).collect::<Vec<_>>();
        edges.push((1, 6));
        let graph = create_from_edges(7, &edges);

        assert_eq!(hole_at_least(&graph, 7), None);
        assert_eq!(hole_at_least(&graph, 6).map(sorted), Some(vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(hole_at_least(&graph, 4).map(sorted), Some(vec![1, 2, 3, 4, 5, 6]));
    }

    #[test]
    fn fewer_vertices_than_bound() {
        assert_eq!(hole_at_least(&create_cycle(5), 6), None);
    }

    #[test]
    fn no_holes_in_clique() {
        assert_eq!(hole_at_least(&create_complete(6), 4), None);
    }

    #[test]
    fn occupancy_restored() {
        let graph = IndexedGraph::new(&create_complete(4)).unwrap();

        let mut search = Search {
            graph: &graph,
            path: ActivePath::new(4),
            occupancy: vec![0; 4],
            arcs: Vec::new(),
            scaffolds: FxHashSet::default(),
            scaffold_len: 2,
        };

        assert_eq!(search.run(0, 4), None);
        assert!(search.occupancy.iter().all(|&count| count == 0));
        assert_eq!(search.path.len(), 0);
    }
}
