use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{common::IndexedGraph, core::id::IdType};

/// Shrinks a cycle to a chordless one.
///
/// As long as the cycle has a chord, it is replaced by the part of the cycle
/// spanned by the shortest chord (measured as the difference of positions in
/// the cycle), closed by the chord itself.
pub fn minimize<I: IdType>(graph: &IndexedGraph<I>, mut cycle: Vec<usize>) -> Vec<usize> {
    while let Some((i, j)) = shortest_chord(graph, &cycle) {
        debug!(len = cycle.len(), span = j - i, "contracting cycle along chord");

        cycle.truncate(j + 1);
        cycle.drain(..i);
    }

    debug_assert!(cycle.len() >= 4, "contracted cycle is too short");

    cycle
}

/// Returns positions `i < j` of the endpoints of the shortest chord. Ties are
/// broken by the smaller `i`.
fn shortest_chord<I: IdType>(graph: &IndexedGraph<I>, cycle: &[usize]) -> Option<(usize, usize)> {
    let len = cycle.len();
    let positions = cycle
        .iter()
        .enumerate()
        .map(|(i, &v)| (v, i))
        .collect::<FxHashMap<_, _>>();

    let mut shortest: Option<(usize, usize)> = None;

    for (i, &v) in cycle.iter().enumerate() {
        for w in graph.neighbors(v) {
            let j = match positions.get(w) {
                Some(&j) if j > i => j,
                _ => continue,
            };

            let span = j - i;

            if span == 1 || span == len - 1 {
                // Edge of the cycle.
                continue;
            }

            if shortest.map_or(true, |(si, sj)| span < sj - si) {
                shortest = Some((i, j));
            }
        }
    }

    shortest
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::infra::testing::{create_cycle, create_from_edges};

    #[test]
    fn chordless_unchanged() {
        let graph = IndexedGraph::new(&create_cycle(6)).unwrap();
        let cycle = vec![0, 1, 2, 3, 4, 5];

        assert_eq!(shortest_chord(&graph, &cycle), None);
        assert_eq!(minimize(&graph, cycle.clone()), cycle);
    }

    #[test]
    fn single_chord() {
        // Cycle 0..8 with chord {1, 5}.
        let mut edges = (0..8).map(|v| (v, (v + 1) % 8)).collect::<Vec<_>>();
        edges.push((1, 5));
        let graph = IndexedGraph::new(&create_from_edges(8, &edges)).unwrap();

        let cycle = (0..8).collect::<Vec<_>>();

        assert_eq!(shortest_chord(&graph, &cycle), Some((1, 5)));
        assert_eq!(minimize(&graph, cycle), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn shortest_chord_wins() {
        // Cycle 0..10 with chords {0, 6} and {6, 9}.
        let mut edges = (0..10).map(|v| (v, (v + 1) % 10)).collect::<Vec<_>>();
        edges.push((0, 6));
        edges.push((6, 9));
        let graph = IndexedGraph::new(&create_from_edges(10, &edges)).unwrap();

        let cycle = (0..10).collect::<Vec<_>>();

        assert_eq!(shortest_chord(&graph, &cycle), Some((6, 9)));
        assert_eq!(minimize(&graph, cycle), vec![6, 7, 8, 9]);
    }

    #[test]
    fn cycle_order_differs_from_ids() {
        // The cycle 3 - 0 - 4 - 1 - 5 - 2 with chord {0, 5}.
        let graph = create_from_edges(6, &[(3, 0), (0, 4), (4, 1), (1, 5), (5, 2), (2, 3), (0, 5)]);
        let graph = IndexedGraph::new(&graph).unwrap();

        let cycle = vec![3, 0, 4, 1, 5, 2];

        assert_eq!(minimize(&graph, cycle), vec![0, 4, 1, 5]);
    }
}
