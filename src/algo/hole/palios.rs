use std::ops::Range;

use tracing::trace;

use crate::{
    common::{BitMatrix, IndexedGraph},
    core::id::IdType,
};

use super::path::ActivePath;

/// Extension step `a -> b -> c` in progress, with the cursor over the arcs
/// leaving `c` that are yet to be tried.
struct Frame {
    a: usize,
    b: usize,
    // Arc b -> c.
    bc: usize,
    arcs: Range<usize>,
}

/// Searches for a cycle whose closing proves that the graph has a hole.
///
/// Holes with four vertices are found first by `find_square`. Then every
/// induced path on three vertices `u - v - w` is extended in depth-first
/// manner, always checking only that the newly added vertex is not adjacent to
/// the two vertices preceding its predecessor. Once the tail of the path is
/// adjacent to a vertex already on the path (and that vertex is not adjacent to
/// the last two vertices), the path segment between them is a cycle of length
/// at least five which contains a hole.
///
/// Extensions `(a -> b, c)` that were already tried from the current root are
/// not explored again, which bounds the work per root by the number of arcs
/// times the number of vertices.
///
/// Returns the dense vertices of the closed cycle in path order. The cycle is
/// not necessarily chordless.
pub fn search<I: IdType>(graph: &IndexedGraph<I>) -> Option<Vec<usize>> {
    if let Some(square) = find_square(graph) {
        return Some(square);
    }

    let n = graph.vertex_count();

    let mut search = Search {
        graph,
        visited: BitMatrix::new(graph.arc_count(), n),
        path: ActivePath::new(n),
        frames: Vec::new(),
    };

    for u in 0..n {
        if graph.degree(u) < 2 {
            continue;
        }

        search.visited.clear();
        search.path.push(u);

        trace!(root = u, "starting search from root");

        for uv in graph.arcs(u) {
            let v = graph.head(uv);

            for vw in graph.arcs(v) {
                let w = graph.head(vw);

                if w == u || graph.is_adjacent(u, w) || search.visited.contains(uv, w) {
                    continue;
                }

                search.path.push(v);

                if let Some(cycle) = search.extend(uv, vw) {
                    return Some(cycle);
                }

                search.path.pop();
            }
        }

        search.path.pop();
    }

    None
}

/// Searches for a hole with four vertices, i.e., two non-adjacent vertices
/// with two non-adjacent common neighbors.
///
/// The closing step of the path extension never reports such holes, because
/// the vertex closing a four-vertex cycle is adjacent to the first vertex of
/// the extension step.
fn find_square<I: IdType>(graph: &IndexedGraph<I>) -> Option<Vec<usize>> {
    let n = graph.vertex_count();

    // Common neighbors of the current root and a vertex, found so far.
    let mut common = vec![Vec::new(); n];
    let mut touched = Vec::new();

    for u in 0..n {
        if graph.degree(u) < 2 {
            continue;
        }

        for &v in graph.neighbors(u) {
            for &w in graph.neighbors(v) {
                if w <= u || graph.is_adjacent(u, w) {
                    continue;
                }

                let opposite = common[w]
                    .iter()
                    .copied()
                    .find(|&x| !graph.is_adjacent(x, v));

                if let Some(x) = opposite {
                    trace!(u, x, w, v, "found square");
                    return Some(vec![u, x, w, v]);
                }

                if common[w].is_empty() {
                    touched.push(w);
                }

                common[w].push(v);
            }
        }

        for w in touched.drain(..) {
            common[w].clear();
        }
    }

    None
}

struct Search<'a, I> {
    graph: &'a IndexedGraph<I>,
    // Rows are arcs, columns are vertices.
    visited: BitMatrix,
    path: ActivePath,
    frames: Vec<Frame>,
}

impl<I: IdType> Search<'_, I> {
    fn extend(&mut self, ab: usize, bc: usize) -> Option<Vec<usize>> {
        self.enter(ab, bc);

        loop {
            let frame = self.frames.last_mut()?;

            let cd = match frame.arcs.next() {
                Some(cd) => cd,
                None => {
                    self.frames.pop();
                    self.path.pop();
                    continue;
                }
            };

            let (a, b, bc) = (frame.a, frame.b, frame.bc);
            let d = self.graph.head(cd);

            if self.graph.is_adjacent(d, a) || self.graph.is_adjacent(d, b) {
                continue;
            }

            if self.path.contains(d) {
                let cycle = self.path.suffix_from(d).to_vec();
                trace!(closing = d, len = cycle.len(), "path closed into a cycle");

                self.frames.clear();
                return Some(cycle);
            }

            if !self.visited.contains(bc, d) {
                self.enter(bc, cd);
            }
        }
    }

    fn enter(&mut self, ab: usize, bc: usize) {
        let graph = self.graph;

        let a = graph.head(graph.reverse(ab));
        let b = graph.head(ab);
        let c = graph.head(bc);

        trace!(a, b, c, "extending path");

        self.path.push(c);
        self.visited.insert(ab, c);
        self.visited.insert(graph.reverse(bc), a);

        self.frames.push(Frame {
            a,
            b,
            bc,
            arcs: graph.arcs(c),
        });
    }
}
