use std::{collections::BTreeMap, fmt};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{core::id::DefaultId, storage::AdjList};

pub fn graph_undirected<V: Strategy, E: Strategy>(vertex: V, edge: E) -> GraphStrategy<V, E> {
    GraphStrategy::new(vertex, edge)
}

pub struct GraphStrategy<V: Strategy, E: Strategy> {
    vertex: V,
    edge: E,
    params: StrategyParams,
}

impl<V: Strategy, E: Strategy> fmt::Debug for GraphStrategy<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("vertex", &self.vertex)
            .field("edge", &self.edge)
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<V: Strategy, E: Strategy> GraphStrategy<V, E> {
    pub fn new(vertex: V, edge: E) -> Self {
        Self::with_params(vertex, edge, StrategyParams::default())
    }

    pub fn with_params(vertex: V, edge: E, params: StrategyParams) -> Self {
        Self {
            vertex,
            edge,
            params,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_undirected(any::<()>(), any::<()>()).max_size(12).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(allow_loops);
    delegate_builder_fn!(multi_edge_prob, multi_edge_prob: f32);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    allow_loops: bool,
    multi_edge_prob: f32,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            // Hole detection results are checked against exhaustive search in
            // tests, so the graphs are small by default.
            max_size: 12,
            allow_loops: false,
            multi_edge_prob: 0.0,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn allow_loops(self) -> Self {
        Self {
            allow_loops: true,
            ..self
        }
    }

    pub fn multi_edge_prob(self, multi_edge_prob: f32) -> Self {
        assert!(
            (0.0..=0.1).contains(&multi_edge_prob),
            "multi edge probability must be in [0, 0.1] range"
        );
        Self {
            multi_edge_prob,
            ..self
        }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.2)
    }
}

impl<V: Strategy, E: Strategy> Strategy for GraphStrategy<V, E> {
    type Tree = GraphValueTree<V::Tree, E::Tree>;
    type Value = AdjList<V::Value, E::Value, DefaultId>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f32>() * self.params.density;

        // Efficient generation of large random networks
        // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf

        let mut vertices = Vec::with_capacity(n);

        while vertices.len() < n {
            vertices.push(self.vertex.new_tree(runner)?);
        }

        let mut edges = Vec::new();

        let mut v = 1;
        let mut w = usize::MAX; // -1

        while v < n {
            let r: f32 = runner.rng().gen();
            w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

            if self.params.allow_loops {
                // Using `w > v` instead of `w >= v` to allow loops.
                while w > v && v < n {
                    w -= v;
                    v += 1;
                }
            } else {
                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }
            }

            if v < n {
                let (s, t) = if runner.rng().gen_bool(0.5) {
                    (w, v)
                } else {
                    (v, w)
                };

                edges.push((s, t, self.edge.new_tree(runner)?));

                while runner.rng().gen_bool(self.params.multi_edge_prob as f64) {
                    edges.push((s, t, self.edge.new_tree(runner)?));
                }
            }
        }

        Ok(GraphValueTree {
            vertices,
            edges,
            shrink: None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct GraphValueTree<V: ValueTree, E: ValueTree> {
    vertices: Vec<V>,
    edges: Vec<(usize, usize, E)>,
    shrink: Option<ShrinkState>,
}

impl<V: ValueTree, E: ValueTree> ValueTree for GraphValueTree<V, E> {
    type Value = AdjList<V::Value, E::Value, DefaultId>;

    fn current(&self) -> Self::Value {
        let empty = Removed::default();
        let removed = match self.shrink {
            Some(ref state) => &state.current,
            None => &empty,
        };

        let mut graph = AdjList::with_capacity(
            self.vertices.len() - removed.vertices.len(),
            self.edges.len() - removed.edges.len(),
        );
        let mut ids = Vec::with_capacity(self.vertices.len());

        for (v, vertex) in self.vertices.iter().enumerate() {
            if removed.vertices.contains(&v) {
                ids.push(None);
            } else {
                ids.push(Some(graph.add_vertex(vertex.current())));
            }
        }

        for (e, (src, dst, edge)) in self.edges.iter().enumerate() {
            if let (false, Some(src), Some(dst)) = (removed.edges.contains(&e), ids[*src], ids[*dst])
            {
                graph.add_edge(&src, &dst, edge.current());
            }
        }

        graph
    }

    fn simplify(&mut self) -> bool {
        // Only the structure is simplified. Vertices with the lowest degree
        // are removed first in bulk, then single vertices and finally single
        // edges.
        self.shrink
            .get_or_insert_with(|| ShrinkState::new(&self.edges))
            .simplify(self.vertices.len(), &self.edges)
    }

    fn complicate(&mut self) -> bool {
        match self.shrink.as_mut() {
            Some(state) => state.complicate(self.vertices.len(), &self.edges),
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shrink {
    VertexWithDegree,
    Vertex(usize),
    Edge(usize),
}

#[derive(Debug, Clone, Default)]
struct Removed {
    vertices: FxHashSet<usize>,
    edges: FxHashSet<usize>,
}

#[derive(Debug, Clone)]
struct ShrinkState {
    current: Removed,
    high: Option<Removed>,
    command: Option<Shrink>,
    // Number of edges between two vertices, stored for both orientations.
    adjacent: BTreeMap<(usize, usize), usize>,
}

impl ShrinkState {
    fn new<E>(edges: &[(usize, usize, E)]) -> Self {
        let mut adjacent = BTreeMap::new();

        for &(src, dst, _) in edges {
            *adjacent.entry((src, dst)).or_default() += 1;
            if src != dst {
                *adjacent.entry((dst, src)).or_default() += 1;
            }
        }

        Self {
            current: Removed::default(),
            high: None,
            command: Some(Shrink::VertexWithDegree),
            adjacent,
        }
    }

    fn simplify<E>(&mut self, vertex_count: usize, edges: &[(usize, usize, E)]) -> bool {
        let command = match self.command {
            Some(command) => command,
            None => return false,
        };

        if self.current.vertices.len() == vertex_count {
            // Empty graph.
            return false;
        }

        self.high = Some(self.current.clone());

        let (remove_vertices, remove_edges, command) = match command {
            Shrink::VertexWithDegree => {
                let min_degree = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v))
                    .map(|v| self.degree(v))
                    .min()
                    .unwrap_or_default();

                let remove = (0..vertex_count)
                    .filter(|&v| self.vertex_exists(v))
                    .filter(|&v| self.degree(v) == min_degree)
                    .collect::<Vec<_>>();

                (remove, Vec::new(), Some(Shrink::VertexWithDegree))
            }
            Shrink::Vertex(v) => (vec![v], Vec::new(), self.next_command(vertex_count, edges)),
            Shrink::Edge(e) => (Vec::new(), vec![e], self.next_command(vertex_count, edges)),
        };

        for v in remove_vertices {
            self.current.vertices.insert(v);
            self.adjacent.retain(|&(src, dst), _| !(src == v || dst == v));
        }

        for e in remove_edges {
            let (src, dst, _) = edges[e];
            self.current.edges.insert(e);

            for key in [(src, dst), (dst, src)] {
                if let Some(count) = self.adjacent.get_mut(&key) {
                    *count -= 1;
                    if *count == 0 {
                        self.adjacent.remove(&key);
                    }
                }

                if src == dst {
                    break;
                }
            }
        }

        self.command = command;
        true
    }

    fn complicate<E>(&mut self, vertex_count: usize, edges: &[(usize, usize, E)]) -> bool {
        self.current = match self.high.take() {
            Some(high) => high,
            None => return false,
        };

        // The bookkeeping of degrees would have to be reverted too, so it is
        // rebuilt from scratch.
        self.adjacent = edges
            .iter()
            .enumerate()
            .filter(|&(e, &(src, dst, _))| self.edge_exists(e, (src, dst)))
            .fold(BTreeMap::new(), |mut adjacent, (_, &(src, dst, _))| {
                *adjacent.entry((src, dst)).or_default() += 1;
                if src != dst {
                    *adjacent.entry((dst, src)).or_default() += 1;
                }
                adjacent
            });

        if self.command == Some(Shrink::VertexWithDegree) {
            self.command = self.next_command(vertex_count, edges);
        }

        true
    }

    fn degree(&self, v: usize) -> usize {
        self.adjacent
            .range((v, 0)..=(v, usize::MAX))
            .map(|(_, count)| count)
            .sum()
    }

    fn vertex_exists(&self, v: usize) -> bool {
        !self.current.vertices.contains(&v)
    }

    fn edge_exists(&self, e: usize, (src, dst): (usize, usize)) -> bool {
        !(self.current.vertices.contains(&src)
            || self.current.vertices.contains(&dst)
            || self.current.edges.contains(&e))
    }

    fn next_command<E>(&self, vertex_count: usize, edges: &[(usize, usize, E)]) -> Option<Shrink> {
        let next_edge = |from: usize| {
            (from..edges.len())
                .find(|&e| {
                    let (src, dst, _) = edges[e];
                    self.edge_exists(e, (src, dst))
                })
                .map(Shrink::Edge)
        };

        match self.command? {
            Shrink::VertexWithDegree => (0..vertex_count)
                .find(|&v| self.vertex_exists(v))
                .map(Shrink::Vertex),
            Shrink::Vertex(v) => ((v + 1)..vertex_count)
                .find(|&w| self.vertex_exists(w))
                .map(Shrink::Vertex)
                .or_else(|| next_edge(0)),
            Shrink::Edge(e) => next_edge(e + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{prelude::any, test_runner::TestRunner};

    use crate::core::{EdgeSet, VertexSet};

    use super::*;

    #[test]
    fn generates_simple_graphs_by_default() {
        let strategy = graph_undirected(any::<()>(), any::<()>()).max_size(20);
        let mut runner = TestRunner::deterministic();

        for _ in 0..32 {
            let graph = strategy.new_tree(&mut runner).unwrap().current();

            assert!(graph.vertex_count() <= 20);

            for e in graph.edge_ids() {
                let (src, dst) = graph.endpoints(&e).unwrap();
                assert_ne!(src, dst);
                assert_eq!(graph.edge_id(&src, &dst).count(), 1);
            }
        }
    }

    #[test]
    fn simplifies_structure() {
        let strategy = graph_undirected(any::<()>(), any::<()>()).max_size(16);
        let mut runner = TestRunner::deterministic();

        let mut tree = loop {
            let tree = strategy.new_tree(&mut runner).unwrap();
            if tree.current().edge_count() > 0 {
                break tree;
            }
        };

        loop {
            let graph = tree.current();

            if graph.vertex_count() < 1 || graph.edge_count() < 1 {
                if !tree.complicate() {
                    break;
                }
            } else if !tree.simplify() {
                break;
            }
        }

        let graph = tree.current();

        // No loops and multi edges => two vertices connected with one edge.
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }
}
