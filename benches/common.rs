#![allow(dead_code)]

use fastrand::Rng;
use holes::{core::id::VertexId, storage::AdjList};
use petgraph::graph::{NodeIndex, UnGraph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in holes::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn adj_list_random(vertex_count: usize, density: f32, rng: &mut Rng) -> AdjList<(), ()> {
    let mut graph = AdjList::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_vertex(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&VertexId::from(u), &VertexId::from(v), ());
    }

    graph
}

pub fn petgraph_random(vertex_count: usize, density: f32, rng: &mut Rng) -> UnGraph<(), ()> {
    let mut graph = UnGraph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }

    graph
}

/// Cycle on `vertex_count` vertices with every vertex also connected to the
/// vertex two steps ahead, except for the last few.
pub fn adj_list_long_hole(vertex_count: usize) -> AdjList<(), ()> {
    let mut graph = AdjList::with_capacity(vertex_count, 2 * vertex_count);

    for _ in 0..vertex_count {
        graph.add_vertex(());
    }

    for v in 0..vertex_count {
        graph.add_edge(
            &VertexId::from(v),
            &VertexId::from((v + 1) % vertex_count),
            (),
        );

        if v + 2 < vertex_count / 2 {
            graph.add_edge(&VertexId::from(v), &VertexId::from(v + 2), ());
        }
    }

    graph
}
