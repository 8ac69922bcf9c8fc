use std::{collections::BTreeSet, iter::Copied, slice};

use crate::{
    core::{
        id::{DefaultId, EdgeId, IdType, VertexId},
        GraphBase, NeighborRef, NeighborReference, Neighbors, VertexSet,
    },
    storage::AdjList,
};

pub type TestGraph = AdjList<(), (), DefaultId>;

pub fn create_from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> TestGraph {
    let mut graph = TestGraph::with_capacity(vertex_count, edges.len());

    for _ in 0..vertex_count {
        graph.add_vertex(());
    }

    for &(src, dst) in edges {
        graph.add_edge(&VertexId::from_usize(src), &VertexId::from_usize(dst), ());
    }

    graph
}

pub fn create_path(vertex_count: usize) -> TestGraph {
    let edges = (1..vertex_count).map(|v| (v - 1, v)).collect::<Vec<_>>();
    create_from_edges(vertex_count, &edges)
}

pub fn create_cycle(vertex_count: usize) -> TestGraph {
    let mut edges = (1..vertex_count).map(|v| (v - 1, v)).collect::<Vec<_>>();

    if vertex_count > 2 {
        edges.push((vertex_count - 1, 0));
    }

    create_from_edges(vertex_count, &edges)
}

pub fn create_complete(vertex_count: usize) -> TestGraph {
    let edges = (0..vertex_count)
        .flat_map(|u| ((u + 1)..vertex_count).map(move |v| (u, v)))
        .collect::<Vec<_>>();
    create_from_edges(vertex_count, &edges)
}

/// Complete binary tree with vertex `v` being the parent of `2v + 1` and
/// `2v + 2`.
pub fn create_binary_tree(vertex_count: usize) -> TestGraph {
    let edges = (1..vertex_count)
        .map(|v| ((v - 1) / 2, v))
        .collect::<Vec<_>>();
    create_from_edges(vertex_count, &edges)
}

/// Decides whether the graph contains an induced cycle of length at least
/// `min_len` by enumerating all vertex subsets.
///
/// Only usable for small graphs. A subset induces a cycle if and only if it is
/// connected and every vertex in it has exactly two neighbors in the subset.
pub fn has_hole_brute_force<G>(graph: &G, min_len: usize) -> bool
where
    G: Neighbors + VertexSet,
{
    let map = graph.vertex_id_map();
    let n = map.len();

    assert!(n <= 20, "brute force is limited to graphs with at most 20 vertices");

    let mut adjacency = vec![0u32; n];

    for (u, row) in adjacency.iter_mut().enumerate() {
        let id = map.to_real(u).unwrap();

        for neighbor in graph.neighbors_undirected(&id) {
            let v = map.to_virt(neighbor.id().as_ref()).unwrap();
            if u != v {
                *row |= 1 << v;
            }
        }
    }

    let min_len = min_len.max(4);

    (0..1u32 << n)
        .filter(|subset| subset.count_ones() as usize >= min_len)
        .any(|subset| {
            let degrees_ok = (0..n)
                .filter(|&v| subset & (1 << v) != 0)
                .all(|v| (adjacency[v] & subset).count_ones() == 2);

            degrees_ok && is_connected(&adjacency, subset)
        })
}

fn is_connected(adjacency: &[u32], subset: u32) -> bool {
    let start = subset.trailing_zeros();
    let mut reached = 1u32 << start;
    let mut frontier = reached;

    while frontier != 0 {
        let v = frontier.trailing_zeros() as usize;
        frontier &= frontier - 1;

        let next = adjacency[v] & subset & !reached;
        reached |= next;
        frontier |= next;
    }

    reached == subset
}

/// Graph with string labels as vertex IDs.
///
/// Its vertex ID mapping is not isomorphic, which is useful for testing
/// algorithms on graphs whose IDs are not integers.
#[derive(Debug, Clone)]
pub struct LabeledGraph {
    vertices: BTreeSet<&'static str>,
    edges: Vec<(&'static str, &'static str)>,
}

impl LabeledGraph {
    pub fn new(edges: &[(&'static str, &'static str)]) -> Self {
        let vertices = edges.iter().flat_map(|&(u, v)| [u, v]).collect();

        Self {
            vertices,
            edges: edges.to_vec(),
        }
    }
}

impl GraphBase for LabeledGraph {
    type VertexId = &'static str;
    type EdgeId = EdgeId<usize>;
}

impl VertexSet for LabeledGraph {
    type VertexIdsIter<'a> = Copied<std::collections::btree_set::Iter<'a, &'static str>>
    where
        Self: 'a;

    fn vertex_ids(&self) -> Self::VertexIdsIter<'_> {
        self.vertices.iter().copied()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn contains_vertex(&self, id: &Self::VertexId) -> bool {
        self.vertices.contains(id)
    }
}

impl Neighbors for LabeledGraph {
    type NeighborRef<'a> = NeighborRef<&'static str, EdgeId<usize>>
    where
        Self: 'a;

    type NeighborsIter<'a> = LabeledNeighbors<'a>
    where
        Self: 'a;

    fn neighbors_undirected(&self, from: &Self::VertexId) -> Self::NeighborsIter<'_> {
        LabeledNeighbors {
            src: *from,
            edges: self.edges.iter().enumerate(),
        }
    }
}

pub struct LabeledNeighbors<'a> {
    src: &'static str,
    edges: std::iter::Enumerate<slice::Iter<'a, (&'static str, &'static str)>>,
}

impl Iterator for LabeledNeighbors<'_> {
    type Item = NeighborRef<&'static str, EdgeId<usize>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.find_map(|(index, &(u, v))| {
            let neighbor = if u == self.src {
                v
            } else if v == self.src {
                u
            } else {
                return None;
            };

            Some(NeighborRef {
                id: neighbor,
                edge: EdgeId(index),
                pred: self.src,
            })
        })
    }
}
