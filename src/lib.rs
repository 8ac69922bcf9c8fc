//! Detection of holes in undirected graphs.
//!
//! A hole is an induced cycle with at least four vertices, i.e., a cycle
//! without chords. Graphs without holes are called chordal. See
//! [`algo::hole`] for the algorithms and examples.
//!
//! The algorithms are generic over the graph representation. Any storage
//! implementing the [core] traits can be used, this crate provides
//! [`AdjList`](storage::AdjList) and (with `petgraph` feature) support for
//! petgraph's undirected graphs.

pub mod adapt;
pub mod algo;
pub mod common;
pub mod core;
pub mod infra;
pub mod storage;

pub mod prelude {
    pub use crate::{
        algo::{find_hole, find_hole_at_least, has_hole, has_hole_at_least, is_hole, Hole},
        core::{
            id::{EdgeId, VertexId},
            EdgeSet, GraphBase, NeighborReference, Neighbors, VertexSet,
        },
        storage::AdjList,
    };
}
