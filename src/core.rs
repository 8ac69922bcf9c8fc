//! Traits describing the graph interface the algorithms are written against.
//!
//! Any finite undirected graph representation can be used with the
//! algorithms in this crate as long as it implements [`GraphBase`],
//! [`VertexSet`], [`Neighbors`] and, for some functionality, [`EdgeSet`].

pub mod borrow;
pub mod error;
pub mod id;

mod base;
mod edges;
mod neighbors;
mod vertices;

pub use base::*;
pub use edges::*;
pub use neighbors::*;
pub use vertices::*;
