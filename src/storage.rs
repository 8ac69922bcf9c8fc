//! Graph storages implementing the [core](crate::core) traits.

pub mod adj_list;

pub use adj_list::AdjList;
