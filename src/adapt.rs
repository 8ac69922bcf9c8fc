//! Integrations of foreign graph representations.

#[cfg(feature = "petgraph")]
pub mod petgraph;
