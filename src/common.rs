//! Auxiliary data structures shared by the algorithms.

mod indexed;
mod matrix;

pub use indexed::IndexedGraph;
pub use matrix::BitMatrix;
