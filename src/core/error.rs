use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<E> {
    pub attr: E,
    pub kind: AddEdgeErrorKind,
}

impl<E> AddEdgeError<E> {
    pub fn new(attr: E, kind: AddEdgeErrorKind) -> Self {
        Self { attr, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

/// A reason why a graph is not [simple], i.e., why it cannot be processed by
/// algorithms that rely on the absence of self-loops and parallel edges.
///
/// [simple]: https://en.wikipedia.org/wiki/Graph_(discrete_mathematics)#Simple_graph
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotSimpleError<VI: fmt::Debug> {
    #[error("vertex {0:?} has a self-loop")]
    SelfLoop(VI),
    #[error("vertices {0:?} and {1:?} are connected by more than one edge")]
    MultiEdge(VI, VI),
}
