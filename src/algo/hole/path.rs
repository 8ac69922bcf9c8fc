const ABSENT: usize = usize::MAX;

/// Stack of dense vertices forming the path that is currently being extended.
///
/// Besides the order, it keeps the position of every vertex on the path, so
/// that both the membership test and finding where a closed cycle starts take
/// constant time.
#[derive(Debug, Clone)]
pub struct ActivePath {
    stack: Vec<usize>,
    rank: Vec<usize>,
}

impl ActivePath {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            stack: Vec::new(),
            rank: vec![ABSENT; vertex_count],
        }
    }

    pub fn push(&mut self, v: usize) {
        debug_assert!(!self.contains(v), "vertex {v} is already on the path");

        self.rank[v] = self.stack.len();
        self.stack.push(v);
    }

    pub fn pop(&mut self) -> Option<usize> {
        let v = self.stack.pop()?;
        self.rank[v] = ABSENT;
        Some(v)
    }

    pub fn contains(&self, v: usize) -> bool {
        self.rank[v] != ABSENT
    }

    /// Position of the vertex on the path, starting from zero.
    pub fn rank(&self, v: usize) -> Option<usize> {
        let rank = self.rank[v];
        (rank != ABSENT).then_some(rank)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn tail(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.stack
    }

    /// The part of the path from the given vertex to the tail.
    ///
    /// # Panics
    ///
    /// Panics if the vertex is not on the path.
    pub fn suffix_from(&self, v: usize) -> &[usize] {
        let rank = self.rank(v).expect("vertex is not on the path");
        &self.stack[rank..]
    }
}
