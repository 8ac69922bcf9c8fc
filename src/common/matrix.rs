use fixedbitset::FixedBitSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rectangular { cols: usize },
    // Symmetric square matrix stored as its lower triangle.
    Triangular,
}

/// Fixed-size matrix of bits.
///
/// The matrix is either rectangular or symmetric. A symmetric matrix stores
/// only its lower triangle (including the diagonal), so `(row, col)` and
/// `(col, row)` address the same bit.
#[derive(Debug, Clone)]
pub struct BitMatrix {
    bits: FixedBitSet,
    shape: Shape,
}

impl BitMatrix {
    /// Creates a matrix with `rows` × `cols` cleared bits.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(rows * cols),
            shape: Shape::Rectangular { cols },
        }
    }

    /// Creates a symmetric matrix with `n` × `n` cleared bits.
    pub fn triangular(n: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n * (n + 1) / 2),
            shape: Shape::Triangular,
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.bits.contains(self.index(row, col))
    }

    /// Sets the bit and returns `true` if it was not set before.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        let index = self.index(row, col);
        !self.bits.put(index)
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    fn index(&self, row: usize, col: usize) -> usize {
        match self.shape {
            Shape::Rectangular { cols } => {
                debug_assert!(col < cols, "column out of bounds");
                row * cols + col
            }
            Shape::Triangular => {
                // Make sure that the coordinates are in the lower triangle.
                let (row, col) = if row >= col { (row, col) } else { (col, row) };
                // The rows are 1 + 2 + 3 + ... + n = n (n + 1) / 2.
                row * (row + 1) / 2 + col
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangular() {
        let mut matrix = BitMatrix::new(3, 5);

        assert!(matrix.insert(2, 4));
        assert!(!matrix.insert(2, 4));
        assert!(matrix.insert(0, 1));

        assert!(matrix.contains(2, 4));
        assert!(matrix.contains(0, 1));
        assert!(!matrix.contains(1, 0));
        assert!(!matrix.contains(1, 2));

        matrix.clear();
        assert!(!matrix.contains(2, 4));
    }

    #[test]
    fn triangular_is_symmetric() {
        let mut matrix = BitMatrix::triangular(4);

        assert!(matrix.insert(1, 3));
        assert!(matrix.contains(3, 1));
        assert!(!matrix.insert(3, 1));

        assert!(matrix.insert(2, 2));
        assert!(!matrix.contains(0, 3));
    }

    #[test]
    fn triangular_cells_are_distinct() {
        let n = 6;
        let mut matrix = BitMatrix::triangular(n);

        for row in 0..n {
            for col in 0..=row {
                assert!(matrix.insert(row, col), "cell ({row}, {col}) shared");
            }
        }
    }
}
