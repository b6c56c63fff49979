//! Dense row-major square matrix used for the distance and successor tables.
use std::ops::{
    Index,
    IndexMut,
};

/// An `order × order` matrix stored in a single contiguous buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    /// Rows and columns.
    order: usize,
    /// Row-major cell storage, `order * order` long.
    cells: Vec<T>,
}

impl<T: Clone> SquareMatrix<T> {
    /// Allocate a matrix with every cell set to `value`.
    #[must_use]
    pub fn filled(order: usize, value: T) -> Self {
        Self { order, cells: vec![value; order * order] }
    }
}

impl<T> SquareMatrix<T> {
    /// Number of rows (and columns).
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Bounds-checked cell access.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    /// Iterate over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics; an empty buffer yields no rows either way
        self.cells.chunks(self.order.max(1))
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Buffer position of `(row, col)`, if inside the matrix.
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.order && col < self.order).then(|| row * self.order + col)
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let Some(i) = self.offset(row, col) else {
            panic!("cell ({row}, {col}) is outside a matrix of order {}", self.order);
        };
        &self.cells[i]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let Some(i) = self.offset(row, col) else {
            panic!("cell ({row}, {col}) is outside a matrix of order {}", self.order);
        };
        &mut self.cells[i]
    }
}
