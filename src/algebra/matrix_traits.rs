use crate::algebra::MatrixShape;
use std::ops::Index;

/// Dimension queries common to every matrix type and matrix view
pub trait ShapedMatrix {
    /// (rows, columns)
    fn size(&self) -> (usize, usize);
    fn shape(&self) -> MatrixShape;
    fn nrows(&self) -> usize {
        self.size().0
    }
    fn ncols(&self) -> usize {
        self.size().1
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

//NB: the concrete dense type is just called "Matrix".  The "DenseMatrix" trait
//is implemented on Matrix, BorrowedMatrix, the fixed size DenseMatrixN and the
//Adjoint and Symmetric views to allow for indexing of values in any of those
//formats.   This follows the Julia naming convention for similar types.

/// Read access to a column major dense matrix or matrix view
pub trait DenseMatrix<T>: ShapedMatrix + Index<(usize, usize), Output = T> {
    /// position of the `(row, col)` entry within [`data`](DenseMatrix::data)
    fn index_linear(&self, idx: (usize, usize)) -> usize;
    fn data(&self) -> &[T];
}

/// Write access to the underlying data of a dense matrix
pub trait DenseMatrixMut<T>: DenseMatrix<T> {
    fn data_mut(&mut self) -> &mut [T];
}
