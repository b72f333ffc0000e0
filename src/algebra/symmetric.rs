use crate::algebra::{DenseMatrix, MatrixShape, MatrixTriangle, ShapedMatrix};
use std::ops::Index;

/// Symmetric read only view of a square matrix.
///
/// Only the triangle indicated by `uplo` is referenced.  Entries
/// in the other triangle are read by reflection.
#[derive(Debug)]
pub struct Symmetric<'a, M> {
    pub src: &'a M,
    pub uplo: MatrixTriangle,
}

impl<M> Symmetric<'_, M> {
    // true if (row, col) lies in the populated triangle or diagonal
    fn is_populated(&self, idx: (usize, usize)) -> bool {
        match self.uplo {
            MatrixTriangle::Triu => idx.0 <= idx.1,
            MatrixTriangle::Tril => idx.0 >= idx.1,
        }
    }
}

impl<M> ShapedMatrix for Symmetric<'_, M>
where
    M: ShapedMatrix,
{
    fn size(&self) -> (usize, usize) {
        self.src.size()
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<M> Index<(usize, usize)> for Symmetric<'_, M>
where
    M: Index<(usize, usize)>,
{
    type Output = M::Output;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        if self.is_populated(idx) {
            &self.src[idx]
        } else {
            &self.src[(idx.1, idx.0)]
        }
    }
}

impl<M, T> DenseMatrix<T> for Symmetric<'_, M>
where
    M: DenseMatrix<T>,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        if self.is_populated(idx) {
            self.src.index_linear(idx)
        } else {
            //reflected triangular part
            self.src.index_linear((idx.1, idx.0))
        }
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}
