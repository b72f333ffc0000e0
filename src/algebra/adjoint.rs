use crate::algebra::{DenseMatrix, MatrixShape, ShapedMatrix};
use std::ops::Index;

/// Adjoint (transposed) read only view of a matrix
#[derive(Debug)]
pub struct Adjoint<'a, M> {
    pub src: &'a M,
}

impl<M> ShapedMatrix for Adjoint<'_, M>
where
    M: ShapedMatrix,
{
    fn size(&self) -> (usize, usize) {
        (self.src.ncols(), self.src.nrows())
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::T
    }
}

impl<M> Index<(usize, usize)> for Adjoint<'_, M>
where
    M: Index<(usize, usize)>,
{
    type Output = M::Output;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        //reverse the indices
        &self.src[(idx.1, idx.0)]
    }
}

impl<M, T> DenseMatrix<T> for Adjoint<'_, M>
where
    M: DenseMatrix<T>,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}
