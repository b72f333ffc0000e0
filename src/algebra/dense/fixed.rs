#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Statically sized dense matrix.
///
/// Data is stored in column major format as an array of `C` columns,
/// each holding `R` values.   Dimensions are part of the type, so
/// operations on these matrices are dimension checked at compile time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DenseMatrixN<const R: usize, const C: usize, T> {
    pub data: [[T; R]; C],
}

impl<const R: usize, const C: usize, T: FloatT> DenseMatrixN<R, C, T> {
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); R]; C],
        }
    }

    /// matrix from a row major array literal
    pub fn from_rows(rows: &[[T; C]; R]) -> Self {
        let mut A = Self::zeros();
        for (r, row) in rows.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                A[(r, c)] = val;
            }
        }
        A
    }

    pub fn col_slice(&self, j: usize) -> &[T] {
        &self.data[j]
    }

    pub fn col_slice_mut(&mut self, j: usize) -> &mut [T] {
        &mut self.data[j]
    }

    /// transposed view
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

impl<const N: usize, T: FloatT> DenseMatrixN<N, N, T> {
    pub fn identity() -> Self {
        let mut A = Self::zeros();
        for i in 0..N {
            A[(i, i)] = T::one();
        }
        A
    }
}

impl<const R: usize, const C: usize, T> ShapedMatrix for DenseMatrixN<R, C, T> {
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
    fn size(&self) -> (usize, usize) {
        (R, C)
    }
}

impl<const R: usize, const C: usize, T> DenseMatrix<T> for DenseMatrixN<R, C, T> {
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + idx.1 * R
    }
    #[inline]
    fn data(&self) -> &[T] {
        self.data.as_flattened()
    }
}

impl<const R: usize, const C: usize, T> DenseMatrixMut<T> for DenseMatrixN<R, C, T> {
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}

impl<const R: usize, const C: usize, T> Index<(usize, usize)> for DenseMatrixN<R, C, T> {
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        &self.data[idx.1][idx.0]
    }
}

impl<const R: usize, const C: usize, T> IndexMut<(usize, usize)> for DenseMatrixN<R, C, T> {
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        &mut self.data[idx.1][idx.0]
    }
}

impl<const R: usize, const C: usize, T> From<DenseMatrixN<R, C, T>> for Matrix<T>
where
    T: FloatT,
{
    fn from(B: DenseMatrixN<R, C, T>) -> Self {
        Self::new((R, C), B.data().to_vec())
    }
}

impl<const R: usize, const C: usize, T> std::fmt::Display for DenseMatrixN<R, C, T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        super::core::display_matrix(self, f)
    }
}

#[test]
fn test_fixed_matrix() {
    let A = DenseMatrixN::<2, 3, f64>::from_rows(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);

    assert_eq!(A.size(), (2, 3));
    assert_eq!(A[(1, 0)], 4.);
    assert_eq!(A.col_slice(2), &[3., 6.]);
    assert_eq!(A.data(), &[1., 4., 2., 5., 3., 6.]);
    assert_eq!(A.index_linear((1, 2)), 5);
    assert_eq!(A.t()[(2, 1)], 6.);

    let B: Matrix<f64> = A.into();
    assert_eq!(B, Matrix::from(&[[1., 2., 3.], [4., 5., 6.]]));

    let I = DenseMatrixN::<3, 3, f32>::identity();
    assert_eq!(Matrix::from(I), Matrix::<f32>::identity(3));

    let mut Z = DenseMatrixN::<2, 2, f64>::zeros();
    Z.col_slice_mut(1)[0] = 7.;
    Z.data_mut()[1] = -1.;
    assert_eq!(Z.data, [[0., -1.], [7., 0.]]);
}
