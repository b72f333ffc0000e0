#![allow(non_snake_case)]

use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Core dense matrix type for owned and borrowed matrices.
///
/// Data is stored in column major format.  The concrete owned type
/// is [`Matrix`](Matrix), with [`BorrowedMatrix`](BorrowedMatrix) and
/// [`BorrowedMatrixMut`](BorrowedMatrixMut) providing matrix views
/// of existing slices.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    /// dimensions
    pub size: (usize, usize),
    /// vector of data in column major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix
pub type Matrix<T = f64> = DenseStorageMatrix<Vec<T>, T>;
/// Dense matrix view of a borrowed slice
pub type BorrowedMatrix<'a, T> = DenseStorageMatrix<&'a [T], T>;
/// Mutable dense matrix view of a borrowed slice
pub type BorrowedMatrixMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn size(&self) -> (usize, usize) {
        self.size
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    #[inline]
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.nrows() * idx.1
    }
    #[inline]
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseMatrixMut<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    #[inline]
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    type Output = T;
    #[inline]
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: Sized,
{
    #[inline]
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    pub fn col_slice(&self, col: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(col < n);
        &self.data()[(col * m)..(col + 1) * m]
    }

    /// transposed view
    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }

    /// symmetric view referencing only the `uplo` triangle
    pub fn sym(&self, uplo: MatrixTriangle) -> Symmetric<'_, Self> {
        debug_assert!(self.is_square());
        Symmetric { src: self, uplo }
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    pub fn col_slice_mut(&mut self, col: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(col < n);
        &mut self.data_mut()[(col * m)..(col + 1) * m]
    }
}

// ------------------------------------------------
// BorrowedMatrix implementation

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: FloatT,
{
    /// view a column major slice as an `m x n` matrix
    pub fn from_slice(data: &'a [T], m: usize, n: usize) -> Self {
        assert_eq!(data.len(), m * n);
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: FloatT,
{
    /// mutable view of a column major slice as an `m x n` matrix
    pub fn from_slice_mut(data: &'a mut [T], m: usize, n: usize) -> Self {
        assert_eq!(data.len(), m * n);
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }
}
