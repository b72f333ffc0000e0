#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self::new(size, data)
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    /// matrix from column major data
    pub fn new(size: (usize, usize), data: Vec<T>) -> Self {
        assert_eq!(size.0 * size.1, data.len());
        Self {
            size,
            data,
            phantom: std::marker::PhantomData::<T>,
        }
    }

    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        Self::new(size, src.to_vec())
    }

    /// owned copy of any dense matrix or matrix view
    pub fn new_from_dense<M>(src: &M) -> Self
    where
        M: DenseMatrix<T>,
    {
        let mut mat = Matrix::zeros(src.size());
        for col in 0..src.ncols() {
            for row in 0..src.nrows() {
                mat[(row, col)] = src[(row, col)];
            }
        }
        mat
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: FloatT,
{
    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data_mut().set(T::zero());
        for i in 0..self.ncols() {
            self[(i, i)] = T::one();
        }
    }

    pub fn copy_from_slice(&mut self, src: &[T]) -> &mut Self {
        self.data_mut().copy_from(src);
        self
    }
}

// Matrix construction from a row major array literal.  The
// visual layout of the literal matches the matrix layout, e.g.
//
// Matrix::from(&[[1., 2.],
//                [3., 4.]])
//
// has first row [1, 2].

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; C]; R]) -> Self {
        let mut mat = Matrix::zeros((R, C));
        for (r, row) in rows.iter().enumerate() {
            for (c, &val) in row.iter().enumerate() {
                mat[(r, c)] = val;
            }
        }
        mat
    }
}

impl<S, T> std::fmt::Display for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        display_matrix(self, f)
    }
}

pub(crate) fn display_matrix<M, T>(m: &M, f: &mut std::fmt::Formatter) -> std::fmt::Result
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    writeln!(f)?;
    for i in 0..m.nrows() {
        write!(f, "[ ")?;
        for j in 0..m.ncols() {
            write!(f, " {:?}", m[(i, j)])?;
        }
        writeln!(f, "]")?;
    }
    writeln!(f)?;
    Ok(())
}

#[test]
fn test_matrix_constructors() {
    let I = Matrix::<f64>::identity(3);
    assert_eq!(I.data, vec![1., 0., 0., 0., 1., 0., 0., 0., 1.]);

    let Z = Matrix::<f32>::zeros((2, 3));
    assert_eq!(Z.size(), (2, 3));
    assert!(Z.data.iter().all(|&x| x == 0.));

    // row major literal, column major storage
    let A = Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ]);
    assert_eq!(A.data, vec![1., 4., 2., 5., 3., 6.]);
    assert_eq!(A, Matrix::new_from_slice((2, 3), &[1., 4., 2., 5., 3., 6.]));

    // copying out of a transposed view
    let At = Matrix::new_from_dense(&A.t());
    assert_eq!(At.size(), (3, 2));
    assert_eq!(At.data, vec![1., 2., 3., 4., 5., 6.]);

    let mut B = Matrix::<f64>::zeros((2, 2));
    B.copy_from_slice(&[1., 2., 3., 4.]);
    assert_eq!(B[(0, 1)], 3.);
    B.set_identity();
    assert_eq!(B, Matrix::identity(2));
}

#[test]
fn test_matrix_display() {
    let A = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let s = format!("{}", A);
    assert_eq!(s, "\n[  1.0 2.0]\n[  3.0 4.0]\n\n");
}
