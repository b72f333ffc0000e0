#![allow(non_snake_case)]

use crate::algebra::*;

/// General dense matrix-matrix multiply
pub trait MultiplyGEMM<T> {
    /// BLAS-like general matrix multiply.  Produces `self = αA*B + βself`
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>;
}

impl<S, T> MultiplyGEMM<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: FloatT,
{
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        // as with BLAS, β = 0 overwrites rather than scales so
        // that any NaNs already in C do not propagate
        if β == T::zero() {
            self.data_mut().set(T::zero());
        } else if β != T::one() {
            self.data_mut().scale(β);
        }

        // column oriented accumulation C[:,j] += α * A[:,k] * B[k,j]
        for j in 0..B.ncols() {
            for k in 0..A.ncols() {
                let bkj = α * B[(k, j)];
                if bkj == T::zero() {
                    continue;
                }
                for i in 0..A.nrows() {
                    self[(i, j)] += A[(i, k)] * bkj;
                }
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let b = vec![
        1.0, 5.0, 9.0, 2.0, 6.0, 10.0, 3.0, 7.0, 11.0, 4.0, 8.0, 12.0,
    ];
    let c = vec![2.0, 7.0, 6.0, 2.0, 0.0, 7.0, 4.0, 2.0];

    let mut A = Matrix::zeros((m, k));
    let mut B = Matrix::zeros((k, n));
    let mut C = Matrix::<f64>::zeros((m, n));
    A.copy_from_slice(&a);
    B.copy_from_slice(&b);
    C.copy_from_slice(&c);
    C.mul(&A, &B, 1.0, 1.0);

    assert!(C.data() == vec![40.0, 90.0, 50.0, 100.0, 50.0, 120.0, 60.0, 130.0]);

    // new from slice and transposed multiply
    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::zeros((n, m));
    C.mul(&B.t(), &A.t(), 1.0, 0.0);

    assert!(C.data() == vec![38.0, 44.0, 50.0, 56.0, 83.0, 98.0, 113.0, 128.0]);
}

#[test]
fn test_gemm_overwrites_nan() {
    let A = Matrix::<f64>::identity(2);
    let B = Matrix::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let mut C = Matrix::new((2, 2), vec![f64::NAN; 4]);
    C.mul(&A, &B, 2.0, 0.0);
    assert_eq!(C, Matrix::from(&[[2., 4.], [6., 8.]]));
}
