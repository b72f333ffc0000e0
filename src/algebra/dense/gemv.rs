#![allow(non_snake_case)]

use crate::algebra::*;

/// General dense matrix-vector multiply
pub trait MultiplyGEMV<T> {
    /// BLAS-like general matrix-vector multiply.  Produces `y = αA*x + βy`
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T);
}

// implemented for every dense type and view, including
// Adjoint, so that y = αA'x + βy is A.t().gemv(...)
impl<M, T> MultiplyGEMV<T> for M
where
    M: DenseMatrix<T>,
    T: FloatT,
{
    fn gemv(&self, x: &[T], y: &mut [T], α: T, β: T) {
        let (m, n) = self.size();
        assert!(n == x.len() && m == y.len());

        if β == T::zero() {
            y.set(T::zero());
        } else if β != T::one() {
            y.scale(β);
        }

        for (j, &xj) in x.iter().enumerate() {
            let axj = α * xj;
            for (i, yi) in y.iter_mut().enumerate() {
                *yi += self[(i, j)] * axj;
            }
        }
    }
}

#[test]
fn test_gemv() {
    let (m, n) = (2, 3);
    let a = vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0];
    let A = Matrix::new_from_slice((m, n), &a);

    let x = vec![1., 2., 3.];
    let mut y = vec![-1., -2.];
    A.gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [25.0, 58.0]);

    let x = vec![1., 2.];
    let mut y = vec![-1., -2., -3.];
    A.t().gemv(&x, &mut y, 2.0, 3.0);
    assert!(y == [15.0, 18.0, 21.0]);
}
