#![allow(non_snake_case)]
use crate::algebra::*;

// Column major LDL^T kernels shared by the dynamic and fixed size
// engines.  All functions operate on an n x n factor buffer `Lx`:
//
//   - strict lower triangle: unit lower factor L (unit diagonal implicit)
//   - diagonal: pivots D
//   - strict upper triangle: scratch products L[i][k]*D[k], stored
//     at (k, i) during factorization.   Never read by the solves.

pub(crate) struct FactorInfo {
    // number of positive pivots
    pub positive_inertia: usize,
    // first pivot rejected by the pivot check, if any
    pub rejected_pivot: Option<usize>,
}

// Factors the symmetric matrix implied by the lower triangle of A
// into Lx.   With `pivot_check = Some(tol)`, factorization stops at
// the first pivot d that is non-finite or fails |d| > tol.   With None,
// every column is processed regardless of the pivot values.

pub(crate) fn _factor<T, M>(A: &M, Lx: &mut [T], pivot_check: Option<T>) -> FactorInfo
where
    T: FloatT,
    M: DenseMatrix<T>,
{
    let n = A.nrows();
    debug_assert!(A.is_square() && Lx.len() == n * n);

    let mut positive_inertia = 0;

    for col in 0..n {
        let mut Dinv = T::zero();

        for row in col..n {
            // val = A[row][col] - sum_k L[row][k] * (L[col][k] * D[k])
            let mut val = A[(row, col)];
            let scratch = &Lx[col * n..col * n + col];
            for (k, &s) in scratch.iter().enumerate() {
                val -= Lx[row + k * n] * s;
            }

            if row == col {
                if let Some(tol) = pivot_check {
                    // fails closed, so a NaN tolerance rejects everything
                    let accepted = val.is_finite() && val.abs() > tol;
                    if !accepted {
                        return FactorInfo {
                            positive_inertia,
                            rejected_pivot: Some(col),
                        };
                    }
                }
                if val > T::zero() {
                    positive_inertia += 1;
                }
                Lx[col + col * n] = val;
                Dinv = T::recip(val);
            } else {
                Lx[col + row * n] = val;
                Lx[row + col * n] = val * Dinv;
            }
        }
    }

    FactorInfo {
        positive_inertia,
        rejected_pivot: None,
    }
}

// Solves (L+I)x = b in place, column oriented
pub(crate) fn _lsolve<T: FloatT>(n: usize, Lx: &[T], x: &mut [T]) {
    for j in 0..n {
        let (head, tail) = x.split_at_mut(j + 1);
        let xj = head[j];
        tail.axpby(-xj, &Lx[j * n + j + 1..(j + 1) * n], T::one());
    }
}

// Solves Dx = b in place
pub(crate) fn _dsolve<T: FloatT>(n: usize, Lx: &[T], x: &mut [T]) {
    for (i, xi) in x.iter_mut().enumerate() {
        *xi /= Lx[i + i * n];
    }
}

// Solves (L+I)'x = b in place
pub(crate) fn _ltsolve<T: FloatT>(n: usize, Lx: &[T], x: &mut [T]) {
    for i in (0..n).rev() {
        let s = Lx[i * n + i + 1..(i + 1) * n].dot(&x[i + 1..]);
        x[i] -= s;
    }
}

// Solves LDL'x = b in place
pub(crate) fn _solve<T: FloatT>(n: usize, Lx: &[T], x: &mut [T]) {
    debug_assert_eq!(x.len(), n);
    _lsolve(n, Lx, x);
    _dsolve(n, Lx, x);
    _ltsolve(n, Lx, x);
}

pub(crate) fn _determinant<T: FloatT>(n: usize, Lx: &[T]) -> T {
    (0..n).fold(T::one(), |det, i| det * Lx[i + i * n])
}

pub(crate) fn _diagonal<T: FloatT>(n: usize, Lx: &[T]) -> Vec<T> {
    (0..n).map(|i| Lx[i + i * n]).collect()
}

// index of the first zero or non-finite pivot
pub(crate) fn _degenerate_pivot<T: FloatT>(n: usize, Lx: &[T]) -> Option<usize> {
    (0..n).find(|&i| {
        let d = Lx[i + i * n];
        d == T::zero() || !d.is_finite()
    })
}

pub(crate) fn _warn_degenerate<T: FloatT>(n: usize, Lx: &[T]) {
    if let Some(index) = _degenerate_pivot(n, Lx) {
        log::warn!(
            "LDL^T factorization of size {} produced degenerate pivot D[{}] = {}",
            n,
            index,
            Lx[index + index * n]
        );
    }
}

//configure tests of internals
#[path = "test.rs"]
#[cfg(test)]
mod test;
