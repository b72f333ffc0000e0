#![allow(non_snake_case)]
use super::kernels::*;
use super::{LdltError, LdltSettings};
use crate::algebra::*;

/// Performs $LDL^T$ decomposition of a dense symmetric `N x N` matrix,
/// with `N` fixed at compile time.
///
/// Unlike [`Ldlt`](crate::ldlt::Ldlt), this engine is always in a
/// decomposed state and dimension agreement of all arguments is
/// checked by the compiler.

#[derive(Debug, Clone)]
pub struct LdltN<const N: usize, T: FloatT> {
    // L in strict tril, D on the diagonal, scratch in strict triu
    factors: DenseMatrixN<N, N, T>,
    positive_inertia: usize,
    settings: LdltSettings<T>,
}

impl<const N: usize, T> LdltN<N, T>
where
    T: FloatT,
{
    /// Decomposes `A` using default settings.   Never fails since
    /// pivots are only checked on request.
    pub fn new(A: &DenseMatrixN<N, N, T>) -> Self {
        let settings = LdltSettings::default();
        let (factors, info) = Self::factor(A, &settings);
        debug_assert!(info.rejected_pivot.is_none());

        Self {
            factors,
            positive_inertia: info.positive_inertia,
            settings,
        }
    }

    pub fn new_with_settings(
        A: &DenseMatrixN<N, N, T>,
        settings: LdltSettings<T>,
    ) -> Result<Self, LdltError> {
        let (factors, positive_inertia) = Self::factor_checked(A, &settings)?;
        Ok(Self {
            factors,
            positive_inertia,
            settings,
        })
    }

    /// Decomposes `A`, replacing the current decomposition.
    ///
    /// Fails only if pivot checking is enabled, in which case the
    /// existing decomposition is retained.
    pub fn compute(&mut self, A: &DenseMatrixN<N, N, T>) -> Result<(), LdltError> {
        let (factors, positive_inertia) = Self::factor_checked(A, &self.settings)?;
        self.factors = factors;
        self.positive_inertia = positive_inertia;
        Ok(())
    }

    /// Solves `Ax = b`, returning `x`
    pub fn backsub(&self, b: &[T; N]) -> [T; N] {
        let mut x = *b;
        self.solve_in_place(&mut x);
        x
    }

    pub fn solve_in_place(&self, b: &mut [T; N]) {
        _solve(N, self.factors.data(), b);
    }

    /// Solves `AX = B` for all `C` columns of `B`, returning `X`
    pub fn backsub_mat<const C: usize>(&self, B: &DenseMatrixN<N, C, T>) -> DenseMatrixN<N, C, T> {
        let mut X = *B;
        let Lx = self.factors.data();
        for col in X.data.iter_mut() {
            _solve(N, Lx, col);
        }
        X
    }

    /// Inverse of the decomposed matrix
    pub fn inverse(&self) -> DenseMatrixN<N, N, T> {
        self.backsub_mat(&DenseMatrixN::identity())
    }

    pub fn determinant(&self) -> T {
        _determinant(N, self.factors.data())
    }

    /// Diagonal factor `D`, i.e. the pivots
    pub fn factor_d(&self) -> [T; N] {
        std::array::from_fn(|i| self.factors[(i, i)])
    }

    /// Number of positive pivots
    pub fn positive_inertia(&self) -> usize {
        self.positive_inertia
    }

    pub fn settings(&self) -> &LdltSettings<T> {
        &self.settings
    }

    // factors into a fresh buffer so that a rejected
    // factorization leaves the engine untouched
    fn factor(
        A: &DenseMatrixN<N, N, T>,
        settings: &LdltSettings<T>,
    ) -> (DenseMatrixN<N, N, T>, FactorInfo) {
        let mut factors = DenseMatrixN::zeros();
        let info = _factor(A, factors.data_mut(), settings.pivot_check());

        if let Some(index) = info.rejected_pivot {
            log::debug!("LDL^T factorization rejected pivot at index {}", index);
        } else if settings.warn_degenerate {
            _warn_degenerate(N, factors.data());
        }
        (factors, info)
    }

    fn factor_checked(
        A: &DenseMatrixN<N, N, T>,
        settings: &LdltSettings<T>,
    ) -> Result<(DenseMatrixN<N, N, T>, usize), LdltError> {
        let (factors, info) = Self::factor(A, settings);
        match info.rejected_pivot {
            Some(index) => Err(LdltError::ZeroPivot { index }),
            None => Ok((factors, info.positive_inertia)),
        }
    }
}

macro_rules! generate_test_ldltn {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = DenseMatrixN::<3, 3, $fxx>::from_rows(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let eng = LdltN::new(&S);
            assert_eq!(eng.positive_inertia(), 3);

            let x = eng.backsub(&[22., 44., 40.]);
            assert!(x.norm_inf_diff(&[1., 3., 5.]) <= (1e-10 as $fxx).$tolfn());

            let B = DenseMatrixN::<3, 2, $fxx>::from_rows(&[
                [22., 32.], //
                [44., 56.], //
                [40., 52.],
            ]);
            let X = eng.backsub_mat(&B);
            assert!(X.col_slice(1).norm_inf_diff(&[2., 4., 6.]) <= (1e-10 as $fxx).$tolfn());

            // S * inv(S) = I
            let Sinv = Matrix::from(eng.inverse());
            let mut I = Matrix::<$fxx>::zeros((3, 3));
            I.mul(&Matrix::from(S), &Sinv, 1.0, 0.0);
            assert!(I.norm_inf_diff(&Matrix::identity(3)) <= (1e-10 as $fxx).$tolfn());

            assert!((eng.determinant() / 296. - 1.).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_ldltn!(f32, test_ldltn_f32, sqrt);
generate_test_ldltn!(f64, test_ldltn_f64, abs);

#[test]
fn test_ldltn_checked_compute() {
    let settings = crate::ldlt::LdltSettingsBuilder::<f64>::default()
        .check_pivots(true)
        .pivot_tol(1e-10)
        .build()
        .unwrap();

    let A = DenseMatrixN::<2, 2, f64>::from_rows(&[
        [4., 2.], //
        [2., 3.], //
    ]);
    let mut eng = LdltN::new_with_settings(&A, settings.clone()).unwrap();
    assert_eq!(eng.factor_d(), [4., 2.]);

    let singular = DenseMatrixN::from_rows(&[
        [1., 1.], //
        [1., 1.], //
    ]);
    assert_eq!(eng.compute(&singular), Err(LdltError::ZeroPivot { index: 1 }));
    assert!(LdltN::new_with_settings(&singular, settings).is_err());

    // previous decomposition retained
    assert_eq!(eng.determinant(), 8.);

    // unchecked engine decomposes regardless
    let eng = LdltN::new(&singular);
    assert_eq!(eng.factor_d(), [1., 0.]);
    assert_eq!(eng.positive_inertia(), 1);
}

#[test]
fn test_ldltn_empty() {
    let A = DenseMatrixN::<0, 0, f64>::zeros();
    let eng = LdltN::new(&A);
    assert_eq!(eng.determinant(), 1.);
    assert!(eng.backsub(&[]).is_empty());
    assert_eq!(eng.inverse().size(), (0, 0));
}
