#![allow(non_snake_case)]
use super::kernels::*;
use super::{LdltError, LdltSettings};
use crate::algebra::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FactorState {
    Empty,
    Decomposed,
}

/// Performs $LDL^T$ decomposition of a dense symmetric matrix
/// whose size is determined at runtime.
///
/// The engine is created either from a size only, in which case
/// [`compute`](Ldlt::compute) must be called before any other operation,
/// or directly from a matrix via [`from_matrix`](Ldlt::from_matrix).
///
/// ```
/// use ldlt::algebra::Matrix;
/// use ldlt::ldlt::Ldlt;
///
/// let A = Matrix::from(&[
///     [4., 2.],
///     [2., 3.],
/// ]);
/// let ldlt = Ldlt::from_matrix(&A).unwrap();
/// assert_eq!(ldlt.determinant().unwrap(), 8.);
/// assert_eq!(ldlt.backsub(&[1., 1.]).unwrap(), vec![0.125, 0.25]);
/// ```

#[derive(Debug, Clone)]
pub struct Ldlt<T: FloatT = f64> {
    // L in strict tril, D on the diagonal, scratch in strict triu
    factors: Matrix<T>,
    positive_inertia: usize,
    state: FactorState,
    settings: LdltSettings<T>,
}

impl<T> Ldlt<T>
where
    T: FloatT,
{
    /// Empty engine for matrices of size `n x n`
    pub fn new(n: usize) -> Self {
        Self::with_settings(n, LdltSettings::default())
    }

    pub fn with_settings(n: usize, settings: LdltSettings<T>) -> Self {
        Self {
            factors: Matrix::zeros((n, n)),
            positive_inertia: 0,
            state: FactorState::Empty,
            settings,
        }
    }

    /// Engine sized to and decomposing the square matrix `A`
    pub fn from_matrix<M>(A: &M) -> Result<Self, LdltError>
    where
        M: DenseMatrix<T>,
    {
        Self::from_matrix_with_settings(A, LdltSettings::default())
    }

    pub fn from_matrix_with_settings<M>(A: &M, settings: LdltSettings<T>) -> Result<Self, LdltError>
    where
        M: DenseMatrix<T>,
    {
        let mut ldlt = Self::with_settings(A.nrows(), settings);
        ldlt.compute(A)?;
        Ok(ldlt)
    }

    /// Decomposes `A`, overwriting any previous decomposition.
    ///
    /// Only the lower triangle and diagonal of `A` are referenced.  If
    /// pivot checking is enabled and the decomposition fails, the engine
    /// is left in the undecomposed state.
    pub fn compute<M>(&mut self, A: &M) -> Result<(), LdltError>
    where
        M: DenseMatrix<T>,
    {
        let n = self.size();
        if A.size() != (n, n) {
            return Err(LdltError::DimensionMismatch {
                expected: (n, n),
                found: A.size(),
            });
        }

        self.state = FactorState::Empty;

        let Lx = self.factors.data_mut();
        let info = _factor(A, Lx, self.settings.pivot_check());

        if let Some(index) = info.rejected_pivot {
            log::debug!("LDL^T factorization rejected pivot at index {}", index);
            return Err(LdltError::ZeroPivot { index });
        }
        if self.settings.warn_degenerate {
            _warn_degenerate(n, self.factors.data());
        }

        self.positive_inertia = info.positive_inertia;
        self.state = FactorState::Decomposed;
        Ok(())
    }

    /// Solves `Ax = b`, returning `x`
    pub fn backsub(&self, b: &[T]) -> Result<Vec<T>, LdltError> {
        let mut x = b.to_vec();
        self.solve_in_place(&mut x)?;
        Ok(x)
    }

    /// Solves `Ax = b` in place, with `x` overwriting `b`
    pub fn solve_in_place(&self, b: &mut [T]) -> Result<(), LdltError> {
        self.check_decomposed()?;
        let n = self.size();
        if b.len() != n {
            return Err(LdltError::DimensionMismatch {
                expected: (n, 1),
                found: (b.len(), 1),
            });
        }
        _solve(n, self.factors.data(), b);
        Ok(())
    }

    /// Solves `AX = B` for all columns of `B`, returning `X`
    pub fn backsub_mat<M>(&self, B: &M) -> Result<Matrix<T>, LdltError>
    where
        M: DenseMatrix<T>,
    {
        self.check_decomposed()?;
        self.check_rhs_rows(B.size())?;
        let mut X = Matrix::new_from_dense(B);
        self.solve_columns(&mut X);
        Ok(X)
    }

    /// Solves `AX = B` in place, with `X` overwriting `B`
    pub fn solve_mat_in_place<S>(&self, B: &mut DenseStorageMatrix<S, T>) -> Result<(), LdltError>
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        self.check_decomposed()?;
        self.check_rhs_rows(B.size())?;
        self.solve_columns(B);
        Ok(())
    }

    /// Inverse of the decomposed matrix.
    ///
    /// Computed by solving against the identity.  Prefer
    /// [`backsub`](Ldlt::backsub) when only a solution is needed.
    pub fn inverse(&self) -> Result<Matrix<T>, LdltError> {
        self.check_decomposed()?;
        let mut X = Matrix::identity(self.size());
        self.solve_columns(&mut X);
        Ok(X)
    }

    /// Determinant of the decomposed matrix, i.e. the product of the pivots
    pub fn determinant(&self) -> Result<T, LdltError> {
        self.check_decomposed()?;
        Ok(_determinant(self.size(), self.factors.data()))
    }

    /// dimension `n` of the `n x n` matrices handled by this engine
    pub fn size(&self) -> usize {
        self.factors.nrows()
    }

    pub fn is_decomposed(&self) -> bool {
        self.state == FactorState::Decomposed
    }

    pub fn settings(&self) -> &LdltSettings<T> {
        &self.settings
    }

    /// Unit lower triangular factor `L`
    pub fn factor_l(&self) -> Result<Matrix<T>, LdltError> {
        self.check_decomposed()?;
        let n = self.size();
        let mut L = Matrix::identity(n);
        for j in 0..n {
            for i in j + 1..n {
                L[(i, j)] = self.factors[(i, j)];
            }
        }
        Ok(L)
    }

    /// Diagonal factor `D`, i.e. the pivots
    pub fn factor_d(&self) -> Result<Vec<T>, LdltError> {
        self.check_decomposed()?;
        Ok(_diagonal(self.size(), self.factors.data()))
    }

    /// Number of positive pivots.  Equal to the matrix size if and only if
    /// the decomposed matrix is numerically positive definite.
    pub fn positive_inertia(&self) -> Result<usize, LdltError> {
        self.check_decomposed()?;
        Ok(self.positive_inertia)
    }

    /// Computes `L*D*L'` from the stored factors
    pub fn reconstruct(&self) -> Result<Matrix<T>, LdltError> {
        let L = self.factor_l()?;
        let D = self.factor_d()?;
        let mut LD = L.clone();
        LD.rscale(&D);

        let n = self.size();
        let mut A = Matrix::zeros((n, n));
        A.mul(&LD, &L.t(), T::one(), T::zero());
        Ok(A)
    }

    fn check_decomposed(&self) -> Result<(), LdltError> {
        match self.state {
            FactorState::Decomposed => Ok(()),
            FactorState::Empty => Err(LdltError::NotDecomposed),
        }
    }

    fn check_rhs_rows(&self, size: (usize, usize)) -> Result<(), LdltError> {
        let n = self.size();
        if size.0 != n {
            return Err(LdltError::DimensionMismatch {
                expected: (n, size.1),
                found: size,
            });
        }
        Ok(())
    }

    // caller checks that B has n rows
    fn solve_columns<S>(&self, B: &mut DenseStorageMatrix<S, T>)
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        let n = self.size();
        let Lx = self.factors.data();
        for col in 0..B.ncols() {
            _solve(n, Lx, B.col_slice_mut(col));
        }
    }
}

macro_rules! generate_test_ldlt {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            #[rustfmt::skip]
            let S = Matrix::<$fxx>::from(
            &[[ 8., -2., 4.],
              [-2., 12., 2.],
              [ 4.,  2., 6.]]);

            let mut eng = Ldlt::<$fxx>::new(3);
            assert!(!eng.is_decomposed());
            assert!(eng.compute(&S).is_ok());
            assert!(eng.is_decomposed());
            assert_eq!(eng.positive_inertia().unwrap(), 3);

            let M = eng.reconstruct().unwrap();
            assert!(M.norm_inf_diff(&S) < (1e-8 as $fxx).$tolfn());

            // now try to solve with multiple RHS
            let X = Matrix::<$fxx>::from(&[
                [1., 2.], //
                [3., 4.], //
                [5., 6.],
            ]);
            let mut B = Matrix::<$fxx>::from(&[
                [22., 32.], //
                [44., 56.], //
                [40., 52.],
            ]);

            assert_eq!(eng.backsub_mat(&B).unwrap().size(), (3, 2));
            eng.solve_mat_in_place(&mut B).unwrap();
            assert!(B.norm_inf_diff(&X) <= (1e-10 as $fxx).$tolfn());

            let x = eng.backsub(&[22., 44., 40.]).unwrap();
            assert!(x.norm_inf_diff(X.col_slice(0)) <= (1e-10 as $fxx).$tolfn());

            let det = eng.determinant().unwrap();
            assert!((det / 296. - 1.).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_ldlt!(f32, test_ldlt_f32, sqrt);
generate_test_ldlt!(f64, test_ldlt_f64, abs);

#[test]
fn test_ldlt_factors() {
    let A = Matrix::from(&[
        [4., 2.], //
        [2., 3.], //
    ]);
    let eng = Ldlt::from_matrix(&A).unwrap();

    assert_eq!(eng.factor_d().unwrap(), vec![4., 2.]);
    assert_eq!(eng.factor_l().unwrap(), Matrix::from(&[[1., 0.], [0.5, 1.]]));

    // scratch triangle is not part of the factors
    assert_eq!(eng.factors[(0, 1)], 2.);
}

#[test]
fn test_ldlt_failed_compute_resets_state() {
    let settings = crate::ldlt::LdltSettingsBuilder::<f64>::default()
        .check_pivots(true)
        .build()
        .unwrap();

    let mut eng = Ldlt::with_settings(2, settings);
    eng.compute(&Matrix::identity(2)).unwrap();
    assert!(eng.is_decomposed());

    let singular = Matrix::from(&[
        [1., 1.], //
        [1., 1.], //
    ]);
    assert_eq!(
        eng.compute(&singular),
        Err(LdltError::ZeroPivot { index: 1 })
    );
    assert!(!eng.is_decomposed());
    assert_eq!(eng.determinant(), Err(LdltError::NotDecomposed));

    // a dimension error leaves an existing decomposition intact
    eng.compute(&Matrix::identity(2)).unwrap();
    assert!(eng.compute(&Matrix::identity(3)).is_err());
    assert_eq!(eng.determinant(), Ok(1.));
}
