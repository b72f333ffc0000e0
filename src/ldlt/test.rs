use super::*;

// tests of the factor and solve kernels, operating directly on
// the column major factor buffer.  Configured as a submodule of
// kernels.rs to expose internals.

#[rustfmt::skip]
fn test_matrix_3x3<T: FloatT>() -> Matrix<T> {
    // A = L*D*L' with D = (4,4,4) and
    // L =
    //[ 1.0   ⋅     ⋅  ]
    //[ 0.5  1.0    ⋅  ]
    //[-0.5  0.5   1.0 ]
    let a: [[f64; 3]; 3] = [
        [ 4., 2., -2.],
        [ 2., 5.,  1.],
        [-2., 1.,  6.],
    ];
    Matrix::new_from_dense(&DenseMatrixN::from_rows(&a.map(|r| r.map(|v| v.as_T()))))
}

macro_rules! generate_test_factor {
    ($fxx:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            let A = test_matrix_3x3::<$fxx>();
            let mut Lx = vec![0.0 as $fxx; 9];

            let info = _factor(&A, &mut Lx, None);
            assert_eq!(info.positive_inertia, 3);
            assert_eq!(info.rejected_pivot, None);

            // lower, diagonal and scratch values are all exact here
            #[rustfmt::skip]
            let expected = vec![
                4.0,  0.5, -0.5,
                2.0,  4.0,  0.5,
               -2.0,  2.0,  4.0,
            ];
            assert_eq!(Lx, expected);

            assert_eq!(_diagonal(3, &Lx), vec![4., 4., 4.]);
            assert_eq!(_determinant(3, &Lx), 64.);
            assert_eq!(_degenerate_pivot(3, &Lx), None);
        }
    };
}

generate_test_factor!(f32, test_factor_f32);
generate_test_factor!(f64, test_factor_f64);

#[test]
fn test_solve_from_factors() {
    let A = test_matrix_3x3::<f64>();
    let mut Lx = vec![0.; 9];
    _factor(&A, &mut Lx, None);

    // A*[1,2,3] = b
    let mut x = vec![2., 15., 18.];

    // step through each pass
    _lsolve(3, &Lx, &mut x);
    assert_eq!(x, vec![2., 14., 12.]);
    _dsolve(3, &Lx, &mut x);
    assert_eq!(x, vec![0.5, 3.5, 3.]);
    _ltsolve(3, &Lx, &mut x);
    assert_eq!(x, vec![1., 2., 3.]);

    let mut x = vec![2., 15., 18.];
    _solve(3, &Lx, &mut x);
    assert_eq!(x, vec![1., 2., 3.]);
}

#[test]
fn test_factor_ignores_upper_triangle() {
    let A = test_matrix_3x3::<f64>();
    let mut B = A.clone();
    B[(0, 1)] = f64::NAN;
    B[(0, 2)] = 100.;
    B[(1, 2)] = f64::INFINITY;

    let mut LxA = vec![0.; 9];
    let mut LxB = vec![f64::NAN; 9];
    _factor(&A, &mut LxA, None);
    _factor(&B, &mut LxB, None);
    assert_eq!(LxA, LxB);
}

#[test]
fn test_factor_zero_pivot() {
    let A = Matrix::from(&[
        [1., 1.], //
        [1., 1.], //
    ]);
    let mut Lx = vec![0.; 4];

    // unchecked factorization runs to completion
    let info = _factor(&A, &mut Lx, None);
    assert_eq!(info.rejected_pivot, None);
    assert_eq!(info.positive_inertia, 1);
    assert_eq!(_degenerate_pivot(2, &Lx), Some(1));
    assert_eq!(_determinant(2, &Lx), 0.);

    // ... and the solve propagates non-finite values
    let mut x = vec![1., 2.];
    _solve(2, &Lx, &mut x);
    assert!(!x.is_finite());

    // checked factorization stops at the bad pivot
    let info = _factor(&A, &mut Lx, Some(0.));
    assert_eq!(info.rejected_pivot, Some(1));

    // near zero pivots are rejected with a tolerance
    let A = Matrix::from(&[
        [1., 1.], //
        [1., 1. + 1e-14], //
    ]);
    let info = _factor(&A, &mut Lx, Some(0.));
    assert_eq!(info.rejected_pivot, None);
    let info = _factor(&A, &mut Lx, Some(1e-12));
    assert_eq!(info.rejected_pivot, Some(1));
}

#[test]
fn test_factor_indefinite() {
    let A = Matrix::from(&[
        [1., 2.], //
        [2., 1.], //
    ]);
    let mut Lx = vec![0.; 4];
    let info = _factor(&A, &mut Lx, Some(0.));
    assert_eq!(info.rejected_pivot, None);
    assert_eq!(info.positive_inertia, 1);
    assert_eq!(_diagonal(2, &Lx), vec![1., -3.]);
    assert_eq!(_determinant(2, &Lx), -3.);
}

#[test]
fn test_empty_factor() {
    let A = Matrix::<f64>::zeros((0, 0));
    let mut Lx: Vec<f64> = vec![];
    let info = _factor(&A, &mut Lx, Some(0.));
    assert_eq!(info.positive_inertia, 0);
    assert_eq!(info.rejected_pivot, None);
    assert_eq!(_determinant(0, &Lx), 1.);

    let mut x: Vec<f64> = vec![];
    _solve(0, &Lx, &mut x);
    assert!(x.is_empty());
}

#[test]
fn test_solve_ignores_scratch_triangle() {
    let A = test_matrix_3x3::<f64>();
    let mut Lx = vec![0.; 9];
    _factor(&A, &mut Lx, None);

    let mut x = vec![2., 15., 18.];
    _solve(3, &Lx, &mut x);
    let det = _determinant(3, &Lx);

    // overwrite the strict upper triangle
    for col in 0..3 {
        for row in 0..col {
            Lx[row + col * 3] = f64::NAN;
        }
    }

    let mut y = vec![2., 15., 18.];
    _solve(3, &Lx, &mut y);
    assert_eq!(x, y);
    assert_eq!(_determinant(3, &Lx), det);
    assert_eq!(_diagonal(3, &Lx), vec![4., 4., 4.]);
    assert_eq!(_degenerate_pivot(3, &Lx), None);
}

#[test]
fn test_degenerate_pivot_detection() {
    // column major 2x2 buffers, pivots on the diagonal
    let Lx = vec![1., 0.5, 0., f64::INFINITY];
    assert_eq!(_degenerate_pivot(2, &Lx), Some(1));
    _warn_degenerate(2, &Lx);

    let Lx = vec![f64::NAN, 0.5, 0., 2.];
    assert_eq!(_degenerate_pivot(2, &Lx), Some(0));

    let Lx = vec![1., 0.5, 0., -2.];
    assert_eq!(_degenerate_pivot(2, &Lx), None);
    _warn_degenerate(2, &Lx);
}

#[test]
fn test_factor_nan_tolerance_rejects() {
    let A = Matrix::from(&[
        [1., 1.], //
        [1., 1.], //
    ]);
    let mut Lx = vec![0.; 4];
    let info = _factor(&A, &mut Lx, Some(f64::NAN));
    assert_eq!(info.rejected_pivot, Some(0));

    let info = _factor(&Matrix::<f64>::identity(2), &mut Lx, Some(f64::NAN));
    assert_eq!(info.rejected_pivot, Some(0));
}
