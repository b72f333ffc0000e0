#![allow(non_snake_case)]
use ldlt::{algebra::*, ldlt::*};

// a collection of tests to ensure that data of incompatible
// dimension won't be accepted, and that operations on an
// undecomposed engine are refused

fn api_dim_check_data() -> Matrix<f64> {
    Matrix::from(&[
        [4., 1., 0.], //
        [1., 4., 1.], //
        [0., 1., 4.], //
    ])
}

#[test]
fn api_dim_check_working() {
    let A = api_dim_check_data();
    let mut ldlt = Ldlt::new(3);
    assert!(ldlt.compute(&A).is_ok());
    assert!(ldlt.backsub(&[1., 2., 3.]).is_ok());
    assert!(ldlt.backsub_mat(&Matrix::<f64>::zeros((3, 2))).is_ok());
}

#[test]
fn api_dim_check_bad_compute() {
    let mut ldlt = Ldlt::new(3);

    let err = ldlt.compute(&Matrix::<f64>::identity(2)).unwrap_err();
    assert_eq!(
        err,
        LdltError::DimensionMismatch {
            expected: (3, 3),
            found: (2, 2)
        }
    );
    assert!(!ldlt.is_decomposed());

    // non-square
    let err = ldlt.compute(&Matrix::<f64>::zeros((3, 2))).unwrap_err();
    assert!(matches!(err, LdltError::DimensionMismatch { .. }));
}

#[test]
fn api_dim_check_non_square_from_matrix() {
    let err = Ldlt::from_matrix(&Matrix::<f64>::zeros((2, 3))).unwrap_err();
    assert_eq!(
        err,
        LdltError::DimensionMismatch {
            expected: (2, 2),
            found: (2, 3)
        }
    );
}

#[test]
fn api_dim_check_bad_vector() {
    let ldlt = Ldlt::from_matrix(&api_dim_check_data()).unwrap();

    assert_eq!(
        ldlt.backsub(&[1., 2.]),
        Err(LdltError::DimensionMismatch {
            expected: (3, 1),
            found: (2, 1)
        })
    );

    let mut b = vec![1., 2., 3., 4.];
    assert!(ldlt.solve_in_place(&mut b).is_err());
    // nothing written on failure
    assert_eq!(b, vec![1., 2., 3., 4.]);
}

#[test]
fn api_dim_check_bad_matrix() {
    let ldlt = Ldlt::from_matrix(&api_dim_check_data()).unwrap();

    assert_eq!(
        ldlt.backsub_mat(&Matrix::<f64>::zeros((4, 2))),
        Err(LdltError::DimensionMismatch {
            expected: (3, 2),
            found: (4, 2)
        })
    );

    let mut B = Matrix::from(&[[1., 2.], [3., 4.]]);
    let Bcopy = B.clone();
    assert!(ldlt.solve_mat_in_place(&mut B).is_err());
    assert_eq!(B, Bcopy);
}

#[test]
fn api_dim_check_failure_keeps_decomposition() {
    let A = api_dim_check_data();
    let mut ldlt = Ldlt::from_matrix(&A).unwrap();
    let det = ldlt.determinant().unwrap();

    assert!(ldlt.compute(&Matrix::<f64>::identity(4)).is_err());
    assert!(ldlt.is_decomposed());
    assert_eq!(ldlt.determinant().unwrap(), det);
    assert!(ldlt.reconstruct().unwrap().norm_inf_diff(&A) <= 1e-14);
}

#[test]
fn api_not_decomposed() {
    let ldlt = Ldlt::<f64>::new(3);
    assert!(!ldlt.is_decomposed());
    assert_eq!(ldlt.size(), 3);

    assert_eq!(ldlt.backsub(&[1., 2., 3.]), Err(LdltError::NotDecomposed));
    assert_eq!(
        ldlt.backsub_mat(&Matrix::<f64>::identity(3)),
        Err(LdltError::NotDecomposed)
    );
    assert_eq!(ldlt.inverse(), Err(LdltError::NotDecomposed));
    assert_eq!(ldlt.determinant(), Err(LdltError::NotDecomposed));
    assert_eq!(ldlt.factor_l(), Err(LdltError::NotDecomposed));
    assert_eq!(ldlt.factor_d(), Err(LdltError::NotDecomposed));
    assert_eq!(ldlt.positive_inertia(), Err(LdltError::NotDecomposed));
    assert_eq!(ldlt.reconstruct(), Err(LdltError::NotDecomposed));

    let mut b = [1., 2., 3.];
    assert_eq!(ldlt.solve_in_place(&mut b), Err(LdltError::NotDecomposed));
}

#[test]
fn api_state_checked_before_dimensions() {
    let ldlt = Ldlt::<f64>::new(3);
    assert_eq!(ldlt.backsub(&[1., 2.]), Err(LdltError::NotDecomposed));
    assert_eq!(
        ldlt.backsub_mat(&Matrix::<f64>::zeros((5, 1))),
        Err(LdltError::NotDecomposed)
    );
}

#[test]
fn api_error_display() {
    let err = LdltError::DimensionMismatch {
        expected: (3, 1),
        found: (2, 1),
    };
    assert_eq!(
        err.to_string(),
        "Dimension mismatch: expected (3, 1), found (2, 1)"
    );
    assert_eq!(
        LdltError::ZeroPivot { index: 4 }.to_string(),
        "Matrix factorization produced a degenerate pivot at index 4"
    );
}
