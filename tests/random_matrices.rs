#![allow(non_snake_case)]
use ldlt::{algebra::*, ldlt::*};
use rand::{rngs::StdRng, Rng, SeedableRng};

// property checks against random symmetric positive definite
// matrices of the form A = G'G + n*I

fn random_matrix(rng: &mut StdRng, m: usize, n: usize) -> Matrix<f64> {
    let data = (0..m * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    Matrix::new((m, n), data)
}

fn random_spd(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let G = random_matrix(rng, n, n);
    let mut A = Matrix::<f64>::identity(n);
    A.mul(&G.t(), &G, 1.0, n as f64);
    A
}

// determinant by cofactor expansion along the first row
fn cofactor_det(A: &Matrix<f64>) -> f64 {
    let n = A.nrows();
    if n == 0 {
        return 1.0;
    }
    let mut det = 0.0;
    for j in 0..n {
        let mut minor = Matrix::zeros((n - 1, n - 1));
        for r in 1..n {
            for (c, cc) in (0..n).filter(|&c| c != j).enumerate() {
                minor[(r - 1, c)] = A[(r, cc)];
            }
        }
        let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * A[(0, j)] * cofactor_det(&minor);
    }
    det
}

const SIZES: [usize; 6] = [1, 2, 3, 5, 8, 20];

#[test]
fn random_reconstruction() {
    let mut rng = StdRng::seed_from_u64(1234);

    for n in SIZES {
        let A = random_spd(&mut rng, n);
        let ldlt = Ldlt::from_matrix(&A).unwrap();
        assert_eq!(ldlt.positive_inertia().unwrap(), n);

        let M = ldlt.reconstruct().unwrap();
        let scale = A.data().norm_inf();
        assert!(M.norm_inf_diff(&A) <= 1e-10 * scale);
    }
}

#[test]
fn random_solve() {
    let mut rng = StdRng::seed_from_u64(4321);

    for n in SIZES {
        let A = random_spd(&mut rng, n);
        let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut b = vec![0.0; n];
        A.gemv(&x, &mut b, 1.0, 0.0);

        let ldlt = Ldlt::from_matrix(&A).unwrap();
        let xsol = ldlt.backsub(&b).unwrap();
        assert!(xsol.norm_inf_diff(&x) <= 1e-10);
    }
}

#[test]
fn random_batch_solve() {
    let mut rng = StdRng::seed_from_u64(42);

    for n in SIZES {
        let A = random_spd(&mut rng, n);
        let B = random_matrix(&mut rng, n, 4);

        let ldlt = Ldlt::from_matrix(&A).unwrap();
        let X = ldlt.backsub_mat(&B).unwrap();
        assert_eq!(X.size(), (n, 4));

        // A*X = B
        let mut AX = Matrix::<f64>::zeros((n, 4));
        AX.mul(&A, &X, 1.0, 0.0);
        assert!(AX.norm_inf_diff(&B) <= 1e-10);

        // matches column by column solves
        for col in 0..4 {
            let x = ldlt.backsub(B.col_slice(col)).unwrap();
            assert!(x.norm_inf_diff(X.col_slice(col)) <= 1e-12);
        }
    }
}

#[test]
fn random_inverse() {
    let mut rng = StdRng::seed_from_u64(7);

    for n in SIZES {
        let A = random_spd(&mut rng, n);
        let ldlt = Ldlt::from_matrix(&A).unwrap();
        let Ainv = ldlt.inverse().unwrap();

        let mut I = Matrix::<f64>::zeros((n, n));
        I.mul(&A, &Ainv, 1.0, 0.0);
        assert!(I.norm_inf_diff(&Matrix::identity(n)) <= 1e-10);

        I.mul(&Ainv, &A, 1.0, 0.0);
        assert!(I.norm_inf_diff(&Matrix::identity(n)) <= 1e-10);
    }
}

#[test]
fn random_determinant() {
    let mut rng = StdRng::seed_from_u64(99);

    // cofactor expansion is factorial in n
    for n in [1, 2, 3, 4, 5, 6] {
        let A = random_spd(&mut rng, n);
        let ldlt = Ldlt::from_matrix(&A).unwrap();

        let det = ldlt.determinant().unwrap();
        let expected = cofactor_det(&A);
        assert!((det - expected).abs() <= 1e-10 * expected.abs());
    }
}

#[test]
fn random_fixed_size() {
    let mut rng = StdRng::seed_from_u64(2024);
    let A = random_spd(&mut rng, 4);

    let mut An = DenseMatrixN::<4, 4, f64>::zeros();
    An.data_mut().copy_from_slice(A.data());

    let fixed = LdltN::new(&An);
    let dynamic = Ldlt::from_matrix(&A).unwrap();

    assert_eq!(fixed.factor_d().to_vec(), dynamic.factor_d().unwrap());
    assert_eq!(fixed.determinant(), dynamic.determinant().unwrap());
    assert_eq!(Matrix::from(fixed.inverse()), dynamic.inverse().unwrap());

    let b = [1., -2., 3., -4.];
    assert_eq!(fixed.backsub(&b).to_vec(), dynamic.backsub(&b).unwrap());
}
