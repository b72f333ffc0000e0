#![allow(non_snake_case)]
use crate::algebra::*;

impl<S, T> MatrixMath for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
    T: FloatT,
{
    type T = T;

    fn scale(&mut self, c: T) {
        self.data_mut().scale(c);
    }

    fn rscale(&mut self, r: &[T]) {
        assert_eq!(r.len(), self.ncols());
        for (col, val) in r.iter().enumerate() {
            self.col_slice_mut(col).scale(*val);
        }
    }

    fn norm_inf_diff(&self, B: &Self) -> T {
        assert_eq!(self.size(), B.size());
        self.data().norm_inf_diff(B.data())
    }
}

#[test]
#[rustfmt::skip]
fn test_scalings() {
    let A = Matrix::from(&[
        [-1.,  4.,  6.],
        [ 3., -8.,  7.],
        [ 0.,  4.,  9.],
    ]);

    let rscale = vec![-2., 1., -3.];

    //right scale
    let mut B = A.clone();
    B.rscale(&rscale);
    let Btest = Matrix::from(&[
        [ 2.,  4.,  -18.],
        [-6., -8.,  -21.],
        [ 0.,  4.,  -27.],
    ]);
    assert_eq!(B, Btest);

    //uniform scale
    let mut B = A.clone();
    B.scale(-2.);
    let Btest = Matrix::from(&[
        [ 2., -8., -12.],
        [-6., 16., -14.],
        [ 0., -8., -18.],
    ]);
    assert_eq!(B.norm_inf_diff(&Btest), 0.);
    assert_eq!(A.norm_inf_diff(&Btest), 27.);
}
