use super::{FloatT, VectorMath};
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;
    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        let iter = zip(self, y);
        let op = |(&x, &y)| x * y;
        accumulate_pairwise(iter, op)
    }

    // Returns infinity norm
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    // max absolute difference (used for unit testing).  NaN
    // propagates as in norm_inf
    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        let mut out = T::zero();
        for v in zip(self, b).map(|(&x, &y)| T::abs(x - y)) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }
}

// ---------------------------------------------------------------------
// generic pairwise accumulator utility for sums and dot products.
// Pairwise summation keeps the rounding error growth logarithmic
// in the vector length rather than linear

fn accumulate_pairwise<T, I, A, F>(x: I, op: F) -> T
where
    T: FloatT,
    I: IntoIterator<Item = A> + Clone,
    I::IntoIter: ExactSizeIterator,
    F: Fn(A) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    let n = x.clone().into_iter().len();
    return if n == 0 {
        T::zero()
    } else {
        accumulate_pairwise_inner(x, &op, 0, n)
    };

    fn accumulate_pairwise_inner<T, I, A, F>(x: I, op: &F, i1: usize, n: usize) -> T
    where
        T: FloatT,
        I: IntoIterator<Item = A> + Clone,
        I::IntoIter: ExactSizeIterator,
        F: Fn(A) -> T,
    {
        if n < BASE_CASE_DIM {
            x.into_iter()
                .skip(i1)
                .take(n)
                .fold(T::zero(), |acc, x| acc + op(x))
        } else {
            let n2 = n / 2;
            accumulate_pairwise_inner(x.clone(), op, i1, n2)
                + accumulate_pairwise_inner(x, op, i1 + n2, n - n2)
        }
    }
}

#[test]
fn test_dot_product() {
    let x = vec![1., 2., 3., 4.];
    let y = vec![4., 5., 6., 7.];
    assert_eq!(x.dot(&y), 60.);
    assert_eq!(x[0..0].dot(&y[0..0]), 0.);
}

#[test]
fn test_dot() {
    let maxlen = 128 * 7 + 1; //awkward length to test base case
    let x: Vec<f64> = (1..=maxlen).map(|x| x as f64).collect();
    let y: Vec<f64> = (1..=maxlen).map(|y| (y as f64 - 3.0) / 2.0).collect();

    for i in 0..=x.len() {
        let xt = &x[0..i];
        let yt = &y[0..i];
        let dot1 = zip(xt, yt).fold(0.0, |acc, (&x, &y)| acc + x * y);
        let dot2 = xt.dot(yt);
        assert_eq!(dot1, dot2);
    }
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 2., 3.];
    let x = vec![2., -1., 0.5];
    y.axpby(-2.0, &x, 1.0);
    assert_eq!(y, vec![-3., 4., 2.]);

    y.set(0.).axpby(1.0, &x, 3.0);
    assert_eq!(y, x);
}

#[test]
fn test_norms_and_finite() {
    let mut x = vec![1., -7., 3.];
    assert_eq!(x.norm_inf(), 7.);
    assert_eq!(x.norm_inf_diff(&[1., -6., 5.]), 2.);
    assert!(x.is_finite());

    x.scale(2.);
    assert_eq!(x, vec![2., -14., 6.]);

    x[1] = f64::INFINITY;
    assert!(!x.is_finite());
    x[1] = f64::NAN;
    assert!(x.norm_inf().is_nan());
    assert!(x.norm_inf_diff(&[2., -14., 6.]).is_nan());
    assert!([0., 1.].norm_inf_diff(&[f64::NAN, 1.]).is_nan());

    let mut z = vec![0.; 3];
    z.copy_from(&[4., 5., 6.]);
    assert_eq!(z, vec![4., 5., 6.]);
}
