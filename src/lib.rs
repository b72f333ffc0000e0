//! __ldlt__ is a Rust implementation of the square-root-free Cholesky
//! decomposition of a dense symmetric matrix
//!
//! $$
//! A = LDL^T
//! $$
//!
//! with $L$ unit lower triangular and $D$ diagonal.  Unlike the classical
//! $LL^T$ Cholesky factorization, no square roots are taken, so the
//! decomposition also exists for many indefinite matrices.
//!
//! The decomposition is used to
//!
//! * solve linear systems $Ax = b$ for one or several right hand sides,
//! * compute the inverse $A^{-1}$,
//! * compute the determinant $\det(A) = \prod_i D_{ii}$.
//!
//! Matrices are supplied through the dense types in [`algebra`], and the
//! decomposition is performed by the engines in [`ldlt`](crate::ldlt):
//!
//! ```
//! use ldlt::algebra::*;
//! use ldlt::ldlt::*;
//!
//! let A = Matrix::from(&[
//!     [4., 2.],
//!     [2., 3.],
//! ]);
//!
//! let mut ldlt = Ldlt::new(2);
//! ldlt.compute(&A).unwrap();
//!
//! let Ainv = ldlt.inverse().unwrap();
//! assert_eq!(Ainv, Matrix::from(&[[0.375, -0.25], [-0.25, 0.5]]));
//! ```
//!
//! The decomposition performs no pivoting.  Numerically degenerate
//! inputs produce non-finite results unless pivot checking is enabled
//! in [`LdltSettings`](crate::ldlt::LdltSettings).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod ldlt;
