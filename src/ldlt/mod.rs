//! Square-root-free Cholesky ($LDL^T$) decomposition of dense symmetric matrices.
//!
//! Two engines are provided over a common set of column major kernels:
//!
//! - [`Ldlt`]: dimensions fixed at construction time but known only at runtime.
//!   All operations check their inputs and return [`LdltError`] on mismatch.
//! - [`LdltN`]: dimensions fixed at compile time.  Dimension agreement is
//!   enforced by the type system.
//!
//! Only the lower triangle and diagonal of an input matrix are referenced.
//! Matrices stored in upper triangular form can be decomposed through a
//! [`Symmetric`](crate::algebra::Symmetric) view.
//!
//! No pivoting is performed.  By default a zero pivot is not an error and
//! produces non-finite values in the factors and all subsequent solutions.
//! Setting [`check_pivots`](LdltSettings::check_pivots) rejects such
//! factorizations instead.

mod engine;
mod error;
mod fixed;
mod kernels;
mod settings;

pub use engine::*;
pub use error::*;
pub use fixed::*;
pub use settings::*;
