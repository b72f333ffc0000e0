//! Dense linear algebra types and operations used by the decomposition engine.
//!
//! Matrices are stored in column major format.  Both dynamically sized
//! ([`Matrix`]) and statically sized ([`DenseMatrixN`]) types are provided,
//! along with borrowed views over existing slices and the transposed
//! ([`Adjoint`]) and [`Symmetric`] views.

mod adjoint;
mod dense;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod symmetric;
mod vecmath;

pub use adjoint::*;
pub use dense::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
pub use symmetric::*;
