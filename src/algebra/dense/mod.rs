mod core;
mod fixed;
pub use self::fixed::*;
mod gemm;
pub use self::gemm::*;
mod gemv;
pub use self::gemv::*;
mod matrix_math;
mod types;
pub use self::types::*;
