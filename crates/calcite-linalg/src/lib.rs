//! Fixed-rank dense tensor container.
//!
//! The rank is part of the type (`Tensor<2>` is a matrix, `Tensor<3>` a
//! rank-3 tensor); axis sizes are chosen at runtime. Storage is a single
//! contiguous buffer in column-major order: axis 0 varies fastest.

pub mod tensor;

// Re-exports
pub use tensor::constructors::{create_1d, create_2d, create_3d, create_4d};
pub use tensor::Tensor;

use calcite_types::complex::Complex;
use calcite_types::scalar::Real;

/// Rank-`N` tensor of real scalars.
pub type RealTensor<const N: usize> = Tensor<N, Real>;

/// Rank-`N` tensor of complex scalars.
pub type ComplexTensor<const N: usize> = Tensor<N, Complex>;
