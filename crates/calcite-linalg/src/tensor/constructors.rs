//! Convenience factories for ranks 1 through 4.
//!
//! Positional size arguments instead of an explicit axis array.

use super::core::Tensor;
use calcite_types::error::Result;

/// Create a rank-1 tensor of `rows` elements filled with `init`.
pub fn create_1d<T: Clone>(rows: usize, init: T) -> Result<Tensor<1, T>> {
    Tensor::filled([rows], init)
}

/// Create a rank-2 tensor of `rows` x `cols` elements filled with `init`.
pub fn create_2d<T: Clone>(rows: usize, cols: usize, init: T) -> Result<Tensor<2, T>> {
    Tensor::filled([rows, cols], init)
}

/// Create a rank-3 tensor filled with `init`.
pub fn create_3d<T: Clone>(
    first: usize,
    second: usize,
    third: usize,
    init: T,
) -> Result<Tensor<3, T>> {
    Tensor::filled([first, second, third], init)
}

/// Create a rank-4 tensor filled with `init`.
pub fn create_4d<T: Clone>(
    first: usize,
    second: usize,
    third: usize,
    fourth: usize,
    init: T,
) -> Result<Tensor<4, T>> {
    Tensor::filled([first, second, third, fourth], init)
}
