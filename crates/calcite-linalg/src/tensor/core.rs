//! Tensor storage, offsets and element access.

use calcite_types::error::{MathError, Result};
use calcite_types::scalar::{Real, MAX_ELEMENT_COUNT};
use std::ops::{Index, IndexMut};

/// A dense tensor of rank `N` with runtime-sized axes.
///
/// The buffer is laid out column-major: `offsets[0] = 1` and
/// `offsets[i] = offsets[i - 1] * dims[i - 1]`, so axis 0 varies fastest.
/// Two tensors with equal axis sizes are index-compatible.
///
/// The tensor exclusively owns its buffer; `clone()` deep-copies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<const N: usize, T = Real> {
    /// Number of rows, columns and further axis sizes
    dims: [usize; N],
    /// Per-axis multipliers for linear index computations
    offsets: [usize; N],
    /// Contiguous element buffer, `numel` entries
    data: Vec<T>,
    /// Cached product of all axis sizes
    numel: usize,
}

impl<const N: usize, T> Tensor<N, T> {
    /// Create a tensor with the given axis sizes, every slot holding `init`.
    ///
    /// Fails with [`MathError::CapacityExceeded`] when the element count
    /// would exceed [`MAX_ELEMENT_COUNT`]; a product exactly at the limit
    /// succeeds.
    pub fn filled(dims: [usize; N], init: T) -> Result<Self>
    where
        T: Clone,
    {
        let numel = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .filter(|&n| n <= MAX_ELEMENT_COUNT)
            .ok_or_else(|| MathError::capacity_exceeded(&dims))?;

        let mut offsets = [0usize; N];
        if N > 0 {
            offsets[0] = 1;
            for i in 1..N {
                offsets[i] = offsets[i - 1] * dims[i - 1];
            }
        }

        Ok(Tensor {
            dims,
            offsets,
            data: vec![init; numel],
            numel,
        })
    }

    /// Create a tensor with the given axis sizes, default-filled.
    pub fn new(dims: [usize; N]) -> Result<Self>
    where
        T: Clone + Default,
    {
        Self::filled(dims, T::default())
    }

    /// Size of axis 0.
    ///
    /// Panics for a rank-0 tensor; use [`dim`](Tensor::dim) for a checked
    /// query.
    pub fn rows(&self) -> usize {
        self.dims[0]
    }

    /// Size of axis 1. Only meaningful for rank >= 2.
    ///
    /// Panics for lower ranks; use [`dim`](Tensor::dim) for a checked query.
    pub fn cols(&self) -> usize {
        self.dims[1]
    }

    /// Size of the axis at the given 1-based position.
    ///
    /// Fails with [`MathError::InvalidDimension`] when `i` is 0 or greater
    /// than the rank.
    pub fn dim(&self, i: usize) -> Result<usize> {
        if i >= 1 && i <= N {
            Ok(self.dims[i - 1])
        } else {
            Err(MathError::InvalidDimension { dim: i, rank: N })
        }
    }

    /// All axis sizes, in order.
    pub fn dims(&self) -> [usize; N] {
        self.dims
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.numel
    }

    /// Rank of the tensor.
    pub const fn rank(&self) -> usize {
        N
    }

    /// Whether this is a rank-1 tensor.
    pub const fn is_vector(&self) -> bool {
        N == 1
    }

    /// Whether this is a rank-2 tensor.
    pub const fn is_matrix(&self) -> bool {
        N == 2
    }

    /// The element buffer in linear (column-major) order.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Per-axis offsets used for linear index computations.
    ///
    /// `offsets[0] = 1`; the offsets of two tensors with equal axis sizes
    /// are identical.
    pub fn offsets(&self) -> [usize; N] {
        self.offsets
    }

    /// Linear buffer position of a multi-axis index tuple.
    ///
    /// Individual indices are not checked against their axis size here.
    fn linear_index(&self, indices: [usize; N]) -> Result<usize> {
        if N == 0 {
            return Err(MathError::RankZeroAccess);
        }
        Ok(indices
            .iter()
            .zip(self.offsets.iter())
            .map(|(&index, &offset)| index * offset)
            .sum())
    }

    /// Checked element access.
    ///
    /// Unlike the `[]` operator, every index is validated against its axis
    /// size, so a wrapped-but-in-buffer offset cannot read the wrong slot.
    pub fn get(&self, indices: [usize; N]) -> Result<&T> {
        self.check_bounds(indices)?;
        let index = self.linear_index(indices)?;
        Ok(&self.data[index])
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, indices: [usize; N]) -> Result<&mut T> {
        self.check_bounds(indices)?;
        let index = self.linear_index(indices)?;
        Ok(&mut self.data[index])
    }

    fn check_bounds(&self, indices: [usize; N]) -> Result<()> {
        for axis in 0..N {
            if indices[axis] >= self.dims[axis] {
                return Err(MathError::IndexOutOfBounds {
                    index: indices[axis],
                    axis,
                    size: self.dims[axis],
                });
            }
        }
        Ok(())
    }
}

/// Unchecked-by-axis element access: the linear offset is computed without
/// validating each index against its axis size. An out-of-range tuple whose
/// offset still lands inside the buffer reads the wrong slot; one that does
/// not panics at the buffer boundary.
impl<const N: usize, T> Index<[usize; N]> for Tensor<N, T> {
    type Output = T;

    fn index(&self, indices: [usize; N]) -> &T {
        match self.linear_index(indices) {
            Ok(index) => &self.data[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const N: usize, T> IndexMut<[usize; N]> for Tensor<N, T> {
    fn index_mut(&mut self, indices: [usize; N]) -> &mut T {
        match self.linear_index(indices) {
            Ok(index) => &mut self.data[index],
            Err(err) => panic!("{err}"),
        }
    }
}
