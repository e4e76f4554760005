//! Diagnostic text rendering for tensors.
//!
//! Rank-1 tensors print one value per line, rank-2 tensors print rows of
//! space-separated values. Ranks 3 and above render the header only;
//! higher-rank visualization is unimplemented.

use super::core::Tensor;
use std::fmt;

impl<const N: usize, T: fmt::Display> fmt::Display for Tensor<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}D-Tensor ({} elements)", N, self.numel())?;
        writeln!(f)?;
        if N == 1 {
            for row in 0..self.numel() {
                writeln!(f, "{}", self.data()[row])?;
            }
        }
        if N == 2 {
            let rows = self.rows();
            let cols = self.cols();
            for row in 0..rows {
                for col in 0..cols {
                    // column-major: axis 0 is the fast axis
                    write!(f, "{} ", self.data()[row + col * rows])?;
                }
                writeln!(f)?;
            }
        }
        writeln!(f)
    }
}
