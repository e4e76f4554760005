//! Shared scalar configuration.
//!
//! A single global choice of floating-point precision plus two
//! process-wide constants, all fixed at build time.

/// Scalar type used by every numeric component.
pub type Real = f64;

/// Maximum number of elements a tensor may hold.
pub const MAX_ELEMENT_COUNT: usize = 10_000_000;

/// Tolerance below which an imaginary part is treated as zero when rendering.
pub const EPSILON: Real = 1e-9;
