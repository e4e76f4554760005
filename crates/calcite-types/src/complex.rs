//! Complex number arithmetic.
//!
//! This module provides the `Complex` value type and its operations:
//! - Accessors: real, imag, abs, abs2, arg, conj
//! - Transcendentals: exp, ln, sin, cos, tan, asin, acos, atan, powf, powc, sqrt
//! - Operators: `+ - * /` against complex and real operands, in both orders
//!
//! Failure conditions are not validated: division by zero, the logarithm of
//! zero and friends propagate IEEE-754 Inf/NaN through the components.

use crate::scalar::{Real, EPSILON};
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A complex number with double-precision real and imaginary parts.
///
/// Plain value type: copies are independent, there is no shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    /// Real part
    pub re: Real,
    /// Imaginary part
    pub im: Real,
}

impl Complex {
    /// The imaginary unit.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Create a new complex number from real and imaginary parts.
    pub const fn new(re: Real, im: Real) -> Self {
        Complex { re, im }
    }

    /// Get the real part.
    pub const fn real(&self) -> Real {
        self.re
    }

    /// Get the imaginary part.
    pub const fn imag(&self) -> Real {
        self.im
    }

    /// Squared magnitude, `re² + im²`.
    ///
    /// Cheaper than [`abs`](Complex::abs) for callers that only need an
    /// ordering.
    pub fn abs2(self) -> Real {
        self.re * self.re + self.im * self.im
    }

    /// Magnitude.
    pub fn abs(self) -> Real {
        self.abs2().sqrt()
    }

    /// Argument (angle to the real axis), in `(-π, π]`.
    pub fn arg(self) -> Real {
        self.im.atan2(self.re)
    }

    /// Complex conjugate.
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    // ========================================================================
    // Transcendentals
    // ========================================================================

    /// Exponential map, via Euler's formula.
    pub fn exp(self) -> Complex {
        self.re.exp() * (self.im.cos() + Complex::I * self.im.sin())
    }

    /// Natural logarithm, principal branch.
    ///
    /// `ln(0)` has a `-inf` real part, matching the scalar `ln`.
    pub fn ln(self) -> Complex {
        Complex::new(self.abs().ln(), self.arg())
    }

    /// Sine.
    pub fn sin(self) -> Complex {
        Complex::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    /// Cosine.
    pub fn cos(self) -> Complex {
        Complex::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    /// Tangent, as `sin / cos`.
    pub fn tan(self) -> Complex {
        self.sin() / self.cos()
    }

    /// Arc-sine, `-i·ln(i·z + sqrt(1 - z²))`.
    pub fn asin(self) -> Complex {
        let i = Complex::I;
        -i * (i * self + (1.0 - self * self).sqrt()).ln()
    }

    /// Arc-cosine, `-i·ln(z + sqrt(z² - 1))`.
    pub fn acos(self) -> Complex {
        -Complex::I * (self + (self * self - 1.0).sqrt()).ln()
    }

    /// Arc-tangent, `(i/2)·(ln(1 - i·z) - ln(1 + i·z))`.
    pub fn atan(self) -> Complex {
        let i = Complex::I;
        let one = Complex::new(1.0, 0.0);
        (i / Complex::new(2.0, 0.0)) * ((one - i * self).ln() - (one + i * self).ln())
    }

    /// Power with a real exponent, `exp(w·ln(z))`.
    pub fn powf(self, w: Real) -> Complex {
        (w * self.ln()).exp()
    }

    /// Power with a complex exponent, `exp(w·ln(z))`.
    pub fn powc(self, w: Complex) -> Complex {
        (w * self.ln()).exp()
    }

    /// Square root, principal branch.
    ///
    /// Half-angle formula; `v` carries the sign of the imaginary part, and
    /// the non-negative branch is taken when the imaginary part is exactly
    /// zero.
    pub fn sqrt(self) -> Complex {
        let r = self.abs();
        let u = ((r + self.re) / 2.0).sqrt();
        let mut v = ((r - self.re) / 2.0).sqrt();
        if self.im < 0.0 {
            v = -v;
        }
        Complex::new(u, v)
    }
}

impl From<Real> for Complex {
    fn from(re: Real) -> Self {
        Complex::new(re, 0.0)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

// ============================================================================
// Compound assignment
//
// The compound operators are the single source of truth for each formula;
// every binary operator below copies its left operand and applies one of
// these. `rhs` is taken by value, so `z *= z` sees a snapshot of the
// right-hand side. The stored real part is overwritten only after the
// imaginary part has been computed from the stale value.
// ============================================================================

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        self.re += rhs.re;
        self.im += rhs.im;
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        self.re -= rhs.re;
        self.im -= rhs.im;
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Complex) {
        let re = self.re * rhs.re - self.im * rhs.im;
        self.im = self.im * rhs.re + self.re * rhs.im;
        self.re = re;
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, rhs: Complex) {
        let div = rhs.abs2();
        let re = (self.re * rhs.re + self.im * rhs.im) / div;
        self.im = (self.im * rhs.re - self.re * rhs.im) / div;
        self.re = re;
    }
}

impl AddAssign<Real> for Complex {
    fn add_assign(&mut self, rhs: Real) {
        self.re += rhs;
    }
}

impl SubAssign<Real> for Complex {
    fn sub_assign(&mut self, rhs: Real) {
        self.re -= rhs;
    }
}

impl MulAssign<Real> for Complex {
    fn mul_assign(&mut self, rhs: Real) {
        self.re *= rhs;
        self.im *= rhs;
    }
}

impl DivAssign<Real> for Complex {
    fn div_assign(&mut self, rhs: Real) {
        self.re /= rhs;
        self.im /= rhs;
    }
}

// ============================================================================
// Binary operators
// ============================================================================

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(mut self, rhs: Complex) -> Complex {
        self += rhs;
        self
    }
}

impl Add<Real> for Complex {
    type Output = Complex;

    fn add(mut self, rhs: Real) -> Complex {
        self += rhs;
        self
    }
}

impl Add<Complex> for Real {
    type Output = Complex;

    fn add(self, mut rhs: Complex) -> Complex {
        rhs += self;
        rhs
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(mut self, rhs: Complex) -> Complex {
        self -= rhs;
        self
    }
}

impl Sub<Real> for Complex {
    type Output = Complex;

    fn sub(mut self, rhs: Real) -> Complex {
        self -= rhs;
        self
    }
}

impl Sub<Complex> for Real {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        let mut tmp = -rhs;
        tmp += self;
        tmp
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(mut self, rhs: Complex) -> Complex {
        self *= rhs;
        self
    }
}

impl Mul<Real> for Complex {
    type Output = Complex;

    fn mul(mut self, rhs: Real) -> Complex {
        self *= rhs;
        self
    }
}

impl Mul<Complex> for Real {
    type Output = Complex;

    fn mul(self, mut rhs: Complex) -> Complex {
        rhs *= self;
        rhs
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(mut self, rhs: Complex) -> Complex {
        self /= rhs;
        self
    }
}

impl Div<Real> for Complex {
    type Output = Complex;

    fn div(mut self, rhs: Real) -> Complex {
        self /= rhs;
        self
    }
}

impl Div<Complex> for Real {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        Complex::new(self, 0.0) / rhs
    }
}

/// Renders as `"<re>"` when the imaginary part is within [`EPSILON`] of
/// zero, otherwise `"<re> + <im>i"` or `"<re> - <|im|>i"`.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.abs() > EPSILON {
            let sign = if self.im > 0.0 { '+' } else { '-' };
            write!(f, "{} {} {}i", self.re, sign, self.im.abs())
        } else {
            write!(f, "{}", self.re)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let z = Complex::default();
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, 0.0);
        assert!(z.is_zero());
    }

    #[test]
    fn test_accessors() {
        let z = Complex::new(3.5, -2.1);
        assert_eq!(z.real(), 3.5);
        assert_eq!(z.imag(), -2.1);
    }

    #[test]
    fn test_abs_and_abs2() {
        let z = Complex::new(3.0, 4.0);
        assert_eq!(z.abs2(), 25.0);
        assert_eq!(z.abs(), 5.0);
    }

    #[test]
    fn test_conj_involution() {
        let z = Complex::new(2.0, -3.0);
        assert_eq!(z.conj(), Complex::new(2.0, 3.0));
        assert_eq!(z.conj().conj(), z);
    }

    #[test]
    fn test_addition() {
        // (1 + 2i) + (3 + 4i) = 4 + 6i
        let sum = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert_eq!(sum, Complex::new(4.0, 6.0));
    }

    #[test]
    fn test_multiplication() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let product = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(product, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_division() {
        // (10 + 5i) / (2 + i) = 5
        let quotient = Complex::new(10.0, 5.0) / Complex::new(2.0, 1.0);
        assert!((quotient.re - 5.0).abs() < 1e-12);
        assert!(quotient.im.abs() < 1e-12);
    }

    #[test]
    fn test_scalar_operands_both_orders() {
        let z = Complex::new(1.0, 2.0);
        assert_eq!(z + 3.0, Complex::new(4.0, 2.0));
        assert_eq!(3.0 + z, Complex::new(4.0, 2.0));
        assert_eq!(z - 1.0, Complex::new(0.0, 2.0));
        assert_eq!(1.0 - z, Complex::new(0.0, -2.0));
        assert_eq!(z * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0 * z, Complex::new(2.0, 4.0));
        assert_eq!(z / 2.0, Complex::new(0.5, 1.0));
    }

    #[test]
    fn test_real_divided_by_complex() {
        // 1 / i = -i
        let quotient = 1.0 / Complex::I;
        assert!(quotient.re.abs() < 1e-12);
        assert!((quotient.im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compound_mul_self_aliasing() {
        // z *= z must square: (1 + 2i)² = -3 + 4i
        let mut z = Complex::new(1.0, 2.0);
        z *= z;
        assert_eq!(z, Complex::new(-3.0, 4.0));
    }

    #[test]
    fn test_compound_div_self_aliasing() {
        // z /= z must give 1
        let mut z = Complex::new(1.0, 2.0);
        z /= z;
        assert_eq!(z, Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Complex::new(1.0, -2.0), Complex::new(-1.0, 2.0));
    }

    #[test]
    fn test_promotion_from_real() {
        assert_eq!(Complex::from(3.0), Complex::new(3.0, 0.0));
    }

    #[test]
    fn test_zero_one_identities() {
        let z = Complex::new(1.5, -0.5);
        assert_eq!(z + Complex::zero(), z);
        assert_eq!(z * Complex::one(), z);
    }

    #[test]
    fn test_sqrt_of_negative_real() {
        // sqrt(-4) = 2i on the non-negative branch
        let root = Complex::new(-4.0, 0.0).sqrt();
        assert!(root.re.abs() < 1e-12);
        assert!((root.im - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_sqrt_squares_back() {
        for &(re, im) in &[(3.0, 4.0), (-3.0, 4.0), (0.5, -2.5), (-1.0, -1.0)] {
            let z = Complex::new(re, im);
            let root = z.sqrt();
            let back = root * root;
            assert!((back - z).abs() < 1e-9, "sqrt({z})² = {back}");
        }
    }

    #[test]
    fn test_exp_of_i_pi() {
        // e^(iπ) = -1
        let z = (Complex::I * std::f64::consts::PI).exp();
        assert!((z.re + 1.0).abs() < 1e-12);
        assert!(z.im.abs() < 1e-12);
    }

    #[test]
    fn test_exp_ln_roundtrip() {
        let z = Complex::new(-1.5, 2.5);
        let back = z.ln().exp();
        assert!((back - z).abs() < 1e-9);
    }

    #[test]
    fn test_ln_of_zero_has_negative_infinite_real_part() {
        let z = Complex::new(0.0, 0.0).ln();
        assert!(z.re.is_infinite() && z.re.is_sign_negative());
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn test_division_by_zero_complex_propagates_nan() {
        let q = Complex::new(1.0, 2.0) / Complex::new(0.0, 0.0);
        assert!(q.re.is_nan());
        assert!(q.im.is_nan());
    }

    #[test]
    fn test_division_by_zero_real_propagates_infinity() {
        let q = Complex::new(1.0, -2.0) / 0.0;
        assert!(q.re.is_infinite() && q.re.is_sign_positive());
        assert!(q.im.is_infinite() && q.im.is_sign_negative());
    }

    #[test]
    fn test_pow_of_zero_base() {
        // 0^w goes through ln(0); e^(-inf) collapses to 0
        let z = Complex::zero().powf(2.0);
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, 0.0);
    }

    #[test]
    fn test_display_real_only() {
        assert_eq!(Complex::new(3.0, 0.0).to_string(), "3");
    }

    #[test]
    fn test_display_positive_imaginary() {
        assert_eq!(Complex::new(3.0, 4.0).to_string(), "3 + 4i");
    }

    #[test]
    fn test_display_negative_imaginary() {
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3 - 4i");
    }

    #[test]
    fn test_display_small_imaginary_suppressed() {
        assert_eq!(Complex::new(1.5, 1e-12).to_string(), "1.5");
    }
}
