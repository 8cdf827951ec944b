//! Biquad coefficient record and frequency response evaluation.

use nalgebra::Complex;
use num_traits::Float;

use crate::kernel::CoefficientSink;

/// Six coefficients of one biquad section,
/// `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (a0 + a1 z^-1 + a2 z^-2)`.
///
/// This is the crate's canonical [`CoefficientSink`] implementation.
/// Coefficients are stored exactly as delivered, unnormalized by `a0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs<F> {
    /// Denominator `a0`.
    pub a0: F,
    /// Denominator `a1`.
    pub a1: F,
    /// Denominator `a2`.
    pub a2: F,
    /// Numerator `b0`.
    pub b0: F,
    /// Numerator `b1`.
    pub b1: F,
    /// Numerator `b2`.
    pub b2: F,
}

impl<F: Float> Default for BiquadCoeffs<F> {
    /// Identity section: `H(z) = 1`.
    fn default() -> Self {
        Self {
            a0: F::one(),
            a1: F::zero(),
            a2: F::zero(),
            b0: F::one(),
            b1: F::zero(),
            b2: F::zero(),
        }
    }
}

impl<F: Float> BiquadCoeffs<F> {
    /// Complex response `H(z)` at `z = e^{j2πf}` for a normalized
    /// frequency `f` in cycles per sample.
    pub fn response(&self, normalized_frequency: F) -> Complex<F> {
        let w = F::from(2.0).unwrap() * F::from(core::f64::consts::PI).unwrap()
            * normalized_frequency;
        // z^-1 and z^-2 on the unit circle
        let czn1 = Complex::new(w.cos(), -w.sin());
        let czn2 = czn1 * czn1;
        let numerator = Complex::new(self.b0, F::zero()) + czn1 * self.b1 + czn2 * self.b2;
        let denominator = Complex::new(self.a0, F::zero()) + czn1 * self.a1 + czn2 * self.a2;
        numerator / denominator
    }
}

impl<F: Float> CoefficientSink<F> for BiquadCoeffs<F> {
    fn set_coefficients(&mut self, a0: F, a1: F, a2: F, b0: F, b1: F, b2: F) {
        self.a0 = a0;
        self.a1 = a1;
        self.a2 = a2;
        self.b0 = b0;
        self.b1 = b1;
        self.b2 = b2;
    }
}
