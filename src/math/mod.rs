//! Complex/real math helpers shared by layout handling and design.
//!
//! All helpers are pure and `core`-only. The quadratic solvers compute
//! their discriminant in the complex domain so complex-conjugate roots
//! fall out without branching on the discriminant sign.

use nalgebra::Complex;
use num_traits::Float;

/// First root of `a*x^2 + b*x + c = 0`: `(-b + sqrt(b^2 - 4ac)) / (2a)`.
///
/// Requires `a != 0`; a zero `a` propagates as infinity rather than
/// being reported as an error.
pub fn solve_quadratic_1<F: Float>(a: F, b: F, c: F) -> Complex<F> {
    let two = F::from(2.0).unwrap();
    let four = F::from(4.0).unwrap();
    let discriminant = Complex::new(b * b - four * a * c, F::zero());
    (Complex::new(-b, F::zero()) + discriminant.sqrt()) / (two * a)
}

/// Second root of `a*x^2 + b*x + c = 0`: `(-b - sqrt(b^2 - 4ac)) / (2a)`.
pub fn solve_quadratic_2<F: Float>(a: F, b: F, c: F) -> Complex<F> {
    let two = F::from(2.0).unwrap();
    let four = F::from(4.0).unwrap();
    let discriminant = Complex::new(b * b - four * a * c, F::zero());
    (Complex::new(-b, F::zero()) - discriminant.sqrt()) / (two * a)
}

/// Equality-based NaN detection: `x != x`.
pub fn is_nan<T: PartialEq + Copy>(x: T) -> bool {
    x != x
}

/// NaN detection for complex values: true if either component is NaN.
pub fn is_nan_complex<F: PartialEq + Copy>(c: Complex<F>) -> bool {
    is_nan(c.re) || is_nan(c.im)
}

/// Snap a near-zero imaginary part (`|im| < 1e-30`) to exactly zero.
///
/// Cosmetic cleanup of numerical noise left by conjugate arithmetic;
/// not correctness-critical.
pub fn adjust_imag<F: Float>(c: Complex<F>) -> Complex<F> {
    if c.im.abs() < F::from(1e-30).unwrap() {
        Complex::new(c.re, F::zero())
    } else {
        c
    }
}

/// Complex reciprocal `conj(c) / |c|^2`.
pub fn recip<F: Float>(c: Complex<F>) -> Complex<F> {
    let n = F::one() / (c.re * c.re + c.im * c.im);
    Complex::new(n * c.re, -(n * c.im))
}

/// Inverse hyperbolic sine, `ln(x + sqrt(x^2 + 1))`.
pub fn asinh<F: Float>(x: F) -> F {
    (x + (x * x + F::one()).sqrt()).ln()
}

/// Inverse hyperbolic cosine, `ln(x + sqrt(x^2 - 1))`.
///
/// Defined for `x >= 1`; smaller inputs produce NaN.
pub fn acosh<F: Float>(x: F) -> F {
    (x + (x * x - F::one()).sqrt()).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn eval(a: f64, b: f64, c: f64, x: Complex<f64>) -> Complex<f64> {
        x * x * a + x * b + Complex::new(c, 0.0)
    }

    #[test]
    fn quadratic_roots_satisfy_polynomial_real_case() {
        // x^2 - 3x + 2 = 0 -> roots 2 and 1
        let r1 = solve_quadratic_1(1.0f64, -3.0, 2.0);
        let r2 = solve_quadratic_2(1.0f64, -3.0, 2.0);
        assert_abs_diff_eq!(r1.re, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r2.re, 1.0, epsilon = 1e-12);
        assert_eq!(r1.im, 0.0);
        assert_eq!(r2.im, 0.0);
    }

    #[test]
    fn quadratic_roots_satisfy_polynomial_complex_case() {
        // Negative discriminant: x^2 + x + 1 = 0
        let (a, b, c) = (1.0f64, 1.0, 1.0);
        for root in [solve_quadratic_1(a, b, c), solve_quadratic_2(a, b, c)] {
            let residual = eval(a, b, c, root);
            assert_abs_diff_eq!(residual.re, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(residual.im, 0.0, epsilon = 1e-12);
        }
        assert!(solve_quadratic_1(a, b, c).im > 0.0);
        assert!(solve_quadratic_2(a, b, c).im < 0.0);
    }

    #[test]
    fn quadratic_roots_residual_sweep() {
        let coeffs = [
            (2.0f64, 0.5, -3.0),
            (-1.0, 4.0, 4.0),
            (0.25, 0.0, 9.0),
            (5.0, -2.0, 0.1),
        ];
        for (a, b, c) in coeffs {
            for root in [solve_quadratic_1(a, b, c), solve_quadratic_2(a, b, c)] {
                let residual = eval(a, b, c, root);
                assert_abs_diff_eq!(residual.re, 0.0, epsilon = 1e-9);
                assert_abs_diff_eq!(residual.im, 0.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn nan_detection_real_and_complex() {
        assert!(is_nan(f64::NAN));
        assert!(!is_nan(0.0f64));
        assert!(!is_nan(f64::INFINITY));
        assert!(is_nan_complex(Complex::new(f64::NAN, 0.0)));
        assert!(is_nan_complex(Complex::new(0.0, f64::NAN)));
        assert!(!is_nan_complex(Complex::new(1.0f64, -1.0)));
    }

    #[test]
    fn adjust_imag_snaps_only_below_threshold() {
        let snapped = adjust_imag(Complex::new(1.0f64, 1e-31));
        assert_eq!(snapped.im, 0.0);
        let kept = adjust_imag(Complex::new(1.0f64, 1e-29));
        assert_eq!(kept.im, 1e-29);
    }

    #[test]
    fn recip_is_multiplicative_inverse() {
        let c = Complex::new(3.0f64, -4.0);
        let product = c * recip(c);
        assert_abs_diff_eq!(product.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(product.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn hyperbolic_inverses_match_std() {
        for x in [0.1f64, 1.0, 2.5, 10.0] {
            assert_abs_diff_eq!(asinh(x), x.asinh(), epsilon = 1e-12);
        }
        for x in [1.0f64, 1.5, 3.0, 20.0] {
            assert_abs_diff_eq!(acosh(x), x.acosh(), epsilon = 1e-12);
        }
        assert!(acosh(0.5f64).is_nan());
    }
}
