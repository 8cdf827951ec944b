//! RBJ Audio EQ Cookbook biquad designs.
//!
//! Ten closed-form designs, one per canonical shape, each mapping
//! normalized-frequency/Q/gain parameters to the six raw coefficients of
//! one biquad section and delivering them to a caller-supplied
//! [`CoefficientSink`]. Coefficients are *not* normalized by `a0`; the
//! sink applies whatever normalization it needs.
//!
//! Conventions: frequencies are fractions of the sample rate in
//! `(0, 0.5)`, shelf gains are in decibels, Q/bandwidth are linear. The
//! free functions do not validate parameter ranges (out-of-range input
//! yields out-of-range coefficients); [`RbjKernel`] is the validated
//! construction path.

use core::f64::consts::{LN_2, PI};

use num_traits::Float;

use crate::error::Error;
use crate::kernel::CoefficientSink;
use crate::math::is_nan;

mod kernels;
pub use kernels::*;

/// Second-order low-pass, -3 dB (for Q = 1/sqrt(2)) at `cutoff`.
pub fn low_pass<F, S>(sink: &mut S, cutoff: F, q: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * cutoff;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * q);
    let b0 = (one - cs) / two;
    let b1 = one - cs;
    let b2 = (one - cs) / two;
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Second-order high-pass.
pub fn high_pass<F, S>(sink: &mut S, cutoff: F, q: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * cutoff;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * q);
    let b0 = (one + cs) / two;
    let b1 = -(one + cs);
    let b2 = (one + cs) / two;
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Band-pass with constant skirt gain; peak gain equals `bandwidth`.
pub fn band_pass_constant_skirt<F, S>(sink: &mut S, center: F, bandwidth: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * center;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * bandwidth);
    let b0 = bandwidth * al; // sn / 2
    let b1 = F::zero();
    let b2 = -(bandwidth * al);
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Band-pass with constant 0 dB peak gain.
pub fn band_pass_constant_peak<F, S>(sink: &mut S, center: F, bandwidth: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * center;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * bandwidth);
    let b0 = al;
    let b1 = F::zero();
    let b2 = -al;
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Band-stop (band-reject).
pub fn band_stop<F, S>(sink: &mut S, center: F, bandwidth: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * center;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * bandwidth);
    let b0 = one;
    let b1 = -two * cs;
    let b2 = one;
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Notch with pole-radius shaping, `r = exp(-(w0/2)/q)`.
///
/// Unlike [`band_stop`] this places the poles directly from the pole
/// radius instead of a bandwidth term.
pub fn notch<F, S>(sink: &mut S, center: F, q: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * center;
    let cs = w0.cos();
    let r = (-(w0 / two) / q).exp();
    let b0 = one;
    let b1 = -two * cs;
    let b2 = one;
    let a0 = one;
    let a1 = -two * r * cs;
    let a2 = r * r;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Low shelf with `gain_db` below `cutoff` and unity gain above.
///
/// `slope` is the shelf slope parameter `S` of the cookbook; 1 gives
/// the steepest shelf that stays monotonic.
pub fn low_shelf<F, S>(sink: &mut S, cutoff: F, gain_db: F, slope: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let a = F::from(10.0)
        .unwrap()
        .powf(gain_db / F::from(40.0).unwrap());
    let w0 = two * F::from(PI).unwrap() * cutoff;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / two * ((a + one / a) * (one / slope - one) + two).sqrt();
    let sq = two * a.sqrt() * al;
    let b0 = a * ((a + one) - (a - one) * cs + sq);
    let b1 = two * a * ((a - one) - (a + one) * cs);
    let b2 = a * ((a + one) - (a - one) * cs - sq);
    let a0 = (a + one) + (a - one) * cs + sq;
    let a1 = -two * ((a - one) + (a + one) * cs);
    let a2 = (a + one) + (a - one) * cs - sq;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// High shelf; mirror of [`low_shelf`] with the `cs` signs flipped.
pub fn high_shelf<F, S>(sink: &mut S, cutoff: F, gain_db: F, slope: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let a = F::from(10.0)
        .unwrap()
        .powf(gain_db / F::from(40.0).unwrap());
    let w0 = two * F::from(PI).unwrap() * cutoff;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / two * ((a + one / a) * (one / slope - one) + two).sqrt();
    let sq = two * a.sqrt() * al;
    let b0 = a * ((a + one) + (a - one) * cs + sq);
    let b1 = -two * a * ((a - one) + (a + one) * cs);
    let b2 = a * ((a + one) + (a - one) * cs - sq);
    let a0 = (a + one) - (a - one) * cs + sq;
    let a1 = two * ((a - one) - (a + one) * cs);
    let a2 = (a + one) - (a - one) * cs - sq;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}

/// Band shelf (peaking EQ) with `gain_db` at `center`.
///
/// The only fallible design: the hyperbolic-sine bandwidth term has no
/// solution for some bandwidth/frequency combinations, reported as
/// [`Error::NoSolution`].
pub fn band_shelf<F, S>(sink: &mut S, center: F, gain_db: F, bandwidth: F) -> Result<(), Error>
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let a = F::from(10.0)
        .unwrap()
        .powf(gain_db / F::from(40.0).unwrap());
    let w0 = two * F::from(PI).unwrap() * center;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn * (F::from(LN_2).unwrap() / two * bandwidth * w0 / sn).sinh();
    if is_nan(al) {
        return Err(Error::NoSolution);
    }
    let b0 = one + al * a;
    let b1 = -two * cs;
    let b2 = one - al * a;
    let a0 = one + al / a;
    let a1 = -two * cs;
    let a2 = one - al / a;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
    Ok(())
}

/// All-pass: unity magnitude everywhere, phase crossing at
/// `phase_frequency`.
pub fn all_pass<F, S>(sink: &mut S, phase_frequency: F, q: F)
where
    F: Float,
    S: CoefficientSink<F> + ?Sized,
{
    let one = F::one();
    let two = F::from(2.0).unwrap();
    let w0 = two * F::from(PI).unwrap() * phase_frequency;
    let cs = w0.cos();
    let sn = w0.sin();
    let al = sn / (two * q);
    let b0 = one - al;
    let b1 = -two * cs;
    let b2 = one + al;
    let a0 = one + al;
    let a1 = -two * cs;
    let a2 = one - al;
    sink.set_coefficients(a0, a1, a2, b0, b1, b2);
}
