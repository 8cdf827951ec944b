//! Validated kernel wrapper over the cookbook designs.

use num_traits::Float;

use crate::error::Error;
use crate::kernel::{CoefficientSink, ConfigError, KernelLifecycle};
use crate::traits::BiquadDesign;

/// Shape and parameters for one cookbook design.
///
/// Frequencies are normalized fractions of the sample rate; gains are in
/// decibels; Q, bandwidth, and slope are linear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RbjConfig<F> {
    /// Low-pass at `cutoff` with quality `q`.
    LowPass {
        /// Cutoff frequency.
        cutoff: F,
        /// Quality factor.
        q: F,
    },
    /// High-pass at `cutoff` with quality `q`.
    HighPass {
        /// Cutoff frequency.
        cutoff: F,
        /// Quality factor.
        q: F,
    },
    /// Band-pass with constant skirt gain.
    BandPassConstantSkirt {
        /// Center frequency.
        center: F,
        /// Bandwidth parameter.
        bandwidth: F,
    },
    /// Band-pass with constant 0 dB peak gain.
    BandPassConstantPeak {
        /// Center frequency.
        center: F,
        /// Bandwidth parameter.
        bandwidth: F,
    },
    /// Band-stop centered on `center`.
    BandStop {
        /// Center frequency.
        center: F,
        /// Bandwidth parameter.
        bandwidth: F,
    },
    /// Notch with pole-radius shaping.
    Notch {
        /// Center frequency.
        center: F,
        /// Quality factor.
        q: F,
    },
    /// Low shelf.
    LowShelf {
        /// Corner frequency.
        cutoff: F,
        /// Shelf gain in dB.
        gain_db: F,
        /// Shelf slope.
        slope: F,
    },
    /// High shelf.
    HighShelf {
        /// Corner frequency.
        cutoff: F,
        /// Shelf gain in dB.
        gain_db: F,
        /// Shelf slope.
        slope: F,
    },
    /// Band shelf (peaking EQ).
    BandShelf {
        /// Center frequency.
        center: F,
        /// Shelf gain in dB.
        gain_db: F,
        /// Bandwidth parameter.
        bandwidth: F,
    },
    /// All-pass with phase crossing at `phase_frequency`.
    AllPass {
        /// Phase-crossing frequency.
        phase_frequency: F,
        /// Quality factor.
        q: F,
    },
}

/// Validated cookbook design kernel.
///
/// [`try_new`](KernelLifecycle::try_new) rejects frequencies outside
/// `(0, 0.5)`, non-positive Q/bandwidth/slope, and non-finite
/// parameters, so a constructed kernel designs without surprises (the
/// band-shelf no-solution case excepted, which depends on the parameter
/// *combination* and stays a design-time error).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RbjKernel<F> {
    config: RbjConfig<F>,
}

fn check_frequency<F: Float>(arg: &'static str, f: F) -> Result<(), ConfigError> {
    if !f.is_finite() {
        return Err(ConfigError::NonFinite { arg });
    }
    if f <= F::zero() || f >= F::from(0.5).unwrap() {
        return Err(ConfigError::InvalidArgument {
            arg,
            reason: "normalized frequency must be in (0, 0.5)",
        });
    }
    Ok(())
}

fn check_positive<F: Float>(arg: &'static str, v: F) -> Result<(), ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NonFinite { arg });
    }
    if v <= F::zero() {
        return Err(ConfigError::InvalidArgument {
            arg,
            reason: "value must be greater than zero",
        });
    }
    Ok(())
}

fn check_finite<F: Float>(arg: &'static str, v: F) -> Result<(), ConfigError> {
    if !v.is_finite() {
        return Err(ConfigError::NonFinite { arg });
    }
    Ok(())
}

impl<F> KernelLifecycle for RbjKernel<F>
where
    F: Float,
{
    type Config = RbjConfig<F>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        match config {
            RbjConfig::LowPass { cutoff, q } | RbjConfig::HighPass { cutoff, q } => {
                check_frequency("cutoff", cutoff)?;
                check_positive("q", q)?;
            }
            RbjConfig::BandPassConstantSkirt { center, bandwidth }
            | RbjConfig::BandPassConstantPeak { center, bandwidth }
            | RbjConfig::BandStop { center, bandwidth } => {
                check_frequency("center", center)?;
                check_positive("bandwidth", bandwidth)?;
            }
            RbjConfig::Notch { center, q } => {
                check_frequency("center", center)?;
                check_positive("q", q)?;
            }
            RbjConfig::LowShelf {
                cutoff,
                gain_db,
                slope,
            }
            | RbjConfig::HighShelf {
                cutoff,
                gain_db,
                slope,
            } => {
                check_frequency("cutoff", cutoff)?;
                check_finite("gain_db", gain_db)?;
                check_positive("slope", slope)?;
            }
            RbjConfig::BandShelf {
                center,
                gain_db,
                bandwidth,
            } => {
                check_frequency("center", center)?;
                check_finite("gain_db", gain_db)?;
                check_positive("bandwidth", bandwidth)?;
            }
            RbjConfig::AllPass { phase_frequency, q } => {
                check_frequency("phase_frequency", phase_frequency)?;
                check_positive("q", q)?;
            }
        }
        Ok(Self { config })
    }
}

impl<F> BiquadDesign<F> for RbjKernel<F>
where
    F: Float,
{
    fn design_into<S>(&self, sink: &mut S) -> Result<(), Error>
    where
        S: CoefficientSink<F> + ?Sized,
    {
        match self.config {
            RbjConfig::LowPass { cutoff, q } => {
                super::low_pass(sink, cutoff, q);
                Ok(())
            }
            RbjConfig::HighPass { cutoff, q } => {
                super::high_pass(sink, cutoff, q);
                Ok(())
            }
            RbjConfig::BandPassConstantSkirt { center, bandwidth } => {
                super::band_pass_constant_skirt(sink, center, bandwidth);
                Ok(())
            }
            RbjConfig::BandPassConstantPeak { center, bandwidth } => {
                super::band_pass_constant_peak(sink, center, bandwidth);
                Ok(())
            }
            RbjConfig::BandStop { center, bandwidth } => {
                super::band_stop(sink, center, bandwidth);
                Ok(())
            }
            RbjConfig::Notch { center, q } => {
                super::notch(sink, center, q);
                Ok(())
            }
            RbjConfig::LowShelf {
                cutoff,
                gain_db,
                slope,
            } => {
                super::low_shelf(sink, cutoff, gain_db, slope);
                Ok(())
            }
            RbjConfig::HighShelf {
                cutoff,
                gain_db,
                slope,
            } => {
                super::high_shelf(sink, cutoff, gain_db, slope);
                Ok(())
            }
            RbjConfig::BandShelf {
                center,
                gain_db,
                bandwidth,
            } => super::band_shelf(sink, center, gain_db, bandwidth),
            RbjConfig::AllPass { phase_frequency, q } => {
                super::all_pass(sink, phase_frequency, q);
                Ok(())
            }
        }
    }
}
