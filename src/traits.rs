//! Trait interfaces for coefficient design capabilities.

use crate::error::Error;
use crate::kernel::CoefficientSink;

/// Capability of producing one biquad coefficient set into a sink.
///
/// Implemented by validated design kernels; the sink receives the six
/// raw coefficients exactly once on success.
pub trait BiquadDesign<F> {
    /// Compute coefficients and deliver them to `sink`.
    fn design_into<S>(&self, sink: &mut S) -> Result<(), Error>
    where
        S: CoefficientSink<F> + ?Sized;
}
