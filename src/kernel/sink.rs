/// Adapter trait for externally owned biquad coefficient destinations.
///
/// Design functions deliver the six raw (unnormalized) coefficients of
/// `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (a0 + a1 z^-1 + a2 z^-2)` to a
/// sink immediately on computation; the crate retains nothing. The sink
/// decides whether to normalize by `a0`.
pub trait CoefficientSink<F> {
    /// Receive one full coefficient set.
    fn set_coefficients(&mut self, a0: F, a1: F, a2: F, b0: F, b1: F, b2: F);
}

/// Stores `[a0, a1, a2, b0, b1, b2]` in order.
impl<F> CoefficientSink<F> for [F; 6] {
    fn set_coefficients(&mut self, a0: F, a1: F, a2: F, b0: F, b1: F, b2: F) {
        *self = [a0, a1, a2, b0, b1, b2];
    }
}
