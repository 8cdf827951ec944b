//! Domain errors raised by layout mutation and filter design.

use core::{error, fmt};

/// Errors raised by layout insertion/access and cookbook design.
///
/// Every fallible operation in this crate rejects bad input synchronously
/// and atomically: an `Err` return means the operation had no effect.
/// Message text is a presentation concern of the [`fmt::Display`] impl;
/// callers should match on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A stage was appended while the layout holds an odd number of
    /// poles, i.e. after a terminal first-order stage.
    StageAfterFirstOrder,
    /// An insertion would raise the pole count past the layout capacity.
    LayoutFull {
        /// Capacity of the layout in poles.
        max_poles: usize,
    },
    /// The pole supplied to an insertion is NaN.
    PoleIsNan,
    /// The zero supplied to an insertion is NaN.
    ZeroIsNan,
    /// The explicitly supplied pole pair is not a conjugate match.
    PolesNotConjugate,
    /// The explicitly supplied zero pair is not a conjugate match.
    ZerosNotConjugate,
    /// A pair index was outside `[0, num_pairs)`.
    PairIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of accessible pairs at the time of the call.
        pairs: usize,
    },
    /// A design formula has no solution for the requested parameters
    /// (band-shelf with an infeasible bandwidth/frequency combination).
    NoSolution,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StageAfterFirstOrder => {
                write!(f, "Can't add a stage after a 1st order stage.")
            }
            Error::LayoutFull { max_poles } => {
                write!(f, "Layout is full ({max_poles} pole capacity).")
            }
            Error::PoleIsNan => write!(f, "Pole to add is NaN."),
            Error::ZeroIsNan => write!(f, "Zero to add is NaN."),
            Error::PolesNotConjugate => write!(f, "Poles not complex conjugate."),
            Error::ZerosNotConjugate => write!(f, "Zeros not complex conjugate."),
            Error::PairIndexOutOfBounds { index, pairs } => {
                write!(f, "Pair index {index} out of bounds (have {pairs} pairs).")
            }
            Error::NoSolution => {
                write!(f, "No solution available for these parameters.")
            }
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_derives_message_from_kind() {
        assert_eq!(Error::PoleIsNan.to_string(), "Pole to add is NaN.");
        assert_eq!(
            Error::PairIndexOutOfBounds { index: 3, pairs: 2 }.to_string(),
            "Pair index 3 out of bounds (have 2 pairs)."
        );
        assert_eq!(
            Error::LayoutFull { max_poles: 4 }.to_string(),
            "Layout is full (4 pole capacity)."
        );
    }
}
