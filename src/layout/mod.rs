//! Pole-zero layout container.
//!
//! A [`Layout`] records a filter's pole/zero structure, in either the
//! s or the z plane, as an ordered sequence of first- and second-order
//! stages plus normalization metadata (a frequency and the gain the
//! response is pinned to there). Structural invariants are enforced on
//! insertion and every rejection is atomic: a failed call leaves the
//! container exactly as it was.
//!
//! Storage is owned and sized once at construction; [`Layout::reset`]
//! clears the content without reallocating so a layout can be reused
//! across repeated designs. [`Layout::as_view`] produces an explicit
//! non-owning [`LayoutView`] for read-only consumers.

use alloc::vec;
use alloc::vec::Vec;

use nalgebra::Complex;
use num_traits::Float;

use crate::error::Error;
use crate::math::is_nan_complex;

/// Two complex values treated as a (potential) conjugate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComplexPair<F> {
    /// First element of the pair.
    pub first: Complex<F>,
    /// Second element of the pair.
    pub second: Complex<F>,
}

impl<F: Float> ComplexPair<F> {
    /// Build a pair from two explicit values.
    pub fn new(first: Complex<F>, second: Complex<F>) -> Self {
        Self { first, second }
    }

    /// Build the pair `(c, conj(c))`.
    pub fn conjugate(c: Complex<F>) -> Self {
        Self {
            first: c,
            second: c.conj(),
        }
    }

    /// Whether the pair is a valid second-order match.
    ///
    /// A pair with a nonzero imaginary part matches iff
    /// `second == conj(first)`. A real-axis pair matches iff both
    /// imaginary parts are zero and both real parts are nonzero.
    pub fn is_matched_pair(&self) -> bool {
        if self.first.im != F::zero() {
            self.second == self.first.conj()
        } else {
            self.second.im == F::zero()
                && self.first.re != F::zero()
                && self.second.re != F::zero()
        }
    }

    /// True if any component of either element is NaN.
    pub fn is_nan(&self) -> bool {
        is_nan_complex(self.first) || is_nan_complex(self.second)
    }

    fn zero() -> Self {
        let z = Complex::new(F::zero(), F::zero());
        Self { first: z, second: z }
    }
}

/// One stage of a filter topology: one or two poles with their zeros.
///
/// A first-order stage carries only `poles.first`/`zeros.first`; the
/// second elements are zero and [`is_single_pole`](Self::is_single_pole)
/// reports true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleZeroPair<F> {
    /// The stage's pole pair.
    pub poles: ComplexPair<F>,
    /// The stage's zero pair.
    pub zeros: ComplexPair<F>,
}

impl<F: Float> PoleZeroPair<F> {
    /// Build a first-order stage from a single pole and zero.
    pub fn single(pole: Complex<F>, zero: Complex<F>) -> Self {
        let z = Complex::new(F::zero(), F::zero());
        Self {
            poles: ComplexPair::new(pole, z),
            zeros: ComplexPair::new(zero, z),
        }
    }

    /// Build a second-order stage from explicit pole/zero pairs.
    pub fn pair(poles: ComplexPair<F>, zeros: ComplexPair<F>) -> Self {
        Self { poles, zeros }
    }

    /// True if this stage carries only one pole and one zero.
    pub fn is_single_pole(&self) -> bool {
        let z = Complex::new(F::zero(), F::zero());
        self.poles.second == z && self.zeros.second == z
    }
}

/// Ordered, fixed-capacity collection of pole-zero stages.
#[derive(Debug, Clone)]
pub struct Layout<F> {
    pairs: Vec<PoleZeroPair<F>>,
    num_poles: usize,
    max_poles: usize,
    normal_w: F,
    normal_gain: F,
}

impl<F: Float> Layout<F> {
    /// Create an empty layout able to hold up to `max_poles` poles.
    ///
    /// Storage is allocated once, sized `ceil(max_poles / 2)` pairs, and
    /// never reallocated afterwards.
    pub fn with_capacity(max_poles: usize) -> Self {
        Self {
            pairs: vec![
                PoleZeroPair {
                    poles: ComplexPair::zero(),
                    zeros: ComplexPair::zero(),
                };
                max_poles.div_ceil(2)
            ],
            num_poles: 0,
            max_poles,
            normal_w: F::zero(),
            normal_gain: F::one(),
        }
    }

    /// Number of poles currently stored.
    pub fn num_poles(&self) -> usize {
        self.num_poles
    }

    /// Pole capacity fixed at construction.
    pub fn max_poles(&self) -> usize {
        self.max_poles
    }

    /// Number of accessible stages, `ceil(num_poles / 2)`.
    pub fn num_pairs(&self) -> usize {
        self.num_poles.div_ceil(2)
    }

    /// Clear the content; capacity and storage are unchanged.
    pub fn reset(&mut self) {
        self.num_poles = 0;
    }

    /// Append a first-order stage.
    ///
    /// Rejected if the layout already holds an odd number of poles (a
    /// first-order stage terminates a layout), if the layout is full, or
    /// if `pole` or `zero` is NaN.
    pub fn add(&mut self, pole: Complex<F>, zero: Complex<F>) -> Result<(), Error> {
        self.check_append(1)?;
        if is_nan_complex(pole) {
            return Err(Error::PoleIsNan);
        }
        if is_nan_complex(zero) {
            return Err(Error::ZeroIsNan);
        }
        self.pairs[self.num_poles / 2] = PoleZeroPair::single(pole, zero);
        self.num_poles += 1;
        Ok(())
    }

    /// Append a second-order stage, synthesizing the conjugates:
    /// stores `(pole, zero, conj(pole), conj(zero))`.
    pub fn add_conjugate_pair(&mut self, pole: Complex<F>, zero: Complex<F>) -> Result<(), Error> {
        self.check_append(2)?;
        if is_nan_complex(pole) {
            return Err(Error::PoleIsNan);
        }
        if is_nan_complex(zero) {
            return Err(Error::ZeroIsNan);
        }
        self.pairs[self.num_poles / 2] = PoleZeroPair::pair(
            ComplexPair::conjugate(pole),
            ComplexPair::conjugate(zero),
        );
        self.num_poles += 2;
        Ok(())
    }

    /// Append a second-order stage from explicitly supplied pairs.
    ///
    /// Both pairs must satisfy [`ComplexPair::is_matched_pair`].
    pub fn add_matched_pair(
        &mut self,
        poles: ComplexPair<F>,
        zeros: ComplexPair<F>,
    ) -> Result<(), Error> {
        self.check_append(2)?;
        if !poles.is_matched_pair() {
            return Err(Error::PolesNotConjugate);
        }
        if !zeros.is_matched_pair() {
            return Err(Error::ZerosNotConjugate);
        }
        self.pairs[self.num_poles / 2] = PoleZeroPair::pair(poles, zeros);
        self.num_poles += 2;
        Ok(())
    }

    /// Stage at `index`, in insertion order.
    pub fn get_pair(&self, index: usize) -> Result<&PoleZeroPair<F>, Error> {
        if index >= self.num_pairs() {
            return Err(Error::PairIndexOutOfBounds {
                index,
                pairs: self.num_pairs(),
            });
        }
        Ok(&self.pairs[index])
    }

    /// Set the normalization frequency and target linear gain.
    pub fn set_normal(&mut self, w: F, gain: F) {
        self.normal_w = w;
        self.normal_gain = gain;
    }

    /// Normalization frequency.
    pub fn normal_w(&self) -> F {
        self.normal_w
    }

    /// Target linear gain at the normalization frequency.
    pub fn normal_gain(&self) -> F {
        self.normal_gain
    }

    /// Borrow the layout as an explicit non-owning view.
    pub fn as_view(&self) -> LayoutView<'_, F> {
        LayoutView {
            pairs: &self.pairs,
            num_poles: self.num_poles,
            normal_w: self.normal_w,
            normal_gain: self.normal_gain,
        }
    }

    // Shared precondition for all three insertions. The odd-count check
    // is deliberately the literal rule: any append is rejected while the
    // pole count is odd, which is what makes a first-order stage
    // terminal.
    fn check_append(&self, poles: usize) -> Result<(), Error> {
        if self.num_poles % 2 != 0 {
            return Err(Error::StageAfterFirstOrder);
        }
        if self.num_poles + poles > self.max_poles {
            return Err(Error::LayoutFull {
                max_poles: self.max_poles,
            });
        }
        Ok(())
    }
}

/// Read-only borrowed view of a [`Layout`].
///
/// Carries no ownership and cannot outlive its backing layout; created
/// only through [`Layout::as_view`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutView<'a, F> {
    pairs: &'a [PoleZeroPair<F>],
    num_poles: usize,
    normal_w: F,
    normal_gain: F,
}

impl<'a, F: Float> LayoutView<'a, F> {
    /// Number of poles in the underlying layout.
    pub fn num_poles(&self) -> usize {
        self.num_poles
    }

    /// Number of accessible stages, `ceil(num_poles / 2)`.
    pub fn num_pairs(&self) -> usize {
        self.num_poles.div_ceil(2)
    }

    /// Stage at `index`, in insertion order.
    pub fn get_pair(&self, index: usize) -> Result<&'a PoleZeroPair<F>, Error> {
        if index >= self.num_pairs() {
            return Err(Error::PairIndexOutOfBounds {
                index,
                pairs: self.num_pairs(),
            });
        }
        Ok(&self.pairs[index])
    }

    /// Normalization frequency.
    pub fn normal_w(&self) -> F {
        self.normal_w
    }

    /// Target linear gain at the normalization frequency.
    pub fn normal_gain(&self) -> F {
        self.normal_gain
    }
}

#[cfg(test)]
mod tests {
    use super::{ComplexPair, Layout, PoleZeroPair};
    use crate::error::Error;
    use nalgebra::Complex;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn conjugate_insertions_count_two_poles_each() {
        let mut layout = Layout::with_capacity(6);
        layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect("first pair");
        layout
            .add_conjugate_pair(c(-0.4, 0.6), c(0.0, 1.0))
            .expect("second pair");
        assert_eq!(layout.num_poles(), 4);
        assert_eq!(layout.num_pairs(), 2);

        layout.add(c(-0.3, 0.0), c(1.0, 0.0)).expect("odd stage");
        assert_eq!(layout.num_poles(), 5);
        assert_eq!(layout.num_pairs(), 3);
    }

    #[test]
    fn stage_after_first_order_is_rejected_without_mutation() {
        let mut layout = Layout::with_capacity(6);
        layout.add(c(-0.5, 0.0), c(1.0, 0.0)).expect("first order");
        let before = layout.num_poles();

        let err = layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect_err("second order after first order must fail");
        assert_eq!(err, Error::StageAfterFirstOrder);
        assert_eq!(layout.num_poles(), before);
        assert_eq!(layout.num_pairs(), 1);

        // A second first-order stage is rejected by the same check.
        let err = layout
            .add(c(-0.4, 0.0), c(1.0, 0.0))
            .expect_err("first order after first order must fail");
        assert_eq!(err, Error::StageAfterFirstOrder);
        assert_eq!(layout.num_poles(), before);
    }

    #[test]
    fn nan_poles_and_zeros_are_rejected() {
        let mut layout = Layout::with_capacity(4);
        let err = layout
            .add(c(f64::NAN, 0.0), c(1.0, 0.0))
            .expect_err("NaN pole must fail");
        assert_eq!(err, Error::PoleIsNan);

        let err = layout
            .add_conjugate_pair(c(-0.5, 0.5), c(0.0, f64::NAN))
            .expect_err("NaN zero must fail");
        assert_eq!(err, Error::ZeroIsNan);
        assert_eq!(layout.num_poles(), 0);
    }

    #[test]
    fn matched_pair_requires_conjugate_symmetry() {
        let mut layout = Layout::with_capacity(4);
        let poles = ComplexPair::new(c(-0.5, 0.7), c(-0.5, 0.6));
        let zeros = ComplexPair::conjugate(c(0.0, 1.0));
        let err = layout
            .add_matched_pair(poles, zeros)
            .expect_err("mismatched poles must fail");
        assert_eq!(err, Error::PolesNotConjugate);
        assert_eq!(layout.num_poles(), 0);

        let poles = ComplexPair::conjugate(c(-0.5, 0.7));
        let zeros = ComplexPair::new(c(0.0, 1.0), c(0.1, -1.0));
        let err = layout
            .add_matched_pair(poles, zeros)
            .expect_err("mismatched zeros must fail");
        assert_eq!(err, Error::ZerosNotConjugate);

        let poles = ComplexPair::conjugate(c(-0.5, 0.7));
        let zeros = ComplexPair::conjugate(c(0.0, 1.0));
        layout
            .add_matched_pair(poles, zeros)
            .expect("matched pairs should insert");
        assert_eq!(layout.num_poles(), 2);
        assert_eq!(
            *layout.get_pair(0).expect("pair 0"),
            PoleZeroPair::pair(poles, zeros)
        );
    }

    #[test]
    fn real_axis_pairs_match_when_both_nonzero() {
        let real = ComplexPair::new(c(-0.5, 0.0), c(-0.25, 0.0));
        assert!(real.is_matched_pair());

        let with_zero = ComplexPair::new(c(-0.5, 0.0), c(0.0, 0.0));
        assert!(!with_zero.is_matched_pair());

        let mixed = ComplexPair::new(c(-0.5, 0.0), c(-0.25, 0.1));
        assert!(!mixed.is_matched_pair());
    }

    #[test]
    fn get_pair_round_trips_each_insertion() {
        let mut layout = Layout::with_capacity(5);
        layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect("conjugate pair");
        let stored = layout.get_pair(0).expect("pair 0");
        assert_eq!(stored.poles.first, c(-0.5, 0.7));
        assert_eq!(stored.poles.second, c(-0.5, -0.7));
        assert_eq!(stored.zeros.second, c(0.0, -1.0));
        assert!(!stored.is_single_pole());

        layout.add(c(-0.3, 0.0), c(1.0, 0.0)).expect("single");
        let stored = layout.get_pair(1).expect("pair 1");
        assert_eq!(*stored, PoleZeroPair::single(c(-0.3, 0.0), c(1.0, 0.0)));
        assert!(stored.is_single_pole());

        let err = layout.get_pair(2).expect_err("index 2 must be out of bounds");
        assert_eq!(err, Error::PairIndexOutOfBounds { index: 2, pairs: 2 });
    }

    #[test]
    fn capacity_is_enforced() {
        let mut layout = Layout::with_capacity(2);
        layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect("fits");
        let err = layout
            .add_conjugate_pair(c(-0.4, 0.6), c(0.0, 1.0))
            .expect_err("over capacity must fail");
        assert_eq!(err, Error::LayoutFull { max_poles: 2 });
        assert_eq!(layout.num_poles(), 2);
    }

    #[test]
    fn reset_allows_reuse_without_reallocation() {
        let mut layout = Layout::with_capacity(4);
        layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect("insert");
        layout.set_normal(0.25, 2.0);
        layout.reset();
        assert_eq!(layout.num_poles(), 0);
        assert_eq!(layout.max_poles(), 4);
        // Normalization metadata survives reset, as in repeated designs
        // that re-pin the same reference point.
        assert_eq!(layout.normal_w(), 0.25);
        assert_eq!(layout.normal_gain(), 2.0);

        layout
            .add_conjugate_pair(c(-0.1, 0.2), c(0.0, 1.0))
            .expect("reinsert after reset");
        assert_eq!(layout.get_pair(0).expect("pair 0").poles.first, c(-0.1, 0.2));
    }

    #[test]
    fn view_exposes_pairs_and_normalization() {
        let mut layout = Layout::with_capacity(4);
        layout
            .add_conjugate_pair(c(-0.5, 0.7), c(0.0, 1.0))
            .expect("insert");
        layout.set_normal(0.0, 1.0);

        let view = layout.as_view();
        assert_eq!(view.num_poles(), 2);
        assert_eq!(view.num_pairs(), 1);
        assert_eq!(view.normal_w(), 0.0);
        assert_eq!(view.normal_gain(), 1.0);
        assert_eq!(
            view.get_pair(0).expect("pair 0").poles.first,
            c(-0.5, 0.7)
        );
        let err = view.get_pair(1).expect_err("view bounds check");
        assert_eq!(err, Error::PairIndexOutOfBounds { index: 1, pairs: 1 });
    }
}
