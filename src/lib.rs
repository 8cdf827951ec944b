//! Pole-zero filter layouts and RBJ biquad coefficient design.
//!
//! This crate covers the *design* side of second-order IIR filter
//! sections: it computes biquad coefficients from physically meaningful
//! parameters (normalized frequency, Q/bandwidth, shelf gain) and manages
//! the pole/zero layout a filter topology is derived from. It does not
//! process samples; computed coefficients are handed to an external
//! [`CoefficientSink`](kernel::CoefficientSink) owned by the caller.
//!
//! The two main entry points:
//!
//! - [`rbj`] — the ten Audio EQ Cookbook design functions
//!   (low-pass, high-pass, two band-pass variants, band-stop, notch,
//!   low/high/band shelf, all-pass), plus a validated
//!   [`RbjKernel`](rbj::RbjKernel) wrapper that checks parameter ranges
//!   at construction.
//! - [`layout`] — the [`Layout`](layout::Layout) container recording a
//!   filter's pole/zero structure with conjugate-symmetry, ordering, and
//!   no-NaN invariants enforced on insertion.
//!
//! ```
//! use iir_design::rbj;
//!
//! let mut coeffs = [0.0f64; 6];
//! rbj::low_pass(&mut coeffs, 0.1, 0.707);
//! let [a0, a1, a2, b0, b1, b2] = coeffs;
//! assert!(a0 > 1.0 && b0 > 0.0);
//! # let _ = (a1, a2, b1, b2);
//! ```
//!
//! The crate is `no_std` compatible; the `alloc` feature (enabled by
//! default through `std`) gates the owned-storage [`layout`] module.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
pub mod kernel;
#[cfg(feature = "alloc")]
pub mod layout;
pub mod math;
pub mod rbj;
pub mod traits;

mod coeffs;
pub use coeffs::BiquadCoeffs;
