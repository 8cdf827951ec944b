//! Shared kernel substrate.
//!
//! This module defines the constructor-validation lifecycle and the
//! coefficient-sink adapter used by the validated design kernels.

mod errors;
mod lifecycle;
mod sink;

pub use errors::*;
pub use lifecycle::*;
pub use sink::*;
