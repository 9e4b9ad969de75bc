// File: crates/plot-core/src/error.rs
// Summary: Error taxonomy for tick generation precondition violations.

use thiserror::Error;

/// Errors raised for invalid tick policy parameters.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// `Ticks::Fit` with a count of zero cannot divide an interval.
    #[error("tick count must be at least 1")]
    InvalidTickCount,

    /// `Ticks::Space` with a non-positive distance would never terminate.
    #[error("tick spacing must be positive, got {0}")]
    InvalidTickSpacing(f64),
}
