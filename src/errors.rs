//! Main error types for the convolution entry points.

use thiserror::Error;

use crate::transform::errors::TransformError;

/// Top-level error type for convolution dispatch.
///
/// All dispatcher validation happens before any transform work begins;
/// failures raised by the transform primitives propagate unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionError {
    /// The requested cyclic length is negative.
    #[error("the length for cyclic convolution must be non-negative, got {0}")]
    InvalidCycle(i64),

    /// Both a decimal precision and a prime modulus were supplied; the
    /// two numeric domains are mutually exclusive.
    #[error("ambiguity in determining the convolution type: `precision` and `prime` are mutually exclusive")]
    AmbiguousMode,

    /// The modular engine was requested without a modulus.
    #[error("a prime modulus must be specified for performing a number theoretic transform")]
    MissingModulus,

    /// A transform primitive rejected the supplied modulus.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
