//! Error types for the transform primitives.

use thiserror::Error;

/// Precondition failures on the modulus supplied to the number theoretic
/// transform.
///
/// These are caller errors, not transient conditions; the convolution
/// engines propagate them unchanged without retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The modulus is not a prime number.
    #[error("expected a prime modulus for the number theoretic transform, got {0}")]
    CompositeModulus(u64),

    /// The multiplicative group of the field has no element of the
    /// required order, i.e. the transform length does not divide
    /// `prime - 1`.
    #[error("prime modulus {prime} does not admit a root of unity of order {order}")]
    NoRootOfUnity {
        /// The rejected modulus.
        prime: u64,
        /// The transform length whose root of unity is missing.
        order: usize,
    },
}
