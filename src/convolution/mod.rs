//! Convolution engines and the dispatching entry point.
//!
//! The engines share one control-flow shape (pad to a power-of-two
//! length, transform, multiply pointwise, inverse-transform, truncate)
//! but are kept concrete per numeric domain so the moment of modular
//! reduction stays explicit.

pub mod cyclic;
pub mod dyadic;
pub mod fourier;
pub mod ntt;

use rug::{Complex, float::Round};
use tracing::instrument;

pub use cyclic::{wrap, wrap_mod};
pub use dyadic::{convolution_fwht, convolution_subset};
pub use fourier::convolution_fft;
pub use ntt::convolution_ntt;

use crate::{
    errors::ConvolutionError,
    transform::fourier::{DEFAULT_DPS, dps_to_prec},
};

/// Options recognized by [`convolution`].
///
/// `precision` and `prime` pick the numeric domain and are mutually
/// exclusive. A non-zero `cycle` folds the linear result into a cyclic
/// one of that length. `request_ntt` insists on the modular engine, which
/// turns a missing `prime` into an error instead of a silent fallback to
/// the Fourier engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvolutionOptions {
    /// Decimal digits carried through the Fourier-domain transform.
    pub precision: Option<u32>,
    /// Modulus for the number theoretic transform.
    pub prime: Option<u64>,
    /// Cyclic length; `0` keeps the convolution linear.
    pub cycle: i64,
    /// Require the modular engine.
    pub request_ntt: bool,
}

/// The numeric domain a call resolves to. Exactly one per call, never
/// both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvolutionMode {
    /// Complex-domain convolution at an optional decimal precision.
    Fourier {
        /// Decimal digits forwarded to the transform.
        precision: Option<u32>,
    },
    /// Convolution over `GF(prime)`.
    Modular {
        /// The field modulus.
        prime: u64,
    },
}

impl ConvolutionMode {
    /// Resolve caller hints into exactly one mode plus a validated
    /// cyclic length.
    ///
    /// Checked in order: a negative `cycle`, mutually exclusive domain
    /// hints, then a modular request without a modulus.
    pub fn resolve(options: &ConvolutionOptions) -> Result<(Self, usize), ConvolutionError> {
        let ConvolutionOptions { precision, prime, cycle, request_ntt } = *options;

        if cycle < 0 {
            return Err(ConvolutionError::InvalidCycle(cycle));
        }
        let cycle = cycle as usize;

        if precision.is_some() && prime.is_some() {
            return Err(ConvolutionError::AmbiguousMode);
        }
        if let Some(prime) = prime {
            return Ok((Self::Modular { prime }, cycle));
        }
        if request_ntt {
            return Err(ConvolutionError::MissingModulus);
        }
        Ok((Self::Fourier { precision }, cycle))
    }
}

/// Convolution of two unsigned integer sequences, dispatched by hints.
///
/// With a `prime` hint the convolution runs over `GF(prime)` and a
/// non-zero `cycle` folds the result inside the field. Otherwise it runs
/// in the complex domain at the hinted precision, folds by plain
/// summation, and rounds the result back to integers. All hint
/// validation happens before any transform work begins.
#[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
pub fn convolution(
    a: &[u64],
    b: &[u64],
    options: &ConvolutionOptions,
) -> Result<Vec<u64>, ConvolutionError> {
    let (mode, cycle) = ConvolutionMode::resolve(options)?;

    match mode {
        ConvolutionMode::Modular { prime } => {
            let linear = convolution_ntt(a, b, prime)?;
            Ok(if cycle == 0 { linear } else { wrap_mod(&linear, cycle, prime) })
        }
        ConvolutionMode::Fourier { precision } => {
            let prec = dps_to_prec(precision.unwrap_or(DEFAULT_DPS));
            let lift = |seq: &[u64]| -> Vec<Complex> {
                seq.iter().map(|&x| Complex::with_val(prec, x)).collect()
            };
            let linear = convolution_fft(&lift(a), &lift(b), precision);
            let folded = if cycle == 0 { linear } else { wrap(&linear, cycle, prec) };
            Ok(folded.iter().map(rounded_coefficient).collect())
        }
    }
}

/// Round a coefficient that is integral up to floating error back to the
/// integer it represents.
fn rounded_coefficient(value: &Complex) -> u64 {
    let (int, _) = value
        .real()
        .to_integer_round(Round::Nearest)
        .expect("convolution coefficients are finite");
    int.to_u64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        transform::errors::TransformError,
        utils::{add_mod, mul_mod},
    };

    const PRIME: u64 = 19 * (1 << 10) + 1; // 19457

    fn with_prime(prime: u64, cycle: i64) -> ConvolutionOptions {
        ConvolutionOptions { prime: Some(prime), cycle, ..Default::default() }
    }

    #[test]
    fn test_default_mode_is_fourier() {
        assert_eq!(
            ConvolutionMode::resolve(&ConvolutionOptions::default()).unwrap(),
            (ConvolutionMode::Fourier { precision: None }, 0)
        );
    }

    #[test]
    fn test_negative_cycle_is_rejected_first() {
        // an otherwise-ambiguous call still reports the cycle error
        let options = ConvolutionOptions {
            precision: Some(10),
            prime: Some(PRIME),
            cycle: -1,
            request_ntt: false,
        };
        assert_eq!(
            convolution(&[1], &[2], &options),
            Err(ConvolutionError::InvalidCycle(-1))
        );
    }

    #[test]
    fn test_ambiguous_hints_are_rejected() {
        let options = ConvolutionOptions {
            precision: Some(10),
            prime: Some(PRIME),
            ..Default::default()
        };
        assert_eq!(
            convolution(&[1, 2], &[3, 4], &options),
            Err(ConvolutionError::AmbiguousMode)
        );
    }

    #[test]
    fn test_modular_request_needs_modulus() {
        let options = ConvolutionOptions { request_ntt: true, ..Default::default() };
        assert_eq!(
            convolution(&[1, 2], &[3, 4], &options),
            Err(ConvolutionError::MissingModulus)
        );
        // an explicit prime satisfies the request
        let options = ConvolutionOptions {
            request_ntt: true,
            prime: Some(PRIME),
            ..Default::default()
        };
        assert_eq!(convolution(&[2, 3], &[4, 5], &options).unwrap(), vec![8, 22, 15]);
    }

    #[test]
    fn test_fourier_mode_rounds_to_integers() {
        assert_eq!(
            convolution(&[2, 3], &[4, 5], &ConvolutionOptions::default()).unwrap(),
            vec![8, 22, 15]
        );
        assert_eq!(
            convolution(&[2, 5], &[6, 7, 3], &ConvolutionOptions::default()).unwrap(),
            vec![12, 44, 41, 15]
        );
    }

    #[test]
    fn test_fourier_cyclic_fold() {
        let options = ConvolutionOptions { cycle: 3, ..Default::default() };
        assert_eq!(
            convolution(&[1, 2, 3], &[4, 5, 6], &options).unwrap(),
            vec![31, 31, 28]
        );
    }

    #[test]
    fn test_modular_linear_and_cyclic() {
        assert_eq!(
            convolution(&[111, 777], &[888, 444], &with_prime(PRIME, 0)).unwrap(),
            vec![1283, 19351, 14219]
        );
        assert_eq!(
            convolution(&[111, 777], &[888, 444], &with_prime(PRIME, 2)).unwrap(),
            vec![15502, 19351]
        );
    }

    #[test]
    fn test_cycle_longer_than_result_zero_extends() {
        assert_eq!(
            convolution(&[2, 3], &[4, 5], &with_prime(PRIME, 5)).unwrap(),
            vec![8, 22, 15, 0, 0]
        );
        let options = ConvolutionOptions { cycle: 5, ..Default::default() };
        assert_eq!(
            convolution(&[2, 3], &[4, 5], &options).unwrap(),
            vec![8, 22, 15, 0, 0]
        );
    }

    #[test]
    fn test_transform_failures_propagate_unchanged() {
        assert_eq!(
            convolution(&[1, 2, 3], &[4, 5], &with_prime(7, 0)),
            Err(ConvolutionError::Transform(TransformError::NoRootOfUnity {
                prime: 7,
                order: 4,
            }))
        );
    }

    fn direct_cyclic(a: &[u64], b: &[u64], c: usize) -> Vec<u64> {
        let mut out = vec![0u64; c];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                out[(i + j) % c] += x * y;
            }
        }
        out
    }

    fn direct_cyclic_mod(a: &[u64], b: &[u64], c: usize, p: u64) -> Vec<u64> {
        let mut out = vec![0u64; c];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                let slot = (i + j) % c;
                out[slot] = add_mod(out[slot], mul_mod(x, y, p), p);
            }
        }
        out
    }

    proptest! {
        #[test]
        fn prop_fourier_cyclic_matches_direct(
            a in prop::collection::vec(0u64..1000, 1..=16),
            b in prop::collection::vec(0u64..1000, 1..=16),
            cycle in 1i64..8,
        ) {
            let options = ConvolutionOptions { cycle, ..Default::default() };
            prop_assert_eq!(
                convolution(&a, &b, &options).unwrap(),
                direct_cyclic(&a, &b, cycle as usize)
            );
        }

        #[test]
        fn prop_modular_cyclic_matches_direct(
            a in prop::collection::vec(0u64..PRIME, 1..=16),
            b in prop::collection::vec(0u64..PRIME, 1..=16),
            cycle in 1i64..8,
        ) {
            prop_assert_eq!(
                convolution(&a, &b, &with_prime(PRIME, cycle)).unwrap(),
                direct_cyclic_mod(&a, &b, cycle as usize, PRIME)
            );
        }

        #[test]
        fn prop_modes_agree_on_small_inputs(
            a in prop::collection::vec(0u64..100, 1..=12),
            b in prop::collection::vec(0u64..100, 1..=12),
        ) {
            // products stay far below the modulus, so both domains see
            // the plain integer convolution
            let fourier = convolution(&a, &b, &ConvolutionOptions::default()).unwrap();
            let modular = convolution(&a, &b, &with_prime(998_244_353, 0)).unwrap();
            prop_assert_eq!(fourier, modular);
        }
    }
}
