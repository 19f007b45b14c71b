//! Dyadic (bitwise-XOR) and subset convolution over exact integers.
//!
//! Both products index by bitmask rather than by position, so the
//! natural sequence length is the power-of-two ceiling of the longer
//! input and the result keeps that length; there is no linear tail to
//! truncate.

use itertools::Itertools;
use rug::Integer;
use tracing::instrument;

use crate::{
    transform::walsh::{fwht, ifwht},
    utils::{pad_to, transform_length},
};

/// Dyadic convolution of `a` and `b`:
/// `out[k] = sum of a[i] * b[j] over all i ^ j = k`.
///
/// Computed via the Walsh-Hadamard transform. An empty input yields an
/// empty result.
#[must_use]
#[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
pub fn convolution_fwht(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let n = transform_length(a.len().max(b.len()));
    let fa = fwht(&pad_to(a, n, Integer::new()));
    let fb = fwht(&pad_to(b, n, Integer::new()));

    let product: Vec<Integer> = fa
        .iter()
        .zip_eq(&fb)
        .map(|(x, y)| Integer::from(x * y))
        .collect();

    ifwht(&product)
}

/// Subset convolution of `a` and `b`:
/// `out[mask] = sum of a[s] * b[mask \ s] over all submasks s of mask`.
///
/// Computed by direct submask enumeration. An empty input yields an
/// empty result.
#[must_use]
#[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
pub fn convolution_subset(a: &[Integer], b: &[Integer]) -> Vec<Integer> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let n = transform_length(a.len().max(b.len()));
    let a = pad_to(a, n, Integer::new());
    let b = pad_to(b, n, Integer::new());

    let mut out = vec![Integer::new(); n];
    for mask in 0..n {
        // walk the submasks of `mask` down to and including 0
        let mut smask = mask;
        loop {
            out[mask] += Integer::from(&a[smask] * &b[mask ^ smask]);
            if smask == 0 {
                break;
            }
            smask = (smask - 1) & mask;
        }
    }
    out
}
