//! Folding of linear convolution results into cyclic ones.
//!
//! A linear convolution of length `m` folds into a circular convolution
//! of period `c` by summing all terms whose indices agree modulo `c`.
//! Positions at or past `m` contribute the empty sum, so a period no
//! shorter than the input merely zero-extends it.

use rug::Complex;

use crate::utils::add_mod;

/// Fold `seq` into a cyclic sequence of length `cycle` by plain
/// summation: `out[i]` is the sum of all `seq[j]` with `j = i (mod cycle)`.
///
/// Accumulators are allocated at precision `prec`.
#[must_use]
pub fn wrap(seq: &[Complex], cycle: usize, prec: u32) -> Vec<Complex> {
    debug_assert!(cycle > 0);
    let mut out = vec![Complex::new(prec); cycle];
    for (i, term) in seq.iter().enumerate() {
        out[i % cycle] += term;
    }
    out
}

/// Fold `seq` like [`wrap`], reducing every partial sum modulo `prime`
/// so intermediate values never leave the field.
#[must_use]
pub fn wrap_mod(seq: &[u64], cycle: usize, prime: u64) -> Vec<u64> {
    debug_assert!(cycle > 0);
    let mut out = vec![0u64; cycle];
    for (i, &term) in seq.iter().enumerate() {
        let slot = i % cycle;
        out[slot] = add_mod(out[slot], term % prime, prime);
    }
    out
}
