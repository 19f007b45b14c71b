//! Linear convolution over a prime field.

use itertools::Itertools;
use tracing::instrument;

use crate::{
    errors::ConvolutionError,
    transform::ntt::{intt, ntt},
    utils::{mul_mod, pad_to, transform_length},
};

/// Linear convolution of `a` and `b` by number theoretic transform under
/// `prime`.
///
/// The result has length `len(a) + len(b) - 1` and every coefficient
/// lies in `[0, prime)`. An empty input yields the zero sequence of that
/// length with no transform work.
///
/// The modulus must be prime and admit a root of unity whose order is
/// the power-of-two transform length; both conditions are checked by the
/// transform primitive itself and propagate from there unchanged.
#[instrument(skip_all, fields(len_a = a.len(), len_b = b.len(), prime))]
pub fn convolution_ntt(a: &[u64], b: &[u64], prime: u64) -> Result<Vec<u64>, ConvolutionError> {
    let m = (a.len() + b.len()).saturating_sub(1);
    if a.is_empty() || b.is_empty() {
        return Ok(vec![0; m]);
    }

    let n = transform_length(m);
    let fa = pad_to(a, n, 0);
    let fb = pad_to(b, n, 0);

    #[cfg(feature = "parallel")]
    let (fa, fb) = rayon::join(|| ntt(&fa, prime), || ntt(&fb, prime));
    #[cfg(not(feature = "parallel"))]
    let (fa, fb) = (ntt(&fa, prime), ntt(&fb, prime));
    let (fa, fb) = (fa?, fb?);

    // Reduce every product immediately so values never leave the field.
    let product: Vec<u64> = fa
        .iter()
        .zip_eq(&fb)
        .map(|(&x, &y)| mul_mod(x, y, prime))
        .collect();

    let mut out = intt(&product, prime)?;
    out.truncate(m);
    Ok(out)
}
