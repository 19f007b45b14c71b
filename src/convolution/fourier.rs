//! Linear convolution in the complex domain.

use itertools::Itertools;
use rug::Complex;
use tracing::instrument;

use crate::{
    transform::fourier::{DEFAULT_DPS, dps_to_prec, fft, ifft},
    utils::{pad_to, transform_length},
};

/// Linear convolution of `a` and `b` by fast Fourier transform.
///
/// The result has length `len(a) + len(b) - 1` and carries `dps`
/// significant decimal digits, [`DEFAULT_DPS`] when unspecified. An empty
/// input yields the zero sequence of that length with no transform work.
///
/// For integer inputs whose coefficients fit the requested precision the
/// result is exact up to final rounding; other inputs are correct to at
/// least the requested digits.
#[must_use]
#[instrument(skip_all, fields(len_a = a.len(), len_b = b.len()))]
pub fn convolution_fft(a: &[Complex], b: &[Complex], dps: Option<u32>) -> Vec<Complex> {
    let m = (a.len() + b.len()).saturating_sub(1);
    let prec = dps_to_prec(dps.unwrap_or(DEFAULT_DPS));
    if a.is_empty() || b.is_empty() {
        return vec![Complex::new(prec); m];
    }

    let n = transform_length(m);
    let fa = pad_to(a, n, Complex::new(prec));
    let fb = pad_to(b, n, Complex::new(prec));

    #[cfg(feature = "parallel")]
    let (fa, fb) = rayon::join(|| fft(&fa, dps), || fft(&fb, dps));
    #[cfg(not(feature = "parallel"))]
    let (fa, fb) = (fft(&fa, dps), fft(&fb, dps));

    let product: Vec<Complex> = fa
        .iter()
        .zip_eq(&fb)
        .map(|(x, y)| Complex::with_val(prec, x * y))
        .collect();

    let mut out = ifft(&product, dps);
    out.truncate(m);
    out
}
